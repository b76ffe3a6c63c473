use std::env;
use std::io::{self, BufRead, Write};

use anyhow::{anyhow, Context};
use game::model::{FarmMap, Knowledge};
use game::Game;
use log::{error, info};

use crate::input::{parse_command, Command};

mod input;
mod render;

const DEFAULT_MAP: &str = "assets/maps/farm.txt";

fn main() -> anyhow::Result<()> {
    env_logger::init();
    info!("OS: {}", env::consts::OS);
    let known = match env::var("FARM_KNOWLEDGE") {
        Ok(path) => Knowledge::load(&path).with_context(|| format!("knowledge {}", path))?,
        Err(_) => Knowledge::standard()?,
    };
    let map_path = env::args().nth(1).unwrap_or_else(|| DEFAULT_MAP.to_string());
    let map = FarmMap::load(&map_path).with_context(|| format!("map {}", map_path))?;
    let mut game = Game::new(known, map)?;

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    render::draw(&mut stdout, &game)?;
    for line in stdin.lock().lines() {
        let line = line?;
        let command = match parse_command(&line, &game) {
            Ok(command) => command,
            Err(message) => {
                writeln!(stdout, "{}", message)?;
                continue;
            }
        };
        match command {
            Command::Quit => break,
            Command::Help => render::help(&mut stdout)?,
            Command::Inspect => {
                writeln!(stdout, "{}", serde_json::to_string_pretty(&game.look_around())?)?;
            }
            Command::Load(path) => match FarmMap::load(&path) {
                Ok(map) => {
                    if let Err(error) = game.load_map(map) {
                        error!("Unable to load {}: {}", path, error);
                    }
                }
                Err(error) => error!("Unable to read {}: {}", path, error),
            },
            Command::Perform(action) => {
                let events = game
                    .perform_action(action)
                    .map_err(|error| anyhow!("model refused action: {:?}", error));
                match events {
                    Ok(events) => info!("Events {}", serde_json::to_string(&events)?),
                    Err(error) => error!("{}", error),
                }
            }
            Command::Nothing => {}
        }
        render::draw(&mut stdout, &game)?;
    }
    info!("Bye!");
    Ok(())
}
