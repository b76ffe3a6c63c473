use game::api::Action;
use game::math::Direction;
use game::Game;

pub enum Command {
    Perform(Action),
    Load(String),
    Inspect,
    Help,
    Quit,
    Nothing,
}

/// Translates one input line: `wasd` to move, `t`/`u` to till and untill,
/// `p` plants selected seed, `h` harvests, `r` removes plant and `n` starts
/// next day. Shop commands take item name.
pub fn parse_command(line: &str, game: &Game) -> Result<Command, String> {
    let line = line.trim();
    let (word, argument) = match line.split_once(' ') {
        Some((word, argument)) => (word, argument.trim().to_string()),
        None => (line, String::new()),
    };
    let place = game.farmer_position();
    let command = match word {
        "" => Command::Nothing,
        "q" | "quit" => Command::Quit,
        "?" | "help" => Command::Help,
        "json" => Command::Inspect,
        "deselect" => Command::Perform(Action::DeselectItem),
        "n" | "next" => Command::Perform(Action::NextDay),
        "t" => Command::Perform(Action::TillSoil { place }),
        "u" => Command::Perform(Action::UntillSoil { place }),
        "h" => Command::Perform(Action::HarvestCrop { place }),
        "r" => Command::Perform(Action::RemoveCrop { place }),
        "p" => match game.selected_item() {
            Some(seed) => Command::Perform(Action::PlantCrop { place, seed }),
            None => return Err("select seeds first".to_string()),
        },
        "buy" | "sell" | "select" | "load" if argument.is_empty() => {
            return Err(format!("{} what?", word))
        }
        "buy" => Command::Perform(Action::BuyItem { item: argument }),
        "sell" => Command::Perform(Action::SellItem { item: argument }),
        "select" => Command::Perform(Action::SelectItem { item: argument }),
        "load" => Command::Load(argument),
        key => {
            let direction = match key.chars().collect::<Vec<_>>().as_slice() {
                [key] => Direction::from_key(*key),
                _ => None,
            };
            match direction {
                Some(direction) => Command::Perform(Action::MoveFarmer { direction }),
                None => return Err(format!("unknown command {:?}, try help", key)),
            }
        }
    };
    Ok(command)
}
