use std::io::{self, Write};

use game::math::Direction;
use game::Game;

pub fn draw<W: Write>(out: &mut W, game: &Game) -> io::Result<()> {
    let view = game.look_around();
    writeln!(
        out,
        "Day: {}  Money: ${}  Energy: {}",
        view.days, view.money, view.energy
    )?;
    for (row, codes) in view.land.iter().enumerate() {
        let line: String = codes
            .chars()
            .enumerate()
            .map(|(column, code)| {
                let place = [row, column];
                if place == view.position {
                    return farmer_glyph(view.direction);
                }
                match view.plants.iter().find(|plant| plant.place == place) {
                    Some(plant) => plant_glyph(&plant.name, plant.harvestable),
                    None => code,
                }
            })
            .collect();
        writeln!(out, "{}", line)?;
    }
    for item in &view.items {
        let buy = item
            .buy_price
            .map(|price| format!("${}", price))
            .unwrap_or_else(|| "N/A".to_string());
        let marker = if item.selected { '*' } else { ' ' };
        writeln!(
            out,
            "{} {}: {} (sell ${}, buy {})",
            marker, item.name, item.quantity, item.sell_price, buy
        )?;
    }
    out.flush()
}

pub fn help<W: Write>(out: &mut W) -> io::Result<()> {
    let keys: Vec<String> = [Direction::Up, Direction::Left, Direction::Down, Direction::Right]
        .iter()
        .map(|direction| direction.key().to_string())
        .collect();
    writeln!(out, "{:<12} move", keys.join(" "))?;
    writeln!(out, "t / u        till / untill soil under farmer")?;
    writeln!(out, "p h r        plant selected seed / harvest / remove plant")?;
    writeln!(out, "n            next day")?;
    writeln!(out, "buy ITEM     buy one item")?;
    writeln!(out, "sell ITEM    sell one item")?;
    writeln!(out, "select ITEM  take item in hand")?;
    writeln!(out, "deselect     empty hands")?;
    writeln!(out, "load PATH    start over on another map")?;
    writeln!(out, "json         dump farm state")?;
    writeln!(out, "q            quit")
}

fn farmer_glyph(direction: Direction) -> char {
    match direction {
        Direction::Up => '^',
        Direction::Down => 'v',
        Direction::Left => '<',
        Direction::Right => '>',
    }
}

fn plant_glyph(name: &str, harvestable: bool) -> char {
    let glyph = name.chars().next().unwrap_or('*');
    if harvestable {
        glyph.to_ascii_uppercase()
    } else {
        glyph.to_ascii_lowercase()
    }
}
