use std::collections::BTreeMap;

use serde::Serialize;

use crate::collections::DictionaryError;
use crate::math::{Direction, Place};
use crate::planting::Plant;
use crate::Game;

/// Everything presentation needs to redraw the farm.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FarmView {
    pub days: u32,
    pub money: u32,
    pub energy: u32,
    pub position: Place,
    pub direction: Direction,
    pub land: Vec<String>,
    pub plants: Vec<PlantView>,
    pub items: Vec<ItemView>,
    pub selected: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlantView {
    pub place: Place,
    pub name: String,
    pub stage: u8,
    pub harvestable: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ItemView {
    pub name: String,
    pub quantity: u32,
    pub buy_price: Option<u32>,
    pub sell_price: u32,
    pub selected: bool,
}

impl Game {
    pub fn dimensions(&self) -> [usize; 2] {
        self.landscaping.land.bounds()
    }

    pub fn land(&self) -> Vec<String> {
        self.landscaping.land.rows_codes()
    }

    pub fn plants(&self) -> &BTreeMap<Place, Plant> {
        &self.planting.plants
    }

    pub fn farmer_position(&self) -> Place {
        self.physics.body.position
    }

    pub fn farmer_direction(&self) -> Direction {
        self.physics.body.direction
    }

    pub fn farmer_energy(&self) -> u32 {
        self.physics.body.energy
    }

    pub fn money(&self) -> u32 {
        self.trading.wallet.money
    }

    pub fn days_elapsed(&self) -> u32 {
        self.timing.calendar.days
    }

    pub fn item_quantity(&self, item: &str) -> Result<u32, DictionaryError> {
        let kind = self.known.items.find(item)?;
        Ok(self.inventory.backpack.count(kind.id))
    }

    /// Items with non zero quantity by name.
    pub fn inventory(&self) -> BTreeMap<String, u32> {
        self.known
            .items
            .iter()
            .map(|kind| (kind.name.clone(), self.inventory.backpack.count(kind.id)))
            .filter(|(_, quantity)| *quantity > 0)
            .collect()
    }

    pub fn selected_item(&self) -> Option<String> {
        let selected = self.inventory.backpack.selected?;
        self.known
            .items
            .get(selected)
            .ok()
            .map(|kind| kind.name.clone())
    }

    pub fn look_at_plant(&self, place: Place, plant: &Plant) -> PlantView {
        PlantView {
            place,
            name: plant.kind.name.clone(),
            stage: plant.stage,
            harvestable: plant.can_harvest(),
        }
    }

    pub fn look_around(&self) -> FarmView {
        let plants = self
            .planting
            .plants
            .iter()
            .map(|(place, plant)| self.look_at_plant(*place, plant))
            .collect();
        let backpack = &self.inventory.backpack;
        let items = self
            .known
            .items
            .iter()
            .map(|kind| ItemView {
                name: kind.name.clone(),
                quantity: backpack.count(kind.id),
                buy_price: kind.buy_price,
                sell_price: kind.sell_price,
                selected: backpack.selected == Some(kind.id),
            })
            .collect();
        let body = &self.physics.body;
        FarmView {
            days: self.days_elapsed(),
            money: self.money(),
            energy: body.energy,
            position: body.position,
            direction: body.direction,
            land: self.land(),
            plants,
            items,
            selected: self.selected_item(),
        }
    }
}
