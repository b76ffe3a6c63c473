use std::collections::BTreeMap;

use serde::Deserialize;

use crate::collections::Dictionary;
use crate::inventory::{ItemKey, ItemKind};
use crate::landscaping::Land;
use crate::math::{Direction, Place};
use crate::planting::{PlantKey, PlantKind};

#[derive(Default, Clone)]
pub struct Knowledge {
    pub items: Dictionary<ItemKey, ItemKind>,
    pub plants: Dictionary<PlantKey, PlantKind>,
    pub rules: Rules,
}

/// Starting conditions of a new farm.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Rules {
    pub max_energy: u32,
    pub money: u32,
    pub items: BTreeMap<String, u32>,
    /// Farmer position when map has no start marker.
    pub start: Place,
    pub direction: Direction,
    pub movement: MovementRules,
}

impl Default for Rules {
    fn default() -> Self {
        Self {
            max_energy: 100,
            money: 50,
            items: BTreeMap::new(),
            start: [0, 0],
            direction: Direction::Down,
            movement: MovementRules::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct MovementRules {
    pub ground_passable: bool,
    pub blocked_move_costs_energy: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FarmMap {
    pub land: Land,
    pub start: Option<Place>,
}

impl FarmMap {
    pub const START: char = 'P';
}
