use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::collections::Shared;
use crate::inventory::ItemKey;
use crate::math::Place;

#[derive(Default)]
pub struct PlantingDomain {
    pub plants: BTreeMap<Place, Plant>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlantKey(pub usize);

/// Growth and harvest rules of one species.
#[derive(Debug)]
pub struct PlantKind {
    pub id: PlantKey,
    pub name: String,
    /// Last growth stage, plant never grows beyond it.
    pub stages: u8,
    /// First stage at which plant can be harvested.
    pub maturity: u8,
    pub product: ItemKey,
    pub fruits: u32,
    /// Stage a plant returns to after harvest, `None` if species dies on harvest.
    pub regrowth: Option<u8>,
}

#[derive(Debug, Clone)]
pub struct Plant {
    pub kind: Shared<PlantKind>,
    pub stage: u8,
}

impl Plant {
    pub fn new(kind: Shared<PlantKind>) -> Self {
        Self { kind, stage: 0 }
    }

    pub fn advance_growth(&mut self) {
        if self.stage < self.kind.stages {
            self.stage += 1;
        }
    }

    pub fn can_harvest(&self) -> bool {
        self.stage >= self.kind.maturity
    }

    pub fn regrows(&self) -> bool {
        self.kind.regrowth.is_some()
    }

    /// Takes fruits off the plant.
    ///
    /// Caller checks [`Plant::can_harvest`] first and removes plant
    /// of species which does not regrow.
    pub fn harvest(&mut self) -> (ItemKey, u32) {
        debug_assert!(self.can_harvest(), "harvest of immature {:?}", self.kind.name);
        if let Some(regrowth) = self.kind.regrowth {
            self.stage = regrowth;
        }
        (self.kind.product, self.kind.fruits)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Planting {
    PlantCreated { place: Place, kind: PlantKey },
    PlantGrown { place: Place, stage: u8 },
    PlantHarvested { place: Place, stage: u8 },
    PlantDestroyed { place: Place },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum PlantingError {
    PlantNotFound { place: Place },
    PlaceOccupied { place: Place },
    NotReadyToHarvest { place: Place, stage: u8 },
}
