use serde::{Deserialize, Serialize};

use crate::collections::DictionaryError;
use crate::inventory::{Inventory, InventoryError};
use crate::landscaping::{Landscaping, LandscapingError};
use crate::math::{Direction, Place};
use crate::physics::Physics;
use crate::planting::{Planting, PlantingError};
use crate::timing::Timing;
use crate::trading::{Trading, TradingError};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Action {
    MoveFarmer { direction: Direction },
    TillSoil { place: Place },
    UntillSoil { place: Place },
    PlantCrop { place: Place, seed: String },
    HarvestCrop { place: Place },
    RemoveCrop { place: Place },
    BuyItem { item: String },
    SellItem { item: String },
    SelectItem { item: String },
    DeselectItem,
    NextDay,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Event {
    Landscaping(Vec<Landscaping>),
    Planting(Vec<Planting>),
    Physics(Vec<Physics>),
    Inventory(Vec<Inventory>),
    Trading(Vec<Trading>),
    Timing(Vec<Timing>),
}

impl Event {
    pub fn is_empty(&self) -> bool {
        match self {
            Event::Landscaping(events) => events.is_empty(),
            Event::Planting(events) => events.is_empty(),
            Event::Physics(events) => events.is_empty(),
            Event::Inventory(events) => events.is_empty(),
            Event::Trading(events) => events.is_empty(),
            Event::Timing(events) => events.is_empty(),
        }
    }
}

impl From<Vec<Landscaping>> for Event {
    fn from(events: Vec<Landscaping>) -> Self {
        Self::Landscaping(events)
    }
}

impl From<Vec<Planting>> for Event {
    fn from(events: Vec<Planting>) -> Self {
        Self::Planting(events)
    }
}

impl From<Vec<Physics>> for Event {
    fn from(events: Vec<Physics>) -> Self {
        Self::Physics(events)
    }
}

impl From<Vec<Inventory>> for Event {
    fn from(events: Vec<Inventory>) -> Self {
        Self::Inventory(events)
    }
}

impl From<Vec<Trading>> for Event {
    fn from(events: Vec<Trading>) -> Self {
        Self::Trading(events)
    }
}

impl From<Vec<Timing>> for Event {
    fn from(events: Vec<Timing>) -> Self {
        Self::Timing(events)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum ActionError {
    Landscaping(LandscapingError),
    Planting(PlantingError),
    Inventory(InventoryError),
    Trading(TradingError),
    Knowledge(DictionaryError),
}

impl ActionError {
    /// Rejected gameplay actions leave the farm untouched and are not failures
    /// of the caller. Out of land places and unknown names are.
    pub fn is_rejection(&self) -> bool {
        match self {
            ActionError::Landscaping(LandscapingError::OutOfLand { .. }) => false,
            ActionError::Knowledge(_) => false,
            _ => true,
        }
    }
}

impl From<LandscapingError> for ActionError {
    fn from(error: LandscapingError) -> Self {
        Self::Landscaping(error)
    }
}

impl From<PlantingError> for ActionError {
    fn from(error: PlantingError) -> Self {
        Self::Planting(error)
    }
}

impl From<InventoryError> for ActionError {
    fn from(error: InventoryError) -> Self {
        Self::Inventory(error)
    }
}

impl From<TradingError> for ActionError {
    fn from(error: TradingError) -> Self {
        Self::Trading(error)
    }
}

impl From<DictionaryError> for ActionError {
    fn from(error: DictionaryError) -> Self {
        Self::Knowledge(error)
    }
}
