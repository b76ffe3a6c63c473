use log::{debug, info};
pub use domains::*;

use crate::api::{Action, ActionError, Event};
use crate::data::DataError;
use crate::inventory::InventoryDomain;
use crate::landscaping::LandscapingDomain;
use crate::math::TileMath;
use crate::model::{FarmMap, Knowledge};
use crate::physics::{Body, PhysicsDomain};
use crate::planting::PlantingDomain;
use crate::timing::{Calendar, TimingDomain};
use crate::trading::{TradingDomain, Wallet};

mod actions;
pub mod api;
pub mod collections;
pub mod data;
mod domains;
pub mod math;
pub mod model;
pub mod view;

/// Collects domain events into game events skipping empty ones.
#[macro_export]
macro_rules! occur {
    () => (Vec::<$crate::api::Event>::new());
    ($($events:expr),+ $(,)?) => {{
        let events: Vec<$crate::api::Event> = vec![$($events.into()),+];
        events
            .into_iter()
            .filter(|event| !event.is_empty())
            .collect::<Vec<$crate::api::Event>>()
    }};
}

pub struct Game {
    pub known: Knowledge,
    pub landscaping: LandscapingDomain,
    pub planting: PlantingDomain,
    pub physics: PhysicsDomain,
    pub inventory: InventoryDomain,
    pub trading: TradingDomain,
    pub timing: TimingDomain,
}

impl Game {
    pub fn new(known: Knowledge, map: FarmMap) -> Result<Self, DataError> {
        let rules = known.rules.clone();
        let start = map.start.unwrap_or(rules.start);
        if !start.inside(map.land.bounds()) {
            return Err(DataError::StartOutOfLand { start });
        }
        let mut items = vec![];
        for (name, quantity) in &rules.items {
            items.push((known.items.find(name)?.id, *quantity));
        }

        let mut game = Self {
            known,
            landscaping: LandscapingDomain::default(),
            planting: PlantingDomain::default(),
            physics: PhysicsDomain::default(),
            inventory: InventoryDomain::default(),
            trading: TradingDomain::default(),
            timing: TimingDomain::default(),
        };
        game.landscaping
            .load_land(map.land, rules.movement.ground_passable);
        let body = Body {
            position: start,
            direction: rules.direction,
            energy: rules.max_energy,
            max_energy: rules.max_energy,
        };
        game.physics
            .load_body(body, rules.movement.blocked_move_costs_energy);
        game.inventory.load_items(items);
        game.trading.load_wallet(Wallet { money: rules.money });
        game.timing.load_calendar(Calendar::default());
        info!("Farmer starts at {:?} with ${}", start, rules.money);
        Ok(game)
    }

    /// Replaces the whole farm with a new one built from map.
    /// Current farm stays untouched if map can't be used.
    pub fn load_map(&mut self, map: FarmMap) -> Result<(), DataError> {
        let game = Game::new(self.known.clone(), map)?;
        *self = game;
        Ok(())
    }

    /// Performs action treating rejected gameplay as no-op.
    pub fn perform_action(&mut self, action: Action) -> Result<Vec<Event>, ActionError> {
        match self.try_action(action.clone()) {
            Err(error) if error.is_rejection() => {
                info!("Action {:?} rejected: {:?}", action, error);
                Ok(vec![])
            }
            result => result,
        }
    }

    pub fn try_action(&mut self, action: Action) -> Result<Vec<Event>, ActionError> {
        debug!("Perform {:?}", action);
        match action {
            Action::MoveFarmer { direction } => self.move_player(direction),
            Action::TillSoil { place } => self.till_soil(place),
            Action::UntillSoil { place } => self.untill_soil(place),
            Action::PlantCrop { place, seed } => self.plant_crop(place, &seed),
            Action::HarvestCrop { place } => self.harvest_crop(place),
            Action::RemoveCrop { place } => self.remove_plant(place),
            Action::BuyItem { item } => self.buy_item(&item),
            Action::SellItem { item } => self.sell_item(&item),
            Action::SelectItem { item } => self.select_item(&item),
            Action::DeselectItem => Ok(self.deselect_item()),
            Action::NextDay => Ok(self.new_day()),
        }
    }
}
