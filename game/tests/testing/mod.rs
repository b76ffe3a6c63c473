#![allow(dead_code)]

use game::api::{Action, ActionError, Event};
use game::inventory::ItemKey;
use game::landscaping::Surface;
use game::math::{Direction, Place};
use game::model::{FarmMap, Knowledge, Rules};
use game::planting::{Plant, PlantKey};
use game::trading::Wallet;
use game::Game;

/// Four rows of farm with ground border on the right and bottom.
pub const TEST_MAP: &str = "
UUUUG
USSUG
UUUUG
GGGGG
";

pub const OUTSIDE: Place = [9, 9];

pub struct GameTestScenario {
    game: Game,
    map: String,
    current_action_result: Result<Vec<Event>, ActionError>,
}

impl GameTestScenario {
    pub fn new() -> Self {
        let known = Knowledge::standard().unwrap();
        let map = FarmMap::parse(TEST_MAP).unwrap();
        GameTestScenario {
            game: Game::new(known, map).unwrap(),
            map: TEST_MAP.to_string(),
            current_action_result: Ok(vec![]),
        }
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    pub fn item_key(&self, name: &str) -> ItemKey {
        self.game.known.items.find(name).unwrap().id
    }

    pub fn plant_key(&self, name: &str) -> PlantKey {
        self.game.known.plants.find(name).unwrap().id
    }

    pub fn given_map(mut self, map: &str) -> Self {
        let farm = FarmMap::parse(map).unwrap();
        self.game.load_map(farm).unwrap();
        self.map = map.to_string();
        self
    }

    pub fn given_rules<F>(mut self, change: F) -> Self
    where
        F: FnOnce(&mut Rules),
    {
        let mut known = self.game.known.clone();
        change(&mut known.rules);
        let map = FarmMap::parse(&self.map).unwrap();
        self.game = Game::new(known, map).unwrap();
        self
    }

    pub fn given_item(mut self, item: &str, quantity: u32) -> Self {
        self.game.add_item(item, quantity).unwrap();
        self
    }

    pub fn given_money(mut self, money: u32) -> Self {
        self.game.trading.load_wallet(Wallet { money });
        self
    }

    pub fn given_energy(mut self, energy: u32) -> Self {
        self.game.physics.body.energy = energy;
        self
    }

    pub fn given_position(mut self, position: Place) -> Self {
        self.game.physics.body.position = position;
        self
    }

    pub fn given_plant(mut self, crop: &str, place: Place, stage: u8) -> Self {
        let kind = self.game.known.plants.find(crop).unwrap();
        assert_eq!(self.game.landscaping.get_surface(place), Ok(Surface::Soil));
        self.game
            .planting
            .load_plants(vec![(place, Plant { kind, stage })]);
        self
    }

    pub fn when_farmer_perform(mut self, action: Action) -> Self {
        self.current_action_result = self.game.perform_action(action);
        self
    }

    pub fn when_try(mut self, action: Action) -> Self {
        self.current_action_result = self.game.try_action(action);
        self
    }

    pub fn when_game<F>(mut self, operation: F) -> Self
    where
        F: FnOnce(&mut Game) -> Result<Vec<Event>, ActionError>,
    {
        self.current_action_result = operation(&mut self.game);
        self
    }

    pub fn when_days_pass(mut self, days: u32) -> Self {
        for _ in 0..days {
            self.game.new_day();
        }
        self
    }

    pub fn then_events<F>(self, expected_events: F) -> Self
    where
        F: FnOnce(&Self) -> Vec<Event>,
    {
        let actual_events = match &self.current_action_result {
            Ok(events) => format!("{:?}", events),
            Err(error) => panic!("action failed with {:?}", error),
        };
        let expected_events = format!("{:?}", expected_events(&self));
        assert_eq!(actual_events, expected_events);
        self
    }

    pub fn then_nothing_happened(self) -> Self {
        assert_eq!(self.current_action_result, Ok(vec![]));
        self
    }

    pub fn then_error<F>(self, expected: F) -> Self
    where
        F: FnOnce(&Self) -> ActionError,
    {
        let expected = Err(expected(&self));
        assert_eq!(self.current_action_result, expected);
        self
    }

    pub fn then_surface(self, place: Place, expected: Surface) -> Self {
        assert_eq!(self.game.landscaping.get_surface(place), Ok(expected));
        self
    }

    pub fn then_plant_stage(self, place: Place, expected: u8) -> Self {
        let plant = self.game.plants().get(&place);
        assert_eq!(plant.map(|plant| plant.stage), Some(expected));
        self
    }

    pub fn then_harvestable(self, place: Place, expected: bool) -> Self {
        let plant = self.game.plants().get(&place);
        assert_eq!(plant.map(Plant::can_harvest), Some(expected));
        self
    }

    pub fn then_no_plant(self, place: Place) -> Self {
        assert!(
            !self.game.plants().contains_key(&place),
            "plant found at {:?}",
            place
        );
        self
    }

    pub fn then_item(self, item: &str, expected: u32) -> Self {
        assert_eq!(self.game.item_quantity(item), Ok(expected));
        self
    }

    pub fn then_selected(self, expected: Option<&str>) -> Self {
        assert_eq!(self.game.selected_item().as_deref(), expected);
        self
    }

    pub fn then_money(self, expected: u32) -> Self {
        assert_eq!(self.game.money(), expected);
        self
    }

    pub fn then_energy(self, expected: u32) -> Self {
        assert_eq!(self.game.farmer_energy(), expected);
        self
    }

    pub fn then_position(self, expected: Place) -> Self {
        assert_eq!(self.game.farmer_position(), expected);
        self
    }

    pub fn then_direction(self, expected: Direction) -> Self {
        assert_eq!(self.game.farmer_direction(), expected);
        self
    }

    pub fn then_days(self, expected: u32) -> Self {
        assert_eq!(self.game.days_elapsed(), expected);
        self
    }
}
