use crate::api::{ActionError, Event};
use crate::inventory::FunctionsQuery;
use crate::landscaping::Surface;
use crate::math::Place;
use crate::planting::Plant;
use crate::{occur, Game};

impl Game {
    pub fn plant_crop(&mut self, place: Place, seed: &str) -> Result<Vec<Event>, ActionError> {
        let item = self.known.items.find(seed)?;
        let key = item.functions.as_seeds()?;
        let kind = self.known.plants.get(key)?;
        self.landscaping.ensure_surface(place, Surface::Soil)?;
        let decrease_item = self.inventory.decrease_item(item.id, 1)?;
        let create_plant = self.planting.create_plant(place, Plant::new(kind))?;
        Ok(occur![decrease_item(), create_plant()])
    }
}
