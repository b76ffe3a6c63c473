use crate::api::{ActionError, Event};
use crate::landscaping::Surface;
use crate::math::Place;
use crate::planting::Plant;
use crate::{occur, Game};

impl Game {
    pub fn add_plant(&mut self, place: Place, plant: Plant) -> Result<Vec<Event>, ActionError> {
        self.landscaping.ensure_surface(place, Surface::Soil)?;
        let create_plant = self.planting.create_plant(place, plant)?;
        Ok(occur![create_plant()])
    }
}
