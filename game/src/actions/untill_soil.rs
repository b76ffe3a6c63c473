use crate::api::{ActionError, Event};
use crate::math::Place;
use crate::{occur, Game};

impl Game {
    pub fn untill_soil(&mut self, place: Place) -> Result<Vec<Event>, ActionError> {
        let occupied = self.planting.has_plant(place);
        let untill_place = self.landscaping.untill_place(place, occupied)?;
        Ok(occur![untill_place()])
    }
}
