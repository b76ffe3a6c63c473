use crate::api::{ActionError, Event};
use crate::math::Place;
use crate::{occur, Game};

impl Game {
    pub fn till_soil(&mut self, place: Place) -> Result<Vec<Event>, ActionError> {
        let till_place = self.landscaping.till_place(place)?;
        Ok(occur![till_place()])
    }
}
