use crate::api::{ActionError, Event};
use crate::math::Place;
use crate::{occur, Game};

impl Game {
    /// Clears place after [`crate::planting::Plant::harvest`] done by caller.
    /// Plant of regrowing species stays in place.
    pub fn harvest_plant(&mut self, place: Place) -> Result<Vec<Event>, ActionError> {
        self.landscaping.get_surface(place)?;
        let release_plant = self.planting.release_plant(place)?;
        Ok(occur![release_plant()])
    }
}
