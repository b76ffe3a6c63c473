use crate::api::{ActionError, Event};
use crate::math::Place;
use crate::{occur, Game};

impl Game {
    /// Puts fruits of mature plant into backpack.
    /// Plant of species which does not regrow is removed.
    pub fn harvest_crop(&mut self, place: Place) -> Result<Vec<Event>, ActionError> {
        self.landscaping.get_surface(place)?;
        let ((item, quantity), harvest) = self.planting.harvest_plant(place)?;
        let increase_item = self.inventory.increase_item(item, quantity)?;
        let mut events = occur![harvest(), increase_item()];
        events.extend(self.harvest_plant(place)?);
        Ok(events)
    }
}
