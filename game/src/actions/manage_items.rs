use crate::api::{ActionError, Event};
use crate::{occur, Game};

impl Game {
    pub fn add_item(&mut self, item: &str, quantity: u32) -> Result<Vec<Event>, ActionError> {
        let kind = self.known.items.find(item)?;
        let increase_item = self.inventory.increase_item(kind.id, quantity)?;
        Ok(occur![increase_item()])
    }

    pub fn remove_item(&mut self, item: &str, quantity: u32) -> Result<Vec<Event>, ActionError> {
        let kind = self.known.items.find(item)?;
        let decrease_item = self.inventory.decrease_item(kind.id, quantity)?;
        Ok(occur![decrease_item()])
    }

    pub fn select_item(&mut self, item: &str) -> Result<Vec<Event>, ActionError> {
        let kind = self.known.items.find(item)?;
        let select_item = self.inventory.select_item(kind.id)?;
        Ok(occur![select_item()])
    }

    pub fn deselect_item(&mut self) -> Vec<Event> {
        occur![self.inventory.deselect_item()]
    }
}
