use crate::api::{ActionError, Event};
use crate::math::{Direction, TileMath};
use crate::{occur, Game};

impl Game {
    /// Turns farmer and steps one tile if land lets through.
    /// Leaving the farm is blocked the same way as impassable ground.
    pub fn move_player(&mut self, direction: Direction) -> Result<Vec<Event>, ActionError> {
        let position = self.physics.body.position;
        let destination = match position.step(direction, self.landscaping.land.bounds()) {
            Some(place) if self.landscaping.is_passable(place)? => Some(place),
            _ => None,
        };
        let move_body = self.physics.move_body(direction, destination);
        Ok(occur![move_body()])
    }
}
