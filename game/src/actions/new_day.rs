use crate::api::Event;
use crate::{occur, Game};

impl Game {
    /// The only way time goes by: plants grow, farmer rests.
    pub fn new_day(&mut self) -> Vec<Event> {
        occur![
            self.planting.update(),
            self.physics.restore_energy(),
            self.timing.update(),
        ]
    }
}
