use crate::math::{Direction, Place};
use crate::physics::Physics::{BodyMoved, BodyTurned, EnergyChanged};
use crate::physics::{Physics, PhysicsDomain};

impl PhysicsDomain {
    /// Turns body to direction and steps to destination if there is one
    /// and body has energy left.
    ///
    /// Destination is `None` when the step is blocked by land.
    pub fn move_body(
        &mut self,
        direction: Direction,
        destination: Option<Place>,
    ) -> impl FnOnce() -> Vec<Physics> + '_ {
        let costs_when_blocked = self.blocked_move_costs_energy;
        let body = &mut self.body;
        move || {
            let mut events = vec![];
            if body.direction != direction {
                body.direction = direction;
                events.push(BodyTurned { direction });
            }
            let destination = destination.filter(|_| body.energy > 0);
            match destination {
                Some(position) => {
                    body.position = position;
                    body.energy -= 1;
                    events.push(BodyMoved { position });
                    events.push(EnergyChanged {
                        energy: body.energy,
                    });
                }
                None if costs_when_blocked && body.energy > 0 => {
                    body.energy -= 1;
                    events.push(EnergyChanged {
                        energy: body.energy,
                    });
                }
                None => {}
            }
            events
        }
    }
}
