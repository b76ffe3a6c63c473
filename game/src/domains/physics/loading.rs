use crate::physics::{Body, PhysicsDomain};

impl PhysicsDomain {
    pub fn load_body(&mut self, body: Body, blocked_move_costs_energy: bool) {
        self.body = body;
        self.blocked_move_costs_energy = blocked_move_costs_energy;
    }
}
