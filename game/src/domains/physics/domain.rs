use serde::Serialize;

use crate::math::{Direction, Place};

#[derive(Default)]
pub struct PhysicsDomain {
    pub body: Body,
    pub blocked_move_costs_energy: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Body {
    pub position: Place,
    pub direction: Direction,
    pub energy: u32,
    pub max_energy: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Physics {
    BodyTurned { direction: Direction },
    BodyMoved { position: Place },
    EnergyChanged { energy: u32 },
}
