pub use move_body::*;
pub use restore_energy::*;

mod move_body;
mod restore_energy;
