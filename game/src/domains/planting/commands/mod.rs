pub use create_plant::*;
pub use destroy_plant::*;
pub use harvest_plant::*;
pub use release_plant::*;

mod create_plant;
mod destroy_plant;
mod harvest_plant;
mod release_plant;
