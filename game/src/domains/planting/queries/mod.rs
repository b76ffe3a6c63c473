pub use get_plant::*;

mod get_plant;
