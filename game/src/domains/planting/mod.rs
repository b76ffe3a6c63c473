pub use commands::*;
pub use domain::*;
pub use queries::*;

mod commands;
mod domain;
mod loading;
mod queries;
mod update;
