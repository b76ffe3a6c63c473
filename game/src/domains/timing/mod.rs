pub use domain::*;

mod domain;
mod loading;
mod update;
