pub use decrease_item::*;
pub use increase_item::*;
pub use select_item::*;

mod decrease_item;
mod increase_item;
mod select_item;
