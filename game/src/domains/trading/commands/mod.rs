pub use earn_money::*;
pub use spend_money::*;

mod earn_money;
mod spend_money;
