pub use functions::*;

mod functions;
