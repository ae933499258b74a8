pub mod code;
pub mod day;

pub use code::*;
pub use day::*;
