pub mod date;
pub mod duration;
pub mod fuzzy;

pub use date::parse_date_expr;
pub use duration::parse_duration;
