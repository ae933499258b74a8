// Aggregate reports over the ledger

pub mod period;
pub mod pto;

pub use period::*;
pub use pto::*;
