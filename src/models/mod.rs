// Core data models for Hour Tracker

pub mod ledger;

pub use ledger::*;
