//! Hour Tracker - a command-line tool for tracking daily hours against time codes
//!
//! This library provides the core functionality for `ht`, including:
//! - The ledger data model and its JSON persistence
//! - Duration and date expression parsing
//! - Tracking with a daily hour cap, and the time code registry
//! - Daily/weekly/monthly/yearly reports and PTO accrual
//! - CLI command parsing and execution
//!
//! # Example
//!
//! ```no_run
//! use ht::cli::run;
//!
//! fn main() {
//!     if let Err(e) = run() {
//!         eprintln!("Error: {}", e);
//!         std::process::exit(1);
//!     }
//! }
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod models;
pub mod repo;
pub mod report;
pub mod store;
pub mod utils;
