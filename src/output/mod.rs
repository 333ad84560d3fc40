//! Output module for run reporting
//!
//! This module records what a run did and prints the end-of-run summary.

pub mod stats;

pub use stats::{print_report, RunReport};
