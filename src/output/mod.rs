//! Terminal output formatting
//!
//! Display utilities for round feedback, scan reports, and result printing.

pub mod display;
pub mod formatters;

pub use display::{
    print_game_result, print_round_feedback, print_scan_report, print_simulation_result,
};
