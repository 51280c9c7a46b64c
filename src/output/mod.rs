//! Terminal output formatting
//!
//! Colored tiles, the board and keyboard, and session statistics.

pub mod display;
pub mod formatters;

pub use display::{print_board, print_comparison, print_outcome, print_stats};
