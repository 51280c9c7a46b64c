//! Command implementations

pub mod check;
pub mod play;

pub use check::run_check;
pub use play::run_play;
