//! Wordle Game
//!
//! The word-guessing game in the terminal: six tries to find a hidden
//! five-letter word, with colored feedback after every guess and statistics
//! kept across rounds.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_game::core::{LetterStatus, compare};
//!
//! let statuses = compare("radar", "arbor").unwrap();
//! assert_eq!(statuses[0], LetterStatus::Misplaced);
//! assert_eq!(statuses[4], LetterStatus::Correct);
//! ```

// Core domain types
pub mod core;

// Rounds, keyboard knowledge and session statistics
pub mod game;

pub mod error;

// Word lists
pub mod wordlists;

// Guess validation
pub mod input;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;

pub mod config;
pub mod logging;
