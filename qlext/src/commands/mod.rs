//! Command modules for the qlext CLI.
//!
//! This module contains implementations for all available subcommands.
//! Each subcommand is implemented in its own file following a standardized pattern.

pub mod traits;
pub mod common;

pub mod check;
pub mod lex;

// Re-export command types
pub use check::{CheckCommand, CheckSettings};
pub use lex::{LexCommand, LexSettings};
pub use traits::Command;
