//! Lexer module.
//!
//! This module organizes the scanner into smaller, focused components:
//! - `core` - Main Lexer struct, dispatch, and iteration
//! - `phrase` - Quoted phrase state machine
//! - `term` - Term and field separator lexing
//! - `whitespace` - Whitespace run lexing

mod core;
mod phrase;
mod term;
mod whitespace;

pub use self::core::Lexer;
pub use self::phrase::PhraseState;
