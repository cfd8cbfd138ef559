//! qlex-util - Foundation types shared by the qlex crates
//!
//! This crate holds the pieces every stage of query processing agrees on:
//! byte spans into the query text and the line index that turns them into
//! line and column positions.
//!
//! # Modules
//!
//! - [`span`] - Half-open byte ranges and the line index

#![warn(missing_docs)]

pub mod span;

pub use span::{LineCol, LineIndex, Span};
