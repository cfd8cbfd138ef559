//! Command trait for the qlext CLI.
//!
//! This module defines the standard command trait that all commands
//! implement so `main` can dispatch them uniformly.

use std::io::Write;

use crate::error::Result;

/// Standard command trait that all qlext commands must implement.
///
/// # Type Parameters
/// * `Output` - The summary returned by this command
pub trait Command {
    /// The summary type returned by this command.
    type Output;

    /// Get the command name.
    fn name() -> &'static str;

    /// Execute the command, writing its report to `out`.
    ///
    /// # Returns
    /// * `Result<Self::Output>` - The command summary or an error
    fn execute(&self, out: &mut dyn Write) -> Result<Self::Output>;
}
