//! Line-oriented user interaction.
//!
//! The menu drives a single prompt at a time: each call to
//! [`Console::prompt`] blocks until one line of input arrives.

use crate::error::Result;

/// Prompt/response surface used by the interactive menu.
pub trait Console {
    /// Ask a question and wait for one line of input, without its line ending.
    ///
    /// Returns `Ok(None)` once input is exhausted.
    ///
    /// # Errors
    /// Returns an error if the underlying input cannot be read.
    fn prompt(&mut self, question: &str) -> Result<Option<String>>;

    /// Write one line of output.
    ///
    /// # Errors
    /// Returns an error if the underlying output cannot be written.
    fn print(&mut self, line: &str) -> Result<()>;

    /// Stop accepting input. Later prompts return `Ok(None)`.
    fn close(&mut self) {}
}
