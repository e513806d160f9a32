//! Styled console lines.
//!
//! Each helper returns the rendered line instead of printing it, so the menu
//! can route everything through its [`Console`](crate::port::inbound::console::Console).
//! Colors are applied only when stdout supports them.

use owo_colors::{OwoColorize, Stream};

/// A completed change, e.g. a row was inserted.
#[must_use]
pub fn success(message: &str) -> String {
    format!(
        "  {} {}",
        "✓".if_supports_color(Stream::Stdout, |s| s.green()),
        message
    )
}

/// Neutral information, e.g. a row already existed.
#[must_use]
pub fn notice(message: &str) -> String {
    format!(
        "  {} {}",
        "•".if_supports_color(Stream::Stdout, |s| s.cyan()),
        message
    )
}

#[must_use]
pub fn warning(message: &str) -> String {
    format!(
        "  {} {}",
        "⚠".if_supports_color(Stream::Stdout, |s| s.yellow()),
        message
    )
}

#[must_use]
pub fn error(message: &str) -> String {
    format!(
        "  {} {}",
        "×".if_supports_color(Stream::Stdout, |s| s.red()),
        message
    )
}

/// A heading printed above a block of output.
#[must_use]
pub fn section(title: &str) -> String {
    format!("{}", title.if_supports_color(Stream::Stdout, |s| s.bold()))
}
