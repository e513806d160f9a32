//! Shared test utilities available to both unit and integration tests.
//!
//! Enabled via `#[cfg(test)]` (unit tests) or the `testkit` feature
//! (integration tests).
//!
//! # Modules
//!
//! - [`console`] — `ScriptedConsole`, a [`Console`](crate::port::inbound::console::Console)
//!   fed from a list of answers that records everything printed.
//! - [`domain`] — Builders for stored records with fixed timestamps.

pub mod console;
pub mod domain;
