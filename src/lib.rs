//! Sakila - browse and register countries, cities and addresses.
//!
//! An interactive terminal menu over the `country`, `city` and `address`
//! tables of the sakila sample schema, stored in SQLite through Diesel.
//!
//! # Architecture
//!
//! The crate follows a ports-and-adapters layout:
//!
//! - [`domain`] - Records, typed ids, column width rules and geographic points
//! - [`port`] - The [`Console`](port::inbound::console::Console) and
//!   [`Store`](port::outbound::store::Store) traits
//! - [`application`] - Find-or-create use cases over a store
//! - [`adapter`] - The terminal menu, the SQLite store and an in-memory store
//! - [`infrastructure`] - Configuration, logging and startup wiring
//! - [`error`] - Error types for the crate
//!
//! # Example
//!
//! ```no_run
//! use sakila::adapter::inbound::cli::console::TerminalConsole;
//! use sakila::adapter::inbound::cli::menu::Menu;
//! use sakila::application::Catalog;
//! use sakila::infrastructure::bootstrap::open_store;
//! use sakila::infrastructure::config::settings::Config;
//!
//! # async fn run() -> sakila::error::Result<()> {
//! let config = Config::default();
//! let store = open_store(&config.database)?;
//! let mut menu = Menu::new(Catalog::new(store), TerminalConsole::new());
//! menu.run().await?;
//! # Ok(())
//! # }
//! ```

pub mod adapter;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod port;

#[cfg(any(test, feature = "testkit"))]
pub mod testkit;
