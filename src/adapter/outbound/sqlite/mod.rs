//! SQLite persistence adapters.
//!
//! Provides the SQLite-backed [`Store`](crate::port::outbound::store::Store)
//! implementation using Diesel ORM.

pub mod database;
pub mod store;

pub use store::SqliteStore;
