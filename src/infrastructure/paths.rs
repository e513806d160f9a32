//! Path utilities for sakila.
//!
//! All data lives under `~/.sakila/`:
//! - `~/.sakila/config.toml` - optional configuration
//! - `~/.sakila/sakila.db` - the SQLite database

use std::path::PathBuf;

/// Returns the sakila home directory (`~/.sakila/`).
///
/// Falls back to `./.sakila` when no home directory is known.
pub fn home_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".sakila")
}

/// Returns the default config file path (`~/.sakila/config.toml`).
pub fn default_config() -> PathBuf {
    home_dir().join("config.toml")
}

/// Returns the default database path (`~/.sakila/sakila.db`).
pub fn default_database() -> PathBuf {
    home_dir().join("sakila.db")
}
