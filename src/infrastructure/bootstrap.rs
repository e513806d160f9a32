//! Infrastructure bootstrap helpers for runtime wiring.

use std::path::Path;

use tracing::{debug, info};

use crate::adapter::outbound::sqlite::database::connection::{create_pool, run_migrations};
use crate::adapter::outbound::sqlite::SqliteStore;
use crate::error::Result;
use crate::infrastructure::config::settings::DatabaseConfig;

/// Open the database, bring its schema up to date and wrap it in a store.
///
/// The parent directory of a file database is created if missing. Existing
/// tables and rows are left untouched.
///
/// # Errors
/// Returns an error if the directory cannot be created, the database cannot
/// be opened, or the schema cannot be synchronized.
pub fn open_store(config: &DatabaseConfig) -> Result<SqliteStore> {
    if let Some(parent) = file_parent(&config.url) {
        std::fs::create_dir_all(parent)?;
    }

    let pool = create_pool(&config.url, config.pool_size)?;
    debug!(url = %config.url, pool_size = config.pool_size, "connection pool ready");

    run_migrations(&pool)?;
    info!(url = %config.url, "database schema synchronized");

    Ok(SqliteStore::new(pool))
}

/// Directory holding a file database, if any.
fn file_parent(url: &str) -> Option<&Path> {
    if url == ":memory:" || url.starts_with("file:") {
        return None;
    }
    Path::new(url)
        .parent()
        .filter(|parent| !parent.as_os_str().is_empty())
}
