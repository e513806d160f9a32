use std::path::{Path, PathBuf};

use sakila::adapter::outbound::sqlite::database::connection::{create_pool, run_migrations, DbPool};
use sakila::adapter::outbound::sqlite::SqliteStore;
use tempfile::TempDir;

/// Temporary SQLite database file for integration tests.
///
/// The directory, and the database in it, are removed on drop.
pub struct TempDb {
    dir: TempDir,
    path: PathBuf,
}

impl TempDb {
    pub fn create() -> Self {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join("sakila.db");
        Self { dir, path }
    }

    pub fn dir(&self) -> &Path {
        self.dir.path()
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn url(&self) -> String {
        self.path.display().to_string()
    }

    /// A fresh single-connection pool with the schema applied.
    pub fn pool(&self) -> DbPool {
        let pool = create_pool(&self.url(), 1).expect("create sqlite pool");
        run_migrations(&pool).expect("run migrations");
        pool
    }

    pub fn store(&self) -> SqliteStore {
        SqliteStore::new(self.pool())
    }
}
