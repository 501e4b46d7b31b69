//! Process-wide store handle with per-request connection scope.
//!
//! # Responsibility
//! - Create the database file and schema once at process start.
//! - Hand out one fresh connection per unit of work.
//!
//! # Invariants
//! - No connection outlives the caller that acquired it.
//! - `Database` holds no open connection, only the file location.

use super::open::{open_db, open_session};
use super::DbResult;
use log::info;
use rusqlite::Connection;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Cloneable handle to the file-backed SQLite store.
#[derive(Debug, Clone)]
pub struct Database {
    path: Arc<PathBuf>,
}

impl Database {
    /// Creates the database file if absent and applies pending migrations.
    ///
    /// # Errors
    /// - Returns `DbError::Sqlite` when the file cannot be opened.
    /// - Returns `DbError::UnsupportedSchemaVersion` for newer schemas.
    pub fn open(path: impl AsRef<Path>) -> DbResult<Self> {
        let path = path.as_ref().to_path_buf();
        drop(open_db(&path)?);
        info!(
            "event=store_ready module=db status=ok path={}",
            path.display()
        );
        Ok(Self {
            path: Arc::new(path),
        })
    }

    /// Opens a connection scoped to the caller.
    ///
    /// The connection is closed when the returned value is dropped, which
    /// covers both success and early-return error paths. The schema was
    /// migrated by [`Database::open`], so only pragmas are applied here.
    pub fn acquire(&self) -> DbResult<Connection> {
        open_session(self.path.as_path())
    }

    /// Returns the backing database file path.
    pub fn path(&self) -> &Path {
        self.path.as_path()
    }
}
