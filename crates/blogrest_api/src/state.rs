//! Per-request execution state.
//!
//! # Responsibility
//! - Carry the store handle and hasher into handlers.
//! - Run blocking store work with a connection scoped to one request.
//!
//! # Invariants
//! - A connection is acquired inside the blocking task and dropped before
//!   the task returns, on success and on failure.
//! - No mutable state is shared between requests.

use crate::error::{ApiError, ApiResult};
use blogrest_core::{CredentialHasher, Database, ServiceResult};
use log::{error, info};
use rusqlite::Connection;
use std::sync::Arc;
use std::time::Instant;

/// Shared handler state.
#[derive(Clone)]
pub struct AppState {
    database: Database,
    hasher: Arc<dyn CredentialHasher>,
}

impl AppState {
    pub fn new(database: Database, hasher: Arc<dyn CredentialHasher>) -> Self {
        Self { database, hasher }
    }

    pub fn database(&self) -> &Database {
        &self.database
    }

    /// Runs `work` on the blocking pool against a freshly acquired
    /// connection and logs the outcome under `op`.
    pub async fn run<T, F>(&self, op: &'static str, work: F) -> ApiResult<T>
    where
        T: Send + 'static,
        F: FnOnce(&Connection, &dyn CredentialHasher) -> ServiceResult<T> + Send + 'static,
    {
        let started_at = Instant::now();
        let database = self.database.clone();
        let hasher = Arc::clone(&self.hasher);

        let joined = tokio::task::spawn_blocking(move || {
            let conn = database.acquire()?;
            work(&conn, hasher.as_ref())
        })
        .await;

        let result = match joined {
            Ok(outcome) => outcome.map_err(ApiError::from),
            Err(err) => Err(ApiError::Store(format!("request task failed: {err}"))),
        };

        let duration_ms = started_at.elapsed().as_millis();
        match &result {
            Ok(_) => info!("event=request module=http status=ok op={op} duration_ms={duration_ms}"),
            Err(ApiError::Store(detail)) => error!(
                "event=request module=http status=error op={op} duration_ms={duration_ms} error_code=store_failure error={detail}"
            ),
            Err(err) => info!(
                "event=request module=http status=rejected op={op} duration_ms={duration_ms} error_code={}",
                err.error_code()
            ),
        }

        result
    }
}
