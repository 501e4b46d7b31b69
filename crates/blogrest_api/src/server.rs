//! HTTP server bootstrap.
//!
//! Opens the store, wires handler state and CORS, then serves until the
//! listener fails.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::http::HeaderValue;
use axum::Router;
use blogrest_core::{Argon2Hasher, CredentialHasher, Database, DbError};
use log::{error, info};
use thiserror::Error;
use tokio::net::TcpListener;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

use crate::config::ServerConfig;
use crate::routes::api_routes;
use crate::state::AppState;

/// Failures that stop the server from starting or serving.
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("failed to open database: {0}")]
    Database(#[from] DbError),

    #[error("invalid listen address `{0}`")]
    InvalidAddress(String),

    #[error("invalid CORS origin `{0}`")]
    InvalidCorsOrigin(String),

    #[error("server i/o failure: {0}")]
    Io(#[from] std::io::Error),
}

/// HTTP server for the blog API
pub struct HttpServer {
    config: ServerConfig,
    router: Router,
}

impl HttpServer {
    /// Opens (and if needed creates) the database, then builds the router
    /// with the default Argon2 hasher.
    ///
    /// CORS origins are validated before the database is touched.
    pub fn with_config(config: ServerConfig) -> Result<Self, ServerError> {
        parse_cors_origins(&config.cors_origins)?;
        let database = Database::open(&config.database_path)?;
        Self::with_parts(config, database, Arc::new(Argon2Hasher::new()))
    }

    /// Builds the server from an already opened store and a hasher.
    pub fn with_parts(
        config: ServerConfig,
        database: Database,
        hasher: Arc<dyn CredentialHasher>,
    ) -> Result<Self, ServerError> {
        let state = AppState::new(database, hasher);
        let router = build_router(state, &config.cors_origins)?;
        Ok(Self { config, router })
    }

    /// Get the socket address
    pub fn socket_addr(&self) -> String {
        self.config.socket_addr()
    }

    /// Get the router (for testing)
    pub fn router(self) -> Router {
        self.router
    }

    /// Binds the listener and serves requests.
    pub async fn start(self) -> Result<(), ServerError> {
        let raw_addr = self.config.socket_addr();
        let addr: SocketAddr = raw_addr
            .parse()
            .map_err(|_| ServerError::InvalidAddress(raw_addr.clone()))?;

        let listener = TcpListener::bind(addr).await?;
        info!(
            "event=server_start module=http status=ok addr={} database={}",
            addr,
            self.config.database_path.display()
        );

        axum::serve(listener, self.router).await?;
        Ok(())
    }
}

/// Builds the full router with CORS applied.
///
/// # Errors
/// Returns `ServerError::InvalidCorsOrigin` for the first origin that is not
/// a valid header value.
pub fn build_router(state: AppState, cors_origins: &[String]) -> Result<Router, ServerError> {
    let cors = if cors_origins.is_empty() {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        CorsLayer::new()
            .allow_origin(AllowOrigin::list(parse_cors_origins(cors_origins)?))
            .allow_methods(Any)
            .allow_headers(Any)
    };

    Ok(api_routes(state).layer(cors))
}

fn parse_cors_origins(cors_origins: &[String]) -> Result<Vec<HeaderValue>, ServerError> {
    cors_origins
        .iter()
        .map(|origin| {
            origin.parse::<HeaderValue>().map_err(|_| {
                error!(
                    "event=server_config module=http status=error error_code=invalid_cors_origin origin={:?}",
                    origin
                );
                ServerError::InvalidCorsOrigin(origin.clone())
            })
        })
        .collect()
}
