//! HTTP surface of the blogrest API.
//!
//! Routes requests to the core services and maps their results onto JSON
//! responses and status codes.

pub mod config;
pub mod error;
pub mod routes;
pub mod server;
pub mod state;

pub use config::{ConfigError, ServerConfig};
pub use error::{ApiError, ApiResult, ErrorResponse};
pub use routes::{api_routes, ApiDoc};
pub use server::{build_router, HttpServer, ServerError};
pub use state::AppState;
