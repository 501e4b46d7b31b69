//! HTTP error mapping.
//!
//! # Invariants
//! - Validation failures are 422 and name the offending field.
//! - Missing records are 404 with a resource-specific message.
//! - Store and hashing failures are 500 and never echo internal details.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use blogrest_core::{Resource, ServiceError, ValidationError};
use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;

pub type ApiResult<T> = Result<T, ApiError>;

/// Error signalled by a resource handler.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    Validation(ValidationError),

    #[error("{resource} with id {id} not found")]
    NotFound { resource: Resource, id: i64 },

    /// Details are kept for the log only.
    #[error("internal store failure")]
    Store(String),
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Short machine-readable label used in log events.
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Validation(_) => "validation_failed",
            Self::NotFound { .. } => "not_found",
            Self::Store(_) => "store_failure",
        }
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        Self::Validation(err)
    }
}

impl From<ServiceError> for ApiError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::Validation(err) => Self::Validation(err),
            ServiceError::NotFound { resource, id } => Self::NotFound { resource, id },
            ServiceError::Hash(err) => Self::Store(err.to_string()),
            ServiceError::Repo(err) => Self::Store(err.to_string()),
        }
    }
}

/// JSON body of every error response.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
    pub code: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

impl From<&ApiError> for ErrorResponse {
    fn from(err: &ApiError) -> Self {
        let field = match err {
            ApiError::Validation(validation) => Some(validation.field.clone()),
            _ => None,
        };
        Self {
            error: err.to_string(),
            code: err.status_code().as_u16(),
            field,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status_code(), Json(ErrorResponse::from(&self))).into_response()
    }
}
