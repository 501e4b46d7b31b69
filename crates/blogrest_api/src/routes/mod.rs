//! Route table and request decoding helpers.
//!
//! # Endpoints
//!
//! - `/health` - liveness and version
//! - `/openapi.json` - generated OpenAPI document
//! - `/blogs`, `/blogs/:id` - blog post CRUD
//! - `/users`, `/users/:id` - user CRUD

use crate::error::ApiError;
use crate::state::AppState;
use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::extract::{Path, Query};
use axum::routing::get;
use axum::{Json, Router};
use blogrest_core::{core_version, Page, Projection, ValidationError};
use log::debug;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::{IntoParams, OpenApi, ToSchema};

mod blogs;
mod openapi;
mod users;

pub use openapi::ApiDoc;

/// Builds every resource route on top of the shared state.
pub fn api_routes(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route("/openapi.json", get(openapi_handler))
        .merge(blogs::blog_routes())
        .merge(users::user_routes())
        .with_state(state)
}

#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    #[schema(value_type = String)]
    pub status: &'static str,
    #[schema(value_type = String)]
    pub version: &'static str,
}

#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses((status = 200, description = "Service is up", body = HealthResponse))
)]
async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: core_version(),
    })
}

async fn openapi_handler() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

/// Raw `?offset=&limit=` query string.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListParams {
    /// Records to skip (default 0)
    pub offset: Option<i64>,
    /// Records to return, 0..=100 (default 100)
    pub limit: Option<i64>,
}

pub(crate) fn page_from(query: Result<Query<ListParams>, QueryRejection>) -> Result<Page, ApiError> {
    let Query(params) = query.map_err(|rejection| {
        reject(ValidationError::malformed("query", rejection.body_text()))
    })?;
    Page::try_new(params.offset, params.limit).map_err(reject)
}

pub(crate) fn id_from(path: Result<Path<i64>, PathRejection>) -> Result<i64, ApiError> {
    path.map(|Path(id)| id)
        .map_err(|rejection| reject(ValidationError::malformed("id", rejection.body_text())))
}

pub(crate) fn decode<P: Projection>(
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<P, ApiError> {
    let Json(value) = payload
        .map_err(|rejection| reject(ValidationError::malformed("body", rejection.body_text())))?;
    P::from_payload(&value).map_err(reject)
}

fn reject(err: ValidationError) -> ApiError {
    debug!(
        "event=request_rejected module=http status=rejected error_code=validation_failed field={}",
        err.field
    );
    ApiError::Validation(err)
}
