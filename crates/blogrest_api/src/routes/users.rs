//! User handlers. Passwords are accepted on create/update but never
//! checked against a session.

use super::{decode, id_from, page_from, ListParams};
use crate::error::{ApiResult, ErrorResponse};
use crate::state::AppState;
use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use blogrest_core::{SqliteUserRepository, UserCreate, UserPublic, UserService, UserUpdate};
use serde_json::Value;

pub(super) fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/users", get(list_users).post(create_user))
        .route(
            "/users/:id",
            get(get_user).patch(update_user).delete(delete_user),
        )
}

#[utoipa::path(
    get,
    path = "/users",
    tag = "users",
    params(ListParams),
    responses(
        (status = 200, description = "Page of users ordered by id", body = [UserPublic]),
        (status = 422, description = "Invalid offset or limit", body = ErrorResponse)
    )
)]
pub(super) async fn list_users(
    State(state): State<AppState>,
    query: Result<Query<ListParams>, QueryRejection>,
) -> ApiResult<Json<Vec<UserPublic>>> {
    let page = page_from(query)?;
    let users = state
        .run("user_list", move |conn, hasher| {
            UserService::new(SqliteUserRepository::new(conn), hasher).list(&page)
        })
        .await?;
    Ok(Json(users))
}

#[utoipa::path(
    get,
    path = "/users/{id}",
    tag = "users",
    params(("id" = i64, Path, description = "User id")),
    responses(
        (status = 200, body = UserPublic),
        (status = 404, body = ErrorResponse)
    )
)]
pub(super) async fn get_user(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
) -> ApiResult<Json<UserPublic>> {
    let id = id_from(path)?;
    let user = state
        .run("user_get", move |conn, hasher| {
            UserService::new(SqliteUserRepository::new(conn), hasher).get(id)
        })
        .await?;
    Ok(Json(user))
}

#[utoipa::path(
    post,
    path = "/users",
    tag = "users",
    request_body = UserCreate,
    responses(
        (status = 201, body = UserPublic),
        (status = 422, body = ErrorResponse)
    )
)]
pub(super) async fn create_user(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<UserPublic>)> {
    let create: UserCreate = decode(payload)?;
    let user = state
        .run("user_create", move |conn, hasher| {
            UserService::new(SqliteUserRepository::new(conn), hasher).create(create)
        })
        .await?;
    Ok((StatusCode::CREATED, Json(user)))
}

#[utoipa::path(
    patch,
    path = "/users/{id}",
    tag = "users",
    params(("id" = i64, Path, description = "User id")),
    request_body = UserUpdate,
    responses(
        (status = 200, body = UserPublic),
        (status = 404, body = ErrorResponse),
        (status = 422, body = ErrorResponse)
    )
)]
pub(super) async fn update_user(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
    payload: Result<Json<Value>, JsonRejection>,
) -> ApiResult<Json<UserPublic>> {
    let id = id_from(path)?;
    let update: UserUpdate = decode(payload)?;
    let user = state
        .run("user_update", move |conn, hasher| {
            UserService::new(SqliteUserRepository::new(conn), hasher).update(id, update)
        })
        .await?;
    Ok(Json(user))
}

#[utoipa::path(
    delete,
    path = "/users/{id}",
    tag = "users",
    params(("id" = i64, Path, description = "User id")),
    responses(
        (status = 204, description = "User deleted"),
        (status = 404, body = ErrorResponse)
    )
)]
pub(super) async fn delete_user(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
) -> ApiResult<StatusCode> {
    let id = id_from(path)?;
    state
        .run("user_delete", move |conn, hasher| {
            UserService::new(SqliteUserRepository::new(conn), hasher).delete(id)
        })
        .await?;
    Ok(StatusCode::NO_CONTENT)
}
