//! Blog post handlers.

use super::{decode, id_from, page_from, ListParams};
use crate::error::{ApiResult, ErrorResponse};
use crate::state::AppState;
use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use blogrest_core::{BlogCreate, BlogPublic, BlogService, BlogUpdate, SqliteBlogRepository};
use serde_json::Value;

pub(super) fn blog_routes() -> Router<AppState> {
    Router::new()
        .route("/blogs", get(list_blogs).post(create_blog))
        .route(
            "/blogs/:id",
            get(get_blog).patch(update_blog).delete(delete_blog),
        )
}

#[utoipa::path(
    get,
    path = "/blogs",
    tag = "blogs",
    params(ListParams),
    responses(
        (status = 200, description = "Page of blogs ordered by id", body = [BlogPublic]),
        (status = 422, description = "Invalid offset or limit", body = ErrorResponse)
    )
)]
pub(super) async fn list_blogs(
    State(state): State<AppState>,
    query: Result<Query<ListParams>, QueryRejection>,
) -> ApiResult<Json<Vec<BlogPublic>>> {
    let page = page_from(query)?;
    let posts = state
        .run("blog_list", move |conn, _| {
            BlogService::new(SqliteBlogRepository::new(conn)).list(&page)
        })
        .await?;
    Ok(Json(posts))
}

#[utoipa::path(
    get,
    path = "/blogs/{id}",
    tag = "blogs",
    params(("id" = i64, Path, description = "Blog id")),
    responses(
        (status = 200, body = BlogPublic),
        (status = 404, body = ErrorResponse)
    )
)]
pub(super) async fn get_blog(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
) -> ApiResult<Json<BlogPublic>> {
    let id = id_from(path)?;
    let post = state
        .run("blog_get", move |conn, _| {
            BlogService::new(SqliteBlogRepository::new(conn)).get(id)
        })
        .await?;
    Ok(Json(post))
}

#[utoipa::path(
    post,
    path = "/blogs",
    tag = "blogs",
    request_body = BlogCreate,
    responses(
        (status = 201, body = BlogPublic),
        (status = 422, body = ErrorResponse)
    )
)]
pub(super) async fn create_blog(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<BlogPublic>)> {
    let create: BlogCreate = decode(payload)?;
    let post = state
        .run("blog_create", move |conn, _| {
            BlogService::new(SqliteBlogRepository::new(conn)).create(&create)
        })
        .await?;
    Ok((StatusCode::CREATED, Json(post)))
}

#[utoipa::path(
    patch,
    path = "/blogs/{id}",
    tag = "blogs",
    params(("id" = i64, Path, description = "Blog id")),
    request_body = BlogUpdate,
    responses(
        (status = 200, body = BlogPublic),
        (status = 404, body = ErrorResponse),
        (status = 422, body = ErrorResponse)
    )
)]
pub(super) async fn update_blog(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
    payload: Result<Json<Value>, JsonRejection>,
) -> ApiResult<Json<BlogPublic>> {
    let id = id_from(path)?;
    let update: BlogUpdate = decode(payload)?;
    let post = state
        .run("blog_update", move |conn, _| {
            BlogService::new(SqliteBlogRepository::new(conn)).update(id, &update)
        })
        .await?;
    Ok(Json(post))
}

#[utoipa::path(
    delete,
    path = "/blogs/{id}",
    tag = "blogs",
    params(("id" = i64, Path, description = "Blog id")),
    responses(
        (status = 204, description = "Blog deleted"),
        (status = 404, body = ErrorResponse)
    )
)]
pub(super) async fn delete_blog(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
) -> ApiResult<StatusCode> {
    let id = id_from(path)?;
    state
        .run("blog_delete", move |conn, _| {
            BlogService::new(SqliteBlogRepository::new(conn)).delete(id)
        })
        .await?;
    Ok(StatusCode::NO_CONTENT)
}
