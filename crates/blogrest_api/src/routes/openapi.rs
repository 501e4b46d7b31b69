//! Generated OpenAPI document, served at `/openapi.json`.

use super::{blogs, users, HealthResponse};
use crate::error::ErrorResponse;
use blogrest_core::{BlogCreate, BlogPublic, BlogUpdate, UserCreate, UserPublic, UserUpdate};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(title = "blogrest", description = "CRUD API for blog posts and users"),
    paths(
        super::health_handler,
        blogs::list_blogs,
        blogs::get_blog,
        blogs::create_blog,
        blogs::update_blog,
        blogs::delete_blog,
        users::list_users,
        users::get_user,
        users::create_user,
        users::update_user,
        users::delete_user,
    ),
    components(schemas(
        BlogPublic,
        BlogCreate,
        BlogUpdate,
        UserPublic,
        UserCreate,
        UserUpdate,
        ErrorResponse,
        HealthResponse,
    )),
    tags(
        (name = "blogs", description = "Blog post CRUD"),
        (name = "users", description = "User CRUD; passwords are write-only"),
        (name = "health", description = "Liveness"),
    )
)]
pub struct ApiDoc;
