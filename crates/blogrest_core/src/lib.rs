//! Core domain logic for the blogrest API.
//! Schemas, storage, hashing and use-case services live here; the HTTP
//! layer only decodes requests and encodes responses.

pub mod credential;
pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use credential::{Argon2Hasher, CredentialHasher, HashError};
pub use db::{Database, DbError};
pub use logging::{default_log_level, init_logging, logging_status, LogTarget};
pub use model::blog::{BlogCreate, BlogId, BlogPost, BlogPublic, BlogUpdate};
pub use model::page::{Page, DEFAULT_PAGE_LIMIT, MAX_PAGE_LIMIT};
pub use model::user::{User, UserCreate, UserId, UserPublic, UserUpdate};
pub use model::validation::{Projection, ValidationError, ValidationErrorKind};
pub use repo::blog_repo::{BlogRepository, SqliteBlogRepository};
pub use repo::user_repo::{SqliteUserRepository, UserRepository};
pub use repo::{RepoError, RepoResult};
pub use service::blog_service::BlogService;
pub use service::user_service::UserService;
pub use service::{Resource, ServiceError, ServiceResult};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
