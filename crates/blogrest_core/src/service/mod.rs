//! Resource use-case services.
//!
//! # Responsibility
//! - Orchestrate repository calls into list/get/create/update/delete.
//! - Translate storage absence into resource-level `NotFound`.
//! - Narrow stored rows to public projections.
//!
//! # Invariants
//! - Services never return stored rows, only public projections.
//! - Each resource is managed independently; no cross-resource checks.

use crate::credential::HashError;
use crate::db::DbError;
use crate::model::validation::ValidationError;
use crate::repo::RepoError;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod blog_service;
pub mod user_service;

pub type ServiceResult<T> = Result<T, ServiceError>;

/// Resource kinds exposed by the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    Blog,
    User,
}

impl Display for Resource {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Blog => write!(f, "Blog"),
            Self::User => write!(f, "User"),
        }
    }
}

/// Error taxonomy surfaced to request handlers.
#[derive(Debug)]
pub enum ServiceError {
    /// Payload or query failed schema constraints.
    Validation(ValidationError),
    /// Referenced id is absent from the store.
    NotFound { resource: Resource, id: i64 },
    /// Credential hashing failed.
    Hash(HashError),
    /// Store connection, statement or commit failure.
    Repo(RepoError),
}

impl ServiceError {
    /// Maps repository absence onto `resource`; other errors pass through.
    pub fn from_repo(resource: Resource, err: RepoError) -> Self {
        match err {
            RepoError::NotFound { id, .. } => Self::NotFound { resource, id },
            other => Self::Repo(other),
        }
    }
}

impl Display for ServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::NotFound { resource, id } => write!(f, "{resource} with id {id} not found"),
            Self::Hash(err) => write!(f, "{err}"),
            Self::Repo(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::NotFound { .. } => None,
            Self::Hash(err) => Some(err),
            Self::Repo(err) => Some(err),
        }
    }
}

impl From<ValidationError> for ServiceError {
    fn from(value: ValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<HashError> for ServiceError {
    fn from(value: HashError) -> Self {
        Self::Hash(value)
    }
}

impl From<DbError> for ServiceError {
    fn from(value: DbError) -> Self {
        Self::Repo(RepoError::Db(value))
    }
}
