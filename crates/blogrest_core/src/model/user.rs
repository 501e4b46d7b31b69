//! User domain model and its projections.
//!
//! # Invariants
//! - Passwords are held in plaintext only inside `UserCreate`/`UserUpdate`
//!   and only until the service hashes them.
//! - `UserPublic` has no password or digest field.
//! - `Debug` output never prints a password or digest.

use super::validation::{non_null, nullable, Projection};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use std::fmt::{Debug, Formatter};

/// Store-assigned user identifier.
pub type UserId = i64;

/// `disabled` value stored when a creation payload omits it.
pub const DEFAULT_DISABLED: bool = true;

const REDACTED: &str = "<redacted>";

/// Persisted `users` row, including the password digest.
///
/// Deliberately not `Serialize`: responses are built from [`UserPublic`].
#[derive(Clone, PartialEq, Eq)]
pub struct User {
    pub id: UserId,
    pub username: String,
    pub email: String,
    pub fullname: Option<String>,
    pub password_hash: String,
    pub disabled: Option<bool>,
}

impl Debug for User {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("User")
            .field("id", &self.id)
            .field("username", &self.username)
            .field("email", &self.email)
            .field("fullname", &self.fullname)
            .field("password_hash", &REDACTED)
            .field("disabled", &self.disabled)
            .finish()
    }
}

/// Creation payload carrying the plaintext password.
#[derive(Clone, PartialEq, Eq, Deserialize, ToSchema)]
pub struct UserCreate {
    pub username: String,
    pub email: String,
    #[serde(default)]
    pub fullname: Option<String>,
    pub password: String,
    /// Absent means [`DEFAULT_DISABLED`]; explicit `null` is stored as unset.
    #[serde(default = "default_disabled")]
    pub disabled: Option<bool>,
}

fn default_disabled() -> Option<bool> {
    Some(DEFAULT_DISABLED)
}

impl Debug for UserCreate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UserCreate")
            .field("username", &self.username)
            .field("email", &self.email)
            .field("fullname", &self.fullname)
            .field("password", &REDACTED)
            .field("disabled", &self.disabled)
            .finish()
    }
}

/// Partial-update payload.
#[derive(Clone, Default, PartialEq, Eq, Deserialize, ToSchema)]
pub struct UserUpdate {
    #[serde(default, deserialize_with = "non_null")]
    pub username: Option<String>,
    #[serde(default, deserialize_with = "non_null")]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "nullable")]
    #[schema(value_type = Option<String>)]
    pub fullname: Option<Option<String>>,
    #[serde(default, deserialize_with = "non_null")]
    pub password: Option<String>,
    #[serde(default, deserialize_with = "nullable")]
    #[schema(value_type = Option<bool>)]
    pub disabled: Option<Option<bool>>,
}

impl Debug for UserUpdate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UserUpdate")
            .field("username", &self.username)
            .field("email", &self.email)
            .field("fullname", &self.fullname)
            .field("password", &self.password.as_ref().map(|_| REDACTED))
            .field("disabled", &self.disabled)
            .finish()
    }
}

/// Row-ready insert for `users`, password already hashed.
#[derive(Clone, PartialEq, Eq)]
pub struct NewUser {
    pub username: String,
    pub email: String,
    pub fullname: Option<String>,
    pub password_hash: String,
    pub disabled: Option<bool>,
}

/// Column patch for `users`, password already hashed.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct UserPatch {
    pub username: Option<String>,
    pub email: Option<String>,
    pub fullname: Option<Option<String>>,
    pub password_hash: Option<String>,
    pub disabled: Option<Option<bool>>,
}

/// Response shape for users.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct UserPublic {
    pub id: UserId,
    pub username: String,
    pub email: String,
    pub fullname: Option<String>,
    pub disabled: Option<bool>,
}

impl From<User> for UserPublic {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            email: user.email,
            fullname: user.fullname,
            disabled: user.disabled,
        }
    }
}

impl Projection for UserCreate {}

impl Projection for UserUpdate {}
