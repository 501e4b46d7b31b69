//! Blog post domain model and its projections.
//!
//! # Invariants
//! - `id` is assigned by the store and never appears in create payloads.
//! - `published` is tri-state: `Some(true)`, `Some(false)` or unset.

use super::validation::{non_null, nullable, Projection};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Store-assigned blog post identifier.
pub type BlogId = i64;

/// Persisted `blog_posts` row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlogPost {
    pub id: BlogId,
    pub title: String,
    pub description: String,
    pub published: Option<bool>,
}

/// Creation payload.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, ToSchema)]
pub struct BlogCreate {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub published: Option<bool>,
}

/// Partial-update payload.
///
/// Outer `None` means "leave the column alone"; for `published`,
/// `Some(None)` clears the stored value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, ToSchema)]
pub struct BlogUpdate {
    #[serde(default, deserialize_with = "non_null")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "non_null")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "nullable")]
    #[schema(value_type = Option<bool>)]
    pub published: Option<Option<bool>>,
}

impl BlogUpdate {
    /// Returns true when the payload carries no field at all.
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.description.is_none() && self.published.is_none()
    }
}

/// Response shape for blog posts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct BlogPublic {
    pub id: BlogId,
    pub title: String,
    pub description: String,
    pub published: Option<bool>,
}

impl From<BlogPost> for BlogPublic {
    fn from(post: BlogPost) -> Self {
        Self {
            id: post.id,
            title: post.title,
            description: post.description,
            published: post.published,
        }
    }
}

impl Projection for BlogCreate {}

impl Projection for BlogUpdate {}
