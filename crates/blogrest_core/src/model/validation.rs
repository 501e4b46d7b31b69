//! Payload validation shared by every projection.
//!
//! # Responsibility
//! - Deserialize raw JSON payloads into the serde-derived projections.
//! - Report the first offending field with a machine-readable reason.
//!
//! # Invariants
//! - "Absent" and "explicit null" are never conflated by patch fields.
//! - Unknown keys are ignored.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Field name reported when the payload itself is unusable.
pub const BODY_FIELD: &str = "body";

/// Why a single field was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Required field is not present.
    Missing,
    /// Field does not accept `null`.
    Null,
    /// Field is present with a value of the wrong type.
    Invalid(String),
    /// Numeric field outside its accepted range.
    OutOfRange { min: i64, max: i64 },
    /// Input could not be parsed at all.
    Malformed(String),
}

/// Field-level validation failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub field: String,
    pub kind: ValidationErrorKind,
}

impl ValidationError {
    pub fn new(field: impl Into<String>, kind: ValidationErrorKind) -> Self {
        Self {
            field: field.into(),
            kind,
        }
    }

    pub fn missing(field: &str) -> Self {
        Self::new(field, ValidationErrorKind::Missing)
    }

    pub fn malformed(field: &str, reason: impl Into<String>) -> Self {
        Self::new(field, ValidationErrorKind::Malformed(reason.into()))
    }
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let field = &self.field;
        match &self.kind {
            ValidationErrorKind::Missing => write!(f, "field `{field}` is required"),
            ValidationErrorKind::Null => write!(f, "field `{field}` may not be null"),
            ValidationErrorKind::Invalid(reason) => {
                write!(f, "field `{field}` is invalid: {reason}")
            }
            ValidationErrorKind::OutOfRange { min, max } => {
                write!(f, "field `{field}` must be between {min} and {max}")
            }
            ValidationErrorKind::Malformed(reason) => {
                write!(f, "field `{field}` is malformed: {reason}")
            }
        }
    }
}

impl Error for ValidationError {}

/// A typed view decoded from a raw request payload.
pub trait Projection: DeserializeOwned {
    /// Validates `payload` and builds the projection.
    ///
    /// # Errors
    /// Returns the first field that violates the projection's constraints.
    fn from_payload(payload: &Value) -> Result<Self, ValidationError> {
        serde_path_to_error::deserialize(payload).map_err(field_error)
    }
}

/// Maps a path-tracked serde failure onto the field it happened at.
fn field_error(err: serde_path_to_error::Error<serde_json::Error>) -> ValidationError {
    let at_root = err.path().iter().next().is_none();
    let field = err.path().to_string();
    let message = err.into_inner().to_string();

    if at_root {
        return match missing_field_name(&message) {
            Some(name) => ValidationError::missing(name),
            None => ValidationError::new(BODY_FIELD, ValidationErrorKind::Invalid(message)),
        };
    }
    if message.starts_with("invalid type: null") {
        return ValidationError::new(field, ValidationErrorKind::Null);
    }
    ValidationError::new(field, ValidationErrorKind::Invalid(message))
}

/// serde reports absent required fields as "missing field `name`" at the
/// enclosing struct.
fn missing_field_name(message: &str) -> Option<&str> {
    message
        .strip_prefix("missing field `")
        .and_then(|rest| rest.split('`').next())
}

/// Present-only field that rejects an explicit `null`.
///
/// Use with `#[serde(default)]` so absence stays `None`.
pub(crate) fn non_null<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(deserializer).map(Some)
}

/// Patch field for a nullable column: absent is `None`, `null` is
/// `Some(None)`.
///
/// Use with `#[serde(default)]` so absence stays `None`.
pub(crate) fn nullable<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}
