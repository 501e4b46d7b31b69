//! Bounded-offset pagination window.

use super::validation::{ValidationError, ValidationErrorKind};

/// Largest page a list call may request.
pub const MAX_PAGE_LIMIT: u32 = 100;
/// Page size used when the caller omits `limit`.
pub const DEFAULT_PAGE_LIMIT: u32 = MAX_PAGE_LIMIT;

/// Validated `(offset, limit)` pair for list scans.
///
/// # Invariants
/// - `limit <= MAX_PAGE_LIMIT`; larger requests are rejected, not clamped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    offset: u32,
    limit: u32,
}

impl Page {
    /// Validates raw caller input, applying defaults for omitted values.
    ///
    /// # Errors
    /// - `offset` below zero or beyond `u32::MAX`.
    /// - `limit` below zero or above [`MAX_PAGE_LIMIT`].
    pub fn try_new(offset: Option<i64>, limit: Option<i64>) -> Result<Self, ValidationError> {
        let offset = match offset {
            None => 0,
            Some(value) => u32::try_from(value).map_err(|_| {
                ValidationError::new(
                    "offset",
                    ValidationErrorKind::OutOfRange {
                        min: 0,
                        max: i64::from(u32::MAX),
                    },
                )
            })?,
        };

        let limit = match limit {
            None => DEFAULT_PAGE_LIMIT,
            Some(value) if (0..=i64::from(MAX_PAGE_LIMIT)).contains(&value) => value as u32,
            Some(_) => {
                return Err(ValidationError::new(
                    "limit",
                    ValidationErrorKind::OutOfRange {
                        min: 0,
                        max: i64::from(MAX_PAGE_LIMIT),
                    },
                ))
            }
        };

        Ok(Self { offset, limit })
    }

    pub fn offset(&self) -> u32 {
        self.offset
    }

    pub fn limit(&self) -> u32 {
        self.limit
    }
}

impl Default for Page {
    fn default() -> Self {
        Self {
            offset: 0,
            limit: DEFAULT_PAGE_LIMIT,
        }
    }
}
