//! Record schemas and their create/update/public projections.
//!
//! # Responsibility
//! - Define the typed shapes exchanged between HTTP, services and storage.
//! - Validate raw JSON payloads into those shapes.
//!
//! # Invariants
//! - Every persisted record carries a store-assigned integer id.
//! - Write-only fields have no representation in public projections.

pub mod blog;
pub mod page;
pub mod user;
pub mod validation;
