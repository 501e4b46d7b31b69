//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define per-table data access contracts.
//! - Isolate SQLite query details from service orchestration.
//!
//! # Invariants
//! - Every mutation is a single autocommitted statement.
//! - Repository APIs return semantic errors (`NotFound`) in addition to DB
//!   transport errors.

use crate::db::DbError;
use rusqlite::types::Value;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod blog_repo;
pub mod user_repo;

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error shared by all tables.
#[derive(Debug)]
pub enum RepoError {
    Db(DbError),
    NotFound { table: &'static str, id: i64 },
    InvalidData(String),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::NotFound { table, id } => write!(f, "row not found: {table}.id={id}"),
            Self::InvalidData(message) => write!(f, "invalid persisted data: {message}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::NotFound { .. } | Self::InvalidData(_) => None,
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Accumulates `column = ?` assignments for a partial `UPDATE`.
#[derive(Debug, Default)]
pub(crate) struct Assignments {
    columns: Vec<&'static str>,
    values: Vec<Value>,
}

impl Assignments {
    pub(crate) fn set(&mut self, column: &'static str, value: Value) {
        self.columns.push(column);
        self.values.push(value);
    }

    pub(crate) fn set_text(&mut self, column: &'static str, value: Option<String>) {
        if let Some(text) = value {
            self.set(column, Value::Text(text));
        }
    }

    pub(crate) fn set_nullable_text(&mut self, column: &'static str, value: Option<Option<String>>) {
        if let Some(text) = value {
            self.set(column, text.map_or(Value::Null, Value::Text));
        }
    }

    pub(crate) fn set_nullable_bool(&mut self, column: &'static str, value: Option<Option<bool>>) {
        if let Some(flag) = value {
            self.set(column, flag.map_or(Value::Null, |v| Value::Integer(bool_to_int(v))));
        }
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Renders `UPDATE <table> SET … WHERE id = ? RETURNING <returning>`
    /// and the bind values, id last.
    pub(crate) fn into_update(
        self,
        table: &str,
        id: i64,
        returning: &str,
    ) -> (String, Vec<Value>) {
        let set_clause = self
            .columns
            .iter()
            .map(|column| format!("{column} = ?"))
            .collect::<Vec<_>>()
            .join(", ");
        let sql = format!("UPDATE {table} SET {set_clause} WHERE id = ? RETURNING {returning};");
        let mut values = self.values;
        values.push(Value::Integer(id));
        (sql, values)
    }
}

pub(crate) fn bool_to_int(value: bool) -> i64 {
    if value {
        1
    } else {
        0
    }
}

pub(crate) fn parse_optional_bool(
    value: Option<i64>,
    location: &str,
) -> RepoResult<Option<bool>> {
    match value {
        None => Ok(None),
        Some(0) => Ok(Some(false)),
        Some(1) => Ok(Some(true)),
        Some(other) => Err(RepoError::InvalidData(format!(
            "invalid boolean value `{other}` in {location}"
        ))),
    }
}
