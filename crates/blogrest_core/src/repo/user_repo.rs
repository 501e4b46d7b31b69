//! User repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide keyed CRUD and bounded scans over `users`.
//!
//! # Invariants
//! - Only password digests reach this layer; it never hashes.
//! - Scans are ordered by `id ASC`.

use super::{bool_to_int, parse_optional_bool, Assignments, RepoError, RepoResult};
use crate::model::page::Page;
use crate::model::user::{NewUser, User, UserId, UserPatch};
use rusqlite::types::Value;
use rusqlite::{params, params_from_iter, Connection, Params, Row};

const TABLE: &str = "users";
const USER_COLUMNS: &str = "id, username, email, fullname, password_hash, disabled";

/// Repository interface for user storage.
pub trait UserRepository {
    fn get(&self, id: UserId) -> RepoResult<Option<User>>;
    fn scan(&self, page: &Page) -> RepoResult<Vec<User>>;
    fn insert(&self, user: &NewUser) -> RepoResult<User>;
    fn merge_update(&self, id: UserId, patch: &UserPatch) -> RepoResult<User>;
    fn delete(&self, id: UserId) -> RepoResult<()>;
}

/// SQLite-backed user repository.
pub struct SqliteUserRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteUserRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }

    fn query_one(&self, sql: &str, params: impl Params) -> RepoResult<Option<User>> {
        let mut stmt = self.conn.prepare(sql)?;
        let mut rows = stmt.query(params)?;
        match rows.next()? {
            Some(row) => Ok(Some(parse_user_row(row)?)),
            None => Ok(None),
        }
    }
}

impl UserRepository for SqliteUserRepository<'_> {
    fn get(&self, id: UserId) -> RepoResult<Option<User>> {
        self.query_one(
            &format!("SELECT {USER_COLUMNS} FROM {TABLE} WHERE id = ?1;"),
            [id],
        )
    }

    fn scan(&self, page: &Page) -> RepoResult<Vec<User>> {
        let mut stmt = self.conn.prepare(&format!(
            "SELECT {USER_COLUMNS} FROM {TABLE} ORDER BY id ASC LIMIT ?1 OFFSET ?2;"
        ))?;
        let mut rows = stmt.query(params![
            i64::from(page.limit()),
            i64::from(page.offset())
        ])?;

        let mut users = Vec::new();
        while let Some(row) = rows.next()? {
            users.push(parse_user_row(row)?);
        }
        Ok(users)
    }

    fn insert(&self, user: &NewUser) -> RepoResult<User> {
        self.query_one(
            &format!(
                "INSERT INTO {TABLE} (username, email, fullname, password_hash, disabled)
                 VALUES (?1, ?2, ?3, ?4, ?5)
                 RETURNING {USER_COLUMNS};"
            ),
            params![
                user.username.as_str(),
                user.email.as_str(),
                user.fullname.as_deref(),
                user.password_hash.as_str(),
                user.disabled.map(bool_to_int),
            ],
        )?
        .ok_or_else(|| RepoError::InvalidData("insert returned no row".to_string()))
    }

    fn merge_update(&self, id: UserId, patch: &UserPatch) -> RepoResult<User> {
        let mut assignments = Assignments::default();
        assignments.set_text("username", patch.username.clone());
        assignments.set_text("email", patch.email.clone());
        assignments.set_nullable_text("fullname", patch.fullname.clone());
        if let Some(digest) = &patch.password_hash {
            assignments.set("password_hash", Value::Text(digest.clone()));
        }
        assignments.set_nullable_bool("disabled", patch.disabled);

        let updated = if assignments.is_empty() {
            self.get(id)?
        } else {
            let (sql, values) = assignments.into_update(TABLE, id, USER_COLUMNS);
            self.query_one(&sql, params_from_iter(values))?
        };

        updated.ok_or(RepoError::NotFound { table: TABLE, id })
    }

    fn delete(&self, id: UserId) -> RepoResult<()> {
        let changed = self
            .conn
            .execute(&format!("DELETE FROM {TABLE} WHERE id = ?1;"), [id])?;

        if changed == 0 {
            return Err(RepoError::NotFound { table: TABLE, id });
        }

        Ok(())
    }
}

fn parse_user_row(row: &Row<'_>) -> RepoResult<User> {
    Ok(User {
        id: row.get("id")?,
        username: row.get("username")?,
        email: row.get("email")?,
        fullname: row.get("fullname")?,
        password_hash: row.get("password_hash")?,
        disabled: parse_optional_bool(row.get("disabled")?, "users.disabled")?,
    })
}
