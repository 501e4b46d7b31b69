//! Blog post repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide keyed CRUD and bounded scans over `blog_posts`.
//! - Merge partial updates column-by-column.
//!
//! # Invariants
//! - Scans are ordered by `id ASC`.
//! - `merge_update` touches only columns present in the patch.

use super::{bool_to_int, parse_optional_bool, Assignments, RepoError, RepoResult};
use crate::model::blog::{BlogCreate, BlogId, BlogPost, BlogUpdate};
use crate::model::page::Page;
use rusqlite::{params, params_from_iter, Connection, Params, Row};

const TABLE: &str = "blog_posts";
const BLOG_COLUMNS: &str = "id, title, description, published";

/// Repository interface for blog post storage.
pub trait BlogRepository {
    fn get(&self, id: BlogId) -> RepoResult<Option<BlogPost>>;
    fn scan(&self, page: &Page) -> RepoResult<Vec<BlogPost>>;
    fn insert(&self, create: &BlogCreate) -> RepoResult<BlogPost>;
    fn merge_update(&self, id: BlogId, update: &BlogUpdate) -> RepoResult<BlogPost>;
    fn delete(&self, id: BlogId) -> RepoResult<()>;
}

/// SQLite-backed blog post repository.
pub struct SqliteBlogRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteBlogRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }

    fn query_one(&self, sql: &str, params: impl Params) -> RepoResult<Option<BlogPost>> {
        let mut stmt = self.conn.prepare(sql)?;
        let mut rows = stmt.query(params)?;
        match rows.next()? {
            Some(row) => Ok(Some(parse_blog_row(row)?)),
            None => Ok(None),
        }
    }
}

impl BlogRepository for SqliteBlogRepository<'_> {
    fn get(&self, id: BlogId) -> RepoResult<Option<BlogPost>> {
        self.query_one(
            &format!("SELECT {BLOG_COLUMNS} FROM {TABLE} WHERE id = ?1;"),
            [id],
        )
    }

    fn scan(&self, page: &Page) -> RepoResult<Vec<BlogPost>> {
        let mut stmt = self.conn.prepare(&format!(
            "SELECT {BLOG_COLUMNS} FROM {TABLE} ORDER BY id ASC LIMIT ?1 OFFSET ?2;"
        ))?;
        let mut rows = stmt.query(params![
            i64::from(page.limit()),
            i64::from(page.offset())
        ])?;

        let mut posts = Vec::new();
        while let Some(row) = rows.next()? {
            posts.push(parse_blog_row(row)?);
        }
        Ok(posts)
    }

    fn insert(&self, create: &BlogCreate) -> RepoResult<BlogPost> {
        self.query_one(
            &format!(
                "INSERT INTO {TABLE} (title, description, published)
                 VALUES (?1, ?2, ?3)
                 RETURNING {BLOG_COLUMNS};"
            ),
            params![
                create.title.as_str(),
                create.description.as_str(),
                create.published.map(bool_to_int),
            ],
        )?
        .ok_or_else(|| RepoError::InvalidData("insert returned no row".to_string()))
    }

    fn merge_update(&self, id: BlogId, update: &BlogUpdate) -> RepoResult<BlogPost> {
        let mut assignments = Assignments::default();
        assignments.set_text("title", update.title.clone());
        assignments.set_text("description", update.description.clone());
        assignments.set_nullable_bool("published", update.published);

        let updated = if assignments.is_empty() {
            self.get(id)?
        } else {
            let (sql, values) = assignments.into_update(TABLE, id, BLOG_COLUMNS);
            self.query_one(&sql, params_from_iter(values))?
        };

        updated.ok_or(RepoError::NotFound { table: TABLE, id })
    }

    fn delete(&self, id: BlogId) -> RepoResult<()> {
        let changed = self
            .conn
            .execute(&format!("DELETE FROM {TABLE} WHERE id = ?1;"), [id])?;

        if changed == 0 {
            return Err(RepoError::NotFound { table: TABLE, id });
        }

        Ok(())
    }
}

fn parse_blog_row(row: &Row<'_>) -> RepoResult<BlogPost> {
    Ok(BlogPost {
        id: row.get("id")?,
        title: row.get("title")?,
        description: row.get("description")?,
        published: parse_optional_bool(row.get("published")?, "blog_posts.published")?,
    })
}
