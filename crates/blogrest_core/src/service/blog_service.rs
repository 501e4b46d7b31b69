//! Blog post use-case service.
//!
//! # Invariants
//! - `update` merges only the fields present in the payload.
//! - `delete` of an absent id is `NotFound`, never a silent success.

use super::{Resource, ServiceError, ServiceResult};
use crate::model::blog::{BlogCreate, BlogId, BlogPublic, BlogUpdate};
use crate::model::page::Page;
use crate::repo::blog_repo::BlogRepository;
use crate::repo::RepoError;

/// Use-case service wrapper for blog post CRUD.
pub struct BlogService<R: BlogRepository> {
    repo: R,
}

impl<R: BlogRepository> BlogService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Lists one page of posts ordered by id; empty pages are not errors.
    pub fn list(&self, page: &Page) -> ServiceResult<Vec<BlogPublic>> {
        let posts = self.repo.scan(page).map_err(repo_err)?;
        Ok(posts.into_iter().map(BlogPublic::from).collect())
    }

    pub fn get(&self, id: BlogId) -> ServiceResult<BlogPublic> {
        self.repo
            .get(id)
            .map_err(repo_err)?
            .map(BlogPublic::from)
            .ok_or(ServiceError::NotFound {
                resource: Resource::Blog,
                id,
            })
    }

    /// Inserts a new post and returns it with the store-assigned id.
    pub fn create(&self, create: &BlogCreate) -> ServiceResult<BlogPublic> {
        let post = self.repo.insert(create).map_err(repo_err)?;
        Ok(BlogPublic::from(post))
    }

    pub fn update(&self, id: BlogId, update: &BlogUpdate) -> ServiceResult<BlogPublic> {
        let post = self.repo.merge_update(id, update).map_err(repo_err)?;
        Ok(BlogPublic::from(post))
    }

    pub fn delete(&self, id: BlogId) -> ServiceResult<()> {
        self.repo.delete(id).map_err(repo_err)
    }
}

fn repo_err(err: RepoError) -> ServiceError {
    ServiceError::from_repo(Resource::Blog, err)
}
