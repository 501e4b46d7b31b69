//! User use-case service.
//!
//! # Responsibility
//! - Hash passwords before any user row reaches the repository.
//! - Expose users only through `UserPublic`.
//!
//! # Invariants
//! - `create` calls the hasher exactly once.
//! - `update` calls the hasher only when the payload carries `password`.
//! - Plaintext passwords are never logged or stored.

use super::{Resource, ServiceError, ServiceResult};
use crate::credential::CredentialHasher;
use crate::model::page::Page;
use crate::model::user::{NewUser, UserCreate, UserId, UserPatch, UserPublic, UserUpdate};
use crate::repo::user_repo::UserRepository;
use crate::repo::RepoError;

/// Use-case service wrapper for user CRUD.
pub struct UserService<'h, R: UserRepository> {
    repo: R,
    hasher: &'h dyn CredentialHasher,
}

impl<'h, R: UserRepository> UserService<'h, R> {
    pub fn new(repo: R, hasher: &'h dyn CredentialHasher) -> Self {
        Self { repo, hasher }
    }

    pub fn list(&self, page: &Page) -> ServiceResult<Vec<UserPublic>> {
        let users = self.repo.scan(page).map_err(repo_err)?;
        Ok(users.into_iter().map(UserPublic::from).collect())
    }

    pub fn get(&self, id: UserId) -> ServiceResult<UserPublic> {
        self.repo
            .get(id)
            .map_err(repo_err)?
            .map(UserPublic::from)
            .ok_or(ServiceError::NotFound {
                resource: Resource::User,
                id,
            })
    }

    /// Hashes the password, stores the user and returns its public view.
    pub fn create(&self, create: UserCreate) -> ServiceResult<UserPublic> {
        let password_hash = self.hasher.hash(&create.password)?;
        let new_user = NewUser {
            username: create.username,
            email: create.email,
            fullname: create.fullname,
            password_hash,
            disabled: create.disabled,
        };

        let user = self.repo.insert(&new_user).map_err(repo_err)?;
        Ok(UserPublic::from(user))
    }

    /// Merges present fields; a new password is hashed before merging.
    pub fn update(&self, id: UserId, update: UserUpdate) -> ServiceResult<UserPublic> {
        let password_hash = update
            .password
            .as_deref()
            .map(|password| self.hasher.hash(password))
            .transpose()?;
        let patch = UserPatch {
            username: update.username,
            email: update.email,
            fullname: update.fullname,
            password_hash,
            disabled: update.disabled,
        };

        let user = self.repo.merge_update(id, &patch).map_err(repo_err)?;
        Ok(UserPublic::from(user))
    }

    pub fn delete(&self, id: UserId) -> ServiceResult<()> {
        self.repo.delete(id).map_err(repo_err)
    }
}

fn repo_err(err: RepoError) -> ServiceError {
    ServiceError::from_repo(Resource::User, err)
}
