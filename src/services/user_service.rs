//! User service - Handles user-related business logic.
//!
//! Hashes incoming passwords and delegates row access to the
//! repository. The repository owns uniqueness enforcement; this layer
//! never touches storage directly.

use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::{NewUser, Password, User};
use crate::errors::{AppError, AppResult};
use crate::infra::UserRepository;

/// User service trait for dependency injection.
#[async_trait]
pub trait UserService: Send + Sync {
    /// Create a new user account.
    ///
    /// Fails with `Conflict` when the email or username is taken.
    async fn create_user(&self, new_user: NewUser) -> AppResult<User>;

    /// Get user by ID, failing with `NotFound` when absent
    async fn get_user(&self, id: Uuid) -> AppResult<User>;

    /// List users in creation order
    async fn list_users(&self, skip: u64, limit: u64) -> AppResult<Vec<User>>;
}

/// Concrete implementation of UserService
pub struct UserDirectory<R: UserRepository> {
    repo: Arc<R>,
}

impl<R: UserRepository> UserDirectory<R> {
    /// Create new user service instance
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl<R: UserRepository> UserService for UserDirectory<R> {
    async fn create_user(&self, new_user: NewUser) -> AppResult<User> {
        // Hash before anything touches storage; a validation failure
        // here leaves no partial row behind.
        let password_hash = Password::new(&new_user.password)?.into_string();

        self.repo
            .create(new_user.email, new_user.username, password_hash)
            .await
    }

    async fn get_user(&self, id: Uuid) -> AppResult<User> {
        self.repo.find_by_id(id).await?.ok_or(AppError::NotFound)
    }

    async fn list_users(&self, skip: u64, limit: u64) -> AppResult<Vec<User>> {
        self.repo.list(skip, limit).await
    }
}
