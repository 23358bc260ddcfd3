//! User repository implementation.
//!
//! Owns all row-level access to the `users` table. Creation runs in an
//! explicit transaction: the uniqueness checks and the insert share one
//! session, committed on success and rolled back on every error path.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DatabaseTransaction, EntityTrait,
    QueryFilter, QueryOrder, QuerySelect, Set, TransactionTrait,
};
use uuid::Uuid;

use super::entities::user::{self, ActiveModel, Entity as UserEntity};
use crate::domain::User;
use crate::errors::{AppError, AppResult};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// User repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert a new user row.
    ///
    /// Fails with `Conflict` when the email or username is already taken.
    async fn create(&self, email: String, username: String, password_hash: String)
        -> AppResult<User>;

    /// Find user by ID
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<User>>;

    /// List users in creation order
    async fn list(&self, skip: u64, limit: u64) -> AppResult<Vec<User>>;
}

/// Concrete implementation of UserRepository backed by SeaORM
pub struct UserStore {
    db: DatabaseConnection,
}

impl UserStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Check-then-insert inside the given transaction.
    async fn insert_unique(
        txn: &DatabaseTransaction,
        email: String,
        username: String,
        password_hash: String,
    ) -> AppResult<user::Model> {
        let email_taken = UserEntity::find()
            .filter(user::Column::Email.eq(&email))
            .one(txn)
            .await
            .map_err(AppError::from)?
            .is_some();
        if email_taken {
            return Err(AppError::conflict("email"));
        }

        let username_taken = UserEntity::find()
            .filter(user::Column::Username.eq(&username))
            .one(txn)
            .await
            .map_err(AppError::from)?
            .is_some();
        if username_taken {
            return Err(AppError::conflict("username"));
        }

        let now = chrono::Utc::now();
        let active_model = ActiveModel {
            id: Set(Uuid::new_v4()),
            email: Set(email),
            username: Set(username),
            password_hash: Set(password_hash),
            is_active: Set(true),
            is_superuser: Set(false),
            created_at: Set(now),
            updated_at: Set(now),
        };

        active_model.insert(txn).await.map_err(AppError::from)
    }
}

#[async_trait]
impl UserRepository for UserStore {
    async fn create(
        &self,
        email: String,
        username: String,
        password_hash: String,
    ) -> AppResult<User> {
        let txn = self.db.begin().await.map_err(AppError::from)?;

        match Self::insert_unique(&txn, email, username, password_hash).await {
            Ok(model) => {
                txn.commit().await.map_err(AppError::from)?;
                Ok(User::from(model))
            }
            Err(e) => {
                if let Err(rollback_err) = txn.rollback().await {
                    tracing::error!("Transaction rollback failed: {}", rollback_err);
                }
                Err(e)
            }
        }
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<User>> {
        let result = UserEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(User::from))
    }

    async fn list(&self, skip: u64, limit: u64) -> AppResult<Vec<User>> {
        let models = UserEntity::find()
            .order_by_asc(user::Column::CreatedAt)
            .offset(skip)
            .limit(limit)
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(models.into_iter().map(User::from).collect())
    }
}
