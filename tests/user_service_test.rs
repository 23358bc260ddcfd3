//! User service unit tests.
//!
//! Uses the exported `MockUserRepository` for expectation-style tests
//! and an in-memory repository fake for behavior across calls.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use mockall::predicate::eq;
use uuid::Uuid;

use gas_platform_api::domain::{NewUser, User};
use gas_platform_api::errors::{AppError, AppResult};
use gas_platform_api::infra::{MockUserRepository, UserRepository};
use gas_platform_api::services::{UserDirectory, UserService};

fn create_test_user(id: Uuid) -> User {
    User::new(
        id,
        "test@example.com".to_string(),
        "testuser".to_string(),
        "hashed".to_string(),
    )
}

fn new_user(email: &str, username: &str) -> NewUser {
    NewUser {
        email: email.to_string(),
        username: username.to_string(),
        password: "SecurePass123".to_string(),
    }
}

// =============================================================================
// Mock-based tests
// =============================================================================

#[tokio::test]
async fn test_get_user_success() {
    let user_id = Uuid::new_v4();

    let mut repo = MockUserRepository::new();
    repo.expect_find_by_id()
        .with(eq(user_id))
        .returning(move |id| Ok(Some(create_test_user(id))));

    let service = UserDirectory::new(Arc::new(repo));
    let result = service.get_user(user_id).await;

    assert!(result.is_ok());
    assert_eq!(result.unwrap().id, user_id);
}

#[tokio::test]
async fn test_get_user_not_found() {
    let mut repo = MockUserRepository::new();
    repo.expect_find_by_id().returning(|_| Ok(None));

    let service = UserDirectory::new(Arc::new(repo));
    let result = service.get_user(Uuid::new_v4()).await;

    assert!(matches!(result.unwrap_err(), AppError::NotFound));
}

#[tokio::test]
async fn test_list_users_passes_window() {
    let mut repo = MockUserRepository::new();
    repo.expect_list()
        .with(eq(5u64), eq(50u64))
        .returning(|_, _| {
            Ok(vec![
                create_test_user(Uuid::new_v4()),
                create_test_user(Uuid::new_v4()),
            ])
        });

    let service = UserDirectory::new(Arc::new(repo));
    let result = service.list_users(5, 50).await;

    assert_eq!(result.unwrap().len(), 2);
}

#[tokio::test]
async fn test_create_user_hashes_password() {
    let mut repo = MockUserRepository::new();
    repo.expect_create()
        .withf(|email, username, password_hash| {
            email == "new@example.com"
                && username == "newuser"
                // Repository must never see the raw password
                && password_hash != "SecurePass123"
                && password_hash.starts_with("$argon2")
        })
        .returning(|email, username, password_hash| {
            Ok(User::new(Uuid::new_v4(), email, username, password_hash))
        });

    let service = UserDirectory::new(Arc::new(repo));
    let result = service
        .create_user(new_user("new@example.com", "newuser"))
        .await;

    let user = result.unwrap();
    assert_eq!(user.email, "new@example.com");
    assert!(user.is_active);
    assert!(!user.is_superuser);
}

#[tokio::test]
async fn test_create_user_short_password_never_reaches_repository() {
    // No expectation set: any repository call would panic the test
    let repo = MockUserRepository::new();

    let service = UserDirectory::new(Arc::new(repo));
    let result = service
        .create_user(NewUser {
            email: "new@example.com".to_string(),
            username: "newuser".to_string(),
            password: "short".to_string(),
        })
        .await;

    assert!(matches!(result.unwrap_err(), AppError::Validation(_)));
}

#[tokio::test]
async fn test_create_user_conflict_propagates() {
    let mut repo = MockUserRepository::new();
    repo.expect_create()
        .returning(|_, _, _| Err(AppError::conflict("email")));

    let service = UserDirectory::new(Arc::new(repo));
    let result = service
        .create_user(new_user("taken@example.com", "whoever"))
        .await;

    assert!(matches!(result.unwrap_err(), AppError::Conflict(_)));
}

// =============================================================================
// In-memory fake (uniqueness behavior across calls)
// =============================================================================

/// In-memory repository enforcing the same uniqueness rules as the
/// real store.
#[derive(Default)]
struct InMemoryUsers {
    rows: Mutex<Vec<User>>,
}

#[async_trait]
impl UserRepository for InMemoryUsers {
    async fn create(
        &self,
        email: String,
        username: String,
        password_hash: String,
    ) -> AppResult<User> {
        let mut rows = self.rows.lock().unwrap();
        if rows.iter().any(|u| u.email == email) {
            return Err(AppError::conflict("email"));
        }
        if rows.iter().any(|u| u.username == username) {
            return Err(AppError::conflict("username"));
        }
        let user = User::new(Uuid::new_v4(), email, username, password_hash);
        rows.push(user.clone());
        Ok(user)
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<User>> {
        Ok(self.rows.lock().unwrap().iter().find(|u| u.id == id).cloned())
    }

    async fn list(&self, skip: u64, limit: u64) -> AppResult<Vec<User>> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .skip(skip as usize)
            .take(limit as usize)
            .cloned()
            .collect())
    }
}

#[tokio::test]
async fn test_created_ids_are_unique() {
    let repo = Arc::new(InMemoryUsers::default());
    let service = UserDirectory::new(repo);

    let a = service
        .create_user(new_user("a@example.com", "alice"))
        .await
        .unwrap();
    let b = service
        .create_user(new_user("b@example.com", "bob"))
        .await
        .unwrap();

    assert_ne!(a.id, b.id);
}

#[tokio::test]
async fn test_create_then_get_round_trip() {
    let repo = Arc::new(InMemoryUsers::default());
    let service = UserDirectory::new(repo);

    let created = service
        .create_user(new_user("a@example.com", "alice"))
        .await
        .unwrap();
    let fetched = service.get_user(created.id).await.unwrap();

    assert_eq!(created, fetched);
}

#[tokio::test]
async fn test_duplicate_email_conflicts() {
    let repo = Arc::new(InMemoryUsers::default());
    let service = UserDirectory::new(repo);

    service
        .create_user(new_user("a@example.com", "alice"))
        .await
        .unwrap();
    let result = service
        .create_user(new_user("a@example.com", "alice2"))
        .await;

    assert!(matches!(result.unwrap_err(), AppError::Conflict(_)));
}

#[tokio::test]
async fn test_duplicate_username_conflicts() {
    let repo = Arc::new(InMemoryUsers::default());
    let service = UserDirectory::new(repo);

    service
        .create_user(new_user("a@example.com", "alice"))
        .await
        .unwrap();
    let result = service.create_user(new_user("b@example.com", "alice")).await;

    assert!(matches!(result.unwrap_err(), AppError::Conflict(_)));
}

#[tokio::test]
async fn test_get_unknown_id_is_not_found() {
    let repo = Arc::new(InMemoryUsers::default());
    let service = UserDirectory::new(repo);

    let result = service.get_user(Uuid::new_v4()).await;
    assert!(matches!(result.unwrap_err(), AppError::NotFound));
}

#[tokio::test]
async fn test_list_contains_created_users() {
    let repo = Arc::new(InMemoryUsers::default());
    let service = UserDirectory::new(repo);

    let mut ids = Vec::new();
    for i in 0..3 {
        let user = service
            .create_user(new_user(
                &format!("user{}@example.com", i),
                &format!("user{}", i),
            ))
            .await
            .unwrap();
        ids.push(user.id);
    }

    let listed = service.list_users(0, 100).await.unwrap();
    for id in ids {
        assert!(listed.iter().any(|u| u.id == id));
    }
}

#[tokio::test]
async fn test_rejected_create_leaves_no_row() {
    let repo = Arc::new(InMemoryUsers::default());
    let service = UserDirectory::new(repo.clone());

    let result = service
        .create_user(NewUser {
            email: "a@example.com".to_string(),
            username: "alice".to_string(),
            password: "short".to_string(),
        })
        .await;
    assert!(result.is_err());

    let listed = service.list_users(0, 100).await.unwrap();
    assert!(listed.is_empty());
}
