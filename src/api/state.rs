//! Application state - Dependency injection container.
//!
//! Constructed once at startup and passed to the router; there is no
//! process-global application object.

use std::sync::Arc;

use crate::infra::{Database, UserStore};
use crate::services::{UserDirectory, UserService};

/// Application state containing all services
#[derive(Clone)]
pub struct AppState {
    /// User service
    pub user_service: Arc<dyn UserService>,
    /// Database connection
    pub database: Arc<Database>,
}

impl AppState {
    /// Create application state from an established database connection.
    ///
    /// Wires the repository and service layers over the shared
    /// connection.
    pub fn from_config(database: Arc<Database>) -> Self {
        let repo = Arc::new(UserStore::new(database.get_connection()));
        let user_service = Arc::new(UserDirectory::new(repo));

        Self {
            user_service,
            database,
        }
    }

    /// Create application state with a manually injected service.
    ///
    /// Intended for tests that substitute a mock or fake service.
    pub fn new(user_service: Arc<dyn UserService>, database: Arc<Database>) -> Self {
        Self {
            user_service,
            database,
        }
    }
}
