//! Domain layer - Core business entities
//!
//! Contains the core domain models that represent business concepts
//! independent of infrastructure concerns.

pub mod password;
pub mod user;

pub use password::Password;
pub use user::{NewUser, User, UserResponse};
