//! Shared types used across the API layer.

mod pagination;

pub use pagination::ListParams;
