//! Application-wide constants
//!
//! Centralized location for magic values to improve maintainability.

// =============================================================================
// API
// =============================================================================

/// URL prefix for the versioned API surface
pub const API_V1_PREFIX: &str = "/api/v1";

// =============================================================================
// List queries
// =============================================================================

/// Default number of records skipped by list endpoints
pub const DEFAULT_LIST_SKIP: u64 = 0;

/// Default number of records returned by list endpoints
pub const DEFAULT_LIST_LIMIT: u64 = 100;

/// Maximum allowed list size to prevent excessive queries
pub const MAX_LIST_LIMIT: u64 = 1000;

// =============================================================================
// Server Configuration
// =============================================================================

/// Default server host address
pub const DEFAULT_SERVER_HOST: &str = "0.0.0.0";

/// Default server port
pub const DEFAULT_SERVER_PORT: u16 = 8000;

// =============================================================================
// Database
// =============================================================================

/// Default PostgreSQL host
pub const DEFAULT_POSTGRES_SERVER: &str = "localhost";

/// Default PostgreSQL port
pub const DEFAULT_POSTGRES_PORT: &str = "5432";

// =============================================================================
// Validation
// =============================================================================

/// Minimum password length requirement
pub const MIN_PASSWORD_LENGTH: u64 = 8;
