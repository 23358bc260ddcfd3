//! List query parameters for collection endpoints.

use serde::Deserialize;
use utoipa::IntoParams;

use crate::config::{DEFAULT_LIST_LIMIT, DEFAULT_LIST_SKIP, MAX_LIST_LIMIT};

/// Offset/limit query parameters for list endpoints
#[derive(Debug, Clone, Deserialize, IntoParams)]
pub struct ListParams {
    /// Number of records to skip
    #[serde(default = "default_skip")]
    pub skip: u64,
    /// Maximum number of records to return
    #[serde(default = "default_limit")]
    pub limit: u64,
}

fn default_skip() -> u64 {
    DEFAULT_LIST_SKIP
}

fn default_limit() -> u64 {
    DEFAULT_LIST_LIMIT
}

impl ListParams {
    /// Get limit capped at maximum
    pub fn limit(&self) -> u64 {
        self.limit.min(MAX_LIST_LIMIT)
    }
}

impl Default for ListParams {
    fn default() -> Self {
        Self {
            skip: DEFAULT_LIST_SKIP,
            limit: DEFAULT_LIST_LIMIT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let params = ListParams::default();
        assert_eq!(params.skip, 0);
        assert_eq!(params.limit(), DEFAULT_LIST_LIMIT);
    }

    #[test]
    fn test_limit_is_capped() {
        let params = ListParams {
            skip: 0,
            limit: MAX_LIST_LIMIT + 500,
        };
        assert_eq!(params.limit(), MAX_LIST_LIMIT);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let params: ListParams = serde_json::from_str("{}").unwrap();
        assert_eq!(params.skip, 0);
        assert_eq!(params.limit, DEFAULT_LIST_LIMIT);
    }
}
