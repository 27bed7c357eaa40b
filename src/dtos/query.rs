//! Query DTOs - pagination parameters shared by every list endpoint

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Largest page a list endpoint will return; also the default page size
pub const MAX_PAGE_SIZE: i64 = 100;

fn default_limit() -> i64 {
    MAX_PAGE_SIZE
}

/// `?offset=..&limit=..`. Out-of-range values are rejected, never clamped
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Validate)]
pub struct PaginationQuery {
    #[serde(default)]
    #[validate(range(min = 0, message = "offset must be greater than or equal to 0"))]
    pub offset: i64,
    #[serde(default = "default_limit")]
    #[validate(range(min = 1, max = MAX_PAGE_SIZE, message = "limit must be between 1 and 100"))]
    pub limit: i64,
}

impl Default for PaginationQuery {
    fn default() -> Self {
        Self {
            offset: 0,
            limit: MAX_PAGE_SIZE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_when_parameters_are_missing() {
        let query: PaginationQuery = serde_json::from_str("{}").unwrap();
        assert_eq!(query, PaginationQuery::default());
        assert!(query.validate().is_ok());
    }

    #[test]
    fn limit_bounds_are_enforced() {
        let max = PaginationQuery { offset: 0, limit: MAX_PAGE_SIZE };
        let too_big = PaginationQuery { offset: 0, limit: MAX_PAGE_SIZE + 1 };
        let zero = PaginationQuery { offset: 0, limit: 0 };
        let negative_offset = PaginationQuery { offset: -1, limit: 10 };

        assert!(max.validate().is_ok());
        assert!(too_big.validate().is_err());
        assert!(zero.validate().is_err());
        assert!(negative_offset.validate().is_err());
    }
}
