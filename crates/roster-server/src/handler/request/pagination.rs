//! Pagination parameters commonly used in API queries.
//!
//! Query values arrive as optional strings and are resolved leniently:
//! anything that does not parse as an integer falls back to the default, and
//! both page and limit are clamped to at least 1. Resolution never fails;
//! malformed input degrades to defaults instead of rejecting the request.

use roster_postgres::query::Pagination as QueryPagination;
use serde::{Deserialize, Serialize};

/// Raw pagination parameters as sent by the client.
///
/// Values are kept as strings so that non-numeric input can be resolved
/// leniently instead of failing query-string deserialization.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct PageParams {
    /// Requested page number (1-based).
    #[serde(default)]
    pub page: Option<String>,

    /// Requested number of records per page.
    #[serde(default)]
    pub limit: Option<String>,
}

impl PageParams {
    /// Default page number.
    const DEFAULT_PAGE: i64 = 1;
    /// Default number of records per page.
    const DEFAULT_LIMIT: i64 = 15;

    /// Resolves the raw parameters into validated pagination bounds.
    pub fn resolve(&self) -> PageRequest {
        PageRequest {
            page: parse_positive(self.page.as_deref(), Self::DEFAULT_PAGE),
            limit: parse_positive(self.limit.as_deref(), Self::DEFAULT_LIMIT),
        }
    }
}

/// Parses an optional query value into a positive integer.
///
/// Absent or unparsable values yield `default`; parsed values are clamped
/// to at least 1.
fn parse_positive(raw: Option<&str>, default: i64) -> i64 {
    raw.and_then(|value| value.trim().parse::<i64>().ok())
        .unwrap_or(default)
        .max(1)
}

/// Resolved pagination bounds.
///
/// Both fields are guaranteed to be at least 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    /// Page number (1-based).
    pub page: i64,
    /// Number of records per page.
    pub limit: i64,
}

impl PageRequest {
    /// Returns the number of records to skip before this page.
    #[inline]
    pub fn skip(&self) -> i64 {
        (self.page - 1) * self.limit
    }
}

impl From<PageRequest> for QueryPagination {
    fn from(request: PageRequest) -> Self {
        Self::new(request.limit, request.skip())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(page: Option<&str>, limit: Option<&str>) -> PageParams {
        PageParams {
            page: page.map(str::to_owned),
            limit: limit.map(str::to_owned),
        }
    }

    #[test]
    fn absent_values_resolve_to_defaults() {
        let request = params(None, None).resolve();
        assert_eq!(request, PageRequest { page: 1, limit: 15 });
        assert_eq!(request.skip(), 0);
    }

    #[test]
    fn zero_and_negative_values_clamp_to_one() {
        let request = params(Some("0"), Some("-5")).resolve();
        assert_eq!(request, PageRequest { page: 1, limit: 1 });
        assert_eq!(request.skip(), 0);
    }

    #[test]
    fn malformed_values_resolve_to_defaults() {
        let request = params(Some("abc"), Some("2.5")).resolve();
        assert_eq!(request, PageRequest { page: 1, limit: 15 });

        let request = params(Some(""), Some("ten")).resolve();
        assert_eq!(request, PageRequest { page: 1, limit: 15 });
    }

    #[test]
    fn valid_values_pass_through() {
        let request = params(Some("3"), Some("25")).resolve();
        assert_eq!(request, PageRequest { page: 3, limit: 25 });
        assert_eq!(request.skip(), 50);
    }

    #[test]
    fn surrounding_whitespace_is_tolerated() {
        let request = params(Some(" 2 "), Some(" 10")).resolve();
        assert_eq!(request, PageRequest { page: 2, limit: 10 });
    }

    #[test]
    fn converts_into_query_pagination() {
        let request = params(Some("4"), Some("10")).resolve();
        let pagination = QueryPagination::from(request);
        assert_eq!(pagination.limit, 10);
        assert_eq!(pagination.offset, 30);
    }
}
