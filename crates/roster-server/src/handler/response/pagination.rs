//! Pagination descriptor included in listing responses.

use serde::{Deserialize, Serialize};

/// Pagination metadata for a listing response.
#[must_use]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    /// Page number of this response (1-based).
    pub page: i64,
    /// Requested number of records per page.
    pub limit: i64,
    /// Exact number of stored users at query time.
    pub total_users: i64,
    /// Total number of pages at the given limit.
    pub total_pages: i64,
}

impl PageInfo {
    /// Creates pagination metadata for a page of `total_users` records.
    ///
    /// `total_pages` is the ceiling of `total_users / limit`, and 0 when the
    /// store is empty.
    pub fn new(page: i64, limit: i64, total_users: i64) -> Self {
        let limit = limit.max(1);
        Self {
            page,
            limit,
            total_users,
            total_pages: (total_users + limit - 1) / limit,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_store_has_zero_pages() {
        let info = PageInfo::new(1, 10, 0);
        assert_eq!(info.total_pages, 0);
        assert_eq!(info.total_users, 0);
    }

    #[test]
    fn partial_last_page_rounds_up() {
        let info = PageInfo::new(1, 10, 25);
        assert_eq!(info.total_pages, 3);

        let info = PageInfo::new(1, 10, 30);
        assert_eq!(info.total_pages, 3);

        let info = PageInfo::new(1, 10, 31);
        assert_eq!(info.total_pages, 4);
    }

    #[test]
    fn exact_fit_is_not_rounded() {
        let info = PageInfo::new(1, 15, 15);
        assert_eq!(info.total_pages, 1);
    }

    #[test]
    fn serializes_with_camel_case_keys() {
        let info = PageInfo::new(2, 15, 40);
        let body = serde_json::to_value(info).unwrap();
        assert_eq!(
            body,
            serde_json::json!({
                "page": 2,
                "limit": 15,
                "totalUsers": 40,
                "totalPages": 3,
            })
        );
    }
}
