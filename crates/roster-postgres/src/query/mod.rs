//! Query repositories for the entities in the store.
//!
//! Repositories are traits implemented directly on the async connection, so
//! a checked-out [`PgConn`] exposes every operation without further plumbing.
//!
//! Listing queries take a [`Pagination`] so result sets stay bounded.
//!
//! [`PgConn`]: crate::PgConn

pub mod user;

pub use user::UserRepository;

use serde::{Deserialize, Serialize};

/// Store-side pagination window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    /// Maximum number of records to return.
    pub limit: i64,
    /// Number of records to skip.
    pub offset: i64,
}

impl Pagination {
    /// Creates a window, clamping `limit` to at least 1 and `offset` to at
    /// least 0.
    pub fn new(limit: i64, offset: i64) -> Self {
        Self {
            limit: limit.max(1),
            offset: offset.max(0),
        }
    }

    /// Creates the window for a 1-based page number.
    pub fn from_page(page: i64, page_size: i64) -> Self {
        let page = page.max(1);
        let page_size = page_size.max(1);
        Self::new(page_size, (page - 1) * page_size)
    }

    /// Returns the 1-based page number this window corresponds to.
    pub fn page_number(&self) -> i64 {
        (self.offset / self.limit) + 1
    }

    /// Returns the page size.
    pub fn page_size(&self) -> i64 {
        self.limit
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self::new(15, 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn passes_valid_bounds_through() {
        let window = Pagination::new(25, 100);
        assert_eq!(window.limit, 25);
        assert_eq!(window.offset, 100);
    }

    #[test]
    fn clamps_degenerate_bounds() {
        assert_eq!(Pagination::new(0, 10).limit, 1);
        assert_eq!(Pagination::new(-3, 10).limit, 1);
        assert_eq!(Pagination::new(10, -5).offset, 0);
    }

    #[test]
    fn derives_offset_from_page_number() {
        assert_eq!(Pagination::from_page(1, 20).offset, 0);
        assert_eq!(Pagination::from_page(2, 20).offset, 20);
        assert_eq!(Pagination::from_page(3, 10).offset, 20);

        // Degenerate pages clamp instead of going negative
        assert_eq!(Pagination::from_page(0, 20).offset, 0);
        assert_eq!(Pagination::from_page(1, 0).limit, 1);
    }

    #[test]
    fn recovers_page_number_from_offset() {
        assert_eq!(Pagination::new(20, 0).page_number(), 1);
        assert_eq!(Pagination::new(20, 20).page_number(), 2);
        assert_eq!(Pagination::new(10, 25).page_number(), 3);
    }

    #[test]
    fn default_matches_first_page() {
        let window = Pagination::default();
        assert_eq!(window.limit, 15);
        assert_eq!(window.offset, 0);
    }
}
