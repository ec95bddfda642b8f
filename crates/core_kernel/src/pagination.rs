//! Offset pagination primitives
//!
//! Listing endpoints take a page size and a row offset, and report the
//! total number of matches alongside the returned slice. Page counts use
//! truncating integer division: 25 matches at 10 per page is 2 pages, not 3.

use serde::{Deserialize, Serialize};

/// A page size plus the number of leading rows to skip
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    /// Maximum number of rows to return (always at least 1)
    pub limit: u32,
    /// Number of matching rows to skip
    pub offset: u32,
}

impl PageRequest {
    /// Creates a page request, returning `None` for a zero limit
    pub fn new(limit: u32, offset: u32) -> Option<Self> {
        (limit > 0).then_some(Self { limit, offset })
    }

    /// Number of pages needed for `total` rows, truncating any partial page
    pub fn total_pages(&self, total: u64) -> u64 {
        total / u64::from(self.limit)
    }
}

/// A slice of results together with the total count of matching rows
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<T> {
    /// Rows in this slice
    pub items: Vec<T>,
    /// Number of rows matching the filter, ignoring limit and offset
    pub total: u64,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, total: u64) -> Self {
        Self { items, total }
    }

    /// Cuts a page out of an already-filtered, already-ordered result set
    pub fn from_slice(all: Vec<T>, request: PageRequest) -> Self {
        let total = all.len() as u64;
        let items = all
            .into_iter()
            .skip(request.offset as usize)
            .take(request.limit as usize)
            .collect();
        Self { items, total }
    }

    /// Transforms every row while keeping the total
    pub fn map<U, F>(self, f: F) -> Page<U>
    where
        F: FnMut(T) -> U,
    {
        Page {
            items: self.items.into_iter().map(f).collect(),
            total: self.total,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_zero_limit_rejected() {
        assert!(PageRequest::new(0, 0).is_none());
        assert!(PageRequest::new(1, 0).is_some());
    }

    #[test]
    fn test_total_pages_truncates() {
        let request = PageRequest::new(10, 0).unwrap();
        assert_eq!(request.total_pages(25), 2);
        assert_eq!(request.total_pages(9), 0);
        assert_eq!(request.total_pages(30), 3);
    }

    #[test]
    fn test_from_slice_beyond_end() {
        let page = Page::from_slice(vec![1, 2, 3], PageRequest::new(5, 10).unwrap());
        assert!(page.items.is_empty());
        assert_eq!(page.total, 3);
    }

    #[test]
    fn test_from_slice_window() {
        let page = Page::from_slice((0..10).collect(), PageRequest::new(3, 4).unwrap());
        assert_eq!(page.items, vec![4, 5, 6]);
        assert_eq!(page.total, 10);
    }

    proptest! {
        #[test]
        fn total_pages_never_rounds_up(total in 0u64..100_000, limit in 1u32..1_000) {
            let request = PageRequest::new(limit, 0).unwrap();
            let pages = request.total_pages(total);
            prop_assert!(pages * u64::from(limit) <= total);
            prop_assert!((pages + 1) * u64::from(limit) > total);
        }
    }
}
