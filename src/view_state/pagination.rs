//! Page arithmetic for article lists.

/// Position within a paged list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    /// Zero-based.
    pub current_page: u32,
    pub total_count: u32,
    pub page_size: u32,
}

impl Pagination {
    pub fn new(current_page: u32, total_count: u32, page_size: u32) -> Self {
        Self {
            current_page,
            total_count,
            page_size,
        }
    }

    pub fn page_count(&self) -> u32 {
        if self.page_size == 0 {
            return 0;
        }
        self.total_count.div_ceil(self.page_size)
    }

    /// Page links are only shown when there is more than one page.
    pub fn is_visible(&self) -> bool {
        self.total_count > self.page_size
    }

    pub fn has_next(&self) -> bool {
        self.current_page + 1 < self.page_count()
    }

    pub fn has_previous(&self) -> bool {
        self.current_page > 0
    }

    /// Clamp `page` into the valid range.
    pub fn clamp(&self, page: u32) -> u32 {
        page.min(self.page_count().saturating_sub(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_count_rounds_up() {
        assert_eq!(Pagination::new(0, 0, 10).page_count(), 0);
        assert_eq!(Pagination::new(0, 10, 10).page_count(), 1);
        assert_eq!(Pagination::new(0, 11, 10).page_count(), 2);
        assert_eq!(Pagination::new(0, 23, 5).page_count(), 5);
    }

    #[test]
    fn test_hidden_for_single_page() {
        assert!(!Pagination::new(0, 10, 10).is_visible());
        assert!(Pagination::new(0, 11, 10).is_visible());
    }

    #[test]
    fn test_navigation_bounds() {
        let first = Pagination::new(0, 25, 10);
        assert!(first.has_next());
        assert!(!first.has_previous());

        let last = Pagination::new(2, 25, 10);
        assert!(!last.has_next());
        assert!(last.has_previous());
        assert_eq!(last.clamp(7), 2);
    }

    #[test]
    fn test_zero_page_size() {
        let p = Pagination::new(0, 5, 0);
        assert_eq!(p.page_count(), 0);
        assert_eq!(p.clamp(3), 0);
    }
}
