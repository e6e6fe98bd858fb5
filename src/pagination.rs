//! Pagination Math
//!
//! 1-based page arithmetic for the application table.

use std::ops::Range;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub total: usize,
    pub per_page: usize,
    pub page: usize,
}

impl Pagination {
    pub fn new(total: usize, per_page: usize, page: usize) -> Self {
        Self {
            total,
            per_page: per_page.max(1),
            page: page.max(1),
        }
    }

    pub fn total_pages(&self) -> usize {
        self.total.div_ceil(self.per_page)
    }

    /// Index range of the rows on the current page, empty past the end
    pub fn range(&self) -> Range<usize> {
        let start = ((self.page - 1) * self.per_page).min(self.total);
        let end = (self.page * self.per_page).min(self.total);
        start..end
    }

    /// Serial number shown in the first column for row `index` of the page
    pub fn serial(&self, index: usize) -> usize {
        (self.page - 1) * self.per_page + index + 1
    }

    /// "1 - 10 of 23", or "No records"
    pub fn summary(&self) -> String {
        if self.total == 0 {
            return "No records".to_string();
        }
        let first = (self.page - 1) * self.per_page + 1;
        let last = (self.page * self.per_page).min(self.total);
        format!("{} - {} of {}", first, last, self.total)
    }

    pub fn has_prev(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages()
    }

    /// Page number pulled back into `1..=total_pages` (1 when empty)
    pub fn clamp_page(page: usize, total: usize, per_page: usize) -> usize {
        let pages = Pagination::new(total, per_page, 1).total_pages();
        page.clamp(1, pages.max(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_pages() {
        assert_eq!(Pagination::new(0, 10, 1).total_pages(), 0);
        assert_eq!(Pagination::new(10, 10, 1).total_pages(), 1);
        assert_eq!(Pagination::new(11, 10, 1).total_pages(), 2);
        assert_eq!(Pagination::new(23, 10, 1).total_pages(), 3);
    }

    #[test]
    fn test_range_and_serial() {
        let p = Pagination::new(23, 10, 3);
        assert_eq!(p.range(), 20..23);
        assert_eq!(p.serial(0), 21);
        assert_eq!(p.serial(2), 23);

        let past_end = Pagination::new(5, 10, 4);
        assert!(past_end.range().is_empty());
    }

    #[test]
    fn test_summary() {
        assert_eq!(Pagination::new(0, 10, 1).summary(), "No records");
        assert_eq!(Pagination::new(23, 10, 1).summary(), "1 - 10 of 23");
        assert_eq!(Pagination::new(23, 10, 3).summary(), "21 - 23 of 23");
    }

    #[test]
    fn test_prev_next() {
        let first = Pagination::new(23, 10, 1);
        assert!(!first.has_prev());
        assert!(first.has_next());

        let last = Pagination::new(23, 10, 3);
        assert!(last.has_prev());
        assert!(!last.has_next());

        let empty = Pagination::new(0, 10, 1);
        assert!(!empty.has_prev());
        assert!(!empty.has_next());
    }

    #[test]
    fn test_clamp_page() {
        assert_eq!(Pagination::clamp_page(3, 20, 10), 2);
        assert_eq!(Pagination::clamp_page(2, 20, 10), 2);
        assert_eq!(Pagination::clamp_page(4, 0, 10), 1);
        assert_eq!(Pagination::clamp_page(0, 5, 10), 1);
    }
}
