/// Server-driven pagination bookkeeping. `total` is authoritative from the
/// last list response; everything else derives from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageState {
    /// 1-based current page.
    pub page: u64,
    pub page_size: u64,
    pub total: u64,
}

impl PageState {
    pub fn new(page: u64, page_size: u64) -> Self {
        Self { page: page.max(1), page_size: page_size.max(1), total: 0 }
    }

    pub fn total_pages(&self) -> u64 {
        self.total.div_ceil(self.page_size)
    }

    /// 1-based index of the first row shown on this page.
    pub fn start_item(&self) -> u64 {
        (self.page - 1) * self.page_size + 1
    }

    /// 1-based index of the last row shown on this page.
    pub fn end_item(&self) -> u64 {
        (self.page * self.page_size).min(self.total)
    }

    pub fn has_prev(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages()
    }

    /// Page numbers to offer, at most five, centered on the current page and
    /// clamped into the valid range.
    pub fn page_window(&self) -> Vec<u64> {
        let total_pages = self.total_pages();
        if total_pages == 0 {
            return Vec::new();
        }

        let mut start = self.page.saturating_sub(2).max(1);
        let end = (start + 4).min(total_pages);
        if end - start < 4 {
            start = end.saturating_sub(4).max(1);
        }

        (start..=end).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derivation_for_middle_page() {
        let p = PageState { page: 2, page_size: 20, total: 45 };
        assert_eq!(p.total_pages(), 3);
        assert_eq!(p.start_item(), 21);
        assert_eq!(p.end_item(), 40);
        assert!(p.has_prev());
        assert!(p.has_next());
    }

    #[test]
    fn last_page_is_partial() {
        let p = PageState { page: 3, page_size: 20, total: 45 };
        assert_eq!(p.start_item(), 41);
        assert_eq!(p.end_item(), 45);
        assert!(p.has_prev());
        assert!(!p.has_next());
    }

    #[test]
    fn single_page_has_no_navigation() {
        let p = PageState { page: 1, page_size: 20, total: 5 };
        assert_eq!(p.total_pages(), 1);
        assert!(!p.has_prev());
        assert!(!p.has_next());
    }

    #[test]
    fn window_is_centered_and_clamped() {
        let mk = |page, total| PageState { page, page_size: 10, total };

        // plenty of pages on both sides
        assert_eq!(mk(5, 100).page_window(), vec![3, 4, 5, 6, 7]);
        // clamped at the start
        assert_eq!(mk(1, 100).page_window(), vec![1, 2, 3, 4, 5]);
        assert_eq!(mk(2, 100).page_window(), vec![1, 2, 3, 4, 5]);
        // clamped at the end
        assert_eq!(mk(10, 100).page_window(), vec![6, 7, 8, 9, 10]);
        assert_eq!(mk(9, 100).page_window(), vec![6, 7, 8, 9, 10]);
        // fewer than five pages total
        assert_eq!(mk(1, 25).page_window(), vec![1, 2, 3]);
        // no rows at all
        assert_eq!(mk(1, 0).page_window(), Vec::<u64>::new());
    }
}
