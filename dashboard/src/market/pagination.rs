//! # Pagination Controller
//!
//! Tracks how many rows of the current result set are revealed. Pure
//! arithmetic over bounded integers; the scroll-sentinel policy that decides
//! *when* to reveal more lives in [`crate::market::list`], keeping this type
//! free of any rendering-environment dependency.

/// Rows revealed per step, and the initial page
pub const PAGE_SIZE: usize = 50;

/// Visible-row accounting for one backing list.
///
/// `visible_count` is monotonically non-decreasing between [`reset`] calls
/// and is always clamped to the backing list's length.
///
/// [`reset`]: PaginationController::reset
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaginationController {
    page_size: usize,
    visible: usize,
    total: usize,
}

impl PaginationController {
    pub fn new(page_size: usize) -> Self {
        PaginationController { page_size, visible: 0, total: 0 }
    }

    /// Re-seed for a new backing list. Called whenever the committed list
    /// changes identity.
    pub fn reset(&mut self, total: usize) {
        self.total = total;
        self.visible = self.page_size.min(total);
    }

    /// Reveal the next page. Saturates at the list length, so repeated calls
    /// at the ceiling are no-ops.
    pub fn reveal_more(&mut self) {
        self.visible = (self.visible + self.page_size).min(self.total);
    }

    /// Whether any rows remain hidden.
    pub fn has_more(&self) -> bool {
        self.visible < self.total
    }

    pub fn visible_count(&self) -> usize {
        self.visible
    }
}

impl Default for PaginationController {
    fn default() -> Self {
        PaginationController::new(PAGE_SIZE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reset_clamps_to_total() {
        let mut pager = PaginationController::new(50);

        pager.reset(120);
        assert_eq!(pager.visible_count(), 50);

        pager.reset(30);
        assert_eq!(pager.visible_count(), 30);

        pager.reset(0);
        assert_eq!(pager.visible_count(), 0);
        assert!(!pager.has_more());
    }

    #[test]
    fn test_reveal_more_steps_by_page_size() {
        let mut pager = PaginationController::new(50);
        pager.reset(120);

        pager.reveal_more();
        assert_eq!(pager.visible_count(), 100);

        pager.reveal_more();
        assert_eq!(pager.visible_count(), 120);
    }

    #[test]
    fn test_reveal_more_is_idempotent_at_ceiling() {
        let mut pager = PaginationController::new(50);
        pager.reset(120);
        pager.reveal_more();
        pager.reveal_more();
        assert_eq!(pager.visible_count(), 120);
        assert!(!pager.has_more());

        // Repeated calls never exceed the total
        pager.reveal_more();
        pager.reveal_more();
        assert_eq!(pager.visible_count(), 120);
    }

    #[test]
    fn test_has_more_tracks_hidden_rows() {
        let mut pager = PaginationController::new(50);
        pager.reset(120);
        assert!(pager.has_more());

        pager.reveal_more();
        assert!(pager.has_more());

        pager.reveal_more();
        assert!(!pager.has_more());
    }

    #[test]
    fn test_exact_multiple_of_page_size() {
        let mut pager = PaginationController::new(50);
        pager.reset(100);
        assert_eq!(pager.visible_count(), 50);

        pager.reveal_more();
        assert_eq!(pager.visible_count(), 100);
        assert!(!pager.has_more());
    }
}
