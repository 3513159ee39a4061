//! Fixed-size paging over a sorted list.
//!
//! A [`DisplayWindow`] is the only mutable state the bar chart owns: the index
//! of the active page plus the page size. The number of pages and the visible
//! slice are always derived from the current list length, never stored.

use std::ops::Range;

/// Default number of bars shown per page.
pub const DEFAULT_DISPLAY_AMOUNT: usize = 6;

/// Number of pages needed to show `len` items, `size` at a time.
pub fn step_count(len: usize, size: usize) -> usize {
    len.div_ceil(size.max(1))
}

/// A user-triggered page change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageAction {
    Next,
    Back,
    Jump(usize),
}

/// The active page of a paged list.
///
/// Transitions never wrap and never leave `0..step_count`; a request that
/// would go out of range is a no-op and reports `false`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayWindow {
    offset: usize,
    size: usize,
}

impl Default for DisplayWindow {
    fn default() -> Self {
        Self::new(DEFAULT_DISPLAY_AMOUNT)
    }
}

impl DisplayWindow {
    /// A window on the first page. A size of zero is treated as one.
    pub fn new(size: usize) -> Self {
        if size == 0 {
            log::warn!("pager: display size of 0 requested, using 1");
        }
        Self {
            offset: 0,
            size: size.max(1),
        }
    }

    /// A window positioned at `offset`, clamped to the pages available for `len` items.
    pub fn at(size: usize, offset: usize, len: usize) -> Self {
        let mut window = Self::new(size);
        window.offset = offset;
        window.clamp(len);
        window
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn step_count(&self, len: usize) -> usize {
        step_count(len, self.size)
    }

    pub fn is_first(&self) -> bool {
        self.offset == 0
    }

    pub fn is_last(&self, len: usize) -> bool {
        self.offset + 1 >= self.step_count(len)
    }

    /// Advance one page. Returns whether the offset changed.
    pub fn next(&mut self, len: usize) -> bool {
        if self.offset + 1 < self.step_count(len) {
            self.offset += 1;
            true
        } else {
            false
        }
    }

    /// Go back one page. Returns whether the offset changed.
    pub fn back(&mut self) -> bool {
        if self.offset > 0 {
            self.offset -= 1;
            true
        } else {
            false
        }
    }

    /// Jump straight to `page`. Out-of-range pages are ignored.
    pub fn jump_to(&mut self, page: usize, len: usize) -> bool {
        if page < self.step_count(len) && page != self.offset {
            self.offset = page;
            true
        } else {
            false
        }
    }

    /// Apply a page change. Returns whether the offset changed.
    pub fn apply(&mut self, action: PageAction, len: usize) -> bool {
        match action {
            PageAction::Next => self.next(len),
            PageAction::Back => self.back(),
            PageAction::Jump(page) => self.jump_to(page, len),
        }
    }

    /// Pull a stale offset back onto the last page after the list shrank.
    pub fn clamp(&mut self, len: usize) {
        let last = self.step_count(len).saturating_sub(1);
        if self.offset > last {
            log::debug!("pager: clamping offset {} to {}", self.offset, last);
            self.offset = last;
        }
    }

    /// Index range of the visible items, clipped to `len`.
    pub fn range(&self, len: usize) -> Range<usize> {
        let start = (self.offset * self.size).min(len);
        let end = (start + self.size).min(len);
        start..end
    }

    /// The visible items of `items`.
    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        &items[self.range(items.len())]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resource::{sort_resources, Resource};

    /// Replays how the chart drives its stored offset: every click rebuilds the
    /// window from the stored value, and a length change writes the clamped
    /// offset back.
    struct StoredOffset {
        offset: usize,
        size: usize,
    }

    impl StoredOffset {
        fn click(&mut self, action: PageAction, len: usize) {
            let mut window = DisplayWindow::at(self.size, self.offset, len);
            if window.apply(action, len) {
                self.offset = window.offset();
            }
        }

        fn resize(&mut self, len: usize) {
            self.offset = DisplayWindow::at(self.size, self.offset, len).offset();
        }

        fn shown(&self, len: usize) -> usize {
            DisplayWindow::at(self.size, self.offset, len).offset()
        }
    }

    /// Ten resources whose rank by current cost is the number in their name,
    /// fed in scrambled order.
    fn ranked_resources() -> Vec<Resource> {
        [7, 2, 10, 5, 1, 9, 4, 8, 3, 6]
            .iter()
            .map(|&rank| Resource::new(format!("rank-{rank}"), 0.0, 1000.0 - rank as f64))
            .collect()
    }

    fn window_names(resources: &[Resource], size: usize, offset: usize) -> Vec<String> {
        let sorted = sort_resources(resources);
        DisplayWindow::at(size, offset, sorted.len())
            .slice(&sorted)
            .iter()
            .map(|r| r.name.clone())
            .collect()
    }

    fn rank_names(ranks: std::ops::RangeInclusive<u32>) -> Vec<String> {
        ranks.map(|rank| format!("rank-{rank}")).collect()
    }

    #[test]
    fn test_step_count() {
        assert_eq!(step_count(0, 6), 0);
        assert_eq!(step_count(5, 5), 1);
        assert_eq!(step_count(10, 6), 2);
        assert_eq!(step_count(10, 7), 2);
        assert_eq!(step_count(68, 6), 12);
        assert_eq!(step_count(3, 0), 3);
    }

    #[test]
    fn test_initial_window() {
        let items: Vec<u32> = (1..=10).collect();
        let window = DisplayWindow::new(6);
        assert_eq!(window.offset(), 0);
        assert_eq!(window.slice(&items), &[1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_next_shows_partial_last_page() {
        let items: Vec<u32> = (1..=10).collect();
        let mut window = DisplayWindow::new(7);
        assert_eq!(window.slice(&items), &[1, 2, 3, 4, 5, 6, 7]);
        assert!(window.next(items.len()));
        assert_eq!(window.slice(&items), &[8, 9, 10]);
    }

    #[test]
    fn test_next_at_last_page_is_noop() {
        let mut window = DisplayWindow::new(6);
        assert!(window.next(10));
        assert!(window.is_last(10));
        assert!(!window.next(10));
        assert_eq!(window.offset(), 1);
    }

    #[test]
    fn test_back_at_first_page_is_noop() {
        let mut window = DisplayWindow::new(6);
        assert!(!window.back());
        assert_eq!(window.offset(), 0);
        window.next(10);
        assert!(window.back());
        assert_eq!(window.offset(), 0);
    }

    #[test]
    fn test_offset_stays_in_range_through_navigation() {
        let len = 68;
        let mut window = DisplayWindow::default();
        for _ in 0..20 {
            window.next(len);
            assert!(window.offset() < window.step_count(len));
        }
        assert_eq!(window.offset(), 11);
        for _ in 0..20 {
            window.back();
        }
        assert_eq!(window.offset(), 0);
    }

    #[test]
    fn test_every_item_shown_exactly_once() {
        let items: Vec<u32> = (0..68).collect();
        let mut window = DisplayWindow::default();
        let mut seen = window.slice(&items).to_vec();
        while window.next(items.len()) {
            seen.extend_from_slice(window.slice(&items));
        }
        assert_eq!(seen, items);
    }

    #[test]
    fn test_empty_list() {
        let items: Vec<u32> = Vec::new();
        let mut window = DisplayWindow::new(6);
        assert_eq!(window.step_count(0), 0);
        assert!(window.slice(&items).is_empty());
        assert!(!window.next(0));
        assert!(!window.back());
    }

    #[test]
    fn test_jump_to() {
        let mut window = DisplayWindow::new(6);
        assert!(window.jump_to(11, 68));
        assert_eq!(window.offset(), 11);
        assert!(!window.jump_to(12, 68));
        assert!(!window.jump_to(11, 68));
        assert_eq!(window.offset(), 11);
    }

    #[test]
    fn test_at_clamps_after_list_shrinks() {
        let window = DisplayWindow::at(6, 11, 68);
        assert_eq!(window.offset(), 11);
        let shrunk = DisplayWindow::at(6, 11, 10);
        assert_eq!(shrunk.offset(), 1);
        let emptied = DisplayWindow::at(6, 3, 0);
        assert_eq!(emptied.offset(), 0);
    }

    #[test]
    fn test_zero_size_treated_as_one() {
        let window = DisplayWindow::new(0);
        assert_eq!(window.size(), 1);
        assert_eq!(window.slice(&[1, 2, 3]), &[1]);
    }

    #[test]
    fn test_top_six_by_current_cost_visible_first() {
        let resources = ranked_resources();
        let first = window_names(&resources, 6, 0);
        assert_eq!(first, rank_names(1..=6));
        for hidden in rank_names(7..=10) {
            assert!(!first.contains(&hidden));
        }
        assert_eq!(window_names(&resources, 6, 1), rank_names(7..=10));
    }

    #[test]
    fn test_size_seven_pages_through_sorted_resources() {
        let resources = ranked_resources();
        let len = resources.len();
        let mut stored = StoredOffset { offset: 0, size: 7 };
        assert_eq!(window_names(&resources, 7, stored.offset), rank_names(1..=7));
        stored.click(PageAction::Next, len);
        assert_eq!(window_names(&resources, 7, stored.offset), rank_names(8..=10));
        stored.click(PageAction::Next, len);
        assert_eq!(window_names(&resources, 7, stored.offset), rank_names(8..=10));
    }

    #[test]
    fn test_clicks_before_rerender_each_move_a_page() {
        let mut stored = StoredOffset { offset: 0, size: 6 };
        stored.click(PageAction::Next, 68);
        stored.click(PageAction::Next, 68);
        assert_eq!(stored.offset, 2);
        stored.click(PageAction::Back, 68);
        stored.click(PageAction::Jump(40), 68);
        assert_eq!(stored.offset, 1);
    }

    #[test]
    fn test_stored_offset_stays_put_after_shrink_then_regrow() {
        let mut stored = StoredOffset { offset: 0, size: 6 };
        for _ in 0..11 {
            stored.click(PageAction::Next, 68);
        }
        assert_eq!(stored.offset, 11);

        stored.resize(10);
        assert_eq!(stored.offset, 1);
        assert_eq!(stored.shown(10), 1);

        stored.resize(68);
        assert_eq!(stored.offset, 1);
        assert_eq!(stored.shown(68), 1);
    }

    #[test]
    fn test_apply_matches_direct_transitions() {
        let mut window = DisplayWindow::new(6);
        assert!(window.apply(PageAction::Next, 10));
        assert!(!window.apply(PageAction::Next, 10));
        assert!(window.apply(PageAction::Back, 10));
        assert!(!window.apply(PageAction::Back, 10));
        assert!(window.apply(PageAction::Jump(1), 10));
        assert!(!window.apply(PageAction::Jump(2), 10));
    }
}
