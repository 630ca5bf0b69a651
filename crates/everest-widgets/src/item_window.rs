#![forbid(unsafe_code)]

//! Windowed-item paging state.
//!
//! An [`ItemWindow`] describes the contiguous slice of items currently
//! visible in a multi-item track: an offset index plus a width in items.
//! It is a pure state holder with no I/O and no rendering, owned exclusively by
//! one carousel controller.
//!
//! # Invariants
//!
//! 1. `items_per_view ≥ 1` (clamped on the way in).
//! 2. `max_index == total_items.saturating_sub(items_per_view)`.
//! 3. `0 ≤ current_index ≤ max_index` after every mutation; `max_index` is
//!    recomputed before the clamp whenever the layout changes.
//! 4. `total_items` is fixed at construction. The widget does not support
//!    adding or removing items at runtime.

/// Paging state for a windowed item track.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ItemWindow {
    total_items: usize,
    items_per_view: usize,
    current_index: usize,
    max_index: usize,
}

impl ItemWindow {
    /// Create a window over `total_items` items showing `items_per_view` at
    /// a time, positioned at the start.
    ///
    /// `items_per_view` is clamped to at least 1.
    #[must_use]
    pub fn new(total_items: usize, items_per_view: usize) -> Self {
        let items_per_view = items_per_view.max(1);
        Self {
            total_items,
            items_per_view,
            current_index: 0,
            max_index: total_items.saturating_sub(items_per_view),
        }
    }

    /// Apply a new items-per-view, recomputing `max_index` and clamping the
    /// current offset into the new range. No side effects beyond state.
    pub fn recompute_layout(&mut self, items_per_view: usize) {
        self.items_per_view = items_per_view.max(1);
        self.max_index = self.total_items.saturating_sub(self.items_per_view);
        self.current_index = self.current_index.min(self.max_index);
    }

    /// Step one item forward. Saturates at `max_index`.
    ///
    /// Returns whether the offset actually moved.
    pub fn advance(&mut self) -> bool {
        if self.current_index < self.max_index {
            self.current_index += 1;
            true
        } else {
            false
        }
    }

    /// Step one item back. Saturates at 0.
    ///
    /// Returns whether the offset actually moved.
    pub fn retreat(&mut self) -> bool {
        if self.current_index > 0 {
            self.current_index -= 1;
            true
        } else {
            false
        }
    }

    /// Jump to `target`, silently clamped into `[0, max_index]`.
    pub fn jump_to(&mut self, target: usize) {
        self.current_index = target.min(self.max_index);
    }

    /// Number of pages at the current layout: `ceil(total / per_view)`.
    ///
    /// Zero items means zero pages.
    #[must_use]
    pub fn page_count(&self) -> usize {
        self.total_items.div_ceil(self.items_per_view)
    }

    /// Current offset index.
    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// Largest valid offset index.
    #[must_use]
    pub fn max_index(&self) -> usize {
        self.max_index
    }

    /// Items visible at once.
    #[must_use]
    pub fn items_per_view(&self) -> usize {
        self.items_per_view
    }

    /// Total item count, fixed at construction.
    #[must_use]
    pub fn total_items(&self) -> usize {
        self.total_items
    }

    /// Whether the window holds no items at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.total_items == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn new_starts_at_zero() {
        let window = ItemWindow::new(7, 3);
        assert_eq!(window.current_index(), 0);
        assert_eq!(window.max_index(), 4);
        assert_eq!(window.items_per_view(), 3);
        assert_eq!(window.total_items(), 7);
    }

    #[test]
    fn per_view_clamped_to_one() {
        let window = ItemWindow::new(5, 0);
        assert_eq!(window.items_per_view(), 1);
        assert_eq!(window.max_index(), 4);
    }

    #[test]
    fn empty_window_is_inert() {
        let mut window = ItemWindow::new(0, 3);
        assert!(window.is_empty());
        assert_eq!(window.max_index(), 0);
        assert_eq!(window.page_count(), 0);
        assert!(!window.advance());
        assert!(!window.retreat());
        window.jump_to(9);
        assert_eq!(window.current_index(), 0);
    }

    #[test]
    fn fewer_items_than_view_pins_at_zero() {
        let mut window = ItemWindow::new(2, 3);
        assert_eq!(window.max_index(), 0);
        assert!(!window.advance());
        assert_eq!(window.current_index(), 0);
    }

    #[test]
    fn advance_saturates_at_max() {
        let mut window = ItemWindow::new(7, 3);
        for _ in 0..10 {
            window.advance();
        }
        assert_eq!(window.current_index(), window.max_index());
        assert!(!window.advance());
        assert_eq!(window.current_index(), 4);
    }

    #[test]
    fn retreat_saturates_at_zero() {
        let mut window = ItemWindow::new(7, 3);
        window.jump_to(2);
        for _ in 0..10 {
            window.retreat();
        }
        assert_eq!(window.current_index(), 0);
        assert!(!window.retreat());
    }

    #[test]
    fn jump_clamps_out_of_range() {
        let mut window = ItemWindow::new(7, 3);
        window.jump_to(100);
        assert_eq!(window.current_index(), 4);
        window.jump_to(2);
        assert_eq!(window.current_index(), 2);
    }

    #[test]
    fn page_count_rounds_up() {
        assert_eq!(ItemWindow::new(7, 3).page_count(), 3);
        assert_eq!(ItemWindow::new(6, 3).page_count(), 2);
        assert_eq!(ItemWindow::new(1, 3).page_count(), 1);
        assert_eq!(ItemWindow::new(7, 1).page_count(), 7);
    }

    #[test]
    fn narrowing_layout_keeps_valid_index() {
        // 7 items, 3 per view -> max 4. At index 4, widen the range.
        let mut window = ItemWindow::new(7, 3);
        window.jump_to(4);
        window.recompute_layout(1);
        assert_eq!(window.max_index(), 6);
        // Already within the new range: untouched, no page re-alignment.
        assert_eq!(window.current_index(), 4);
    }

    #[test]
    fn widening_layout_clamps_index() {
        let mut window = ItemWindow::new(7, 1);
        window.jump_to(6);
        window.recompute_layout(3);
        assert_eq!(window.max_index(), 4);
        assert_eq!(window.current_index(), 4);
    }

    #[test]
    fn recompute_same_layout_is_noop() {
        let mut window = ItemWindow::new(7, 3);
        window.jump_to(2);
        window.recompute_layout(3);
        assert_eq!(window.current_index(), 2);
        assert_eq!(window.max_index(), 4);
    }

    proptest! {
        #[test]
        fn invariant_holds_after_layout(total in 0usize..500, per_view in 0usize..10) {
            let window = ItemWindow::new(total, per_view);
            prop_assert_eq!(
                window.max_index(),
                total.saturating_sub(per_view.max(1))
            );
            prop_assert!(window.current_index() <= window.max_index());
        }

        #[test]
        fn invariant_holds_under_arbitrary_ops(
            total in 0usize..100,
            per_view in 1usize..6,
            ops in proptest::collection::vec(0u8..4, 0..64),
            targets in proptest::collection::vec(0usize..200, 64),
            layouts in proptest::collection::vec(1usize..6, 64),
        ) {
            let mut window = ItemWindow::new(total, per_view);
            for (i, op) in ops.iter().enumerate() {
                match op {
                    0 => { window.advance(); }
                    1 => { window.retreat(); }
                    2 => window.jump_to(targets[i]),
                    _ => window.recompute_layout(layouts[i]),
                }
                prop_assert!(window.current_index() <= window.max_index());
                prop_assert!(window.items_per_view() >= 1);
                prop_assert_eq!(
                    window.max_index(),
                    window.total_items().saturating_sub(window.items_per_view())
                );
            }
        }

        #[test]
        fn advance_beyond_max_stays_at_max(total in 1usize..50, extra in 0usize..20) {
            let mut window = ItemWindow::new(total, 3);
            for _ in 0..window.max_index() + extra {
                window.advance();
            }
            prop_assert_eq!(window.current_index(), window.max_index());
        }
    }
}
