//! Selection + scroll cursor over a list whose contents are recomputed every frame.
//!
//! The cursor never holds the items. Callers pass the current length in, so
//! the visible list can be re-derived from screen state on each render.

#[derive(Debug, Clone, Default)]
pub struct ScrollableList {
    pub selected: usize,
    pub scroll_offset: usize,
}

impl ScrollableList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reset(&mut self) {
        self.selected = 0;
        self.scroll_offset = 0;
    }

    /// Keep the selection inside `0..len`.
    pub fn clamp(&mut self, len: usize) {
        if self.selected >= len {
            self.selected = len.saturating_sub(1);
        }
        if self.scroll_offset > self.selected {
            self.scroll_offset = self.selected;
        }
    }

    pub fn select_up(&mut self, n: usize) {
        self.selected = self.selected.saturating_sub(n);
    }

    pub fn select_down(&mut self, n: usize, len: usize) {
        if len == 0 {
            return;
        }
        self.selected = (self.selected + n).min(len - 1);
    }

    pub fn select_first(&mut self) {
        self.selected = 0;
        self.scroll_offset = 0;
    }

    pub fn select_last(&mut self, len: usize) {
        self.selected = len.saturating_sub(1);
    }

    /// Adjust `scroll_offset` so the selection is inside a window of `height` rows.
    pub fn ensure_visible(&mut self, height: usize) {
        if height == 0 {
            return;
        }
        if self.selected < self.scroll_offset {
            self.scroll_offset = self.selected;
        } else if self.selected >= self.scroll_offset + height {
            self.scroll_offset = self.selected + 1 - height;
        }
    }

    /// Index range currently on screen.
    pub fn visible_range(&self, len: usize, height: usize) -> std::ops::Range<usize> {
        let start = self.scroll_offset.min(len);
        let end = (start + height).min(len);
        start..end
    }

    /// Select the row clicked at `row` within the window. Returns true if it hit an item.
    pub fn handle_click(&mut self, row: usize, len: usize) -> bool {
        let target = self.scroll_offset + row;
        if target < len {
            self.selected = target;
            return true;
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_navigation_clamps_to_len() {
        let mut l = ScrollableList::new();
        l.select_down(10, 4);
        assert_eq!(l.selected, 3);
        l.select_up(2);
        assert_eq!(l.selected, 1);
        l.select_down(1, 0);
        assert_eq!(l.selected, 1);
        l.clamp(1);
        assert_eq!(l.selected, 0);
    }

    #[test]
    fn test_scroll_follows_selection() {
        let mut l = ScrollableList::new();
        l.select_last(20);
        l.ensure_visible(5);
        assert_eq!(l.scroll_offset, 15);
        assert_eq!(l.visible_range(20, 5), 15..20);
        l.select_first();
        l.ensure_visible(5);
        assert_eq!(l.visible_range(20, 5), 0..5);
    }

    #[test]
    fn test_click() {
        let mut l = ScrollableList::new();
        l.scroll_offset = 2;
        assert!(l.handle_click(1, 10));
        assert_eq!(l.selected, 3);
        assert!(!l.handle_click(9, 10));
    }

    #[test]
    fn test_shrinking_list_pulls_scroll_back() {
        let mut l = ScrollableList::new();
        l.select_last(30);
        l.ensure_visible(4);
        l.clamp(2);
        assert_eq!(l.selected, 1);
        assert_eq!(l.visible_range(2, 4), 1..2);
    }
}
