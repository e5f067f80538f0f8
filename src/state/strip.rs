//! Horizontally scrollable row of tiles.
//!
//! Only `visible` tiles fit on screen; `offset` is the first one shown.

use tracing::debug;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Strip {
    offset: usize,
    len: usize,
    visible: usize,
}

impl Strip {
    pub fn new(len: usize) -> Self {
        Self {
            offset: 0,
            len,
            visible: 1,
        }
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn visible(&self) -> usize {
        self.visible
    }

    fn max_offset(&self) -> usize {
        self.len.saturating_sub(self.visible)
    }

    pub fn can_scroll_left(&self) -> bool {
        self.offset > 0
    }

    pub fn can_scroll_right(&self) -> bool {
        self.offset < self.max_offset()
    }

    pub fn scroll_left(&mut self) -> bool {
        if !self.can_scroll_left() {
            return false;
        }
        self.offset -= 1;
        debug!(offset = self.offset, "Strip scrolled left");
        true
    }

    pub fn scroll_right(&mut self) -> bool {
        if !self.can_scroll_right() {
            return false;
        }
        self.offset += 1;
        debug!(offset = self.offset, "Strip scrolled right");
        true
    }

    /// Scroll just enough for `index` to be on screen.
    pub fn scroll_to(&mut self, index: usize) {
        if self.len == 0 {
            return;
        }
        let index = index.min(self.len - 1);
        if index < self.offset {
            self.offset = index;
        } else if index >= self.offset + self.visible {
            self.offset = index + 1 - self.visible;
        }
        self.offset = self.offset.min(self.max_offset());
    }

    /// Tiles that fit changed (terminal resize).
    pub fn set_visible(&mut self, visible: usize) {
        self.visible = visible.max(1);
        self.offset = self.offset.min(self.max_offset());
    }

    /// Tile indices on screen, first to last.
    pub fn window(&self) -> std::ops::Range<usize> {
        self.offset..(self.offset + self.visible).min(self.len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scroll_flags_follow_offset() {
        let mut strip = Strip::new(5);
        strip.set_visible(3);
        assert!(!strip.can_scroll_left());
        assert!(strip.can_scroll_right());
        assert!(strip.scroll_right());
        assert!(strip.scroll_right());
        assert!(!strip.scroll_right());
        assert!(!strip.can_scroll_right());
        assert!(strip.can_scroll_left());
        assert_eq!(strip.window(), 2..5);
    }

    #[test]
    fn test_everything_fits() {
        let mut strip = Strip::new(2);
        strip.set_visible(4);
        assert!(!strip.can_scroll_left());
        assert!(!strip.can_scroll_right());
        assert_eq!(strip.window(), 0..2);
    }

    #[test]
    fn test_scroll_to_brings_index_into_view() {
        let mut strip = Strip::new(8);
        strip.set_visible(3);
        strip.scroll_to(6);
        assert_eq!(strip.offset(), 4);
        strip.scroll_to(1);
        assert_eq!(strip.offset(), 1);
        strip.scroll_to(100);
        assert_eq!(strip.offset(), 5);
    }

    #[test]
    fn test_widening_reclamps_offset() {
        let mut strip = Strip::new(6);
        strip.set_visible(2);
        strip.scroll_to(5);
        assert_eq!(strip.offset(), 4);
        strip.set_visible(4);
        assert_eq!(strip.offset(), 2);
    }

    #[test]
    fn test_empty_strip_is_inert() {
        let mut strip = Strip::new(0);
        strip.scroll_to(3);
        assert!(!strip.scroll_right());
        assert!(strip.window().is_empty());
    }
}
