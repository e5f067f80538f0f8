//! Vertically scrollable page.
//!
//! Sections are drawn into an off-screen canvas as tall as the whole page and
//! the rows under the viewport are copied into the frame. Sections therefore
//! never deal with clipping: they render at canvas coordinates and receive
//! mouse events translated into the same space.

use crate::state::signal;
use crate::styles::theme;
use crate::utils::layout::hit;
use anyhow::Result;
use crate::keymap::Action;
use crossterm::event::{MouseEvent, MouseEventKind};
use ratatui::prelude::*;
use ratatui::widgets::{
    Block, BorderType, Borders, Padding, Scrollbar, ScrollbarOrientation, ScrollbarState,
};

/// Mouse wheel step in rows
pub const WHEEL_STEP: i32 = 3;

#[derive(Debug, Clone, Default)]
pub struct ScrollPage {
    offset: u16,
    content_height: u16,
    /// Frame area the page was last drawn in
    viewport: Rect,
}

impl ScrollPage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn offset(&self) -> u16 {
        self.offset
    }

    pub fn content_height(&self) -> u16 {
        self.content_height
    }

    pub fn viewport(&self) -> Rect {
        self.viewport
    }

    pub fn max_offset(&self) -> u16 {
        self.content_height.saturating_sub(self.viewport.height)
    }

    /// Returns true if the offset changed.
    pub fn scroll_by(&mut self, delta: i32) -> bool {
        let target = (i32::from(self.offset) + delta).clamp(0, i32::from(self.max_offset()));
        self.set_offset(target as u16)
    }

    pub fn scroll_to_top(&mut self) -> bool {
        self.set_offset(0)
    }

    pub fn scroll_to_end(&mut self) -> bool {
        self.set_offset(self.max_offset())
    }

    /// One screen up (negative) or down (positive).
    pub fn page(&mut self, direction: i32) -> bool {
        let step = i32::from(self.viewport.height.saturating_sub(1).max(1));
        self.scroll_by(direction.signum() * step)
    }

    fn set_offset(&mut self, offset: u16) -> bool {
        let offset = offset.min(self.max_offset());
        let changed = offset != self.offset;
        self.offset = offset;
        changed
    }

    /// Scroll the least amount that puts canvas rows `top..top + height` on screen.
    pub fn ensure_visible(&mut self, top: u16, height: u16) -> bool {
        let view = self.viewport.height;
        if view == 0 {
            return false;
        }
        let target = if top < self.offset {
            top
        } else if top + height > self.offset + view {
            (top + height).saturating_sub(view).min(top)
        } else {
            self.offset
        };
        self.set_offset(target)
    }

    /// Width available to sections (one column is kept for the scrollbar).
    pub fn content_width(area: Rect) -> u16 {
        area.width.saturating_sub(1)
    }

    /// Draw the page.
    ///
    /// `draw` receives a canvas buffer and its full area; the visible slice is
    /// copied into `buf` at `area`.
    pub fn render(
        &mut self,
        buf: &mut Buffer,
        area: Rect,
        content_height: u16,
        draw: impl FnOnce(&mut Buffer, Rect) -> Result<()>,
    ) -> Result<()> {
        self.viewport = area;
        self.content_height = content_height;
        self.offset = self.offset.min(self.max_offset());

        let width = Self::content_width(area);
        let canvas_area = Rect::new(0, 0, width, content_height.max(area.height));
        let mut canvas = Buffer::empty(canvas_area);
        draw(&mut canvas, canvas_area)?;

        for y in 0..area.height {
            for x in 0..width {
                let (Some(src), Some(dst)) = (
                    canvas.cell((x, self.offset + y)),
                    buf.cell_mut((area.x + x, area.y + y)),
                ) else {
                    continue;
                };
                *dst = src.clone();
            }
        }

        if self.max_offset() > 0 {
            let mut state = ScrollbarState::new(usize::from(self.max_offset()))
                .position(usize::from(self.offset));
            let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
                .begin_symbol(Some("↑"))
                .end_symbol(Some("↓"))
                .track_symbol(Some("│"))
                .thumb_symbol("█")
                .style(theme().muted_style());
            StatefulWidget::render(scrollbar, area, buf, &mut state);
        }
        Ok(())
    }

    /// Frame position to canvas position, if it lies on the page.
    pub fn to_canvas(&self, column: u16, row: u16) -> Option<(u16, u16)> {
        if !hit(self.viewport, column, row) {
            return None;
        }
        Some((
            column - self.viewport.x,
            row - self.viewport.y + self.offset,
        ))
    }

    /// Canvas position to frame position, if currently visible.
    pub fn to_screen(&self, position: Position) -> Option<Position> {
        let row = position.y.checked_sub(self.offset)?;
        if row >= self.viewport.height || position.x >= Self::content_width(self.viewport) {
            return None;
        }
        Some(Position::new(
            self.viewport.x + position.x,
            self.viewport.y + row,
        ))
    }

    /// Mouse event in canvas coordinates.
    ///
    /// Events off the page are moved out of every canvas region so hover
    /// state still sees the pointer leave.
    pub fn translate(&self, mut mouse: MouseEvent) -> MouseEvent {
        let (column, row) = self
            .to_canvas(mouse.column, mouse.row)
            .unwrap_or((u16::MAX, u16::MAX));
        mouse.column = column;
        mouse.row = row;
        mouse
    }

    /// Apply a page-scrolling action.
    ///
    /// `None` when the action is not a scroll action, otherwise whether the
    /// offset changed.
    pub fn handle_scroll(&mut self, action: Action) -> Option<bool> {
        Some(match action {
            Action::MoveUp | Action::ScrollUp => self.scroll_by(-1),
            Action::MoveDown | Action::ScrollDown => self.scroll_by(1),
            Action::PageUp => self.page(-1),
            Action::PageDown => self.page(1),
            Action::GoToTop => self.scroll_to_top(),
            Action::GoToEnd => self.scroll_to_end(),
            _ => return None,
        })
    }

    /// Apply a mouse wheel event. `None` for any other mouse event.
    pub fn handle_wheel(&mut self, mouse: MouseEvent) -> Option<bool> {
        match mouse.kind {
            MouseEventKind::ScrollUp => Some(self.scroll_by(-WHEEL_STEP)),
            MouseEventKind::ScrollDown => Some(self.scroll_by(WHEEL_STEP)),
            _ => None,
        }
    }

    /// Publish the offset on the viewport signal.
    pub fn publish(&self) {
        let offset = self.offset;
        signal::viewport().update(|viewport| {
            if viewport.scroll == offset {
                return false;
            }
            viewport.scroll = offset;
            true
        });
    }
}

/// Stack sections vertically, each getting exactly its requested height.
pub fn stack(area: Rect, heights: &[u16]) -> Vec<Rect> {
    let mut y = area.y;
    heights
        .iter()
        .map(|&height| {
            let rect = Rect::new(area.x, y, area.width, height);
            y = y.saturating_add(height);
            rect
        })
        .collect()
}

/// Bordered block shared by every page section.
pub fn section_block(title: &str, focused: bool) -> Block<'_> {
    let t = theme();
    let border_style = if focused {
        t.border_focused_style()
    } else {
        t.border_style()
    };
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(border_style)
        .title(format!(" {} ", title))
        .title_style(t.title_style())
        .padding(Padding::horizontal(1))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyModifiers, MouseEventKind};
    use ratatui::widgets::{Paragraph, Widget};

    fn page_with(content_height: u16, view: Rect) -> ScrollPage {
        let mut page = ScrollPage::new();
        let mut buf = Buffer::empty(Rect::new(0, 0, view.right(), view.bottom()));
        page.render(&mut buf, view, content_height, |_, _| Ok(()))
            .expect("render");
        page
    }

    #[test]
    fn test_scroll_is_clamped_to_content() {
        let mut page = page_with(50, Rect::new(0, 0, 40, 20));
        assert_eq!(page.max_offset(), 30);
        assert!(!page.scroll_by(-5));
        assert!(page.scroll_by(100));
        assert_eq!(page.offset(), 30);
        assert!(page.scroll_to_top());
        assert_eq!(page.offset(), 0);
    }

    #[test]
    fn test_scroll_actions_and_wheel() {
        let mut page = page_with(100, Rect::new(0, 0, 40, 20));
        assert_eq!(page.handle_scroll(Action::Confirm), None);
        assert_eq!(page.handle_scroll(Action::PageDown), Some(true));
        assert_eq!(page.offset(), 19);
        assert_eq!(page.handle_scroll(Action::GoToEnd), Some(true));
        assert_eq!(page.offset(), 80);
        let wheel = MouseEvent {
            kind: MouseEventKind::ScrollUp,
            column: 1,
            row: 1,
            modifiers: KeyModifiers::NONE,
        };
        assert_eq!(page.handle_wheel(wheel), Some(true));
        assert_eq!(page.offset(), 80 - WHEEL_STEP as u16);
    }

    #[test]
    fn test_short_content_never_scrolls() {
        let mut page = page_with(10, Rect::new(0, 0, 40, 20));
        assert!(!page.scroll_by(3));
        assert!(!page.scroll_to_end());
    }

    #[test]
    fn test_ensure_visible_scrolls_minimally() {
        let mut page = page_with(100, Rect::new(0, 0, 40, 20));
        page.ensure_visible(30, 5);
        assert_eq!(page.offset(), 15);
        page.ensure_visible(20, 5);
        assert_eq!(page.offset(), 15);
        page.ensure_visible(3, 5);
        assert_eq!(page.offset(), 3);
        // Taller than the viewport: show its top
        page.ensure_visible(50, 40);
        assert_eq!(page.offset(), 50);
    }

    #[test]
    fn test_translate_accounts_for_offset() {
        let mut page = page_with(100, Rect::new(0, 4, 40, 20));
        page.scroll_by(10);
        assert_eq!(page.to_canvas(5, 4), Some((5, 10)));
        assert_eq!(page.to_canvas(5, 2), None);
        assert_eq!(page.to_screen(Position::new(5, 12)), Some(Position::new(5, 6)));
        assert_eq!(page.to_screen(Position::new(5, 2)), None);

        let mouse = MouseEvent {
            kind: MouseEventKind::Moved,
            column: 1,
            row: 0,
            modifiers: KeyModifiers::NONE,
        };
        let moved = page.translate(mouse);
        assert_eq!((moved.column, moved.row), (u16::MAX, u16::MAX));
    }

    #[test]
    fn test_visible_rows_are_copied_from_canvas() {
        let mut page = ScrollPage::new();
        let view = Rect::new(0, 0, 11, 2);
        let mut buf = Buffer::empty(view);
        let draw = |canvas: &mut Buffer, area: Rect| -> Result<()> {
            for (i, rect) in stack(area, &[1, 1, 1]).into_iter().enumerate() {
                Paragraph::new(format!("row{}", i)).render(rect, canvas);
            }
            Ok(())
        };
        page.render(&mut buf, view, 3, draw).unwrap();
        page.scroll_by(1);
        page.render(&mut buf, view, 3, draw).unwrap();
        let first: String = (0..4).filter_map(|x| buf.cell((x, 0))).map(|c| c.symbol()).collect();
        assert_eq!(first, "row1");
    }

    #[test]
    fn test_stack_places_sections_back_to_back() {
        let rects = stack(Rect::new(0, 0, 10, 30), &[3, 5, 2]);
        assert_eq!(rects[1], Rect::new(0, 3, 10, 5));
        assert_eq!(rects[2].y, 8);
    }
}
