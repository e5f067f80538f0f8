//! "Our Service Area" section: a scrollable strip of city tiles.

use crate::catalog::{City, ItemSource};
use crate::components::component::{Component, ComponentAction};
use crate::components::page::section_block;
use crate::keymap::Action;
use crate::state::{Strip, Viewport};
use crate::styles::theme;
use crate::utils::layout::hit;
use anyhow::Result;
use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use ratatui::prelude::*;
use ratatui::widgets::{Block, BorderType, Borders, Paragraph, Widget};
use tracing::debug;

const TILE_WIDTH: u16 = 16;
const TILE_HEIGHT: u16 = 4;

pub struct OurArea {
    cities: Vec<City>,
    strip: Strip,
    /// Highlighted city, always within `0..cities.len()`
    active: usize,
    compact: bool,
    tile_regions: Vec<(Rect, usize)>,
    dot_regions: Vec<(Rect, usize)>,
}

impl OurArea {
    pub fn new(source: &impl ItemSource<City>) -> Self {
        let cities = source.list_items();
        Self {
            strip: Strip::new(cities.len()),
            cities,
            active: 0,
            compact: false,
            tile_regions: Vec::new(),
            dot_regions: Vec::new(),
        }
    }

    pub fn active(&self) -> usize {
        self.active
    }

    pub fn strip(&self) -> &Strip {
        &self.strip
    }

    /// Highlight a city, clamped to the list, and scroll it into view.
    pub fn scroll_to_index(&mut self, index: usize) -> bool {
        if self.cities.is_empty() {
            return false;
        }
        let index = index.min(self.cities.len() - 1);
        let changed = index != self.active;
        self.active = index;
        self.strip.scroll_to(index);
        if changed {
            debug!(city = self.cities[index].name, "Service area city highlighted");
        }
        changed
    }

    fn shift(&mut self, forward: bool) -> bool {
        let target = if forward {
            self.active + 1
        } else {
            self.active.saturating_sub(1)
        };
        self.scroll_to_index(target)
    }

    fn render_tile(&self, buf: &mut Buffer, tile: Rect, city: &City, active: bool) {
        let t = theme();
        let border = if active {
            t.border_focused_style()
        } else {
            t.border_style()
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(border);
        let badge = if city.is_new {
            Line::from(Span::styled(" NEW ", t.badge_style().add_modifier(Modifier::BOLD)))
        } else {
            Line::default()
        };
        let name_style = if active {
            t.highlight_style()
        } else {
            t.text_style()
        };
        Paragraph::new(vec![Line::from(Span::styled(city.name, name_style)), badge])
            .block(block)
            .alignment(Alignment::Center)
            .render(tile, buf);
    }

    fn render_dots(&mut self, buf: &mut Buffer, area: Rect) {
        let t = theme();
        let total = self.cities.len() as u16 * 2;
        let mut x = area.x + area.width.saturating_sub(total) / 2;
        for index in 0..self.cities.len() {
            let rect = Rect::new(x, area.y, 1, 1);
            let (symbol, style) = if index == self.active {
                ("●", t.emphasis_style())
            } else {
                ("○", t.muted_style())
            };
            Paragraph::new(symbol).style(style).render(rect, buf);
            self.dot_regions.push((rect, index));
            x += 2;
        }
    }
}

impl Component for OurArea {
    fn height(&self, _width: u16) -> u16 {
        2 + TILE_HEIGHT + u16::from(self.compact)
    }

    fn render(&mut self, buf: &mut Buffer, area: Rect, focused: bool) -> Result<()> {
        let t = theme();
        let block = section_block("Our Service Area", focused);
        let inner = block.inner(area);
        block.render(area, buf);

        let [tiles_row, dots_row] = Layout::vertical([
            Constraint::Length(TILE_HEIGHT),
            Constraint::Length(u16::from(self.compact)),
        ])
        .areas(inner);
        let [left, tiles_area, right] = Layout::horizontal([
            Constraint::Length(2),
            Constraint::Min(0),
            Constraint::Length(2),
        ])
        .areas(tiles_row);

        self.strip
            .set_visible(usize::from((tiles_area.width / TILE_WIDTH).max(1)));
        let middle = TILE_HEIGHT / 2;
        if self.strip.can_scroll_left() {
            Paragraph::new("◀")
                .style(t.emphasis_style())
                .render(Rect::new(left.x, left.y + middle, 1, 1), buf);
        }
        if self.strip.can_scroll_right() {
            Paragraph::new("▶")
                .style(t.emphasis_style())
                .render(Rect::new(right.x + 1, right.y + middle, 1, 1), buf);
        }

        self.tile_regions.clear();
        for (slot, index) in self.strip.window().enumerate() {
            let x = tiles_area.x + slot as u16 * TILE_WIDTH;
            let tile = Rect::new(x, tiles_area.y, TILE_WIDTH - 1, TILE_HEIGHT);
            if let Some(city) = self.cities.get(index) {
                self.render_tile(buf, tile, city, index == self.active);
            }
            self.tile_regions.push((tile, index));
        }

        self.dot_regions.clear();
        if self.compact {
            self.render_dots(buf, dots_row);
        }
        Ok(())
    }

    fn handle_action(&mut self, action: Action) -> Result<ComponentAction> {
        Ok(match action {
            Action::MoveLeft => ComponentAction::updated(self.shift(false)),
            Action::MoveRight => ComponentAction::updated(self.shift(true)),
            _ => ComponentAction::None,
        })
    }

    fn handle_mouse(&mut self, mouse: MouseEvent) -> Result<ComponentAction> {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return Ok(ComponentAction::None);
        }
        let target = self
            .tile_regions
            .iter()
            .chain(self.dot_regions.iter())
            .find(|(rect, _)| hit(*rect, mouse.column, mouse.row))
            .map(|&(_, index)| index);
        Ok(match target {
            Some(index) => ComponentAction::updated(self.scroll_to_index(index)),
            None => ComponentAction::None,
        })
    }

    fn set_viewport(&mut self, viewport: Viewport) {
        self.compact = viewport.is_compact();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::StaticCatalog;

    #[test]
    fn test_active_index_is_clamped() {
        let mut area = OurArea::new(&StaticCatalog::new());
        assert_eq!(area.handle_action(Action::MoveLeft).unwrap(), ComponentAction::None);
        assert_eq!(area.active(), 0);
        area.scroll_to_index(100);
        assert_eq!(area.active(), 7);
        area.handle_action(Action::MoveRight).unwrap();
        assert_eq!(area.active(), 7);
    }

    #[test]
    fn test_strip_follows_active_city() {
        let mut section = OurArea::new(&StaticCatalog::new());
        let rect = Rect::new(0, 0, 60, section.height(60));
        let mut buf = Buffer::empty(rect);
        section.render(&mut buf, rect, true).unwrap();
        // 60 wide leaves room for three tiles
        assert_eq!(section.strip().visible(), 3);
        section.scroll_to_index(5);
        assert_eq!(section.strip().offset(), 3);
        assert!(section.strip().can_scroll_left());
    }

    #[test]
    fn test_dots_only_on_compact_widths() {
        let mut section = OurArea::new(&StaticCatalog::new());
        let wide = section.height(100);
        section.set_viewport(Viewport::new(60, 30));
        assert_eq!(section.height(60), wide + 1);

        let rect = Rect::new(0, 0, 60, section.height(60));
        let mut buf = Buffer::empty(rect);
        section.render(&mut buf, rect, false).unwrap();
        assert_eq!(section.dot_regions.len(), 8);

        let (dot, index) = section.dot_regions[6];
        let click = MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: dot.x,
            row: dot.y,
            modifiers: crossterm::event::KeyModifiers::NONE,
        };
        section.handle_mouse(click).unwrap();
        assert_eq!(section.active(), index);
    }

    #[test]
    fn test_new_cities_render_badge() {
        let mut section = OurArea::new(&StaticCatalog::new());
        let rect = Rect::new(0, 0, 200, section.height(200));
        let mut buf = Buffer::empty(rect);
        section.render(&mut buf, rect, false).unwrap();
        let text: String = buf.content.iter().map(|c| c.symbol()).collect();
        assert!(text.contains("NEW"));
        assert!(text.contains("DELHI"));
    }
}
