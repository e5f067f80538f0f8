//! "Our Services" section: tabs over service groups, each shown as a
//! horizontally scrollable strip of tiles.

use crate::catalog::{ItemSource, ServiceGroup};
use crate::components::component::{Component, ComponentAction};
use crate::components::page::section_block;
use crate::keymap::Action;
use crate::state::Strip;
use crate::styles::theme;
use crate::utils::layout::hit;
use anyhow::Result;
use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use ratatui::prelude::*;
use ratatui::widgets::{Block, BorderType, Borders, Paragraph, Widget, Wrap};
use tracing::debug;

const TILE_WIDTH: u16 = 22;
const TILE_HEIGHT: u16 = 4;
/// Group title row plus the tiles
const GROUP_HEIGHT: u16 = 1 + TILE_HEIGHT;
/// Room reserved for the ◀ ▶ arrows
const ARROW_WIDTH: u16 = 2;

/// Tab 0 is "All"; tab n is group n - 1.
pub struct Services {
    groups: Vec<ServiceGroup>,
    strips: Vec<Strip>,
    active_tab: usize,
    tab_regions: Vec<(Rect, usize)>,
    /// (left arrow, right arrow) per group index
    arrow_regions: Vec<(usize, Rect, Rect)>,
}

impl Services {
    pub fn new(source: &impl ItemSource<ServiceGroup>) -> Self {
        let groups = source.list_items();
        let strips = groups.iter().map(|g| Strip::new(g.services.len())).collect();
        Self {
            groups,
            strips,
            active_tab: 0,
            tab_regions: Vec::new(),
            arrow_regions: Vec::new(),
        }
    }

    pub fn tab_labels(&self) -> Vec<&'static str> {
        std::iter::once("All")
            .chain(self.groups.iter().map(|g| g.tab_label))
            .collect()
    }

    pub fn active_tab(&self) -> usize {
        self.active_tab
    }

    pub fn set_tab(&mut self, tab: usize) -> bool {
        let tab = tab.min(self.groups.len());
        if tab == self.active_tab {
            return false;
        }
        self.active_tab = tab;
        debug!(tab = self.tab_labels()[tab], "Services tab changed");
        true
    }

    pub fn next_tab(&mut self) {
        let count = self.groups.len() + 1;
        self.set_tab((self.active_tab + 1) % count);
    }

    pub fn prev_tab(&mut self) {
        let count = self.groups.len() + 1;
        self.set_tab((self.active_tab + count - 1) % count);
    }

    /// Group indices shown under the active tab.
    pub fn shown_groups(&self) -> Vec<usize> {
        match self.active_tab {
            0 => (0..self.groups.len()).collect(),
            tab => vec![tab - 1],
        }
    }

    pub fn strip(&self, group: usize) -> Option<&Strip> {
        self.strips.get(group)
    }

    fn scroll_shown(&mut self, right: bool) -> bool {
        let mut changed = false;
        for group in self.shown_groups() {
            if let Some(strip) = self.strips.get_mut(group) {
                changed |= if right {
                    strip.scroll_right()
                } else {
                    strip.scroll_left()
                };
            }
        }
        changed
    }

    fn render_tabs(&mut self, buf: &mut Buffer, area: Rect) {
        let t = theme();
        self.tab_regions.clear();
        let mut x = area.x;
        for (index, label) in self.tab_labels().into_iter().enumerate() {
            let text = format!(" {} ", label);
            let width = text.chars().count() as u16;
            if x + width > area.right() {
                break;
            }
            let rect = Rect::new(x, area.y, width, 1);
            let style = if index == self.active_tab {
                t.highlight_style()
            } else {
                t.muted_style()
            };
            Paragraph::new(text).style(style).render(rect, buf);
            self.tab_regions.push((rect, index));
            x += width + 1;
        }
    }

    fn render_group(&mut self, buf: &mut Buffer, area: Rect, group_index: usize) {
        let t = theme();
        let Some(group) = self.groups.get(group_index) else {
            return;
        };
        let [title_row, tiles_row] =
            Layout::vertical([Constraint::Length(1), Constraint::Length(TILE_HEIGHT)]).areas(area);
        Paragraph::new(Line::from(group.title).style(t.emphasis_style())).render(title_row, buf);

        let [left, tiles_area, right] = Layout::horizontal([
            Constraint::Length(ARROW_WIDTH),
            Constraint::Min(0),
            Constraint::Length(ARROW_WIDTH),
        ])
        .areas(tiles_row);

        let Some(strip) = self.strips.get_mut(group_index) else {
            return;
        };
        strip.set_visible(usize::from((tiles_area.width / TILE_WIDTH).max(1)));

        let arrow_row = |rect: Rect| Rect::new(rect.x, rect.y + TILE_HEIGHT / 2, 1, 1);
        if strip.can_scroll_left() {
            Paragraph::new("◀").style(t.emphasis_style()).render(arrow_row(left), buf);
        }
        if strip.can_scroll_right() {
            Paragraph::new("▶")
                .style(t.emphasis_style())
                .render(arrow_row(Rect::new(right.x + 1, right.y, 1, right.height)), buf);
        }
        self.arrow_regions.push((
            group_index,
            arrow_row(left),
            arrow_row(Rect::new(right.x + 1, right.y, 1, right.height)),
        ));

        for (slot, service_index) in strip.window().enumerate() {
            let x = tiles_area.x + slot as u16 * TILE_WIDTH;
            let tile = Rect::new(x, tiles_area.y, TILE_WIDTH.saturating_sub(1), TILE_HEIGHT);
            let Some(service) = group.services.get(service_index) else {
                continue;
            };
            let block = Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(t.border_style());
            Paragraph::new(Line::from(*service).style(t.text_style()))
                .block(block)
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true })
                .render(tile, buf);
        }
    }
}

impl Component for Services {
    fn height(&self, _width: u16) -> u16 {
        2 + 1 + 1 + self.shown_groups().len() as u16 * GROUP_HEIGHT
    }

    fn render(&mut self, buf: &mut Buffer, area: Rect, focused: bool) -> Result<()> {
        let block = section_block("Our Services", focused);
        let inner = block.inner(area);
        block.render(area, buf);

        let [tabs_row, _, groups_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .areas(inner);
        self.render_tabs(buf, tabs_row);

        self.arrow_regions.clear();
        let shown = self.shown_groups();
        let rows = Layout::vertical(vec![Constraint::Length(GROUP_HEIGHT); shown.len()])
            .split(groups_area);
        for (row, group_index) in rows.iter().zip(shown) {
            self.render_group(buf, *row, group_index);
        }
        Ok(())
    }

    fn handle_action(&mut self, action: Action) -> Result<ComponentAction> {
        Ok(match action {
            Action::MoveLeft => ComponentAction::updated(self.scroll_shown(false)),
            Action::MoveRight => ComponentAction::updated(self.scroll_shown(true)),
            Action::Confirm => {
                self.next_tab();
                ComponentAction::Update
            }
            _ => ComponentAction::None,
        })
    }

    fn handle_mouse(&mut self, mouse: MouseEvent) -> Result<ComponentAction> {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return Ok(ComponentAction::None);
        }
        let (column, row) = (mouse.column, mouse.row);
        if let Some(&(_, tab)) = self.tab_regions.iter().find(|(r, _)| hit(*r, column, row)) {
            return Ok(ComponentAction::updated(self.set_tab(tab)));
        }
        let arrow = self
            .arrow_regions
            .iter()
            .find_map(|&(group, left, right)| {
                if hit(left, column, row) {
                    Some((group, false))
                } else if hit(right, column, row) {
                    Some((group, true))
                } else {
                    None
                }
            });
        if let Some((group, right)) = arrow {
            if let Some(strip) = self.strips.get_mut(group) {
                let changed = if right {
                    strip.scroll_right()
                } else {
                    strip.scroll_left()
                };
                return Ok(ComponentAction::updated(changed));
            }
        }
        Ok(ComponentAction::None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::StaticCatalog;
    use crossterm::event::KeyModifiers;

    fn click(column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    fn rendered(width: u16) -> (Services, Buffer) {
        let mut services = Services::new(&StaticCatalog::new());
        let area = Rect::new(0, 0, width, services.height(width));
        let mut buf = Buffer::empty(area);
        services.render(&mut buf, area, true).unwrap();
        (services, buf)
    }

    #[test]
    fn test_tabs_cycle_through_groups() {
        let mut services = Services::new(&StaticCatalog::new());
        assert_eq!(
            services.tab_labels(),
            vec!["All", "AC", "Washing", "Woven", "Refrigerator"]
        );
        assert_eq!(services.shown_groups(), vec![0, 1, 2, 3]);
        services.next_tab();
        assert_eq!(services.shown_groups(), vec![0]);
        services.prev_tab();
        services.prev_tab();
        assert_eq!(services.active_tab(), 4);
        assert_eq!(services.shown_groups(), vec![3]);
    }

    #[test]
    fn test_height_shrinks_for_single_group() {
        let mut services = Services::new(&StaticCatalog::new());
        let all = services.height(100);
        services.set_tab(1);
        assert!(services.height(100) < all);
    }

    #[test]
    fn test_narrow_strip_can_scroll_right_only() {
        let (mut services, _) = rendered(60);
        let strip = services.strip(0).unwrap();
        assert!(!strip.can_scroll_left());
        assert!(strip.can_scroll_right());

        services.handle_action(Action::MoveRight).unwrap();
        assert!(services.strip(0).unwrap().can_scroll_left());
    }

    #[test]
    fn test_wide_strip_fits_every_tile() {
        let (services, _) = rendered(200);
        let strip = services.strip(0).unwrap();
        assert!(!strip.can_scroll_left());
        assert!(!strip.can_scroll_right());
    }

    #[test]
    fn test_click_on_tab_switches() {
        let (mut services, _) = rendered(100);
        let (rect, tab) = services.tab_regions[2];
        let action = services.handle_mouse(click(rect.x, rect.y)).unwrap();
        assert_eq!(action, ComponentAction::Update);
        assert_eq!(services.active_tab(), tab);
        assert_eq!(services.shown_groups(), vec![1]);
    }
}
