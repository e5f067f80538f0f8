//! Gallery grid with category filter buttons and a detail modal.
//!
//! The modal is drawn over the frame, outside the scrolling page, so its
//! mouse handling works in frame coordinates while the grid works in page
//! coordinates.

use crate::catalog::{GalleryItem, ItemSource};
use crate::components::component::{Component, ComponentAction};
use crate::components::message_box::MessageBox;
use crate::components::page::section_block;
use crate::keymap::Action;
use crate::state::{CollectionView, Filter, Viewport};
use crate::styles::theme;
use crate::utils::layout::{center_popup, columns, hit};
use anyhow::Result;
use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use ratatui::prelude::*;
use ratatui::widgets::{Block, BorderType, Borders, Clear, Paragraph, Widget, Wrap};
use tracing::debug;

const CARD_HEIGHT: u16 = 7;
const EMPTY_HEIGHT: u16 = 5;

/// Lay category buttons out left to right, wrapping onto new rows.
fn button_rects(labels: &[String], area: Rect) -> Vec<Rect> {
    let mut rects = Vec::with_capacity(labels.len());
    let (mut x, mut y) = (area.x, area.y);
    for label in labels {
        let width = (label.chars().count() as u16 + 2).min(area.width.max(1));
        if x > area.x && x + width > area.right() {
            x = area.x;
            y += 1;
        }
        rects.push(Rect::new(x, y, width, 1));
        x += width + 1;
    }
    rects
}

#[derive(Debug, Default, Clone, Copy)]
struct ModalRegions {
    panel: Rect,
    close: Rect,
    prev: Rect,
    next: Rect,
}

pub struct GalleryGrid {
    view: CollectionView<GalleryItem>,
    columns: usize,
    button_regions: Vec<(Rect, String)>,
    card_regions: Vec<(Rect, usize)>,
    modal: ModalRegions,
}

impl GalleryGrid {
    pub fn new(source: &impl ItemSource<GalleryItem>) -> Self {
        Self {
            view: CollectionView::new(source.list_items()),
            columns: 3,
            button_regions: Vec::new(),
            card_regions: Vec::new(),
            modal: ModalRegions::default(),
        }
    }

    pub fn view(&self) -> &CollectionView<GalleryItem> {
        &self.view
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn is_modal_open(&self) -> bool {
        self.view.focus().is_some()
    }

    pub fn close_modal(&mut self) {
        self.view.clear_focus();
    }

    pub fn set_category(&mut self, category: &str) {
        self.view.set_filter(Filter::category(category));
    }

    fn cycle_category(&mut self, forward: bool) {
        let categories = self.view.categories();
        let count = categories.len();
        if count == 0 {
            return;
        }
        let current = categories
            .iter()
            .position(|c| c == self.view.active_category())
            .unwrap_or(0);
        let next = if forward {
            (current + 1) % count
        } else {
            (current + count - 1) % count
        };
        let category = categories[next].clone();
        debug!(category = %category, "Gallery category cycled");
        self.set_category(&category);
    }

    fn rows(&self) -> u16 {
        self.view.len().div_ceil(self.columns.max(1)) as u16
    }

    fn buttons_height(&self, width: u16) -> u16 {
        let inner = Rect::new(0, 0, width.saturating_sub(4), 1);
        button_rects(&self.view.categories(), inner)
            .last()
            .map_or(1, |r| r.y + 1)
    }

    /// Page area of the selected card, for scrolling it into view.
    pub fn selected_region(&self) -> Option<Rect> {
        let selected = self.view.selected();
        self.card_regions
            .iter()
            .find(|(_, index)| *index == selected)
            .map(|(rect, _)| *rect)
    }

    fn render_card(buf: &mut Buffer, area: Rect, item: &GalleryItem, selected: bool) {
        let t = theme();
        let border = if selected {
            t.border_focused_style()
        } else {
            t.border_style()
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(border);
        let title_style = if selected {
            t.highlight_style()
        } else {
            t.text_style().add_modifier(Modifier::BOLD)
        };
        Paragraph::new(vec![
            Line::from(Span::styled("▣ ▣ ▣", t.muted_style())),
            Line::from(Span::styled(item.title, title_style)),
            Line::from(Span::styled(format!("by {}", item.artist), t.text_style())),
            Line::from(vec![
                Span::styled(item.date, t.muted_style()),
                Span::raw("  "),
                Span::styled(format!("[{}]", item.category), t.badge_style()),
            ]),
        ])
        .block(block)
        .wrap(Wrap { trim: true })
        .render(area, buf);
    }

    /// Draw the detail modal over `area` (frame coordinates).
    pub fn render_modal(&mut self, buf: &mut Buffer, area: Rect) {
        let Some(item) = self.view.focused_item().cloned() else {
            self.modal = ModalRegions::default();
            return;
        };
        let t = theme();
        let panel = center_popup(area, 70, 60);
        Clear.render(panel, buf);
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(t.border_focused_style())
            .title(format!(" {} ", item.title))
            .title_style(t.title_style())
            .style(t.background_style());
        let inner = block.inner(panel);
        block.render(panel, buf);

        let position = self.view.focus().map_or(0, |i| i + 1);
        let lines = vec![
            Line::from(vec![
                Span::styled("Artist: ", t.muted_style()),
                Span::styled(item.artist, t.text_style()),
            ]),
            Line::from(vec![
                Span::styled("Date: ", t.muted_style()),
                Span::styled(item.date, t.text_style()),
            ]),
            Line::from(vec![
                Span::styled("Category: ", t.muted_style()),
                Span::styled(item.category, t.badge_style()),
            ]),
            Line::default(),
            Line::from(Span::styled(item.blurb(), t.text_style())),
            Line::default(),
            Line::from(Span::styled(
                format!("{} of {}", position, self.view.len()),
                t.muted_style(),
            )),
        ];
        let [body, nav] =
            Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(inner);
        Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .render(body, buf);

        let close = Rect::new(panel.right().saturating_sub(4), panel.y, 3, 1);
        Paragraph::new("[✕]").style(t.error_style()).render(close, buf);
        let prev = Rect::new(nav.x, nav.y, 8, 1);
        let next = Rect::new(nav.right().saturating_sub(8), nav.y, 8, 1);
        Paragraph::new("‹ Prev").style(t.emphasis_style()).render(prev, buf);
        Paragraph::new("Next ›")
            .style(t.emphasis_style())
            .alignment(Alignment::Right)
            .render(next, buf);
        self.modal = ModalRegions {
            panel,
            close,
            prev,
            next,
        };
    }

    /// Mouse handling while the modal is open (frame coordinates).
    pub fn handle_modal_mouse(&mut self, mouse: MouseEvent) -> ComponentAction {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return ComponentAction::None;
        }
        let (column, row) = (mouse.column, mouse.row);
        if hit(self.modal.close, column, row) || !hit(self.modal.panel, column, row) {
            self.view.clear_focus();
        } else if hit(self.modal.prev, column, row) {
            self.view.focus_prev();
        } else if hit(self.modal.next, column, row) {
            self.view.focus_next();
        } else {
            return ComponentAction::None;
        }
        ComponentAction::Update
    }
}

impl Component for GalleryGrid {
    fn height(&self, width: u16) -> u16 {
        let grid = if self.view.is_empty() {
            EMPTY_HEIGHT
        } else {
            self.rows() * CARD_HEIGHT
        };
        2 + self.buttons_height(width) + 1 + grid
    }

    fn render(&mut self, buf: &mut Buffer, area: Rect, focused: bool) -> Result<()> {
        let t = theme();
        let block = section_block("Gallery", focused);
        let inner = block.inner(area);
        block.render(area, buf);

        let buttons_height = self.buttons_height(area.width);
        let [buttons_area, _, grid_area] = Layout::vertical([
            Constraint::Length(buttons_height),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .areas(inner);

        self.button_regions.clear();
        let categories = self.view.categories();
        let active = self.view.active_category().to_string();
        for (rect, category) in button_rects(&categories, buttons_area).into_iter().zip(categories) {
            let style = if category == active {
                t.highlight_style()
            } else {
                t.muted_style()
            };
            Paragraph::new(format!(" {} ", category))
                .style(style)
                .render(rect, buf);
            self.button_regions.push((rect, category));
        }

        self.card_regions.clear();
        if self.view.is_empty() {
            MessageBox::render(buf, grid_area, "No results", Some("Gallery"), None)?;
            return Ok(());
        }
        let selected = self.view.selected();
        let items: Vec<GalleryItem> = self.view.visible().into_iter().cloned().collect();
        let rows = Layout::vertical(vec![Constraint::Length(CARD_HEIGHT); usize::from(self.rows())])
            .split(grid_area);
        for (row_index, row) in rows.iter().enumerate() {
            let start = row_index * self.columns;
            for (column_index, cell) in columns(*row, self.columns).into_iter().enumerate() {
                let index = start + column_index;
                let Some(item) = items.get(index) else {
                    break;
                };
                Self::render_card(buf, cell, item, index == selected);
                self.card_regions.push((cell, index));
            }
        }
        Ok(())
    }

    fn handle_action(&mut self, action: Action) -> Result<ComponentAction> {
        let columns = self.columns.max(1) as isize;
        if self.is_modal_open() {
            match action {
                Action::MoveLeft | Action::MoveUp => self.view.focus_prev(),
                Action::MoveRight | Action::MoveDown => self.view.focus_next(),
                Action::Cancel | Action::Confirm => self.view.clear_focus(),
                _ => return Ok(ComponentAction::None),
            }
            return Ok(ComponentAction::Update);
        }
        match action {
            Action::MoveLeft => self.view.select_by(-1),
            Action::MoveRight => self.view.select_by(1),
            Action::MoveUp => self.view.select_by(-columns),
            Action::MoveDown => self.view.select_by(columns),
            Action::Home => self.view.select_first(),
            Action::End => self.view.select_last(),
            Action::Confirm => self.view.focus_selected(),
            Action::NextTab => self.cycle_category(true),
            Action::PrevTab => self.cycle_category(false),
            _ => return Ok(ComponentAction::None),
        }
        Ok(ComponentAction::Update)
    }

    fn handle_mouse(&mut self, mouse: MouseEvent) -> Result<ComponentAction> {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return Ok(ComponentAction::None);
        }
        let (column, row) = (mouse.column, mouse.row);
        let category = self
            .button_regions
            .iter()
            .find(|(rect, _)| hit(*rect, column, row))
            .map(|(_, category)| category.clone());
        if let Some(category) = category {
            self.set_category(&category);
            return Ok(ComponentAction::Update);
        }
        let card = self
            .card_regions
            .iter()
            .find(|(rect, _)| hit(*rect, column, row))
            .map(|&(_, index)| index);
        Ok(match card {
            Some(index) => {
                self.view.focus_on(index);
                ComponentAction::Update
            }
            None => ComponentAction::None,
        })
    }

    fn set_viewport(&mut self, viewport: Viewport) {
        self.columns = viewport.visible_cards();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::StaticCatalog;
    use crossterm::event::KeyModifiers;

    fn grid() -> GalleryGrid {
        GalleryGrid::new(&StaticCatalog::new())
    }

    fn click(column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    fn render(grid: &mut GalleryGrid, width: u16) -> Buffer {
        let area = Rect::new(0, 0, width, grid.height(width));
        let mut buf = Buffer::empty(area);
        grid.render(&mut buf, area, true).unwrap();
        buf
    }

    #[test]
    fn test_category_buttons_start_with_all() {
        let grid = grid();
        let categories = grid.view().categories();
        assert_eq!(categories[0], "All");
        assert_eq!(categories.len(), 7);
    }

    #[test]
    fn test_tab_cycles_categories_and_resets_focus() {
        let mut grid = grid();
        grid.handle_action(Action::Confirm).unwrap();
        assert!(grid.is_modal_open());
        grid.handle_action(Action::Cancel).unwrap();
        grid.handle_action(Action::NextTab).unwrap();
        assert_eq!(grid.view().active_category(), "Contemporary");
        grid.handle_action(Action::PrevTab).unwrap();
        grid.handle_action(Action::PrevTab).unwrap();
        assert_eq!(grid.view().active_category(), "Abstract");
        assert_eq!(grid.view().len(), 1);
    }

    #[test]
    fn test_grid_navigation_moves_by_rows() {
        let mut grid = grid();
        grid.set_viewport(Viewport::new(150, 40));
        grid.handle_action(Action::MoveDown).unwrap();
        assert_eq!(grid.view().selected(), 3);
        grid.handle_action(Action::MoveLeft).unwrap();
        assert_eq!(grid.view().selected(), 2);
        grid.handle_action(Action::End).unwrap();
        assert_eq!(grid.view().selected(), 5);
    }

    #[test]
    fn test_modal_browses_with_wraparound() {
        let mut grid = grid();
        grid.handle_action(Action::End).unwrap();
        grid.handle_action(Action::Confirm).unwrap();
        assert_eq!(grid.view().focus(), Some(5));
        grid.handle_action(Action::MoveRight).unwrap();
        assert_eq!(grid.view().focus(), Some(0));
        grid.handle_action(Action::MoveLeft).unwrap();
        assert_eq!(grid.view().focus(), Some(5));
    }

    #[test]
    fn test_click_category_then_card_opens_modal() {
        let mut grid = grid();
        render(&mut grid, 120);
        let (rect, _) = grid
            .button_regions
            .iter()
            .find(|(_, c)| c == "Abstract")
            .cloned()
            .unwrap();
        grid.handle_mouse(click(rect.x, rect.y)).unwrap();
        assert_eq!(grid.view().len(), 1);

        render(&mut grid, 120);
        let (card, _) = grid.card_regions[0];
        grid.handle_mouse(click(card.x + 1, card.y + 1)).unwrap();
        assert_eq!(
            grid.view().focused_item().map(|i| i.title),
            Some("Geometric Tensions")
        );
    }

    #[test]
    fn test_modal_renders_blurb_and_closes_on_outside_click() {
        let mut grid = grid();
        grid.set_category("Abstract");
        grid.handle_action(Action::Confirm).unwrap();
        let area = Rect::new(0, 0, 100, 40);
        let mut buf = Buffer::empty(area);
        grid.render_modal(&mut buf, area);
        let text: String = buf.content.iter().map(|c| c.symbol()).collect();
        assert!(text.contains("representational"));

        grid.handle_modal_mouse(click(0, 0));
        assert!(!grid.is_modal_open());
    }

    #[test]
    fn test_selected_region_tracks_selection() {
        let mut grid = grid();
        grid.set_viewport(Viewport::new(150, 40));
        render(&mut grid, 150);
        grid.handle_action(Action::MoveDown).unwrap();
        let region = grid.selected_region().unwrap();
        assert_eq!(region, grid.card_regions[3].0);
    }
}
