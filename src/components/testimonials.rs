//! "What Our Clients Say" section: a windowed carousel of review cards.

use crate::catalog::{ItemSource, Testimonial};
use crate::components::component::{Component, ComponentAction};
use crate::components::page::section_block;
use crate::keymap::Action;
use crate::state::{Carousel, ManualPolicy, Viewport};
use crate::styles::theme;
use crate::utils::layout::{columns, hit};
use anyhow::Result;
use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use ratatui::prelude::*;
use ratatui::widgets::{Block, BorderType, Borders, Paragraph, Widget, Wrap};
use std::time::Duration;

const CARD_HEIGHT: u16 = 10;

pub struct Testimonials {
    items: Vec<Testimonial>,
    carousel: Carousel,
    hovered: bool,
    region: Rect,
    prev_region: Rect,
    next_region: Rect,
    dot_regions: Vec<(Rect, usize)>,
}

impl Testimonials {
    pub fn new(source: &impl ItemSource<Testimonial>, interval: Duration) -> Self {
        let items = source.list_items();
        Self {
            carousel: Carousel::windowed(items.len(), 3, interval, ManualPolicy::Restart),
            items,
            hovered: false,
            region: Rect::default(),
            prev_region: Rect::default(),
            next_region: Rect::default(),
            dot_regions: Vec::new(),
        }
    }

    pub fn carousel(&self) -> &Carousel {
        &self.carousel
    }

    /// Testimonials on screen, left to right, with the active (middle) flag.
    pub fn shown(&self) -> Vec<(&Testimonial, bool)> {
        let active = self.carousel.active_slot();
        self.carousel
            .window()
            .into_iter()
            .enumerate()
            .filter_map(|(slot, index)| self.items.get(index).map(|item| (item, slot == active)))
            .collect()
    }

    fn render_card(buf: &mut Buffer, area: Rect, item: &Testimonial, active: bool) {
        let t = theme();
        let border = if active {
            t.border_focused_style()
        } else {
            t.border_style()
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(border)
            .title(format!(" {} ", item.service))
            .title_style(t.badge_style());
        let name_style = if active {
            t.highlight_style()
        } else {
            t.text_style().add_modifier(Modifier::BOLD)
        };
        let lines = vec![
            Line::from(vec![
                Span::styled(format!("({}) ", item.initials()), t.badge_style()),
                Span::styled(item.name, name_style),
            ]),
            Line::from(vec![
                Span::styled(item.stars(), t.rating_style()),
                Span::raw("  "),
                Span::styled(item.formatted_date(), t.muted_style()),
            ]),
            Line::default(),
            Line::from(Span::styled(format!("“{}”", item.content), t.text_style())),
        ];
        Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: true })
            .render(area, buf);
    }

    fn render_dots(&mut self, buf: &mut Buffer, area: Rect) {
        let t = theme();
        self.dot_regions.clear();
        let count = self.carousel.dot_count();
        let mut x = area.x + area.width.saturating_sub(count as u16 * 2) / 2;
        for index in 0..count {
            let rect = Rect::new(x, area.y, 1, 1);
            let (symbol, style) = if index == self.carousel.index() {
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

impl Component for Testimonials {
    fn height(&self, _width: u16) -> u16 {
        2 + CARD_HEIGHT + 1
    }

    fn render(&mut self, buf: &mut Buffer, area: Rect, focused: bool) -> Result<()> {
        let t = theme();
        let block = section_block("What Our Clients Say", focused);
        let inner = block.inner(area);
        block.render(area, buf);
        self.region = area;

        let [cards_row, dots_row] =
            Layout::vertical([Constraint::Length(CARD_HEIGHT), Constraint::Length(1)])
                .areas(inner);
        let [prev, cards_area, next] = Layout::horizontal([
            Constraint::Length(2),
            Constraint::Min(0),
            Constraint::Length(2),
        ])
        .areas(cards_row);
        let middle = CARD_HEIGHT / 2;
        self.prev_region = Rect::new(prev.x, prev.y + middle, 1, 1);
        self.next_region = Rect::new(next.x + 1, next.y + middle, 1, 1);
        Paragraph::new("◀")
            .style(t.emphasis_style())
            .render(self.prev_region, buf);
        Paragraph::new("▶")
            .style(t.emphasis_style())
            .render(self.next_region, buf);

        let shown: Vec<(Testimonial, bool)> = self
            .shown()
            .into_iter()
            .map(|(item, active)| (item.clone(), active))
            .collect();
        for (card, (item, active)) in columns(cards_area, shown.len()).into_iter().zip(&shown) {
            Self::render_card(buf, card, item, *active);
        }
        self.render_dots(buf, dots_row);
        Ok(())
    }

    fn handle_action(&mut self, action: Action) -> Result<ComponentAction> {
        Ok(match action {
            Action::MoveLeft => {
                self.carousel.prev();
                ComponentAction::Update
            }
            Action::MoveRight => {
                self.carousel.next();
                ComponentAction::Update
            }
            _ => ComponentAction::None,
        })
    }

    fn handle_mouse(&mut self, mouse: MouseEvent) -> Result<ComponentAction> {
        let (column, row) = (mouse.column, mouse.row);
        match mouse.kind {
            MouseEventKind::Moved => {
                let over = hit(self.region, column, row);
                if over == self.hovered {
                    return Ok(ComponentAction::None);
                }
                self.hovered = over;
                if over {
                    self.carousel.hover_enter();
                } else {
                    self.carousel.hover_leave();
                }
                Ok(ComponentAction::Update)
            }
            MouseEventKind::Down(MouseButton::Left) => {
                if hit(self.prev_region, column, row) {
                    self.carousel.prev();
                } else if hit(self.next_region, column, row) {
                    self.carousel.next();
                } else if let Some(&(_, dot)) =
                    self.dot_regions.iter().find(|(r, _)| hit(*r, column, row))
                {
                    self.carousel.go_to(dot);
                } else {
                    return Ok(ComponentAction::None);
                }
                Ok(ComponentAction::Update)
            }
            _ => Ok(ComponentAction::None),
        }
    }

    fn tick(&mut self, elapsed: Duration) -> bool {
        self.carousel.tick(elapsed)
    }

    fn set_viewport(&mut self, viewport: Viewport) {
        self.carousel.set_visible(viewport.visible_cards());
    }

    fn pause(&mut self) {
        self.carousel.cancel();
        self.hovered = false;
    }

    fn resume(&mut self) {
        self.carousel.resume();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::StaticCatalog;
    use crossterm::event::KeyModifiers;

    const INTERVAL: Duration = Duration::from_secs(5);

    fn testimonials(width: u16) -> Testimonials {
        let mut section = Testimonials::new(&StaticCatalog::new(), INTERVAL);
        section.set_viewport(Viewport::new(width, 40));
        section
    }

    #[test]
    fn test_visible_cards_follow_breakpoints() {
        assert_eq!(testimonials(60).carousel().visible(), 1);
        assert_eq!(testimonials(100).carousel().visible(), 2);
        assert_eq!(testimonials(150).carousel().visible(), 3);
    }

    #[test]
    fn test_middle_card_is_active() {
        let section = testimonials(150);
        let shown = section.shown();
        assert_eq!(shown.len(), 3);
        let active: Vec<bool> = shown.iter().map(|(_, active)| *active).collect();
        assert_eq!(active, vec![false, true, false]);
        assert_eq!(shown[1].0.id, 2);
    }

    #[test]
    fn test_wraps_at_last_window() {
        let mut section = testimonials(150);
        assert_eq!(section.carousel().dot_count(), 3);
        section.handle_action(Action::MoveLeft).unwrap();
        assert_eq!(section.carousel().index(), 2);
        section.handle_action(Action::MoveRight).unwrap();
        assert_eq!(section.carousel().index(), 0);
    }

    #[test]
    fn test_manual_navigation_restarts_interval() {
        let mut section = testimonials(150);
        section.tick(Duration::from_secs(4));
        section.handle_action(Action::MoveRight).unwrap();
        assert!(section.carousel().is_autoplay());
        assert!(!section.tick(Duration::from_secs(4)));
        assert!(section.tick(Duration::from_secs(1)));
        assert_eq!(section.carousel().index(), 2);
    }

    #[test]
    fn test_dot_click_jumps() {
        let mut section = testimonials(150);
        let area = Rect::new(0, 0, 150, section.height(150));
        let mut buf = Buffer::empty(area);
        section.render(&mut buf, area, false).unwrap();
        assert_eq!(section.dot_regions.len(), 3);
        let (dot, _) = section.dot_regions[2];
        section
            .handle_mouse(MouseEvent {
                kind: MouseEventKind::Down(MouseButton::Left),
                column: dot.x,
                row: dot.y,
                modifiers: KeyModifiers::NONE,
            })
            .unwrap();
        assert_eq!(section.carousel().index(), 2);
    }

    #[test]
    fn test_renders_formatted_date_and_initials() {
        let mut section = testimonials(150);
        let area = Rect::new(0, 0, 150, section.height(150));
        let mut buf = Buffer::empty(area);
        section.render(&mut buf, area, false).unwrap();
        let text: String = buf.content.iter().map(|c| c.symbol()).collect();
        assert!(text.contains("★"));
        assert!(text.contains("2025"));
    }
}
