//! "Latest Videos" section: one featured event plus an auto-advancing
//! carousel over the others.

use crate::catalog::{ItemSource, VideoEvent};
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
use tracing::info;

const FEATURED_HEIGHT: u16 = 6;
const CARD_HEIGHT: u16 = 5;

pub struct LatestVideos {
    events: Vec<VideoEvent>,
    /// Index into `events`
    featured: usize,
    /// Rotates over every event except the featured one
    carousel: Carousel,
    hovered: bool,
    carousel_region: Rect,
    prev_region: Rect,
    next_region: Rect,
    /// Card area and the event index it shows
    card_regions: Vec<(Rect, usize)>,
}

impl LatestVideos {
    pub fn new(source: &impl ItemSource<VideoEvent>, interval: Duration) -> Self {
        let events = source.list_items();
        let featured = events.iter().position(|e| e.featured).unwrap_or(0);
        let others = events.len().saturating_sub(1);
        Self {
            events,
            featured,
            carousel: Carousel::windowed(others, 1, interval, ManualPolicy::Pause),
            hovered: false,
            carousel_region: Rect::default(),
            prev_region: Rect::default(),
            next_region: Rect::default(),
            card_regions: Vec::new(),
        }
    }

    pub fn featured(&self) -> Option<&VideoEvent> {
        self.events.get(self.featured)
    }

    pub fn carousel(&self) -> &Carousel {
        &self.carousel
    }

    /// Event indices in carousel order (all but the featured one).
    pub fn others(&self) -> Vec<usize> {
        (0..self.events.len()).filter(|&i| i != self.featured).collect()
    }

    /// Event indices currently on screen in the carousel.
    pub fn shown(&self) -> Vec<usize> {
        let others = self.others();
        self.carousel
            .window()
            .into_iter()
            .filter_map(|slot| others.get(slot).copied())
            .collect()
    }

    /// Feature an event, stop autoplay and re-clamp the carousel.
    pub fn select_event(&mut self, event: usize) -> bool {
        if event >= self.events.len() || event == self.featured {
            return false;
        }
        self.featured = event;
        self.carousel.click();
        self.carousel.set_len(self.others().len());
        info!(title = self.events[event].title, "Featured video changed");
        true
    }

    fn set_hovered(&mut self, hovered: bool) -> bool {
        if hovered == self.hovered {
            return false;
        }
        self.hovered = hovered;
        if hovered {
            self.carousel.hover_enter();
        } else {
            self.carousel.hover_leave();
        }
        true
    }

    fn render_featured(&self, buf: &mut Buffer, area: Rect) {
        let t = theme();
        let Some(event) = self.featured() else {
            Paragraph::new("No events yet")
                .style(t.muted_style())
                .render(area, buf);
            return;
        };
        let mut lines = vec![
            Line::from(vec![
                Span::styled(" ★ Featured ", t.badge_style().add_modifier(Modifier::BOLD)),
                Span::raw(" "),
                Span::styled(event.title, t.title_style()),
            ]),
            Line::from(Span::styled(
                format!("📅 {}   🕒 {}", event.date, event.time),
                t.muted_style(),
            )),
        ];
        if let Some(credit) = event.credit() {
            lines.push(Line::from(Span::styled(credit, t.text_style())));
        }
        lines.push(match event.video_url {
            Some(url) => Line::from(vec![
                Span::styled("▶ Watch: ", t.emphasis_style()),
                Span::styled(url, t.text_style()),
            ]),
            None => Line::from(Span::styled("Video coming soon", t.muted_style())),
        });
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(t.border_focused_style());
        Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: true })
            .render(area, buf);
    }

    fn render_card(buf: &mut Buffer, area: Rect, event: &VideoEvent) {
        let t = theme();
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(t.border_style());
        Paragraph::new(vec![
            Line::from(Span::styled(event.title, t.text_style().add_modifier(Modifier::BOLD))),
            Line::from(Span::styled(
                format!("{} · {}", event.date, event.time),
                t.muted_style(),
            )),
        ])
        .block(block)
        .wrap(Wrap { trim: true })
        .render(area, buf);
    }
}

impl Component for LatestVideos {
    fn height(&self, _width: u16) -> u16 {
        2 + FEATURED_HEIGHT + 1 + CARD_HEIGHT
    }

    fn render(&mut self, buf: &mut Buffer, area: Rect, focused: bool) -> Result<()> {
        let t = theme();
        let block = section_block("Latest Videos", focused);
        let inner = block.inner(area);
        block.render(area, buf);

        let [featured_area, _, cards_row] = Layout::vertical([
            Constraint::Length(FEATURED_HEIGHT),
            Constraint::Length(1),
            Constraint::Length(CARD_HEIGHT),
        ])
        .areas(inner);
        self.render_featured(buf, featured_area);

        let [prev, cards_area, next] = Layout::horizontal([
            Constraint::Length(2),
            Constraint::Min(0),
            Constraint::Length(2),
        ])
        .areas(cards_row);
        let middle = CARD_HEIGHT / 2;
        self.prev_region = Rect::new(prev.x, prev.y + middle, 1, 1);
        self.next_region = Rect::new(next.x + 1, next.y + middle, 1, 1);
        self.carousel_region = cards_row;
        if self.carousel.dot_count() > 1 {
            Paragraph::new("◀")
                .style(t.emphasis_style())
                .render(self.prev_region, buf);
            Paragraph::new("▶")
                .style(t.emphasis_style())
                .render(self.next_region, buf);
        }

        self.card_regions.clear();
        let shown = self.shown();
        for (card, event_index) in columns(cards_area, shown.len()).into_iter().zip(shown) {
            if let Some(event) = self.events.get(event_index) {
                Self::render_card(buf, card, event);
            }
            self.card_regions.push((card, event_index));
        }
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
            Action::Confirm => match self.shown().first() {
                Some(&event) => ComponentAction::updated(self.select_event(event)),
                None => ComponentAction::None,
            },
            _ => ComponentAction::None,
        })
    }

    fn handle_mouse(&mut self, mouse: MouseEvent) -> Result<ComponentAction> {
        let (column, row) = (mouse.column, mouse.row);
        match mouse.kind {
            MouseEventKind::Moved => {
                let over = hit(self.carousel_region, column, row);
                Ok(ComponentAction::updated(self.set_hovered(over)))
            }
            MouseEventKind::Down(MouseButton::Left) => {
                if hit(self.prev_region, column, row) {
                    self.carousel.prev();
                    return Ok(ComponentAction::Update);
                }
                if hit(self.next_region, column, row) {
                    self.carousel.next();
                    return Ok(ComponentAction::Update);
                }
                let card = self
                    .card_regions
                    .iter()
                    .find(|(rect, _)| hit(*rect, column, row))
                    .map(|&(_, event)| event);
                Ok(match card {
                    Some(event) => ComponentAction::updated(self.select_event(event)),
                    None => ComponentAction::None,
                })
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

    const INTERVAL: Duration = Duration::from_secs(3);

    fn videos() -> LatestVideos {
        LatestVideos::new(&StaticCatalog::new(), INTERVAL)
    }

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn test_featured_event_is_excluded_from_carousel() {
        let videos = videos();
        assert_eq!(videos.featured().map(|e| e.id), Some(1));
        assert_eq!(videos.carousel().len(), 5);
        assert_eq!(videos.others(), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_autoplay_advances_every_interval() {
        let mut videos = videos();
        assert_eq!(videos.shown(), vec![1]);
        assert!(videos.tick(INTERVAL));
        assert_eq!(videos.shown(), vec![2]);
        assert!(!videos.tick(Duration::from_secs(1)));
    }

    #[test]
    fn test_selecting_event_features_it_and_pauses() {
        let mut videos = videos();
        assert!(videos.select_event(3));
        assert_eq!(videos.featured().map(|e| e.id), Some(4));
        assert!(!videos.carousel().is_autoplay());
        assert_eq!(videos.others(), vec![0, 1, 2, 4, 5]);
        assert!(!videos.tick(INTERVAL * 4));
        // Re-selecting the featured one changes nothing
        assert!(!videos.select_event(3));
    }

    #[test]
    fn test_manual_navigation_pauses_autoplay() {
        let mut videos = videos();
        videos.handle_action(Action::MoveRight).unwrap();
        assert_eq!(videos.carousel().index(), 1);
        assert!(!videos.carousel().is_autoplay());
        videos.handle_action(Action::MoveLeft).unwrap();
        videos.handle_action(Action::MoveLeft).unwrap();
        assert_eq!(videos.carousel().index(), 4);
    }

    #[test]
    fn test_hover_pauses_and_leave_resumes() {
        let mut videos = videos();
        let area = Rect::new(0, 0, 120, videos.height(120));
        let mut buf = Buffer::empty(area);
        videos.render(&mut buf, area, false).unwrap();
        let region = videos.carousel_region;

        videos
            .handle_mouse(mouse(MouseEventKind::Moved, region.x + 3, region.y + 1))
            .unwrap();
        assert!(!videos.carousel().is_autoplay());
        videos.handle_mouse(mouse(MouseEventKind::Moved, 0, 0)).unwrap();
        assert!(videos.carousel().is_autoplay());
    }

    #[test]
    fn test_click_on_card_features_it() {
        let mut videos = videos();
        videos.set_viewport(Viewport::new(130, 40));
        let area = Rect::new(0, 0, 130, videos.height(130));
        let mut buf = Buffer::empty(area);
        videos.render(&mut buf, area, false).unwrap();
        assert_eq!(videos.card_regions.len(), 3);
        let (card, event) = videos.card_regions[2];
        videos
            .handle_mouse(mouse(MouseEventKind::Down(MouseButton::Left), card.x + 1, card.y + 1))
            .unwrap();
        assert_eq!(videos.featured, event);
    }

    #[test]
    fn test_pause_cancels_timer() {
        let mut videos = videos();
        videos.pause();
        assert!(!videos.tick(INTERVAL * 2));
        videos.resume();
        assert!(videos.tick(INTERVAL));
    }
}
