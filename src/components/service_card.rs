//! Card for one service provider on the listing screen.

use crate::catalog::ServiceListing;
use crate::components::component::{Component, ComponentAction};
use crate::keymap::Action;
use crate::state::{Carousel, ManualPolicy, Viewport};
use crate::styles::theme;
use crate::utils::layout::hit;
use crate::widgets::Toast;
use anyhow::Result;
use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use ratatui::prelude::*;
use ratatui::widgets::{Block, BorderType, Borders, Paragraph, Widget, Wrap};
use std::time::Duration;
use tracing::info;

const CARD_HEIGHT: u16 = 11;
const COMPACT_IMAGE_HEIGHT: u16 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardButton {
    Call,
    WhatsApp,
    Enquiry,
}

impl CardButton {
    pub const ALL: [CardButton; 3] = [CardButton::Call, CardButton::WhatsApp, CardButton::Enquiry];

    fn label(self, listing: &ServiceListing) -> String {
        match self {
            CardButton::Call => format!("📞 {}", listing.phone),
            CardButton::WhatsApp => "WhatsApp".to_string(),
            CardButton::Enquiry => "✉ Send Enquiry".to_string(),
        }
    }
}

pub struct ServiceCard {
    listing: ServiceListing,
    slider: Carousel,
    /// Button highlighted for keyboard activation
    button: usize,
    compact: bool,
    button_regions: Vec<(Rect, CardButton)>,
    prev_region: Rect,
    next_region: Rect,
    dot_regions: Vec<(Rect, usize)>,
}

impl ServiceCard {
    pub fn new(listing: ServiceListing, interval: Duration) -> Self {
        let slider = Carousel::new(listing.images.len(), interval, ManualPolicy::Restart);
        Self {
            listing,
            slider,
            button: 0,
            compact: false,
            button_regions: Vec::new(),
            prev_region: Rect::default(),
            next_region: Rect::default(),
            dot_regions: Vec::new(),
        }
    }

    pub fn id(&self) -> u32 {
        self.listing.id
    }

    pub fn listing(&self) -> &ServiceListing {
        &self.listing
    }

    pub fn slider(&self) -> &Carousel {
        &self.slider
    }

    pub fn selected_button(&self) -> CardButton {
        CardButton::ALL[self.button % CardButton::ALL.len()]
    }

    /// Toast describing what pressing a button does.
    pub fn press(&self, button: CardButton) -> ComponentAction {
        let listing = &self.listing;
        info!(listing = listing.name, ?button, "Service card action");
        let toast = match button {
            CardButton::Call => Toast::info(format!("Call {} at {}", listing.name, listing.phone)),
            CardButton::WhatsApp => Toast::info(format!(
                "WhatsApp {} on {} ({})",
                listing.name,
                listing.phone,
                listing.whatsapp_link()
            )),
            CardButton::Enquiry => Toast::success(format!(
                "Enquiry sent to {}. They will call you from {}",
                listing.name, listing.phone
            )),
        };
        ComponentAction::Notify(toast)
    }

    fn render_slider(&mut self, buf: &mut Buffer, area: Rect) {
        let t = theme();
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(t.border_style());
        let inner = block.inner(area);
        block.render(area, buf);

        let count = self.listing.images.len();
        let image = self
            .listing
            .images
            .get(self.slider.index())
            .copied()
            .unwrap_or("no image");
        let [_, caption, path, _, dots] = Layout::vertical([
            Constraint::Min(0),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .areas(inner);
        Paragraph::new(format!("🖼  Photo {}/{}", self.slider.index() + 1, count.max(1)))
            .style(t.text_style())
            .alignment(Alignment::Center)
            .render(caption, buf);
        Paragraph::new(image)
            .style(t.muted_style())
            .alignment(Alignment::Center)
            .render(path, buf);

        let middle = inner.y + inner.height / 2;
        self.prev_region = Rect::new(inner.x, middle, 1, 1);
        self.next_region = Rect::new(inner.right().saturating_sub(1), middle, 1, 1);
        if count > 1 {
            Paragraph::new("‹").style(t.emphasis_style()).render(self.prev_region, buf);
            Paragraph::new("›").style(t.emphasis_style()).render(self.next_region, buf);
        }

        self.dot_regions.clear();
        let mut x = dots.x + dots.width.saturating_sub(count as u16 * 2) / 2;
        for index in 0..count {
            let rect = Rect::new(x, dots.y, 1, 1);
            let (symbol, style) = if index == self.slider.index() {
                ("●", t.text_style())
            } else {
                ("○", t.muted_style())
            };
            Paragraph::new(symbol).style(style).render(rect, buf);
            self.dot_regions.push((rect, index));
            x += 2;
        }
    }

    fn render_details(&mut self, buf: &mut Buffer, area: Rect, focused: bool) {
        let t = theme();
        let listing = &self.listing;
        let mut rating = vec![
            Span::styled(
                format!(" {:.1} ★ ", listing.rating),
                t.success_style().add_modifier(Modifier::REVERSED | Modifier::BOLD),
            ),
            Span::styled(format!(" {} Ratings ", listing.review_count), t.muted_style()),
        ];
        for badge in listing.badges() {
            rating.push(Span::raw(" "));
            rating.push(Span::styled(format!("[{}]", badge), t.badge_style()));
        }
        let tags: Vec<Span> = listing
            .services
            .iter()
            .flat_map(|s| [Span::styled(format!("‹{}›", s), t.text_style()), Span::raw(" ")])
            .collect();
        let lines = vec![
            Line::from(Span::styled(format!("🏆 {}", listing.name), t.title_style())),
            Line::from(rating),
            Line::from(Span::styled(format!("📍 {}", listing.address), t.muted_style())),
            Line::from(tags),
        ];

        let [details, buttons_row] =
            Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(area);
        Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .render(details, buf);

        self.button_regions.clear();
        let mut x = buttons_row.x;
        for (index, button) in CardButton::ALL.into_iter().enumerate() {
            let label = format!("[ {} ]", button.label(listing));
            let width = (Span::raw(label.as_str()).width() as u16)
                .min(buttons_row.right().saturating_sub(x));
            let rect = Rect::new(x, buttons_row.y, width, 1);
            let style = if focused && index == self.button {
                t.highlight_style()
            } else {
                t.emphasis_style()
            };
            Paragraph::new(label).style(style).render(rect, buf);
            self.button_regions.push((rect, button));
            x = x.saturating_add(width + 1);
        }
    }
}

impl Component for ServiceCard {
    fn height(&self, _width: u16) -> u16 {
        if self.compact {
            CARD_HEIGHT + COMPACT_IMAGE_HEIGHT
        } else {
            CARD_HEIGHT
        }
    }

    fn render(&mut self, buf: &mut Buffer, area: Rect, focused: bool) -> Result<()> {
        let t = theme();
        let border = if focused {
            t.border_focused_style()
        } else {
            t.border_style()
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(border);
        let inner = block.inner(area);
        block.render(area, buf);

        let (image_area, details_area) = if self.compact {
            let [image, details] =
                Layout::vertical([Constraint::Length(COMPACT_IMAGE_HEIGHT), Constraint::Min(0)])
                    .areas(inner);
            (image, details)
        } else {
            let [image, _, details] = Layout::horizontal([
                Constraint::Percentage(33),
                Constraint::Length(1),
                Constraint::Min(0),
            ])
            .areas(inner);
            (image, details)
        };
        self.render_slider(buf, image_area);
        self.render_details(buf, details_area, focused);
        Ok(())
    }

    fn handle_action(&mut self, action: Action) -> Result<ComponentAction> {
        let count = CardButton::ALL.len();
        Ok(match action {
            Action::MoveLeft => {
                self.button = (self.button + count - 1) % count;
                ComponentAction::Update
            }
            Action::MoveRight => {
                self.button = (self.button + 1) % count;
                ComponentAction::Update
            }
            Action::Confirm => self.press(self.selected_button()),
            _ => ComponentAction::None,
        })
    }

    fn handle_mouse(&mut self, mouse: MouseEvent) -> Result<ComponentAction> {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return Ok(ComponentAction::None);
        }
        let (column, row) = (mouse.column, mouse.row);
        if let Some(&(_, button)) = self.button_regions.iter().find(|(r, _)| hit(*r, column, row)) {
            return Ok(self.press(button));
        }
        if hit(self.prev_region, column, row) {
            self.slider.prev();
        } else if hit(self.next_region, column, row) {
            self.slider.next();
        } else if let Some(&(_, dot)) = self.dot_regions.iter().find(|(r, _)| hit(*r, column, row)) {
            self.slider.go_to(dot);
        } else {
            return Ok(ComponentAction::None);
        }
        Ok(ComponentAction::Update)
    }

    fn tick(&mut self, elapsed: Duration) -> bool {
        self.slider.tick(elapsed)
    }

    fn set_viewport(&mut self, viewport: Viewport) {
        self.compact = viewport.is_compact();
    }

    fn pause(&mut self) {
        self.slider.cancel();
    }

    fn resume(&mut self) {
        self.slider.resume();
    }
}
