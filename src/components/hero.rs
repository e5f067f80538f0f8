//! Hero banner at the top of the home page.

use crate::catalog::fixtures::{HERO_CTA, HERO_TAGLINE, HERO_TITLE};
use crate::components::component::{Component, ComponentAction};
use crate::components::page::section_block;
use crate::keymap::Action;
use crate::router::Route;
use crate::styles::theme;
use crate::utils::layout::hit;
use crate::widgets::AssimoxLogo;
use anyhow::Result;
use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Flex;
use ratatui::prelude::*;
use ratatui::widgets::{Paragraph, Wrap};
use tracing::info;

#[derive(Debug, Default)]
pub struct Hero {
    /// Where the call-to-action button was drawn
    button: Rect,
    hovered: bool,
}

impl Hero {
    pub fn new() -> Self {
        Self::default()
    }

    fn get_started(&self) -> ComponentAction {
        info!("Hero call to action");
        ComponentAction::Navigate(Route::Services)
    }
}

/// Full logo when it fits, otherwise the one-line wordmark.
fn logo_for(width: u16) -> AssimoxLogo {
    let regular = AssimoxLogo::regular().with_tagline();
    if regular.width() + 4 <= width {
        regular
    } else {
        AssimoxLogo::small()
    }
}

impl Component for Hero {
    fn height(&self, width: u16) -> u16 {
        // Tagline wraps onto more rows on narrow terminals
        let inner = width.saturating_sub(4).max(1);
        let tagline_rows = (HERO_TAGLINE.chars().count() as u16).div_ceil(inner);
        2 + logo_for(width).height() + 2 + tagline_rows + 2
    }

    fn render(&mut self, buf: &mut Buffer, area: Rect, focused: bool) -> Result<()> {
        let t = theme();
        let block = section_block("Welcome", focused);
        let inner = block.inner(area);
        block.render(area, buf);

        let logo = logo_for(area.width);
        let [logo_area, title_area, tagline_area, button_row] = Layout::vertical([
            Constraint::Length(logo.height()),
            Constraint::Length(2),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .areas(inner);

        let [logo_area] = Layout::horizontal([Constraint::Length(logo.width())])
            .flex(Flex::Center)
            .areas(logo_area);
        logo.render(logo_area, buf);

        Paragraph::new(Line::from(HERO_TITLE).style(t.title_style()))
            .alignment(Alignment::Center)
            .render(title_area, buf);
        Paragraph::new(HERO_TAGLINE)
            .style(t.text_style())
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .render(tagline_area, buf);

        let label = format!("[ {} → ]", HERO_CTA);
        let [button] = Layout::horizontal([Constraint::Length(label.chars().count() as u16)])
            .flex(Flex::Center)
            .areas(button_row);
        let style = if self.hovered || focused {
            t.highlight_style()
        } else {
            t.emphasis_style()
        };
        Paragraph::new(label).style(style).render(button, buf);
        self.button = button;
        Ok(())
    }

    fn handle_action(&mut self, action: Action) -> Result<ComponentAction> {
        Ok(match action {
            Action::Confirm => self.get_started(),
            _ => ComponentAction::None,
        })
    }

    fn handle_mouse(&mut self, mouse: MouseEvent) -> Result<ComponentAction> {
        let over = hit(self.button, mouse.column, mouse.row);
        Ok(match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) if over => self.get_started(),
            MouseEventKind::Moved if over != self.hovered => {
                self.hovered = over;
                ComponentAction::Update
            }
            _ => ComponentAction::None,
        })
    }
}
