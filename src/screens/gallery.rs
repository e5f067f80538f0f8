//! Gallery page: category filter, artwork grid and the detail modal.

use crate::catalog::StaticCatalog;
use crate::components::gallery::GalleryGrid;
use crate::components::page::stack;
use crate::components::{Component, Footer, ScrollPage};
use crate::keymap::{Action, Keymap};
use crate::screens::screen_trait::{RenderContext, Screen, ScreenAction, ScreenContext};
use crate::state::signal::viewport;
use crate::state::{Subscription, Viewport};
use anyhow::Result;
use crossterm::event::{Event, KeyEventKind, MouseEvent};
use ratatui::layout::Rect;
use ratatui::Frame;
use std::time::Duration;

pub struct GalleryScreen {
    grid: GalleryGrid,
    page: ScrollPage,
    footer: Footer,
    subscription: Option<Subscription<Viewport>>,
}

impl Default for GalleryScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl GalleryScreen {
    pub fn new() -> Self {
        Self {
            grid: GalleryGrid::new(&StaticCatalog::new()),
            page: ScrollPage::new(),
            footer: Footer::default(),
            subscription: None,
        }
    }

    pub fn grid(&self) -> &GalleryGrid {
        &self.grid
    }

    /// Preselect a category, e.g. from the command line.
    pub fn set_category(&mut self, category: &str) {
        self.grid.set_category(category);
    }

    fn reveal_selection(&mut self) {
        if let Some(card) = self.grid.selected_region() {
            self.page.ensure_visible(card.y, card.height);
        }
    }

    fn handle_action(&mut self, action: Action) -> Result<ScreenAction> {
        if self.grid.is_modal_open() {
            return Ok(self.grid.handle_action(action)?.into());
        }
        match action {
            Action::MoveUp
            | Action::MoveDown
            | Action::MoveLeft
            | Action::MoveRight
            | Action::Home
            | Action::End
            | Action::Confirm
            | Action::NextTab
            | Action::PrevTab => {
                let result = self.grid.handle_action(action)?;
                self.reveal_selection();
                Ok(result.into())
            }
            _ => Ok(match self.page.handle_scroll(action) {
                Some(true) => ScreenAction::Refresh,
                _ => ScreenAction::None,
            }),
        }
    }

    fn handle_mouse(&mut self, mouse: MouseEvent) -> Result<ScreenAction> {
        if self.grid.is_modal_open() {
            return Ok(self.grid.handle_modal_mouse(mouse).into());
        }
        if let Some(changed) = self.page.handle_wheel(mouse) {
            return Ok(if changed {
                ScreenAction::Refresh
            } else {
                ScreenAction::None
            });
        }
        let mouse = self.page.translate(mouse);
        Ok(self.grid.handle_mouse(mouse)?.into())
    }
}

impl Screen for GalleryScreen {
    fn render(&mut self, frame: &mut Frame, area: Rect, _ctx: &RenderContext) -> Result<()> {
        let width = ScrollPage::content_width(area);
        let heights = [self.grid.height(width), self.footer.height(width)];
        let total = heights.iter().sum();
        let rects = stack(Rect::new(0, 0, width, total), &heights);

        let grid = &mut self.grid;
        let footer = &self.footer;
        self.page.render(frame.buffer_mut(), area, total, |buf, _| {
            grid.render(buf, rects[0], true)?;
            footer.render(buf, rects[1])
        })?;
        self.page.publish();

        self.grid.render_modal(frame.buffer_mut(), area);
        Ok(())
    }

    fn handle_event(&mut self, event: Event, ctx: &ScreenContext) -> Result<ScreenAction> {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                match ctx.keymap().get_action(key.code, key.modifiers) {
                    Some(action) => self.handle_action(action),
                    None => Ok(ScreenAction::None),
                }
            }
            Event::Mouse(mouse) => self.handle_mouse(mouse),
            _ => Ok(ScreenAction::None),
        }
    }

    fn tick(&mut self, _elapsed: Duration) -> bool {
        match self.subscription.as_mut().and_then(Subscription::poll) {
            Some(viewport) => {
                self.grid.set_viewport(viewport);
                true
            }
            None => false,
        }
    }

    fn footer_hints(&self, keymap: &Keymap) -> String {
        if self.grid.is_modal_open() {
            return format!(
                "{}/{}: Browse | {}: Close",
                keymap.get_key_display_for_action(Action::MoveLeft),
                keymap.get_key_display_for_action(Action::MoveRight),
                keymap.get_key_display_for_action(Action::Cancel),
            );
        }
        format!(
            "{}: Category | {}: View | {}",
            keymap.get_key_display_for_action(Action::NextTab),
            keymap.get_key_display_for_action(Action::Confirm),
            keymap.footer_navigation(),
        )
    }

    fn on_enter(&mut self, _ctx: &ScreenContext) -> Result<()> {
        let mut subscription = viewport().subscribe();
        self.grid.set_viewport(subscription.current());
        self.subscription = Some(subscription);
        self.page.scroll_to_top();
        Ok(())
    }

    fn on_exit(&mut self, _ctx: &ScreenContext) -> Result<()> {
        self.subscription = None;
        self.grid.close_modal();
        Ok(())
    }
}
