//! Home page: hero, services, service area, latest videos and testimonials
//! stacked on one scrolling page.

use crate::catalog::StaticCatalog;
use crate::components::hero::Hero;
use crate::components::latest_videos::LatestVideos;
use crate::components::our_area::OurArea;
use crate::components::page::stack;
use crate::components::services::Services;
use crate::components::testimonials::Testimonials;
use crate::components::{Component, ComponentAction, Footer, ScrollPage};
use crate::config::Config;
use crate::keymap::{Action, Keymap};
use crate::screens::screen_trait::{RenderContext, Screen, ScreenAction, ScreenContext};
use crate::state::signal::viewport;
use crate::state::{Subscription, Viewport};
use anyhow::Result;
use crossterm::event::{Event, KeyEventKind, MouseButton, MouseEventKind};
use ratatui::layout::Rect;
use ratatui::Frame;
use std::time::Duration;
use tracing::debug;

pub struct HomeScreen {
    sections: Vec<Box<dyn Component>>,
    /// Section that receives left/right/enter
    focus: usize,
    page: ScrollPage,
    footer: Footer,
    /// Page areas of each section from the last render
    regions: Vec<Rect>,
    subscription: Option<Subscription<Viewport>>,
}

impl HomeScreen {
    pub fn new(config: &Config) -> Self {
        let catalog = StaticCatalog::new();
        let carousel = &config.carousel;
        let sections: Vec<Box<dyn Component>> = vec![
            Box::new(Hero::new()),
            Box::new(Services::new(&catalog)),
            Box::new(OurArea::new(&catalog)),
            Box::new(LatestVideos::new(&catalog, carousel.videos_interval())),
            Box::new(Testimonials::new(&catalog, carousel.testimonials_interval())),
        ];
        Self {
            sections,
            focus: 0,
            page: ScrollPage::new(),
            footer: Footer::default(),
            regions: Vec::new(),
            subscription: None,
        }
    }

    pub fn focus(&self) -> usize {
        self.focus
    }

    pub fn page(&self) -> &ScrollPage {
        &self.page
    }

    pub fn is_subscribed(&self) -> bool {
        self.subscription.is_some()
    }

    fn apply_viewport(&mut self, viewport: Viewport) {
        for section in &mut self.sections {
            section.set_viewport(viewport);
        }
    }

    fn set_focus(&mut self, focus: usize) {
        self.focus = focus;
        if let Some(region) = self.regions.get(focus) {
            self.page.ensure_visible(region.y, region.height);
        }
        debug!(section = focus, "Home section focused");
    }

    fn cycle_focus(&mut self, forward: bool) {
        let count = self.sections.len();
        if count == 0 {
            return;
        }
        let next = if forward {
            (self.focus + 1) % count
        } else {
            (self.focus + count - 1) % count
        };
        self.set_focus(next);
    }

    fn handle_action(&mut self, action: Action) -> Result<ScreenAction> {
        match action {
            Action::NextTab | Action::PrevTab => {
                self.cycle_focus(action == Action::NextTab);
                return Ok(ScreenAction::Refresh);
            }
            Action::MoveLeft | Action::MoveRight | Action::Confirm => {
                return match self.sections.get_mut(self.focus) {
                    Some(section) => Ok(section.handle_action(action)?.into()),
                    None => Ok(ScreenAction::None),
                };
            }
            _ => {}
        }
        Ok(match self.page.handle_scroll(action) {
            Some(true) => ScreenAction::Refresh,
            _ => ScreenAction::None,
        })
    }

    fn handle_mouse(&mut self, mouse: crossterm::event::MouseEvent) -> Result<ScreenAction> {
        if let Some(changed) = self.page.handle_wheel(mouse) {
            return Ok(if changed {
                ScreenAction::Refresh
            } else {
                ScreenAction::None
            });
        }
        let mouse = self.page.translate(mouse);
        if mouse.kind == MouseEventKind::Down(MouseButton::Left) {
            if let Some(index) = self
                .regions
                .iter()
                .position(|r| crate::utils::hit(*r, mouse.column, mouse.row))
            {
                self.focus = index;
            }
        }
        // Every section sees the event so hover state can notice the pointer leave
        let mut result = ComponentAction::None;
        for section in &mut self.sections {
            match section.handle_mouse(mouse)? {
                ComponentAction::None => {}
                ComponentAction::Update => {
                    if result == ComponentAction::None {
                        result = ComponentAction::Update;
                    }
                }
                action => result = action,
            }
        }
        Ok(result.into())
    }
}

impl Screen for HomeScreen {
    fn render(&mut self, frame: &mut Frame, area: Rect, _ctx: &RenderContext) -> Result<()> {
        let width = ScrollPage::content_width(area);
        let mut heights: Vec<u16> = self.sections.iter().map(|s| s.height(width)).collect();
        heights.push(self.footer.height(width));
        let total = heights.iter().sum();

        let rects = stack(Rect::new(0, 0, width, total), &heights);
        self.regions = rects[..self.sections.len()].to_vec();

        let focus = self.focus;
        let sections = &mut self.sections;
        let footer = &self.footer;
        self.page.render(frame.buffer_mut(), area, total, |buf, _| {
            for (index, (section, rect)) in sections.iter_mut().zip(&rects).enumerate() {
                section.render(buf, *rect, index == focus)?;
            }
            if let Some(rect) = rects.last() {
                footer.render(buf, *rect)?;
            }
            Ok(())
        })?;
        self.page.publish();
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

    fn tick(&mut self, elapsed: Duration) -> bool {
        let mut changed = false;
        if let Some(viewport) = self.subscription.as_mut().and_then(Subscription::poll) {
            self.apply_viewport(viewport);
            changed = true;
        }
        for section in &mut self.sections {
            changed |= section.tick(elapsed);
        }
        changed
    }

    fn footer_hints(&self, keymap: &Keymap) -> String {
        format!(
            "{}: Section | {}/{}: Scroll | {}/{}: Browse | {}",
            keymap.get_key_display_for_action(Action::NextTab),
            keymap.get_key_display_for_action(Action::MoveUp),
            keymap.get_key_display_for_action(Action::MoveDown),
            keymap.get_key_display_for_action(Action::MoveLeft),
            keymap.get_key_display_for_action(Action::MoveRight),
            keymap.footer_navigation(),
        )
    }

    fn on_enter(&mut self, _ctx: &ScreenContext) -> Result<()> {
        let mut subscription = viewport().subscribe();
        self.apply_viewport(subscription.current());
        self.subscription = Some(subscription);
        self.page.scroll_to_top();
        for section in &mut self.sections {
            section.resume();
        }
        Ok(())
    }

    fn on_exit(&mut self, _ctx: &ScreenContext) -> Result<()> {
        self.subscription = None;
        for section in &mut self.sections {
            section.pause();
        }
        Ok(())
    }
}
