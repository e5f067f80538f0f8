//! Service provider listing with a search box pinned above the results.

use crate::catalog::{ItemSource, ServiceListing, StaticCatalog};
use crate::components::message_box::MessageBox;
use crate::components::page::stack;
use crate::components::service_card::ServiceCard;
use crate::components::{Component, ComponentAction, Footer, ScrollPage};
use crate::config::Config;
use crate::keymap::{Action, Keymap};
use crate::screens::screen_trait::{RenderContext, Screen, ScreenAction, ScreenContext};
use crate::state::signal::viewport;
use crate::state::{CollectionView, Subscription, Viewport};
use crate::styles::theme;
use crate::utils::layout::hit;
use crate::utils::TextInput;
use crate::widgets::{TextInputWidget, TextInputWidgetExt};
use anyhow::Result;
use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::prelude::*;
use ratatui::widgets::{Paragraph, Widget};
use std::time::Duration;
use tracing::info;

const SEARCH_HEIGHT: u16 = 3;
const HEADING_HEIGHT: u16 = 3;
const EMPTY_HEIGHT: u16 = 5;

pub struct ServiceListingScreen {
    source: StaticCatalog,
    view: CollectionView<ServiceListing>,
    /// One card per listing, in catalog order
    cards: Vec<ServiceCard>,
    search: TextInput,
    search_focused: bool,
    page: ScrollPage,
    footer: Footer,
    search_area: Rect,
    /// Page area and card index of each shown card
    card_regions: Vec<(Rect, usize)>,
    subscription: Option<Subscription<Viewport>>,
}

impl ServiceListingScreen {
    pub fn new(config: &Config) -> Self {
        let source = StaticCatalog::new();
        let listings = ItemSource::<ServiceListing>::list_items(&source);
        let interval = config.carousel.slider_interval();
        let cards = listings
            .iter()
            .cloned()
            .map(|listing| ServiceCard::new(listing, interval))
            .collect();
        Self {
            source,
            view: CollectionView::new(listings),
            cards,
            search: TextInput::new(),
            search_focused: false,
            page: ScrollPage::new(),
            footer: Footer::default(),
            search_area: Rect::default(),
            card_regions: Vec::new(),
            subscription: None,
        }
    }

    pub fn view(&self) -> &CollectionView<ServiceListing> {
        &self.view
    }

    pub fn search_text(&self) -> &str {
        self.search.text()
    }

    /// Replace the search text and filter.
    pub fn set_search(&mut self, text: &str) {
        self.search.set_text(text);
        self.apply_search();
    }

    fn apply_search(&mut self) {
        let query = self.search.text();
        let matches = ItemSource::<ServiceListing>::search_items(&self.source, query);
        self.view.show_matches(query, &matches);
        self.page.scroll_to_top();
        info!(query = %query, results = self.view.len(), "Listing search");
    }

    /// Card indices matching the search, in catalog order.
    pub fn shown_cards(&self) -> Vec<usize> {
        self.view
            .visible()
            .iter()
            .filter_map(|listing| self.cards.iter().position(|c| c.id() == listing.id))
            .collect()
    }

    fn selected_card(&self) -> Option<usize> {
        self.shown_cards().get(self.view.selected()).copied()
    }

    fn reveal_selection(&mut self) {
        let Some(card) = self.selected_card() else {
            return;
        };
        if let Some(&(rect, _)) = self.card_regions.iter().find(|(_, i)| *i == card) {
            self.page.ensure_visible(rect.y, rect.height);
        }
    }

    fn handle_search_key(&mut self, key: KeyEvent, keymap: &Keymap) -> ScreenAction {
        let typed = matches!(key.code, KeyCode::Char(_))
            && !key
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT);
        if typed {
            self.search.handle_key(key.code);
            self.apply_search();
            return ScreenAction::Refresh;
        }
        let action = keymap
            .get_action(key.code, key.modifiers)
            .filter(TextInput::is_action_allowed_when_focused);
        match action {
            Some(Action::Cancel) if !self.search.is_empty() => {
                self.search.clear();
                self.apply_search();
            }
            Some(Action::Cancel | Action::Confirm | Action::NextTab | Action::PrevTab) => {
                self.search_focused = false;
            }
            Some(Action::Backspace | Action::DeleteChar) => {
                self.search.handle_key_with_action(key.code, action);
                self.apply_search();
            }
            _ => {
                if !self.search.handle_key_with_action(key.code, action) {
                    return ScreenAction::None;
                }
            }
        }
        ScreenAction::Refresh
    }

    fn handle_action(&mut self, action: Action) -> Result<ScreenAction> {
        match action {
            Action::Search | Action::NextTab | Action::PrevTab => {
                self.search_focused = true;
                Ok(ScreenAction::Refresh)
            }
            Action::MoveUp | Action::MoveDown if !self.view.is_empty() => {
                self.view
                    .select_by(if action == Action::MoveUp { -1 } else { 1 });
                self.reveal_selection();
                Ok(ScreenAction::Refresh)
            }
            Action::MoveLeft | Action::MoveRight | Action::Confirm => {
                match self.selected_card().and_then(|i| self.cards.get_mut(i)) {
                    Some(card) => Ok(card.handle_action(action)?.into()),
                    None => Ok(ScreenAction::None),
                }
            }
            _ => Ok(match self.page.handle_scroll(action) {
                Some(true) => ScreenAction::Refresh,
                _ => ScreenAction::None,
            }),
        }
    }

    fn handle_mouse(&mut self, mouse: MouseEvent) -> Result<ScreenAction> {
        if mouse.kind == MouseEventKind::Down(MouseButton::Left)
            && hit(self.search_area, mouse.column, mouse.row)
        {
            self.search_focused = true;
            return Ok(ScreenAction::Refresh);
        }
        if let Some(changed) = self.page.handle_wheel(mouse) {
            return Ok(if changed {
                ScreenAction::Refresh
            } else {
                ScreenAction::None
            });
        }
        let mouse = self.page.translate(mouse);
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return Ok(ScreenAction::None);
        }
        let clicked = self
            .card_regions
            .iter()
            .position(|(rect, _)| hit(*rect, mouse.column, mouse.row));
        let Some(position) = clicked else {
            return Ok(ScreenAction::None);
        };
        self.search_focused = false;
        let delta = position as isize - self.view.selected() as isize;
        self.view.select_by(delta);
        let card_index = self.card_regions[position].1;
        let result = match self.cards.get_mut(card_index) {
            Some(card) => card.handle_mouse(mouse)?,
            None => ComponentAction::None,
        };
        Ok(match result {
            ComponentAction::None => ScreenAction::Refresh,
            other => other.into(),
        })
    }

    fn heading(&self) -> Paragraph<'static> {
        let t = theme();
        let count = self.view.len();
        let query = self.search.text();
        let summary = if query.is_empty() {
            format!("{} providers near you", count)
        } else {
            format!(
                "{} result{} for \"{}\"",
                count,
                if count == 1 { "" } else { "s" },
                query
            )
        };
        Paragraph::new(vec![
            Line::from(Span::styled(
                "Best Appliance Repair Services",
                t.title_style(),
            )),
            Line::from(Span::styled(summary, t.muted_style())),
        ])
    }
}

impl Screen for ServiceListingScreen {
    fn render(&mut self, frame: &mut Frame, area: Rect, _ctx: &RenderContext) -> Result<()> {
        let [search_area, page_area] =
            Layout::vertical([Constraint::Length(SEARCH_HEIGHT), Constraint::Min(0)]).areas(area);
        self.search_area = search_area;
        let widget = TextInputWidget::new(&self.search)
            .title("Search services, providers or areas")
            .placeholder("e.g. AC, Borivali, Annual Maintenance")
            .focused(self.search_focused);
        frame.render_text_input_widget(widget, search_area);

        let width = ScrollPage::content_width(page_area);
        let shown = self.shown_cards();
        let mut heights = vec![HEADING_HEIGHT];
        if shown.is_empty() {
            heights.push(EMPTY_HEIGHT);
        } else {
            heights.extend(shown.iter().map(|&i| self.cards[i].height(width)));
        }
        heights.push(self.footer.height(width));
        let total = heights.iter().sum();
        let rects = stack(Rect::new(0, 0, width, total), &heights);

        let body = &rects[1..rects.len() - 1];
        self.card_regions = if shown.is_empty() {
            Vec::new()
        } else {
            body.iter().copied().zip(shown.iter().copied()).collect()
        };

        let selected = (!self.search_focused)
            .then(|| self.selected_card())
            .flatten();
        let empty_message = format!("No results for \"{}\"", self.search.text());
        let heading = self.heading();
        let cards = &mut self.cards;
        let regions = &self.card_regions;
        let footer = &self.footer;
        self.page.render(frame.buffer_mut(), page_area, total, |buf, _| {
            heading.render(rects[0].inner(Margin::new(1, 0)), buf);
            if regions.is_empty() {
                MessageBox::render(buf, body[0], &empty_message, Some("Services"), None)?;
            }
            for &(rect, index) in regions {
                if let Some(card) = cards.get_mut(index) {
                    card.render(buf, rect, Some(index) == selected)?;
                }
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
                if self.search_focused {
                    return Ok(self.handle_search_key(key, ctx.keymap()));
                }
                match ctx.keymap().get_action(key.code, key.modifiers) {
                    Some(action) => self.handle_action(action),
                    None => Ok(ScreenAction::None),
                }
            }
            Event::Mouse(mouse) => self.handle_mouse(mouse),
            _ => Ok(ScreenAction::None),
        }
    }

    fn is_input_focused(&self) -> bool {
        self.search_focused
    }

    fn tick(&mut self, elapsed: Duration) -> bool {
        let mut changed = false;
        if let Some(viewport) = self.subscription.as_mut().and_then(Subscription::poll) {
            for card in &mut self.cards {
                card.set_viewport(viewport);
            }
            changed = true;
        }
        for index in self.shown_cards() {
            if let Some(card) = self.cards.get_mut(index) {
                changed |= card.tick(elapsed);
            }
        }
        changed
    }

    fn footer_hints(&self, keymap: &Keymap) -> String {
        if self.search_focused {
            return format!(
                "Type to search | {}: Results | {}: Clear",
                keymap.get_key_display_for_action(Action::NextTab),
                keymap.get_key_display_for_action(Action::Cancel),
            );
        }
        format!(
            "{}: Search | {}/{}: Action | {}: Press | {}",
            keymap.get_key_display_for_action(Action::Search),
            keymap.get_key_display_for_action(Action::MoveLeft),
            keymap.get_key_display_for_action(Action::MoveRight),
            keymap.get_key_display_for_action(Action::Confirm),
            keymap.footer_navigation(),
        )
    }

    fn on_enter(&mut self, _ctx: &ScreenContext) -> Result<()> {
        let mut subscription = viewport().subscribe();
        let current = subscription.current();
        for card in &mut self.cards {
            card.set_viewport(current);
            card.resume();
        }
        self.subscription = Some(subscription);
        self.page.scroll_to_top();
        Ok(())
    }

    fn on_exit(&mut self, _ctx: &ScreenContext) -> Result<()> {
        self.subscription = None;
        self.search_focused = false;
        for card in &mut self.cards {
            card.pause();
        }
        Ok(())
    }
}
