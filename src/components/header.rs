//! Site header: contact bar, navigation links, login dropdown and the
//! compact-width navigation drawer.
//!
//! The header lives outside the scrolling page, so every region it records
//! is in frame coordinates. It follows the viewport signal to shrink once
//! the page is scrolled and to swap links for a drawer on narrow terminals.

use crate::auth::AuthMode;
use crate::catalog::fixtures::HEADER_CONTACT;
use crate::components::component::ComponentAction;
use crate::keymap::Action;
use crate::router::Route;
use crate::state::global::Session;
use crate::state::signal::viewport;
use crate::state::{DisclosureGroup, Subscription, Viewport};
use crate::styles::theme;
use crate::utils::layout::hit;
use crate::widgets::Toast;
use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use ratatui::prelude::*;
use ratatui::widgets::{Block, BorderType, Borders, Clear, Paragraph};
use tracing::debug;

const HEADER_EXCLUSIVE: &str = "header";
const DROPDOWN_WIDTH: u16 = 24;
const DRAWER_WIDTH: u16 = 28;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderMenu {
    Login,
    Drawer,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuItem {
    Route(Route),
    SignIn,
    CreateAccount,
    ForgotPassword,
}

impl MenuItem {
    const AUTH: [MenuItem; 3] = [
        MenuItem::SignIn,
        MenuItem::CreateAccount,
        MenuItem::ForgotPassword,
    ];

    pub fn label(self) -> &'static str {
        match self {
            MenuItem::Route(route) => route.label(),
            MenuItem::SignIn => "Sign In",
            MenuItem::CreateAccount => "Create Account",
            MenuItem::ForgotPassword => "Forgot Password",
        }
    }
}

pub struct Header {
    menus: DisclosureGroup<HeaderMenu>,
    subscription: Subscription<Viewport>,
    viewport: Viewport,
    /// Keyboard cursor inside whichever menu is open
    cursor: usize,
    nav_regions: Vec<(Rect, Route)>,
    login_trigger: Rect,
    drawer_trigger: Rect,
    /// "Get Solutions" button in the contact bar
    cta: Rect,
    item_regions: Vec<(Rect, MenuItem)>,
}

impl Default for Header {
    fn default() -> Self {
        Self::new()
    }
}

impl Header {
    pub fn new() -> Self {
        let mut subscription = viewport().subscribe();
        let viewport = subscription.current();
        Self {
            menus: DisclosureGroup::new()
                .with(HeaderMenu::Login, Some(HEADER_EXCLUSIVE))
                .with(HeaderMenu::Drawer, Some(HEADER_EXCLUSIVE)),
            subscription,
            viewport,
            cursor: 0,
            nav_regions: Vec::new(),
            login_trigger: Rect::default(),
            drawer_trigger: Rect::default(),
            cta: Rect::default(),
            item_regions: Vec::new(),
        }
    }

    /// Pick up viewport changes. Returns true when a redraw is needed.
    pub fn sync(&mut self) -> bool {
        let Some(next) = self.subscription.poll() else {
            return false;
        };
        let changed = next.is_compact() != self.viewport.is_compact()
            || next.is_scrolled() != self.viewport.is_scrolled();
        self.viewport = next;
        if !next.is_compact() && self.menus.is_open(HeaderMenu::Drawer) {
            self.menus.close(HeaderMenu::Drawer);
        }
        changed
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn height(&self) -> u16 {
        if self.viewport.is_compact() || self.viewport.is_scrolled() {
            3
        } else {
            4
        }
    }

    pub fn is_open(&self, menu: HeaderMenu) -> bool {
        self.menus.is_open(menu)
    }

    pub fn any_open(&self) -> bool {
        self.menus.any_open()
    }

    pub fn close_all(&mut self) {
        self.menus.close_all();
    }

    pub fn toggle(&mut self, menu: HeaderMenu) {
        self.menus.toggle(menu);
        self.cursor = 0;
    }

    /// Items of the open menu, in display order.
    pub fn open_items(&self) -> Vec<MenuItem> {
        if self.menus.is_open(HeaderMenu::Drawer) {
            Route::ALL
                .into_iter()
                .map(MenuItem::Route)
                .chain(MenuItem::AUTH)
                .collect()
        } else if self.menus.is_open(HeaderMenu::Login) {
            MenuItem::AUTH.to_vec()
        } else {
            Vec::new()
        }
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    fn activate(&mut self, item: MenuItem) -> ComponentAction {
        self.menus.close_all();
        debug!(item = item.label(), "Header menu item chosen");
        match item {
            MenuItem::Route(route) => ComponentAction::Navigate(route),
            MenuItem::SignIn => ComponentAction::OpenAuth(AuthMode::Login),
            MenuItem::CreateAccount => ComponentAction::OpenAuth(AuthMode::Register),
            MenuItem::ForgotPassword => ComponentAction::Notify(Toast::info(
                "Password resets are handled by the site administrator",
            )),
        }
    }

    /// Keyboard handling. Menu toggles always apply; everything else only
    /// while a menu is open.
    pub fn handle_action(&mut self, action: Action) -> ComponentAction {
        match action {
            Action::ToggleLoginMenu => {
                self.toggle(HeaderMenu::Login);
                return ComponentAction::Update;
            }
            Action::ToggleDrawer => {
                self.toggle(HeaderMenu::Drawer);
                return ComponentAction::Update;
            }
            _ => {}
        }
        let items = self.open_items();
        if items.is_empty() {
            return ComponentAction::None;
        }
        match action {
            Action::MoveUp | Action::PrevTab => {
                self.cursor = (self.cursor + items.len() - 1) % items.len();
                ComponentAction::Update
            }
            Action::MoveDown | Action::NextTab => {
                self.cursor = (self.cursor + 1) % items.len();
                ComponentAction::Update
            }
            Action::Confirm => match items.get(self.cursor) {
                Some(&item) => self.activate(item),
                None => ComponentAction::None,
            },
            Action::Cancel => {
                self.menus.close_all();
                ComponentAction::Update
            }
            _ => ComponentAction::None,
        }
    }

    /// Mouse handling in frame coordinates.
    pub fn handle_mouse(&mut self, mouse: MouseEvent) -> ComponentAction {
        let (column, row) = (mouse.column, mouse.row);
        match mouse.kind {
            MouseEventKind::Moved => {
                let hovered = self
                    .item_regions
                    .iter()
                    .position(|(rect, _)| hit(*rect, column, row));
                match hovered {
                    Some(index) if index != self.cursor => {
                        self.cursor = index;
                        ComponentAction::Update
                    }
                    _ => ComponentAction::None,
                }
            }
            MouseEventKind::Down(MouseButton::Left) => {
                if hit(self.login_trigger, column, row) {
                    self.toggle(HeaderMenu::Login);
                    return ComponentAction::Update;
                }
                if hit(self.drawer_trigger, column, row) {
                    self.toggle(HeaderMenu::Drawer);
                    return ComponentAction::Update;
                }
                let item = self
                    .item_regions
                    .iter()
                    .find(|(rect, _)| hit(*rect, column, row))
                    .map(|&(_, item)| item);
                if let Some(item) = item {
                    return self.activate(item);
                }
                let closed = self.menus.click_outside(column, row);
                if hit(self.cta, column, row) {
                    return ComponentAction::Navigate(Route::Services);
                }
                let link = self
                    .nav_regions
                    .iter()
                    .find(|(rect, _)| hit(*rect, column, row))
                    .map(|&(_, route)| route);
                match link {
                    Some(route) => ComponentAction::Navigate(route),
                    None => ComponentAction::updated(!closed.is_empty()),
                }
            }
            _ => ComponentAction::None,
        }
    }

    fn render_contact_bar(&mut self, frame: &mut Frame, area: Rect) {
        let t = theme();
        let contact = HEADER_CONTACT;
        let left = Line::from(vec![
            Span::styled(format!("☎ {}", contact.phone), t.text_style()),
            Span::styled("  │  ", t.muted_style()),
            Span::styled(format!("WhatsApp {}", contact.whatsapp), t.text_style()),
            Span::styled("  │  ", t.muted_style()),
            Span::styled(format!("✉ {}", contact.email), t.text_style()),
            Span::styled("  │  ", t.muted_style()),
            Span::styled(format!("📍 {}", contact.address), t.muted_style()),
        ]);
        frame.render_widget(Paragraph::new(left), area);

        let cta = " Get Solutions ";
        let cta_width = cta.len() as u16;
        self.cta = Rect::new(area.right().saturating_sub(cta_width), area.y, cta_width, 1)
            .intersection(area);
        frame.render_widget(
            Paragraph::new(cta).style(t.badge_style().add_modifier(Modifier::BOLD)),
            self.cta,
        );
        let socials = format!("{} ", contact.socials.join(" · "));
        let socials_area = Rect::new(
            area.x,
            area.y,
            area.width.saturating_sub(cta_width),
            1,
        );
        frame.render_widget(
            Paragraph::new(socials)
                .style(t.muted_style())
                .alignment(Alignment::Right),
            socials_area,
        );
    }

    pub fn render(
        &mut self,
        frame: &mut Frame,
        area: Rect,
        route: Route,
        session: Option<&Session>,
    ) {
        let t = theme();
        let nav_area = if self.height() == 4 {
            let [contact, nav] =
                Layout::vertical([Constraint::Length(1), Constraint::Min(0)]).areas(area);
            self.render_contact_bar(frame, contact);
            nav
        } else {
            self.cta = Rect::default();
            area
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(t.border_focused_style())
            .padding(ratatui::widgets::Padding::horizontal(1));
        let inner = block.inner(nav_area);
        frame.render_widget(block, nav_area);

        let brand = Line::from(vec![
            Span::styled("ASSIMOX", t.title_style()),
            Span::styled(" appliance repairs", t.muted_style()),
        ]);
        let brand_width = if self.viewport.is_compact() { 8 } else { 27 };
        frame.render_widget(
            Paragraph::new(brand),
            Rect::new(inner.x, inner.y, brand_width.min(inner.width), 1),
        );

        self.nav_regions.clear();
        let account = match session {
            Some(session) => format!("👤 {} ▾", session.username),
            None => "Login / Sign Up ▾".to_string(),
        };
        let account_width = Span::raw(account.as_str()).width() as u16 + 2;

        if self.viewport.is_compact() {
            self.login_trigger = Rect::default();
            let label = "☰ Menu";
            let width = Span::raw(label).width() as u16;
            self.drawer_trigger =
                Rect::new(inner.right().saturating_sub(width), inner.y, width, 1);
            let style = if self.menus.is_open(HeaderMenu::Drawer) {
                t.highlight_style()
            } else {
                t.emphasis_style()
            };
            frame.render_widget(Paragraph::new(label).style(style), self.drawer_trigger);
        } else {
            self.drawer_trigger = Rect::default();
            let mut x = inner.x + brand_width + 2;
            for link in Route::ALL {
                let label = format!(" {} ", link.label());
                let width = label.len() as u16;
                if x + width >= inner.right().saturating_sub(account_width) {
                    break;
                }
                let rect = Rect::new(x, inner.y, width, 1);
                let style = if link == route {
                    t.highlight_style()
                } else {
                    t.text_style()
                };
                frame.render_widget(Paragraph::new(label).style(style), rect);
                self.nav_regions.push((rect, link));
                x += width + 1;
            }
            self.login_trigger = Rect::new(
                inner.right().saturating_sub(account_width),
                inner.y,
                account_width.min(inner.width),
                1,
            );
            let style = if self.menus.is_open(HeaderMenu::Login) {
                t.highlight_style()
            } else {
                t.emphasis_style()
            };
            frame.render_widget(
                Paragraph::new(format!(" {} ", account)).style(style),
                self.login_trigger,
            );
        }
    }

    /// Draw the open dropdown or drawer over the page.
    pub fn render_overlays(&mut self, frame: &mut Frame, area: Rect) {
        let t = theme();
        self.item_regions.clear();
        let items = self.open_items();
        if items.is_empty() {
            self.menus.set_regions(HeaderMenu::Login, None, None);
            self.menus.set_regions(HeaderMenu::Drawer, None, None);
            return;
        }

        let height = items.len() as u16 + 2;
        let (menu, panel, title, trigger) = if self.menus.is_open(HeaderMenu::Drawer) {
            let width = DRAWER_WIDTH.min(area.width);
            let panel = Rect::new(area.right().saturating_sub(width), area.y, width, area.height);
            (HeaderMenu::Drawer, panel, " Menu ", self.drawer_trigger)
        } else {
            let width = DROPDOWN_WIDTH.min(area.width);
            let x = self
                .login_trigger
                .right()
                .saturating_sub(width)
                .max(area.x);
            let y = self.login_trigger.bottom() + 1;
            let panel = Rect::new(x, y, width, height).intersection(area);
            (HeaderMenu::Login, panel, " Account ", self.login_trigger)
        };
        self.menus.set_regions(menu, Some(panel), Some(trigger));

        frame.render_widget(Clear, panel);
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(t.border_focused_style())
            .title(title)
            .title_style(t.title_style())
            .style(t.background_style());
        let inner = block.inner(panel);
        frame.render_widget(block, panel);

        for (index, item) in items.into_iter().enumerate() {
            let y = inner.y + index as u16;
            if y >= inner.bottom() {
                break;
            }
            let rect = Rect::new(inner.x, y, inner.width, 1);
            let style = if index == self.cursor {
                t.highlight_style()
            } else {
                t.text_style()
            };
            let prefix = if index == self.cursor { "› " } else { "  " };
            frame.render_widget(
                Paragraph::new(format!("{}{}", prefix, item.label())).style(style),
                rect,
            );
            self.item_regions.push((rect, item));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn click(column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    fn draw(header: &mut Header, width: u16) {
        let mut terminal = Terminal::new(TestBackend::new(width, 30)).unwrap();
        terminal
            .draw(|frame| {
                let area = frame.area();
                let top = Rect::new(0, 0, area.width, header.height());
                header.render(frame, top, Route::Home, None);
                header.render_overlays(frame, area);
            })
            .unwrap();
    }

    #[test]
    fn test_menus_are_mutually_exclusive() {
        let mut header = Header::new();
        header.handle_action(Action::ToggleLoginMenu);
        assert!(header.is_open(HeaderMenu::Login));
        header.handle_action(Action::ToggleDrawer);
        assert!(header.is_open(HeaderMenu::Drawer));
        assert!(!header.is_open(HeaderMenu::Login));
    }

    #[test]
    fn test_keyboard_selects_login_items() {
        let mut header = Header::new();
        assert_eq!(header.handle_action(Action::Confirm), ComponentAction::None);
        header.handle_action(Action::ToggleLoginMenu);
        header.handle_action(Action::MoveDown);
        assert_eq!(
            header.handle_action(Action::Confirm),
            ComponentAction::OpenAuth(AuthMode::Register)
        );
        assert!(!header.any_open());
    }

    #[test]
    fn test_drawer_lists_routes_then_auth_items() {
        let mut header = Header::new();
        header.toggle(HeaderMenu::Drawer);
        let items = header.open_items();
        assert_eq!(items.len(), 7);
        assert_eq!(items[0], MenuItem::Route(Route::Home));
        assert_eq!(items[6], MenuItem::ForgotPassword);
        header.handle_action(Action::MoveUp);
        assert!(matches!(
            header.handle_action(Action::Confirm),
            ComponentAction::Notify(_)
        ));
    }

    #[test]
    fn test_click_outside_closes_dropdown() {
        let mut header = Header::new();
        header.viewport = Viewport::new(120, 30);
        header.toggle(HeaderMenu::Login);
        draw(&mut header, 120);
        assert_eq!(header.item_regions.len(), 3);
        assert_eq!(header.handle_mouse(click(1, 25)), ComponentAction::Update);
        assert!(!header.any_open());
    }

    #[test]
    fn test_click_dropdown_item_and_nav_link() {
        let mut header = Header::new();
        header.viewport = Viewport::new(120, 30);
        draw(&mut header, 120);
        let trigger = header.login_trigger;
        header.handle_mouse(click(trigger.x + 1, trigger.y));
        assert!(header.is_open(HeaderMenu::Login));
        draw(&mut header, 120);
        let (rect, item) = header.item_regions[0];
        assert_eq!(item, MenuItem::SignIn);
        assert_eq!(
            header.handle_mouse(click(rect.x + 2, rect.y)),
            ComponentAction::OpenAuth(AuthMode::Login)
        );

        let (link, route) = header
            .nav_regions
            .iter()
            .copied()
            .find(|(_, r)| *r == Route::Gallery)
            .unwrap();
        assert_eq!(
            header.handle_mouse(click(link.x, link.y)),
            ComponentAction::Navigate(route)
        );
    }

    #[test]
    fn test_contact_bar_call_to_action() {
        let mut header = Header::new();
        header.viewport = Viewport::new(160, 30);
        draw(&mut header, 160);
        let cta = header.cta;
        assert_eq!(cta.y, 0);
        assert_eq!(
            header.handle_mouse(click(cta.x + 1, cta.y)),
            ComponentAction::Navigate(Route::Services)
        );
    }

    #[test]
    fn test_shrinks_when_scrolled_or_compact() {
        let mut header = Header::new();
        header.viewport = Viewport::new(120, 30);
        assert_eq!(header.height(), 4);
        header.viewport.scroll = 10;
        assert_eq!(header.height(), 3);
        header.viewport = Viewport::new(60, 30);
        assert_eq!(header.height(), 3);
    }
}
