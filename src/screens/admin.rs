//! Admin page: the login / registration card.
//!
//! The screen only validates and hands out requests. The app sends them and
//! feeds the outcome back through [`AdminScreen::settle`].

use crate::auth::{AuthError, AuthForm, AuthMode, AuthResponse, Field, Settled, Submission};
use crate::components::auth_form::AuthFormView;
use crate::components::page::stack;
use crate::components::{Footer, ScrollPage};
use crate::keymap::{Action, Keymap};
use crate::router::Route;
use crate::screens::screen_trait::{RenderContext, Screen, ScreenAction, ScreenContext};
use crate::utils::TextInput;
use crate::widgets::Toast;
use anyhow::Result;
use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::Rect;
use ratatui::Frame;
use tracing::{debug, info};

const TOP_GAP: u16 = 1;

#[derive(Debug, Default)]
pub struct AdminScreen {
    form: AuthForm,
    view: AuthFormView,
    page: ScrollPage,
    footer: Footer,
}

impl AdminScreen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn form(&self) -> &AuthForm {
        &self.form
    }

    pub fn set_mode(&mut self, mode: AuthMode) {
        if self.form.is_in_flight() {
            debug!(?mode, "Mode change ignored while a request is in flight");
            return;
        }
        self.form.set_mode(mode);
    }

    /// Apply the result of a request handed out as [`ScreenAction::SubmitAuth`].
    pub fn settle(&mut self, result: Result<AuthResponse, AuthError>) -> Settled {
        let settled = self.form.settle(result);
        info!(mode = ?self.form.mode(), outcome = ?outcome_label(&settled), "Auth request settled");
        settled
    }

    fn submit(&mut self) -> ScreenAction {
        match self.form.submit() {
            Submission::InFlight => ScreenAction::None,
            Submission::Invalid(err) => ScreenAction::Toast(Toast::error(err.to_string())),
            Submission::Ready(mode, request) => {
                info!(?mode, username = %request.username, "Submitting admin request");
                ScreenAction::SubmitAuth(mode, request)
            }
        }
    }

    fn activate(&mut self, field: Field) -> ScreenAction {
        match field {
            Field::SwitchMode => {
                let mode = self.form.mode().toggled();
                self.set_mode(mode);
                ScreenAction::Refresh
            }
            _ => self.submit(),
        }
    }

    fn handle_key(&mut self, key: KeyEvent, keymap: &Keymap) -> ScreenAction {
        let typing = self.form.focus().is_text();
        let typed = matches!(key.code, KeyCode::Char(_))
            && !key
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT);
        if typing && typed {
            if self.form.is_in_flight() {
                return ScreenAction::None;
            }
            if let Some(input) = self.form.focused_input() {
                input.handle_key(key.code);
            }
            return ScreenAction::Refresh;
        }

        let action = keymap.get_action(key.code, key.modifiers).filter(|a| {
            !typing
                || TextInput::is_action_allowed_when_focused(a)
                || matches!(a, Action::MoveUp | Action::MoveDown)
        });
        match action {
            Some(Action::NextTab | Action::MoveDown) => {
                self.form.focus_next();
                ScreenAction::Refresh
            }
            Some(Action::PrevTab | Action::MoveUp) => {
                self.form.focus_prev();
                ScreenAction::Refresh
            }
            Some(Action::SwitchAuthMode) => {
                let mode = self.form.mode().toggled();
                self.set_mode(mode);
                ScreenAction::Refresh
            }
            Some(Action::Confirm) => self.activate(self.form.focus()),
            Some(Action::Cancel) => ScreenAction::Navigate(Route::Home),
            action if typing => {
                if self.form.is_in_flight() {
                    return ScreenAction::None;
                }
                let handled = self
                    .form
                    .focused_input()
                    .is_some_and(|input| input.handle_key_with_action(key.code, action));
                if handled {
                    ScreenAction::Refresh
                } else {
                    ScreenAction::None
                }
            }
            Some(action) => match self.page.handle_scroll(action) {
                Some(true) => ScreenAction::Refresh,
                _ => ScreenAction::None,
            },
            None => ScreenAction::None,
        }
    }

    fn handle_mouse(&mut self, mouse: MouseEvent) -> ScreenAction {
        if let Some(changed) = self.page.handle_wheel(mouse) {
            return if changed {
                ScreenAction::Refresh
            } else {
                ScreenAction::None
            };
        }
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return ScreenAction::None;
        }
        let mouse = self.page.translate(mouse);
        match self.view.field_at(mouse.column, mouse.row) {
            Some(field @ (Field::Submit | Field::SwitchMode)) => {
                self.form.set_focus(field);
                self.activate(field)
            }
            Some(field) => {
                self.form.set_focus(field);
                ScreenAction::Refresh
            }
            None => ScreenAction::None,
        }
    }
}

fn outcome_label(settled: &Settled) -> &'static str {
    match settled {
        Settled::LoggedIn { .. } => "logged_in",
        Settled::Registered => "registered",
        Settled::Failed(_) => "failed",
    }
}

impl Screen for AdminScreen {
    fn render(&mut self, frame: &mut Frame, area: Rect, _ctx: &RenderContext) -> Result<()> {
        let width = ScrollPage::content_width(area);
        let heights = [
            TOP_GAP,
            AuthFormView::height(&self.form),
            TOP_GAP,
            self.footer.height(width),
        ];
        let total = heights.iter().sum();
        let rects = stack(Rect::new(0, 0, width, total), &heights);

        let form = &self.form;
        let view = &mut self.view;
        let footer = &self.footer;
        self.page.render(frame.buffer_mut(), area, total, |buf, _| {
            view.render(buf, rects[1], form, true);
            footer.render(buf, rects[3])
        })?;
        self.page.publish();

        if let Some(position) = self.view.cursor().and_then(|p| self.page.to_screen(p)) {
            frame.set_cursor_position(position);
        }
        Ok(())
    }

    fn handle_event(&mut self, event: Event, ctx: &ScreenContext) -> Result<ScreenAction> {
        Ok(match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key(key, ctx.keymap()),
            Event::Mouse(mouse) => self.handle_mouse(mouse),
            _ => ScreenAction::None,
        })
    }

    fn is_input_focused(&self) -> bool {
        self.form.focus().is_text()
    }

    fn footer_hints(&self, keymap: &Keymap) -> String {
        format!(
            "{}: Next field | {}: {} | {}: Switch mode | {}: Back",
            keymap.get_key_display_for_action(Action::NextTab),
            keymap.get_key_display_for_action(Action::Confirm),
            self.form.mode().submit_label(),
            keymap.get_key_display_for_action(Action::SwitchAuthMode),
            keymap.get_key_display_for_action(Action::Cancel),
        )
    }

    fn on_enter(&mut self, _ctx: &ScreenContext) -> Result<()> {
        self.page.scroll_to_top();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::keymap::KeymapPreset;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;
    use std::path::PathBuf;

    fn press(admin: &mut AdminScreen, config: &Config, code: KeyCode) -> ScreenAction {
        let path = PathBuf::from("config.toml");
        let ctx = ScreenContext::new(config, &path);
        admin
            .handle_event(Event::Key(KeyEvent::new(code, KeyModifiers::NONE)), &ctx)
            .unwrap()
    }

    fn type_text(admin: &mut AdminScreen, config: &Config, text: &str) {
        for c in text.chars() {
            press(admin, config, KeyCode::Char(c));
        }
    }

    #[test]
    fn test_vim_keys_are_typed_into_fields() {
        let mut config = Config::default();
        config.keymap.preset = KeymapPreset::Vim;
        let mut admin = AdminScreen::new();
        type_text(&mut admin, &config, "hjkl");
        assert_eq!(admin.form().username.text(), "hjkl");
        assert!(admin.is_input_focused());
    }

    #[test]
    fn test_empty_submit_raises_error_toast() {
        let config = Config::default();
        let mut admin = AdminScreen::new();
        match press(&mut admin, &config, KeyCode::Enter) {
            ScreenAction::Toast(toast) => assert_eq!(toast.message, "Username is required"),
            other => panic!("unexpected {:?}", other),
        }
        assert!(!admin.form().is_in_flight());
    }

    #[test]
    fn test_login_round_trip() {
        let config = Config::default();
        let mut admin = AdminScreen::new();
        type_text(&mut admin, &config, "admin");
        press(&mut admin, &config, KeyCode::Tab);
        type_text(&mut admin, &config, "secret");
        let ScreenAction::SubmitAuth(mode, request) = press(&mut admin, &config, KeyCode::Enter)
        else {
            panic!("expected a request");
        };
        assert_eq!(mode, AuthMode::Login);
        assert_eq!(request.username, "admin");
        assert!(request.email.is_empty());

        // A second submit while waiting does nothing
        assert!(matches!(
            press(&mut admin, &config, KeyCode::Enter),
            ScreenAction::None
        ));
        admin.set_mode(AuthMode::Register);
        assert_eq!(admin.form().mode(), AuthMode::Login);

        let settled = admin.settle(Ok(AuthResponse {
            token: Some("tok-123456789".to_string()),
            message: None,
        }));
        assert_eq!(
            settled,
            Settled::LoggedIn {
                username: "admin".to_string(),
                token: "tok-123456789".to_string(),
            }
        );
        assert!(!admin.form().is_in_flight());
    }

    #[test]
    fn test_switch_mode_and_escape() {
        let config = Config::default();
        let mut admin = AdminScreen::new();
        let path = PathBuf::from("config.toml");
        let ctx = ScreenContext::new(&config, &path);
        admin
            .handle_event(
                Event::Key(KeyEvent::new(KeyCode::Char('t'), KeyModifiers::CONTROL)),
                &ctx,
            )
            .unwrap();
        assert_eq!(admin.form().mode(), AuthMode::Register);
        assert!(matches!(
            press(&mut admin, &config, KeyCode::Esc),
            ScreenAction::Navigate(Route::Home)
        ));
    }

    #[test]
    fn test_cursor_is_placed_in_focused_field() {
        let config = Config::default();
        let mut admin = AdminScreen::new();
        let mut terminal = Terminal::new(TestBackend::new(100, 40)).unwrap();
        terminal
            .draw(|frame| {
                let area = frame.area();
                admin
                    .render(frame, area, &RenderContext::new(&config))
                    .unwrap();
            })
            .unwrap();
        let text: String = terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(|c| c.symbol())
            .collect();
        assert!(text.contains("Admin Login"));
        assert!(admin.view.cursor().is_some());
    }
}
