//! Admin login / registration card.
//!
//! Draws an [`AuthForm`] into the page and remembers where each field went
//! so clicks can move focus.

use crate::auth::{AuthForm, Field};
use crate::styles::theme;
use crate::utils::layout::hit;
use crate::widgets::TextInputWidget;
use ratatui::prelude::*;
use ratatui::widgets::{Block, BorderType, Borders, Paragraph, Widget, Wrap};

const CARD_WIDTH: u16 = 56;
const INPUT_HEIGHT: u16 = 3;

#[derive(Debug, Default)]
pub struct AuthFormView {
    regions: Vec<(Rect, Field)>,
    cursor: Option<Position>,
}

impl AuthFormView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rows needed for the form in its current mode.
    pub fn height(form: &AuthForm) -> u16 {
        let inputs = form.fields().iter().filter(|f| f.is_text()).count() as u16;
        // borders, subtitle + gap, inputs, error row, submit, gap, switch
        2 + 2 + inputs * INPUT_HEIGHT + 2 + 1 + 1 + 1
    }

    /// Field under a page position.
    pub fn field_at(&self, column: u16, row: u16) -> Option<Field> {
        self.regions
            .iter()
            .find(|(rect, _)| hit(*rect, column, row))
            .map(|&(_, field)| field)
    }

    /// Page position of the text cursor, when a text field is focused.
    pub fn cursor(&self) -> Option<Position> {
        self.cursor
    }

    fn placeholder(field: Field) -> &'static str {
        match field {
            Field::Username => "Enter your username",
            Field::Email => "Enter your email",
            Field::Password => "Enter your password",
            Field::ConfirmPassword => "Re-enter your password",
            Field::Submit | Field::SwitchMode => "",
        }
    }

    pub fn render(&mut self, buf: &mut Buffer, area: Rect, form: &AuthForm, focused: bool) {
        let t = theme();
        self.regions.clear();
        self.cursor = None;

        let width = CARD_WIDTH.min(area.width);
        let card = Rect::new(
            area.x + (area.width - width) / 2,
            area.y,
            width,
            Self::height(form).min(area.height),
        );
        let mode = form.mode();
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(if focused {
                t.border_focused_style()
            } else {
                t.border_style()
            })
            .title(format!(" {} ", mode.title()))
            .title_style(t.title_style())
            .title_alignment(Alignment::Center)
            .padding(ratatui::widgets::Padding::horizontal(2));
        let inner = block.inner(card);
        block.render(card, buf);

        let mut y = inner.y;
        Paragraph::new("Manage services, gallery and bookings")
            .style(t.muted_style())
            .alignment(Alignment::Center)
            .render(Rect::new(inner.x, y, inner.width, 1), buf);
        y += 2;

        let in_flight = form.is_in_flight();
        for field in form.fields() {
            let Some(input) = form.input(field) else {
                continue;
            };
            let rect = Rect::new(inner.x, y, inner.width, INPUT_HEIGHT);
            let widget = TextInputWidget::new(input)
                .title(field.label())
                .placeholder(Self::placeholder(field))
                .focused(focused && form.focus() == field)
                .disabled(in_flight);
            if let Some(position) = widget.cursor_position(rect) {
                self.cursor = Some(position);
            }
            widget.render(rect, buf);
            self.regions.push((rect, field));
            y += INPUT_HEIGHT;
        }

        let error_area = Rect::new(inner.x, y, inner.width, 2);
        if let Some(error) = form.error() {
            Paragraph::new(format!("✘ {}", error))
                .style(t.error_style())
                .wrap(Wrap { trim: true })
                .render(error_area, buf);
        }
        y += 2;

        let label = if in_flight {
            mode.busy_label()
        } else {
            mode.submit_label()
        };
        let submit = Rect::new(inner.x, y, inner.width, 1);
        let submit_style = if focused && form.focus() == Field::Submit {
            t.highlight_style()
        } else if in_flight {
            t.muted_style()
        } else {
            t.emphasis_style().add_modifier(Modifier::BOLD)
        };
        Paragraph::new(format!("[ {} ]", label))
            .style(submit_style)
            .alignment(Alignment::Center)
            .render(submit, buf);
        self.regions.push((submit, Field::Submit));
        y += 2;

        let switch = Rect::new(inner.x, y, inner.width, 1);
        let switch_style = if focused && form.focus() == Field::SwitchMode {
            t.highlight_style()
        } else {
            t.text_style().add_modifier(Modifier::UNDERLINED)
        };
        Paragraph::new(mode.switch_prompt())
            .style(switch_style)
            .alignment(Alignment::Center)
            .render(switch, buf);
        self.regions.push((switch, Field::SwitchMode));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::AuthMode;

    fn render(form: &AuthForm) -> (AuthFormView, Buffer) {
        let area = Rect::new(0, 0, 80, AuthFormView::height(form));
        let mut buf = Buffer::empty(area);
        let mut view = AuthFormView::new();
        view.render(&mut buf, area, form, true);
        (view, buf)
    }

    fn text(buf: &Buffer) -> String {
        buf.content.iter().map(|c| c.symbol()).collect()
    }

    #[test]
    fn test_register_mode_shows_extra_fields() {
        let login = AuthForm::new(AuthMode::Login);
        let register = AuthForm::new(AuthMode::Register);
        assert_eq!(
            AuthFormView::height(&register),
            AuthFormView::height(&login) + 2 * INPUT_HEIGHT
        );
        let (_, buf) = render(&register);
        let text = text(&buf);
        assert!(text.contains("Confirm Password"));
        assert!(text.contains("Already have an account? Login"));
    }

    #[test]
    fn test_click_regions_map_to_fields() {
        let form = AuthForm::new(AuthMode::Login);
        let (view, _) = render(&form);
        let (password, _) = view
            .regions
            .iter()
            .copied()
            .find(|(_, f)| *f == Field::Password)
            .unwrap();
        assert_eq!(view.field_at(password.x + 2, password.y + 1), Some(Field::Password));
        assert_eq!(view.field_at(0, 0), None);
    }

    #[test]
    fn test_cursor_follows_focused_field() {
        let mut form = AuthForm::new(AuthMode::Login);
        form.username.set_text("ad");
        let (view, _) = render(&form);
        let cursor = view.cursor().unwrap();
        let (username, _) = view.regions[0];
        assert_eq!(cursor.y, username.y + 1);
        assert_eq!(cursor.x, username.x + 1 + 2);

        form.set_focus(Field::Submit);
        let (view, _) = render(&form);
        assert!(view.cursor().is_none());
    }

    #[test]
    fn test_in_flight_shows_busy_label_and_error_row() {
        let mut form = AuthForm::new(AuthMode::Login);
        form.submit();
        let (_, buf) = render(&form);
        assert!(text(&buf).contains("Username is required"));

        form.username.set_text("admin");
        form.password.set_text("pw");
        form.submit();
        let (_, buf) = render(&form);
        assert!(text(&buf).contains("Logging in..."));
    }
}
