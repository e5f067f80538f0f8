//! Widget for rendering a [`TextInput`] as a bordered form field.

use crate::styles::theme;
use crate::utils::text_input::TextInput;
use ratatui::prelude::*;
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

/// Bordered, titled field with placeholder text and password masking.
///
/// # Example
/// ```
/// use assimox::widgets::TextInputWidget;
/// use assimox::utils::TextInput;
///
/// let input = TextInput::with_text("admin");
/// let widget = TextInputWidget::new(&input)
///     .title("Username")
///     .placeholder("Enter your username")
///     .focused(true);
/// // frame.render_text_input_widget(widget, area);
/// ```
pub struct TextInputWidget<'a> {
    input: &'a TextInput,
    title: Option<&'a str>,
    placeholder: Option<&'a str>,
    focused: bool,
    disabled: bool,
}

impl<'a> TextInputWidget<'a> {
    pub fn new(input: &'a TextInput) -> Self {
        Self {
            input,
            title: None,
            placeholder: None,
            focused: false,
            disabled: false,
        }
    }

    pub fn title(mut self, title: &'a str) -> Self {
        self.title = Some(title);
        self
    }

    pub fn placeholder(mut self, placeholder: &'a str) -> Self {
        self.placeholder = Some(placeholder);
        self
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    /// Disabled fields are dimmed and never show a cursor.
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    fn display_text(&self) -> String {
        if self.input.text().is_empty() {
            self.placeholder.unwrap_or("").to_string()
        } else {
            self.input.display_text()
        }
    }

    fn text_style(&self) -> Style {
        let t = theme();
        if self.disabled || self.input.text().is_empty() {
            t.muted_style()
        } else {
            t.text_style()
        }
    }

    fn block(&self) -> Block<'a> {
        let t = theme();
        let border_style = if self.focused && !self.disabled {
            t.border_focused_style()
        } else {
            t.border_style()
        };
        let mut block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(border_style);
        if let Some(title) = self.title {
            block = block.title(format!(" {} ", title));
        }
        block
    }

    /// Cursor cell inside `area`, when the field is focused.
    pub fn cursor_position(&self, area: Rect) -> Option<Position> {
        if !self.focused || self.disabled {
            return None;
        }
        let inner = self.block().inner(area);
        let offset = self.input.cursor().min(usize::from(inner.width.saturating_sub(1)));
        Some(Position::new(inner.x + offset as u16, inner.y))
    }
}

impl Widget for TextInputWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Paragraph::new(self.display_text())
            .block(self.block())
            .style(self.text_style())
            .render(area, buf);
    }
}

/// Renders a [`TextInputWidget`] and places the terminal cursor in it.
///
/// The `Widget` trait has no access to the frame's cursor, hence the
/// extension.
pub trait TextInputWidgetExt {
    fn render_text_input_widget(&mut self, widget: TextInputWidget, area: Rect);
}

impl TextInputWidgetExt for Frame<'_> {
    fn render_text_input_widget(&mut self, widget: TextInputWidget, area: Rect) {
        let cursor = widget.cursor_position(area);
        self.render_widget(widget, area);
        if let Some(position) = cursor {
            self.set_cursor_position(position);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placeholder_when_empty() {
        let input = TextInput::new();
        let widget = TextInputWidget::new(&input).placeholder("Enter your email");
        assert_eq!(widget.display_text(), "Enter your email");
    }

    #[test]
    fn test_masked_input_never_shows_text() {
        let mut input = TextInput::masked();
        input.set_text("hunter2");
        let widget = TextInputWidget::new(&input);
        assert_eq!(widget.display_text(), "•••••••");
    }

    #[test]
    fn test_cursor_only_when_focused() {
        let input = TextInput::with_text("abc");
        let area = Rect::new(0, 0, 20, 3);
        assert_eq!(TextInputWidget::new(&input).cursor_position(area), None);
        assert_eq!(
            TextInputWidget::new(&input).focused(true).cursor_position(area),
            Some(Position::new(4, 1))
        );
        assert_eq!(
            TextInputWidget::new(&input)
                .focused(true)
                .disabled(true)
                .cursor_position(area),
            None
        );
    }
}
