use crate::styles::theme;
use anyhow::Result;
use ratatui::prelude::*;
use ratatui::widgets::{Block, BorderType, Borders, Padding, Paragraph, Widget, Wrap};

/// Bordered box for empty states and status messages
pub struct MessageBox;

impl MessageBox {
    /// Render a message box with optional title and border color.
    ///
    /// Messages that read like failures get the error color and title.
    pub fn render(
        buf: &mut Buffer,
        area: Rect,
        message: &str,
        title: Option<&str>,
        color: Option<Color>,
    ) -> Result<()> {
        let t = theme();
        let lower = message.to_lowercase();
        let is_error = lower.contains("error") || lower.contains("fail");

        let (title, color) = if is_error {
            ("Error", t.error)
        } else {
            (title.unwrap_or("Message"), color.unwrap_or(t.primary))
        };

        // Small areas drop the vertical padding so the text still fits
        let padding = if area.height >= 7 {
            Padding::new(2, 2, 1, 1)
        } else {
            Padding::horizontal(2)
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title(format!(" {} ", title))
            .title_alignment(Alignment::Center)
            .border_style(Style::default().fg(color))
            .padding(padding);

        Paragraph::new(message)
            .style(t.muted_style())
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(block)
            .render(area, buf);
        Ok(())
    }

    pub fn render_status(buf: &mut Buffer, area: Rect, message: &str) -> Result<()> {
        Self::render(buf, area, message, Some("Status"), None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(buf: &Buffer) -> String {
        buf.content.iter().map(|c| c.symbol()).collect()
    }

    #[test]
    fn test_renders_title_and_message() {
        let area = Rect::new(0, 0, 40, 5);
        let mut buf = Buffer::empty(area);
        MessageBox::render(&mut buf, area, "No results", Some("Services"), None).unwrap();
        let text = text(&buf);
        assert!(text.contains("Services"));
        assert!(text.contains("No results"));
    }

    #[test]
    fn test_failure_text_switches_to_error_title() {
        let area = Rect::new(0, 0, 40, 5);
        let mut buf = Buffer::empty(area);
        MessageBox::render_status(&mut buf, area, "Request failed").unwrap();
        assert!(text(&buf).contains("Error"));
    }
}
