//! Page footer: the brochure footer drawn at the end of every page, plus the
//! key-hint bar pinned to the bottom of the terminal.

use crate::catalog::fixtures::FOOTER;
use crate::catalog::FooterContent;
use crate::styles::theme;
use crate::utils::layout::columns;
use anyhow::Result;
use ratatui::prelude::*;
use ratatui::widgets::{Block, BorderType, Borders, Paragraph, Widget, Wrap};

/// Tallest column: heading, blank line, five entries
const COLUMN_HEIGHT: u16 = 7;

#[derive(Debug, Clone)]
pub struct Footer {
    content: FooterContent,
}

impl Default for Footer {
    fn default() -> Self {
        Self::new(FOOTER)
    }
}

impl Footer {
    pub fn new(content: FooterContent) -> Self {
        Self { content }
    }

    /// Four columns side by side, or stacked below [`COMPACT_WIDTH`].
    ///
    /// [`COMPACT_WIDTH`]: crate::state::signal::COMPACT_WIDTH
    fn stacked(width: u16) -> bool {
        width < crate::state::signal::COMPACT_WIDTH
    }

    pub fn height(&self, width: u16) -> u16 {
        let body = if Self::stacked(width) {
            COLUMN_HEIGHT * 4
        } else {
            COLUMN_HEIGHT
        };
        // top border + body + copyright row
        1 + body + 1
    }

    fn heading(text: &str) -> Line<'static> {
        Line::from(Span::styled(text.to_string(), theme().title_style()))
    }

    fn column_lines(&self) -> [Vec<Line<'static>>; 4] {
        let t = theme();
        let c = &self.content;
        let brand = vec![
            Line::from(vec![
                Span::styled(c.brand, t.title_style()),
                Span::raw(" "),
                Span::styled(c.tagline, t.muted_style()),
            ]),
            Line::default(),
            Line::from(Span::styled(format!("📍 {}", c.address), t.text_style())),
            Line::from(Span::styled(format!("✉ {}", c.email), t.text_style())),
            Line::from(Span::styled(format!("☎ {}", c.phone), t.text_style())),
        ];

        let mut areas = vec![Self::heading("Service Areas"), Line::default()];
        areas.extend(c.service_areas.iter().map(|area| {
            let style = if area.highlighted {
                t.emphasis_style()
            } else {
                t.text_style()
            };
            Line::from(Span::styled(format!("› {}", area.name), style))
        }));

        let mut services = vec![Self::heading("Our Services"), Line::default()];
        services.extend(
            c.services
                .iter()
                .map(|s| Line::from(Span::styled(format!("› {}", s), t.text_style()))),
        );

        let mut posts = vec![Self::heading("Recent Posts"), Line::default()];
        for post in c.recent_posts {
            posts.push(Line::from(Span::styled(post.title, t.text_style())));
            posts.push(Line::from(Span::styled(post.date, t.muted_style())));
        }
        [brand, areas, services, posts]
    }

    pub fn render(&self, buf: &mut Buffer, area: Rect) -> Result<()> {
        let t = theme();
        let block = Block::default()
            .borders(Borders::TOP)
            .border_type(BorderType::Rounded)
            .border_style(t.border_style());
        let inner = block.inner(area);
        block.render(area, buf);

        let [body, copyright] =
            Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(inner);
        let cells = if Self::stacked(area.width) {
            Layout::vertical([Constraint::Length(COLUMN_HEIGHT); 4])
                .split(body)
                .to_vec()
        } else {
            columns(body, 4)
        };
        for (cell, lines) in cells.into_iter().zip(self.column_lines()) {
            Paragraph::new(lines)
                .wrap(Wrap { trim: true })
                .render(cell.inner(Margin::new(1, 0)), buf);
        }
        Paragraph::new(self.content.copyright)
            .style(t.muted_style())
            .alignment(Alignment::Center)
            .render(copyright, buf);
        Ok(())
    }

    /// Render the key-hint bar ("Label: keys | Label: keys").
    ///
    /// Returns the height used: one border row plus one text row.
    pub fn render_hints(frame: &mut Frame, area: Rect, text: &str) -> Result<u16> {
        let t = theme();
        let mut spans = Vec::new();
        for (i, part) in text.split(" | ").enumerate() {
            if i > 0 {
                spans.push(Span::styled(" | ", t.muted_style()));
            }
            match part.split_once(": ") {
                Some((keys, label)) => {
                    spans.push(Span::styled(
                        keys.to_string(),
                        t.emphasis_style().add_modifier(Modifier::BOLD),
                    ));
                    spans.push(Span::styled(format!(": {}", label), t.text_style()));
                }
                None => spans.push(Span::styled(part.to_string(), t.text_style())),
            }
        }

        let block = Block::default()
            .borders(Borders::TOP)
            .border_type(BorderType::Rounded)
            .border_style(t.border_focused_style())
            .style(t.background_style());
        let inner = block.inner(area);
        frame.render_widget(block, area);
        frame.render_widget(
            Paragraph::new(Line::from(spans)).alignment(Alignment::Center),
            inner,
        );
        Ok(2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn render(width: u16) -> String {
        let footer = Footer::default();
        let area = Rect::new(0, 0, width, footer.height(width));
        let mut buf = Buffer::empty(area);
        footer.render(&mut buf, area).unwrap();
        buf.content.iter().map(|c| c.symbol()).collect()
    }

    #[test]
    fn test_stacks_on_narrow_widths() {
        let footer = Footer::default();
        assert_eq!(footer.height(120), 9);
        assert_eq!(footer.height(60), 30);
    }

    #[test]
    fn test_renders_every_column() {
        let text = render(160);
        for heading in ["Assimox", "Service Areas", "Our Services", "Recent Posts"] {
            assert!(text.contains(heading), "missing {heading}");
        }
        assert!(text.contains("All rights reserved"));
        assert!(render(60).contains("Recent Posts"));
    }

    #[test]
    fn test_hint_bar_height() {
        let mut terminal = Terminal::new(TestBackend::new(80, 2)).unwrap();
        let mut used = 0;
        terminal
            .draw(|frame| {
                used = Footer::render_hints(frame, frame.area(), "q: Quit | ?: Help").unwrap();
            })
            .unwrap();
        assert_eq!(used, 2);
        let text: String = terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(|c| c.symbol())
            .collect();
        assert!(text.contains("Quit"));
    }
}
