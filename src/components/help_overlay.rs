//! Help Overlay Component
//!
//! Displays current keybindings when user presses '?' key.

use crate::keymap::{Keymap, KeymapPreset};
use crate::styles::theme;
use crate::utils::layout::center_fixed;
use anyhow::Result;
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// Renders the help overlay showing current keybindings
pub struct HelpOverlay;

impl HelpOverlay {
    /// Lines listing every binding, grouped by action category.
    pub fn binding_lines(keymap: &Keymap) -> Vec<Line<'static>> {
        let t = theme();
        let mut bindings = keymap.all_bindings();
        // stable sort keeps preset order within a category
        bindings.sort_by_key(|b| b.action.category());

        let mut lines = Vec::new();
        let mut current_category = "";
        for binding in &bindings {
            let category = binding.action.category();
            if category != current_category {
                if !current_category.is_empty() {
                    lines.push(Line::default());
                }
                lines.push(Line::from(Span::styled(
                    format!("  {}", category),
                    Style::default().fg(t.secondary).add_modifier(Modifier::BOLD),
                )));
                current_category = category;
            }
            lines.push(Line::from(vec![
                Span::styled(format!("    {:14}", binding.display()), t.emphasis_style()),
                Span::styled(binding.get_description().to_string(), t.text_style()),
            ]));
        }
        lines
    }

    /// Render the help overlay in the center of the screen
    pub fn render(frame: &mut Frame, area: Rect, keymap: &Keymap, config_path: &str) -> Result<()> {
        let t = theme();
        let width = (area.width as f32 * 0.9).min(90.0) as u16;
        let height = (area.height as f32 * 0.9).min(50.0) as u16;
        let popup = center_fixed(area, width, height);
        frame.render_widget(Clear, popup);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title(format!(" Keyboard Shortcuts - {} Preset ", keymap.preset.name()))
            .title_alignment(Alignment::Center)
            .border_style(t.border_focused_style())
            .style(t.background_style());
        let inner = block.inner(popup);
        frame.render_widget(block, popup);

        let [preset_area, bindings_area, footer_area] = Layout::vertical([
            Constraint::Length(2),
            Constraint::Min(3),
            Constraint::Length(2),
        ])
        .areas(inner);

        let mut preset_spans = vec![Span::styled("Presets: ", t.muted_style())];
        for preset in [KeymapPreset::Standard, KeymapPreset::Vim] {
            let style = if preset == keymap.preset {
                t.title_style()
            } else {
                t.muted_style()
            };
            let label = if preset == keymap.preset {
                format!("[{}] ", preset.name())
            } else {
                format!("{} ", preset.name())
            };
            preset_spans.push(Span::styled(label, style));
        }
        frame.render_widget(Paragraph::new(Line::from(preset_spans)), preset_area);

        frame.render_widget(
            Paragraph::new(Self::binding_lines(keymap)).wrap(Wrap { trim: false }),
            bindings_area,
        );

        let footer = format!(
            "Edit keybindings in: {}\nPress any key to close",
            config_path
        );
        frame.render_widget(
            Paragraph::new(footer)
                .style(t.muted_style())
                .alignment(Alignment::Center),
            footer_area,
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keymap::{Action, KeyBinding};

    fn flatten(lines: &[Line]) -> Vec<String> {
        lines
            .iter()
            .map(|l| l.spans.iter().map(|s| s.content.as_ref()).collect())
            .collect()
    }

    #[test]
    fn test_bindings_grouped_once_per_category() {
        let lines = flatten(&HelpOverlay::binding_lines(&Keymap::default()));
        let headings = lines.iter().filter(|l| l.trim() == "Global").count();
        assert_eq!(headings, 1);
        assert!(lines.iter().any(|l| l.trim() == "Text Editing"));
    }

    #[test]
    fn test_overrides_are_listed() {
        let keymap = Keymap {
            preset: KeymapPreset::Standard,
            overrides: vec![KeyBinding::new("f1", Action::Help)],
        };
        let lines = flatten(&HelpOverlay::binding_lines(&keymap));
        assert!(lines.iter().any(|l| l.contains("F1") && l.contains("Show help")));
    }
}
