//! The [`AssimoxLogo`] widget renders the brand mark.
use crate::styles::theme;
use indoc::indoc;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::text::{Line, Text};
use ratatui::widgets::Widget;

/// A widget that renders the Assimox wordmark, optionally with the
/// "APPLIANCES REPAIRS" tagline underneath.
///
/// # Examples
///
/// ```rust
/// use assimox::widgets::AssimoxLogo;
///
/// # fn draw(frame: &mut ratatui::Frame) {
/// frame.render_widget(AssimoxLogo::regular().with_tagline(), frame.area());
/// # }
/// ```
///
/// Renders:
///
/// ```text
/// ┏━┓┏━┓┏━┓╻┏┳┓┏━┓╻ ╻
/// ┣━┫┗━┓┗━┓┃┃┃┃┃ ┃ ╋
/// ╹ ╹┗━┛┗━┛╹╹ ╹┗━┛╹ ╹
/// APPLIANCES REPAIRS
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct AssimoxLogo {
    size: Size,
    tagline: bool,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Size {
    /// One line of plain text, for narrow terminals
    #[default]
    Small,
    /// Three lines of box drawing characters
    Regular,
}

pub const TAGLINE: &str = "APPLIANCES REPAIRS";

impl AssimoxLogo {
    pub const fn new(size: Size) -> Self {
        Self {
            size,
            tagline: false,
        }
    }

    pub const fn small() -> Self {
        Self::new(Size::Small)
    }

    pub const fn regular() -> Self {
        Self::new(Size::Regular)
    }

    pub const fn with_tagline(mut self) -> Self {
        self.tagline = true;
        self
    }

    /// Width in terminal cells
    pub fn width(&self) -> u16 {
        let tagline = if self.tagline { TAGLINE.len() as u16 } else { 0 };
        self.size.width().max(tagline)
    }

    /// Height in lines
    pub const fn height(&self) -> u16 {
        self.size.height() + if self.tagline { 1 } else { 0 }
    }
}

impl Widget for AssimoxLogo {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let t = theme();
        let mut text = Text::raw(self.size.as_str()).style(t.title_style());
        if self.tagline {
            text.push_line(Line::styled(TAGLINE, t.muted_style()));
        }
        text.render(area, buf);
    }
}

impl Size {
    const fn as_str(self) -> &'static str {
        match self {
            Self::Small => "◆ ASSIMOX",
            Self::Regular => Self::regular(),
        }
    }

    pub const fn width(self) -> u16 {
        match self {
            Self::Small => 9,
            Self::Regular => 19,
        }
    }

    pub const fn height(self) -> u16 {
        match self {
            Self::Small => 1,
            Self::Regular => 3,
        }
    }

    const fn regular() -> &'static str {
        indoc! {"
            ┏━┓┏━┓┏━┓╻┏┳┓┏━┓╻ ╻
            ┣━┫┗━┓┗━┓┃┃┃┃┃ ┃ ╋
            ╹ ╹┗━┛┗━┛╹╹ ╹┗━┛╹ ╹"}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_logo_is_small_without_tagline() {
        let logo = AssimoxLogo::default();
        assert_eq!(logo.size, Size::Small);
        assert_eq!(logo.height(), 1);
    }

    #[test]
    fn tagline_adds_a_line() {
        let logo = AssimoxLogo::regular().with_tagline();
        assert_eq!(logo.height(), 4);
        assert_eq!(logo.width(), 19);
    }

    #[test]
    fn logo_dimensions_match_content() {
        for size in [Size::Small, Size::Regular] {
            let lines: Vec<&str> = size.as_str().lines().collect();
            assert_eq!(lines.len() as u16, size.height(), "{:?} height mismatch", size);
            let max_width = lines.iter().map(|l| l.chars().count()).max().unwrap_or(0) as u16;
            assert_eq!(max_width, size.width(), "{:?} width mismatch", size);
        }
    }
}
