//! Colors and text styles.
//!
//! The palette follows the brochure's branding: a deep blue for titles and
//! borders, an orange call-to-action color and gold rating stars. Every
//! helper degrades to plain modifiers under [`ThemeType::NoColor`] so the
//! terminal's own colors are used.

use ratatui::style::{Color, Modifier, Style};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use std::sync::{PoisonError, RwLock};

static THEME: RwLock<Theme> = RwLock::new(Theme::dark());

/// Replace the active theme.
pub fn init_theme(theme_type: ThemeType) {
    *THEME.write().unwrap_or_else(PoisonError::into_inner) = Theme::new(theme_type);
}

/// Snapshot of the active theme.
pub fn theme() -> Theme {
    THEME.read().unwrap_or_else(PoisonError::into_inner).clone()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeType {
    #[default]
    Dark,
    Light,
    /// No colors at all, as with `NO_COLOR=1`
    #[serde(alias = "no-color", alias = "no_color")]
    NoColor,
}

impl FromStr for ThemeType {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.to_lowercase().as_str() {
            "light" => ThemeType::Light,
            "nocolor" | "no-color" | "no_color" => ThemeType::NoColor,
            _ => ThemeType::Dark,
        })
    }
}

#[derive(Debug, Clone)]
pub struct Theme {
    pub theme_type: ThemeType,
    /// Brand blue: titles, focused borders, info toasts
    pub primary: Color,
    /// Call-to-action orange: badges, categories, the header button
    pub secondary: Color,
    /// Star ratings
    pub rating: Color,
    pub success: Color,
    pub warning: Color,
    pub error: Color,
    pub text: Color,
    pub muted: Color,
    /// Phone numbers, dates, selected text
    pub emphasis: Color,
    pub border: Color,
    pub selection: Color,
}

impl Theme {
    pub fn new(theme_type: ThemeType) -> Self {
        match theme_type {
            ThemeType::Dark => Self::dark(),
            ThemeType::Light => Self::light(),
            ThemeType::NoColor => Self::no_color(),
        }
    }

    pub const fn dark() -> Self {
        Self {
            theme_type: ThemeType::Dark,
            primary: Color::Rgb(96, 165, 250),
            secondary: Color::Rgb(251, 146, 60),
            rating: Color::Rgb(250, 204, 21),
            success: Color::Green,
            warning: Color::Yellow,
            error: Color::Red,
            text: Color::White,
            muted: Color::DarkGray,
            emphasis: Color::Cyan,
            border: Color::DarkGray,
            selection: Color::Rgb(30, 41, 59),
        }
    }

    pub const fn light() -> Self {
        Self {
            theme_type: ThemeType::Light,
            primary: Color::Rgb(30, 64, 175),
            secondary: Color::Rgb(194, 65, 12),
            rating: Color::Rgb(161, 98, 7),
            success: Color::Rgb(21, 128, 61),
            warning: Color::Rgb(180, 83, 9),
            error: Color::Rgb(185, 28, 28),
            text: Color::Black,
            muted: Color::DarkGray,
            emphasis: Color::Blue,
            border: Color::Gray,
            selection: Color::Rgb(219, 234, 254),
        }
    }

    pub const fn no_color() -> Self {
        Self {
            theme_type: ThemeType::NoColor,
            primary: Color::Reset,
            secondary: Color::Reset,
            rating: Color::Reset,
            success: Color::Reset,
            warning: Color::Reset,
            error: Color::Reset,
            text: Color::Reset,
            muted: Color::Reset,
            emphasis: Color::Reset,
            border: Color::Reset,
            selection: Color::Reset,
        }
    }

    fn is_plain(&self) -> bool {
        self.theme_type == ThemeType::NoColor
    }

    /// Foreground `color`, or just `plain` modifiers without colors.
    fn fg(&self, color: Color, plain: Modifier) -> Style {
        if self.is_plain() {
            Style::default().add_modifier(plain)
        } else {
            Style::default().fg(color)
        }
    }

    pub fn title_style(&self) -> Style {
        self.fg(self.primary, Modifier::BOLD)
            .add_modifier(Modifier::BOLD)
    }

    pub fn text_style(&self) -> Style {
        self.fg(self.text, Modifier::empty())
    }

    pub fn muted_style(&self) -> Style {
        self.fg(self.muted, Modifier::DIM)
    }

    pub fn emphasis_style(&self) -> Style {
        self.fg(self.emphasis, Modifier::BOLD)
    }

    /// Category tags, listing badges and the header button
    pub fn badge_style(&self) -> Style {
        self.fg(self.secondary, Modifier::REVERSED)
    }

    pub fn rating_style(&self) -> Style {
        self.fg(self.rating, Modifier::BOLD)
    }

    pub fn success_style(&self) -> Style {
        self.fg(self.success, Modifier::BOLD)
    }

    pub fn error_style(&self) -> Style {
        self.fg(self.error, Modifier::BOLD)
    }

    pub fn border_style(&self) -> Style {
        self.fg(self.border, Modifier::empty())
    }

    pub fn border_focused_style(&self) -> Style {
        self.fg(self.primary, Modifier::BOLD)
    }

    /// Selected card, menu entry or tab
    pub fn highlight_style(&self) -> Style {
        if self.is_plain() {
            return Style::default().add_modifier(Modifier::BOLD | Modifier::REVERSED);
        }
        Style::default()
            .fg(self.primary)
            .bg(self.selection)
            .add_modifier(Modifier::BOLD)
    }

    pub fn background_style(&self) -> Style {
        Style::default()
    }
}
