//! Screen trait and associated types.
//!
//! Screens own their state, draw themselves, and report what should happen
//! next as a [`ScreenAction`] instead of reaching into the app.

use crate::auth::{AuthMode, AuthRequest};
use crate::components::ComponentAction;
use crate::config::Config;
use crate::keymap::Keymap;
use crate::router::Route;
use crate::widgets::Toast;
use anyhow::Result;
use crossterm::event::Event;
use ratatui::layout::Rect;
use ratatui::Frame;
use std::path::Path;
use std::time::Duration;

/// Context provided for rendering screens.
pub struct RenderContext<'a> {
    /// Application configuration.
    pub config: &'a Config,
}

impl<'a> RenderContext<'a> {
    pub fn new(config: &'a Config) -> Self {
        Self { config }
    }
}

/// Context provided for handling events.
pub struct ScreenContext<'a> {
    /// Application configuration.
    pub config: &'a Config,
    /// Configuration file path (shown in help).
    pub config_path: &'a Path,
}

impl<'a> ScreenContext<'a> {
    pub fn new(config: &'a Config, config_path: &'a Path) -> Self {
        Self {
            config,
            config_path,
        }
    }

    pub fn keymap(&self) -> &Keymap {
        &self.config.keymap
    }
}

/// Actions that a screen can return after handling an event.
#[derive(Debug, Clone, Default)]
pub enum ScreenAction {
    /// No action needed, stay on current screen.
    #[default]
    None,
    /// Redraw.
    Refresh,
    /// Navigate to a different route.
    Navigate(Route),
    /// Go to the admin page in the given mode.
    OpenAuth(AuthMode),
    /// Show a toast.
    Toast(Toast),
    /// Send an admin request; the result comes back through the app.
    SubmitAuth(AuthMode, AuthRequest),
    /// Open help overlay.
    ShowHelp,
    /// Request to quit the application.
    Quit,
}

impl From<ComponentAction> for ScreenAction {
    fn from(action: ComponentAction) -> Self {
        match action {
            ComponentAction::None => ScreenAction::None,
            ComponentAction::Update => ScreenAction::Refresh,
            ComponentAction::Navigate(route) => ScreenAction::Navigate(route),
            ComponentAction::OpenAuth(mode) => ScreenAction::OpenAuth(mode),
            ComponentAction::Notify(toast) => ScreenAction::Toast(toast),
        }
    }
}

/// Trait for screen controllers.
///
/// # Example
///
/// ```rust,ignore
/// struct MyScreen {
///     page: ScrollPage,
/// }
///
/// impl Screen for MyScreen {
///     fn render(&mut self, frame: &mut Frame, area: Rect, ctx: &RenderContext) -> Result<()> {
///         // Draw sections into the page
///         Ok(())
///     }
///
///     fn handle_event(&mut self, event: Event, ctx: &ScreenContext) -> Result<ScreenAction> {
///         match event {
///             Event::Key(_) => Ok(ScreenAction::Navigate(Route::Gallery)),
///             _ => Ok(ScreenAction::None),
///         }
///     }
/// }
/// ```
pub trait Screen {
    /// Render the screen into `area` (everything between header and hint bar).
    fn render(&mut self, frame: &mut Frame, area: Rect, ctx: &RenderContext) -> Result<()>;

    /// Handle an input event the app did not consume itself.
    fn handle_event(&mut self, event: Event, ctx: &ScreenContext) -> Result<ScreenAction>;

    /// Check if a text input is currently focused.
    ///
    /// When true, global keybindings are disabled so users can type freely.
    fn is_input_focused(&self) -> bool {
        false
    }

    /// Advance timers. Returns true when a redraw is needed.
    fn tick(&mut self, _elapsed: Duration) -> bool {
        false
    }

    /// Key hints for the bottom bar.
    fn footer_hints(&self, keymap: &Keymap) -> String {
        keymap.footer_navigation()
    }

    /// Called when the screen is entered (navigated to).
    fn on_enter(&mut self, _ctx: &ScreenContext) -> Result<()> {
        Ok(())
    }

    /// Called when the screen is exited (navigated away from).
    ///
    /// Timers and signal subscriptions are released here.
    fn on_exit(&mut self, _ctx: &ScreenContext) -> Result<()> {
        Ok(())
    }
}
