use crate::auth::AuthMode;
use crate::keymap::Action;
use crate::router::Route;
use crate::state::Viewport;
use crate::widgets::Toast;
use anyhow::Result;
use crossterm::event::MouseEvent;
use ratatui::prelude::*;
use std::time::Duration;

/// Action that a component can return after handling an event
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ComponentAction {
    /// No action needed
    None,
    /// Component state was updated, needs re-render
    Update,
    /// Navigate to a different screen
    Navigate(Route),
    /// Open the admin screen on the login or register form
    OpenAuth(AuthMode),
    /// Show a toast notification
    Notify(Toast),
}

impl ComponentAction {
    /// Treat a bool "something changed" result as `Update` / `None`.
    pub fn updated(changed: bool) -> Self {
        if changed {
            ComponentAction::Update
        } else {
            ComponentAction::None
        }
    }
}

/// Trait for page sections
///
/// Sections are self-contained UI elements that:
/// - Manage their own state
/// - Handle their own events
/// - Render themselves into a page canvas
/// - Return actions for the screen to handle
///
/// Mouse events arrive already translated into canvas coordinates, so a
/// section compares them against the areas it was last rendered at.
pub trait Component {
    /// Rows the section needs at the given width
    fn height(&self, width: u16) -> u16;

    /// Render the section into the page canvas
    fn render(&mut self, buf: &mut Buffer, area: Rect, focused: bool) -> Result<()>;

    /// Handle a keymap action while the section has keyboard focus
    fn handle_action(&mut self, _action: Action) -> Result<ComponentAction> {
        Ok(ComponentAction::None)
    }

    /// Handle a mouse event (move, click)
    fn handle_mouse(&mut self, _mouse: MouseEvent) -> Result<ComponentAction> {
        Ok(ComponentAction::None)
    }

    /// Advance timers. Returns true if a redraw is needed.
    fn tick(&mut self, _elapsed: Duration) -> bool {
        false
    }

    /// Terminal size changed
    fn set_viewport(&mut self, _viewport: Viewport) {}

    /// Stop timers (owning screen left)
    fn pause(&mut self) {}

    /// Restart timers (owning screen entered)
    fn resume(&mut self) {}
}
