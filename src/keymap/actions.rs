//! Action enum for all user-triggered actions
//!
//! These represent semantic actions that can be triggered by keyboard shortcuts.

use serde::{Deserialize, Serialize};

/// All possible user actions in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    // ============ Navigation ============
    /// Move selection up in a list
    MoveUp,
    /// Move selection down in a list
    MoveDown,
    /// Previous item in a carousel / strip, cursor left in inputs
    MoveLeft,
    /// Next item in a carousel / strip, cursor right in inputs
    MoveRight,
    PageUp,
    PageDown,
    GoToTop,
    GoToEnd,
    /// Jump to start of input
    Home,
    /// Jump to end of input
    End,

    // ============ Selection & Confirmation ============
    /// Open focused item / submit form (Enter)
    Confirm,
    /// Close modal or menu / go back (Esc)
    Cancel,

    // ============ Global ============
    Quit,
    Help,
    /// Focus the search box
    Search,
    /// Toggle the login dropdown in the header
    ToggleLoginMenu,
    /// Toggle the navigation drawer (compact layouts)
    ToggleDrawer,
    GoHome,
    GoServices,
    GoGallery,
    GoAdmin,

    // ============ Screen-specific ============
    /// Switch between login and registration forms
    SwitchAuthMode,

    // ============ Text editing ============
    Backspace,
    DeleteChar,

    // ============ Tab/Field/Section navigation ============
    NextTab,
    PrevTab,

    // ============ Page scrolling ============
    ScrollUp,
    ScrollDown,
}

impl Action {
    /// Get a human-readable description of this action
    pub fn description(&self) -> &'static str {
        match self {
            Action::MoveUp => "Move up",
            Action::MoveDown => "Move down",
            Action::MoveLeft => "Previous / move left",
            Action::MoveRight => "Next / move right",
            Action::PageUp => "Page up",
            Action::PageDown => "Page down",
            Action::GoToTop => "Go to top",
            Action::GoToEnd => "Go to end",
            Action::Home => "Start of input",
            Action::End => "End of input",
            Action::Confirm => "Open / submit",
            Action::Cancel => "Close / go back",
            Action::Quit => "Quit",
            Action::Help => "Show help",
            Action::Search => "Search",
            Action::ToggleLoginMenu => "Login / Sign Up menu",
            Action::ToggleDrawer => "Navigation menu",
            Action::GoHome => "Home page",
            Action::GoServices => "Service providers",
            Action::GoGallery => "Gallery",
            Action::GoAdmin => "Admin sign-in",
            Action::SwitchAuthMode => "Switch login / register",
            Action::Backspace => "Delete before cursor",
            Action::DeleteChar => "Delete at cursor",
            Action::NextTab => "Next tab / field / section",
            Action::PrevTab => "Previous tab / field / section",
            Action::ScrollUp => "Scroll page up",
            Action::ScrollDown => "Scroll page down",
        }
    }

    /// Get the category for grouping in the help overlay
    pub fn category(&self) -> &'static str {
        match self {
            Action::MoveUp
            | Action::MoveDown
            | Action::MoveLeft
            | Action::MoveRight
            | Action::PageUp
            | Action::PageDown
            | Action::GoToTop
            | Action::GoToEnd
            | Action::ScrollUp
            | Action::ScrollDown
            | Action::NextTab
            | Action::PrevTab => "Navigation",

            Action::Confirm | Action::Cancel => "Selection",

            Action::Quit
            | Action::Help
            | Action::Search
            | Action::ToggleLoginMenu
            | Action::ToggleDrawer
            | Action::GoHome
            | Action::GoServices
            | Action::GoGallery
            | Action::GoAdmin => "Global",

            Action::SwitchAuthMode => "Admin",

            Action::Home | Action::End | Action::Backspace | Action::DeleteChar => "Text Editing",
        }
    }

    /// Route an action navigates to, if it is a page shortcut
    pub fn route(&self) -> Option<crate::router::Route> {
        use crate::router::Route;
        match self {
            Action::GoHome => Some(Route::Home),
            Action::GoServices => Some(Route::Services),
            Action::GoGallery => Some(Route::Gallery),
            Action::GoAdmin => Some(Route::Admin),
            _ => None,
        }
    }
}
