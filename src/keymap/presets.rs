//! Preset keymaps: Standard and Vim
//!
//! Each preset provides a complete set of key bindings for all actions.

use super::{Action, KeyBinding};
use serde::{Deserialize, Serialize};

/// Available keymap presets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum KeymapPreset {
    /// Arrow keys, Enter, Esc
    #[default]
    Standard,
    /// hjkl navigation
    Vim,
}

impl KeymapPreset {
    /// Get all key bindings for this preset
    pub fn bindings(&self) -> Vec<KeyBinding> {
        match self {
            KeymapPreset::Standard => standard_bindings(),
            KeymapPreset::Vim => vim_bindings(),
        }
    }

    /// Get human-readable name
    pub fn name(&self) -> &'static str {
        match self {
            KeymapPreset::Standard => "Standard",
            KeymapPreset::Vim => "Vim",
        }
    }
}

/// Bindings shared by every preset
fn common_bindings() -> Vec<KeyBinding> {
    vec![
        KeyBinding::new("enter", Action::Confirm),
        KeyBinding::new("esc", Action::Cancel),
        KeyBinding::new("q", Action::Quit),
        KeyBinding::new("ctrl+c", Action::Quit),
        KeyBinding::new("?", Action::Help),
        KeyBinding::new("/", Action::Search),
        KeyBinding::new("l", Action::ToggleLoginMenu),
        KeyBinding::new("m", Action::ToggleDrawer),
        KeyBinding::new("1", Action::GoHome),
        KeyBinding::new("2", Action::GoServices),
        KeyBinding::new("3", Action::GoGallery),
        KeyBinding::new("4", Action::GoAdmin),
        KeyBinding::new("ctrl+t", Action::SwitchAuthMode),
        KeyBinding::new("backspace", Action::Backspace),
        KeyBinding::new("delete", Action::DeleteChar),
        KeyBinding::new("tab", Action::NextTab),
        KeyBinding::new("shift+tab", Action::PrevTab),
        KeyBinding::new("pageup", Action::PageUp),
        KeyBinding::new("pagedown", Action::PageDown),
    ]
}

/// Standard keyboard bindings (arrows, Enter, Esc)
fn standard_bindings() -> Vec<KeyBinding> {
    let mut bindings = vec![
        KeyBinding::new("up", Action::MoveUp),
        KeyBinding::new("down", Action::MoveDown),
        KeyBinding::new("left", Action::MoveLeft),
        KeyBinding::new("right", Action::MoveRight),
        KeyBinding::new("home", Action::Home),
        KeyBinding::new("end", Action::End),
        KeyBinding::new("ctrl+home", Action::GoToTop),
        KeyBinding::new("ctrl+end", Action::GoToEnd),
        KeyBinding::new("shift+up", Action::ScrollUp),
        KeyBinding::new("shift+down", Action::ScrollDown),
    ];
    bindings.extend(common_bindings());
    bindings
}

/// Vim-style keyboard bindings (hjkl navigation)
fn vim_bindings() -> Vec<KeyBinding> {
    let mut bindings = vec![
        KeyBinding::new("k", Action::MoveUp),
        KeyBinding::new("j", Action::MoveDown),
        KeyBinding::new("h", Action::MoveLeft),
        // 'l' toggles the login menu, so right is only on the arrow key
        KeyBinding::new("right", Action::MoveRight),
        KeyBinding::new("up", Action::MoveUp),
        KeyBinding::new("down", Action::MoveDown),
        KeyBinding::new("left", Action::MoveLeft),
        KeyBinding::new("0", Action::Home),
        KeyBinding::new("$", Action::End),
        KeyBinding::new("g", Action::GoToTop),
        KeyBinding::new("G", Action::GoToEnd),
        KeyBinding::new("ctrl+u", Action::ScrollUp),
        KeyBinding::new("ctrl+d", Action::ScrollDown),
    ];
    bindings.extend(common_bindings());
    bindings
}
