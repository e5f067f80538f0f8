//! Global application state shared across all screens.

use crate::widgets::toast::ToastManager;

/// An admin session obtained from a successful login. Held in memory only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub username: String,
    pub token: String,
}

/// State that survives navigation between screens.
#[derive(Debug, Default)]
pub struct GlobalState {
    /// Whether the help overlay is visible.
    pub show_help_overlay: bool,

    /// Whether a text input is focused.
    /// When true, keymap shortcuts are suppressed so users can type freely.
    pub input_mode_active: bool,

    pub toasts: ToastManager,

    pub session: Option<Session>,
}

impl GlobalState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_help(&mut self) {
        self.show_help_overlay = !self.show_help_overlay;
    }

    pub fn sign_in(&mut self, username: impl Into<String>, token: impl Into<String>) {
        self.session = Some(Session {
            username: username.into(),
            token: token.into(),
        });
    }

    pub fn is_signed_in(&self) -> bool {
        self.session.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_help_toggle_and_session() {
        let mut state = GlobalState::new();
        state.toggle_help();
        assert!(state.show_help_overlay);
        assert!(!state.is_signed_in());
        state.sign_in("admin", "tok");
        assert_eq!(state.session.as_ref().map(|s| s.username.as_str()), Some("admin"));
    }
}
