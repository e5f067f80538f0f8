use crate::keymap::Action;
use crossterm::event::KeyCode;

/// Character used to mask password fields
pub const MASK_CHAR: char = '•';

/// A single-line text field with its own cursor.
///
/// Used by the search box and the admin sign-in form. A masked input keeps
/// the real text but renders every character as [`MASK_CHAR`].
///
/// # Example
/// ```
/// use assimox::utils::text_input::TextInput;
///
/// let mut input = TextInput::new();
/// input.insert_char('h');
/// input.insert_char('i');
/// assert_eq!(input.text(), "hi");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextInput {
    text: String,
    /// Cursor position in characters, not bytes
    cursor: usize,
    masked: bool,
}

impl TextInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an input whose contents are hidden when rendered.
    pub fn masked() -> Self {
        Self {
            masked: true,
            ..Self::default()
        }
    }

    pub fn with_text(text: impl Into<String>) -> Self {
        let text = text.into();
        let cursor = text.chars().count();
        Self {
            text,
            cursor,
            masked: false,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_masked(&self) -> bool {
        self.masked
    }

    pub fn text_trimmed(&self) -> &str {
        self.text.trim()
    }

    /// True when the text is empty or whitespace only.
    pub fn is_empty(&self) -> bool {
        self.text.trim().is_empty()
    }

    /// Text as it should appear on screen.
    pub fn display_text(&self) -> String {
        if self.masked {
            std::iter::repeat(MASK_CHAR)
                .take(self.text.chars().count())
                .collect()
        } else {
            self.text.clone()
        }
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.cursor = self.text.chars().count();
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.cursor = 0;
    }

    /// Insert a character at the cursor. Control characters are ignored.
    pub fn insert_char(&mut self, c: char) {
        if c.is_control() {
            return;
        }
        let byte_index = self.byte_index(self.cursor);
        self.text.insert(byte_index, c);
        self.cursor += 1;
    }

    /// Delete the character before the cursor.
    pub fn backspace(&mut self) {
        if self.cursor == 0 {
            return;
        }
        let start = self.byte_index(self.cursor - 1);
        let end = self.byte_index(self.cursor);
        self.text.replace_range(start..end, "");
        self.cursor -= 1;
    }

    /// Delete the character under the cursor.
    pub fn delete(&mut self) {
        if self.cursor >= self.text.chars().count() {
            return;
        }
        let start = self.byte_index(self.cursor);
        let end = self.byte_index(self.cursor + 1);
        self.text.replace_range(start..end, "");
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        self.cursor = (self.cursor + 1).min(self.text.chars().count());
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.text.chars().count();
    }

    fn byte_index(&self, char_pos: usize) -> usize {
        self.text
            .char_indices()
            .nth(char_pos)
            .map_or(self.text.len(), |(i, _)| i)
    }

    /// Handle a raw key code.
    ///
    /// Returns true if the key was handled.
    pub fn handle_key(&mut self, key_code: KeyCode) -> bool {
        match key_code {
            KeyCode::Char(c) => self.insert_char(c),
            KeyCode::Backspace => self.backspace(),
            KeyCode::Delete => self.delete(),
            KeyCode::Left => self.move_left(),
            KeyCode::Right => self.move_right(),
            KeyCode::Home => self.move_home(),
            KeyCode::End => self.move_end(),
            _ => return false,
        }
        true
    }

    /// Handle an editing action from the keymap.
    ///
    /// Returns true if the action was handled.
    pub fn handle_action(&mut self, action: Action) -> bool {
        match action {
            Action::MoveLeft => self.move_left(),
            Action::MoveRight => self.move_right(),
            Action::Home => self.move_home(),
            Action::End => self.move_end(),
            Action::Backspace => self.backspace(),
            Action::DeleteChar => self.delete(),
            _ => return false,
        }
        true
    }

    /// Mapped editing actions win, everything else is typed as text.
    pub fn handle_key_with_action(&mut self, key_code: KeyCode, action: Option<Action>) -> bool {
        if let Some(action) = action {
            if self.handle_action(action) {
                return true;
            }
        }
        self.handle_key(key_code)
    }

    /// Check if an action may run while a text input has focus.
    ///
    /// Everything else (like `Quit` bound to 'q') is suppressed so the key
    /// can be typed.
    pub fn is_action_allowed_when_focused(action: &Action) -> bool {
        matches!(
            action,
            Action::Cancel
                | Action::Confirm
                | Action::NextTab
                | Action::PrevTab
                | Action::MoveLeft
                | Action::MoveRight
                | Action::Home
                | Action::End
                | Action::Backspace
                | Action::DeleteChar
                | Action::SwitchAuthMode
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_in_middle() {
        let mut input = TextInput::with_text("hello");
        input.move_home();
        input.move_right();
        input.move_right();
        input.insert_char('x');
        assert_eq!(input.text(), "hexllo");
        assert_eq!(input.cursor(), 3);
    }

    #[test]
    fn test_email_characters_are_accepted() {
        let mut input = TextInput::new();
        for c in "a.b+c@d.io".chars() {
            input.insert_char(c);
        }
        assert_eq!(input.text(), "a.b+c@d.io");
        input.insert_char('\u{7}');
        assert_eq!(input.text(), "a.b+c@d.io");
    }

    #[test]
    fn test_backspace_and_delete() {
        let mut input = TextInput::with_text("hello");
        input.backspace();
        assert_eq!(input.text(), "hell");
        input.move_home();
        input.delete();
        assert_eq!(input.text(), "ell");
        assert_eq!(input.cursor(), 0);
        input.backspace();
        assert_eq!(input.text(), "ell");
    }

    #[test]
    fn test_unicode_handling() {
        let mut input = TextInput::with_text("héllo");
        input.move_home();
        input.move_right();
        input.move_right();
        input.insert_char('x');
        assert_eq!(input.text(), "héxllo");
        input.backspace();
        input.backspace();
        assert_eq!(input.text(), "hllo");
        assert_eq!(input.cursor(), 1);
    }

    #[test]
    fn test_cursor_bounds() {
        let mut input = TextInput::with_text("ab");
        input.move_right();
        assert_eq!(input.cursor(), 2);
        input.move_home();
        input.move_left();
        assert_eq!(input.cursor(), 0);
    }

    #[test]
    fn test_masked_display() {
        let mut input = TextInput::masked();
        input.set_text("secret");
        assert_eq!(input.text(), "secret");
        assert_eq!(input.display_text(), "••••••");
        assert!(input.is_masked());
    }

    #[test]
    fn test_handle_key_with_action() {
        let mut input = TextInput::with_text("hello");
        assert!(input.handle_key_with_action(KeyCode::Home, Some(Action::Home)));
        assert_eq!(input.cursor(), 0);
        // 'q' maps to Quit, which is not an editing action, so it is typed
        assert!(input.handle_key_with_action(KeyCode::Char('q'), Some(Action::Quit)));
        assert_eq!(input.text(), "qhello");
        assert!(!input.handle_key(KeyCode::Esc));
    }

    #[test]
    fn test_whitespace_only_is_empty() {
        let input = TextInput::with_text("   ");
        assert!(input.is_empty());
        assert_eq!(TextInput::with_text("  hi ").text_trimmed(), "hi");
    }

    #[test]
    fn test_is_action_allowed_when_focused() {
        assert!(TextInput::is_action_allowed_when_focused(&Action::Cancel));
        assert!(TextInput::is_action_allowed_when_focused(&Action::NextTab));
        assert!(TextInput::is_action_allowed_when_focused(&Action::Backspace));
        assert!(!TextInput::is_action_allowed_when_focused(&Action::Quit));
        assert!(!TextInput::is_action_allowed_when_focused(&Action::Help));
        assert!(!TextInput::is_action_allowed_when_focused(&Action::GoGallery));
    }
}
