//! Text input handling

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::{FocusState, TextInputState};

/// Events that can be returned from text input handling
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextInputEvent {
    /// Text was changed
    Changed(String),
    /// Input was submitted (Enter pressed)
    Submitted(String),
}

impl TextInputState {
    /// Handle a keyboard event for this text input
    ///
    /// # Returns
    /// * `Some(TextInputEvent)` if the text changed or was submitted
    /// * `None` otherwise (cursor movement, ignored keys)
    pub fn handle_key(&mut self, key: KeyEvent) -> Option<TextInputEvent> {
        if !self.is_enabled() || self.focus != FocusState::Focused {
            return None;
        }

        match key.code {
            KeyCode::Enter => Some(TextInputEvent::Submitted(self.value.clone())),
            KeyCode::Backspace => {
                if self.cursor > 0 {
                    self.backspace();
                    Some(TextInputEvent::Changed(self.value.clone()))
                } else {
                    None
                }
            }
            KeyCode::Delete => {
                if self.cursor < self.value.len() {
                    self.delete();
                    Some(TextInputEvent::Changed(self.value.clone()))
                } else {
                    None
                }
            }
            KeyCode::Left => {
                if key.modifiers.contains(KeyModifiers::CONTROL) {
                    self.move_home();
                } else {
                    self.move_left();
                }
                None
            }
            KeyCode::Right => {
                if key.modifiers.contains(KeyModifiers::CONTROL) {
                    self.move_end();
                } else {
                    self.move_right();
                }
                None
            }
            KeyCode::Home => {
                self.move_home();
                None
            }
            KeyCode::End => {
                self.move_end();
                None
            }
            KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                if self.value.is_empty() {
                    None
                } else {
                    self.clear();
                    Some(TextInputEvent::Changed(String::new()))
                }
            }
            KeyCode::Char(_) if key.modifiers.contains(KeyModifiers::CONTROL) => None,
            KeyCode::Char(c) => {
                self.insert(c);
                Some(TextInputEvent::Changed(self.value.clone()))
            }
            _ => None,
        }
    }

    /// Handle pasted text
    pub fn handle_paste(&mut self, text: &str) -> Option<TextInputEvent> {
        if !self.is_enabled() || self.focus != FocusState::Focused || text.is_empty() {
            return None;
        }
        self.insert_str(text);
        Some(TextInputEvent::Changed(self.value.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::empty())
    }

    #[test]
    fn test_typing() {
        let mut state = TextInputState::new("", "Value").with_focus(FocusState::Focused);

        assert_eq!(
            state.handle_key(key(KeyCode::Char('a'))),
            Some(TextInputEvent::Changed("a".to_string()))
        );
        assert_eq!(
            state.handle_key(key(KeyCode::Char('b'))),
            Some(TextInputEvent::Changed("ab".to_string()))
        );
        assert_eq!(
            state.handle_key(key(KeyCode::Backspace)),
            Some(TextInputEvent::Changed("a".to_string()))
        );
    }

    #[test]
    fn test_navigation_does_not_report_change() {
        let mut state = TextInputState::new("abc", "Value").with_focus(FocusState::Focused);

        assert!(state.handle_key(key(KeyCode::Left)).is_none());
        assert!(state.handle_key(key(KeyCode::Home)).is_none());
        assert_eq!(state.cursor, 0);
        assert!(state.handle_key(key(KeyCode::Backspace)).is_none());
        assert_eq!(state.value, "abc");
    }

    #[test]
    fn test_enter_submits() {
        let mut state = TextInputState::new("abc", "Value").with_focus(FocusState::Focused);
        assert_eq!(
            state.handle_key(key(KeyCode::Enter)),
            Some(TextInputEvent::Submitted("abc".to_string()))
        );
    }

    #[test]
    fn test_ctrl_u_clears() {
        let mut state = TextInputState::new("abc", "Value").with_focus(FocusState::Focused);
        let ctrl_u = KeyEvent::new(KeyCode::Char('u'), KeyModifiers::CONTROL);
        assert_eq!(
            state.handle_key(ctrl_u),
            Some(TextInputEvent::Changed(String::new()))
        );
        assert!(state.value.is_empty());
    }

    #[test]
    fn test_unfocused_and_disabled_ignore_input() {
        let mut state = TextInputState::new("", "Value");
        assert!(state.handle_key(key(KeyCode::Char('a'))).is_none());

        let mut state = TextInputState::new("", "Value").with_focus(FocusState::Disabled);
        assert!(state.handle_key(key(KeyCode::Char('a'))).is_none());
        assert!(state.handle_paste("pasted").is_none());
        assert!(state.value.is_empty());
    }

    #[test]
    fn test_paste_inserts_at_cursor() {
        let mut state = TextInputState::new("ad", "Value").with_focus(FocusState::Focused);
        state.move_left();
        assert_eq!(
            state.handle_paste("bc"),
            Some(TextInputEvent::Changed("abcd".to_string()))
        );
    }
}
