//! Dropdown input handling

use crossterm::event::{KeyCode, KeyEvent};

use super::{DropdownState, FocusState};

/// Events that can be returned from dropdown input handling
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DropdownEvent {
    /// The option list was opened
    Opened,
    /// The option list was closed keeping the selection
    Closed,
    /// The option list was closed restoring the previous selection
    Cancelled,
    /// Selection changed to the given index
    SelectionChanged(usize),
}

impl DropdownState {
    /// Handle a keyboard event for this dropdown (when focused).
    ///
    /// Up/Down change the selection even while closed. Tab is never
    /// consumed so focus can move on.
    pub fn handle_key(&mut self, key: KeyEvent) -> Option<DropdownEvent> {
        if !self.is_enabled() || self.focus != FocusState::Focused {
            return None;
        }

        match key.code {
            KeyCode::Enter | KeyCode::Char(' ') => {
                if self.open {
                    self.confirm();
                    Some(DropdownEvent::Closed)
                } else {
                    self.toggle_open();
                    Some(DropdownEvent::Opened)
                }
            }
            KeyCode::Esc => {
                if self.open {
                    self.cancel();
                    Some(DropdownEvent::Cancelled)
                } else {
                    None
                }
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.select_prev();
                Some(DropdownEvent::SelectionChanged(self.selected))
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.select_next();
                Some(DropdownEvent::SelectionChanged(self.selected))
            }
            KeyCode::Home if !self.options.is_empty() => {
                self.selected = 0;
                self.ensure_visible();
                Some(DropdownEvent::SelectionChanged(0))
            }
            KeyCode::End if !self.options.is_empty() => {
                self.selected = self.options.len() - 1;
                self.ensure_visible();
                Some(DropdownEvent::SelectionChanged(self.selected))
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn state() -> DropdownState {
        DropdownState::new(vec![
            "producer".to_string(),
            "gzip".to_string(),
            "zstd".to_string(),
        ])
        .with_focus(FocusState::Focused)
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::empty())
    }

    #[test]
    fn test_arrow_keys_change_selection() {
        let mut state = state();
        assert_eq!(
            state.handle_key(key(KeyCode::Down)),
            Some(DropdownEvent::SelectionChanged(1))
        );
        assert_eq!(
            state.handle_key(key(KeyCode::Up)),
            Some(DropdownEvent::SelectionChanged(0))
        );
        assert_eq!(
            state.handle_key(key(KeyCode::End)),
            Some(DropdownEvent::SelectionChanged(2))
        );
    }

    #[test]
    fn test_enter_opens_and_confirms() {
        let mut state = state();
        assert_eq!(state.handle_key(key(KeyCode::Enter)), Some(DropdownEvent::Opened));
        assert!(state.open);

        state.handle_key(key(KeyCode::Down));
        assert_eq!(state.handle_key(key(KeyCode::Enter)), Some(DropdownEvent::Closed));
        assert!(!state.open);
        assert_eq!(state.selected_value(), Some("gzip"));
    }

    #[test]
    fn test_escape_cancels_open_list() {
        let mut state = state();
        state.handle_key(key(KeyCode::Enter));
        state.handle_key(key(KeyCode::Down));
        assert_eq!(
            state.handle_key(key(KeyCode::Esc)),
            Some(DropdownEvent::Cancelled)
        );
        assert_eq!(state.selected, 0);
    }

    #[test]
    fn test_escape_ignored_when_closed() {
        let mut state = state();
        assert!(state.handle_key(key(KeyCode::Esc)).is_none());
    }

    #[test]
    fn test_unfocused_ignores_keys() {
        let mut state = state().with_focus(FocusState::Normal);
        assert!(state.handle_key(key(KeyCode::Down)).is_none());
        assert_eq!(state.selected, 0);
    }
}
