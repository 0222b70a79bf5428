//! Number input handling

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::{FocusState, NumberInputState};

/// Events that can be returned from number input handling
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NumberInputEvent {
    /// Value changed by stepping, typing or the infinite toggle
    Changed(f64),
    /// Enter pressed, the value is now being typed
    StartedEditing,
    /// Typing ended without a change
    CancelledEditing,
}

impl NumberInputState {
    /// Handle a keyboard event for this number input (when focused).
    ///
    /// While editing, every key is consumed; Enter confirms and Esc cancels.
    pub fn handle_key(&mut self, key: KeyEvent) -> Option<NumberInputEvent> {
        if !self.is_enabled() || self.focus != FocusState::Focused {
            return None;
        }

        if self.editing() {
            return match key.code {
                KeyCode::Enter => {
                    let old_value = self.value;
                    self.confirm_editing();
                    if self.value != old_value {
                        Some(NumberInputEvent::Changed(self.value))
                    } else {
                        Some(NumberInputEvent::CancelledEditing)
                    }
                }
                KeyCode::Esc => {
                    self.cancel_editing();
                    Some(NumberInputEvent::CancelledEditing)
                }
                KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                    self.insert_char(c);
                    None
                }
                _ => {
                    // Cursor movement, deletion and Ctrl+U
                    if let Some(editor) = &mut self.editor {
                        editor.handle_key(key);
                    }
                    None
                }
            };
        }

        let old_value = self.value;
        match key.code {
            KeyCode::Up | KeyCode::Char('+') | KeyCode::Char('=') => self.increment(),
            KeyCode::Down | KeyCode::Char('-') => self.decrement(),
            KeyCode::Char('i') => self.toggle_infinite(),
            KeyCode::Enter => {
                self.start_editing();
                return Some(NumberInputEvent::StartedEditing);
            }
            _ => return None,
        }
        (self.value != old_value).then_some(NumberInputEvent::Changed(self.value))
    }
}
