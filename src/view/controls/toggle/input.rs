//! Toggle input handling

use crossterm::event::{KeyCode, KeyEvent};

use super::{FocusState, ToggleState};

/// Events that can be returned from toggle input handling
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleEvent {
    /// Toggle was toggled (value changed)
    Toggled(bool),
}

impl ToggleState {
    /// Handle a keyboard event for this toggle (when focused)
    ///
    /// # Returns
    /// * `Some(ToggleEvent::Toggled)` if Enter or Space was pressed
    /// * `None` otherwise
    pub fn handle_key(&mut self, key: KeyEvent) -> Option<ToggleEvent> {
        if !self.is_enabled() || self.focus != FocusState::Focused {
            return None;
        }

        match key.code {
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.toggle();
                Some(ToggleEvent::Toggled(self.checked))
            }
            _ => None,
        }
    }
}
