//! Toggle (checkbox) control for boolean values
//!
//! Renders as: `[x] true` or `[ ] false`. The value is always one of the
//! two literal strings "true" and "false".

mod input;
mod render;

use ratatui::style::Color;

pub use input::ToggleEvent;
pub use render::render_toggle;

use super::FocusState;

/// State for a toggle control
#[derive(Debug, Clone)]
pub struct ToggleState {
    /// Current value
    pub checked: bool,
    /// Focus state
    pub focus: FocusState,
}

impl ToggleState {
    /// Create a new toggle state
    pub fn new(checked: bool) -> Self {
        Self {
            checked,
            focus: FocusState::Normal,
        }
    }

    /// Parse a config value; anything but "true" (any case) is unchecked
    pub fn from_value(value: &str) -> Self {
        Self::new(value.trim().eq_ignore_ascii_case("true"))
    }

    /// Set the focus state
    pub fn with_focus(mut self, focus: FocusState) -> Self {
        self.focus = focus;
        self
    }

    /// Check if the toggle is enabled
    pub fn is_enabled(&self) -> bool {
        self.focus != FocusState::Disabled
    }

    /// Toggle the value
    pub fn toggle(&mut self) {
        if self.is_enabled() {
            self.checked = !self.checked;
        }
    }

    /// The value as a config string
    pub fn value(&self) -> &'static str {
        if self.checked {
            "true"
        } else {
            "false"
        }
    }
}

/// Colors for the toggle control
#[derive(Debug, Clone, Copy)]
pub struct ToggleColors {
    /// Checkbox bracket color
    pub bracket: Color,
    /// Checkmark color when checked
    pub checkmark: Color,
    /// Label text color
    pub label: Color,
    /// Focused highlight color
    pub focused: Color,
    /// Disabled color
    pub disabled: Color,
}

impl Default for ToggleColors {
    fn default() -> Self {
        Self {
            bracket: Color::Gray,
            checkmark: Color::Green,
            label: Color::White,
            focused: Color::Cyan,
            disabled: Color::DarkGray,
        }
    }
}

impl ToggleColors {
    /// Create colors from theme
    pub fn from_theme(theme: &crate::view::theme::Theme) -> Self {
        Self {
            bracket: theme.popup_border_fg,
            checkmark: theme.success_fg,
            label: theme.popup_text_fg,
            focused: theme.help_key_fg,
            disabled: theme.line_number_fg,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_state_toggle() {
        let mut state = ToggleState::new(false);
        assert_eq!(state.value(), "false");

        state.toggle();
        assert_eq!(state.value(), "true");

        state.toggle();
        assert!(!state.checked);
    }

    #[test]
    fn test_toggle_disabled_no_toggle() {
        let mut state = ToggleState::new(false).with_focus(FocusState::Disabled);
        state.toggle();
        assert!(!state.checked);
    }

    #[test]
    fn test_from_value() {
        assert!(ToggleState::from_value("true").checked);
        assert!(ToggleState::from_value("TRUE").checked);
        assert!(!ToggleState::from_value("false").checked);
        assert!(!ToggleState::from_value("").checked);
    }
}
