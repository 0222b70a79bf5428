//! Button control for triggering actions
//!
//! Renders as: `[ Button Text ]`. Pressing is handled by the owner of the
//! button, which knows which action it stands for.

mod render;

use ratatui::style::Color;

pub use render::{render_button, render_button_row};

use super::FocusState;

/// State for a button control
#[derive(Debug, Clone)]
pub struct ButtonState {
    /// Button text
    pub label: String,
    /// Focus state
    pub focus: FocusState,
}

impl ButtonState {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            focus: FocusState::Normal,
        }
    }

    pub fn with_focus(mut self, focus: FocusState) -> Self {
        self.focus = focus;
        self
    }

    pub fn is_enabled(&self) -> bool {
        self.focus != FocusState::Disabled
    }

    /// Rendered width including brackets and padding
    pub fn width(&self) -> u16 {
        unicode_width::UnicodeWidthStr::width(self.label.as_str()) as u16 + 4
    }
}

/// Colors for the button control
#[derive(Debug, Clone, Copy)]
pub struct ButtonColors {
    pub text: Color,
    pub border: Color,
    /// Text color when focused
    pub focused_fg: Color,
    /// Background when focused
    pub focused_bg: Color,
    pub disabled: Color,
}

impl Default for ButtonColors {
    fn default() -> Self {
        Self {
            text: Color::White,
            border: Color::Gray,
            focused_fg: Color::Black,
            focused_bg: Color::Cyan,
            disabled: Color::DarkGray,
        }
    }
}

impl ButtonColors {
    /// Create colors from theme
    pub fn from_theme(theme: &crate::view::theme::Theme) -> Self {
        Self {
            text: theme.button_fg,
            border: theme.popup_border_fg,
            focused_fg: theme.button_focused_fg,
            focused_bg: theme.button_focused_bg,
            disabled: theme.line_number_fg,
        }
    }
}
