//! Single-line text input control
//!
//! Renders as: `Label: [text      ]`, or with bullets in place of the
//! characters when the input is masked.

mod input;
mod render;

use ratatui::layout::Rect;
use ratatui::style::Color;

pub use input::TextInputEvent;
pub use render::render_text_input;

use super::FocusState;

/// Character shown in place of each character of a masked value
pub const MASK_CHAR: char = '•';

/// State for a text input control
#[derive(Debug, Clone)]
pub struct TextInputState {
    /// Current text
    pub value: String,
    /// Cursor position as a byte offset into `value`
    pub cursor: usize,
    /// Label displayed before the input
    pub label: String,
    /// Text shown when the value is empty
    pub placeholder: String,
    /// Render bullets instead of the text
    pub masked: bool,
    /// Focus state
    pub focus: FocusState,
}

impl TextInputState {
    /// Create a new text input with the cursor at the end of `value`
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        let value = value.into();
        let cursor = value.len();
        Self {
            value,
            cursor,
            label: label.into(),
            placeholder: String::new(),
            masked: false,
            focus: FocusState::Normal,
        }
    }

    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Mask the value on screen
    pub fn with_masked(mut self, masked: bool) -> Self {
        self.masked = masked;
        self
    }

    /// Set the focus state
    pub fn with_focus(mut self, focus: FocusState) -> Self {
        self.focus = focus;
        self
    }

    /// Check if the control is enabled
    pub fn is_enabled(&self) -> bool {
        self.focus != FocusState::Disabled
    }

    /// Replace the value and move the cursor to its end
    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
        self.cursor = self.value.len();
    }

    pub fn clear(&mut self) {
        self.value.clear();
        self.cursor = 0;
    }

    /// Insert a character at the cursor
    pub fn insert(&mut self, c: char) {
        self.value.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    /// Insert a string at the cursor (used for paste)
    pub fn insert_str(&mut self, s: &str) {
        // Single-line input
        let s: String = s.chars().filter(|c| *c != '\n' && *c != '\r').collect();
        self.value.insert_str(self.cursor, &s);
        self.cursor += s.len();
    }

    /// Delete the character before the cursor
    pub fn backspace(&mut self) {
        if let Some(prev) = self.prev_boundary() {
            self.value.replace_range(prev..self.cursor, "");
            self.cursor = prev;
        }
    }

    /// Delete the character at the cursor
    pub fn delete(&mut self) {
        if let Some(next) = self.next_boundary() {
            self.value.replace_range(self.cursor..next, "");
        }
    }

    pub fn move_left(&mut self) {
        if let Some(prev) = self.prev_boundary() {
            self.cursor = prev;
        }
    }

    pub fn move_right(&mut self) {
        if let Some(next) = self.next_boundary() {
            self.cursor = next;
        }
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.value.len();
    }

    /// The text as it appears on screen
    pub fn display_value(&self) -> String {
        if self.masked {
            self.value.chars().map(|_| MASK_CHAR).collect()
        } else {
            self.value.clone()
        }
    }

    fn prev_boundary(&self) -> Option<usize> {
        self.value[..self.cursor]
            .char_indices()
            .next_back()
            .map(|(i, _)| i)
    }

    fn next_boundary(&self) -> Option<usize> {
        self.value[self.cursor..]
            .chars()
            .next()
            .map(|c| self.cursor + c.len_utf8())
    }
}

/// Colors for the text input control
#[derive(Debug, Clone, Copy)]
pub struct TextInputColors {
    pub label: Color,
    pub text: Color,
    pub border: Color,
    pub placeholder: Color,
    pub cursor: Color,
    pub focused: Color,
    pub disabled: Color,
}

impl Default for TextInputColors {
    fn default() -> Self {
        Self {
            label: Color::White,
            text: Color::White,
            border: Color::Gray,
            placeholder: Color::DarkGray,
            cursor: Color::Yellow,
            focused: Color::Cyan,
            disabled: Color::DarkGray,
        }
    }
}

impl TextInputColors {
    /// Create colors from theme
    pub fn from_theme(theme: &crate::view::theme::Theme) -> Self {
        Self {
            label: theme.popup_text_fg,
            text: theme.popup_text_fg,
            border: theme.popup_border_fg,
            placeholder: theme.line_number_fg,
            cursor: theme.help_key_fg,
            focused: theme.help_key_fg,
            disabled: theme.line_number_fg,
        }
    }
}

/// Layout information returned after rendering
#[derive(Debug, Clone, Copy, Default)]
pub struct TextInputLayout {
    /// The bracketed input field
    pub input_area: Rect,
    /// Terminal cursor position when focused
    pub cursor_pos: Option<(u16, u16)>,
}
