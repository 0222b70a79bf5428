//! Number input control with increment/decrement
//!
//! Renders as: `[ 604800000 ] 7 days`
//!
//! The value is stepped with Up/Down (or +/-) or typed after pressing
//! Enter. Byte sizes and durations may hold the `-1` infinite sentinel,
//! toggled with `i`.

mod input;
mod render;

use ratatui::style::Color;

pub use input::NumberInputEvent;
pub use render::render_number_input;

use super::text_input::TextInputState;
use super::FocusState;
use crate::model::format::INFINITE_SENTINEL;

/// What the number means, which decides rounding, bounds and step size
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumberKind {
    Integer,
    Decimal,
    /// Fraction in [0, 1]
    Ratio,
    /// Size in bytes
    Bytes,
    /// Duration in milliseconds
    Duration,
}

impl NumberKind {
    /// Whether values are rounded to whole numbers
    pub fn is_integral(self) -> bool {
        matches!(self, Self::Integer | Self::Bytes | Self::Duration)
    }

    /// Whether the `-1` infinite sentinel is offered
    pub fn allows_infinite(self) -> bool {
        matches!(self, Self::Bytes | Self::Duration)
    }

    fn default_step(self) -> f64 {
        match self {
            Self::Integer => 1.0,
            Self::Decimal => 0.1,
            Self::Ratio => 0.05,
            Self::Bytes => 1024.0 * 1024.0,
            Self::Duration => 60_000.0,
        }
    }

    fn default_bounds(self) -> (Option<f64>, Option<f64>) {
        match self {
            Self::Ratio => (Some(0.0), Some(1.0)),
            Self::Bytes | Self::Duration => (Some(0.0), None),
            Self::Integer | Self::Decimal => (None, None),
        }
    }
}

/// State for a number input control
#[derive(Debug, Clone)]
pub struct NumberInputState {
    /// Current numeric value
    pub value: f64,
    pub kind: NumberKind,
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub step: f64,
    /// Focus state
    pub focus: FocusState,
    /// Text editor while typing a value
    pub editor: Option<TextInputState>,
    /// Text the control was created from
    original: String,
    /// Set once the user changes the value
    dirty: bool,
    /// Value restored when leaving the infinite sentinel
    last_finite: f64,
}

impl NumberInputState {
    /// Create a number input from a config value.
    ///
    /// Absent or unparsable text starts at 0 and reads back as "0". A
    /// parsed value returns `raw` unchanged from
    /// [`NumberInputState::value_string`] until it is changed.
    pub fn new(raw: Option<&str>, kind: NumberKind) -> Self {
        let original = raw.unwrap_or("").to_string();
        let parsed = original.trim().parse::<f64>().ok().filter(|v| v.is_finite());
        let value = parsed.map(|v| normalize(v, kind)).unwrap_or(0.0);
        let (min, max) = kind.default_bounds();
        Self {
            value,
            kind,
            min,
            max,
            step: kind.default_step(),
            focus: FocusState::Normal,
            editor: None,
            original,
            dirty: parsed.is_none(),
            last_finite: if is_sentinel(value) { 0.0 } else { value },
        }
    }

    pub fn with_focus(mut self, focus: FocusState) -> Self {
        self.focus = focus;
        self
    }

    pub fn is_enabled(&self) -> bool {
        self.focus != FocusState::Disabled
    }

    pub fn editing(&self) -> bool {
        self.editor.is_some()
    }

    /// Whether the value is the infinite sentinel
    pub fn is_infinite(&self) -> bool {
        self.kind.allows_infinite() && is_sentinel(self.value)
    }

    /// The value as a config string
    pub fn value_string(&self) -> String {
        if !self.dirty {
            return self.original.clone();
        }
        format_number(self.value, self.kind)
    }

    pub fn increment(&mut self) {
        if !self.is_enabled() || self.is_infinite() {
            return;
        }
        self.set_value(clean_step(self.value + self.step, self.kind));
    }

    pub fn decrement(&mut self) {
        if !self.is_enabled() || self.is_infinite() {
            return;
        }
        self.set_value(clean_step(self.value - self.step, self.kind));
    }

    /// Set the value, rounding integral kinds and clamping to the bounds
    pub fn set_value(&mut self, value: f64) {
        if !self.is_enabled() || !value.is_finite() {
            return;
        }
        let v = if self.kind.allows_infinite() && is_sentinel(value) {
            value
        } else {
            self.clamp(normalize(value, self.kind))
        };
        if !is_sentinel(v) {
            self.last_finite = v;
        }
        if v != self.value {
            self.dirty = true;
            self.value = v;
        }
    }

    /// Switch between the infinite sentinel and the last finite value
    pub fn toggle_infinite(&mut self) {
        if !self.is_enabled() || !self.kind.allows_infinite() {
            return;
        }
        if self.is_infinite() {
            self.set_value(self.last_finite);
        } else {
            self.set_value(INFINITE_SENTINEL as f64);
        }
    }

    pub fn start_editing(&mut self) {
        if !self.is_enabled() {
            return;
        }
        let text = if self.dirty || self.original.trim().is_empty() {
            format_number(self.value, self.kind)
        } else {
            self.original.trim().to_string()
        };
        self.editor = Some(TextInputState::new(text, "").with_focus(FocusState::Focused));
    }

    pub fn cancel_editing(&mut self) {
        self.editor = None;
    }

    /// Parse the edited text; unparsable input keeps the previous value
    pub fn confirm_editing(&mut self) {
        if let Some(editor) = self.editor.take() {
            if let Ok(new_value) = editor.value.trim().parse::<f64>() {
                self.set_value(new_value);
            }
        }
    }

    /// Insert a character into the editor, accepting only number characters
    pub fn insert_char(&mut self, c: char) {
        let integral = self.kind.is_integral();
        if let Some(editor) = &mut self.editor {
            if c.is_ascii_digit() || c == '-' || (c == '.' && !integral) {
                editor.insert(c);
            }
        }
    }

    fn clamp(&self, mut v: f64) -> f64 {
        if let Some(min) = self.min {
            v = v.max(min);
        }
        if let Some(max) = self.max {
            v = v.min(max);
        }
        v
    }
}

fn is_sentinel(value: f64) -> bool {
    value == INFINITE_SENTINEL as f64
}

fn normalize(value: f64, kind: NumberKind) -> f64 {
    if kind.is_integral() {
        value.round()
    } else {
        value
    }
}

/// Drop the float error that stepping by decimal fractions accumulates
fn clean_step(value: f64, kind: NumberKind) -> f64 {
    if kind.is_integral() {
        value
    } else {
        (value * 1e9).round() / 1e9
    }
}

/// Format a number the way the backend expects it
pub fn format_number(value: f64, kind: NumberKind) -> String {
    if kind.is_integral() {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}

/// Colors for the number input control
#[derive(Debug, Clone, Copy)]
pub struct NumberInputColors {
    /// Value text color
    pub value: Color,
    /// Border/bracket color
    pub border: Color,
    /// Friendly hint after the field
    pub hint: Color,
    /// Focused highlight color
    pub focused: Color,
    /// Disabled color
    pub disabled: Color,
}

impl Default for NumberInputColors {
    fn default() -> Self {
        Self {
            value: Color::White,
            border: Color::Gray,
            hint: Color::DarkGray,
            focused: Color::Cyan,
            disabled: Color::DarkGray,
        }
    }
}

impl NumberInputColors {
    /// Create colors from theme
    pub fn from_theme(theme: &crate::view::theme::Theme) -> Self {
        Self {
            value: theme.popup_text_fg,
            border: theme.popup_border_fg,
            hint: theme.line_number_fg,
            focused: theme.help_key_fg,
            disabled: theme.line_number_fg,
        }
    }
}
