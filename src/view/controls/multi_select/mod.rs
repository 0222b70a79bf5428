//! Checklist control for multi-valued settings
//!
//! Renders one `[x] option` row per option. The value is the checked
//! options joined by "," in option order.

mod render;

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::style::Color;

pub use render::render_multi_select;

use super::FocusState;

/// Separator between selected items in the stored value
pub const SEPARATOR: char = ',';

/// Events that can be returned from multi-select input handling
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MultiSelectEvent {
    /// The option at the index was checked or unchecked
    Toggled(usize, bool),
    /// The cursor moved to the index
    CursorMoved(usize),
}

/// State for a multi-select control
#[derive(Debug, Clone)]
pub struct MultiSelectState {
    pub options: Vec<String>,
    /// Parallel to `options`
    pub checked: Vec<bool>,
    /// Option under the cursor
    pub cursor: usize,
    pub focus: FocusState,
    original: String,
}

impl MultiSelectState {
    /// Create a checklist with the items of `raw` checked.
    ///
    /// Items of `raw` missing from `options` are appended so they stay
    /// visible and selectable.
    pub fn new(mut options: Vec<String>, raw: Option<&str>) -> Self {
        let original = raw.unwrap_or("").to_string();
        let selected: Vec<&str> = original
            .split(SEPARATOR)
            .map(str::trim)
            .filter(|item| !item.is_empty())
            .collect();
        for item in &selected {
            if !options.iter().any(|o| o == item) {
                options.push(item.to_string());
            }
        }
        let checked = options
            .iter()
            .map(|o| selected.contains(&o.as_str()))
            .collect();
        Self {
            options,
            checked,
            cursor: 0,
            focus: FocusState::Normal,
            original,
        }
    }

    pub fn with_focus(mut self, focus: FocusState) -> Self {
        self.focus = focus;
        self
    }

    pub fn is_enabled(&self) -> bool {
        self.focus != FocusState::Disabled
    }

    /// Check or uncheck the option under the cursor
    pub fn toggle_current(&mut self) -> Option<bool> {
        if !self.is_enabled() {
            return None;
        }
        let checked = self.checked.get_mut(self.cursor)?;
        *checked = !*checked;
        Some(*checked)
    }

    /// Checked options in option order
    pub fn selected(&self) -> Vec<&str> {
        self.options
            .iter()
            .zip(&self.checked)
            .filter(|(_, checked)| **checked)
            .map(|(o, _)| o.as_str())
            .collect()
    }

    /// The value as a config string.
    ///
    /// The original text is kept while the checked items match it.
    pub fn value_string(&self) -> String {
        let selected = self.selected();
        if selected == self.original_items() {
            return self.original.clone();
        }
        selected.join(&SEPARATOR.to_string())
    }

    /// Items of the original value in option order, without duplicates
    fn original_items(&self) -> Vec<&str> {
        let items: Vec<&str> = self.original.split(SEPARATOR).map(str::trim).collect();
        self.options
            .iter()
            .map(String::as_str)
            .filter(|o| items.contains(o))
            .collect()
    }

    /// Rows needed to show every option
    pub fn height(&self) -> u16 {
        self.options.len().max(1) as u16
    }

    /// Handle a keyboard event (when focused).
    ///
    /// Up on the first option and Down on the last are not consumed so the
    /// caller can move focus.
    pub fn handle_key(&mut self, key: KeyEvent) -> Option<MultiSelectEvent> {
        if !self.is_enabled() || self.focus != FocusState::Focused {
            return None;
        }

        match key.code {
            KeyCode::Char(' ') | KeyCode::Enter => {
                let checked = self.toggle_current()?;
                Some(MultiSelectEvent::Toggled(self.cursor, checked))
            }
            KeyCode::Up if self.cursor > 0 => {
                self.cursor -= 1;
                Some(MultiSelectEvent::CursorMoved(self.cursor))
            }
            KeyCode::Down if self.cursor + 1 < self.options.len() => {
                self.cursor += 1;
                Some(MultiSelectEvent::CursorMoved(self.cursor))
            }
            _ => None,
        }
    }
}

/// Colors for the multi-select control
#[derive(Debug, Clone, Copy)]
pub struct MultiSelectColors {
    pub bracket: Color,
    pub checkmark: Color,
    pub label: Color,
    pub focused: Color,
    pub disabled: Color,
}

impl Default for MultiSelectColors {
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

impl MultiSelectColors {
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
