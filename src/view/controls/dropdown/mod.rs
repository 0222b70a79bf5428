//! Dropdown selection control
//!
//! Renders as: `[Selected Option ▼]`, with the option list below it while
//! open.

mod input;
mod render;

use ratatui::style::Color;

pub use input::DropdownEvent;
pub use render::render_dropdown;

use super::FocusState;

/// State for a dropdown control
#[derive(Debug, Clone)]
pub struct DropdownState {
    /// Currently selected index
    pub selected: usize,
    /// Options; each one is both shown and stored
    pub options: Vec<String>,
    /// Whether the option list is currently open
    pub open: bool,
    /// Focus state
    pub focus: FocusState,
    /// Selection when the list opened (for cancel/restore)
    original_selected: Option<usize>,
    /// Scroll offset for long option lists
    pub scroll_offset: usize,
    /// Maximum visible options while open
    pub max_visible: usize,
}

impl DropdownState {
    /// Create a new dropdown with the first option selected
    pub fn new(options: Vec<String>) -> Self {
        Self {
            selected: 0,
            options,
            open: false,
            focus: FocusState::Normal,
            original_selected: None,
            scroll_offset: 0,
            max_visible: 6,
        }
    }

    /// Create a dropdown selecting `value`.
    ///
    /// A value missing from `options` is inserted at the front so the
    /// current setting stays selectable.
    pub fn for_value(mut options: Vec<String>, value: &str) -> Self {
        let selected = match options.iter().position(|o| o == value) {
            Some(index) => index,
            None => {
                options.insert(0, value.to_string());
                0
            }
        };
        let mut state = Self::new(options);
        state.selected = selected;
        state.ensure_visible();
        state
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

    /// Get the currently selected value
    pub fn selected_value(&self) -> Option<&str> {
        self.options.get(self.selected).map(|s| s.as_str())
    }

    /// Toggle the option list open/closed
    pub fn toggle_open(&mut self) {
        if self.is_enabled() {
            if !self.open {
                self.original_selected = Some(self.selected);
            } else {
                self.original_selected = None;
            }
            self.open = !self.open;
        }
    }

    /// Cancel the dropdown (restore original selection and close)
    pub fn cancel(&mut self) {
        if let Some(original) = self.original_selected.take() {
            self.selected = original;
        }
        self.open = false;
        self.ensure_visible();
    }

    /// Confirm the selection and close
    pub fn confirm(&mut self) {
        self.original_selected = None;
        self.open = false;
    }

    /// Select the next option
    pub fn select_next(&mut self) {
        if self.is_enabled() && !self.options.is_empty() {
            self.selected = (self.selected + 1) % self.options.len();
            self.ensure_visible();
        }
    }

    /// Select the previous option
    pub fn select_prev(&mut self) {
        if self.is_enabled() && !self.options.is_empty() {
            self.selected = if self.selected == 0 {
                self.options.len() - 1
            } else {
                self.selected - 1
            };
            self.ensure_visible();
        }
    }

    /// Ensure the selected item is visible within the scroll view
    pub fn ensure_visible(&mut self) {
        if self.max_visible == 0 || self.options.len() <= self.max_visible {
            self.scroll_offset = 0;
            return;
        }

        if self.selected < self.scroll_offset {
            self.scroll_offset = self.selected;
        } else if self.selected >= self.scroll_offset + self.max_visible {
            self.scroll_offset = self.selected.saturating_sub(self.max_visible - 1);
        }
    }

    /// Rows the control needs: one closed, plus the visible options when open
    pub fn height(&self) -> u16 {
        if self.open {
            1 + self.options.len().min(self.max_visible) as u16
        } else {
            1
        }
    }
}

/// Colors for the dropdown control
#[derive(Debug, Clone, Copy)]
pub struct DropdownColors {
    /// Selected option text color
    pub selected: Color,
    /// Border/bracket color
    pub border: Color,
    /// Arrow indicator color
    pub arrow: Color,
    /// Option text in the open list
    pub option: Color,
    /// Highlighted option background
    pub highlight_bg: Color,
    /// Focused highlight color
    pub focused: Color,
    /// Disabled color
    pub disabled: Color,
}

impl Default for DropdownColors {
    fn default() -> Self {
        Self {
            selected: Color::White,
            border: Color::Gray,
            arrow: Color::DarkGray,
            option: Color::White,
            highlight_bg: Color::Rgb(58, 79, 120),
            focused: Color::Cyan,
            disabled: Color::DarkGray,
        }
    }
}

impl DropdownColors {
    /// Create colors from theme
    pub fn from_theme(theme: &crate::view::theme::Theme) -> Self {
        Self {
            selected: theme.popup_text_fg,
            border: theme.popup_border_fg,
            arrow: theme.line_number_fg,
            option: theme.popup_text_fg,
            highlight_bg: theme.popup_selection_bg,
            focused: theme.help_key_fg,
            disabled: theme.line_number_fg,
        }
    }
}
