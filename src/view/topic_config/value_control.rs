//! The inline editor for an entry's value, chosen by its front-end format

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::layout::Rect;
use ratatui::Frame;

use crate::model::FrontendFormat;
use crate::view::controls::{
    render_dropdown, render_multi_select, render_number_input, render_text_input, render_toggle,
    DropdownColors, DropdownState, FocusState, MultiSelectColors, MultiSelectState,
    NumberInputColors, NumberInputState, NumberKind, TextInputColors, TextInputEvent,
    TextInputState, ToggleColors, ToggleState,
};
use crate::view::theme::Theme;

/// Most checklist rows shown at once
const MAX_MULTI_SELECT_ROWS: u16 = 8;

/// Width of text fields inside the dialog
const TEXT_FIELD_WIDTH: u16 = 40;

/// Editing control bound to the dialog's draft value
#[derive(Debug, Clone)]
pub enum ValueControl {
    Toggle {
        state: ToggleState,
        /// Text the toggle was created from
        original: String,
    },
    Dropdown(DropdownState),
    MultiSelect(MultiSelectState),
    Number(NumberInputState),
    /// Masked text
    Password(TextInputState),
    Text(TextInputState),
}

impl ValueControl {
    /// Build the control for an entry's front-end format
    pub fn for_entry(format: FrontendFormat, enum_values: &[String], value: Option<&str>) -> Self {
        let text = value.unwrap_or("");
        match format {
            FrontendFormat::Boolean => ValueControl::Toggle {
                state: ToggleState::from_value(text),
                original: text.to_string(),
            },
            FrontendFormat::Select => {
                ValueControl::Dropdown(DropdownState::for_value(enum_values.to_vec(), text))
            }
            FrontendFormat::MultiSelect => {
                ValueControl::MultiSelect(MultiSelectState::new(enum_values.to_vec(), value))
            }
            FrontendFormat::ByteSize => {
                ValueControl::Number(NumberInputState::new(value, NumberKind::Bytes))
            }
            FrontendFormat::Duration => {
                ValueControl::Number(NumberInputState::new(value, NumberKind::Duration))
            }
            FrontendFormat::Ratio => {
                ValueControl::Number(NumberInputState::new(value, NumberKind::Ratio))
            }
            FrontendFormat::Integer => {
                ValueControl::Number(NumberInputState::new(value, NumberKind::Integer))
            }
            FrontendFormat::Decimal => {
                ValueControl::Number(NumberInputState::new(value, NumberKind::Decimal))
            }
            FrontendFormat::Password => {
                ValueControl::Password(TextInputState::new(text, "").with_masked(true))
            }
            FrontendFormat::String => ValueControl::Text(TextInputState::new(text, "")),
        }
    }

    /// The draft value as it would be sent to the API
    pub fn value_string(&self) -> String {
        match self {
            ValueControl::Toggle { state, original } => {
                // An unchanged toggle keeps the original spelling
                if ToggleState::from_value(original).checked == state.checked {
                    original.clone()
                } else {
                    state.value().to_string()
                }
            }
            ValueControl::Dropdown(state) => state.selected_value().unwrap_or("").to_string(),
            ValueControl::MultiSelect(state) => state.value_string(),
            ValueControl::Number(state) => state.value_string(),
            ValueControl::Password(state) | ValueControl::Text(state) => state.value.clone(),
        }
    }

    pub fn focus(&self) -> FocusState {
        match self {
            ValueControl::Toggle { state, .. } => state.focus,
            ValueControl::Dropdown(state) => state.focus,
            ValueControl::MultiSelect(state) => state.focus,
            ValueControl::Number(state) => state.focus,
            ValueControl::Password(state) | ValueControl::Text(state) => state.focus,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.focus() != FocusState::Disabled
    }

    /// Update the focus state, finishing any open sub-editor when focus leaves
    pub fn set_focus(&mut self, focus: FocusState) {
        match self {
            ValueControl::Toggle { state, .. } => state.focus = focus,
            ValueControl::Dropdown(state) => {
                if focus != FocusState::Focused && state.open {
                    state.confirm();
                }
                state.focus = focus;
            }
            ValueControl::MultiSelect(state) => state.focus = focus,
            ValueControl::Number(state) => {
                if focus != FocusState::Focused && state.editing() {
                    state.confirm_editing();
                }
                state.focus = focus;
            }
            ValueControl::Password(state) | ValueControl::Text(state) => state.focus = focus,
        }
    }

    /// Whether the control currently needs every key (open list, typing a number)
    pub fn is_capturing_input(&self) -> bool {
        match self {
            ValueControl::Dropdown(state) => state.open,
            ValueControl::Number(state) => state.editing(),
            _ => false,
        }
    }

    /// Offer a key to the control; returns whether it was consumed.
    ///
    /// Text fields keep every key except focus movement and Enter, which
    /// is left to the dialog.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        match self {
            ValueControl::Toggle { state, .. } => state.handle_key(key).is_some(),
            ValueControl::Dropdown(state) => {
                let capturing = state.open;
                state.handle_key(key).is_some() || capturing
            }
            ValueControl::MultiSelect(state) => state.handle_key(key).is_some(),
            ValueControl::Number(state) => {
                let capturing = state.editing();
                state.handle_key(key).is_some() || capturing
            }
            ValueControl::Password(state) | ValueControl::Text(state) => {
                if matches!(
                    key.code,
                    KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down
                ) || !state.is_enabled()
                    || state.focus != FocusState::Focused
                {
                    return false;
                }
                !matches!(state.handle_key(key), Some(TextInputEvent::Submitted(_)))
            }
        }
    }

    /// Offer pasted text to the control; only text fields accept it
    pub fn handle_paste(&mut self, text: &str) -> bool {
        match self {
            ValueControl::Password(state) | ValueControl::Text(state) => {
                state.handle_paste(text).is_some()
            }
            _ => false,
        }
    }

    /// Rows the control needs
    pub fn height(&self) -> u16 {
        match self {
            ValueControl::Dropdown(state) => state.height(),
            ValueControl::MultiSelect(state) => state.height().min(MAX_MULTI_SELECT_ROWS),
            _ => 1,
        }
    }

    /// Render the control, returning the terminal cursor position if it has one
    pub fn render(&self, frame: &mut Frame, area: Rect, theme: &Theme) -> Option<(u16, u16)> {
        match self {
            ValueControl::Toggle { state, .. } => {
                render_toggle(frame, area, state, &ToggleColors::from_theme(theme));
                None
            }
            ValueControl::Dropdown(state) => {
                render_dropdown(frame, area, state, &DropdownColors::from_theme(theme));
                None
            }
            ValueControl::MultiSelect(state) => {
                render_multi_select(frame, area, state, &MultiSelectColors::from_theme(theme));
                None
            }
            ValueControl::Number(state) => {
                render_number_input(frame, area, state, &NumberInputColors::from_theme(theme))
            }
            ValueControl::Password(state) | ValueControl::Text(state) => {
                let width = TEXT_FIELD_WIDTH.min(area.width.saturating_sub(2));
                render_text_input(frame, area, state, &TextInputColors::from_theme(theme), width)
                    .cursor_pos
            }
        }
    }
}
