//! Form controls used by the edit dialog
//!
//! Each control owns its state, handles keyboard input when focused and
//! renders itself into a single-line area. Mouse input is not supported.

pub mod button;
pub mod dropdown;
pub mod multi_select;
pub mod number_input;
pub mod text_input;
pub mod toggle;

pub use button::{render_button, render_button_row, ButtonColors, ButtonState};
pub use dropdown::{render_dropdown, DropdownColors, DropdownEvent, DropdownState};
pub use multi_select::{render_multi_select, MultiSelectColors, MultiSelectEvent, MultiSelectState};
pub use number_input::{
    render_number_input, NumberInputColors, NumberInputEvent, NumberInputState, NumberKind,
};
pub use text_input::{
    render_text_input, TextInputColors, TextInputEvent, TextInputLayout, TextInputState,
};
pub use toggle::{render_toggle, ToggleColors, ToggleEvent, ToggleState};

/// Focus state shared by all controls
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusState {
    /// Enabled, not focused
    #[default]
    Normal,
    /// Receives keyboard input
    Focused,
    /// Inert: ignores input and renders dimmed
    Disabled,
}
