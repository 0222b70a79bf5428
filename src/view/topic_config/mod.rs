//! Settings screen for a topic's configuration entries
//!
//! Shows the entries grouped by category with a filter, and edits one entry
//! at a time through a modal dialog that either applies a custom value or
//! reverts the entry to its inherited default.

pub mod dialog;
pub mod input;
pub mod render;
pub mod row;
pub mod state;
pub mod value_control;

pub use dialog::{DialogAction, DialogFocus, EditDialogState, EditMode};
pub use input::EditorAction;
pub use render::render_editor;
pub use row::ConfigEntryRow;
pub use state::{
    CommitRequest, ConfigurationEditor, Notification, NotificationKind, RefreshCallback,
};
pub use value_control::ValueControl;
