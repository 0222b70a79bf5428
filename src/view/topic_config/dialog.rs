//! Modal dialog for changing a single entry
//!
//! The dialog owns the draft value. It offers two mutually exclusive modes,
//! falling back to the inherited default or using a custom value edited
//! inline, and only produces an API operation on explicit confirmation.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::value_control::ValueControl;
use crate::model::{format_config_value, ConfigEntry, ConfigSource, FormatMode};
use crate::services::ConfigOperation;
use crate::view::controls::FocusState;

/// Which value the entry should end up with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditMode {
    /// Remove the override and inherit the default
    Default,
    /// Set the value from the inline editor
    Custom,
}

/// Focus stops inside the dialog, in tab order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogFocus {
    DefaultOption,
    CustomOption,
    Value,
    Ok,
    Cancel,
}

impl DialogFocus {
    const ORDER: [DialogFocus; 5] = [
        DialogFocus::DefaultOption,
        DialogFocus::CustomOption,
        DialogFocus::Value,
        DialogFocus::Ok,
        DialogFocus::Cancel,
    ];
}

/// What the owner of the dialog should do after a key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogAction {
    None,
    Confirm,
    Cancel,
}

/// State for the edit dialog
#[derive(Debug, Clone)]
pub struct EditDialogState {
    pub entry_name: String,
    /// Last committed value ("" when absent)
    pub original_value: String,
    pub default_value: Option<String>,
    pub default_source: ConfigSource,
    /// Default value as shown to the user
    pub default_display: String,
    pub documentation: Option<String>,
    pub initial_mode: EditMode,
    pub mode: EditMode,
    pub control: ValueControl,
    /// Message of the last failed commit
    pub error: Option<String>,
    /// A commit is in flight
    pub pending: bool,
    pub focus: DialogFocus,
}

impl EditDialogState {
    /// Open the dialog for an entry.
    ///
    /// The draft starts at the entry's value. Explicitly set entries start
    /// in Custom mode, everything else in Default mode.
    pub fn new(entry: &ConfigEntry) -> Self {
        let default = entry.inherited_default();
        let default_display =
            format_config_value(&entry.name, default.value.as_deref(), FormatMode::Friendly);
        let initial_mode = if entry.is_explicitly_set {
            EditMode::Custom
        } else {
            EditMode::Default
        };

        let mut dialog = Self {
            entry_name: entry.name.clone(),
            original_value: entry.value_str().to_string(),
            default_value: default.value,
            default_source: default.source,
            default_display,
            documentation: entry.documentation().map(String::from),
            initial_mode,
            mode: initial_mode,
            control: ValueControl::for_entry(
                entry.frontend_format,
                &entry.enum_values,
                entry.value.as_deref(),
            ),
            error: None,
            pending: false,
            focus: match initial_mode {
                EditMode::Default => DialogFocus::DefaultOption,
                EditMode::Custom => DialogFocus::CustomOption,
            },
        };
        dialog.sync_control_focus();
        dialog
    }

    /// The draft value as a string
    pub fn draft(&self) -> String {
        self.control.value_string()
    }

    /// Switch mode; the value editor is inert unless the mode is Custom
    pub fn set_mode(&mut self, mode: EditMode) {
        if self.pending || self.mode == mode {
            return;
        }
        tracing::debug!(key = %self.entry_name, ?mode, "Edit mode changed");
        self.mode = mode;
        if mode == EditMode::Default && self.focus == DialogFocus::Value {
            self.focus = DialogFocus::DefaultOption;
        }
        self.sync_control_focus();
    }

    /// Whether confirming should call the API
    pub fn needs_apply(&self) -> bool {
        self.mode != self.initial_mode
            || (self.mode == EditMode::Custom && self.draft() != self.original_value)
    }

    /// The single operation a confirmation sends, if any
    pub fn commit_operation(&self) -> Option<ConfigOperation> {
        if !self.needs_apply() {
            return None;
        }
        Some(match self.mode {
            EditMode::Custom => ConfigOperation::Set {
                key: self.entry_name.clone(),
                value: self.draft(),
            },
            EditMode::Default => ConfigOperation::Delete {
                key: self.entry_name.clone(),
            },
        })
    }

    /// Mark a commit as started; clears the previous error
    pub fn begin_commit(&mut self) {
        self.pending = true;
        self.error = None;
    }

    /// Record a failed commit; the draft is left as it was
    pub fn fail_commit(&mut self, message: impl Into<String>) {
        self.pending = false;
        self.error = Some(message.into());
    }

    pub fn focus_next(&mut self) {
        self.move_focus(1);
    }

    pub fn focus_prev(&mut self) {
        self.move_focus(DialogFocus::ORDER.len() - 1);
    }

    fn move_focus(&mut self, step: usize) {
        let len = DialogFocus::ORDER.len();
        let mut index = DialogFocus::ORDER
            .iter()
            .position(|f| *f == self.focus)
            .unwrap_or(0);
        loop {
            index = (index + step) % len;
            let candidate = DialogFocus::ORDER[index];
            if candidate != DialogFocus::Value || self.mode == EditMode::Custom {
                self.focus = candidate;
                break;
            }
        }
        self.sync_control_focus();
    }

    fn sync_control_focus(&mut self) {
        let focus = match (self.mode, self.focus) {
            (EditMode::Default, _) => FocusState::Disabled,
            (EditMode::Custom, DialogFocus::Value) => FocusState::Focused,
            (EditMode::Custom, _) => FocusState::Normal,
        };
        self.control.set_focus(focus);
    }

    /// Handle a key while the dialog is open.
    ///
    /// Keys reach the value editor only while it has focus, so editing the
    /// value never changes the mode. Escape is left to the editor (closing
    /// an open list); it never dismisses the dialog. Everything is ignored
    /// while a commit is pending.
    pub fn handle_key(&mut self, key: KeyEvent) -> DialogAction {
        if self.pending {
            return DialogAction::None;
        }

        if key.code == KeyCode::Char('s') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return DialogAction::Confirm;
        }

        if self.focus == DialogFocus::Value {
            // Open lists and numbers being typed consume every key
            if self.control.handle_key(key) {
                return DialogAction::None;
            }
            if key.code == KeyCode::Enter {
                return DialogAction::Confirm;
            }
        }

        match key.code {
            KeyCode::Tab | KeyCode::Down => {
                self.focus_next();
                DialogAction::None
            }
            KeyCode::BackTab | KeyCode::Up => {
                self.focus_prev();
                DialogAction::None
            }
            KeyCode::Enter | KeyCode::Char(' ') => match self.focus {
                DialogFocus::DefaultOption => {
                    self.set_mode(EditMode::Default);
                    DialogAction::None
                }
                DialogFocus::CustomOption => {
                    self.set_mode(EditMode::Custom);
                    DialogAction::None
                }
                DialogFocus::Ok => DialogAction::Confirm,
                DialogFocus::Cancel => DialogAction::Cancel,
                DialogFocus::Value => DialogAction::None,
            },
            _ => DialogAction::None,
        }
    }

    /// Paste goes to the value editor when it has focus
    pub fn handle_paste(&mut self, text: &str) {
        if !self.pending && self.focus == DialogFocus::Value {
            self.control.handle_paste(text);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ConfigSynonym, FrontendFormat};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::empty())
    }

    fn retention(explicit: bool) -> ConfigEntry {
        let mut entry = ConfigEntry::new("retention.ms", "86400000");
        entry.is_explicitly_set = explicit;
        entry.source = if explicit {
            ConfigSource::DynamicTopicConfig
        } else {
            ConfigSource::DefaultConfig
        };
        entry.frontend_format = FrontendFormat::Duration;
        entry.synonyms = vec![
            ConfigSynonym {
                name: "log.retention.ms".into(),
                value: Some("86400000".into()),
                source: ConfigSource::DynamicTopicConfig,
            },
            ConfigSynonym {
                name: "log.retention.hours".into(),
                value: Some("604800000".into()),
                source: ConfigSource::DefaultConfig,
            },
        ];
        entry
    }

    fn cleanup_policy() -> ConfigEntry {
        let mut entry = ConfigEntry::new("cleanup.policy", "delete");
        entry.is_explicitly_set = true;
        entry
    }

    #[test]
    fn test_initial_mode_follows_explicitly_set() {
        let dialog = EditDialogState::new(&retention(true));
        assert_eq!(dialog.initial_mode, EditMode::Custom);
        assert_eq!(dialog.focus, DialogFocus::CustomOption);
        assert!(dialog.control.is_enabled());

        let dialog = EditDialogState::new(&retention(false));
        assert_eq!(dialog.initial_mode, EditMode::Default);
        assert!(!dialog.control.is_enabled());
    }

    #[test]
    fn test_default_comes_from_last_synonym() {
        let dialog = EditDialogState::new(&retention(true));
        assert_eq!(dialog.default_value.as_deref(), Some("604800000"));
        assert_eq!(dialog.default_source, ConfigSource::DefaultConfig);
        assert_eq!(dialog.default_display, "7 days");
        assert_eq!(dialog.draft(), "86400000");
        assert!(dialog.error.is_none());
    }

    #[test]
    fn test_unchanged_confirm_needs_no_apply() {
        let dialog = EditDialogState::new(&retention(true));
        assert!(!dialog.needs_apply());
        assert_eq!(dialog.commit_operation(), None);

        let dialog = EditDialogState::new(&retention(false));
        assert_eq!(dialog.commit_operation(), None);
    }

    #[test]
    fn test_switch_to_default_deletes() {
        let mut dialog = EditDialogState::new(&retention(true));
        dialog.set_mode(EditMode::Default);
        assert_eq!(
            dialog.commit_operation(),
            Some(ConfigOperation::Delete {
                key: "retention.ms".into()
            })
        );
    }

    #[test]
    fn test_switch_to_custom_sets_draft_even_if_unchanged() {
        let mut dialog = EditDialogState::new(&retention(false));
        dialog.set_mode(EditMode::Custom);
        assert_eq!(
            dialog.commit_operation(),
            Some(ConfigOperation::Set {
                key: "retention.ms".into(),
                value: "86400000".into()
            })
        );
    }

    #[test]
    fn test_typing_custom_value_sets_it() {
        let mut dialog = EditDialogState::new(&cleanup_policy());
        dialog.handle_key(key(KeyCode::Tab));
        assert_eq!(dialog.focus, DialogFocus::Value);
        for c in ",compact".chars() {
            dialog.handle_key(key(KeyCode::Char(c)));
        }
        assert_eq!(dialog.mode, EditMode::Custom);
        assert_eq!(
            dialog.commit_operation(),
            Some(ConfigOperation::Set {
                key: "cleanup.policy".into(),
                value: "delete,compact".into()
            })
        );
    }

    #[test]
    fn test_space_in_value_does_not_change_mode() {
        let mut dialog = EditDialogState::new(&cleanup_policy());
        dialog.handle_key(key(KeyCode::Tab));
        dialog.handle_key(key(KeyCode::Char(' ')));
        assert_eq!(dialog.mode, EditMode::Custom);
        assert_eq!(dialog.draft(), "delete ");
    }

    #[test]
    fn test_focus_skips_value_in_default_mode() {
        let mut dialog = EditDialogState::new(&retention(false));
        assert_eq!(dialog.focus, DialogFocus::DefaultOption);
        dialog.focus_next();
        assert_eq!(dialog.focus, DialogFocus::CustomOption);
        dialog.focus_next();
        assert_eq!(dialog.focus, DialogFocus::Ok);
        dialog.focus_prev();
        assert_eq!(dialog.focus, DialogFocus::CustomOption);
        dialog.focus_prev();
        dialog.focus_prev();
        assert_eq!(dialog.focus, DialogFocus::Cancel);
    }

    #[test]
    fn test_selecting_default_moves_focus_off_value() {
        let mut dialog = EditDialogState::new(&retention(true));
        dialog.focus = DialogFocus::Value;
        dialog.set_mode(EditMode::Default);
        assert_eq!(dialog.focus, DialogFocus::DefaultOption);
        assert!(!dialog.control.is_enabled());
    }

    #[test]
    fn test_keyboard_mode_selection_and_buttons() {
        let mut dialog = EditDialogState::new(&retention(true));
        dialog.handle_key(key(KeyCode::BackTab));
        assert_eq!(dialog.focus, DialogFocus::DefaultOption);
        assert_eq!(dialog.handle_key(key(KeyCode::Char(' '))), DialogAction::None);
        assert_eq!(dialog.mode, EditMode::Default);

        dialog.handle_key(key(KeyCode::Tab));
        dialog.handle_key(key(KeyCode::Tab));
        assert_eq!(dialog.focus, DialogFocus::Ok);
        assert_eq!(dialog.handle_key(key(KeyCode::Enter)), DialogAction::Confirm);

        dialog.handle_key(key(KeyCode::Tab));
        assert_eq!(dialog.handle_key(key(KeyCode::Enter)), DialogAction::Cancel);
    }

    #[test]
    fn test_escape_never_dismisses() {
        let mut dialog = EditDialogState::new(&retention(true));
        for focus in DialogFocus::ORDER {
            dialog.focus = focus;
            assert_eq!(dialog.handle_key(key(KeyCode::Esc)), DialogAction::None);
        }
    }

    #[test]
    fn test_ctrl_s_confirms_from_anywhere() {
        let mut dialog = EditDialogState::new(&cleanup_policy());
        dialog.handle_key(key(KeyCode::Tab));
        let ctrl_s = KeyEvent::new(KeyCode::Char('s'), KeyModifiers::CONTROL);
        assert_eq!(dialog.handle_key(ctrl_s), DialogAction::Confirm);
        assert_eq!(dialog.draft(), "delete");
    }

    #[test]
    fn test_pending_ignores_input() {
        let mut dialog = EditDialogState::new(&cleanup_policy());
        dialog.begin_commit();
        dialog.focus = DialogFocus::Cancel;
        assert_eq!(dialog.handle_key(key(KeyCode::Enter)), DialogAction::None);
        dialog.set_mode(EditMode::Default);
        assert_eq!(dialog.mode, EditMode::Custom);
    }

    #[test]
    fn test_failed_commit_keeps_draft() {
        let mut dialog = EditDialogState::new(&cleanup_policy());
        dialog.handle_key(key(KeyCode::Tab));
        dialog.handle_key(key(KeyCode::Char('x')));
        dialog.begin_commit();
        dialog.fail_commit("invalid value");
        assert!(!dialog.pending);
        assert_eq!(dialog.error.as_deref(), Some("invalid value"));
        assert_eq!(dialog.draft(), "deletex");

        dialog.begin_commit();
        assert!(dialog.error.is_none());
    }

    #[test]
    fn test_typed_decimal_is_sent_unrounded() {
        let mut entry = ConfigEntry::new("min.cleanable.dirty.ratio.scale", "0.5");
        entry.is_explicitly_set = true;
        entry.frontend_format = FrontendFormat::Decimal;
        let mut dialog = EditDialogState::new(&entry);

        dialog.handle_key(key(KeyCode::Tab));
        assert_eq!(dialog.focus, DialogFocus::Value);
        dialog.handle_key(key(KeyCode::Enter));
        dialog.handle_key(KeyEvent::new(KeyCode::Char('u'), KeyModifiers::CONTROL));
        for c in "0.00000012".chars() {
            dialog.handle_key(key(KeyCode::Char(c)));
        }
        dialog.handle_key(key(KeyCode::Enter));

        assert_eq!(
            dialog.commit_operation(),
            Some(ConfigOperation::Set {
                key: "min.cleanable.dirty.ratio.scale".into(),
                value: "0.00000012".into()
            })
        );
    }

    #[test]
    fn test_absent_integer_sends_the_zero_it_shows() {
        let mut entry = ConfigEntry::new("max.message.count", "");
        entry.value = None;
        entry.frontend_format = FrontendFormat::Integer;
        let mut dialog = EditDialogState::new(&entry);
        assert_eq!(dialog.mode, EditMode::Default);

        dialog.set_mode(EditMode::Custom);
        assert_eq!(dialog.draft(), "0");
        assert_eq!(
            dialog.commit_operation(),
            Some(ConfigOperation::Set {
                key: "max.message.count".into(),
                value: "0".into()
            })
        );
    }
}
