//! Configuration editor state
//!
//! Owns the entry snapshot, the filter, the selection and the edit dialog,
//! and implements the commit logic. Rendering reads this state every frame.

use super::dialog::EditDialogState;
use super::row::ConfigEntryRow;
use crate::model::{
    build_groups, edit_permission, ConfigEntry, ConfigGroup, DeploymentMode, EditPermission,
};
use crate::services::{ApiError, ConfigApi, ConfigOperation};
use crate::view::controls::{FocusState, TextInputState};

/// Callback that asks the owner to refetch entries
pub type RefreshCallback = Box<dyn FnMut() + Send>;

/// Severity of a status notification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Info,
    Success,
    Error,
}

/// One-line message shown in the status bar
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub message: String,
}

/// A confirmed edit waiting to be sent
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitRequest {
    /// `None` for the cluster-wide defaults
    pub topic: Option<String>,
    pub operations: Vec<ConfigOperation>,
}

/// Root state of the settings screen
pub struct ConfigurationEditor {
    topic: Option<String>,
    entries: Vec<ConfigEntry>,
    /// Filter text input
    pub filter: TextInputState,
    /// Whether keys go to the filter input
    pub filter_active: bool,
    /// Index into the visible entries
    pub selected: usize,
    /// First visible list line (set during render)
    pub scroll_offset: usize,
    has_edit_permissions: bool,
    deployment_mode: DeploymentMode,
    /// The open edit dialog, at most one
    pub dialog: Option<EditDialogState>,
    pub notification: Option<Notification>,
    /// Whether the info popover for the selected entry is showing
    pub show_info: bool,
    /// Entries are still being fetched
    pub loading: bool,
    on_force_refresh: RefreshCallback,
}

impl std::fmt::Debug for ConfigurationEditor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConfigurationEditor")
            .field("topic", &self.topic)
            .field("entries", &self.entries.len())
            .field("filter", &self.filter.value)
            .field("selected", &self.selected)
            .field("dialog", &self.dialog.as_ref().map(|d| &d.entry_name))
            .finish()
    }
}

impl ConfigurationEditor {
    /// Create an editor for a topic (`None` = cluster defaults)
    pub fn new(
        topic: Option<String>,
        entries: Vec<ConfigEntry>,
        on_force_refresh: RefreshCallback,
    ) -> Self {
        Self {
            topic,
            entries,
            filter: TextInputState::new("", "Filter").with_placeholder("press / to filter"),
            filter_active: false,
            selected: 0,
            scroll_offset: 0,
            has_edit_permissions: true,
            deployment_mode: crate::services::deployment::current_mode(),
            dialog: None,
            notification: None,
            show_info: false,
            loading: false,
            on_force_refresh,
        }
    }

    /// Override the deployment mode captured at construction
    pub fn with_deployment_mode(mut self, mode: DeploymentMode) -> Self {
        self.deployment_mode = mode;
        self
    }

    pub fn with_edit_permissions(mut self, has_edit_permissions: bool) -> Self {
        self.has_edit_permissions = has_edit_permissions;
        self
    }

    pub fn topic(&self) -> Option<&str> {
        self.topic.as_deref()
    }

    pub fn entries(&self) -> &[ConfigEntry] {
        &self.entries
    }

    pub fn deployment_mode(&self) -> DeploymentMode {
        self.deployment_mode
    }

    pub fn has_edit_permissions(&self) -> bool {
        self.has_edit_permissions
    }

    pub fn set_edit_permissions(&mut self, has_edit_permissions: bool) {
        if self.has_edit_permissions != has_edit_permissions {
            tracing::info!(has_edit_permissions, "Edit permissions updated");
        }
        self.has_edit_permissions = has_edit_permissions;
    }

    /// Replace the entry snapshot, keeping the selection on the same key
    pub fn replace_entries(&mut self, entries: Vec<ConfigEntry>) {
        let selected_name = self.selected_entry().map(|e| e.name.clone());
        self.entries = entries;
        self.loading = false;
        self.selected = selected_name
            .and_then(|name| self.visible_entries().iter().position(|e| e.name == name))
            .unwrap_or(0);
        self.clamp_selection();
        tracing::debug!(count = self.entries.len(), "Entries replaced");
    }

    /// The current filter text
    pub fn filter_text(&self) -> &str {
        &self.filter.value
    }

    pub fn set_filter(&mut self, text: impl Into<String>) {
        self.filter.set_value(text);
        self.selected = 0;
        self.scroll_offset = 0;
    }

    /// Route keys to the filter input
    pub fn start_filter(&mut self) {
        self.filter_active = true;
        self.filter.focus = FocusState::Focused;
        self.show_info = false;
    }

    pub fn stop_filter(&mut self) {
        self.filter_active = false;
        self.filter.focus = FocusState::Normal;
    }

    /// Filtered, sorted and grouped entries
    pub fn groups(&self) -> Vec<ConfigGroup<'_>> {
        build_groups(&self.entries, &self.filter.value)
    }

    /// Visible entries in display order
    pub fn visible_entries(&self) -> Vec<&ConfigEntry> {
        self.groups()
            .into_iter()
            .flat_map(|group| group.entries)
            .collect()
    }

    pub fn selected_entry(&self) -> Option<&ConfigEntry> {
        self.visible_entries().get(self.selected).copied()
    }

    /// Edit permission for an entry under the current policy inputs
    pub fn permission_for(&self, entry: &ConfigEntry) -> EditPermission {
        edit_permission(&entry.name, self.has_edit_permissions, self.deployment_mode)
    }

    /// Row model for an entry
    pub fn row<'a>(&self, entry: &'a ConfigEntry) -> ConfigEntryRow<'a> {
        ConfigEntryRow::new(entry, self.permission_for(entry))
    }

    pub fn select_next(&mut self) {
        self.move_selection(1);
    }

    pub fn select_prev(&mut self) {
        self.move_selection(-1);
    }

    /// Move the selection by `delta`, clamped to the list
    pub fn move_selection(&mut self, delta: isize) {
        let count = self.visible_entries().len();
        if count == 0 {
            self.selected = 0;
            return;
        }
        let target = self.selected as isize + delta;
        self.selected = target.clamp(0, count as isize - 1) as usize;
    }

    pub fn select_first(&mut self) {
        self.selected = 0;
    }

    pub fn select_last(&mut self) {
        self.selected = self.visible_entries().len().saturating_sub(1);
    }

    fn clamp_selection(&mut self) {
        let count = self.visible_entries().len();
        if self.selected >= count {
            self.selected = count.saturating_sub(1);
        }
    }

    /// Open the edit dialog for an entry, replacing any open dialog
    pub fn edit_config(&mut self, entry: &ConfigEntry) {
        tracing::debug!(key = %entry.name, "Opening edit dialog");
        self.show_info = false;
        self.dialog = Some(EditDialogState::new(entry));
    }

    /// Open the dialog for the selected entry if the policy allows it.
    ///
    /// A denied entry leaves the dialog closed and shows the reason.
    pub fn edit_selected(&mut self) -> bool {
        let Some(entry) = self.selected_entry().cloned() else {
            return false;
        };
        match self.permission_for(&entry) {
            EditPermission::Allowed => {
                self.edit_config(&entry);
                true
            }
            EditPermission::Denied(reason) => {
                self.notify(NotificationKind::Error, reason.message());
                false
            }
        }
    }

    /// Toggle the info popover for the selected entry
    pub fn toggle_info(&mut self) {
        let has_info = self
            .selected_entry()
            .is_some_and(|e| e.documentation().is_some());
        self.show_info = has_info && !self.show_info;
    }

    pub fn notify(&mut self, kind: NotificationKind, message: impl Into<String>) {
        self.notification = Some(Notification {
            kind,
            message: message.into(),
        });
    }

    /// Confirm the open dialog.
    ///
    /// Returns the request to send when the edit changes something; an
    /// unchanged edit just closes the dialog. Nothing happens while a
    /// commit is already pending.
    pub fn confirm(&mut self) -> Option<CommitRequest> {
        let dialog = self.dialog.as_mut()?;
        if dialog.pending {
            return None;
        }
        let Some(operation) = dialog.commit_operation() else {
            tracing::debug!(key = %dialog.entry_name, "Nothing to apply, closing dialog");
            self.dialog = None;
            return None;
        };
        tracing::info!(key = %dialog.entry_name, ?operation, "Applying config change");
        dialog.begin_commit();
        Some(CommitRequest {
            topic: self.topic.clone(),
            operations: vec![operation],
        })
    }

    /// Finish a commit started by [`ConfigurationEditor::confirm`].
    ///
    /// On success the dialog closes and the refresh callback runs once. On
    /// failure the message is shown in the dialog, which stays open, and
    /// the error is handed back to the caller.
    pub fn complete_commit(&mut self, result: Result<(), ApiError>) -> Result<(), ApiError> {
        match result {
            Ok(()) => {
                let name = self.dialog.take().map(|d| d.entry_name).unwrap_or_default();
                tracing::info!(key = %name, "Config change applied");
                self.notify(
                    NotificationKind::Success,
                    format!("Successfully updated config {}", name),
                );
                (self.on_force_refresh)();
                Ok(())
            }
            Err(err) => {
                tracing::warn!("Config change failed: {}", err);
                if let Some(dialog) = self.dialog.as_mut() {
                    dialog.fail_commit(err.message());
                }
                Err(err)
            }
        }
    }

    /// Confirm the dialog and run the resulting commit against `api`
    pub async fn submit(&mut self, api: &dyn ConfigApi) -> Result<(), ApiError> {
        let Some(request) = self.confirm() else {
            return Ok(());
        };
        let result = api
            .alter_config(request.topic.as_deref(), request.operations)
            .await;
        self.complete_commit(result)
    }

    /// Close the dialog through its Cancel button; ignored while pending
    pub fn cancel_dialog(&mut self) {
        if self.dialog.as_ref().is_some_and(|d| !d.pending) {
            tracing::debug!("Edit dialog cancelled");
            self.dialog = None;
        }
    }

    /// Ask the owner to refetch entries
    pub fn request_refresh(&mut self) {
        self.loading = true;
        (self.on_force_refresh)();
    }
}
