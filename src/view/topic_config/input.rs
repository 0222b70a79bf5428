//! Keyboard handling for the configuration editor

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::dialog::DialogAction;
use super::state::{CommitRequest, ConfigurationEditor, NotificationKind};
use crate::view::controls::TextInputEvent;

/// Entries moved by PageUp/PageDown
const PAGE_SIZE: isize = 10;

/// What the application loop should do after a key
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditorAction {
    None,
    Quit,
    /// Send the request and report back with `complete_commit`
    Commit(CommitRequest),
}

impl ConfigurationEditor {
    /// Handle a key press.
    ///
    /// The dialog, when open, takes every key. Otherwise the filter input
    /// takes keys while active, and the list handles the rest.
    pub fn handle_key(&mut self, key: KeyEvent) -> EditorAction {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        if ctrl && key.code == KeyCode::Char('c') {
            return EditorAction::Quit;
        }

        if let Some(dialog) = self.dialog.as_mut() {
            match dialog.handle_key(key) {
                DialogAction::Confirm => {
                    return self
                        .confirm()
                        .map_or(EditorAction::None, EditorAction::Commit);
                }
                DialogAction::Cancel => self.cancel_dialog(),
                DialogAction::None => {}
            }
            return EditorAction::None;
        }

        if self.filter_active {
            self.handle_filter_key(key);
            return EditorAction::None;
        }

        self.notification = None;
        match key.code {
            KeyCode::Char('q') => return EditorAction::Quit,
            KeyCode::Char('/') => self.start_filter(),
            KeyCode::Up | KeyCode::Char('k') => self.select_prev(),
            KeyCode::Down | KeyCode::Char('j') => self.select_next(),
            KeyCode::PageUp => self.move_selection(-PAGE_SIZE),
            KeyCode::PageDown => self.move_selection(PAGE_SIZE),
            KeyCode::Home => self.select_first(),
            KeyCode::End => self.select_last(),
            KeyCode::Enter | KeyCode::Char('e') => {
                self.edit_selected();
            }
            KeyCode::Char('i') => self.toggle_info(),
            KeyCode::Esc => self.show_info = false,
            KeyCode::Char('r') => {
                self.notify(NotificationKind::Info, "Refreshing...");
                self.request_refresh();
            }
            _ => {}
        }
        EditorAction::None
    }

    fn handle_filter_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter | KeyCode::Esc => self.stop_filter(),
            KeyCode::Up => self.select_prev(),
            KeyCode::Down => self.select_next(),
            _ => {
                if let Some(TextInputEvent::Changed(_)) = self.filter.handle_key(key) {
                    self.selected = 0;
                    self.scroll_offset = 0;
                }
            }
        }
    }

    /// Handle pasted text
    pub fn handle_paste(&mut self, text: &str) {
        if let Some(dialog) = self.dialog.as_mut() {
            dialog.handle_paste(text);
        } else if self.filter_active && self.filter.handle_paste(text).is_some() {
            self.selected = 0;
            self.scroll_offset = 0;
        }
    }
}
