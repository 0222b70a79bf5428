//! Application shell around the configuration editor
//!
//! Owns the tokio runtime that API calls run on and the channel their
//! results come back through. The UI loop stays single threaded: it drains
//! the channel, draws, and feeds terminal events to the editor.

pub mod async_messages;

use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use crossterm::event::{self, Event, KeyEvent, KeyEventKind};
use ratatui::backend::Backend;
use ratatui::{Frame, Terminal};

pub use async_messages::AppMessage;

use crate::services::api::can_edit_topic_config;
use crate::services::ConfigApi;
use crate::view::theme::Theme;
use crate::view::topic_config::{
    render_editor, CommitRequest, ConfigurationEditor, EditorAction, NotificationKind,
};

/// How long to wait for a terminal event before checking the channel again
const POLL_INTERVAL: Duration = Duration::from_millis(50);

pub struct App {
    editor: ConfigurationEditor,
    api: Arc<dyn ConfigApi>,
    runtime: tokio::runtime::Runtime,
    sender: Sender<AppMessage>,
    receiver: Receiver<AppMessage>,
    theme: Theme,
    should_quit: bool,
}

impl App {
    /// Create the app and start loading entries and permissions
    pub fn new(
        topic: Option<String>,
        api: Arc<dyn ConfigApi>,
        theme: Theme,
    ) -> anyhow::Result<Self> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(2)
            .thread_name("topic-config-io")
            .enable_all()
            .build()
            .context("Failed to create tokio runtime")?;

        let (sender, receiver) = mpsc::channel();
        let refresh_sender = sender.clone();
        let mut editor = ConfigurationEditor::new(
            topic,
            Vec::new(),
            Box::new(move || {
                let _ = refresh_sender.send(AppMessage::RefreshRequested);
            }),
        );
        editor.loading = true;

        let app = Self {
            editor,
            api,
            runtime,
            sender,
            receiver,
            theme,
            should_quit: false,
        };
        app.load_entries();
        app.load_permissions();
        Ok(app)
    }

    pub fn editor(&self) -> &ConfigurationEditor {
        &self.editor
    }

    pub fn editor_mut(&mut self) -> &mut ConfigurationEditor {
        &mut self.editor
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    fn load_entries(&self) {
        let api = self.api.clone();
        let topic = self.editor.topic().map(String::from);
        let sender = self.sender.clone();
        tracing::info!(topic = ?topic, "Loading configuration entries");
        self.runtime.spawn(async move {
            let result = api.describe_config(topic.as_deref()).await;
            let _ = sender.send(AppMessage::EntriesLoaded(result));
        });
    }

    /// Cluster defaults have no per-topic permissions to look up
    fn load_permissions(&self) {
        let Some(topic) = self.editor.topic().map(String::from) else {
            return;
        };
        let api = self.api.clone();
        let sender = self.sender.clone();
        self.runtime.spawn(async move {
            let result = api.topic_permissions(&topic).await;
            let _ = sender.send(AppMessage::PermissionsLoaded(result));
        });
    }

    fn start_commit(&self, request: CommitRequest) {
        let api = self.api.clone();
        let sender = self.sender.clone();
        self.runtime.spawn(async move {
            let result = api
                .alter_config(request.topic.as_deref(), request.operations)
                .await;
            let _ = sender.send(AppMessage::CommitFinished(result));
        });
    }

    /// Apply every pending background result. Returns true if anything changed.
    pub fn process_async_messages(&mut self) -> bool {
        let mut changed = false;
        while let Ok(message) = self.receiver.try_recv() {
            self.handle_message(message);
            changed = true;
        }
        changed
    }

    fn handle_message(&mut self, message: AppMessage) {
        match message {
            AppMessage::EntriesLoaded(Ok(entries)) => {
                tracing::info!(count = entries.len(), "Configuration entries loaded");
                self.editor.replace_entries(entries);
            }
            AppMessage::EntriesLoaded(Err(e)) => {
                tracing::warn!("Failed to load configuration: {}", e);
                self.editor.loading = false;
                self.editor.notify(
                    NotificationKind::Error,
                    format!("Failed to load configuration: {}", e.message()),
                );
            }
            AppMessage::PermissionsLoaded(Ok(permissions)) => {
                self.editor
                    .set_edit_permissions(can_edit_topic_config(permissions.as_ref()));
            }
            AppMessage::PermissionsLoaded(Err(e)) => {
                tracing::warn!("Failed to load topic permissions: {}", e);
            }
            AppMessage::CommitFinished(result) => {
                // failures are shown in the dialog
                let _ = self.editor.complete_commit(result);
            }
            AppMessage::RefreshRequested => {
                self.editor.loading = true;
                self.load_entries();
                self.load_permissions();
            }
        }
    }

    /// Block until at least one message arrives or `timeout` passes
    pub fn wait_for_messages(&mut self, timeout: Duration) -> bool {
        match self.receiver.recv_timeout(timeout) {
            Ok(message) => {
                self.handle_message(message);
                self.process_async_messages();
                true
            }
            Err(_) => false,
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        match self.editor.handle_key(key) {
            EditorAction::Quit => {
                tracing::info!("Quit requested");
                self.should_quit = true;
            }
            EditorAction::Commit(request) => self.start_commit(request),
            EditorAction::None => {}
        }
    }

    pub fn handle_paste(&mut self, text: &str) {
        self.editor.handle_paste(text);
    }

    pub fn render(&mut self, frame: &mut Frame) {
        let area = frame.area();
        render_editor(frame, area, &mut self.editor, &self.theme);
    }

    /// Run the UI loop until the user quits
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> anyhow::Result<()> {
        let mut needs_render = true;
        loop {
            if self.process_async_messages() {
                needs_render = true;
            }
            if self.should_quit {
                break;
            }

            if needs_render {
                terminal.draw(|frame| self.render(frame))?;
                needs_render = false;
            }

            if !event::poll(POLL_INTERVAL)? {
                continue;
            }
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    self.handle_key(key);
                    needs_render = true;
                }
                Event::Paste(text) => {
                    self.handle_paste(&text);
                    needs_render = true;
                }
                Event::Resize(_, _) => needs_render = true,
                _ => {}
            }
        }
        Ok(())
    }
}
