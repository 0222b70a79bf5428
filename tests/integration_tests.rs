// Integration tests - the editor and the app shell against a recording API

mod common;

use common::{editor_with_counter, sample_entries, AlterCall, RecordingApi};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::backend::TestBackend;
use ratatui::Terminal;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use std::time::{Duration, Instant};
use topic_config::app::App;
use topic_config::model::DenyReason;
use topic_config::services::{ApiError, ConfigOperation, TopicPermissions};
use topic_config::view::theme::Theme;
use topic_config::view::topic_config::{ConfigurationEditor, EditMode, NotificationKind};

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::empty())
}

fn ctrl(c: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
}

/// Select an entry by name
fn select(editor: &mut ConfigurationEditor, name: &str) {
    editor.selected = editor
        .visible_entries()
        .iter()
        .position(|e| e.name == name)
        .unwrap();
}

#[tokio::test]
async fn test_custom_text_value_sends_one_set() {
    common::tracing::init_tracing_from_env();
    let api = RecordingApi::with_entries(sample_entries());
    let (mut editor, refreshes) = editor_with_counter(Some("orders"));

    select(&mut editor, "compression.type");
    assert!(editor.edit_selected());
    editor.handle_key(key(KeyCode::Tab));
    editor.handle_key(ctrl('u'));
    for c in "zstd".chars() {
        editor.handle_key(key(KeyCode::Char(c)));
    }
    assert_eq!(editor.dialog.as_ref().unwrap().draft(), "zstd");

    editor.submit(&api).await.unwrap();

    assert_eq!(
        api.alters(),
        vec![AlterCall {
            topic: Some("orders".into()),
            operations: vec![ConfigOperation::Set {
                key: "compression.type".into(),
                value: "zstd".into(),
            }],
        }]
    );
    assert!(editor.dialog.is_none());
    assert_eq!(refreshes.load(Ordering::SeqCst), 1);
    assert_eq!(
        editor.notification.as_ref().unwrap().message,
        "Successfully updated config compression.type"
    );
}

#[tokio::test]
async fn test_switch_to_default_sends_one_delete() {
    let api = RecordingApi::with_entries(sample_entries());
    let (mut editor, refreshes) = editor_with_counter(None);

    select(&mut editor, "retention.ms");
    editor.edit_selected();
    assert_eq!(editor.dialog.as_ref().unwrap().mode, EditMode::Custom);
    editor.dialog.as_mut().unwrap().set_mode(EditMode::Default);

    editor.submit(&api).await.unwrap();

    assert_eq!(
        api.alters(),
        vec![AlterCall {
            topic: None,
            operations: vec![ConfigOperation::Delete {
                key: "retention.ms".into(),
            }],
        }]
    );
    assert_eq!(refreshes.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_unchanged_confirm_makes_no_call() {
    let api = RecordingApi::with_entries(sample_entries());
    let (mut editor, refreshes) = editor_with_counter(Some("orders"));

    for name in ["retention.ms", "cleanup.policy", "compression.type"] {
        select(&mut editor, name);
        editor.edit_selected();
        editor.submit(&api).await.unwrap();
        assert!(editor.dialog.is_none());
    }

    assert!(api.alters().is_empty());
    assert_eq!(refreshes.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_rejected_commit_keeps_dialog_and_draft() {
    let api = RecordingApi::with_entries(sample_entries());
    api.fail_next_alter(ApiError::Http {
        status: 400,
        message: "Invalid value zstd-max for configuration compression.type".into(),
    });
    let (mut editor, refreshes) = editor_with_counter(Some("orders"));

    select(&mut editor, "compression.type");
    editor.edit_selected();
    editor.handle_key(key(KeyCode::Tab));
    editor.handle_key(ctrl('u'));
    editor.handle_paste("zstd-max");

    let result = editor.submit(&api).await;
    assert!(matches!(result, Err(ApiError::Http { status: 400, .. })));

    let dialog = editor.dialog.as_ref().unwrap();
    assert!(!dialog.pending);
    assert_eq!(
        dialog.error.as_deref(),
        Some("Invalid value zstd-max for configuration compression.type")
    );
    assert_eq!(dialog.draft(), "zstd-max");
    assert_eq!(refreshes.load(Ordering::SeqCst), 0);

    // Retrying the same draft goes through
    editor.submit(&api).await.unwrap();
    assert!(editor.dialog.is_none());
    assert_eq!(api.alters().len(), 2);
    assert_eq!(refreshes.load(Ordering::SeqCst), 1);
}

/// Drain app messages until `done` holds or a few seconds pass
fn settle(app: &mut App, done: impl Fn(&App) -> bool) -> bool {
    let deadline = Instant::now() + Duration::from_secs(5);
    while Instant::now() < deadline {
        if done(app) {
            return true;
        }
        app.wait_for_messages(Duration::from_millis(50));
    }
    done(app)
}

#[test]
fn test_app_loads_entries_and_permissions() {
    let api = Arc::new(RecordingApi::with_entries(sample_entries()));
    api.set_permissions(Some(TopicPermissions {
        can_edit_topic_config: false,
    }));
    let mut app = App::new(Some("orders".into()), api.clone(), Theme::dark()).unwrap();
    assert!(app.editor().loading);

    assert!(settle(&mut app, |app| {
        app.editor().entries().len() == 3 && !app.editor().has_edit_permissions()
    }));
    assert!(!app.editor().loading);
    assert_eq!(api.describe_count(), 1);

    app.handle_key(key(KeyCode::Enter));
    assert!(app.editor().dialog.is_none());
    let notification = app.editor().notification.as_ref().unwrap();
    assert_eq!(notification.kind, NotificationKind::Error);
    assert_eq!(notification.message, DenyReason::NoPermission.message());
}

#[test]
fn test_app_commit_refreshes_entries() {
    let api = Arc::new(RecordingApi::with_entries(sample_entries()));
    let mut app = App::new(Some("orders".into()), api.clone(), Theme::dark()).unwrap();
    assert!(settle(&mut app, |app| app.editor().entries().len() == 3));

    // cleanup.policy: inherited, so the dialog opens in Default mode
    app.handle_key(key(KeyCode::Down));
    app.handle_key(key(KeyCode::Enter));
    app.handle_key(key(KeyCode::Down)); // Custom option
    app.handle_key(key(KeyCode::Char(' ')));
    app.handle_key(key(KeyCode::Tab)); // value
    app.handle_key(key(KeyCode::Down)); // compact
    app.handle_key(ctrl('s'));
    assert!(app.editor().dialog.as_ref().unwrap().pending);

    assert!(settle(&mut app, |app| {
        app.editor()
            .entries()
            .iter()
            .any(|e| e.name == "cleanup.policy" && e.value.as_deref() == Some("compact"))
    }));
    assert!(app.editor().dialog.is_none());
    assert_eq!(
        api.alters(),
        vec![AlterCall {
            topic: Some("orders".into()),
            operations: vec![ConfigOperation::Set {
                key: "cleanup.policy".into(),
                value: "compact".into(),
            }],
        }]
    );
    assert_eq!(api.describe_count(), 2);
}

#[test]
fn test_app_renders_loaded_screen() {
    let api = Arc::new(RecordingApi::with_entries(sample_entries()));
    let mut app = App::new(Some("orders".into()), api, Theme::dark()).unwrap();
    assert!(settle(&mut app, |app| !app.editor().loading));

    let mut terminal = Terminal::new(TestBackend::new(80, 12)).unwrap();
    terminal.draw(|frame| app.render(frame)).unwrap();
    let buffer = terminal.backend().buffer();
    let rows: Vec<String> = (0..12)
        .map(|y| (0..80).map(|x| buffer[(x, y)].symbol()).collect())
        .collect();

    assert!(rows[0].starts_with("Topic configuration: orders"));
    assert!(rows.iter().any(|r| r.contains("retention.ms") && r.contains("1 day")));
    assert!(rows.iter().any(|r| r.starts_with("Compression")));

    app.handle_key(key(KeyCode::Char('q')));
    assert!(app.should_quit());
}
