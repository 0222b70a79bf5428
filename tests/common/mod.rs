#![allow(dead_code)]

pub mod tracing;

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use topic_config::model::{
    ConfigEntry, ConfigSource, ConfigSynonym, DeploymentMode, FrontendFormat,
};
use topic_config::services::{ApiError, ConfigApi, ConfigOperation, TopicPermissions};
use topic_config::view::topic_config::ConfigurationEditor;

/// One recorded `alter_config` call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlterCall {
    pub topic: Option<String>,
    pub operations: Vec<ConfigOperation>,
}

/// In-memory [`ConfigApi`] that records every call.
///
/// Successful alters are applied to the stored entries, so a refetch sees
/// the new values the way a real backend would.
#[derive(Default)]
pub struct RecordingApi {
    entries: Mutex<Vec<ConfigEntry>>,
    permissions: Mutex<Option<TopicPermissions>>,
    next_failure: Mutex<Option<ApiError>>,
    alters: Mutex<Vec<AlterCall>>,
    describes: AtomicUsize,
}

impl RecordingApi {
    pub fn with_entries(entries: Vec<ConfigEntry>) -> Self {
        Self {
            entries: Mutex::new(entries),
            ..Default::default()
        }
    }

    pub fn set_permissions(&self, permissions: Option<TopicPermissions>) {
        *self.permissions.lock().unwrap() = permissions;
    }

    /// Make the next alter call fail with `error`
    pub fn fail_next_alter(&self, error: ApiError) {
        *self.next_failure.lock().unwrap() = Some(error);
    }

    pub fn alters(&self) -> Vec<AlterCall> {
        self.alters.lock().unwrap().clone()
    }

    pub fn describe_count(&self) -> usize {
        self.describes.load(Ordering::SeqCst)
    }

    pub fn entries(&self) -> Vec<ConfigEntry> {
        self.entries.lock().unwrap().clone()
    }
}

#[async_trait]
impl ConfigApi for RecordingApi {
    async fn alter_config(
        &self,
        topic: Option<&str>,
        operations: Vec<ConfigOperation>,
    ) -> Result<(), ApiError> {
        self.alters.lock().unwrap().push(AlterCall {
            topic: topic.map(String::from),
            operations: operations.clone(),
        });
        if let Some(error) = self.next_failure.lock().unwrap().take() {
            return Err(error);
        }

        let mut entries = self.entries.lock().unwrap();
        for operation in operations {
            let Some(entry) = entries.iter_mut().find(|e| e.name == operation.key()) else {
                continue;
            };
            match operation {
                ConfigOperation::Set { value, .. } => {
                    entry.value = Some(value);
                    entry.is_explicitly_set = true;
                    entry.source = ConfigSource::DynamicTopicConfig;
                }
                ConfigOperation::Delete { .. } => {
                    let default = entry.inherited_default();
                    entry.value = default.value;
                    entry.source = default.source;
                    entry.is_explicitly_set = false;
                }
            }
        }
        Ok(())
    }

    async fn describe_config(&self, _topic: Option<&str>) -> Result<Vec<ConfigEntry>, ApiError> {
        self.describes.fetch_add(1, Ordering::SeqCst);
        Ok(self.entries())
    }

    async fn topic_permissions(
        &self,
        _topic: &str,
    ) -> Result<Option<TopicPermissions>, ApiError> {
        Ok(*self.permissions.lock().unwrap())
    }
}

/// A realistic topic snapshot
pub fn sample_entries() -> Vec<ConfigEntry> {
    let mut retention = ConfigEntry::new("retention.ms", "86400000");
    retention.is_explicitly_set = true;
    retention.source = ConfigSource::DynamicTopicConfig;
    retention.frontend_format = FrontendFormat::Duration;
    retention.category = Some("Retention".into());
    retention.synonyms = vec![ConfigSynonym {
        name: "log.retention.ms".into(),
        value: Some("604800000".into()),
        source: ConfigSource::DefaultConfig,
    }];

    let mut cleanup = ConfigEntry::new("cleanup.policy", "delete");
    cleanup.source = ConfigSource::DefaultConfig;
    cleanup.frontend_format = FrontendFormat::Select;
    cleanup.enum_values = vec!["delete".into(), "compact".into()];
    cleanup.category = Some("Retention".into());

    let mut compression = ConfigEntry::new("compression.type", "producer");
    compression.is_explicitly_set = true;
    compression.source = ConfigSource::DynamicTopicConfig;
    compression.category = Some("Compression".into());
    compression.synonyms = vec![ConfigSynonym {
        name: "compression.type".into(),
        value: Some("producer".into()),
        source: ConfigSource::DefaultConfig,
    }];

    vec![compression, cleanup, retention]
}

/// Editor over [`sample_entries`] with a refresh counter
pub fn editor_with_counter(topic: Option<&str>) -> (ConfigurationEditor, Arc<AtomicUsize>) {
    let refreshes = Arc::new(AtomicUsize::new(0));
    let counter = refreshes.clone();
    let editor = ConfigurationEditor::new(
        topic.map(String::from),
        sample_entries(),
        Box::new(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        }),
    )
    .with_deployment_mode(DeploymentMode::Standard);
    (editor, refreshes)
}
