//! Config API boundary
//!
//! The editor only talks to the backend through [`ConfigApi`]. The REST
//! implementation lives in `rest.rs`; tests plug in recording fakes.

use crate::model::ConfigEntry;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// A single-key change sent to the backend
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "op", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ConfigOperation {
    /// Override the key with a value
    Set { key: String, value: String },
    /// Remove the override so the inherited default applies again
    Delete { key: String },
}

impl ConfigOperation {
    pub fn key(&self) -> &str {
        match self {
            ConfigOperation::Set { key, .. } | ConfigOperation::Delete { key } => key,
        }
    }
}

/// Request body for altering configs
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AlterConfigRequest {
    pub configs: Vec<ConfigOperation>,
}

/// What the caller may do with a topic
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TopicPermissions {
    #[serde(default = "default_true")]
    pub can_edit_topic_config: bool,
}

fn default_true() -> bool {
    true
}

/// Edit permission for a topic, missing data counts as permitted
pub fn can_edit_topic_config(permissions: Option<&TopicPermissions>) -> bool {
    permissions.map_or(true, |p| p.can_edit_topic_config)
}

/// Errors reported by a [`ConfigApi`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// The backend answered with a non-success status
    Http { status: u16, message: String },
    /// The request never got an answer
    Transport(String),
    /// The answer could not be decoded
    Decode(String),
}

impl ApiError {
    /// Message suitable for showing to the user
    pub fn message(&self) -> &str {
        match self {
            ApiError::Http { message, .. } => message,
            ApiError::Transport(message) | ApiError::Decode(message) => message,
        }
    }

    /// Build an HTTP error from a response body.
    ///
    /// Uses the `message` field of a JSON body when there is one, the body
    /// text otherwise, and the bare status when the body is empty.
    pub fn from_response(status: u16, body: &str) -> Self {
        #[derive(Deserialize)]
        struct ErrorBody {
            message: Option<String>,
        }

        let message = serde_json::from_str::<ErrorBody>(body)
            .ok()
            .and_then(|b| b.message)
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| body.trim().to_string());
        let message = if message.is_empty() {
            format!("request failed with status {status}")
        } else {
            message
        };
        ApiError::Http { status, message }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::Http { status, message } => write!(f, "HTTP {status}: {message}"),
            ApiError::Transport(msg) => write!(f, "Transport error: {msg}"),
            ApiError::Decode(msg) => write!(f, "Decode error: {msg}"),
        }
    }
}

impl std::error::Error for ApiError {}

/// Backend for reading and changing topic configuration.
///
/// `topic == None` addresses the cluster-wide topic defaults.
#[async_trait]
pub trait ConfigApi: Send + Sync {
    /// Apply config operations to a topic
    async fn alter_config(
        &self,
        topic: Option<&str>,
        operations: Vec<ConfigOperation>,
    ) -> Result<(), ApiError>;

    /// Fetch the current config entries
    async fn describe_config(&self, topic: Option<&str>) -> Result<Vec<ConfigEntry>, ApiError>;

    /// Look up the caller's permissions, `None` when the backend has no data
    async fn topic_permissions(&self, topic: &str)
        -> Result<Option<TopicPermissions>, ApiError>;
}
