//! REST implementation of [`ConfigApi`]
//!
//! Talks to a Console-style HTTP API with `ureq`. Calls are blocking, so each
//! one runs on tokio's blocking pool to keep the async interface honest.

use super::api::{AlterConfigRequest, ApiError, ConfigApi, ConfigOperation, TopicPermissions};
use crate::model::ConfigEntry;
use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;

/// Path used instead of a topic path when editing cluster-wide defaults
const CLUSTER_DEFAULTS_PATH: &str = "/api/cluster/topic-configuration";

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct DescribeResponse {
    topic_description: TopicDescription,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TopicDescription {
    #[serde(default)]
    config_entries: Vec<ConfigEntry>,
    #[serde(default)]
    error: Option<String>,
}

/// HTTP client for the config API
#[derive(Clone)]
pub struct RestConfigApi {
    base_url: String,
    agent: ureq::Agent,
    auth_token: Option<String>,
}

impl std::fmt::Debug for RestConfigApi {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RestConfigApi")
            .field("base_url", &self.base_url)
            .field("auth_token", &self.auth_token.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

impl RestConfigApi {
    pub fn new(base_url: &str, timeout: Duration, auth_token: Option<String>) -> Self {
        let agent = ureq::AgentBuilder::new().timeout(timeout).build();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            agent,
            auth_token,
        }
    }

    fn config_url(&self, topic: Option<&str>) -> String {
        match topic {
            Some(topic) => format!("{}/api/topics/{}/configuration", self.base_url, topic),
            None => format!("{}{}", self.base_url, CLUSTER_DEFAULTS_PATH),
        }
    }

    fn permissions_url(&self, topic: &str) -> String {
        format!("{}/api/topics/{}/permissions", self.base_url, topic)
    }

    /// Perform a request and return the body of a successful response
    fn send(&self, method: &str, url: &str, body: Option<&str>) -> Result<String, ApiError> {
        let mut request = self.agent.request(method, url);
        if let Some(token) = &self.auth_token {
            request = request.set("Authorization", &format!("Bearer {}", token));
        }

        let result = match body {
            Some(body) => request
                .set("Content-Type", "application/json")
                .send_string(body),
            None => request.call(),
        };

        match result {
            Ok(response) => response
                .into_string()
                .map_err(|e| ApiError::Decode(e.to_string())),
            Err(ureq::Error::Status(status, response)) => {
                let body = response.into_string().unwrap_or_default();
                Err(ApiError::from_response(status, &body))
            }
            Err(ureq::Error::Transport(transport)) => {
                Err(ApiError::Transport(transport.to_string()))
            }
        }
    }

    fn alter_blocking(
        &self,
        topic: Option<&str>,
        operations: Vec<ConfigOperation>,
    ) -> Result<(), ApiError> {
        let url = self.config_url(topic);
        let body = serde_json::to_string(&AlterConfigRequest {
            configs: operations,
        })
        .map_err(|e| ApiError::Decode(e.to_string()))?;

        tracing::debug!("PATCH {} {}", url, body);
        self.send("PATCH", &url, Some(&body)).map(|_| ())
    }

    fn describe_blocking(&self, topic: Option<&str>) -> Result<Vec<ConfigEntry>, ApiError> {
        let url = self.config_url(topic);
        tracing::debug!("GET {}", url);
        let body = self.send("GET", &url, None)?;
        let response: DescribeResponse =
            serde_json::from_str(&body).map_err(|e| ApiError::Decode(e.to_string()))?;

        match response.topic_description.error {
            Some(error) if !error.is_empty() => Err(ApiError::Http {
                status: 200,
                message: error,
            }),
            _ => Ok(response.topic_description.config_entries),
        }
    }

    fn permissions_blocking(&self, topic: &str) -> Result<Option<TopicPermissions>, ApiError> {
        let url = self.permissions_url(topic);
        match self.send("GET", &url, None) {
            Ok(body) => serde_json::from_str(&body)
                .map(Some)
                .map_err(|e| ApiError::Decode(e.to_string())),
            Err(ApiError::Http { status: 404, .. }) => Ok(None),
            Err(e) => Err(e),
        }
    }
}

async fn run_blocking<T, F>(f: F) -> Result<T, ApiError>
where
    T: Send + 'static,
    F: FnOnce() -> Result<T, ApiError> + Send + 'static,
{
    tokio::task::spawn_blocking(f)
        .await
        .map_err(|e| ApiError::Transport(format!("request task failed: {}", e)))?
}

#[async_trait]
impl ConfigApi for RestConfigApi {
    async fn alter_config(
        &self,
        topic: Option<&str>,
        operations: Vec<ConfigOperation>,
    ) -> Result<(), ApiError> {
        let this = self.clone();
        let topic = topic.map(String::from);
        run_blocking(move || this.alter_blocking(topic.as_deref(), operations)).await
    }

    async fn describe_config(&self, topic: Option<&str>) -> Result<Vec<ConfigEntry>, ApiError> {
        let this = self.clone();
        let topic = topic.map(String::from);
        run_blocking(move || this.describe_blocking(topic.as_deref())).await
    }

    async fn topic_permissions(
        &self,
        topic: &str,
    ) -> Result<Option<TopicPermissions>, ApiError> {
        let this = self.clone();
        let topic = topic.to_string();
        run_blocking(move || this.permissions_blocking(&topic)).await
    }
}
