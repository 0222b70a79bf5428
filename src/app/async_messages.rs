//! Results sent from background tasks to the UI loop

use crate::model::ConfigEntry;
use crate::services::{ApiError, TopicPermissions};

/// Message delivered to the UI thread over the app channel
#[derive(Debug)]
pub enum AppMessage {
    /// A describe call finished
    EntriesLoaded(Result<Vec<ConfigEntry>, ApiError>),
    /// A permission lookup finished
    PermissionsLoaded(Result<Option<TopicPermissions>, ApiError>),
    /// An alter call finished
    CommitFinished(Result<(), ApiError>),
    /// The editor asked for fresh entries
    RefreshRequested,
}
