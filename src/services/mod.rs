//! Backend access and process-level plumbing

pub mod api;
pub mod deployment;
pub mod log_dirs;
pub mod rest;
pub mod terminal_modes;
pub mod tracing_setup;

pub use api::{ApiError, ConfigApi, ConfigOperation, TopicPermissions};
pub use rest::RestConfigApi;
