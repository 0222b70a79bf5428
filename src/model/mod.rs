//! Entry data and the pure rules applied to it

pub mod entry;
pub mod format;
pub mod listing;
pub mod permission;

pub use entry::{ConfigEntry, ConfigSource, ConfigSynonym, FrontendFormat, InheritedDefault};
pub use format::{format_config_value, FormatMode};
pub use listing::{build_groups, ConfigGroup};
pub use permission::{edit_permission, DenyReason, DeploymentMode, EditPermission};
