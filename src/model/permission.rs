//! Who may edit which entry

/// Keys that stay editable on Serverless clusters
pub const SERVERLESS_EDITABLE_KEYS: [&str; 2] = ["retention.ms", "retention.bytes"];

/// How the cluster behind the API is deployed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DeploymentMode {
    #[default]
    Standard,
    /// Restricted deployment where only a handful of keys may change
    Serverless,
}

/// Why an entry cannot be edited
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DenyReason {
    NoPermission,
    NotEditableOnServerless,
}

impl DenyReason {
    pub fn message(self) -> &'static str {
        match self {
            DenyReason::NoPermission => {
                "You don't have permissions to change topic configuration entries"
            }
            DenyReason::NotEditableOnServerless => {
                "This configuration is not editable on Serverless clusters"
            }
        }
    }
}

impl std::fmt::Display for DenyReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message())
    }
}

/// Outcome of the edit permission check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditPermission {
    Allowed,
    Denied(DenyReason),
}

impl EditPermission {
    pub fn is_allowed(self) -> bool {
        matches!(self, EditPermission::Allowed)
    }

    pub fn reason(self) -> Option<DenyReason> {
        match self {
            EditPermission::Allowed => None,
            EditPermission::Denied(reason) => Some(reason),
        }
    }
}

/// Decide whether the entry called `name` can be edited
pub fn edit_permission(
    name: &str,
    has_edit_permissions: bool,
    mode: DeploymentMode,
) -> EditPermission {
    if !has_edit_permissions {
        return EditPermission::Denied(DenyReason::NoPermission);
    }
    match mode {
        DeploymentMode::Serverless if !SERVERLESS_EDITABLE_KEYS.contains(&name) => {
            EditPermission::Denied(DenyReason::NotEditableOnServerless)
        }
        _ => EditPermission::Allowed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const NAMES: [&str; 6] = [
        "retention.ms",
        "retention.bytes",
        "cleanup.policy",
        "segment.bytes",
        "retention.ms.extra",
        "",
    ];

    #[test]
    fn test_without_permission_nothing_is_editable() {
        for mode in [DeploymentMode::Standard, DeploymentMode::Serverless] {
            for name in NAMES {
                assert_eq!(
                    edit_permission(name, false, mode),
                    EditPermission::Denied(DenyReason::NoPermission),
                    "{name} in {mode:?}"
                );
            }
        }
    }

    #[test]
    fn test_serverless_allows_only_retention_keys() {
        let allowed: Vec<&str> = NAMES
            .into_iter()
            .filter(|name| edit_permission(name, true, DeploymentMode::Serverless).is_allowed())
            .collect();
        assert_eq!(allowed, vec!["retention.ms", "retention.bytes"]);

        assert_eq!(
            edit_permission("cleanup.policy", true, DeploymentMode::Serverless).reason(),
            Some(DenyReason::NotEditableOnServerless)
        );
    }

    #[test]
    fn test_standard_mode_allows_everything() {
        for name in NAMES {
            assert!(edit_permission(name, true, DeploymentMode::Standard).is_allowed());
        }
    }

    #[test]
    fn test_reason_messages() {
        assert!(DenyReason::NoPermission
            .to_string()
            .contains("permissions to change topic configuration entries"));
        assert!(DenyReason::NotEditableOnServerless
            .message()
            .contains("not editable on Serverless clusters"));
    }
}
