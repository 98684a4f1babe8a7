//! Common types for the shared crate

use serde::{Deserialize, Serialize};

/// Permission string attached to a user (`*`, `menu:*`, `staff:delete`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Permission(pub String);

impl Permission {
    /// Check if this permission grants access to the given resource action
    pub fn grants(&self, action: &str) -> bool {
        if self.0 == "*" {
            return true;
        }
        if let Some(prefix) = self.0.strip_suffix(":*") {
            return action
                .strip_prefix(prefix)
                .is_some_and(|rest| rest.starts_with(':'));
        }
        self.0 == action
    }
}

impl std::fmt::Display for Permission {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for Permission {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wildcard_grants_everything() {
        assert!(Permission::from("*").grants("staff:delete"));
    }

    #[test]
    fn area_wildcard_is_scoped() {
        let perm = Permission::from("menu:*");
        assert!(perm.grants("menu:delete"));
        assert!(!perm.grants("menus:delete"));
        assert!(!perm.grants("spa:manage"));
    }

    #[test]
    fn exact_match() {
        let perm = Permission::from("tables:manage");
        assert!(perm.grants("tables:manage"));
        assert!(!perm.grants("tables:delete"));
    }
}
