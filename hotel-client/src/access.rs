//! Role-based gating of what the client offers
//!
//! Decides which commands, columns and buttons are shown to the signed-in
//! user. The backend authorizes every request on its own; a `true` here
//! never grants anything server-side.

use shared::client::{CurrentUser, UserRole};

use crate::error::{ClientError, ClientResult};

/// Management area a resource belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Area {
    Restaurant,
    Spa,
    Staff,
}

impl Area {
    pub fn key(self) -> &'static str {
        match self {
            Area::Restaurant => "restaurant",
            Area::Spa => "spa",
            Area::Staff => "staff",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Capability {
    View(Area),
    Manage(Area),
    Delete(Area),
}

impl Capability {
    /// Permission string checked against the user's grants (`spa:delete`)
    pub fn action(self) -> String {
        match self {
            Capability::View(area) => format!("{}:view", area.key()),
            Capability::Manage(area) => format!("{}:manage", area.key()),
            Capability::Delete(area) => format!("{}:delete", area.key()),
        }
    }
}

/// Whether the UI should offer `capability` to `user`
pub fn allows(user: &CurrentUser, capability: Capability) -> bool {
    let by_role = match (user.role(), capability) {
        (UserRole::Admin, _) => true,
        (UserRole::Manager, Capability::Delete(Area::Staff)) => false,
        (UserRole::Manager, _) => true,
        (UserRole::Staff, Capability::View(_)) => true,
        (UserRole::Staff, _) => false,
    };
    if by_role {
        return true;
    }
    let action = capability.action();
    user.permissions.iter().any(|p| p.grants(&action))
}

/// Fail early when the signed-in user would not be offered `capability`
pub fn require(user: Option<&CurrentUser>, capability: Capability) -> ClientResult<()> {
    let user = user.ok_or(ClientError::Unauthorized)?;
    if allows(user, capability) {
        Ok(())
    } else {
        Err(ClientError::Forbidden(format!(
            "{} ({}) may not {}",
            user.name,
            user.role(),
            capability.action()
        )))
    }
}
