//! Single-field status changes
//!
//! The backend has no PATCH routes for these flags, so every change PUTs
//! the whole record with one field flipped. The row is replaced by what the
//! server returns; nothing changes locally before the response.

use shared::models::{
    MenuCategory, MenuItem, RestaurantTable, SpaCategory, SpaSpecialist, SpecialistStatus,
    StaffMember, TableStatus,
};

use crate::error::ClientResult;
use crate::http::HttpClient;
use crate::list::ResourceList;
use crate::notify::Notifier;
use crate::resource::{Resource, ResourceApi};

/// Resource with an on/off flag
pub trait Toggle: Resource {
    /// Wire name of the flag
    const FLAG: &'static str;

    fn is_on(&self) -> bool;

    /// Copy of the record with only the flag changed
    fn with_flag(&self, on: bool) -> Self;

    fn flag_label(on: bool) -> &'static str {
        if on { "active" } else { "inactive" }
    }
}

impl Toggle for MenuItem {
    const FLAG: &'static str = "available";

    fn is_on(&self) -> bool {
        self.available
    }

    fn with_flag(&self, on: bool) -> Self {
        Self {
            available: on,
            ..self.clone()
        }
    }

    fn flag_label(on: bool) -> &'static str {
        if on { "available" } else { "unavailable" }
    }
}

impl Toggle for MenuCategory {
    const FLAG: &'static str = "isActive";

    fn is_on(&self) -> bool {
        self.is_active
    }

    fn with_flag(&self, on: bool) -> Self {
        Self {
            is_active: on,
            ..self.clone()
        }
    }
}

impl Toggle for SpaCategory {
    const FLAG: &'static str = "isActive";

    fn is_on(&self) -> bool {
        self.is_active
    }

    fn with_flag(&self, on: bool) -> Self {
        Self {
            is_active: on,
            ..self.clone()
        }
    }
}

impl Toggle for SpaSpecialist {
    const FLAG: &'static str = "status";

    fn is_on(&self) -> bool {
        self.status == SpecialistStatus::Active
    }

    fn with_flag(&self, on: bool) -> Self {
        let status = if on {
            SpecialistStatus::Active
        } else {
            SpecialistStatus::Inactive
        };
        Self {
            status,
            ..self.clone()
        }
    }
}

impl Toggle for StaffMember {
    const FLAG: &'static str = "active";

    fn is_on(&self) -> bool {
        self.active
    }

    fn with_flag(&self, on: bool) -> Self {
        Self {
            active: on,
            ..self.clone()
        }
    }
}

/// PUT `changed` and put the server's copy into the list
async fn send_change<R: Resource, H: HttpClient>(
    api: &ResourceApi<R, H>,
    list: &mut ResourceList<R>,
    changed: R,
    notifier: &dyn Notifier,
    describe: impl Fn(&R) -> String,
) -> ClientResult<R> {
    match api.replace(&changed).await {
        Ok(saved) => {
            notifier.success(&describe(&saved));
            if !list.replace_item(saved.clone()) {
                tracing::debug!(resource = R::NAME, id = saved.id(), "changed row not in list");
            }
            Ok(saved)
        }
        Err(e) => {
            tracing::warn!(resource = R::NAME, id = changed.id(), error = %e, "status change failed");
            notifier.error(&e.user_message(&format!("Failed to update {}", R::NAME)));
            Err(e)
        }
    }
}

/// Flip the flag of one loaded row
pub async fn toggle<R: Toggle, H: HttpClient>(
    api: &ResourceApi<R, H>,
    list: &mut ResourceList<R>,
    id: &str,
    notifier: &dyn Notifier,
) -> ClientResult<R> {
    let current = list.require(id)?;
    let changed = current.with_flag(!current.is_on());
    send_change(api, list, changed, notifier, |saved| {
        format!("{} is now {}", saved.label(), R::flag_label(saved.is_on()))
    })
    .await
}

pub async fn set_table_status<H: HttpClient>(
    api: &ResourceApi<RestaurantTable, H>,
    list: &mut ResourceList<RestaurantTable>,
    id: &str,
    status: TableStatus,
    notifier: &dyn Notifier,
) -> ClientResult<RestaurantTable> {
    let changed = RestaurantTable {
        status,
        ..list.require(id)?.clone()
    };
    send_change(api, list, changed, notifier, |saved| {
        format!("{} marked as {}", saved.label(), saved.status)
    })
    .await
}

/// Advance available -> occupied -> reserved -> available
pub async fn cycle_table_status<H: HttpClient>(
    api: &ResourceApi<RestaurantTable, H>,
    list: &mut ResourceList<RestaurantTable>,
    id: &str,
    notifier: &dyn Notifier,
) -> ClientResult<RestaurantTable> {
    let next = list.require(id)?.status.cycle();
    set_table_status(api, list, id, next, notifier).await
}
