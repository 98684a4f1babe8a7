//! Restaurant Table Model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Table occupancy state
///
/// Any state may follow any other; the backend does not guard transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TableStatus {
    Available,
    Occupied,
    Reserved,
}

impl TableStatus {
    pub const ALL: [TableStatus; 3] = [Self::Available, Self::Occupied, Self::Reserved];

    /// Next state in the dashboard's one-click cycle
    pub fn cycle(self) -> Self {
        match self {
            Self::Available => Self::Occupied,
            Self::Occupied => Self::Reserved,
            Self::Reserved => Self::Available,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Available => "available",
            Self::Occupied => "occupied",
            Self::Reserved => "reserved",
        }
    }
}

impl std::fmt::Display for TableStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for TableStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown table status '{}'", s))
    }
}

/// Restaurant table entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RestaurantTable {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    pub number: u32,
    pub capacity: u32,
    pub status: TableStatus,
    #[serde(default)]
    pub reservation_time: Option<DateTime<Utc>>,
    #[serde(default)]
    pub customer_name: Option<String>,
}

/// Create / edit payload for a restaurant table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RestaurantTableDraft {
    #[validate(range(min = 1))]
    pub number: u32,
    #[validate(range(min = 1, max = 50))]
    pub capacity: u32,
    #[serde(default = "default_status")]
    pub status: TableStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reservation_time: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_name: Option<String>,
}

fn default_status() -> TableStatus {
    TableStatus::Available
}

impl From<&RestaurantTable> for RestaurantTableDraft {
    fn from(table: &RestaurantTable) -> Self {
        Self {
            number: table.number,
            capacity: table.capacity,
            status: table.status,
            reservation_time: table.reservation_time,
            customer_name: table.customer_name.clone(),
        }
    }
}
