//! Spa Service Model

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::validation::{MAX_NAME_LEN, MAX_NOTE_LEN, MIN_NAME_LEN, not_blank, positive_price};

/// Bookable length of a treatment and its price
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct SpaDuration {
    /// Minutes
    #[validate(range(min = 5, max = 480))]
    pub duration: u32,
    #[validate(custom(function = "positive_price"))]
    pub price: f64,
}

/// Optional add-on for a treatment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct SpaAddon {
    #[validate(custom(function = "not_blank"))]
    pub name: String,
    #[validate(custom(function = "positive_price"))]
    pub price: f64,
    #[serde(default)]
    pub selected: bool,
}

/// Backend activity flag of a spa service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceActivity {
    Active,
    Inactive,
}

impl ServiceActivity {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Inactive => "inactive",
        }
    }
}

/// Status as presented to staff
///
/// The backend only stores active/inactive, so `Limited` does not survive
/// a round trip: it is sent as active and read back as available.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpaServiceStatus {
    Available,
    Limited,
    Unavailable,
}

impl SpaServiceStatus {
    pub fn to_backend(self) -> ServiceActivity {
        match self {
            Self::Available | Self::Limited => ServiceActivity::Active,
            Self::Unavailable => ServiceActivity::Inactive,
        }
    }

    pub fn from_backend(activity: ServiceActivity) -> Self {
        match activity {
            ServiceActivity::Active => Self::Available,
            ServiceActivity::Inactive => Self::Unavailable,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Available => "available",
            Self::Limited => "limited",
            Self::Unavailable => "unavailable",
        }
    }
}

impl std::str::FromStr for SpaServiceStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "available" => Ok(Self::Available),
            "limited" => Ok(Self::Limited),
            "unavailable" => Ok(Self::Unavailable),
            other => Err(format!("unknown service status '{}'", other)),
        }
    }
}

/// Spa service entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpaService {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub category_id: String,
    pub specialist_id: String,
    #[serde(default)]
    pub durations: Vec<SpaDuration>,
    #[serde(default)]
    pub addons: Vec<SpaAddon>,
    #[serde(default)]
    pub images: Vec<String>,
    pub status: ServiceActivity,
}

impl SpaService {
    pub fn display_status(&self) -> SpaServiceStatus {
        SpaServiceStatus::from_backend(self.status)
    }

    /// Cheapest listed duration price
    pub fn starting_price(&self) -> Option<f64> {
        self.durations.iter().map(|d| d.price).reduce(f64::min)
    }
}

/// Create / edit payload for a spa service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SpaServiceDraft {
    #[validate(length(min = MIN_NAME_LEN, max = MAX_NAME_LEN))]
    pub title: String,
    #[serde(default)]
    #[validate(length(max = MAX_NOTE_LEN))]
    pub description: String,
    #[validate(custom(function = "not_blank"))]
    pub category_id: String,
    #[validate(custom(function = "not_blank"))]
    pub specialist_id: String,
    #[validate(length(min = 1))]
    #[validate(nested)]
    pub durations: Vec<SpaDuration>,
    #[serde(default)]
    #[validate(nested)]
    pub addons: Vec<SpaAddon>,
    pub status: SpaServiceStatus,
}

impl From<&SpaService> for SpaServiceDraft {
    fn from(service: &SpaService) -> Self {
        Self {
            title: service.title.clone(),
            description: service.description.clone(),
            category_id: service.category_id.clone(),
            specialist_id: service.specialist_id.clone(),
            durations: service.durations.clone(),
            addons: service.addons.clone(),
            status: service.display_status(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_status_maps_onto_backend_values() {
        assert_eq!(SpaServiceStatus::Available.to_backend(), ServiceActivity::Active);
        assert_eq!(SpaServiceStatus::Limited.to_backend(), ServiceActivity::Active);
        assert_eq!(SpaServiceStatus::Unavailable.to_backend(), ServiceActivity::Inactive);
        assert_eq!(
            SpaServiceStatus::from_backend(ServiceActivity::Inactive),
            SpaServiceStatus::Unavailable
        );
    }

    #[test]
    fn draft_needs_a_duration() {
        let draft = SpaServiceDraft {
            title: "Hot Stone Massage".into(),
            description: String::new(),
            category_id: "massage".into(),
            specialist_id: "sp-1".into(),
            durations: vec![],
            addons: vec![],
            status: SpaServiceStatus::Available,
        };
        let errs = draft.validate().unwrap_err();
        assert!(errs.field_errors().contains_key("durations"));
    }

    #[test]
    fn starting_price_is_the_cheapest_duration() {
        let service = SpaService {
            id: "s1".into(),
            title: "Facial".into(),
            description: String::new(),
            category_id: "c".into(),
            specialist_id: "p".into(),
            durations: vec![
                SpaDuration { duration: 60, price: 90.0 },
                SpaDuration { duration: 30, price: 55.0 },
            ],
            addons: vec![],
            images: vec![],
            status: ServiceActivity::Active,
        };
        assert_eq!(service.starting_price(), Some(55.0));
    }
}
