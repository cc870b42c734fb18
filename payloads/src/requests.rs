use crate::{
    BookingStatus, LocationId, LocationStatus, RateTier, SpaceCategory,
    SpaceId, SpaceStatus,
};
use jiff::{Timestamp, civil::Date};
use serde::{Deserialize, Serialize};

pub const DEFAULT_PAGE_SIZE: u32 = 12;
pub const MAX_PAGE_SIZE: u32 = 100;

fn first_page() -> u32 {
    1
}

fn default_limit() -> u32 {
    DEFAULT_PAGE_SIZE
}

/// Query parameters for the location list.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationListParams {
    #[serde(default = "first_page")]
    pub page: u32,
    #[serde(default = "default_limit")]
    pub limit: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<LocationStatus>,
}

impl Default for LocationListParams {
    fn default() -> Self {
        Self {
            page: first_page(),
            limit: default_limit(),
            search: None,
            city: None,
            status: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpaceListParams {
    #[serde(default = "first_page")]
    pub page: u32,
    #[serde(default = "default_limit")]
    pub limit: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location_id: Option<LocationId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub space_type: Option<SpaceCategory>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<SpaceStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
}

impl Default for SpaceListParams {
    fn default() -> Self {
        Self {
            page: first_page(),
            limit: default_limit(),
            location_id: None,
            space_type: None,
            status: None,
            search: None,
        }
    }
}

impl SpaceListParams {
    pub fn for_location(location_id: LocationId) -> Self {
        Self {
            location_id: Some(location_id),
            limit: MAX_PAGE_SIZE,
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductTypeListParams {
    #[serde(default = "first_page")]
    pub page: u32,
    #[serde(default = "default_limit")]
    pub limit: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location_id: Option<LocationId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<SpaceCategory>,
}

impl Default for ProductTypeListParams {
    fn default() -> Self {
        Self {
            page: first_page(),
            limit: default_limit(),
            location_id: None,
            category: None,
        }
    }
}

impl ProductTypeListParams {
    pub fn for_location(location_id: LocationId) -> Self {
        Self {
            location_id: Some(location_id),
            limit: MAX_PAGE_SIZE,
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingListParams {
    #[serde(default = "first_page")]
    pub page: u32,
    #[serde(default = "default_limit")]
    pub limit: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location_id: Option<LocationId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub space_id: Option<SpaceId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<BookingStatus>,
}

impl Default for BookingListParams {
    fn default() -> Self {
        Self {
            page: first_page(),
            limit: default_limit(),
            location_id: None,
            space_id: None,
            status: None,
        }
    }
}

/// Scope for the aggregate statistics endpoints. `None` covers every
/// location.
#[derive(
    Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "camelCase")]
pub struct StatsParams {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location_id: Option<LocationId>,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AvailabilityParams {
    pub date: Date,
}

/// Bulk-create spaces from a product type's auto-generation rule. Without a
/// count, the rule's own count is used.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateSpaces {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub count: Option<u32>,
}

/// The server prices the booking from the space's rates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBooking {
    pub space_id: SpaceId,
    pub member_name: String,
    pub member_email: String,
    pub start_at: Timestamp,
    pub end_at: Timestamp,
    pub rate_tier: RateTier,
    pub notes: Option<String>,
}

/// Normalize a free-text filter input: blank means "no filter".
pub fn filter_text(input: &str) -> Option<String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_filters_are_dropped() {
        assert_eq!(filter_text("   "), None);
        assert_eq!(filter_text(" Leith "), Some("Leith".to_string()));
    }

    #[test]
    fn list_params_fill_in_missing_paging() {
        let params: SpaceListParams =
            serde_json::from_value(serde_json::json!({ "status": "occupied" }))
                .unwrap();
        assert_eq!(params.page, 1);
        assert_eq!(params.limit, DEFAULT_PAGE_SIZE);
        assert_eq!(params.status, Some(SpaceStatus::Occupied));
    }

    #[test]
    fn unset_filters_are_not_serialized() {
        let value = serde_json::to_value(LocationListParams::default()).unwrap();
        assert_eq!(value, serde_json::json!({ "page": 1, "limit": 12 }));
    }
}
