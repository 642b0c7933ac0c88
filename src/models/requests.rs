use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::domain::{Coordinates, FilterSpec};

/// Request to filter (and optionally rank) the catalog
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct FilterLocationsRequest {
    #[serde(default)]
    pub filters: FilterSpec,
    #[serde(default)]
    #[validate(nested)]
    pub observer: Option<ObserverPosition>,
}

/// The caller's current position, as resolved by the client's geolocation
/// capability. Absent when permission was denied or the fix timed out.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Validate)]
pub struct ObserverPosition {
    #[validate(range(min = -90.0, max = 90.0))]
    pub latitude: f64,
    #[validate(range(min = -180.0, max = 180.0))]
    pub longitude: f64,
}

impl From<ObserverPosition> for Coordinates {
    fn from(pos: ObserverPosition) -> Self {
        Coordinates {
            latitude: pos.latitude,
            longitude: pos.longitude,
        }
    }
}

/// Request for the option keys still viable under the current selection
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AvailableOptionsRequest {
    #[serde(default)]
    pub filters: FilterSpec,
}

/// Request to flip a location's saved state
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ToggleFavoriteRequest {
    #[validate(range(min = 1))]
    pub id: u32,
}
