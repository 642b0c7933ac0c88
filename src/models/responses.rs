use serde::{Deserialize, Serialize};

use crate::core::links::SharePayload;
use crate::models::domain::{AvailableOptions, FilterOptions, Location, RankedLocation};

/// Response for the filter endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FilterLocationsResponse {
    pub locations: Vec<RankedLocation>,
    #[serde(rename = "totalMatches")]
    pub total_matches: usize,
    #[serde(rename = "catalogSize")]
    pub catalog_size: usize,
}

/// Response for the detail endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocationDetailResponse {
    pub location: Location,
    #[serde(rename = "isSaved")]
    pub is_saved: bool,
    #[serde(rename = "directionsUrl")]
    pub directions_url: String,
    pub share: SharePayload,
    #[serde(rename = "clipboardText")]
    pub clipboard_text: String,
}

/// Response carrying the catalog's option tables
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FilterOptionsResponse {
    pub options: FilterOptions,
}

/// Response listing the option keys still viable under a selection
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AvailableOptionsResponse {
    pub available: AvailableOptions,
}

/// Response listing the saved locations
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FavoritesResponse {
    pub ids: Vec<u32>,
    pub locations: Vec<Location>,
    pub count: usize,
}

/// Response after flipping a location's saved state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToggleFavoriteResponse {
    pub id: u32,
    pub saved: bool,
    pub count: usize,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
    #[serde(rename = "catalogSize")]
    pub catalog_size: usize,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}
