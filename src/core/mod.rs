// Core algorithm exports
pub mod distance;
pub mod engine;
pub mod filters;
pub mod links;

pub use distance::{distance_to, format_distance, haversine_distance};
pub use engine::{filter_catalog, is_option_viable, rank_by_distance, CatalogEngine, SearchResult};
pub use filters::{matches_age_range, matches_area, matches_duration, matches_interests, matches_spec};
pub use links::{clipboard_text, directions_url, share_payload, SharePayload};
