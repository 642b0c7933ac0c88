//! Tot Trot Catalog - filtering and ranking service for the Tot Trot family activity directory
//!
//! This library provides the catalog engine used by the Tot Trot app: pure
//! filtering over a static location catalog, optional distance ranking
//! against the user's position, filter-option viability, and the user-local
//! favorites store.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{
    filter_catalog, format_distance, haversine_distance, rank_by_distance, CatalogEngine,
    SearchResult,
};
pub use crate::models::{
    Catalog, Coordinates, FilterField, FilterOptions, FilterSpec, Location, RankedLocation,
};
pub use crate::services::{FavoritesStore, KeyValueStore, MemoryStore};
