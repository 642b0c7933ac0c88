// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{
    AvailableOptions, Catalog, Coordinates, FilterField, FilterOptions, FilterSpec, Location,
    RankedLocation,
};
pub use requests::{
    AvailableOptionsRequest, FilterLocationsRequest, ObserverPosition, ToggleFavoriteRequest,
};
pub use responses::{
    AvailableOptionsResponse, ErrorResponse, FavoritesResponse, FilterLocationsResponse,
    FilterOptionsResponse, HealthResponse, LocationDetailResponse, ToggleFavoriteResponse,
};
