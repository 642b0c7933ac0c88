use actix_web::{web, HttpResponse, Responder};
use std::sync::Arc;
use validator::Validate;

use crate::core::{clipboard_text, directions_url, share_payload, CatalogEngine};
use crate::models::{
    AvailableOptionsRequest, AvailableOptionsResponse, ErrorResponse, FavoritesResponse,
    FilterLocationsRequest, FilterLocationsResponse, FilterOptionsResponse, HealthResponse,
    LocationDetailResponse, ToggleFavoriteRequest, ToggleFavoriteResponse,
};
use crate::services::FavoritesStore;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub engine: Arc<CatalogEngine>,
    pub favorites: Arc<FavoritesStore>,
    pub public_url: String,
}

/// Configure all catalog routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check))
        .route("/locations", web::get().to(list_locations))
        .route("/locations/filter", web::post().to(filter_locations))
        .route("/locations/{id}", web::get().to(location_detail))
        .route("/options", web::get().to(filter_options))
        .route("/options/available", web::post().to(available_options))
        .route("/favorites", web::get().to(get_favorites))
        .route("/favorites/toggle", web::post().to(toggle_favorite));
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
        catalog_size: state.engine.catalog().len(),
    })
}

/// Full catalog in original order
///
/// GET /api/v1/locations
async fn list_locations(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(&state.engine.catalog().locations)
}

/// Filter the catalog, optionally ranked by distance to the observer
///
/// POST /api/v1/locations/filter
///
/// Request body:
/// ```json
/// {
///   "filters": {
///     "duration": "quick",
///     "ageRange": "toddler",
///     "interests": ["animals"],
///     "region": "East Bay",
///     "city": "Oakland"
///   },
///   "observer": { "latitude": 37.8, "longitude": -122.27 }
/// }
/// ```
/// Every filter field is optional; an absent observer yields unranked
/// results in catalog order.
async fn filter_locations(
    state: web::Data<AppState>,
    req: web::Json<FilterLocationsRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for filter request: {:?}", errors);
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    let observer = req.observer.map(Into::into);
    let result = state.engine.search(&req.filters, observer);

    tracing::info!(
        "Filter returned {} of {} locations (observer: {})",
        result.total_matches,
        result.catalog_size,
        if observer.is_some() { "present" } else { "absent" }
    );

    HttpResponse::Ok().json(FilterLocationsResponse {
        locations: result.entries,
        total_matches: result.total_matches,
        catalog_size: result.catalog_size,
    })
}

/// Detail payload for one location
///
/// GET /api/v1/locations/{id}
async fn location_detail(
    state: web::Data<AppState>,
    path: web::Path<u32>,
) -> impl Responder {
    let id = path.into_inner();

    match state.engine.get(id) {
        Some(location) => HttpResponse::Ok().json(LocationDetailResponse {
            location: location.clone(),
            is_saved: state.favorites.contains(id),
            directions_url: directions_url(location),
            share: share_payload(location, &state.public_url),
            clipboard_text: clipboard_text(location),
        }),
        None => HttpResponse::NotFound().json(ErrorResponse {
            error: "Location not found".to_string(),
            message: format!("No location with id {}", id),
            status_code: 404,
        }),
    }
}

/// The catalog's filter option tables
///
/// GET /api/v1/options
async fn filter_options(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(FilterOptionsResponse {
        options: state.engine.catalog().filter_options.clone(),
    })
}

/// Option keys still viable under the current selection
///
/// POST /api/v1/options/available
///
/// Request body:
/// ```json
/// { "filters": { "region": "Peninsula" } }
/// ```
async fn available_options(
    state: web::Data<AppState>,
    req: web::Json<AvailableOptionsRequest>,
) -> impl Responder {
    let available = state.engine.available_options(&req.filters);

    HttpResponse::Ok().json(AvailableOptionsResponse { available })
}

/// Saved locations
///
/// GET /api/v1/favorites
///
/// Ids no longer present in the catalog are skipped, not errors; the
/// favorites list has its own lifecycle.
async fn get_favorites(state: web::Data<AppState>) -> impl Responder {
    let ids = state.favorites.ids();
    let locations: Vec<_> = ids
        .iter()
        .filter_map(|&id| state.engine.get(id).cloned())
        .collect();

    let count = ids.len();
    HttpResponse::Ok().json(FavoritesResponse {
        ids,
        locations,
        count,
    })
}

/// Flip a location's saved state
///
/// POST /api/v1/favorites/toggle
///
/// Request body:
/// ```json
/// { "id": 3 }
/// ```
async fn toggle_favorite(
    state: web::Data<AppState>,
    req: web::Json<ToggleFavoriteRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    if state.engine.get(req.id).is_none() {
        return HttpResponse::NotFound().json(ErrorResponse {
            error: "Location not found".to_string(),
            message: format!("No location with id {}", req.id),
            status_code: 404,
        });
    }

    match state.favorites.toggle(req.id) {
        Ok((saved, count)) => {
            tracing::debug!(
                "Favorite {} for location {} ({} saved)",
                if saved { "added" } else { "removed" },
                req.id,
                count
            );
            HttpResponse::Ok().json(ToggleFavoriteResponse {
                id: req.id,
                saved,
                count,
            })
        }
        Err(e) => {
            tracing::error!("Failed to persist favorites: {}", e);
            HttpResponse::InternalServerError().json(ErrorResponse {
                error: "Failed to save favorite".to_string(),
                message: e.to_string(),
                status_code: 500,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_health_check_response() {
        let response = HealthResponse {
            status: "healthy".to_string(),
            version: "0.1.0".to_string(),
            timestamp: chrono::Utc::now(),
            catalog_size: 16,
        };

        assert_eq!(response.status, "healthy");
        assert_eq!(response.catalog_size, 16);
    }
}
