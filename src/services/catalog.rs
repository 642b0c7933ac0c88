use std::collections::HashSet;
use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::models::Catalog;

/// Catalog dataset compiled into the binary; used when no override path
/// is configured
const BUNDLED_CATALOG: &str = include_str!("../../data/locations.json");

/// Errors that can occur while loading the catalog
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse catalog: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid catalog: {0}")]
    Invalid(String),
}

/// Load and validate the catalog
///
/// Reads the file at `path` when given, otherwise the bundled dataset.
/// The catalog is parsed once at startup and treated as an immutable
/// snapshot afterwards.
pub fn load_catalog(path: Option<&Path>) -> Result<Catalog, CatalogError> {
    let catalog: Catalog = match path {
        Some(path) => {
            tracing::info!("Loading catalog from {}", path.display());
            serde_json::from_str(&fs::read_to_string(path)?)?
        }
        None => serde_json::from_str(BUNDLED_CATALOG)?,
    };

    validate(&catalog)?;
    Ok(catalog)
}

/// Structural validation: non-empty, unique ids
///
/// Categorical keys missing from the option tables are logged but do not
/// fail the load; the engine treats them as ordinary non-matching values.
fn validate(catalog: &Catalog) -> Result<(), CatalogError> {
    if catalog.is_empty() {
        return Err(CatalogError::Invalid(
            "catalog contains no locations".to_string(),
        ));
    }

    let mut seen = HashSet::new();
    for location in &catalog.locations {
        if !seen.insert(location.id) {
            return Err(CatalogError::Invalid(format!(
                "duplicate location id {}",
                location.id
            )));
        }
    }

    let options = &catalog.filter_options;
    for location in &catalog.locations {
        if !options.duration.is_empty() && !options.duration.contains_key(&location.duration) {
            tracing::warn!(
                "Location {} has unknown duration key '{}'",
                location.id,
                location.duration
            );
        }
        for interest in &location.interests {
            if !options.interests.is_empty() && !options.interests.contains_key(interest) {
                tracing::warn!(
                    "Location {} has unknown interest key '{}'",
                    location.id,
                    interest
                );
            }
        }
        for age_range in &location.age_ranges {
            if !options.age_ranges.is_empty() && !options.age_ranges.contains_key(age_range) {
                tracing::warn!(
                    "Location {} has unknown age range key '{}'",
                    location.id,
                    age_range
                );
            }
        }
    }

    Ok(())
}
