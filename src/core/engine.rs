use std::cmp::Ordering;

use crate::core::distance::{distance_to, format_distance};
use crate::core::filters::matches_spec;
use crate::models::{
    AvailableOptions, Catalog, Coordinates, FilterField, FilterSpec, Location, RankedLocation,
};

/// Result of a filter-and-rank pass over the catalog
#[derive(Debug)]
pub struct SearchResult {
    pub entries: Vec<RankedLocation>,
    pub total_matches: usize,
    pub catalog_size: usize,
}

/// Retain the entries satisfying every active constraint, preserving the
/// catalog's original order
///
/// Pure and deterministic; an empty result is a normal outcome.
pub fn filter_catalog<'a>(catalog: &'a [Location], spec: &FilterSpec) -> Vec<&'a Location> {
    catalog
        .iter()
        .filter(|location| matches_spec(location, spec))
        .collect()
}

/// Order entries by proximity to the observer
///
/// Each entry is paired with its distance in miles, when computable. With
/// no observer the input order is returned unchanged and every distance is
/// `None`. With an observer, geocoded entries sort ascending by distance;
/// entries without coordinates sort after them, keeping their prior
/// relative order (the sort is stable). Output is a permutation of the
/// input.
pub fn rank_by_distance<'a>(
    entries: Vec<&'a Location>,
    observer: Option<Coordinates>,
) -> Vec<(&'a Location, Option<f64>)> {
    let mut ranked: Vec<(&Location, Option<f64>)> = entries
        .into_iter()
        .map(|location| {
            let distance = observer.and_then(|obs| distance_to(obs, location));
            (location, distance)
        })
        .collect();

    if observer.is_some() {
        ranked.sort_by(|a, b| match (a.1, b.1) {
            (Some(da), Some(db)) => da.partial_cmp(&db).unwrap_or(Ordering::Equal),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        });
    }

    ranked
}

/// Whether applying `candidate` to `field` on top of `spec` still yields
/// at least one matching entry
///
/// Used to grey out dead-end filter choices. Single-select fields are
/// probed substitutively, the interest set additively.
pub fn is_option_viable(
    catalog: &[Location],
    spec: &FilterSpec,
    field: FilterField,
    candidate: &str,
) -> bool {
    let probe = spec.with_candidate(field, candidate);
    catalog.iter().any(|location| matches_spec(location, &probe))
}

/// Catalog query engine
///
/// Owns the immutable catalog snapshot loaded at startup and answers every
/// filter, ranking, and option-viability query against it. Holds no other
/// state; each call is an independent pure computation.
#[derive(Debug, Clone)]
pub struct CatalogEngine {
    catalog: Catalog,
}

impl CatalogEngine {
    pub fn new(catalog: Catalog) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn get(&self, id: u32) -> Option<&Location> {
        self.catalog.get(id)
    }

    /// Filter the catalog, rank by proximity when an observer is present,
    /// and annotate each entry with its display distance
    pub fn search(&self, spec: &FilterSpec, observer: Option<Coordinates>) -> SearchResult {
        let matches = filter_catalog(&self.catalog.locations, spec);
        let total_matches = matches.len();

        let entries = rank_by_distance(matches, observer)
            .into_iter()
            .map(|(location, distance)| RankedLocation {
                location: location.clone(),
                distance_miles: distance,
                distance_label: distance.map(format_distance),
            })
            .collect();

        SearchResult {
            entries,
            total_matches,
            catalog_size: self.catalog.len(),
        }
    }

    pub fn is_option_viable(&self, spec: &FilterSpec, field: FilterField, candidate: &str) -> bool {
        is_option_viable(&self.catalog.locations, spec, field, candidate)
    }

    /// The option keys per field that still yield a non-empty result when
    /// combined with the current selection, in option-table order
    ///
    /// City candidates come from the selected region's city list; with no
    /// region selected the city list is empty, matching the dependent
    /// picker in the client.
    pub fn available_options(&self, spec: &FilterSpec) -> AvailableOptions {
        let options = &self.catalog.filter_options;

        let viable = |field: FilterField, key: &str| self.is_option_viable(spec, field, key);

        AvailableOptions {
            duration: options
                .duration
                .keys()
                .filter(|key| viable(FilterField::Duration, key))
                .cloned()
                .collect(),
            age_ranges: options
                .age_ranges
                .keys()
                .filter(|key| viable(FilterField::AgeRange, key))
                .cloned()
                .collect(),
            interests: options
                .interests
                .keys()
                .filter(|key| viable(FilterField::Interest, key))
                .cloned()
                .collect(),
            regions: options
                .regions
                .keys()
                .filter(|key| viable(FilterField::Region, key))
                .cloned()
                .collect(),
            cities: spec
                .region
                .as_ref()
                .and_then(|region| options.regions.get(region))
                .map(|cities| {
                    cities
                        .iter()
                        .filter(|city| viable(FilterField::City, city))
                        .cloned()
                        .collect()
                })
                .unwrap_or_default(),
        }
    }
}
