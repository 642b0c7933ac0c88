use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A latitude/longitude pair in decimal degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

/// A catalog entry: one family-activity location
///
/// Entries are read-only for the lifetime of the process. Optional fields
/// are absent for locations without verified data and must never fail
/// filtering or ranking.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Location {
    pub id: u32,
    pub name: String,
    pub address: String,
    pub city: String,
    pub region: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coordinates: Option<Coordinates>,
    pub cost: String,
    pub duration: String,
    #[serde(rename = "ageRanges", default)]
    pub age_ranges: Vec<String>,
    #[serde(default)]
    pub interests: Vec<String>,
    #[serde(rename = "parentQuotes", default)]
    pub parent_quotes: Vec<String>,
    #[serde(rename = "insiderTips", alias = "insiderTip", default)]
    pub insider_tips: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(rename = "longDescription", default, skip_serializing_if = "Option::is_none")]
    pub long_description: Option<String>,
}

/// User-selected filter constraints
///
/// `None` (or an empty interest set) means "no constraint" for that field.
/// All active constraints combine with AND; the interest set matches with
/// OR semantics across its members.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterSpec {
    #[serde(default)]
    pub duration: Option<String>,
    #[serde(rename = "ageRange", default)]
    pub age_range: Option<String>,
    #[serde(default)]
    pub interests: Vec<String>,
    #[serde(default)]
    pub region: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
}

impl FilterSpec {
    /// Spec with `candidate` applied to `field` on top of the current
    /// selection. Single-select fields are replaced; the multi-select
    /// interest field is additive.
    pub fn with_candidate(&self, field: FilterField, candidate: &str) -> FilterSpec {
        let mut spec = self.clone();
        match field {
            FilterField::Duration => spec.duration = Some(candidate.to_string()),
            FilterField::AgeRange => spec.age_range = Some(candidate.to_string()),
            FilterField::Interest => {
                if !spec.interests.iter().any(|i| i == candidate) {
                    spec.interests.push(candidate.to_string());
                }
            }
            FilterField::Region => spec.region = Some(candidate.to_string()),
            FilterField::City => spec.city = Some(candidate.to_string()),
        }
        spec
    }
}

/// The filterable fields of a [`FilterSpec`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FilterField {
    Duration,
    AgeRange,
    Interest,
    Region,
    City,
}

/// Option tables shipped alongside the location data
///
/// Maps categorical keys to human-readable labels; `regions` maps each
/// region name to its city names and drives the dependent city picker.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FilterOptions {
    #[serde(default)]
    pub duration: BTreeMap<String, String>,
    #[serde(rename = "ageRanges", default)]
    pub age_ranges: BTreeMap<String, String>,
    #[serde(default)]
    pub interests: BTreeMap<String, String>,
    #[serde(default)]
    pub regions: BTreeMap<String, Vec<String>>,
}

/// The full catalog dataset: locations plus their option tables
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Catalog {
    pub locations: Vec<Location>,
    #[serde(rename = "filterOptions", default)]
    pub filter_options: FilterOptions,
}

impl Catalog {
    pub fn get(&self, id: u32) -> Option<&Location> {
        self.locations.iter().find(|loc| loc.id == id)
    }

    pub fn len(&self) -> usize {
        self.locations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }
}

/// A filtered catalog entry annotated with its distance to the observer
///
/// Distance fields are absent when no observer was supplied or the entry
/// has no verified coordinates.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankedLocation {
    #[serde(flatten)]
    pub location: Location,
    #[serde(rename = "distanceMiles", default, skip_serializing_if = "Option::is_none")]
    pub distance_miles: Option<f64>,
    #[serde(rename = "distanceLabel", default, skip_serializing_if = "Option::is_none")]
    pub distance_label: Option<String>,
}

/// Per-field lists of option keys that still yield at least one result
/// when combined with the current filter selection
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AvailableOptions {
    pub duration: Vec<String>,
    #[serde(rename = "ageRanges")]
    pub age_ranges: Vec<String>,
    pub interests: Vec<String>,
    pub regions: Vec<String>,
    pub cities: Vec<String>,
}
