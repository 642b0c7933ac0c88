use crate::models::{FilterSpec, Location};

/// Check the duration constraint: exact key equality
#[inline]
pub fn matches_duration(location: &Location, spec: &FilterSpec) -> bool {
    match &spec.duration {
        Some(duration) => location.duration == *duration,
        None => true,
    }
}

/// Check the age range constraint: the selected key must be one of the
/// entry's age ranges
#[inline]
pub fn matches_age_range(location: &Location, spec: &FilterSpec) -> bool {
    match &spec.age_range {
        Some(age_range) => location.age_ranges.iter().any(|a| a == age_range),
        None => true,
    }
}

/// Check the interest constraint with OR semantics: a location matches if
/// it shares at least one interest with the selected set. An empty
/// selection is no constraint.
#[inline]
pub fn matches_interests(location: &Location, spec: &FilterSpec) -> bool {
    if spec.interests.is_empty() {
        return true;
    }
    location
        .interests
        .iter()
        .any(|interest| spec.interests.contains(interest))
}

/// Check the region and city constraints
///
/// City applies whenever set, independent of the region selection.
#[inline]
pub fn matches_area(location: &Location, spec: &FilterSpec) -> bool {
    if let Some(region) = &spec.region {
        if location.region != *region {
            return false;
        }
    }

    if let Some(city) = &spec.city {
        if location.city != *city {
            return false;
        }
    }

    true
}

/// Check every active constraint, combined with AND
#[inline]
pub fn matches_spec(location: &Location, spec: &FilterSpec) -> bool {
    matches_duration(location, spec)
        && matches_age_range(location, spec)
        && matches_interests(location, spec)
        && matches_area(location, spec)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Coordinates;

    fn create_test_location(region: &str, city: &str, duration: &str) -> Location {
        Location {
            id: 1,
            name: "Test Spot".to_string(),
            address: "1 Main St".to_string(),
            city: city.to_string(),
            region: region.to_string(),
            coordinates: Some(Coordinates {
                latitude: 37.8,
                longitude: -122.2,
            }),
            cost: "Free".to_string(),
            duration: duration.to_string(),
            age_ranges: vec!["toddler".to_string(), "preschool".to_string()],
            interests: vec!["animals".to_string(), "nature".to_string()],
            parent_quotes: vec![],
            insider_tips: None,
            description: None,
            long_description: None,
        }
    }

    #[test]
    fn test_unconstrained_spec_matches_everything() {
        let location = create_test_location("East Bay", "Oakland", "quick");
        assert!(matches_spec(&location, &FilterSpec::default()));
    }

    #[test]
    fn test_duration_exact_match() {
        let location = create_test_location("East Bay", "Oakland", "quick");

        let spec = FilterSpec {
            duration: Some("quick".to_string()),
            ..Default::default()
        };
        assert!(matches_duration(&location, &spec));

        let spec = FilterSpec {
            duration: Some("fullDay".to_string()),
            ..Default::default()
        };
        assert!(!matches_duration(&location, &spec));
    }

    #[test]
    fn test_age_range_set_membership() {
        let location = create_test_location("East Bay", "Oakland", "quick");

        let spec = FilterSpec {
            age_range: Some("toddler".to_string()),
            ..Default::default()
        };
        assert!(matches_age_range(&location, &spec));

        let spec = FilterSpec {
            age_range: Some("bigKid".to_string()),
            ..Default::default()
        };
        assert!(!matches_age_range(&location, &spec));
    }

    #[test]
    fn test_interests_or_semantics() {
        let location = create_test_location("East Bay", "Oakland", "quick");

        // One overlapping interest is enough
        let spec = FilterSpec {
            interests: vec!["animals".to_string(), "trains".to_string()],
            ..Default::default()
        };
        assert!(matches_interests(&location, &spec));

        // No overlap at all
        let spec = FilterSpec {
            interests: vec!["trains".to_string(), "art".to_string()],
            ..Default::default()
        };
        assert!(!matches_interests(&location, &spec));
    }

    #[test]
    fn test_missing_attribute_sets_never_match_a_constraint() {
        let mut location = create_test_location("East Bay", "Oakland", "quick");
        location.age_ranges = vec![];
        location.interests = vec![];

        let spec = FilterSpec {
            age_range: Some("toddler".to_string()),
            ..Default::default()
        };
        assert!(!matches_age_range(&location, &spec));

        let spec = FilterSpec {
            interests: vec!["animals".to_string()],
            ..Default::default()
        };
        assert!(!matches_interests(&location, &spec));

        // But unconstrained specs still match
        assert!(matches_spec(&location, &FilterSpec::default()));
    }

    #[test]
    fn test_city_applies_without_region() {
        let location = create_test_location("East Bay", "Oakland", "quick");

        let spec = FilterSpec {
            city: Some("Berkeley".to_string()),
            ..Default::default()
        };
        assert!(!matches_area(&location, &spec));

        let spec = FilterSpec {
            city: Some("Oakland".to_string()),
            ..Default::default()
        };
        assert!(matches_area(&location, &spec));
    }

    #[test]
    fn test_region_and_city_combined() {
        let location = create_test_location("East Bay", "Oakland", "quick");

        let spec = FilterSpec {
            region: Some("East Bay".to_string()),
            city: Some("Oakland".to_string()),
            ..Default::default()
        };
        assert!(matches_area(&location, &spec));

        let spec = FilterSpec {
            region: Some("Peninsula".to_string()),
            city: Some("Oakland".to_string()),
            ..Default::default()
        };
        assert!(!matches_area(&location, &spec));
    }
}
