use crate::models::{Coordinates, Location};

/// Earth's radius in miles
const EARTH_RADIUS_MILES: f64 = 3959.0;

/// Calculate the Haversine distance between two points in miles
///
/// # Arguments
/// * `lat1` - Latitude of first point in degrees
/// * `lon1` - Longitude of first point in degrees
/// * `lat2` - Latitude of second point in degrees
/// * `lon2` - Longitude of second point in degrees
///
/// # Returns
/// Great-circle distance in miles
#[inline]
pub fn haversine_distance(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let lat1_rad = lat1.to_radians();
    let lat2_rad = lat2.to_radians();
    let delta_lat = (lat2 - lat1).to_radians();
    let delta_lon = (lon2 - lon1).to_radians();

    let a = (delta_lat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (delta_lon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_MILES * c
}

/// Distance from the observer to a location, if the location is geocoded
#[inline]
pub fn distance_to(observer: Coordinates, location: &Location) -> Option<f64> {
    location.coordinates.map(|coords| {
        haversine_distance(
            observer.latitude,
            observer.longitude,
            coords.latitude,
            coords.longitude,
        )
    })
}

/// Format a distance for display, rounded to one decimal place
///
/// `2.34` becomes `"2.3 miles away"`.
pub fn format_distance(miles: f64) -> String {
    format!("{:.1} miles away", miles)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Coordinates;

    #[test]
    fn test_haversine_distance_zero_for_same_point() {
        let distance = haversine_distance(37.8081, -122.2603, 37.8081, -122.2603);
        assert!(distance.abs() < 1e-9);
    }

    #[test]
    fn test_haversine_distance_symmetric() {
        let there = haversine_distance(37.7749, -122.4194, 37.8044, -122.2712);
        let back = haversine_distance(37.8044, -122.2712, 37.7749, -122.4194);
        assert!((there - back).abs() < 1e-9);
    }

    #[test]
    fn test_haversine_distance_sf_to_oakland() {
        // Downtown San Francisco to downtown Oakland is roughly 8 miles
        let distance = haversine_distance(37.7749, -122.4194, 37.8044, -122.2712);
        assert!(distance > 7.0 && distance < 10.0, "got {}", distance);
    }

    #[test]
    fn test_distance_to_ungecoded_location_is_none() {
        let location = Location {
            id: 1,
            name: "Somewhere".to_string(),
            address: "1 Main St".to_string(),
            city: "Oakland".to_string(),
            region: "East Bay".to_string(),
            coordinates: None,
            cost: "Free".to_string(),
            duration: "quick".to_string(),
            age_ranges: vec![],
            interests: vec![],
            parent_quotes: vec![],
            insider_tips: None,
            description: None,
            long_description: None,
        };
        let observer = Coordinates {
            latitude: 37.8,
            longitude: -122.2,
        };

        assert!(distance_to(observer, &location).is_none());
    }

    #[test]
    fn test_format_distance_rounds_to_one_decimal() {
        assert_eq!(format_distance(2.34), "2.3 miles away");
        assert_eq!(format_distance(0.0), "0.0 miles away");
        assert_eq!(format_distance(10.96), "11.0 miles away");
    }
}
