// Distance calculation utilities

use crate::models::{Distance, Location};

/// Mean Earth radius in kilometers (spherical approximation)
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Great-circle distance between two locations in kilometers (Haversine).
///
/// Uses the `asin(sqrt(a))` form; precision near antipodal points is not
/// corrected for.
pub fn haversine_distance(p1: &Location, p2: &Location) -> Distance {
    let lat1 = p1.latitude.to_radians();
    let lon1 = p1.longitude.to_radians();
    let lat2 = p2.latitude.to_radians();
    let lon2 = p2.longitude.to_radians();

    let d_lat = lat2 - lat1;
    let d_lon = lon2 - lon1;

    let a = (d_lat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (d_lon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().asin();

    EARTH_RADIUS_KM * c
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_point_is_zero() {
        let p = Location::new(12.9716, 77.5946);
        assert_eq!(haversine_distance(&p, &p), 0.0);
    }

    #[test]
    fn test_symmetric() {
        let p1 = Location::new(12.9716, 77.5946);
        let p2 = Location::new(12.9343, 77.6214);
        assert_eq!(haversine_distance(&p1, &p2), haversine_distance(&p2, &p1));
    }

    #[test]
    fn test_nearby_urban_points() {
        let p1 = Location::new(12.9716, 77.5946);
        let p2 = Location::new(12.9343, 77.6214);

        let distance = haversine_distance(&p1, &p2);
        assert!(distance > 0.0 && distance < 10.0, "got {}", distance);
    }

    #[test]
    fn test_one_degree_along_equator() {
        let p1 = Location::new(0.0, 0.0);
        let p2 = Location::new(0.0, 1.0);

        let expected = EARTH_RADIUS_KM * 1.0_f64.to_radians();
        assert!((haversine_distance(&p1, &p2) - expected).abs() < 1e-9);
    }

    #[test]
    fn test_antipodal_points_are_finite() {
        let p1 = Location::new(0.0, 0.0);
        let p2 = Location::new(0.0, 180.0);

        let distance = haversine_distance(&p1, &p2);
        assert!(distance.is_finite());
        assert!((distance - EARTH_RADIUS_KM * std::f64::consts::PI).abs() < 1e-6);
    }
}
