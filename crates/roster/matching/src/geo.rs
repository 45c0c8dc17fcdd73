//! Great-circle distances.

use roster_types::Location;

/// Mean Earth radius in kilometers.
pub const EARTH_RADIUS_KM: f64 = 6371.005076123;

/// Haversine distance between two points, in kilometers.
///
/// Treats the Earth as a sphere of radius [`EARTH_RADIUS_KM`]; good enough for
/// "who is nearby", not for surveying.
pub fn haversine_distance_km(a: &Location, b: &Location) -> f64 {
    let lat1 = a.latitude.to_radians();
    let lat2 = b.latitude.to_radians();
    let delta_lat = (b.latitude - a.latitude).to_radians();
    let delta_lon = (b.longitude - a.longitude).to_radians();

    let h = (delta_lat / 2.0).sin().powi(2)
        + lat1.cos() * lat2.cos() * (delta_lon / 2.0).sin().powi(2);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());
    EARTH_RADIUS_KM * c
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64, tolerance: f64) {
        assert!(
            (actual - expected).abs() <= tolerance,
            "expected {expected} ± {tolerance}, got {actual}"
        );
    }

    #[test]
    fn one_degree_along_the_equator() {
        let distance = haversine_distance_km(&Location::new(0.0, 0.0), &Location::new(0.0, 1.0));
        // R * pi / 180
        assert_close(distance, 111.19, 0.01);
    }

    #[test]
    fn same_point_is_zero() {
        let milan = Location::new(45.4642, 9.19);
        assert_close(haversine_distance_km(&milan, &milan), 0.0, 1e-9);
    }

    #[test]
    fn symmetric() {
        let milan = Location::new(45.4642, 9.19);
        let rome = Location::new(41.9028, 12.4964);
        let there = haversine_distance_km(&milan, &rome);
        let back = haversine_distance_km(&rome, &milan);
        assert_close(there, back, 1e-9);
        // roughly 477 km as the crow flies
        assert_close(there, 477.0, 5.0);
    }

    #[test]
    fn antipodes_are_half_the_circumference() {
        let distance = haversine_distance_km(&Location::new(0.0, 0.0), &Location::new(0.0, 180.0));
        assert_close(distance, EARTH_RADIUS_KM * std::f64::consts::PI, 1e-6);
    }
}
