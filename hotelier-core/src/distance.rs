//! Great-circle distance between WGS84 coordinates.
//!
//! Coordinates follow the `geo` convention used throughout the workspace:
//! `x = longitude`, `y = latitude`, both in degrees.

use geo::Coord;

/// Mean Earth radius used for area-search distance ranking.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Haversine distance between two coordinates in kilometres.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use hotelier_core::haversine_km;
///
/// let delhi = Coord { x: 77.2090, y: 28.6139 };
/// assert_eq!(haversine_km(delhi, delhi), 0.0);
/// ```
pub fn haversine_km(from: Coord<f64>, to: Coord<f64>) -> f64 {
    let d_lat = (to.y - from.y).to_radians();
    let d_lng = (to.x - from.x).to_radians();
    let from_lat = from.y.to_radians();
    let to_lat = to.y.to_radians();

    let a = (d_lat / 2.0).sin().powi(2) + from_lat.cos() * to_lat.cos() * (d_lng / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().asin();
    EARTH_RADIUS_KM * c
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn assert_close(actual: f64, expected: f64, tolerance: f64) {
        let delta = (actual - expected).abs();
        assert!(
            delta <= tolerance,
            "expected {expected}, got {actual} (|delta| = {delta})"
        );
    }

    #[rstest]
    fn zero_for_identical_points() {
        let point = Coord { x: 72.8777, y: 19.0760 };
        assert_close(haversine_km(point, point), 0.0, 1.0e-9);
    }

    #[rstest]
    fn one_degree_of_latitude_is_about_111_km() {
        let south = Coord { x: 0.0, y: 0.0 };
        let north = Coord { x: 0.0, y: 1.0 };
        assert_close(haversine_km(south, north), 111.195, 0.01);
    }

    #[rstest]
    fn delhi_to_mumbai() {
        let delhi = Coord { x: 77.2090, y: 28.6139 };
        let mumbai = Coord { x: 72.8777, y: 19.0760 };
        assert_close(haversine_km(delhi, mumbai), 1148.09, 0.5);
    }

    #[rstest]
    fn symmetric() {
        let a = Coord { x: 77.5946, y: 12.9716 };
        let b = Coord { x: 73.8567, y: 18.5204 };
        assert_close(haversine_km(a, b), haversine_km(b, a), 1.0e-9);
    }
}
