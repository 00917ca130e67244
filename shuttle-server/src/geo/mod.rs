//! Great-circle geometry.
//!
//! Distances are computed with the haversine formula on a spherical
//! Earth. At campus scale the error against an ellipsoidal model is far
//! below the precision of the stop coordinates.

mod nearest;

pub use nearest::{GeoError, NearestStop, nearest};

use crate::domain::Coordinate;

/// Mean Earth radius in kilometers.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Great-circle distance between two coordinates, in kilometers.
///
/// Symmetric: `distance(a, b) == distance(b, a)` bit for bit, and
/// `distance(a, a) == 0.0`. A non-finite component yields NaN.
///
/// # Examples
///
/// ```
/// use shuttle_server::domain::Coordinate;
/// use shuttle_server::geo::distance;
///
/// let a = Coordinate::new(0.0, 0.0);
/// let b = Coordinate::new(0.0, 1.0);
/// assert!((distance(a, b) - 111.195).abs() < 0.001);
/// assert_eq!(distance(a, a), 0.0);
/// ```
pub fn distance(a: Coordinate, b: Coordinate) -> f64 {
    let lat_a = a.latitude.to_radians();
    let lat_b = b.latitude.to_radians();
    // abs() keeps the result independent of argument order
    let d_lat = (b.latitude - a.latitude).abs().to_radians();
    let d_lon = (b.longitude - a.longitude).abs().to_radians();

    let h = (d_lat / 2.0).sin().powi(2) + lat_a.cos() * lat_b.cos() * (d_lon / 2.0).sin().powi(2);

    2.0 * EARTH_RADIUS_KM * h.sqrt().clamp(0.0, 1.0).asin()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_degree_at_equator() {
        let origin = Coordinate::new(0.0, 0.0);
        let east = Coordinate::new(0.0, 1.0);
        let north = Coordinate::new(1.0, 0.0);

        assert!((distance(origin, east) - 111.194_926_6).abs() < 1e-6);
        assert!((distance(origin, north) - 111.194_926_6).abs() < 1e-6);
    }

    #[test]
    fn antipodes_are_half_circumference() {
        let half = std::f64::consts::PI * EARTH_RADIUS_KM;
        let d = distance(Coordinate::new(0.0, 0.0), Coordinate::new(0.0, 180.0));
        assert!((d - half).abs() < 1e-6);

        let d = distance(Coordinate::new(90.0, 0.0), Coordinate::new(-90.0, 0.0));
        assert!((d - half).abs() < 1e-6);
    }

    #[test]
    fn campus_scale() {
        let tech_square = Coordinate::new(33.7764, -84.3889);
        let student_center = Coordinate::new(33.7738, -84.3986);
        let d = distance(tech_square, student_center);
        assert!((d - 0.942_01).abs() < 1e-4, "got {d}");
    }

    #[test]
    fn zero_for_same_point() {
        let c = Coordinate::new(33.7772, -84.3956);
        assert_eq!(distance(c, c), 0.0);
    }

    #[test]
    fn nan_input_is_not_clamped_to_a_distance() {
        let campus = Coordinate::new(33.7772, -84.3956);
        assert!(distance(Coordinate::new(f64::NAN, 0.0), campus).is_nan());
        assert!(distance(campus, Coordinate::new(0.0, f64::NAN)).is_nan());
    }
}
