//! Nearest-stop resolution.

use crate::domain::{Coordinate, Stop};

use super::distance;

/// Error from nearest-stop resolution.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GeoError {
    /// The stop set to search was empty
    #[error("cannot resolve nearest stop: stop set is empty")]
    EmptyStopSet,

    /// The point has a NaN or infinite component
    #[error("cannot resolve nearest stop: coordinate {0} is not finite")]
    NonFiniteCoordinate(Coordinate),
}

/// The stop closest to a point, with its distance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NearestStop<'a> {
    pub stop: &'a Stop,
    pub distance_km: f64,
}

/// Find the stop closest to `point`.
///
/// Scans every stop. Ties go to the earliest stop in `stops`, so the
/// result is deterministic for a fixed input order.
///
/// # Errors
///
/// Returns [`GeoError::EmptyStopSet`] if `stops` is empty, and
/// [`GeoError::NonFiniteCoordinate`] if `point` is not finite.
pub fn nearest(point: Coordinate, stops: &[Stop]) -> Result<NearestStop<'_>, GeoError> {
    if !point.is_finite() {
        return Err(GeoError::NonFiniteCoordinate(point));
    }
    let (first, rest) = stops.split_first().ok_or(GeoError::EmptyStopSet)?;

    let mut best = NearestStop {
        stop: first,
        distance_km: distance(point, first.coordinate()),
    };

    for stop in rest {
        let d = distance(point, stop.coordinate());
        if d < best.distance_km {
            best = NearestStop {
                stop,
                distance_km: d,
            };
        }
    }

    Ok(best)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::StopId;

    fn stop(id: &str, lat: f64, lon: f64) -> Stop {
        Stop::new(StopId::parse(id).unwrap(), id, Coordinate::new(lat, lon))
    }

    #[test]
    fn empty_set_is_invalid_input() {
        let err = nearest(Coordinate::new(0.0, 0.0), &[]).unwrap_err();
        assert_eq!(err, GeoError::EmptyStopSet);
    }

    #[test]
    fn non_finite_point_is_invalid_input() {
        let stops = [stop("only", 33.7764, -84.3889)];
        let err = nearest(Coordinate::new(f64::NAN, -84.3889), &stops).unwrap_err();
        assert!(matches!(err, GeoError::NonFiniteCoordinate(_)));

        let err = nearest(Coordinate::new(0.0, f64::INFINITY), &stops).unwrap_err();
        assert_eq!(
            err.to_string(),
            "cannot resolve nearest stop: coordinate (0.00000, inf) is not finite"
        );
    }

    #[test]
    fn single_stop() {
        let stops = [stop("only", 33.7764, -84.3889)];
        let found = nearest(Coordinate::new(33.7764, -84.3889), &stops).unwrap();
        assert_eq!(found.stop.id().as_str(), "only");
        assert_eq!(found.distance_km, 0.0);
    }

    #[test]
    fn picks_closest() {
        let stops = [
            stop("tech-square", 33.7764, -84.3889),
            stop("student-center", 33.7738, -84.3986),
            stop("klaus", 33.7772, -84.3956),
        ];

        let found = nearest(Coordinate::new(33.7740, -84.3980), &stops).unwrap();
        assert_eq!(found.stop.id().as_str(), "student-center");
        assert!(found.distance_km > 0.0);
        assert!(found.distance_km < 0.1);
    }

    #[test]
    fn tie_goes_to_first_occurrence() {
        // Two stops at the same place, and two equidistant stops
        let stops = [
            stop("west", 0.0, -1.0),
            stop("east", 0.0, 1.0),
            stop("west-again", 0.0, -1.0),
        ];

        let found = nearest(Coordinate::new(0.0, 0.0), &stops).unwrap();
        assert_eq!(found.stop.id().as_str(), "west");

        let found = nearest(Coordinate::new(0.0, -1.0), &stops).unwrap();
        assert_eq!(found.stop.id().as_str(), "west");
    }
}
