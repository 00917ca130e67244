//! Geographic coordinate type.

use std::fmt;

/// A point on the Earth's surface in decimal degrees (WGS84).
///
/// Ranges are not validated; the data-loading boundary is trusted to
/// supply sensible values.
///
/// # Examples
///
/// ```
/// use shuttle_server::domain::Coordinate;
///
/// let tech_square = Coordinate::new(33.7764, -84.3889);
/// assert_eq!(tech_square.latitude, 33.7764);
/// assert_eq!(tech_square.longitude, -84.3889);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    /// Create a coordinate from latitude and longitude in degrees.
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Returns true if neither component is NaN or infinite.
    pub fn is_finite(&self) -> bool {
        self.latitude.is_finite() && self.longitude.is_finite()
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.5}, {:.5})", self.latitude, self.longitude)
    }
}
