//! Shuttle stop types.

use std::fmt;

use super::Coordinate;

/// Error returned when parsing an invalid stop identifier.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid stop id: {reason}")]
pub struct InvalidStopId {
    reason: &'static str,
}

/// Identifier of a shuttle stop.
///
/// Stop ids are opaque, non-empty strings without surrounding whitespace.
/// Two `Stop` records with the same id are the same physical stop.
///
/// # Examples
///
/// ```
/// use shuttle_server::domain::StopId;
///
/// let id = StopId::parse("stop4").unwrap();
/// assert_eq!(id.as_str(), "stop4");
///
/// assert!(StopId::parse("").is_err());
/// assert!(StopId::parse(" stop4").is_err());
/// ```
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StopId(String);

impl StopId {
    /// Parse a stop id from a string.
    pub fn parse(s: &str) -> Result<Self, InvalidStopId> {
        if s.is_empty() {
            return Err(InvalidStopId {
                reason: "must not be empty",
            });
        }

        if s.trim() != s {
            return Err(InvalidStopId {
                reason: "must not have leading or trailing whitespace",
            });
        }

        Ok(StopId(s.to_string()))
    }

    /// Returns the id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for StopId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StopId({})", self.0)
    }
}

impl fmt::Display for StopId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A physical shuttle stop.
///
/// Identity is the `id`. The `name` is shared by stops that are the same
/// place as far as a rider is concerned, even when operators give them
/// different ids on different routes.
#[derive(Debug, Clone, PartialEq)]
pub struct Stop {
    id: StopId,
    name: String,
    coordinate: Coordinate,
}

impl Stop {
    /// Create a stop.
    pub fn new(id: StopId, name: impl Into<String>, coordinate: Coordinate) -> Self {
        Self {
            id,
            name: name.into(),
            coordinate,
        }
    }

    pub fn id(&self) -> &StopId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn coordinate(&self) -> Coordinate {
        self.coordinate
    }

    /// Returns true if `other` is the same stop by id, or shares its name.
    ///
    /// This is the transfer-point test: riders can change between two
    /// routes wherever their stops match this way.
    pub fn is_transfer_match(&self, other: &Stop) -> bool {
        self.id == other.id || self.name == other.name
    }
}
