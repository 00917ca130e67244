//! Shuttle route types.

use std::fmt;

use super::{DomainError, Stop, StopId};

/// Error returned when parsing an invalid route identifier.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid route id: {reason}")]
pub struct InvalidRouteId {
    reason: &'static str,
}

/// Identifier of a shuttle route.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RouteId(String);

impl RouteId {
    /// Parse a route id. Same rules as [`StopId::parse`].
    pub fn parse(s: &str) -> Result<Self, InvalidRouteId> {
        if s.is_empty() {
            return Err(InvalidRouteId {
                reason: "must not be empty",
            });
        }

        if s.trim() != s {
            return Err(InvalidRouteId {
                reason: "must not have leading or trailing whitespace",
            });
        }

        Ok(RouteId(s.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for RouteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RouteId({})", self.0)
    }
}

impl fmt::Display for RouteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A shuttle route: one line's directional, ordered sequence of stops.
///
/// # Invariants
///
/// - At least one stop
///
/// Riders only travel forward along `stops`; a route that runs in both
/// directions is two routes.
#[derive(Debug, Clone, PartialEq)]
pub struct Route {
    id: RouteId,
    name: String,
    code: Option<String>,
    color: Option<String>,
    stops: Vec<Stop>,
}

impl Route {
    /// Construct a route, rejecting an empty stop sequence.
    ///
    /// # Examples
    ///
    /// ```
    /// use shuttle_server::domain::{Coordinate, Route, RouteId, Stop, StopId};
    ///
    /// let stop = Stop::new(
    ///     StopId::parse("stop1").unwrap(),
    ///     "Tech Square WB",
    ///     Coordinate::new(33.7764, -84.3889),
    /// );
    /// let route = Route::new(RouteId::parse("1").unwrap(), "Gold Route", vec![stop]).unwrap();
    /// assert_eq!(route.stops().len(), 1);
    ///
    /// assert!(Route::new(RouteId::parse("2").unwrap(), "Empty", vec![]).is_err());
    /// ```
    pub fn new(
        id: RouteId,
        name: impl Into<String>,
        stops: Vec<Stop>,
    ) -> Result<Self, DomainError> {
        if stops.is_empty() {
            return Err(DomainError::EmptyRoute(id));
        }

        Ok(Self {
            id,
            name: name.into(),
            code: None,
            color: None,
            stops,
        })
    }

    /// Attach a short display code (e.g. "GLD").
    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }

    /// Attach a display color (e.g. "#b3a369").
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn id(&self) -> &RouteId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn code(&self) -> Option<&str> {
        self.code.as_deref()
    }

    pub fn color(&self) -> Option<&str> {
        self.color.as_deref()
    }

    /// Returns the stops in ride order.
    pub fn stops(&self) -> &[Stop] {
        &self.stops
    }

    /// Position of the first stop with the given id.
    pub fn position(&self, id: &StopId) -> Option<usize> {
        self.stops.iter().position(|s| s.id() == id)
    }

    /// Position of the first stop with the given name.
    pub fn position_by_name(&self, name: &str) -> Option<usize> {
        self.stops.iter().position(|s| s.name() == name)
    }

    /// Where a rider arriving at `stop` on another route would board this one.
    ///
    /// An id match is preferred; otherwise the first stop sharing the name.
    pub fn boarding_position(&self, stop: &Stop) -> Option<usize> {
        self.position(stop.id())
            .or_else(|| self.position_by_name(stop.name()))
    }
}
