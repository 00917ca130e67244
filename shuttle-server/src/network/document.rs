//! JSON network documents.
//!
//! The on-disk shape mirrors what the data pipeline produces:
//!
//! ```json
//! {
//!   "routes": [
//!     { "id": "1", "name": "Gold Route", "color": "#b3a369",
//!       "stops": [ { "id": "stop1", "name": "Tech Square WB",
//!                    "latitude": 33.7764, "longitude": -84.3889 } ] }
//!   ],
//!   "locations": [ { "name": "Library", "latitude": 33.7746, "longitude": -84.3967 } ]
//! }
//! ```
//!
//! Unknown fields (e.g. a stop's `sequence`) are ignored; array order is
//! the ride order.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::domain::{Coordinate, Route, RouteId, Stop, StopId};

use super::{NetworkError, TransitNetwork};

/// The built-in campus network.
const CAMPUS_JSON: &str = include_str!("../../data/campus.json");

/// A stop as it appears in a network document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StopRecord {
    pub id: String,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
}

/// A route as it appears in a network document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteRecord {
    pub id: String,
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,

    /// Inactive routes are kept in the document but not loaded.
    #[serde(default = "default_active")]
    pub active: bool,

    pub stops: Vec<StopRecord>,
}

/// A named place users can pick as origin or destination.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationRecord {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
}

/// A complete network document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetworkDocument {
    pub routes: Vec<RouteRecord>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub locations: Vec<LocationRecord>,
}

fn default_active() -> bool {
    true
}

impl NetworkDocument {
    /// Parse a document from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, NetworkError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse a document from a file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, NetworkError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// The campus shuttle network shipped with the server.
    pub fn campus() -> Result<Self, NetworkError> {
        Self::from_json(CAMPUS_JSON)
    }

    /// Validate the document and build a network from its active routes.
    pub fn to_network(&self) -> Result<TransitNetwork, NetworkError> {
        let routes = self
            .routes
            .iter()
            .filter(|r| r.active)
            .map(RouteRecord::to_route)
            .collect::<Result<Vec<_>, _>>()?;

        TransitNetwork::new(routes)
    }
}

impl RouteRecord {
    fn to_route(&self) -> Result<Route, NetworkError> {
        let stops = self
            .stops
            .iter()
            .map(StopRecord::to_stop)
            .collect::<Result<Vec<_>, _>>()?;

        let mut route = Route::new(RouteId::parse(&self.id)?, self.name.clone(), stops)?;
        if let Some(code) = &self.code {
            route = route.with_code(code.clone());
        }
        if let Some(color) = &self.color {
            route = route.with_color(color.clone());
        }
        Ok(route)
    }
}

impl StopRecord {
    fn to_stop(&self) -> Result<Stop, NetworkError> {
        Ok(Stop::new(
            StopId::parse(&self.id)?,
            self.name.clone(),
            Coordinate::new(self.latitude, self.longitude),
        ))
    }
}

impl LocationRecord {
    pub fn coordinate(&self) -> Coordinate {
        Coordinate::new(self.latitude, self.longitude)
    }
}
