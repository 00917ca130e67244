//! Named places users can pick as trip endpoints.
//!
//! A network document may list its own locations (buildings, landmarks).
//! When it doesn't, every distinct stop name becomes a location at the
//! coordinate of the first stop seen with that name.

use std::collections::HashMap;

use crate::domain::Coordinate;
use crate::network::{LocationRecord, TransitGraph};

/// A named place.
#[derive(Debug, Clone, PartialEq)]
pub struct Location {
    pub name: String,
    pub coordinate: Coordinate,
}

/// Lookup table of named places.
///
/// Names are matched case-insensitively; listing follows insertion order.
#[derive(Debug, Clone, Default)]
pub struct LocationCatalog {
    locations: Vec<Location>,

    /// Lowercased name -> position in `locations`.
    by_name: HashMap<String, usize>,
}

impl LocationCatalog {
    /// Build a catalog from document records. Later duplicates of a name
    /// (ignoring case) are dropped.
    pub fn from_records(records: &[LocationRecord]) -> Self {
        let mut catalog = Self::default();
        for record in records {
            catalog.insert(record.name.clone(), record.coordinate());
        }
        catalog
    }

    /// Build a catalog from the distinct stop names of a graph.
    pub fn from_graph(graph: &TransitGraph) -> Self {
        let mut catalog = Self::default();
        for stop in graph.stops() {
            catalog.insert(stop.name().to_string(), stop.coordinate());
        }
        catalog
    }

    /// Use the document's locations if it has any, else the stop names.
    pub fn from_records_or_graph(records: &[LocationRecord], graph: &TransitGraph) -> Self {
        if records.is_empty() {
            Self::from_graph(graph)
        } else {
            Self::from_records(records)
        }
    }

    fn insert(&mut self, name: String, coordinate: Coordinate) {
        let key = name.to_lowercase();
        if self.by_name.contains_key(&key) {
            return;
        }
        self.by_name.insert(key, self.locations.len());
        self.locations.push(Location { name, coordinate });
    }

    /// Look up a location by name, ignoring case and surrounding whitespace.
    pub fn get(&self, name: &str) -> Option<&Location> {
        self.by_name
            .get(&name.trim().to_lowercase())
            .map(|&pos| &self.locations[pos])
    }

    pub fn iter(&self) -> impl Iterator<Item = &Location> {
        self.locations.iter()
    }

    pub fn len(&self) -> usize {
        self.locations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }
}
