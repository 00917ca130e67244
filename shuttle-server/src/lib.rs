//! Campus shuttle trip planner server.
//!
//! Answers: "how do I get from here to there on the shuttles?" Both ends
//! snap to their nearest stop, and a transfer-aware breadth-first search
//! finds a chain of forward rides between them.

pub mod config;
pub mod domain;
pub mod geo;
pub mod locations;
pub mod network;
pub mod planner;
pub mod web;
