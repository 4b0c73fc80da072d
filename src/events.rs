//! Campus event records and map-pin resolution.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::campus::{BUILDINGS, CAMPUS_CENTER, PARKING_STRUCTURES};
use crate::geometry::Point;
use crate::landmarks::resolve_location;

/// An event document as stored upstream. Field names follow the document
/// store's camelCase convention.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CampusEvent {
    pub title: String,
    /// Free-text location label, e.g. "Science Hall room 204".
    pub location: String,
    pub date: String,
    pub start_time: String,
    pub end_time: String,
    #[serde(default)]
    pub attendees: Vec<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    pub is_public: bool,
}

/// An event annotated with a display coordinate for the map.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EventPin {
    pub title: String,
    pub coordinate: Point,
}

/// Resolves a display coordinate for every event against the campus
/// registries. Events are independent, so resolution maps over them in
/// parallel; the registries are shared read-only tables.
pub fn resolve_event_pins(events: &[CampusEvent]) -> Vec<EventPin> {
    events
        .par_iter()
        .map(|event| EventPin {
            title: event.title.clone(),
            coordinate: resolve_location(&event.location, BUILDINGS, PARKING_STRUCTURES, CAMPUS_CENTER),
        })
        .collect()
}
