//! Route steps, marker derivation, and assembled route plans.

use serde::{Deserialize, Serialize};

use crate::geometry::Point;
use crate::polyline::Polyline;

/// A lat/lng pair as the directions provider spells it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

/// One turn-by-turn segment of a provider route. Read-only input shape;
/// field names match the provider wire format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteStep {
    pub start_location: LatLng,
    pub end_location: LatLng,
    pub distance: StepDistance,
    pub html_instructions: String,
}

/// Step distance as reported upstream: display text plus meters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StepDistance {
    pub text: String,
    pub value: i64,
}

/// A per-step marker for the map overlay.
///
/// `id` is the step's zero-based index as a string; recomputing markers
/// for a new route fully replaces the prior sequence, ids are not reused
/// across routes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteMarker {
    pub id: String,
    pub coordinate: Point,
    pub distance: String,
    pub instruction: String,
}

/// A complete walking route ready for the map overlay.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoutePlan {
    pub path: Polyline,
    pub markers: Vec<RouteMarker>,
}

/// Derives one marker per step, in step order.
///
/// The marker sits at the step's start location; the distance text passes
/// through verbatim (format owned by the provider) and the instruction is
/// the provider HTML with markup removed.
pub fn build_markers(steps: &[RouteStep]) -> Vec<RouteMarker> {
    steps
        .iter()
        .enumerate()
        .map(|(index, step)| RouteMarker {
            id: index.to_string(),
            coordinate: Point::new(step.start_location.lat, step.start_location.lng),
            distance: step.distance.text.clone(),
            instruction: strip_markup(&step.html_instructions),
        })
        .collect()
}

/// Removes `<...>` runs. An unterminated `<` swallows the remainder.
fn strip_markup(instructions: &str) -> String {
    let mut out = String::with_capacity(instructions.len());
    let mut in_tag = false;

    for ch in instructions.chars() {
        match ch {
            '<' => in_tag = true,
            '>' if in_tag => in_tag = false,
            _ if in_tag => {}
            _ => out.push(ch),
        }
    }

    out
}
