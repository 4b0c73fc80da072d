//! Nearby place results and campus-boundary filtering.

use serde::{Deserialize, Serialize};

use crate::geometry::{polygon_contains, GeometryError, Point};

/// A place returned by the nearby-search provider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Place {
    pub name: String,
    pub formatted_address: String,
    pub location: Point,
}

/// Keeps only the places inside `boundary`, preserving order.
///
/// Fails if the boundary itself is degenerate; callers choose their own
/// recovery (skip filtering, drop the overlay, alert).
pub fn places_within_boundary(
    places: Vec<Place>,
    boundary: &[Point],
) -> Result<Vec<Place>, GeometryError> {
    let mut kept = Vec::with_capacity(places.len());
    for place in places {
        if polygon_contains(place.location, boundary)? {
            kept.push(place);
        }
    }
    Ok(kept)
}
