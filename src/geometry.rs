//! Geographic primitives and polygon containment.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A geographic coordinate.
///
/// Latitude is expected in [-90, 90] and longitude in [-180, 180], but no
/// validation is performed; callers own the range of their inputs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub latitude: f64,
    pub longitude: f64,
}

impl Point {
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeometryError {
    /// Containment needs a polygon with at least 3 vertices.
    InvalidPolygon { vertices: usize },
}

impl fmt::Display for GeometryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GeometryError::InvalidPolygon { vertices } => {
                write!(f, "polygon needs at least 3 vertices, got {}", vertices)
            }
        }
    }
}

impl std::error::Error for GeometryError {}

/// Tests whether a point lies inside a simple polygon.
///
/// Standard ray-casting / even-odd rule. The polygon is implicitly closed
/// (last vertex connects back to the first). Latitude plays the role of
/// the horizontal axis internally and longitude the vertical one; that
/// matches the map screen's historical behavior on irregular polygons and
/// is immaterial for axis-aligned rectangles. Points exactly on a vertex
/// or edge may land on either side, the usual even-odd limitation.
pub fn polygon_contains(point: Point, polygon: &[Point]) -> Result<bool, GeometryError> {
    if polygon.len() < 3 {
        return Err(GeometryError::InvalidPolygon {
            vertices: polygon.len(),
        });
    }

    let mut inside = false;
    let mut j = polygon.len() - 1;
    for i in 0..polygon.len() {
        let a = polygon[i];
        let b = polygon[j];

        if (a.longitude > point.longitude) != (b.longitude > point.longitude) {
            let crossing = (b.latitude - a.latitude) * (point.longitude - a.longitude)
                / (b.longitude - a.longitude)
                + a.latitude;
            if point.latitude < crossing {
                inside = !inside;
            }
        }

        j = i;
    }

    Ok(inside)
}
