//! Named campus landmarks and free-text location resolution.

use crate::geometry::Point;

/// Landmark classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LandmarkKind {
    AcademicBuilding,
    ParkingStructure,
}

/// A named point of interest with fixed coordinates.
#[derive(Debug, Clone)]
pub struct Landmark {
    pub name: &'static str,
    pub kind: LandmarkKind,
    pub latitude: f64,
    pub longitude: f64,
    /// Colloquial or descriptive name, matched as a last resort for
    /// parking structures.
    pub description: Option<&'static str>,
}

impl Landmark {
    pub const fn new(name: &'static str, kind: LandmarkKind, latitude: f64, longitude: f64) -> Self {
        Self {
            name,
            kind,
            latitude,
            longitude,
            description: None,
        }
    }

    pub const fn described(
        name: &'static str,
        kind: LandmarkKind,
        latitude: f64,
        longitude: f64,
        description: &'static str,
    ) -> Self {
        Self {
            name,
            kind,
            latitude,
            longitude,
            description: Some(description),
        }
    }

    pub fn location(&self) -> Point {
        Point::new(self.latitude, self.longitude)
    }
}

/// Resolves a free-text location label to display coordinates.
///
/// The label is trimmed and lowercased, then matched by substring against
/// the building registry and, failing that, the parking registry; parking
/// descriptions count as a last matching criterion. The first match in
/// registry order wins. There is no scoring, so an ambiguous label
/// resolves to whichever entry comes first; callers that need precision
/// should geocode upstream. Labels that match nothing resolve to
/// `fallback`.
pub fn resolve_location(
    label: &str,
    buildings: &[Landmark],
    parking: &[Landmark],
    fallback: Point,
) -> Point {
    let needle = label.trim().to_lowercase();
    if needle.is_empty() {
        return fallback;
    }

    for building in buildings {
        if matches_name(&needle, building) {
            return building.location();
        }
    }

    for structure in parking {
        if matches_name(&needle, structure) || matches_description(&needle, structure) {
            return structure.location();
        }
    }

    fallback
}

/// Substring match in both directions against the landmark name.
fn matches_name(needle: &str, landmark: &Landmark) -> bool {
    let name = landmark.name.to_lowercase();
    needle.contains(&name) || name.contains(needle)
}

fn matches_description(needle: &str, landmark: &Landmark) -> bool {
    landmark
        .description
        .map(|description| needle.contains(&description.to_lowercase()))
        .unwrap_or(false)
}
