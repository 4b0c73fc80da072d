//! Map-screen data assembly over the provider seams.

use std::fmt;

use tracing::debug;

use crate::campus::{BUILDINGS, CAMPUS_BOUNDARY, CAMPUS_CENTER, PARKING_STRUCTURES};
use crate::events::CampusEvent;
use crate::geometry::{GeometryError, Point};
use crate::landmarks::resolve_location;
use crate::places::{places_within_boundary, Place};
use crate::route::RoutePlan;
use crate::traits::{DirectionsProvider, PlaceProvider, ProviderError};

#[derive(Debug)]
pub enum OverlayError {
    Provider(ProviderError),
    Geometry(GeometryError),
}

impl From<ProviderError> for OverlayError {
    fn from(err: ProviderError) -> Self {
        OverlayError::Provider(err)
    }
}

impl From<GeometryError> for OverlayError {
    fn from(err: GeometryError) -> Self {
        OverlayError::Geometry(err)
    }
}

impl fmt::Display for OverlayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OverlayError::Provider(err) => write!(f, "{}", err),
            OverlayError::Geometry(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for OverlayError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            OverlayError::Provider(err) => Some(err),
            OverlayError::Geometry(err) => Some(err),
        }
    }
}

/// Searches near the campus center and keeps only results inside the
/// campus boundary.
pub fn campus_places<P: PlaceProvider>(
    provider: &P,
    keyword: &str,
    radius_meters: u32,
) -> Result<Vec<Place>, OverlayError> {
    let found = provider.search_nearby(CAMPUS_CENTER, radius_meters, keyword)?;
    let found_count = found.len();
    let kept = places_within_boundary(found, &CAMPUS_BOUNDARY)?;
    debug!(
        keyword,
        found = found_count,
        kept = kept.len(),
        "campus place search"
    );
    Ok(kept)
}

/// Resolves the event's location label against the campus registries and
/// fetches a walking route to it.
pub fn route_to_event<D: DirectionsProvider>(
    provider: &D,
    origin: Point,
    event: &CampusEvent,
) -> Result<RoutePlan, OverlayError> {
    let destination = resolve_location(&event.location, BUILDINGS, PARKING_STRUCTURES, CAMPUS_CENTER);
    Ok(provider.walking_route(origin, destination)?)
}
