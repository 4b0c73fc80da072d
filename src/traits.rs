//! Provider seams for the map screen.
//!
//! These are intentionally minimal. The Google web APIs implement them in
//! production; tests substitute mocks. The overlay layer is written
//! against the traits, not the concrete client.

use std::fmt;

use crate::geometry::Point;
use crate::places::Place;
use crate::polyline::PolylineError;
use crate::route::RoutePlan;

/// Computes walking routes between two coordinates.
pub trait DirectionsProvider {
    fn walking_route(&self, origin: Point, destination: Point) -> Result<RoutePlan, ProviderError>;
}

/// Searches for places around a coordinate.
pub trait PlaceProvider {
    fn search_nearby(
        &self,
        center: Point,
        radius_meters: u32,
        keyword: &str,
    ) -> Result<Vec<Place>, ProviderError>;
}

#[derive(Debug)]
pub enum ProviderError {
    Http(reqwest::Error),
    /// The provider answered with a non-OK status field.
    Status(String),
    /// The provider returned no routes for the requested pair.
    NoRoute,
    Polyline(PolylineError),
}

impl From<reqwest::Error> for ProviderError {
    fn from(err: reqwest::Error) -> Self {
        ProviderError::Http(err)
    }
}

impl From<PolylineError> for ProviderError {
    fn from(err: PolylineError) -> Self {
        ProviderError::Polyline(err)
    }
}

impl fmt::Display for ProviderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProviderError::Http(err) => write!(f, "provider request failed: {}", err),
            ProviderError::Status(status) => write!(f, "provider status {}", status),
            ProviderError::NoRoute => write!(f, "provider returned no routes"),
            ProviderError::Polyline(err) => write!(f, "route geometry undecodable: {}", err),
        }
    }
}

impl std::error::Error for ProviderError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ProviderError::Http(err) => Some(err),
            ProviderError::Polyline(err) => Some(err),
            _ => None,
        }
    }
}
