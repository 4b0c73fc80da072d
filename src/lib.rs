//! campus-nav geometry and routing core
//!
//! Pure geospatial building blocks for the campus map screen: boundary
//! containment, the encoded-polyline codec, free-text place resolution,
//! and route marker derivation, plus the provider adapters that feed them.

pub mod geometry;
pub mod polyline;
pub mod landmarks;
pub mod campus;
pub mod route;
pub mod places;
pub mod events;
pub mod traits;
pub mod google;
pub mod overlay;
