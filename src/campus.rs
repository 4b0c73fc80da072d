//! Build-time campus constants: boundary, center, and landmark registries.
//!
//! Coordinates sourced from the university facilities map. Loaded once at
//! process start and treated as immutable for the process lifetime; pass
//! these tables by reference, never clone them per call.

use crate::geometry::Point;
use crate::landmarks::Landmark;
use crate::landmarks::LandmarkKind::{AcademicBuilding, ParkingStructure};

/// Geographic center of campus; the fallback pin for unresolvable labels.
pub const CAMPUS_CENTER: Point = Point::new(42.357341, -83.069711);

/// Campus boundary, clockwise from the northwest corner.
pub const CAMPUS_BOUNDARY: [Point; 4] = [
    Point::new(42.364250, -83.080500),
    Point::new(42.364250, -83.058500),
    Point::new(42.348750, -83.058500),
    Point::new(42.348750, -83.080500),
];

// ============================================================================
// Academic Buildings
// ============================================================================

pub const BUILDINGS: &[Landmark] = &[
    Landmark::new("Main Library", AcademicBuilding, 42.357717, -83.071417),
    Landmark::new("Science Hall", AcademicBuilding, 42.356389, -83.069556),
    Landmark::new("State Hall", AcademicBuilding, 42.356930, -83.067972),
    Landmark::new("Chemistry Building", AcademicBuilding, 42.357050, -83.070250),
    Landmark::new("Physics Research Building", AcademicBuilding, 42.357247, -83.068250),
    Landmark::new("Engineering Building", AcademicBuilding, 42.358364, -83.067583),
    Landmark::new("General Lectures", AcademicBuilding, 42.356083, -83.068639),
    Landmark::new("Education Building", AcademicBuilding, 42.356694, -83.071139),
    Landmark::new("Biological Sciences Building", AcademicBuilding, 42.355417, -83.070861),
    Landmark::new("Law Classroom Building", AcademicBuilding, 42.359861, -83.070306),
    Landmark::new("Old Main", AcademicBuilding, 42.358722, -83.073417),
    Landmark::new("Student Center", AcademicBuilding, 42.355889, -83.065861),
];

// ============================================================================
// Parking Structures
// ============================================================================

// Names follow the official numbering; descriptions carry the street
// names everyone actually uses.

pub const PARKING_STRUCTURES: &[Landmark] = &[
    Landmark::described(
        "Parking Structure 1",
        ParkingStructure,
        42.359500,
        -83.065528,
        "Anthony Wayne Structure",
    ),
    Landmark::described(
        "Parking Structure 2",
        ParkingStructure,
        42.355750,
        -83.066361,
        "Palmer Structure",
    ),
    Landmark::described(
        "Parking Structure 3",
        ParkingStructure,
        42.360139,
        -83.072250,
        "Medical Campus Structure",
    ),
    Landmark::described(
        "Parking Structure 4",
        ParkingStructure,
        42.353861,
        -83.064889,
        "Forest Structure",
    ),
    Landmark::described(
        "Parking Structure 5",
        ParkingStructure,
        42.357806,
        -83.074583,
        "Cass Structure",
    ),
];
