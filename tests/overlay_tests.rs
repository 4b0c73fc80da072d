//! Map overlay composition tests with mock providers.

mod fixtures;

use campus_nav::campus::CAMPUS_CENTER;
use campus_nav::geometry::Point;
use campus_nav::overlay::{campus_places, route_to_event, OverlayError};
use campus_nav::places::Place;
use campus_nav::polyline::Polyline;
use campus_nav::route::{build_markers, RoutePlan};
use campus_nav::traits::{DirectionsProvider, PlaceProvider, ProviderError};

use fixtures::campus_samples::{event, sample_steps};

/// Returns a straight-line path from origin to destination, so tests can
/// read the routed destination back out of the plan.
struct MockDirections;

impl DirectionsProvider for MockDirections {
    fn walking_route(&self, origin: Point, destination: Point) -> Result<RoutePlan, ProviderError> {
        Ok(RoutePlan {
            path: Polyline::new(vec![origin, destination]),
            markers: build_markers(&sample_steps()),
        })
    }
}

struct NoRouteDirections;

impl DirectionsProvider for NoRouteDirections {
    fn walking_route(&self, _origin: Point, _destination: Point) -> Result<RoutePlan, ProviderError> {
        Err(ProviderError::NoRoute)
    }
}

struct MockPlaces {
    results: Vec<Place>,
}

impl PlaceProvider for MockPlaces {
    fn search_nearby(
        &self,
        _center: Point,
        _radius_meters: u32,
        _keyword: &str,
    ) -> Result<Vec<Place>, ProviderError> {
        Ok(self.results.clone())
    }
}

struct DeniedPlaces;

impl PlaceProvider for DeniedPlaces {
    fn search_nearby(
        &self,
        _center: Point,
        _radius_meters: u32,
        _keyword: &str,
    ) -> Result<Vec<Place>, ProviderError> {
        Err(ProviderError::Status("REQUEST_DENIED".to_string()))
    }
}

fn place(name: &str, latitude: f64, longitude: f64) -> Place {
    Place {
        name: name.to_string(),
        formatted_address: format!("{name}, Detroit, MI"),
        location: Point::new(latitude, longitude),
    }
}

#[test]
fn campus_places_drops_results_outside_the_boundary() {
    let provider = MockPlaces {
        results: vec![
            place("Campus Cafe", 42.357000, -83.068000),
            place("Airport Diner", 42.212000, -83.353000),
            place("Library Annex", 42.356000, -83.071000),
        ],
    };

    let kept = campus_places(&provider, "coffee", 1500).unwrap();
    let names: Vec<&str> = kept.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["Campus Cafe", "Library Annex"]);
}

#[test]
fn campus_places_surfaces_provider_rejection() {
    let result = campus_places(&DeniedPlaces, "coffee", 1500);
    assert!(matches!(
        result,
        Err(OverlayError::Provider(ProviderError::Status(status))) if status == "REQUEST_DENIED"
    ));
}

#[test]
fn route_to_event_resolves_the_event_location() {
    let origin = Point::new(42.359000, -83.065000);
    let target = event("Physics Colloquium", "Science Hall room 204");

    let plan = route_to_event(&MockDirections, origin, &target).unwrap();
    let path = plan.path.points();

    assert_eq!(path[0], origin);
    assert_eq!(path[1], Point::new(42.356389, -83.069556));
}

#[test]
fn route_to_unknown_event_location_targets_campus_center() {
    let origin = Point::new(42.359000, -83.065000);
    let target = event("Mixer", "Random Coffee Shop");

    let plan = route_to_event(&MockDirections, origin, &target).unwrap();
    assert_eq!(plan.path.points()[1], CAMPUS_CENTER);
}

#[test]
fn route_to_event_passes_no_route_through() {
    let origin = Point::new(42.359000, -83.065000);
    let target = event("Tailgate", "Palmer Structure - level 2");

    let result = route_to_event(&NoRouteDirections, origin, &target);
    assert!(matches!(
        result,
        Err(OverlayError::Provider(ProviderError::NoRoute))
    ));
}

#[test]
fn route_markers_carry_cleaned_instructions() {
    let origin = Point::new(42.359000, -83.065000);
    let target = event("Physics Colloquium", "Science Hall");

    let plan = route_to_event(&MockDirections, origin, &target).unwrap();
    let instructions: Vec<&str> = plan.markers.iter().map(|m| m.instruction.as_str()).collect();

    assert_eq!(
        instructions,
        vec![
            "Head north on Gullen Mall",
            "Turn left on Cass Ave",
            "Destination will be on the right",
        ]
    );
}
