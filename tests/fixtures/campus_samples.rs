//! Sample events and provider route steps for integration tests.

use campus_nav::events::CampusEvent;
use campus_nav::route::{LatLng, RouteStep, StepDistance};

/// A public event with sensible defaults for the fields tests ignore.
pub fn event(title: &str, location: &str) -> CampusEvent {
    CampusEvent {
        title: title.to_string(),
        location: location.to_string(),
        date: "2026-09-12".to_string(),
        start_time: "14:00".to_string(),
        end_time: "16:00".to_string(),
        attendees: Vec::new(),
        tags: Vec::new(),
        is_public: true,
    }
}

fn step(lat: f64, lng: f64, text: &str, meters: i64, instructions: &str) -> RouteStep {
    RouteStep {
        start_location: LatLng { lat, lng },
        end_location: LatLng {
            lat: lat + 0.0005,
            lng: lng + 0.0005,
        },
        distance: StepDistance {
            text: text.to_string(),
            value: meters,
        },
        html_instructions: instructions.to_string(),
    }
}

/// A short walk across campus, instructions marked up the way the
/// directions provider returns them.
pub fn sample_steps() -> Vec<RouteStep> {
    vec![
        step(
            42.357341,
            -83.069711,
            "0.1 mi",
            161,
            "Head <b>north</b> on Gullen Mall",
        ),
        step(
            42.358100,
            -83.069500,
            "0.2 mi",
            322,
            "Turn <b>left</b> on Cass Ave",
        ),
        step(
            42.358300,
            -83.071200,
            "200 ft",
            61,
            "Destination will be on the <b>right</b>",
        ),
    ]
}
