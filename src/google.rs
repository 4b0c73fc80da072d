//! Google Maps web API adapter (walking directions + nearby search).

use serde::Deserialize;
use tracing::{debug, warn};

use crate::geometry::Point;
use crate::places::Place;
use crate::polyline::Polyline;
use crate::route::{build_markers, LatLng, RoutePlan, RouteStep};
use crate::traits::{DirectionsProvider, PlaceProvider, ProviderError};

#[derive(Debug, Clone)]
pub struct GoogleMapsConfig {
    pub base_url: String,
    pub api_key: String,
    pub timeout_secs: u64,
}

impl Default for GoogleMapsConfig {
    fn default() -> Self {
        Self {
            base_url: "https://maps.googleapis.com/maps/api".to_string(),
            api_key: String::new(),
            timeout_secs: 10,
        }
    }
}

#[derive(Debug, Clone)]
pub struct GoogleMapsClient {
    config: GoogleMapsConfig,
    client: reqwest::blocking::Client,
}

impl GoogleMapsClient {
    pub fn new(config: GoogleMapsConfig) -> Result<Self, reqwest::Error> {
        let client = reqwest::blocking::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self { config, client })
    }
}

impl DirectionsProvider for GoogleMapsClient {
    fn walking_route(&self, origin: Point, destination: Point) -> Result<RoutePlan, ProviderError> {
        debug!(
            origin_lat = origin.latitude,
            origin_lng = origin.longitude,
            dest_lat = destination.latitude,
            dest_lng = destination.longitude,
            "requesting walking route"
        );

        let url = format!("{}/directions/json", self.config.base_url);
        let response = self
            .client
            .get(url)
            .query(&[
                (
                    "origin",
                    format!("{:.6},{:.6}", origin.latitude, origin.longitude),
                ),
                (
                    "destination",
                    format!("{:.6},{:.6}", destination.latitude, destination.longitude),
                ),
                ("mode", "walking".to_string()),
                ("key", self.config.api_key.clone()),
            ])
            .send()?
            .error_for_status()?
            .json::<DirectionsResponse>()?;

        route_plan_from(response)
    }
}

impl PlaceProvider for GoogleMapsClient {
    fn search_nearby(
        &self,
        center: Point,
        radius_meters: u32,
        keyword: &str,
    ) -> Result<Vec<Place>, ProviderError> {
        debug!(keyword, radius_meters, "requesting nearby places");

        let url = format!("{}/place/nearbysearch/json", self.config.base_url);
        let response = self
            .client
            .get(url)
            .query(&[
                (
                    "location",
                    format!("{:.6},{:.6}", center.latitude, center.longitude),
                ),
                ("radius", radius_meters.to_string()),
                ("keyword", keyword.to_string()),
                ("key", self.config.api_key.clone()),
            ])
            .send()?
            .error_for_status()?
            .json::<PlacesResponse>()?;

        places_from(response)
    }
}

fn route_plan_from(response: DirectionsResponse) -> Result<RoutePlan, ProviderError> {
    let route = response
        .routes
        .into_iter()
        .next()
        .ok_or(ProviderError::NoRoute)?;

    let path = Polyline::decode(&route.overview_polyline.points)?;
    let steps: Vec<RouteStep> = route.legs.into_iter().flat_map(|leg| leg.steps).collect();

    Ok(RoutePlan {
        path,
        markers: build_markers(&steps),
    })
}

fn places_from(response: PlacesResponse) -> Result<Vec<Place>, ProviderError> {
    match response.status.as_str() {
        "OK" => {}
        "ZERO_RESULTS" => return Ok(Vec::new()),
        status => {
            warn!(status, "nearby search rejected");
            return Err(ProviderError::Status(status.to_string()));
        }
    }

    Ok(response
        .results
        .into_iter()
        .map(|result| Place {
            name: result.name,
            formatted_address: result.formatted_address.unwrap_or_default(),
            location: Point::new(result.geometry.location.lat, result.geometry.location.lng),
        })
        .collect())
}

#[derive(Debug, Deserialize)]
struct DirectionsResponse {
    #[serde(default)]
    routes: Vec<DirectionsRoute>,
}

#[derive(Debug, Deserialize)]
struct DirectionsRoute {
    overview_polyline: OverviewPolyline,
    #[serde(default)]
    legs: Vec<RouteLeg>,
}

#[derive(Debug, Deserialize)]
struct OverviewPolyline {
    points: String,
}

#[derive(Debug, Deserialize)]
struct RouteLeg {
    #[serde(default)]
    steps: Vec<RouteStep>,
}

#[derive(Debug, Deserialize)]
struct PlacesResponse {
    status: String,
    #[serde(default)]
    results: Vec<PlaceResult>,
}

#[derive(Debug, Deserialize)]
struct PlaceResult {
    name: String,
    formatted_address: Option<String>,
    geometry: PlaceGeometry,
}

#[derive(Debug, Deserialize)]
struct PlaceGeometry {
    location: LatLng,
}
