use reqwest::blocking::Client;
use serde::Deserialize;
use tracing::debug;

use crate::{error::Result, ranking::Coordinate};

use super::{provider_error, Geocoder};

const FIND_URL: &str =
    "https://geocode.arcgis.com/arcgis/rest/services/World/GeocodeServer/findAddressCandidates";
const NAME: &str = "arcgis";

#[derive(Debug, Deserialize)]
struct Candidates {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    location: Point,
}

/// WGS84 point: `x` is longitude, `y` latitude.
#[derive(Debug, Deserialize)]
struct Point {
    x: f64,
    y: f64,
}

impl From<Point> for Coordinate {
    fn from(point: Point) -> Self {
        Self::new(point.y, point.x)
    }
}

/// ArcGIS World geocoding service.
pub struct ArcGis {
    client: Client,
    base_url: String,
}

impl ArcGis {
    pub fn new(client: Client) -> Self {
        Self::with_base_url(client, FIND_URL.to_string())
    }

    pub const fn with_base_url(client: Client, base_url: String) -> Self {
        Self { client, base_url }
    }
}

impl Geocoder for ArcGis {
    fn name(&self) -> &'static str {
        NAME
    }

    fn geocode(&self, query: &str) -> Result<Option<Coordinate>> {
        debug!(query, "querying arcgis");

        let fetch = || -> reqwest::Result<Candidates> {
            self.client
                .get(&self.base_url)
                .query(&[("SingleLine", query), ("f", "json"), ("maxLocations", "1")])
                .send()?
                .error_for_status()?
                .json()
        };
        let response = fetch().map_err(|e| provider_error(NAME, &e))?;

        Ok(response
            .candidates
            .into_iter()
            .next()
            .map(|candidate| candidate.location.into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{error::Error, geocoding::canned};

    #[test]
    fn decodes_candidates() {
        let body = r#"{
            "spatialReference": {"wkid": 4326, "latestWkid": 4326},
            "candidates": [
                {"address": "Austin, Texas", "location": {"x": -97.74175799999995, "y": 30.29550500000005}, "score": 100}
            ]
        }"#;

        let response: Candidates = serde_json::from_str(body).expect("Failed to decode response");
        let coordinate: Option<Coordinate> = response
            .candidates
            .into_iter()
            .next()
            .map(|candidate| candidate.location.into());

        let coordinate = coordinate.expect("Missing candidate");
        assert!((coordinate.latitude - 30.295_505).abs() < 1e-9);
        assert!((coordinate.longitude - -97.741_758).abs() < 1e-9);
    }

    #[test]
    fn missing_candidates_is_empty() {
        let response: Candidates =
            serde_json::from_str(r#"{"spatialReference": {"wkid": 4326}}"#)
                .expect("Failed to decode response");

        assert!(response.candidates.is_empty());
    }

    #[test]
    fn finds_candidates_over_http() {
        let (url, server) = canned::serve(vec![
            (
                200,
                r#"{"candidates":[{"address":"Dallas, Texas","location":{"x":-96.797,"y":32.7767},"score":100}]}"#,
            ),
            (200, r#"{"candidates":[]}"#),
        ]);
        let arcgis = ArcGis::with_base_url(canned::client(), url);

        let found = arcgis
            .geocode("Dallas, Texas, USA")
            .expect("Failed to geocode")
            .expect("Missing candidate");
        let missing = arcgis.geocode("Atlantis").expect("Failed to geocode");

        assert!((found.latitude - 32.7767).abs() < 1e-9);
        assert!((found.longitude - -96.797).abs() < 1e-9);
        assert_eq!(missing, None);

        let requests = server.join().expect("Failed to join server");
        assert!(requests[0].contains("SingleLine=Dallas%2C+Texas%2C+USA"));
        assert!(requests[0].contains("maxLocations=1"));
    }

    #[test]
    fn http_failures_are_provider_errors() {
        let (url, server) = canned::serve(vec![(500, "{}"), (200, "<html>")]);
        let arcgis = ArcGis::with_base_url(canned::client(), url);

        for _ in 0..2 {
            assert!(matches!(
                arcgis.geocode("Dallas, Texas, USA"),
                Err(Error::GeocodeProvider {
                    provider: NAME,
                    ..
                })
            ));
        }

        server.join().expect("Failed to join server");
    }
}
