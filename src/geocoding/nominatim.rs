use std::{
    cell::Cell,
    thread,
    time::{Duration, Instant},
};

use reqwest::blocking::Client;
use serde::Deserialize;
use tracing::debug;

use crate::{
    error::{Error, Result},
    ranking::Coordinate,
};

use super::{provider_error, Geocoder};

const SEARCH_URL: &str = "https://nominatim.openstreetmap.org/search";
/// Nominatim's usage policy allows one request per second.
const MIN_REQUEST_INTERVAL: Duration = Duration::from_secs(1);
const NAME: &str = "nominatim";

#[derive(Debug, Deserialize)]
struct Place {
    lat: String,
    lon: String,
}

impl TryFrom<Place> for Coordinate {
    type Error = Error;

    fn try_from(place: Place) -> Result<Self> {
        let parse = |value: &str| {
            value.parse::<f64>().map_err(|e| Error::GeocodeProvider {
                provider: NAME,
                reason: format!("bad coordinate {value:?}: {e}"),
            })
        };

        Ok(Self::new(parse(&place.lat)?, parse(&place.lon)?))
    }
}

/// OpenStreetMap Nominatim search.
pub struct Nominatim {
    client: Client,
    base_url: String,
    last_request: Cell<Option<Instant>>,
}

impl Nominatim {
    pub fn new(client: Client) -> Self {
        Self::with_base_url(client, SEARCH_URL.to_string())
    }

    pub const fn with_base_url(client: Client, base_url: String) -> Self {
        Self {
            client,
            base_url,
            last_request: Cell::new(None),
        }
    }

    fn throttle(&self) {
        if let Some(last) = self.last_request.get() {
            let elapsed = last.elapsed();
            if elapsed < MIN_REQUEST_INTERVAL {
                thread::sleep(MIN_REQUEST_INTERVAL - elapsed);
            }
        }
        self.last_request.set(Some(Instant::now()));
    }
}

impl Geocoder for Nominatim {
    fn name(&self) -> &'static str {
        NAME
    }

    fn geocode(&self, query: &str) -> Result<Option<Coordinate>> {
        self.throttle();
        debug!(query, "querying nominatim");

        let fetch = || -> reqwest::Result<Vec<Place>> {
            self.client
                .get(&self.base_url)
                .query(&[("q", query), ("format", "json"), ("limit", "1")])
                .send()?
                .error_for_status()?
                .json()
        };
        let places = fetch().map_err(|e| provider_error(NAME, &e))?;

        places.into_iter().next().map(Coordinate::try_from).transpose()
    }
}
