mod arcgis;
mod nominatim;
mod resolver;

pub use self::{
    arcgis::ArcGis,
    nominatim::Nominatim,
    resolver::{Resolver, LONG_LOCATION_CHARS},
};

use reqwest::blocking::Client;

use crate::{
    error::{Error, Result},
    ranking::Coordinate,
};

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Turns free-form location text into a coordinate.
///
/// `Ok(None)` means the provider answered but found nothing; `Err` means the
/// provider itself failed. The resolver treats both as a failed attempt.
pub trait Geocoder {
    fn name(&self) -> &'static str;

    fn geocode(&self, query: &str) -> Result<Option<Coordinate>>;
}

/// Blocking HTTP client shared by the providers.
pub fn http_client() -> Result<Client> {
    Ok(Client::builder().user_agent(USER_AGENT).build()?)
}

/// Transport, status and decoding failures all surface as a provider error.
fn provider_error(provider: &'static str, e: &reqwest::Error) -> Error {
    Error::GeocodeProvider {
        provider,
        reason: e.to_string(),
    }
}
