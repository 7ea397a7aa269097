use farled_core::geopoint::GeoPoint;
use serde::Deserialize;
use tracing::debug;

use crate::error::ProviderError;

pub const GRAPHHOPPER_GEOCODE_API_URL: &str = "https://graphhopper.com/api/1/geocode";

#[derive(Deserialize)]
struct GeocodeResponse {
    hits: Vec<GeocodeHit>,
}

#[derive(Deserialize)]
struct GeocodeHit {
    point: GeocodePoint,
}

#[derive(Deserialize)]
struct GeocodePoint {
    lat: f64,
    lng: f64,
}

/// Forward-geocoding client for the GraphHopper Geocoding API. Each lookup
/// resolves one free-form address to its best-matching coordinate; an
/// address with no hits is a hard [`ProviderError::AddressNotFound`].
pub struct GeocodingClient {
    api_key: String,
    client: reqwest::Client,
}

impl GeocodingClient {
    pub fn new(api_key: String) -> Self {
        Self {
            api_key,
            client: reqwest::Client::new(),
        }
    }

    pub async fn geocode(&self, address: &str) -> Result<GeoPoint, ProviderError> {
        debug!("GeocodingClient: Looking up \"{}\"", address);

        let response = self
            .client
            .get(GRAPHHOPPER_GEOCODE_API_URL)
            .query(&[
                ("q", address),
                ("limit", "1"),
                ("key", self.api_key.as_str()),
            ])
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let message = response.text().await.unwrap_or_default();
            return Err(ProviderError::Api { status, message });
        }

        let geocode: GeocodeResponse = response.json().await?;

        geocode
            .hits
            .into_iter()
            .next()
            .map(|hit| GeoPoint::new(hit.point.lat, hit.point.lng))
            .ok_or_else(|| ProviderError::AddressNotFound(address.to_string()))
    }
}
