//! Forward geocoding: resolve a place name to coordinates.
//! Uses the Open-Meteo geocoding API - free, no API key required.

use reqwest::Client;
use serde::Deserialize;
use tracing::instrument;

use crate::types::{Coordinates, PlaceQuery, WeatherError};

pub const OPEN_METEO_GEOCODING_URL: &str = "https://geocoding-api.open-meteo.com/v1/search";

#[derive(Debug, Deserialize)]
struct SearchResponse {
    results: Option<Vec<SearchResult>>,
}

#[derive(Debug, Deserialize)]
struct SearchResult {
    latitude: f64,
    longitude: f64,
    name: String,
    // Missing for some places (e.g. disputed territories)
    #[serde(default)]
    country: String,
}

impl From<SearchResult> for Coordinates {
    fn from(r: SearchResult) -> Self {
        Self {
            latitude: r.latitude,
            longitude: r.longitude,
            name: r.name,
            country: r.country,
        }
    }
}

#[derive(Debug, Clone)]
pub struct GeocodingClient {
    client: Client,
    endpoint: String,
}

impl GeocodingClient {
    pub fn new(client: Client, endpoint: impl Into<String>) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
        }
    }

    /// Resolve a place name, taking the first match the service returns.
    #[instrument(skip(self, query), fields(query = %query), level = "info")]
    pub async fn resolve(&self, query: &PlaceQuery) -> Result<Coordinates, WeatherError> {
        let url = format!(
            "{}?name={}",
            self.endpoint,
            urlencoding::encode(query.as_str())
        );

        let response = self.client.get(&url).send().await?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!("Geocoding returned status {}", status);
            return Err(WeatherError::Status {
                service: "geocoding",
                status: status.as_u16(),
            });
        }

        // Body read failures are transport errors; only bad JSON is a parse error
        let bytes = response.bytes().await?;
        let body: SearchResponse = serde_json::from_slice(&bytes)
            .map_err(|e| WeatherError::Parse(format!("geocoding response: {}", e)))?;

        let first = body
            .results
            .and_then(|results| results.into_iter().next())
            .ok_or_else(|| WeatherError::NotFound(query.to_string()))?;

        tracing::debug!(
            "Found location: {}, {} ({:.4}, {:.4})",
            first.name,
            first.country,
            first.latitude,
            first.longitude
        );

        Ok(first.into())
    }
}
