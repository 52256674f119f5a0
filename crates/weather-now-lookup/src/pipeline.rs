//! Two-stage lookup: place name -> coordinates -> current weather.

use std::time::Duration;

use reqwest::Client;
use tracing::instrument;

use crate::geocode::{GeocodingClient, OPEN_METEO_GEOCODING_URL};
use crate::provider::{WeatherProvider, OPEN_METEO_FORECAST_URL};
use crate::types::{PlaceQuery, WeatherError, WeatherReport};

const REQUEST_TIMEOUT_SECS: u64 = 10;
const USER_AGENT: &str = concat!("weather-now/", env!("CARGO_PKG_VERSION"));

/// Where the two services live and how long a single request may take
#[derive(Debug, Clone)]
pub struct Endpoints {
    pub geocoding_url: String,
    pub weather_url: String,
    pub timeout: Duration,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            geocoding_url: OPEN_METEO_GEOCODING_URL.to_string(),
            weather_url: OPEN_METEO_FORECAST_URL.to_string(),
            timeout: Duration::from_secs(REQUEST_TIMEOUT_SECS),
        }
    }
}

#[derive(Debug, Clone)]
pub struct WeatherLookup {
    geocoder: GeocodingClient,
    provider: WeatherProvider,
}

impl WeatherLookup {
    pub fn new(endpoints: Endpoints) -> Result<Self, WeatherError> {
        let client = Client::builder()
            .timeout(endpoints.timeout)
            .user_agent(USER_AGENT)
            .build()?;

        Ok(Self {
            geocoder: GeocodingClient::new(client.clone(), endpoints.geocoding_url),
            provider: WeatherProvider::new(client, endpoints.weather_url),
        })
    }

    /// Validate `input`, resolve it, and fetch current conditions for the
    /// first match. Stops at the first failure; nothing is retried.
    #[instrument(skip(self), level = "info")]
    pub async fn lookup(&self, input: &str) -> Result<WeatherReport, WeatherError> {
        let query = PlaceQuery::parse(input)?;

        let place = self.geocoder.resolve(&query).await?;
        let current = self
            .provider
            .current_weather(place.latitude, place.longitude)
            .await?;

        let report = WeatherReport::new(place, current);
        tracing::info!(
            "Weather for {}: {}",
            report.display_name(),
            report.descriptor.label
        );
        Ok(report)
    }
}
