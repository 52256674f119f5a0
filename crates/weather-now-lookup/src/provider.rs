//! Current conditions from the Open-Meteo forecast API.

use chrono::NaiveDateTime;
use reqwest::Client;
use serde::Deserialize;
use tracing::instrument;

use crate::types::{CurrentWeather, WeatherError};

pub const OPEN_METEO_FORECAST_URL: &str = "https://api.open-meteo.com/v1/forecast";

/// Format of `current_weather.time` (local time, minute precision)
const OBSERVATION_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M";

#[derive(Debug, Deserialize)]
struct ForecastResponse {
    current_weather: Option<ApiCurrentWeather>,
}

#[derive(Debug, Deserialize)]
struct ApiCurrentWeather {
    temperature: f64,
    windspeed: f64,
    weathercode: i32,
    time: Option<String>,
}

impl From<ApiCurrentWeather> for CurrentWeather {
    fn from(api: ApiCurrentWeather) -> Self {
        let observed_at = api
            .time
            .as_deref()
            .and_then(|t| NaiveDateTime::parse_from_str(t, OBSERVATION_TIME_FORMAT).ok());

        Self {
            temperature: api.temperature,
            wind_speed: api.windspeed,
            condition_code: api.weathercode,
            observed_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct WeatherProvider {
    client: Client,
    endpoint: String,
}

impl WeatherProvider {
    pub fn new(client: Client, endpoint: impl Into<String>) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
        }
    }

    /// Fetch current (not forecast) conditions for a coordinate pair.
    #[instrument(skip(self), level = "info")]
    pub async fn current_weather(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<CurrentWeather, WeatherError> {
        let url = format!(
            "{}?latitude={}&longitude={}&current_weather=true",
            self.endpoint, latitude, longitude
        );

        let response = self.client.get(&url).send().await?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!("Weather API returned status {}", status);
            return Err(WeatherError::Status {
                service: "weather",
                status: status.as_u16(),
            });
        }

        let bytes = response.bytes().await?;
        let body: ForecastResponse = serde_json::from_slice(&bytes)
            .map_err(|e| WeatherError::Parse(format!("weather response: {}", e)))?;

        let current: CurrentWeather = body
            .current_weather
            .ok_or(WeatherError::DataUnavailable)?
            .into();

        tracing::debug!(
            "Current weather: {}°C, {} km/h, code {}",
            current.temperature,
            current.wind_speed,
            current.condition_code
        );

        Ok(current)
    }
}
