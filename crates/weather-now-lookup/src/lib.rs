//! Current-weather lookup for a free-text place name.
//!
//! Resolves the name to coordinates with the Open-Meteo geocoding API, then
//! fetches current conditions for those coordinates and maps the WMO
//! condition code to a display descriptor.

pub mod geocode;
pub mod pipeline;
pub mod provider;
pub mod types;

#[cfg(test)]
mod test_support;

pub use geocode::GeocodingClient;
pub use pipeline::{Endpoints, WeatherLookup};
pub use provider::WeatherProvider;
pub use types::*;
