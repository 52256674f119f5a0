//! Application services shared by the front-end.
//!
//! Owns the tokio runtime that runs lookups off the calling thread, and the
//! lookup client built from configuration.

use std::sync::Arc;

use weather_now_core::{AppError, Config};
use weather_now_lookup::{Endpoints, WeatherLookup};

use crate::error_mapping;
use crate::models::weather_model::WeatherModel;
use crate::render::RenderOptions;

pub struct AppServices {
    /// Tokio runtime for async operations
    runtime: tokio::runtime::Runtime,

    /// Geocoding + weather client
    lookup: Arc<WeatherLookup>,

    render_options: RenderOptions,
}

impl AppServices {
    pub fn new(config: &Config) -> Result<Self, AppError> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .thread_name("weather-now-tokio")
            .build()?;

        let endpoints = Endpoints {
            geocoding_url: config.services.geocoding_url.clone(),
            weather_url: config.services.weather_url.clone(),
            timeout: config.services.request_timeout(),
        };
        let lookup = WeatherLookup::new(endpoints).map_err(error_mapping::into_app_error)?;

        tracing::debug!(
            "Weather services ready (geocoding: {}, weather: {})",
            config.services.geocoding_url,
            config.services.weather_url
        );

        Ok(Self {
            runtime,
            lookup: Arc::new(lookup),
            render_options: RenderOptions {
                show_icons: config.ui.show_icons,
            },
        })
    }

    pub fn lookup(&self) -> Arc<WeatherLookup> {
        self.lookup.clone()
    }

    pub fn render_options(&self) -> RenderOptions {
        self.render_options
    }

    /// A fresh model whose lookups run on this runtime.
    pub fn weather_model(&self) -> WeatherModel {
        WeatherModel::new(self.runtime.handle().clone(), self.lookup())
    }
}
