//! Terminal presentation layer: view state, background lookups and rendering.

pub mod app_services;
pub mod error_mapping;
pub mod models;
pub mod render;
pub mod services;

pub use app_services::AppServices;
pub use models::weather_model::{SubmitOutcome, ViewState, WeatherModel};
