//! Maps lookup errors to weather_now_core::AppError for consistent user-facing messages.

mod weather;

pub use weather::{into_app_error, user_message};
