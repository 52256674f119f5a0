use weather_now_core::{AppError, LookupError, NetworkError, ReqwestErrorExt};
use weather_now_lookup::WeatherError;

/// Lift a lookup error into the application error hierarchy.
pub fn into_app_error(e: WeatherError) -> AppError {
    match e {
        WeatherError::EmptyQuery => LookupError::EmptyQuery.into(),
        WeatherError::NotFound(q) => LookupError::PlaceNotFound(q).into(),
        WeatherError::DataUnavailable => LookupError::DataUnavailable.into(),
        WeatherError::Network(e) => e.into_network_error().into(),
        WeatherError::Status { service, status } => NetworkError::ServerError {
            status,
            message: format!("{} service", service),
        }
        .into(),
        WeatherError::Parse(s) => NetworkError::InvalidResponse(s).into(),
    }
}

/// The message shown on screen for a failed lookup.
pub fn user_message(e: WeatherError) -> &'static str {
    into_app_error(e).user_message()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_message() {
        assert_eq!(user_message(WeatherError::EmptyQuery), "Please enter a city name.");
    }

    #[test]
    fn test_not_found_message() {
        assert_eq!(
            user_message(WeatherError::NotFound("Zzzznotacity".into())),
            "City not found. Please try another name."
        );
    }

    #[test]
    fn test_data_unavailable_message() {
        assert_eq!(
            user_message(WeatherError::DataUnavailable),
            "Weather data unavailable. Please try again later."
        );
    }

    #[test]
    fn test_status_and_parse_messages() {
        let status = WeatherError::Status {
            service: "weather",
            status: 500,
        };
        assert_eq!(user_message(status), "Weather service temporarily unavailable.");
        assert_eq!(
            user_message(WeatherError::Parse("bad json".into())),
            "Weather service temporarily unavailable."
        );
    }

    #[test]
    fn test_status_keeps_code() {
        let app_err = into_app_error(WeatherError::Status {
            service: "geocoding",
            status: 429,
        });
        assert!(matches!(
            app_err,
            AppError::Network(NetworkError::ServerError { status: 429, .. })
        ));
    }
}
