use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A place name as typed by the user, trimmed and known to be non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaceQuery(String);

impl PlaceQuery {
    /// Trim `input` and reject it if nothing is left.
    pub fn parse(input: &str) -> Result<Self, WeatherError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(WeatherError::EmptyQuery);
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for PlaceQuery {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Best geocoding match for a place name
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
    pub name: String,
    pub country: String,
}

/// Observed conditions at a location, in the units the service reports
/// (°C and km/h).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentWeather {
    pub temperature: f64,
    pub wind_speed: f64,
    pub condition_code: i32,
    /// Observation time in the location's local time, when reported
    pub observed_at: Option<NaiveDateTime>,
}

/// Weather condition categories mapped from WMO codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeatherCondition {
    Clear,
    PartlyCloudy,
    Fog,
    Rain,
    Snow,
    RainShowers,
    Thunderstorm,
    Unknown,
}

impl WeatherCondition {
    /// Convert WMO weather code to WeatherCondition
    /// See: https://open-meteo.com/en/docs#weathervariables
    pub fn from_wmo_code(code: i32) -> Self {
        match code {
            0 => Self::Clear,
            1..=3 => Self::PartlyCloudy,
            45 | 48 => Self::Fog,
            51..=67 => Self::Rain,
            71..=77 => Self::Snow,
            80..=82 => Self::RainShowers,
            95..=99 => Self::Thunderstorm,
            _ => Self::Unknown,
        }
    }

    /// Get a human-readable label
    pub fn label(&self) -> &'static str {
        match self {
            Self::Clear => "Clear Sky",
            Self::PartlyCloudy => "Partly Cloudy",
            Self::Fog => "Foggy",
            Self::Rain => "Rainy",
            Self::Snow => "Snowy",
            Self::RainShowers => "Rain Showers",
            Self::Thunderstorm => "Thunderstorm",
            Self::Unknown => "Unknown",
        }
    }

    /// Symbolic icon name
    pub fn icon_name(&self) -> &'static str {
        match self {
            Self::Clear => "sun",
            Self::PartlyCloudy => "partly-sun",
            Self::Fog => "fog",
            Self::Rain => "rain",
            Self::Snow => "snow",
            Self::RainShowers => "rain-shower",
            Self::Thunderstorm => "storm",
            Self::Unknown => "globe",
        }
    }

    /// Emoji rendering of the icon
    pub fn glyph(&self) -> &'static str {
        match self {
            Self::Clear => "☀️",
            Self::PartlyCloudy => "🌤",
            Self::Fog => "🌫",
            Self::Rain => "🌧",
            Self::Snow => "❄️",
            Self::RainShowers => "🌦",
            Self::Thunderstorm => "⛈",
            Self::Unknown => "🌍",
        }
    }

    /// Background theme key
    pub fn theme(&self) -> &'static str {
        match self {
            Self::Clear => "sunny",
            Self::PartlyCloudy => "cloudy",
            Self::Fog => "fog",
            Self::Rain | Self::RainShowers => "rain",
            Self::Snow => "snow",
            Self::Thunderstorm => "storm",
            Self::Unknown => "default",
        }
    }
}

/// Display attributes for a condition code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ConditionDescriptor {
    pub condition: WeatherCondition,
    pub icon: &'static str,
    pub glyph: &'static str,
    pub label: &'static str,
    pub theme: &'static str,
}

/// Map any condition code to its descriptor. Unrecognized codes map to
/// `Unknown` with the `default` theme.
pub fn describe(code: i32) -> ConditionDescriptor {
    let condition = WeatherCondition::from_wmo_code(code);
    ConditionDescriptor {
        condition,
        icon: condition.icon_name(),
        glyph: condition.glyph(),
        label: condition.label(),
        theme: condition.theme(),
    }
}

/// Everything shown for one successful lookup
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeatherReport {
    pub place: Coordinates,
    pub current: CurrentWeather,
    pub descriptor: ConditionDescriptor,
}

impl WeatherReport {
    pub fn new(place: Coordinates, current: CurrentWeather) -> Self {
        let descriptor = describe(current.condition_code);
        Self {
            place,
            current,
            descriptor,
        }
    }

    /// "Paris, France", or just the place name when no country is known
    pub fn display_name(&self) -> String {
        if self.place.country.is_empty() {
            self.place.name.clone()
        } else {
            format!("{}, {}", self.place.name, self.place.country)
        }
    }
}

/// Coarse classification used to pick a user-facing message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    NotFound,
    DataUnavailable,
    Service,
}

/// Lookup errors
#[derive(Debug, thiserror::Error)]
pub enum WeatherError {
    #[error("Place name is empty")]
    EmptyQuery,
    #[error("No place found for '{0}'")]
    NotFound(String),
    #[error("Weather response has no current conditions")]
    DataUnavailable,
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
    #[error("{service} service returned status {status}")]
    Status { service: &'static str, status: u16 },
    #[error("Parse error: {0}")]
    Parse(String),
}

impl WeatherError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::EmptyQuery => ErrorKind::Validation,
            Self::NotFound(_) => ErrorKind::NotFound,
            Self::DataUnavailable => ErrorKind::DataUnavailable,
            Self::Network(_) | Self::Status { .. } | Self::Parse(_) => ErrorKind::Service,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_place_query_trims() {
        let query = PlaceQuery::parse("  Paris \n").unwrap();
        assert_eq!(query.as_str(), "Paris");
    }

    #[test]
    fn test_place_query_rejects_blank() {
        assert!(matches!(PlaceQuery::parse(""), Err(WeatherError::EmptyQuery)));
        assert!(matches!(PlaceQuery::parse(" \t "), Err(WeatherError::EmptyQuery)));
    }

    #[test]
    fn test_wmo_code_clear() {
        assert_eq!(WeatherCondition::from_wmo_code(0), WeatherCondition::Clear);
    }

    #[test]
    fn test_wmo_code_partly_cloudy() {
        for code in 1..=3 {
            assert_eq!(WeatherCondition::from_wmo_code(code), WeatherCondition::PartlyCloudy);
        }
    }

    #[test]
    fn test_wmo_code_fog() {
        assert_eq!(WeatherCondition::from_wmo_code(45), WeatherCondition::Fog);
        assert_eq!(WeatherCondition::from_wmo_code(48), WeatherCondition::Fog);
        assert_eq!(WeatherCondition::from_wmo_code(46), WeatherCondition::Unknown);
    }

    #[test]
    fn test_wmo_code_ranges() {
        assert_eq!(WeatherCondition::from_wmo_code(51), WeatherCondition::Rain);
        assert_eq!(WeatherCondition::from_wmo_code(67), WeatherCondition::Rain);
        assert_eq!(WeatherCondition::from_wmo_code(71), WeatherCondition::Snow);
        assert_eq!(WeatherCondition::from_wmo_code(77), WeatherCondition::Snow);
        assert_eq!(WeatherCondition::from_wmo_code(80), WeatherCondition::RainShowers);
        assert_eq!(WeatherCondition::from_wmo_code(82), WeatherCondition::RainShowers);
        assert_eq!(WeatherCondition::from_wmo_code(95), WeatherCondition::Thunderstorm);
        assert_eq!(WeatherCondition::from_wmo_code(99), WeatherCondition::Thunderstorm);
    }

    #[test]
    fn test_wmo_code_gaps_are_unknown() {
        for code in [4, 44, 50, 68, 70, 78, 79, 83, 85, 86, 94, 100] {
            assert_eq!(
                WeatherCondition::from_wmo_code(code),
                WeatherCondition::Unknown,
                "code {}",
                code
            );
        }
    }

    #[test]
    fn test_describe_reference_codes() {
        let cases = [
            (0, "Clear Sky", "sunny"),
            (2, "Partly Cloudy", "cloudy"),
            (45, "Foggy", "fog"),
            (60, "Rainy", "rain"),
            (75, "Snowy", "snow"),
            (81, "Rain Showers", "rain"),
            (97, "Thunderstorm", "storm"),
            (-1, "Unknown", "default"),
            (1000, "Unknown", "default"),
        ];

        for (code, label, theme) in cases {
            let d = describe(code);
            assert_eq!(d.label, label, "label for {}", code);
            assert_eq!(d.theme, theme, "theme for {}", code);
        }
    }

    #[test]
    fn test_describe_icons() {
        assert_eq!(describe(0).icon, "sun");
        assert_eq!(describe(3).icon, "partly-sun");
        assert_eq!(describe(81).icon, "rain-shower");
        assert_eq!(describe(i32::MIN).icon, "globe");
        assert_eq!(describe(0).glyph, "☀️");
    }

    #[test]
    fn test_describe_is_deterministic() {
        for code in -5..120 {
            assert_eq!(describe(code), describe(code));
        }
    }

    #[test]
    fn test_display_name() {
        let current = CurrentWeather {
            temperature: 22.5,
            wind_speed: 10.0,
            condition_code: 0,
            observed_at: None,
        };
        let mut place = Coordinates {
            latitude: 48.85,
            longitude: 2.35,
            name: "Paris".to_string(),
            country: "France".to_string(),
        };
        let report = WeatherReport::new(place.clone(), current.clone());
        assert_eq!(report.display_name(), "Paris, France");
        assert_eq!(report.descriptor.label, "Clear Sky");

        place.country.clear();
        assert_eq!(WeatherReport::new(place, current).display_name(), "Paris");
    }

    #[test]
    fn test_error_kinds() {
        assert_eq!(WeatherError::EmptyQuery.kind(), ErrorKind::Validation);
        assert_eq!(WeatherError::NotFound("x".into()).kind(), ErrorKind::NotFound);
        assert_eq!(WeatherError::DataUnavailable.kind(), ErrorKind::DataUnavailable);
        assert_eq!(
            WeatherError::Status { service: "weather", status: 502 }.kind(),
            ErrorKind::Service
        );
        assert_eq!(WeatherError::Parse("bad".into()).kind(), ErrorKind::Service);
    }
}
