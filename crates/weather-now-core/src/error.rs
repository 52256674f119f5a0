//! Centralized error types for Weather Now.
//!
//! This module provides a typed error hierarchy that:
//! - Separates transport failures from lookup outcomes
//! - Provides one fixed user-facing message per error kind
//! - Preserves full error context for logging

use thiserror::Error;

/// Top-level application error type.
///
/// Every failure that can reach the user is convertible to this type.
/// Use `user_message()` to get the text shown on screen.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Network error: {0}")]
    Network(#[from] NetworkError),

    #[error("Lookup error: {0}")]
    Lookup(#[from] LookupError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl AppError {
    /// Returns a user-friendly message suitable for display.
    pub fn user_message(&self) -> &'static str {
        match self {
            AppError::Network(e) => e.user_message(),
            AppError::Lookup(e) => e.user_message(),
            AppError::Config(e) => e.user_message(),
            AppError::Io(_) => "A file operation failed. Please try again.",
        }
    }
}

/// Transport-level failures: the request never produced usable data.
#[derive(Debug, Error)]
pub enum NetworkError {
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    #[error("Request timed out")]
    Timeout,

    #[error("Server error: {status} - {message}")]
    ServerError { status: u16, message: String },

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

impl NetworkError {
    pub fn user_message(&self) -> &'static str {
        match self {
            NetworkError::ConnectionFailed(_) | NetworkError::Timeout => {
                "Network error. Please check your connection."
            }
            // A response arrived, the service just could not serve it
            NetworkError::ServerError { .. } | NetworkError::InvalidResponse(_) => {
                "Weather service temporarily unavailable."
            }
        }
    }
}

/// Outcomes of a lookup that are not transport failures.
#[derive(Debug, Error)]
pub enum LookupError {
    #[error("Place name is empty")]
    EmptyQuery,

    #[error("No place found for '{0}'")]
    PlaceNotFound(String),

    #[error("Weather data unavailable")]
    DataUnavailable,
}

impl LookupError {
    pub fn user_message(&self) -> &'static str {
        match self {
            LookupError::EmptyQuery => "Please enter a city name.",
            LookupError::PlaceNotFound(_) => "City not found. Please try another name.",
            LookupError::DataUnavailable => "Weather data unavailable. Please try again later.",
        }
    }
}

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("Configuration parse error: {0}")]
    ParseError(String),
}

impl ConfigError {
    pub fn user_message(&self) -> &'static str {
        match self {
            ConfigError::Invalid(_) => "Invalid configuration. Check your settings.",
            ConfigError::ParseError(_) => "Configuration file is malformed. Check your settings.",
        }
    }
}

/// Extension trait for converting reqwest errors to our error types.
pub trait ReqwestErrorExt {
    fn into_network_error(self) -> NetworkError;
}

impl ReqwestErrorExt for reqwest::Error {
    fn into_network_error(self) -> NetworkError {
        if self.is_timeout() {
            NetworkError::Timeout
        } else if self.is_connect() {
            NetworkError::ConnectionFailed(self.to_string())
        } else if let Some(status) = self.status() {
            NetworkError::ServerError {
                status: status.as_u16(),
                message: self.to_string(),
            }
        } else {
            // Body decoding happens outside reqwest, so anything left is transport
            NetworkError::ConnectionFailed(self.to_string())
        }
    }
}
