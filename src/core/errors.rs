//! Custom error types for translation operations

use thiserror::Error;

/// Message used when a failed response carries no usable `error` field
pub const UNKNOWN_ERROR: &str = "Unknown error";

/// Translation-related errors
#[derive(Error, Debug)]
pub enum TranslationError {
    /// The HTTP exchange could not be completed (refused, DNS, timeout, dropped)
    #[error("Transport error: {message}")]
    TransportError {
        /// Transport-level description
        message: String,
    },

    /// The service answered with a status other than 200
    #[error("Translation API error (HTTP {status}): {message}")]
    ApiError {
        /// HTTP status code
        status: u16,
        /// Service-supplied `error` field, or "Unknown error"
        message: String,
    },

    /// Invalid response from API
    #[error("Invalid response: {message}")]
    InvalidResponse {
        /// What was wrong with the body
        message: String,
    },

    /// Configuration error
    #[error("Configuration error: {message}")]
    ConfigError {
        /// What was wrong with the configuration
        message: String,
    },

    /// IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON error
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

impl TranslationError {
    /// Whether the request failed before any HTTP status was available
    pub fn is_transport(&self) -> bool {
        matches!(self, TranslationError::TransportError { .. })
    }

    /// Whether the service rejected the request with a non-200 status
    pub fn is_api(&self) -> bool {
        matches!(self, TranslationError::ApiError { .. })
    }

    /// HTTP status carried by an [`TranslationError::ApiError`]
    pub fn status(&self) -> Option<u16> {
        match self {
            TranslationError::ApiError { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for TranslationError {
    fn from(err: reqwest::Error) -> Self {
        TranslationError::TransportError {
            message: err.to_string(),
        }
    }
}

/// Result type for translation operations
pub type Result<T> = std::result::Result<T, TranslationError>;
