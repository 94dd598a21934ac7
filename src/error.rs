//! Error types for zora-coins
//!
//! This module provides the error hierarchy using thiserror.
//! Everything below the handler boundary converts into `CoinsError`; the
//! dispatcher only ever sees the rendered message.

use thiserror::Error;

/// Main error type for zora-coins operations
#[derive(Error, Debug)]
pub enum CoinsError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Network error: {0}")]
    Network(#[from] NetworkError),

    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("Chain error: {0}")]
    Chain(String),

    #[error("Metadata error: {0}")]
    Metadata(String),

    #[error("{0}")]
    Query(String),

    #[error("{0}")]
    NotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Configuration errors raised while reading the environment
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// A required environment variable is absent or empty
    #[error("{0} is required")]
    Missing(&'static str),
}

/// Network-specific errors
#[derive(Error, Debug)]
pub enum NetworkError {
    #[error("HTTP request failed: {0}")]
    Http(String),

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("Reqwest error: {0}")]
    Reqwest(#[from] reqwest::Error),
}

impl From<reqwest::Error> for CoinsError {
    fn from(err: reqwest::Error) -> Self {
        CoinsError::Network(NetworkError::Reqwest(err))
    }
}

impl From<url::ParseError> for CoinsError {
    fn from(err: url::ParseError) -> Self {
        CoinsError::Network(NetworkError::InvalidUrl(err.to_string()))
    }
}

/// Convenient result type for zora-coins operations
pub type Result<T> = std::result::Result<T, CoinsError>;

impl CoinsError {
    /// Create an API error from a status code and response body
    #[inline]
    pub fn api<S: Into<String>>(status: u16, msg: S) -> Self {
        CoinsError::Api {
            status,
            message: msg.into(),
        }
    }

    /// Create a chain (signing / RPC) error
    #[inline]
    pub fn chain<S: Into<String>>(msg: S) -> Self {
        CoinsError::Chain(msg.into())
    }

    /// Create a metadata error
    #[inline]
    pub fn metadata<S: Into<String>>(msg: S) -> Self {
        CoinsError::Metadata(msg.into())
    }

    /// Create a not found error
    #[inline]
    pub fn not_found<S: Into<String>>(msg: S) -> Self {
        CoinsError::NotFound(msg.into())
    }
}
