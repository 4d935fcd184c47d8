//! Error types for the dataset client

use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("API error: {0}")]
    Api(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Failure raised by a middleware layer of the HTTP client
    #[error("Middleware error: {0}")]
    Middleware(String),

    /// Authentication failure (401/403)
    #[error("Authentication failed (status {status}): {message}")]
    Auth {
        status: u16,
        message: String,
        /// Request ID for debugging
        request_id: Option<String>,
    },

    /// Rate limit exceeded
    #[error("Rate limit exceeded (retry after {retry_after:?})")]
    RateLimit {
        /// How long to wait before retrying
        retry_after: Option<Duration>,
        /// Request ID for debugging
        request_id: Option<String>,
    },

    /// Server error (5xx status codes)
    #[error("Server error (status {status}): {message}")]
    Server {
        status: u16,
        message: String,
        /// Request ID for debugging
        request_id: Option<String>,
    },

    /// Client error (4xx status codes other than auth/rate limit)
    #[error("Client error (status {status}): {message}")]
    Client {
        status: u16,
        message: String,
        /// Request ID for debugging
        request_id: Option<String>,
    },

    /// The backend answered 2xx but its envelope carries a failure code
    #[error("Request rejected (code {code}): {message}")]
    Rejected { code: i64, message: String },
}

pub type Result<T> = std::result::Result<T, Error>;

impl From<reqwest_middleware::Error> for Error {
    fn from(err: reqwest_middleware::Error) -> Self {
        match err {
            reqwest_middleware::Error::Reqwest(e) => Error::Network(e),
            reqwest_middleware::Error::Middleware(e) => Error::Middleware(format!("{:#}", e)),
        }
    }
}

impl Error {
    /// Build an error from a non-success HTTP response
    pub(crate) fn from_status(
        status: u16,
        message: String,
        retry_after: Option<Duration>,
        request_id: Option<String>,
    ) -> Self {
        match status {
            401 | 403 => Error::Auth {
                status,
                message,
                request_id,
            },
            429 => Error::RateLimit {
                retry_after,
                request_id,
            },
            500..=599 => Error::Server {
                status,
                message,
                request_id,
            },
            _ => Error::Client {
                status,
                message,
                request_id,
            },
        }
    }

    /// Check if the error is retryable
    pub fn is_retryable(&self) -> bool {
        match self {
            Error::Network(_) => true,
            Error::RateLimit { .. } => true,
            Error::Server { .. } => true,
            Error::Middleware(_) => false,
            Error::Auth { .. } => false,
            Error::Client { .. } => false,
            Error::Rejected { .. } => false,
            Error::Serialization(_) => false,
            Error::Configuration(_) => false,
            Error::Api(_) => false,
        }
    }

    /// Get the retry delay if applicable
    pub fn retry_after(&self) -> Option<Duration> {
        match self {
            Error::RateLimit { retry_after, .. } => *retry_after,
            Error::Server { .. } => Some(Duration::from_secs(5)), // Default retry for server errors
            Error::Network(_) => Some(Duration::from_secs(1)),    // Quick retry for network errors
            _ => None,
        }
    }

    /// Get the request ID if available
    pub fn request_id(&self) -> Option<&str> {
        match self {
            Error::Auth { request_id, .. }
            | Error::RateLimit { request_id, .. }
            | Error::Server { request_id, .. }
            | Error::Client { request_id, .. } => request_id.as_deref(),
            _ => None,
        }
    }

    /// HTTP status of the failed response, when there was one
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Auth { status, .. } | Error::Server { status, .. } | Error::Client { status, .. } => {
                Some(*status)
            }
            Error::RateLimit { .. } => Some(429),
            Error::Network(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}
