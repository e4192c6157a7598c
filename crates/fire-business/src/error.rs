//! Error types for the fire-business library.
//!
//! This module provides a unified error type with explicit variants for
//! transport, authentication, HTTP status, decoding and input validation errors.

use std::fmt;
use thiserror::Error;

/// The unified error type for fire-business operations.
///
/// Every failure mode of the client maps onto one of these variants so
/// callers can match on the cases they care about.
#[derive(Debug, Error)]
pub enum Error {
    /// Network transport errors (connection, timeout, request building).
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),

    /// The access token request failed or returned an unusable session.
    #[error("authentication error: {0}")]
    Auth(#[from] AuthError),

    /// A request completed with a non-2xx status.
    #[error("HTTP error: {0}")]
    Http(#[from] HttpError),

    /// A 2xx response carried a body that is not valid JSON.
    #[error("decode error: {0}")]
    Decode(#[from] DecodeError),

    /// Input validation errors (base URL format).
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InvalidInputError),
}

/// Transport-level errors.
#[derive(Debug, Error)]
pub enum TransportError {
    /// Network connection failed.
    #[error("connection failed: {message}")]
    Connection { message: String },

    /// Request timed out.
    #[error("request timed out: {message}")]
    Timeout { message: String },

    /// The HTTP client could not be constructed.
    #[error("failed to build HTTP client: {message}")]
    Builder { message: String },

    /// Generic HTTP error.
    #[error("HTTP error: {message}")]
    Http { message: String },
}

impl From<reqwest::Error> for TransportError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            TransportError::Timeout {
                message: err.to_string(),
            }
        } else if err.is_connect() {
            TransportError::Connection {
                message: err.to_string(),
            }
        } else if err.is_builder() {
            TransportError::Builder {
                message: err.to_string(),
            }
        } else {
            TransportError::Http {
                message: err.to_string(),
            }
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Transport(TransportError::from(err))
    }
}

/// Authentication-related errors.
#[derive(Debug, Error)]
pub enum AuthError {
    /// The token endpoint could not be reached.
    #[error("access token request failed: {0}")]
    Unreachable(#[source] TransportError),

    /// The token endpoint answered with a non-2xx status.
    #[error("access token request rejected: {0}")]
    Rejected(#[source] HttpError),

    /// The token endpoint answered without a body.
    #[error("access token response was empty")]
    EmptyResponse,

    /// The token response was not the expected JSON object.
    #[error("malformed access token response: {message}")]
    MalformedResponse { message: String },

    /// A required field was absent from the token response.
    #[error("access token response is missing '{field}'")]
    MissingField { field: &'static str },

    /// The expiry timestamp could not be parsed.
    #[error("invalid expiry '{value}': {reason}")]
    InvalidExpiry { value: String, reason: String },
}

impl AuthError {
    /// Reclassify a failed token request as an authentication failure.
    pub(crate) fn from_request(err: Error) -> Self {
        match err {
            Error::Auth(auth) => auth,
            Error::Transport(transport) => AuthError::Unreachable(transport),
            Error::Http(http) => AuthError::Rejected(http),
            other => AuthError::MalformedResponse {
                message: other.to_string(),
            },
        }
    }
}

/// A non-2xx response from the API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpError {
    /// HTTP status code.
    pub status: u16,
    /// Raw response body, possibly empty.
    pub body: String,
}

impl fmt::Display for HttpError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HTTP {}", self.status)?;
        if !self.body.is_empty() {
            write!(f, ": {}", self.body)?;
        }
        Ok(())
    }
}

impl std::error::Error for HttpError {}

impl HttpError {
    /// Create a new HTTP error.
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }
}

/// A successful response whose body could not be decoded.
#[derive(Debug, Error)]
#[error("response body is not valid JSON: {source}")]
pub struct DecodeError {
    /// HTTP status code of the response.
    pub status: u16,
    /// Raw body that failed to parse.
    pub body: String,
    #[source]
    pub source: serde_json::Error,
}

/// Input validation errors.
#[derive(Debug, Error)]
pub enum InvalidInputError {
    /// Invalid API base URL.
    #[error("invalid API URL '{value}': {reason}")]
    ApiUrl { value: String, reason: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn http_error_display_includes_status_and_body() {
        let err = HttpError::new(404, r#"{"errors":[{"code":40401}]}"#);
        assert_eq!(err.to_string(), r#"HTTP 404: {"errors":[{"code":40401}]}"#);
    }

    #[test]
    fn http_error_display_without_body() {
        assert_eq!(HttpError::new(503, "").to_string(), "HTTP 503");
    }

    #[test]
    fn token_request_failures_become_auth_errors() {
        let err = AuthError::from_request(Error::Http(HttpError::new(401, "bad nonce")));
        assert!(matches!(err, AuthError::Rejected(ref http) if http.status == 401));

        let err = AuthError::from_request(Error::Transport(TransportError::Connection {
            message: "refused".into(),
        }));
        assert!(matches!(err, AuthError::Unreachable(_)));
    }
}
