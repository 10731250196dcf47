//! Standard errors used by all functions in the crate.

use crate::model::{ClientError, ServerError};
use reqwest::header::HeaderMap;
use serde_json::Value;
use std::fmt;

/// Error collecting all possible failures of the Secupay client.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// A required argument was missing or invalid. Raised before any network activity.
    #[error("Invalid argument: {0}")]
    ValidationError(String),
    /// The client configuration could not be loaded.
    #[error("Invalid configuration: {0}")]
    ConfigError(#[from] config::ConfigError),
    /// The server reported a version conflict (HTTP 409).
    #[error("{0}")]
    VersioningError(#[from] VersioningError),
    /// Error returned by a Secupay API endpoint.
    #[error("{0}")]
    ApiError(#[from] ApiError),
    /// Failure below the HTTP layer: no response was obtained from the server.
    #[error("Transport error: {0}")]
    TransportError(#[source] Box<dyn std::error::Error + Send + Sync + 'static>),
    /// A successful response could not be decoded into the requested type.
    #[error("Unexpected response payload: {0}")]
    DeserializationError(#[source] serde_json::Error),
    /// Catch-all variant for unexpected errors.
    #[error(transparent)]
    Other(anyhow::Error),
}

/// Discriminant of an [`Error`](crate::error::Error).
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum ErrorKind {
    Validation,
    Versioning,
    Api,
    Transport,
    Other,
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::ValidationError(_) | Error::ConfigError(_) => ErrorKind::Validation,
            Error::VersioningError(_) => ErrorKind::Versioning,
            Error::ApiError(_) => ErrorKind::Api,
            Error::TransportError(_) => ErrorKind::Transport,
            Error::DeserializationError(_) | Error::Other(_) => ErrorKind::Other,
        }
    }

    /// Returns `true` if the request did not complete within its timeout.
    pub fn is_timeout(&self) -> bool {
        match self {
            Error::TransportError(e) => e
                .downcast_ref::<reqwest::Error>()
                .map_or(false, reqwest::Error::is_timeout),
            _ => false,
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(e: reqwest::Error) -> Self {
        Error::TransportError(Box::new(e))
    }
}

impl From<reqwest_middleware::Error> for Error {
    fn from(e: reqwest_middleware::Error) -> Self {
        match e {
            reqwest_middleware::Error::Reqwest(e) => Error::from(e),
            reqwest_middleware::Error::Middleware(e) => {
                e.downcast::<Error>().unwrap_or_else(Error::Other)
            }
        }
    }
}

/// The entity being updated was modified by another request in the meantime.
///
/// Re-read the entity and retry the operation with its current version.
#[derive(thiserror::Error, Debug, Clone, Eq, PartialEq)]
#[error("The object at '{resource_path}' was modified by another request. Reload it and retry with its current version.")]
pub struct VersioningError {
    /// Resource path of the operation that hit the conflict.
    pub resource_path: String,
}

impl VersioningError {
    pub fn new(resource_path: impl Into<String>) -> Self {
        Self {
            resource_path: resource_path.into(),
        }
    }
}

/// Secupay HTTP APIs error.
#[derive(thiserror::Error, Debug)]
pub struct ApiError {
    /// HTTP status returned by the server.
    pub status: u16,
    /// Raw response headers.
    pub headers: HeaderMap,
    /// Best-effort decoding of the response body.
    pub body: ErrorBody,
    /// Human readable description including the request URL and the raw body.
    pub message: String,
}

impl ApiError {
    /// Returns the decoded body if the server answered with a client error (HTTP 442).
    pub fn client_error(&self) -> Option<&ClientError> {
        match self.body {
            ErrorBody::ClientError(ref e) => Some(e),
            _ => None,
        }
    }

    /// Returns the decoded body if the server answered with a server error (HTTP 542).
    pub fn server_error(&self) -> Option<&ServerError> {
        match self.body {
            ErrorBody::ServerError(ref e) => Some(e),
            _ => None,
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)?;

        let description = match self.body {
            ErrorBody::ClientError(ref e) => e.message.as_deref(),
            ErrorBody::ServerError(ref e) => e.message.as_deref(),
            _ => None,
        };
        if let Some(description) = description {
            write!(f, "\nAdditional details: {}", description)?;
        }

        Ok(())
    }
}

/// Body of an error response, decoded according to the status code.
#[derive(Debug, Clone, PartialEq)]
pub enum ErrorBody {
    /// HTTP 442.
    ClientError(ClientError),
    /// HTTP 542.
    ServerError(ServerError),
    /// Any other JSON document.
    Json(Value),
    /// The body was not JSON.
    Text(String),
    Empty,
}

impl ErrorBody {
    /// Decodes an error body, falling back to the raw text when it is not valid JSON.
    pub(crate) fn decode(status: u16, bytes: &[u8]) -> Self {
        if bytes.is_empty() {
            return ErrorBody::Empty;
        }

        let value: Value = match serde_json::from_slice(bytes) {
            Ok(value) => value,
            Err(_) => return ErrorBody::Text(String::from_utf8_lossy(bytes).into_owned()),
        };

        match status {
            442 => serde_json::from_value(value.clone())
                .map(ErrorBody::ClientError)
                .unwrap_or(ErrorBody::Json(value)),
            542 => serde_json::from_value(value.clone())
                .map(ErrorBody::ServerError)
                .unwrap_or(ErrorBody::Json(value)),
            _ => ErrorBody::Json(value),
        }
    }
}
