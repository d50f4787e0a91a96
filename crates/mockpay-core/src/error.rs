//! Error types for the fake payment API.
//!
//! Request handlers only ever fail with [`RequestError`], whose two variants
//! mirror what the remote service reports. Problems loading or checking a
//! schema registry are [`SetupError`]s and surface from
//! [`FakeApiBuilder::build`](crate::api::FakeApiBuilder::build) only.

use std::path::PathBuf;

use serde::Serialize;
use thiserror::Error;

/// Status code for requests rejected by validation.
pub const BAD_REQUEST: u16 = 400;

/// Status code for lookups of records that do not exist.
pub const NOT_FOUND: u16 = 404;

/// Error returned by every request handler.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RequestError {
    /// The request failed validation.
    #[error("{message}")]
    InvalidRequest { message: String, param: String },
    /// The addressed record does not exist.
    #[error("{message}")]
    NotFound { message: String, param: String },
}

/// Builder for validation errors scoped to one parameter.
pub struct InvalidRequestBuilder {
    param: String,
}

impl InvalidRequestBuilder {
    /// Create a new builder for the given offending parameter.
    pub fn new(param: impl Into<String>) -> Self {
        Self {
            param: param.into(),
        }
    }

    /// Build the error with the given message.
    pub fn with_message(self, message: impl Into<String>) -> RequestError {
        RequestError::InvalidRequest {
            message: message.into(),
            param: self.param,
        }
    }
}

impl RequestError {
    /// Creates a builder for validation errors on `param`.
    pub fn invalid(param: impl Into<String>) -> InvalidRequestBuilder {
        InvalidRequestBuilder::new(param)
    }

    /// The error raised when `resource` has no record with `id`.
    pub fn not_found(resource: &str, id: &str) -> Self {
        Self::NotFound {
            message: format!("No such {resource}: {id}"),
            param: resource.to_string(),
        }
    }

    /// The error raised when no schema is registered for `resource`.
    pub fn unknown_resource(resource: &str) -> Self {
        Self::NotFound {
            message: format!("Unrecognized resource type: {resource}"),
            param: resource.to_string(),
        }
    }

    /// Human-readable message, exactly as the remote service words it.
    pub fn message(&self) -> &str {
        match self {
            Self::InvalidRequest { message, .. } | Self::NotFound { message, .. } => message,
        }
    }

    /// Name of the offending parameter, or the resource type for lookups.
    pub fn param(&self) -> &str {
        match self {
            Self::InvalidRequest { param, .. } | Self::NotFound { param, .. } => param,
        }
    }

    /// HTTP-equivalent status code.
    pub fn http_status(&self) -> u16 {
        match self {
            Self::InvalidRequest { .. } => BAD_REQUEST,
            Self::NotFound { .. } => NOT_FOUND,
        }
    }

    /// Error type tag; the remote service files both kinds under the same one.
    pub fn error_type(&self) -> &'static str {
        "invalid_request_error"
    }

    /// Whether this is a lookup failure rather than a validation failure.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// The JSON error envelope the remote service responds with.
    pub fn to_body(&self) -> serde_json::Value {
        let body = ErrorBody {
            error: ErrorDetail {
                error_type: self.error_type(),
                message: self.message(),
                param: self.param(),
            },
        };
        // A struct of string fields always serializes.
        serde_json::to_value(body).unwrap_or(serde_json::Value::Null)
    }
}

#[derive(Serialize)]
struct ErrorBody<'a> {
    error: ErrorDetail<'a>,
}

#[derive(Serialize)]
struct ErrorDetail<'a> {
    #[serde(rename = "type")]
    error_type: &'static str,
    message: &'a str,
    param: &'a str,
}

/// Errors raised while configuring a [`FakeApi`](crate::api::FakeApi).
#[derive(Error, Debug)]
pub enum SetupError {
    /// Reading a schema file failed
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
    /// A schema file could not be parsed
    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
    /// The schema registry is inconsistent
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

impl SetupError {
    /// Creates a configuration error with the given message.
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }
}

/// Result type alias for request handlers
pub type Result<T> = std::result::Result<T, RequestError>;
