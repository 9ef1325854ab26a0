//! Typed errors
//!
//! # Error Categories
//!
//! - [`StoreError`]: the database collaborator raised (logged, never shown verbatim)
//! - [`ConfigError`]: configuration could not be loaded
//! - [`RequestError`]: an HTTP request could not be read as a form submission
//!
//! Validation failures are not errors here; they travel inside an
//! [`ActionState`](crate::actions::ActionState). [`InvoiceError`] covers the
//! failures the HTTP layer answers directly, mapping each to a status code and
//! a JSON body. Configuration errors surface at startup instead.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use std::fmt;

/// Error answered directly by the HTTP layer
#[derive(Debug)]
pub enum InvoiceError {
    /// Database collaborator failure
    Store(StoreError),

    /// Unreadable request
    Request(RequestError),

    /// Markup rendering failed
    Render(String),
}

impl fmt::Display for InvoiceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvoiceError::Store(e) => write!(f, "{}", e),
            InvoiceError::Request(e) => write!(f, "{}", e),
            InvoiceError::Render(msg) => write!(f, "Render error: {}", msg),
        }
    }
}

impl std::error::Error for InvoiceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            InvoiceError::Store(e) => Some(e),
            InvoiceError::Request(e) => Some(e),
            InvoiceError::Render(_) => None,
        }
    }
}

/// Error response structure for HTTP responses
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error code for programmatic handling
    pub code: String,
    /// Human-readable error message
    pub message: String,
}

impl InvoiceError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            InvoiceError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
            InvoiceError::Request(e) => e.status_code(),
            InvoiceError::Render(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the error code for this error
    pub fn error_code(&self) -> &'static str {
        match self {
            InvoiceError::Store(_) => "STORE_ERROR",
            InvoiceError::Request(e) => e.error_code(),
            InvoiceError::Render(_) => "RENDER_ERROR",
        }
    }

    /// Message safe to show an end user
    ///
    /// Store and render failures carry backend detail that stays in the logs.
    pub fn public_message(&self) -> String {
        match self {
            InvoiceError::Store(_) => "Database Error: the request could not be completed.".into(),
            InvoiceError::Render(_) => "Internal error: the request could not be completed.".into(),
            InvoiceError::Request(e) => e.to_string(),
        }
    }

    /// Convert to an error response
    pub fn to_response(&self) -> ErrorResponse {
        ErrorResponse {
            code: self.error_code().to_string(),
            message: self.public_message(),
        }
    }
}

impl IntoResponse for InvoiceError {
    fn into_response(self) -> Response {
        if matches!(self, InvoiceError::Store(_) | InvoiceError::Render(_)) {
            tracing::error!(error = %self, "request failed");
        }
        let status = self.status_code();
        let body = Json(self.to_response());
        (status, body).into_response()
    }
}

// =============================================================================
// Store Errors
// =============================================================================

/// Errors raised by an [`InvoiceStore`](crate::core::store::InvoiceStore)
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Failed to connect to {backend}: {message}")]
    Connection {
        backend: &'static str,
        message: String,
    },

    #[error("{backend} query error during {operation}: {message}")]
    Query {
        backend: &'static str,
        operation: &'static str,
        message: String,
    },

    #[error("Data integrity error: {message}")]
    Integrity { message: String },

    #[error("Store lock poisoned: {0}")]
    LockPoisoned(String),
}

impl From<StoreError> for InvoiceError {
    fn from(err: StoreError) -> Self {
        InvoiceError::Store(err)
    }
}

// =============================================================================
// Config Errors
// =============================================================================

/// Errors related to configuration
#[derive(Debug)]
pub enum ConfigError {
    /// Failed to parse configuration file
    ParseError {
        file: Option<String>,
        message: String,
    },

    /// Invalid value in configuration
    InvalidValue {
        field: String,
        value: String,
        message: String,
    },

    /// Configuration file not found
    FileNotFound { path: String },

    /// IO error while reading configuration
    IoError { message: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ParseError { file, message } => {
                if let Some(file) = file {
                    write!(f, "Failed to parse config file '{}': {}", file, message)
                } else {
                    write!(f, "Failed to parse config: {}", message)
                }
            }
            ConfigError::InvalidValue {
                field,
                value,
                message,
            } => {
                write!(
                    f,
                    "Invalid value '{}' for field '{}': {}",
                    value, field, message
                )
            }
            ConfigError::FileNotFound { path } => {
                write!(f, "Configuration file not found: {}", path)
            }
            ConfigError::IoError { message } => {
                write!(f, "IO error: {}", message)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<serde_yaml::Error> for ConfigError {
    fn from(err: serde_yaml::Error) -> Self {
        ConfigError::ParseError {
            file: None,
            message: err.to_string(),
        }
    }
}

// =============================================================================
// Request Errors
// =============================================================================

/// Errors reading a form submission from an HTTP request
#[derive(Debug)]
pub enum RequestError {
    /// Body could not be decoded
    InvalidBody { message: String },

    /// Content type is neither URL-encoded nor JSON
    UnsupportedMediaType { content_type: String },
}

impl fmt::Display for RequestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RequestError::InvalidBody { message } => {
                write!(f, "Invalid request body: {}", message)
            }
            RequestError::UnsupportedMediaType { content_type } => {
                write!(f, "Unsupported content type: '{}'", content_type)
            }
        }
    }
}

impl std::error::Error for RequestError {}

impl RequestError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            RequestError::InvalidBody { .. } => StatusCode::BAD_REQUEST,
            RequestError::UnsupportedMediaType { .. } => StatusCode::UNSUPPORTED_MEDIA_TYPE,
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            RequestError::InvalidBody { .. } => "INVALID_BODY",
            RequestError::UnsupportedMediaType { .. } => "UNSUPPORTED_MEDIA_TYPE",
        }
    }
}

impl From<RequestError> for InvoiceError {
    fn from(err: RequestError) -> Self {
        InvoiceError::Request(err)
    }
}
