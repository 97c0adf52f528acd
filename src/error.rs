//! Error types for the `stockal-rs` crate.
//!
//! All fallible operations in this crate return [`Result<T>`], which is an
//! alias for `std::result::Result<T, StockalError>`.
//!
//! [`StockalError`] covers:
//! - **Validation errors** — empty username/password, rejected before any I/O
//! - **Precondition errors** — authenticated call without a prior login
//! - **Transport errors** — DNS, connection, timeout, cancellation, body read
//! - **Decode errors** — response body is not valid JSON for the expected shape
//! - **API errors** — structured error envelopes from the Stockal service
//! - **Credential errors** — login rejected at the application level

use std::fmt;

use crate::types::auth::LoginResponse;

/// Structured error body returned by the Stockal API.
///
/// The service returns this shape with non-200 statuses (and sometimes with
/// 200 — see [`StockalError::InvalidCredentials`]).
#[derive(Debug, Clone, Default, serde::Deserialize)]
#[serde(default)]
pub struct ApiErrorBody {
    /// Application-level status code (mirrors the HTTP status on errors).
    pub code: i64,
    /// Human-readable description of the error.
    pub message: String,
    /// Optional error code string (e.g. an auth failure identifier).
    pub error: Option<String>,
}

impl fmt::Display for ApiErrorBody {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.error.as_deref() {
            Some(err) if !err.is_empty() => {
                write!(f, "{}: {} - {}", self.code, self.message, err)
            }
            _ => write!(f, "{}: {}", self.code, self.message),
        }
    }
}

/// All possible errors produced by the `stockal-rs` client.
#[derive(Debug, thiserror::Error)]
pub enum StockalError {
    /// Login was called with a blank username. No request is issued.
    #[error("username cannot be empty")]
    EmptyUsername,

    /// Login was called with a blank password. No request is issued.
    #[error("password cannot be empty")]
    EmptyPassword,

    /// An authenticated operation was called before a successful login.
    /// Detected locally; no request is issued.
    #[error("not authenticated: please login first")]
    NotAuthenticated,

    /// The service rejected the supplied credentials.
    ///
    /// Raised when the login envelope carries a non-empty `error` field,
    /// regardless of the HTTP status. The decoded envelope is included so
    /// callers can inspect its diagnostic fields.
    #[error("invalid credentials")]
    InvalidCredentials {
        /// The decoded login envelope, including its `code`, `message`, and
        /// `error` fields.
        response: Box<LoginResponse>,
    },

    /// A structured error envelope returned by the Stockal REST API.
    #[error("API error {0}")]
    Api(ApiErrorBody),

    /// The server returned a non-200 status without a usable error envelope.
    #[error("{operation} failed with status code: {}", .status.as_u16())]
    HttpStatus {
        /// The operation that failed (used only for error text).
        operation: &'static str,
        /// The HTTP status code.
        status: reqwest::StatusCode,
    },

    /// A network or transport-level failure, including timeouts and
    /// cancelled in-flight requests.
    #[error("{operation} request failed: {source}")]
    Transport {
        /// The operation that failed (used only for error text).
        operation: &'static str,
        /// The underlying transport error.
        source: reqwest::Error,
    },

    /// Failed to deserialize a response body into the expected envelope.
    #[error("failed to parse {operation} response: {source}")]
    Decode {
        /// The operation that failed (used only for error text).
        operation: &'static str,
        /// The underlying deserialization error.
        source: serde_json::Error,
    },

    /// An error building or parsing a URL.
    #[error("URL error: {0}")]
    Url(#[from] url::ParseError),

    /// The caller provided an invalid argument.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, StockalError>;
