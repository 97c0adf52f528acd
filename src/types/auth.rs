//! Authentication request/response types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Request payload for user authentication.
///
/// Used by `POST /v3/auth/login`. Credentials are transient: they are sent
/// once and never stored or logged by the client.
#[derive(Clone, Serialize)]
pub struct LoginRequest {
    /// The user's login username.
    pub username: String,
    /// The user's login password.
    pub password: String,
}

/// Data payload of a successful login.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LoginData {
    /// JWT used for authenticated API calls, sent as the `Authorization`
    /// header value.
    pub access_token: String,
    /// Token the service issues for refreshing the access token.
    pub refresh_token: String,
    /// Access token expiration time, as sent by the service.
    pub expiry_access_token: String,
    /// Refresh token expiration time, as sent by the service.
    pub expiry_refresh_token: String,
}

impl LoginData {
    /// Parse the access token expiry as a UTC timestamp.
    ///
    /// Returns `None` when the field is absent or not RFC 3339. The client
    /// never enforces expiry itself; this is a convenience for callers that
    /// want to schedule a re-login.
    pub fn access_token_expiry(&self) -> Option<DateTime<Utc>> {
        DateTime::parse_from_rfc3339(&self.expiry_access_token)
            .ok()
            .map(|t| t.with_timezone(&Utc))
    }

    /// Parse the refresh token expiry as a UTC timestamp.
    pub fn refresh_token_expiry(&self) -> Option<DateTime<Utc>> {
        DateTime::parse_from_rfc3339(&self.expiry_refresh_token)
            .ok()
            .map(|t| t.with_timezone(&Utc))
    }
}

/// Response envelope from the login endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LoginResponse {
    /// Application-level status code (usually mirrors the HTTP status).
    pub code: i64,
    /// Response message (usually `"Success"`).
    pub message: String,
    /// Token payload; defaulted when the service omits it on failure.
    pub data: LoginData,
    /// Error code string, set when the login failed at the application level.
    pub error: Option<String>,
}
