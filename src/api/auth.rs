//! Authentication endpoint implementation.

use reqwest::StatusCode;

use crate::client::StockalClient;
use crate::error::{Result, StockalError};
use crate::types::auth::{LoginRequest, LoginResponse};

impl StockalClient {
    /// Authenticate with Stockal and store the access token for subsequent
    /// requests.
    ///
    /// Both credentials must be non-blank; blank input fails fast with
    /// [`StockalError::EmptyUsername`] / [`StockalError::EmptyPassword`]
    /// before any network activity. A login whose envelope carries a
    /// non-empty `error` field fails with
    /// [`StockalError::InvalidCredentials`], even when the HTTP exchange
    /// itself returned 200, and leaves any previously stored token in
    /// place. On success the token is stored on the client; a later login
    /// overwrites it (last writer wins).
    ///
    /// **Endpoint:** `POST /v3/auth/login`
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use stockal_rs::StockalClient;
    /// # #[tokio::main]
    /// # async fn main() -> stockal_rs::Result<()> {
    /// let mut client = StockalClient::new()?;
    /// let resp = client.login("username", "password").await?;
    /// println!("token expires: {}", resp.data.expiry_access_token);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn login(&mut self, username: &str, password: &str) -> Result<LoginResponse> {
        if username.trim().is_empty() {
            return Err(StockalError::EmptyUsername);
        }
        if password.trim().is_empty() {
            return Err(StockalError::EmptyPassword);
        }

        let body = LoginRequest {
            username: username.to_owned(),
            password: password.to_owned(),
        };
        let resp = self.post("login", "/v3/auth/login", &body).await?;

        // Decoded by hand rather than through `read_envelope` because the
        // application-level `error` field must be inspected whatever the
        // HTTP status was.
        let status = resp.status();
        let bytes = resp.bytes().await.map_err(|source| StockalError::Transport {
            operation: "login",
            source,
        })?;
        let envelope: LoginResponse =
            serde_json::from_slice(&bytes).map_err(|source| StockalError::Decode {
                operation: "login",
                source,
            })?;

        if envelope.error.as_deref().is_some_and(|e| !e.is_empty()) {
            return Err(StockalError::InvalidCredentials {
                response: Box::new(envelope),
            });
        }
        if status != StatusCode::OK {
            return Err(self.classify_failure("login", status, &bytes));
        }

        self.store_access_token(&envelope.data.access_token)?;
        tracing::debug!(
            authenticated = self.is_authenticated(),
            "login succeeded"
        );
        Ok(envelope)
    }
}
