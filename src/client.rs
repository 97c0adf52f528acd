//! Core HTTP client for the Stockal REST API.
//!
//! The [`StockalClient`] struct is the main entry point for interacting with
//! the Stockal REST API. It wraps [`reqwest::Client`] with the fixed
//! browser-emulation headers the service expects, holds the session access
//! token, and provides the request/response plumbing used by the endpoint
//! methods in the [`crate::api`] module.
//!
//! # Concurrency
//!
//! A `StockalClient` represents a single logical session. The access token
//! is a plain field written by [`login`](StockalClient::login) and read by
//! every authenticated call; the type performs no internal locking. Sharing
//! one instance across concurrent tasks requires external synchronization
//! (e.g. wrapping the client in a `Mutex`).

use reqwest::header::{self, HeaderMap, HeaderValue};
use reqwest::{RequestBuilder, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use url::Url;

use crate::config::ClientConfig;
use crate::constants::{WEB_ORIGIN, WEB_REFERER};
use crate::error::{ApiErrorBody, Result, StockalError};

/// Core HTTP client for the Stockal REST API.
///
/// Wraps [`reqwest::Client`] and injects the `Authorization` header into
/// every request once a login has stored an access token. The auth header
/// value is cached when the token is stored to avoid per-request parsing.
///
/// # Example
///
/// ```no_run
/// use stockal_rs::StockalClient;
///
/// # #[tokio::main]
/// # async fn main() -> stockal_rs::Result<()> {
/// let mut client = StockalClient::new()?;
/// client.login("username", "password").await?;
/// let summary = client.get_account_summary().await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct StockalClient {
    http: reqwest::Client,
    /// Base URL for REST API requests, without a trailing slash.
    base_url: String,
    /// Bearer token from the last successful login. `Some` implies non-empty.
    access_token: Option<String>,
    /// Pre-built `Authorization` header value, cached alongside the token.
    auth_header: Option<HeaderValue>,
}

impl StockalClient {
    /// Create a new `StockalClient` with the default configuration.
    ///
    /// Uses the production API base URL, a 30 second timeout, and the
    /// library's own `User-Agent` string.
    pub fn new() -> Result<Self> {
        Self::with_config(ClientConfig::default())
    }

    /// Create a new `StockalClient` from an explicit configuration.
    ///
    /// Structural validation happens here rather than at request time: a
    /// zero timeout is an [`StockalError::InvalidArgument`] and an
    /// unparseable base URL is an [`StockalError::Url`].
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        if config.timeout.is_zero() {
            return Err(StockalError::InvalidArgument(
                "timeout must be a positive duration".into(),
            ));
        }
        Url::parse(&config.base_url)?;

        let user_agent = HeaderValue::from_str(&config.user_agent).map_err(|_| {
            StockalError::InvalidArgument("user agent contains invalid header characters".into())
        })?;

        let http = reqwest::Client::builder()
            .default_headers(Self::default_headers())
            .user_agent(user_agent)
            .timeout(config.timeout)
            .build()
            .map_err(|source| StockalError::Transport {
                operation: "client construction",
                source,
            })?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_owned(),
            access_token: None,
            auth_header: None,
        })
    }

    /// Returns a reference to the underlying `reqwest::Client`.
    pub fn http(&self) -> &reqwest::Client {
        &self.http
    }

    /// Returns the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns the access token from the last successful login, if any.
    pub fn access_token(&self) -> Option<&str> {
        self.access_token.as_deref()
    }

    /// Whether a login has stored a non-empty access token.
    pub fn is_authenticated(&self) -> bool {
        self.access_token.is_some()
    }

    /// Store (or clear, when empty) the session access token.
    ///
    /// Last writer wins; authenticated calls read whatever token is current.
    pub(crate) fn store_access_token(&mut self, token: &str) -> Result<()> {
        if token.is_empty() {
            self.access_token = None;
            self.auth_header = None;
            return Ok(());
        }
        let value = HeaderValue::from_str(token).map_err(|_| {
            StockalError::InvalidArgument("access token contains invalid header characters".into())
        })?;
        self.access_token = Some(token.to_owned());
        self.auth_header = Some(value);
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Transport
    // -----------------------------------------------------------------------

    /// Perform a GET request with no body, returning the raw response.
    pub(crate) async fn get(
        &self,
        operation: &'static str,
        path: &str,
    ) -> Result<reqwest::Response> {
        let url = self.url(path);
        tracing::debug!(%url, operation, "GET");
        self.dispatch(operation, self.http.get(&url)).await
    }

    /// Perform a POST request with a JSON body, returning the raw response.
    ///
    /// `Content-Type: application/json` is set by the body serialization;
    /// bodyless requests never carry a content type.
    pub(crate) async fn post<B: Serialize>(
        &self,
        operation: &'static str,
        path: &str,
        body: &B,
    ) -> Result<reqwest::Response> {
        let url = self.url(path);
        tracing::debug!(%url, operation, "POST");
        self.dispatch(operation, self.http.post(&url).json(body)).await
    }

    /// Attach the `Authorization` header when a token is held, then execute.
    ///
    /// The header is omitted entirely while unauthenticated; the service
    /// rejects placeholder or empty values. Timeouts and dropped futures
    /// surface as [`StockalError::Transport`] and leave the stored token
    /// untouched.
    async fn dispatch(
        &self,
        operation: &'static str,
        mut request: RequestBuilder,
    ) -> Result<reqwest::Response> {
        if let Some(auth) = &self.auth_header {
            request = request.header(header::AUTHORIZATION, auth.clone());
        }
        request
            .send()
            .await
            .map_err(|source| StockalError::Transport { operation, source })
    }

    // -----------------------------------------------------------------------
    // Response decoding
    // -----------------------------------------------------------------------

    /// Read a response into a typed envelope, or classify the failure.
    ///
    /// The body is decoded *before* the status code is checked: the service
    /// returns structured errors with non-200 statuses, and a well-formed
    /// JSON body must win over a generic status error. The sequence is:
    ///
    /// 1. Read the full body (read failure → [`StockalError::Transport`]).
    /// 2. Decode into the envelope (failure → [`StockalError::Decode`], fatal).
    /// 3. Non-200 status → reinterpret the body as [`ApiErrorBody`]; a parse
    ///    with a non-zero code is an [`StockalError::Api`], anything else an
    ///    [`StockalError::HttpStatus`].
    /// 4. Status 200 → the populated envelope.
    pub(crate) async fn read_envelope<R: DeserializeOwned>(
        &self,
        operation: &'static str,
        resp: reqwest::Response,
    ) -> Result<R> {
        let status = resp.status();
        let bytes = resp
            .bytes()
            .await
            .map_err(|source| StockalError::Transport { operation, source })?;

        let envelope = serde_json::from_slice(&bytes)
            .map_err(|source| StockalError::Decode { operation, source })?;

        if status != StatusCode::OK {
            return Err(self.classify_failure(operation, status, &bytes));
        }

        Ok(envelope)
    }

    /// Classify a non-200 response: prefer the API's structured error body,
    /// fall back to a raw status error.
    pub(crate) fn classify_failure(
        &self,
        operation: &'static str,
        status: StatusCode,
        body: &[u8],
    ) -> StockalError {
        if let Ok(api_err) = serde_json::from_slice::<ApiErrorBody>(body) {
            if api_err.code != 0 {
                return StockalError::Api(api_err);
            }
        }
        StockalError::HttpStatus { operation, status }
    }

    // -----------------------------------------------------------------------
    // Private helpers
    // -----------------------------------------------------------------------

    /// Build the full URL from a path segment.
    fn url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }

    /// Fixed headers applied to every request.
    ///
    /// These emulate the Stockal web frontend and are part of the wire
    /// contract with the upstream service; they are not user-configurable.
    fn default_headers() -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::ACCEPT,
            HeaderValue::from_static("application/json, text/plain, */*"),
        );
        headers.insert(
            header::ACCEPT_LANGUAGE,
            HeaderValue::from_static("en-US,en;q=0.5"),
        );
        headers.insert(header::ORIGIN, HeaderValue::from_static(WEB_ORIGIN));
        headers.insert(header::REFERER, HeaderValue::from_static(WEB_REFERER));
        headers.insert("sec-fetch-dest", HeaderValue::from_static("empty"));
        headers.insert("sec-fetch-mode", HeaderValue::from_static("cors"));
        headers.insert("sec-fetch-site", HeaderValue::from_static("cross-site"));
        headers.insert(header::CACHE_CONTROL, HeaderValue::from_static("no-cache"));
        headers.insert(header::PRAGMA, HeaderValue::from_static("no-cache"));
        headers
    }
}
