//! Constants for the Stockal REST API.
//!
//! Contains the production base URL and the client defaults. These are used
//! internally by [`StockalClient`](crate::client::StockalClient) and
//! [`ClientConfig`](crate::config::ClientConfig), but are also exported for
//! advanced usage.

use std::time::Duration;

// ---------------------------------------------------------------------------
// Base URLs
// ---------------------------------------------------------------------------

/// Base URL for the Stockal REST API v2.
pub const API_BASE_URL: &str = "https://api-v2.stockal.com";

/// Web origin impersonated by the fixed browser-emulation headers.
///
/// The upstream service expects requests to look like they come from its own
/// web frontend; the `Origin` and `Referer` headers are part of the wire
/// contract.
pub const WEB_ORIGIN: &str = "https://globalinvesting.in";

/// `Referer` header value sent with every request.
pub const WEB_REFERER: &str = "https://globalinvesting.in/";

// ---------------------------------------------------------------------------
// Client defaults
// ---------------------------------------------------------------------------

/// Default timeout applied to every HTTP request.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Default `User-Agent` header value.
pub const DEFAULT_USER_AGENT: &str = concat!("stockal-rs/", env!("CARGO_PKG_VERSION"));
