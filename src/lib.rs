//! # stockal-rs
//!
//! An unofficial Rust client library for the Stockal REST API, the platform
//! behind [globalinvesting.in](https://globalinvesting.in) for trading in the
//! US stock market.
//!
//! The client exposes three operations: [`login`](client::StockalClient::login),
//! [`get_account_summary`](client::StockalClient::get_account_summary), and
//! [`get_portfolio_detail`](client::StockalClient::get_portfolio_detail). All
//! calls except login require authentication; the client stores the access
//! token from a successful login and sends it on every subsequent request.
//!
//! ## Quick Start
//!
//! ```no_run
//! use stockal_rs::StockalClient;
//!
//! #[tokio::main]
//! async fn main() -> stockal_rs::Result<()> {
//!     let mut client = StockalClient::new()?;
//!
//!     let login = client.login("username", "password").await?;
//!     println!("token expires: {}", login.data.expiry_access_token);
//!
//!     let summary = client.get_account_summary().await?;
//!     println!(
//!         "cash available for trade: {:.2}",
//!         summary.data.account_summary.cash_available_for_trade
//!     );
//!
//!     let portfolio = client.get_portfolio_detail().await?;
//!     for holding in &portfolio.data.holdings {
//!         println!("{}: {:.2}", holding.symbol, holding.current_value());
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! Every fallible operation returns [`Result`], distinguishing input
//! validation, missing authentication, transport failures, malformed
//! responses, and structured API errors. Nothing is retried or swallowed
//! internally; retry policy belongs to the caller.

pub mod api;
pub mod client;
pub mod config;
pub mod constants;
pub mod error;
pub mod types;

/// Re-export the main client type at crate root for convenience.
pub use client::StockalClient;
/// Re-export the capability trait implemented by the client and test doubles.
pub use api::StockalApi;
/// Re-export the configuration type.
pub use config::ClientConfig;
/// Re-export the error type and Result alias.
pub use error::{ApiErrorBody, Result, StockalError};
