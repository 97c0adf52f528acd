//! REST API endpoint implementations.
//!
//! Each sub-module adds high-level `async` methods to
//! [`StockalClient`](crate::client::StockalClient) via `impl` blocks. All
//! methods handle JSON serialization, HTTP transport, and error mapping.
//!
//! | Module | Endpoint | Description |
//! |---|---|---|
//! | [`auth`] | `POST /v3/auth/login` | Authentication |
//! | [`account`] | `GET /v2/users/accountSummary/summary` | Account summary |
//! | [`portfolio`] | `GET /v2/users/portfolio/detail` | Portfolio holdings |
//!
//! The same three operations are also expressed as the [`StockalApi`] trait
//! so code under test can substitute a stub for the production client.

pub mod account;
pub mod auth;
pub mod portfolio;

use crate::client::StockalClient;
use crate::error::Result;
use crate::types::account::AccountSummaryResponse;
use crate::types::auth::LoginResponse;
use crate::types::portfolio::PortfolioDetailResponse;

/// The Stockal API operations as an abstract capability set.
///
/// [`StockalClient`] is the production implementation; test doubles can
/// implement the trait to exercise consuming code without network access.
#[allow(async_fn_in_trait)]
pub trait StockalApi {
    /// Authenticate and store the session token for subsequent calls.
    async fn login(&mut self, username: &str, password: &str) -> Result<LoginResponse>;

    /// Fetch the account summary. Requires a prior successful login.
    async fn get_account_summary(&self) -> Result<AccountSummaryResponse>;

    /// Fetch the portfolio holdings. Requires a prior successful login.
    async fn get_portfolio_detail(&self) -> Result<PortfolioDetailResponse>;
}

impl StockalApi for StockalClient {
    async fn login(&mut self, username: &str, password: &str) -> Result<LoginResponse> {
        StockalClient::login(self, username, password).await
    }

    async fn get_account_summary(&self) -> Result<AccountSummaryResponse> {
        StockalClient::get_account_summary(self).await
    }

    async fn get_portfolio_detail(&self) -> Result<PortfolioDetailResponse> {
        StockalClient::get_portfolio_detail(self).await
    }
}
