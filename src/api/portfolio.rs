//! Portfolio detail endpoint implementation.

use crate::client::StockalClient;
use crate::error::{Result, StockalError};
use crate::types::portfolio::PortfolioDetailResponse;

impl StockalClient {
    /// Retrieve detailed information about every holding in the portfolio.
    ///
    /// Requires a prior successful [`login`](StockalClient::login); fails
    /// with [`StockalError::NotAuthenticated`] before any network activity
    /// otherwise. Does not mutate session state.
    ///
    /// **Endpoint:** `GET /v2/users/portfolio/detail`
    pub async fn get_portfolio_detail(&self) -> Result<PortfolioDetailResponse> {
        if !self.is_authenticated() {
            return Err(StockalError::NotAuthenticated);
        }
        let resp = self
            .get("portfolio detail", "/v2/users/portfolio/detail")
            .await?;
        self.read_envelope("portfolio detail", resp).await
    }
}
