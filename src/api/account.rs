//! Account summary endpoint implementation.

use crate::client::StockalClient;
use crate::error::{Result, StockalError};
use crate::types::account::AccountSummaryResponse;

impl StockalClient {
    /// Retrieve the account summary: cash balances, restrictions, and
    /// per-category portfolio summaries.
    ///
    /// Requires a prior successful [`login`](StockalClient::login); fails
    /// with [`StockalError::NotAuthenticated`] before any network activity
    /// otherwise. Does not mutate session state.
    ///
    /// **Endpoint:** `GET /v2/users/accountSummary/summary`
    pub async fn get_account_summary(&self) -> Result<AccountSummaryResponse> {
        if !self.is_authenticated() {
            return Err(StockalError::NotAuthenticated);
        }
        let resp = self
            .get("account summary", "/v2/users/accountSummary/summary")
            .await?;
        self.read_envelope("account summary", resp).await
    }
}
