//! Account summary types — cash balances, restrictions, portfolio summary.

use serde::Deserialize;

/// A scheduled cash settlement in the account.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CashSettlement {
    /// Settlement date and time in UTC, as sent by the service.
    pub utc_time: String,
    /// Amount to be settled.
    pub cash: f64,
}

/// Account-level cash balances and restriction flags.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AccountSummary {
    /// Cash available for placing new trades.
    pub cash_available_for_trade: f64,
    /// Cash available for withdrawal.
    pub cash_available_for_withdrawal: f64,
    /// Total cash balance in the account.
    pub cash_balance: f64,
    /// Current good-faith violations, as a free-form string (e.g. `"0 of 3"`).
    pub good_faith_violations: String,
    /// Whether the account has trading restrictions.
    pub restricted: bool,
    /// Scheduled cash settlements.
    pub cash_settlement: Vec<CashSettlement>,
}

/// Current value and invested amount for one portfolio category.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Portfolio {
    /// Current market value of holdings in this category.
    pub current_value: f64,
    /// Total amount invested in this category.
    pub investment_amount: f64,
}

impl Portfolio {
    /// Unrealized gain or loss: current value minus invested amount.
    pub fn gain_loss(&self) -> f64 {
        self.current_value - self.investment_amount
    }
}

/// Per-category portfolio summaries plus account-wide totals.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PortfolioSummary {
    /// Stock holdings summary.
    pub stock_portfolio: Portfolio,
    /// Stack (curated basket) holdings summary.
    pub stack_portfolio: Portfolio,
    /// ETF holdings summary.
    pub etf_portfolio: Portfolio,
    /// Total current value across all categories.
    pub total_current_value: f64,
    /// Total invested amount across all categories.
    pub total_investment_amount: f64,
}

impl PortfolioSummary {
    /// Account-wide unrealized gain or loss.
    pub fn total_gain_loss(&self) -> f64 {
        self.total_current_value - self.total_investment_amount
    }
}

/// Data payload of an account summary response.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AccountSummaryData {
    /// Timestamp when the summary was generated, as sent by the service.
    pub utc_time: String,
    /// Account-level balances and restrictions.
    pub account_summary: AccountSummary,
    /// Amount of unsettled funds.
    pub unsettled_amount: f64,
    /// Per-category portfolio summaries.
    pub portfolio_summary: PortfolioSummary,
}

/// Response envelope from `GET /v2/users/accountSummary/summary`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AccountSummaryResponse {
    /// Application-level status code (usually mirrors the HTTP status).
    pub code: i64,
    /// Response message (usually `"Success"`).
    pub message: String,
    /// The account summary payload.
    pub data: AccountSummaryData,
}
