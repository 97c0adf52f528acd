//! Portfolio detail types — individual holdings and derived metrics.

use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::Value;

/// A single owned position in the portfolio.
///
/// Wire fields are stored as received. Position metrics (current value,
/// gain/loss) are derived on demand rather than stored; see
/// [`current_value`](Holding::current_value) and friends.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Holding {
    /// Stock symbol (e.g. `"AAPL"`).
    pub symbol: String,
    /// Trading ticker symbol.
    pub ticker: String,
    /// The owning user's unique identifier.
    #[serde(rename = "userID")]
    pub user_id: String,
    /// Last update date for this holding.
    #[serde(rename = "Date")]
    pub date: String,
    /// Record version counter from the upstream store.
    #[serde(rename = "__v")]
    pub version: i64,
    /// Asset category (e.g. `"stock"`).
    pub category: String,
    /// Holding status (e.g. `"successful"`).
    pub status: String,
    /// Unix timestamp of the last update.
    pub timestamp: i64,
    /// Total amount invested in this holding.
    pub total_investment: f64,
    /// Number of shares/units owned. Fractional units are common.
    pub total_unit: f64,
    /// Asset type (e.g. `"stock"`).
    #[serde(rename = "type")]
    pub asset_type: String,
    /// Asset code.
    pub code: String,
    /// Full company name.
    pub company: String,
    /// Current price per share.
    pub price: f64,
    /// Whether the asset is currently listed/tradeable.
    pub listed: bool,
    /// Current closing price.
    pub close: f64,
    /// Previous day's closing price.
    pub prior_close: f64,
    /// URL to the company's logo image.
    pub logo: Option<String>,
    /// Whether only disposal, not acquisition, is permitted upstream.
    pub sell_only: bool,
}

impl Holding {
    /// Current market value: units × price.
    pub fn current_value(&self) -> f64 {
        self.total_unit * self.price
    }

    /// Unrealized gain or loss: current value minus invested amount.
    pub fn gain_loss(&self) -> f64 {
        self.current_value() - self.total_investment
    }

    /// Gain/loss as a percentage of the invested amount.
    ///
    /// Returns `None` when the invested amount is zero, where the ratio is
    /// undefined.
    pub fn gain_loss_percent(&self) -> Option<f64> {
        if self.total_investment == 0.0 {
            return None;
        }
        Some(self.gain_loss() / self.total_investment * 100.0)
    }

    /// The last-update timestamp as a UTC datetime.
    ///
    /// Returns `None` when the epoch value is out of range.
    pub fn last_updated(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.timestamp, 0)
    }
}

/// Data payload of a portfolio detail response.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PortfolioDetailData {
    /// Pending transactions. The upstream service does not document this
    /// shape, so entries are kept as raw JSON values.
    pub pending_data: Vec<Value>,
    /// All current holdings, in the order the service returns them.
    pub holdings: Vec<Holding>,
    /// Unix timestamp when the data was generated.
    pub timestamp: i64,
    /// Total number of holdings.
    pub total_records: i64,
}

/// Response envelope from `GET /v2/users/portfolio/detail`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PortfolioDetailResponse {
    /// Application-level status code (usually mirrors the HTTP status).
    pub code: i64,
    /// Response message (usually `"Success"`).
    pub message: String,
    /// The portfolio detail payload.
    pub data: PortfolioDetailData,
}
