//! Unit-level tests for configuration, derived metrics, and error text.

use std::time::Duration;

use stockal_rs::constants::{API_BASE_URL, DEFAULT_TIMEOUT, DEFAULT_USER_AGENT};
use stockal_rs::types::account::PortfolioSummary;
use stockal_rs::types::auth::LoginData;
use stockal_rs::types::portfolio::Holding;
use stockal_rs::{ApiErrorBody, ClientConfig, StockalClient, StockalError};

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

#[test]
fn config_defaults() {
    let config = ClientConfig::new();
    assert_eq!(config.base_url, API_BASE_URL);
    assert_eq!(config.timeout, DEFAULT_TIMEOUT);
    assert_eq!(config.user_agent, DEFAULT_USER_AGENT);
}

#[test]
fn config_overrides_compose_left_to_right() {
    let config = ClientConfig::new()
        .with_timeout(Duration::from_secs(60))
        .with_user_agent("my-app/1.0")
        .with_timeout(Duration::from_secs(10));
    // later override wins
    assert_eq!(config.timeout, Duration::from_secs(10));
    assert_eq!(config.user_agent, "my-app/1.0");
    assert_eq!(config.base_url, API_BASE_URL);
}

#[test]
fn zero_timeout_rejected_at_construction() {
    let config = ClientConfig::new().with_timeout(Duration::ZERO);
    let err = StockalClient::with_config(config).unwrap_err();
    assert!(matches!(err, StockalError::InvalidArgument(_)), "got {err:?}");
}

#[test]
fn invalid_base_url_rejected_at_construction() {
    let config = ClientConfig::new().with_base_url("not a url");
    let err = StockalClient::with_config(config).unwrap_err();
    assert!(matches!(err, StockalError::Url(_)), "got {err:?}");
}

#[test]
fn base_url_trailing_slash_is_trimmed() {
    let config = ClientConfig::new().with_base_url("https://example.com/");
    let client = StockalClient::with_config(config).expect("client should build");
    assert_eq!(client.base_url(), "https://example.com");
}

// ---------------------------------------------------------------------------
// Derived holding metrics
// ---------------------------------------------------------------------------

fn sample_holding() -> Holding {
    Holding {
        total_unit: 17.0,
        price: 211.51,
        total_investment: 2401.60,
        ..Holding::default()
    }
}

#[test]
fn holding_derived_metrics() {
    let holding = sample_holding();
    assert!((holding.current_value() - 3595.67).abs() < 0.01);
    assert!((holding.gain_loss() - 1194.07).abs() < 0.01);
    let percent = holding.gain_loss_percent().expect("invested amount is non-zero");
    assert!((percent - 49.72).abs() < 0.01);
}

#[test]
fn gain_loss_percent_undefined_for_zero_investment() {
    let holding = Holding {
        total_unit: 2.0,
        price: 10.0,
        total_investment: 0.0,
        ..Holding::default()
    };
    assert_eq!(holding.gain_loss_percent(), None);
}

#[test]
fn portfolio_summary_total_gain_loss() {
    let summary: PortfolioSummary = serde_json::from_str(
        r#"{
            "stockPortfolio": {"currentValue": 3595.67, "investmentAmount": 2401.60},
            "etfPortfolio": {"currentValue": 500.0, "investmentAmount": 450.0},
            "totalCurrentValue": 4095.67,
            "totalInvestmentAmount": 2851.60
        }"#,
    )
    .expect("summary should decode");
    assert!((summary.total_gain_loss() - 1244.07).abs() < 0.01);
    assert!((summary.stock_portfolio.gain_loss() - 1194.07).abs() < 0.01);
    // absent category decodes to its zero value
    assert_eq!(summary.stack_portfolio.current_value, 0.0);
}

// ---------------------------------------------------------------------------
// Token expiry accessors
// ---------------------------------------------------------------------------

#[test]
fn login_expiry_parses_rfc3339() {
    let data = LoginData {
        expiry_access_token: "2025-01-01T00:00:00Z".to_owned(),
        expiry_refresh_token: "not-a-date".to_owned(),
        ..LoginData::default()
    };
    let expiry = data.access_token_expiry().expect("valid RFC 3339");
    assert_eq!(expiry.to_rfc3339(), "2025-01-01T00:00:00+00:00");
    // unparseable expiry is surfaced as None, never an error
    assert_eq!(data.refresh_token_expiry(), None);
}

// ---------------------------------------------------------------------------
// Error text
// ---------------------------------------------------------------------------

#[test]
fn api_error_display_includes_error_string() {
    let body: ApiErrorBody =
        serde_json::from_str(r#"{"code": 401, "message": "fail", "error": "invalid"}"#)
            .expect("error body should decode");
    assert_eq!(
        StockalError::Api(body).to_string(),
        "API error 401: fail - invalid"
    );

    let body: ApiErrorBody = serde_json::from_str(r#"{"code": 500, "message": "server error"}"#)
        .expect("error body should decode");
    assert_eq!(
        StockalError::Api(body).to_string(),
        "API error 500: server error"
    );
}
