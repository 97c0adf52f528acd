//! Integration test against the live Stockal API.
//!
//! # Running
//!
//! Requires real Stockal credentials. Set the following environment
//! variables before running:
//!
//! ```sh
//! export STOCKAL_USERNAME="your-username"
//! export STOCKAL_PASSWORD="your-password"
//! cargo test --test live -- --nocapture
//! ```
//!
//! Without these env vars, the test is silently skipped.

use stockal_rs::StockalClient;

/// Helper: read credentials from the environment or skip the test.
fn credentials() -> Option<(String, String)> {
    let username = std::env::var("STOCKAL_USERNAME").ok()?;
    let password = std::env::var("STOCKAL_PASSWORD").ok()?;
    if username.is_empty() || password.is_empty() {
        return None;
    }
    Some((username, password))
}

macro_rules! require_credentials {
    () => {
        match credentials() {
            Some(c) => c,
            None => {
                eprintln!("⏭  Skipped (STOCKAL_USERNAME / STOCKAL_PASSWORD not set)");
                return;
            }
        }
    };
}

#[tokio::test]
async fn test_full_session() {
    let (username, password) = require_credentials!();
    let mut client = StockalClient::new().expect("client should build");

    let login = client.login(&username, &password).await.expect("login failed");
    assert!(client.is_authenticated(), "login should store a token");
    println!(
        "✔ Login: code={}, token expires {}",
        login.code, login.data.expiry_access_token
    );

    let summary = client
        .get_account_summary()
        .await
        .expect("get_account_summary failed");
    println!(
        "✔ Account: cash for trade={:.2}, portfolio value={:.2}, gain/loss={:.2}",
        summary.data.account_summary.cash_available_for_trade,
        summary.data.portfolio_summary.total_current_value,
        summary.data.portfolio_summary.total_gain_loss(),
    );

    let portfolio = client
        .get_portfolio_detail()
        .await
        .expect("get_portfolio_detail failed");
    println!(
        "✔ Portfolio: {} holdings, {} pending",
        portfolio.data.total_records,
        portfolio.data.pending_data.len()
    );
    for holding in portfolio.data.holdings.iter().take(5) {
        println!(
            "  {} ({}): {:.4} @ {:.2} = {:.2}{}",
            holding.company,
            holding.symbol,
            holding.total_unit,
            holding.price,
            holding.current_value(),
            if holding.sell_only { " [sell only]" } else { "" },
        );
    }
}
