//! # Market Data Endpoints
//!
//! Handles the coin market list query against CoinGecko.

use super::client::ApiClient;
use shared::dto::market::{Coin, Currency};

/// Coins requested per refresh. CoinGecko caps a single page at 250, which
/// covers the whole browsing surface without paging server-side.
const PER_PAGE: usize = 250;

/// Fetch the coin market list denominated in `currency`, ordered by market
/// cap descending.
#[tracing::instrument(skip(client), fields(currency = %currency.code))]
pub async fn coin_markets(
    client: &ApiClient,
    currency: &Currency,
) -> Result<Vec<Coin>, String> {
    let start = std::time::Instant::now();
    let url = format!(
        "{}/coins/markets?vs_currency={}&order=market_cap_desc&per_page={}&page=1&sparkline=false",
        ApiClient::base_url(),
        currency.code,
        PER_PAGE
    );

    tracing::debug!("Fetching coin markets");

    let mut request = client.client.get(&url);
    if let Some(key) = &client.api_key {
        request = request.header("x-cg-demo-api-key", key);
    }

    let response = request.send().await.map_err(|e| {
        tracing::error!(error = %e, "Coin markets network error");
        format!("Network error: {}", e)
    })?;

    let duration = start.elapsed();

    if response.status().is_success() {
        let result = response.json::<Vec<Coin>>().await.map_err(|e| {
            tracing::error!(error = %e, "Coin markets parse error");
            format!("Failed to parse response: {}", e)
        });

        if let Ok(ref coins) = result {
            tracing::debug!(
                duration_ms = duration.as_millis(),
                coin_count = coins.len(),
                "Coin markets fetched successfully"
            );
        }
        result
    } else {
        let status = response.status();
        tracing::warn!(
            status = status.as_u16(),
            duration_ms = duration.as_millis(),
            "Coin markets fetch failed"
        );
        Err(format!("Failed to fetch coin markets: {}", status))
    }
}
