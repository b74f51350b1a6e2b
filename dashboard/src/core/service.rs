//! # Service Traits
//!
//! The market-data source as a capability trait, so the orchestrator and its
//! tests never depend on a concrete HTTP client.

use async_trait::async_trait;
use shared::dto::market::{Coin, Currency};

/// Supplier of the coin market list.
///
/// Implemented by [`crate::services::api::ApiClient`] against the public
/// CoinGecko API; tests can substitute a canned implementation.
#[async_trait]
pub trait MarketDataService: Send + Sync {
    /// Fetch the market list denominated in `currency`, ordered by market
    /// cap descending.
    async fn coin_markets(&self, currency: &Currency) -> Result<Vec<Coin>, String>;
}
