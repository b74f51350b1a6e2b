//! # API Client
//!
//! Main HTTP client for CoinGecko API communication.

use crate::core::service::MarketDataService;
use reqwest::Client;
use shared::dto::market::{Coin, Currency};

/// Base URL for the public CoinGecko API
const API_BASE_URL: &str = "https://api.coingecko.com/api/v3";

/// Environment variable holding an optional CoinGecko demo API key.
/// Without a key the public rate limits apply, which is enough for a
/// single dashboard instance refreshing every ten seconds.
const API_KEY_ENV: &str = "COINGECKO_API_KEY";

/// HTTP client for communicating with the CoinGecko API.
///
/// This client maintains a connection pool for efficient HTTP/2
/// multiplexing across the periodic refresh cycle.
pub struct ApiClient {
    pub(crate) client: Client,
    pub(crate) api_key: Option<String>,
}

impl ApiClient {
    /// Create a new API client with default configuration.
    ///
    /// The client is configured with a 10 second timeout to prevent freezing.
    /// An API key is picked up from `COINGECKO_API_KEY` if set.
    pub fn new() -> Self {
        // Create client with 10 second timeout to prevent freezing
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(10))
            .build()
            .unwrap_or_else(|_| Client::new());

        let api_key = std::env::var(API_KEY_ENV).ok().filter(|k| !k.is_empty());
        if api_key.is_some() {
            tracing::info!("CoinGecko API key loaded from environment");
        }

        Self { client, api_key }
    }

    /// Get the base URL for API requests.
    pub(crate) fn base_url() -> &'static str {
        API_BASE_URL
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

// Implement MarketDataService trait for ApiClient
#[async_trait::async_trait]
impl MarketDataService for ApiClient {
    async fn coin_markets(&self, currency: &Currency) -> Result<Vec<Coin>, String> {
        crate::services::api::market::coin_markets(self, currency).await
    }
}
