//! # Market Data Tasks
//!
//! Async tasks for fetching the coin market list.

use std::sync::Arc;

use async_channel::Sender;
use parking_lot::RwLock;

use crate::app::events::AppEvent;
use crate::app::state::AppState;
use crate::core::service::MarketDataService;
use crate::utils::runtime::TOKIO_RT;

/// Fetch the coin market list from the CoinGecko API
///
/// Internal task function - spawns async task to fetch coins and send results
/// via the event channel. The response carries the currency it was issued
/// for, so the event handler can drop it if the user switched currency in
/// the meantime.
pub(crate) fn fetch_coin_markets(state: Arc<RwLock<AppState>>, event_tx: Sender<AppEvent>) {
    // Check if already fetching and grab the client with minimal lock duration
    let (api_client, currency) = {
        let mut state = state.write();

        // Skip if already fetching (prevents task pileup)
        if state.market.fetching {
            return;
        }

        let Some(api_client) = state.api_client.clone() else {
            return;
        };

        state.market.fetching = true;
        state.market.last_refresh = std::time::Instant::now();
        (api_client, state.market.currency.clone())
    }; // Lock released here

    let state_arc = Arc::clone(&state);

    TOKIO_RT.spawn(async move {
        let result = api_client.coin_markets(&currency).await;

        // Always reset fetching flag when done
        // CRITICAL: Release lock immediately to prevent deadlock with main thread
        {
            let mut state = state_arc.write();
            state.market.fetching = false;
        }

        match &result {
            Ok(coins) => {
                tracing::info!(
                    coin_count = coins.len(),
                    currency = %currency.code,
                    "Fetched coin markets - sending to event channel"
                );
            }
            Err(e) => {
                tracing::error!(
                    error = %e,
                    currency = %currency.code,
                    "Failed to fetch coin markets - will retry on next refresh tick"
                );
            }
        }

        let _ = event_tx.send(AppEvent::MarketsResult { currency, result }).await;
    });
}
