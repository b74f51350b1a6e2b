//! # Event Handler
//!
//! Handles async event results from background tasks, updating application state accordingly.
//!
//! This module processes `AppEvent` messages received from async fetch tasks
//! and updates the application state in a thread-safe manner.

use shared::dto::market::{Coin, Currency};

use crate::app::state::MarketState;
use crate::app::{App, AppEvent};
use crate::core::AppError;

/// Trait for event handling implementation
pub(crate) trait AppEventHandler {
    fn handle_event_impl(&mut self, event: AppEvent);
}

impl AppEventHandler for App {
    /// Handle async event results
    ///
    /// CRITICAL: Acquires write lock per-event for minimal duration to prevent UI freezing
    fn handle_event_impl(&mut self, event: AppEvent) {
        match event {
            AppEvent::MarketsResult { currency, result } => {
                self.handle_markets_result(currency, result);
            }
        }
    }
}

impl App {
    fn handle_markets_result(&mut self, currency: Currency, result: Result<Vec<Coin>, String>) {
        let mut state = self.state.write();

        // A currency switch may have happened while the request was in
        // flight. The response is denominated in the old currency, so it
        // must not land in the table.
        if currency != state.market.currency {
            tracing::debug!(
                response_currency = %currency.code,
                active_currency = %state.market.currency.code,
                "Dropping stale markets response"
            );
            return;
        }

        match result {
            Ok(coins) => {
                tracing::info!(
                    coin_count = coins.len(),
                    currency = %currency.code,
                    "Processing markets result"
                );
                state.market.all_coins = coins;
                state.market.source_loaded = true;
                state.market.last_error = None;

                // Re-derive the display list; an active filter survives
                let MarketState { all_coins, list, .. } = &mut state.market;
                list.set_source(all_coins);
            }
            Err(e) => {
                let err = AppError::from(e);
                tracing::warn!(error = %err, "Markets fetch failed, keeping last known data");
                state.market.last_error = Some(err.to_string());
                state
                    .pending_notifications
                    .push(("error".to_string(), format!("Market data refresh failed: {}", err)));
            }
        }
    }
}
