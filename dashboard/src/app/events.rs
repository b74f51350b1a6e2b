//! # Application Events
//!
//! Event types for async task communication between background tasks and the main thread.

use shared::dto::market::{Coin, Currency};

/// Async task results sent to main thread
#[derive(Debug, Clone)]
pub enum AppEvent {
    /// A coin markets fetch cycle completed. Carries the currency the fetch
    /// was issued for so responses for an abandoned currency can be dropped.
    MarketsResult {
        currency: Currency,
        result: Result<Vec<Coin>, String>,
    },
}
