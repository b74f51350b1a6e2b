//! # Shared Data Transfer Objects Library
//!
//! This library defines the wire contract between the dashboard and the public
//! market-data API, plus display formatting shared by every screen.
//!
//! ## Structure
//!
//! - **[`dto`]**: Data Transfer Objects for API communication
//!   - **[`dto::market`]**: Coin market rows and display currencies
//! - **[`utils`]**: Shared utility functions
//!   - **[`utils::format_amount`]**: Thousands-grouped monetary formatting
//!   - **[`utils::format_change`]**: Signed percentage formatting
//!
//! ## Wire Format
//!
//! All DTOs deserialize from JSON using default `serde` behavior:
//! - Field names use **snake_case** in Rust, which matches the API's
//!   snake_case JSON keys directly (no rename attributes needed)
//! - Nullable JSON fields map to `Option<T>` and deserialize `null` to `None`
//!
//! ## Usage in the dashboard
//!
//! ```rust,no_run
//! use shared::dto::market::{Coin, Currency};
//! use shared::utils::format_amount;
//!
//! # async fn fetch() -> Result<(), reqwest::Error> {
//! let coins: Vec<Coin> = reqwest::Client::new()
//!     .get("https://api.coingecko.com/api/v3/coins/markets?vs_currency=usd")
//!     .send()
//!     .await?
//!     .json()
//!     .await?;
//!
//! let usd = Currency::usd();
//! let label = format!("{}{}", usd.symbol, format_amount(coins[0].current_price));
//! # Ok(())
//! # }
//! ```

pub mod dto;
pub mod utils;

// Re-export the most commonly used types at the crate root
pub use dto::market::{Coin, Currency};
