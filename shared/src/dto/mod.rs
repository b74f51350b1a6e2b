//! # Data Transfer Objects (DTOs)
//!
//! Data structures shared between the dashboard and the market-data API.
//!
//! ## Module Organization
//!
//! - [`market`] - Coin market rows and display currencies
//!
//! ## Serialization Format
//!
//! All DTOs use `serde_json`:
//!
//! - **Field naming**: snake_case (default serde behavior, matches the API)
//! - **Nullable fields**: `Option<T>`, omitted from output when `None`
//! - **All types**: Implement both `Serialize` and `Deserialize`
//!
//! ## Example market row
//!
//! ```text
//! GET /api/v3/coins/markets?vs_currency=usd
//!
//! [
//!   {
//!     "id": "bitcoin",
//!     "symbol": "btc",
//!     "name": "Bitcoin",
//!     "image": "https://assets.coingecko.com/coins/images/1/large/bitcoin.png",
//!     "current_price": 64250.0,
//!     "market_cap": 1264021148198,
//!     "market_cap_rank": 1,
//!     "price_change_percentage_24h": 3.1
//!   }
//! ]
//! ```

pub mod market;

pub use market::{Coin, Currency};
