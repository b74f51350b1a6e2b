//! # CoinGecko API Client Module
//!
//! HTTP client for the public CoinGecko REST API.
//!
//! ## Module Structure
//!
//! ```text
//! api/
//! ├── mod.rs      - Module exports and documentation
//! ├── client.rs   - ApiClient struct and common configuration
//! └── market.rs   - Market data endpoints (coin market list)
//! ```

pub mod client;
pub mod market;

pub use client::ApiClient;
