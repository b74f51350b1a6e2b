//! # Services Module
//!
//! External service integrations for the market dashboard.
//!
//! ## Module Overview
//!
//! ```text
//! services/
//! └── api/         - CoinGecko HTTP API client
//!                    (coin market list per display currency)
//! ```
//!
//! ## Service Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │                 Dashboard UI                │
//! │                                             │
//! │  ┌──────────────────┐                       │
//! │  │  ApiClient       │                       │
//! │  │  (api/)          │                       │
//! │  └────────┬─────────┘                       │
//! └───────────┼─────────────────────────────────┘
//!             │ HTTPS/JSON
//!             ▼
//!      api.coingecko.com
//! ```
//!
//! All calls run on the shared Tokio runtime
//! ([`crate::utils::runtime::TOKIO_RT`]) and report back to the UI through
//! the app event channel, never by blocking the frame loop.

pub mod api;

pub use api::ApiClient;
