//! # Core Abstractions
//!
//! Foundational traits and error types used throughout the dashboard:
//!
//! - **[`error`]**: Application error types (`AppError`, `Result<T>`)
//! - **[`service`]**: The market-data source trait ([`MarketDataService`]),
//!   so the app orchestrator depends on a capability rather than a concrete
//!   HTTP client
//!
//! ## Dependency Injection
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use dashboard::core::service::MarketDataService;
//!
//! // In production: the CoinGecko-backed client
//! let source: Arc<dyn MarketDataService> =
//!     Arc::new(dashboard::services::api::ApiClient::new());
//! ```

pub mod error;
pub mod service;

pub use error::{AppError, Result};
pub use service::MarketDataService;
