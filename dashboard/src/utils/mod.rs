//! # Utility Functions
//!
//! Shared utilities used across the dashboard application.
//!
//! ## Modules
//!
//! - **[`runtime`]**: Global Tokio runtime for async HTTP operations
//! - **[`logging`]**: File-based tracing initialization
//!
//! ## Related Modules
//!
//! - [`shared::utils`]: Cross-crate utilities (price and change formatting)
//! - [`crate::core`]: Core abstractions and error types

pub mod logging;
pub mod runtime;
