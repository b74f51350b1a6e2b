//! # Event Handlers
//!
//! User action handlers organized by domain for better modularity and testability.

pub mod market;
pub mod navigation;
pub mod settings;
