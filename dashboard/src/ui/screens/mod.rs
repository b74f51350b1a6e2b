//! # Screen Renderers
//!
//! One module per screen. Each renderer draws from a cloned state snapshot
//! and reports user actions through the [`crate::app::App`] handler methods.

pub mod coin_detail;
pub mod home;
