//! # UI Widgets
//!
//! Reusable components shared by the screens.

pub mod icons;
pub mod nav_bar;
pub mod status_bar;
pub mod tables;
