//! # Icons Helper Module
//!
//! Material Design icon codepoints and styling helpers used across the UI.

use egui::{Color32, RichText};

/// Icon size constants
pub mod size {
    pub const SMALL: f32 = 16.0;
    pub const MEDIUM: f32 = 24.0;
    pub const LARGE: f32 = 48.0;
}

/// Material Design Icons
pub mod material {
    /// Search icon
    pub const SEARCH: &str = "\u{e8b6}"; // search
    /// Trend up icon
    pub const TRENDING_UP: &str = "\u{e8e5}"; // trending_up
    /// Trend down icon
    pub const TRENDING_DOWN: &str = "\u{e8e3}"; // trending_down
    /// Refresh icon
    pub const REFRESH: &str = "\u{e5d5}"; // refresh
    /// Info icon
    pub const INFO: &str = "\u{e88e}"; // info
    /// Error icon
    pub const ERROR: &str = "\u{e000}"; // error
    /// Back arrow icon
    pub const ARROW_BACK: &str = "\u{e5c4}"; // arrow_back
    /// Open-in-browser icon
    pub const OPEN_IN_NEW: &str = "\u{e89e}"; // open_in_new
    /// Dark mode icon
    pub const DARK_MODE: &str = "\u{e51c}"; // brightness_4
    /// Light mode icon
    pub const LIGHT_MODE: &str = "\u{e518}"; // brightness_high
    /// Home icon
    pub const HOME: &str = "\u{e88a}"; // home
}

/// Icon helper functions for rendering icons with theme colors
pub struct Icons;

impl Icons {
    /// Render an icon with default styling
    pub fn icon(icon: &str, size: f32) -> RichText {
        RichText::new(icon).size(size)
    }

    /// Render an icon with a custom color
    pub fn icon_color(icon: &str, size: f32, color: Color32) -> RichText {
        RichText::new(icon).size(size).color(color)
    }
}
