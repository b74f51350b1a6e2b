//! # GUI Theme
//!
//! CryptoHub dark/light theme for egui. Dark mode is the default; the nav
//! bar toggle flips modes and the choice is persisted to the config file.

use egui::{Color32, Context, Stroke, Visuals};
use egui::Theme as EguiTheme;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Serializable theme configuration for persistence
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThemeConfig {
    /// Dark mode flag, the nav-bar toggle flips this
    pub dark: bool,
    /// Brand accent (buttons, headings, selection)
    pub accent: [u8; 3],
    /// Gains color
    pub green_up: [u8; 3],
    /// Losses color
    pub red_down: [u8; 3],
}

impl Default for ThemeConfig {
    fn default() -> Self {
        ThemeConfig {
            dark: true,
            accent: [99, 102, 241],
            green_up: [34, 197, 94],
            red_down: [239, 68, 68],
        }
    }
}

impl ThemeConfig {
    /// Load theme configuration from a JSON file
    pub fn load_from_file(path: &Path) -> crate::core::error::Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: ThemeConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Save theme configuration to a JSON file
    pub fn save_to_file(&self, path: &Path) -> crate::core::error::Result<()> {
        // Create parent directory if it doesn't exist
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

/// Resolved color palette for the active mode
pub struct Theme {
    /// Normal text color
    pub normal: Color32,
    /// Accent for headings, buttons, and selection
    pub selected: Color32,
    /// Border color
    pub border: Color32,
    /// Dimmed/secondary text
    pub dim: Color32,
    /// Success/positive
    pub success: Color32,
    /// Error/negative
    pub error: Color32,
    /// Warning/attention
    pub warning: Color32,
    /// Price up (includes a flat 0.00% day)
    pub price_up: Color32,
    /// Price down
    pub price_down: Color32,
    /// Background color
    pub background: Color32,
    /// Raised surface color (cards, suggestion overlay)
    pub surface: Color32,
}

impl Theme {
    /// Resolve the palette for the mode and accents in `config`.
    pub fn from_config(config: &ThemeConfig) -> Self {
        let accent = Color32::from_rgb(config.accent[0], config.accent[1], config.accent[2]);
        let price_up = Color32::from_rgb(config.green_up[0], config.green_up[1], config.green_up[2]);
        let price_down = Color32::from_rgb(config.red_down[0], config.red_down[1], config.red_down[2]);

        if config.dark {
            Theme {
                normal: Color32::from_rgb(235, 235, 245),
                selected: accent,
                border: Color32::from_rgb(55, 58, 75),
                dim: Color32::from_rgb(140, 145, 165),
                success: price_up,
                error: price_down,
                warning: Color32::from_rgb(250, 204, 21),
                price_up,
                price_down,
                background: Color32::from_rgb(17, 19, 28),
                surface: Color32::from_rgb(28, 31, 44),
            }
        } else {
            Theme {
                normal: Color32::from_rgb(30, 33, 45),
                selected: accent,
                border: Color32::from_rgb(210, 213, 225),
                dim: Color32::from_rgb(110, 115, 135),
                success: price_up,
                error: price_down,
                warning: Color32::from_rgb(180, 140, 10),
                price_up,
                price_down,
                background: Color32::from_rgb(247, 248, 252),
                surface: Color32::from_rgb(255, 255, 255),
            }
        }
    }

    /// Get color for a 24h price change percentage.
    ///
    /// A flat day is shown in the gain color: a coin that held its value is
    /// not presented as a loser.
    pub fn price_change_color(&self, change: f64) -> Color32 {
        if change >= 0.0 {
            self.price_up
        } else {
            self.price_down
        }
    }

    /// Format a 24h change with its color. `None` renders as a dim placeholder.
    pub fn format_price_change(&self, change: Option<f64>) -> (String, Color32) {
        let text = shared::utils::format_change(change);
        let color = match change {
            Some(value) => self.price_change_color(value),
            None => self.dim,
        };
        (text, color)
    }

    /// Build egui Visuals from a ThemeConfig
    pub fn visuals_from_config(config: &ThemeConfig) -> Visuals {
        let theme = Theme::from_config(config);
        let mut visuals = if config.dark { Visuals::dark() } else { Visuals::light() };

        visuals.override_text_color = Some(theme.normal);

        visuals.panel_fill = theme.background;
        visuals.window_fill = theme.surface;
        visuals.window_stroke = Stroke::new(1.0, theme.border);
        visuals.faint_bg_color = theme.surface;
        visuals.extreme_bg_color = theme.surface;

        visuals.widgets.noninteractive.bg_stroke = Stroke::new(1.0, theme.border);
        visuals.widgets.inactive.bg_stroke = Stroke::new(1.0, theme.border);
        visuals.widgets.hovered.bg_stroke = Stroke::new(1.5, theme.selected);
        visuals.widgets.active.bg_stroke = Stroke::new(1.5, theme.selected);

        visuals.selection.bg_fill = theme.selected.linear_multiply(0.35);
        visuals.selection.stroke = Stroke::new(1.5, theme.selected);

        visuals.hyperlink_color = theme.selected;
        visuals.slider_trailing_fill = true;

        visuals
    }

    /// Apply the theme to an egui context.
    ///
    /// Uses `style_mut_of` rather than `set_visuals`, which is the safe way
    /// to modify styles in egui 0.33.
    pub fn apply_custom_theme(ctx: &Context, config: &ThemeConfig) {
        let visuals = Self::visuals_from_config(config);
        let egui_theme = if config.dark { EguiTheme::Dark } else { EguiTheme::Light };

        ctx.set_theme(egui_theme);
        ctx.style_mut_of(egui_theme, |style| {
            style.visuals = visuals;
            style.spacing.item_spacing = egui::Vec2::new(6.0, 4.0);
            style.spacing.button_padding = egui::Vec2::new(10.0, 5.0);
            style.spacing.interact_size = egui::Vec2::new(32.0, 28.0);
        });
    }
}

impl Default for Theme {
    fn default() -> Self {
        Theme::from_config(&ThemeConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_change_styles_as_gain() {
        let theme = Theme::default();
        assert_eq!(theme.price_change_color(0.0), theme.price_up);
        assert_eq!(theme.price_change_color(2.5), theme.price_up);
        assert_eq!(theme.price_change_color(-0.01), theme.price_down);
    }

    #[test]
    fn test_format_price_change_handles_missing_data() {
        let theme = Theme::default();

        let (text, color) = theme.format_price_change(Some(0.0));
        assert_eq!(text, "+0.00%");
        assert_eq!(color, theme.price_up);

        let (text, color) = theme.format_price_change(None);
        assert_eq!(text, "–");
        assert_eq!(color, theme.dim);
    }

    #[test]
    fn test_config_round_trips_through_file() {
        let dir = std::env::temp_dir().join("cryptohub-theme-test");
        let path = dir.join("config.json");
        let _ = std::fs::remove_file(&path);

        let mut config = ThemeConfig::default();
        config.dark = false;
        config.save_to_file(&path).expect("save config");

        let loaded = ThemeConfig::load_from_file(&path).expect("load config");
        assert!(!loaded.dark);
        assert_eq!(loaded.accent, config.accent);

        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_missing_config_file_yields_defaults() {
        let path = std::path::Path::new("./definitely-not-here/cryptohub.json");
        let config = ThemeConfig::load_from_file(path).expect("defaults");
        assert!(config.dark);
    }
}
