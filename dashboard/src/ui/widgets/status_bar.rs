//! # Status Bar
//!
//! Bottom strip showing data freshness, fetch errors, and the active currency.

use egui;

use crate::app::AppState;
use crate::ui::theme::Theme;
use crate::ui::widgets::icons::{material, size, Icons};

/// Longest error preview shown in the bar, in characters.
const ERROR_PREVIEW_CHARS: usize = 48;

/// Render status bar at the bottom
pub fn render_status_bar(ui: &mut egui::Ui, state: &AppState) {
    let theme = Theme::from_config(&state.settings.theme_config);

    ui.horizontal(|ui| {
        // Data freshness (first)
        if state.market.fetching {
            ui.label(Icons::icon_color(material::REFRESH, size::SMALL, theme.warning));
            ui.colored_label(theme.warning, "Refreshing...");
        } else if state.market.source_loaded {
            ui.label(Icons::icon_color(material::INFO, size::SMALL, theme.success));
            ui.colored_label(
                theme.success,
                format!("Live: {} coins", state.market.all_coins.len()),
            );
        } else {
            ui.label(Icons::icon_color(material::INFO, size::SMALL, theme.dim));
            ui.colored_label(theme.dim, "Waiting for market data");
        }

        ui.separator();

        // Last fetch error, truncated to keep the bar on one line
        if let Some(err) = &state.market.last_error {
            ui.label(Icons::icon_color(material::ERROR, size::SMALL, theme.error));
            ui.colored_label(theme.error, error_preview(err));
        } else {
            ui.colored_label(theme.dim, "No errors");
        }

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.colored_label(theme.dim, chrono::Local::now().format("%H:%M:%S").to_string());
            ui.separator();
            ui.colored_label(theme.dim, state.market.currency.code.to_uppercase());
            ui.colored_label(theme.dim, "Display currency:");
            ui.separator();
            let age = state.market.last_refresh.elapsed().as_secs();
            ui.colored_label(theme.dim, format!("Updated {}s ago", age));
        });
    });
}

/// Truncate an error message on a character boundary.
///
/// Error strings can carry localized OS messages with multi-byte characters,
/// so byte-index slicing is not safe here.
fn error_preview(err: &str) -> String {
    let mut chars = err.chars();
    let preview: String = chars.by_ref().take(ERROR_PREVIEW_CHARS).collect();
    if chars.next().is_some() {
        format!("{}...", preview)
    } else {
        preview
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_preview_passes_short_messages_through() {
        assert_eq!(error_preview("HTTP 429"), "HTTP 429");
    }

    #[test]
    fn test_error_preview_truncates_long_messages() {
        let long = "x".repeat(100);
        let preview = error_preview(&long);
        assert_eq!(preview, format!("{}...", "x".repeat(48)));
    }

    #[test]
    fn test_error_preview_handles_multibyte_characters() {
        // 47 ASCII chars followed by a two-byte char straddling byte 48
        let msg = format!("{}é and some localized tail text", "x".repeat(47));
        let preview = error_preview(&msg);
        assert!(preview.starts_with(&"x".repeat(47)));
        assert!(preview.ends_with("..."));
        assert_eq!(preview.chars().count(), 48 + 3);
    }

    #[test]
    fn test_error_preview_exact_length_is_not_suffixed() {
        let msg = "y".repeat(48);
        assert_eq!(error_preview(&msg), msg);
    }
}
