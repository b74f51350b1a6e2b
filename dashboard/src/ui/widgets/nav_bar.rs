//! # Navigation Bar
//!
//! Top bar with the brand, Home navigation, currency selector, and the
//! dark/light theme toggle.

use egui;
use shared::dto::market::Currency;

use crate::app::{App, AppState, Screen};
use crate::ui::theme::Theme;
use crate::ui::widgets::icons::{material, size, Icons};

/// Render the navigation bar
pub fn render_nav_bar(ui: &mut egui::Ui, state: &AppState, app: &mut App) {
    let theme = Theme::from_config(&state.settings.theme_config);

    ui.horizontal(|ui| {
        ui.set_height(36.0);

        // Brand
        ui.colored_label(
            theme.selected,
            egui::RichText::new("CryptoHub").size(20.0).strong(),
        );

        ui.add_space(16.0);

        let home_selected = state.current_screen == Screen::Home;
        if ui
            .selectable_label(home_selected, format!("{} Home", material::HOME))
            .clicked()
        {
            app.handle_screen_change(Screen::Home);
        }

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.add_space(4.0);

            // Theme toggle
            let toggle_icon = if state.settings.theme_config.dark {
                material::LIGHT_MODE
            } else {
                material::DARK_MODE
            };
            if ui
                .button(Icons::icon(toggle_icon, size::SMALL))
                .on_hover_text("Toggle dark / light mode")
                .clicked()
            {
                app.handle_theme_toggle();
            }

            ui.add_space(4.0);

            // Manual refresh
            if ui
                .button(Icons::icon(material::REFRESH, size::SMALL))
                .on_hover_text("Refresh market data")
                .clicked()
            {
                app.handle_refresh_click();
            }

            ui.add_space(8.0);

            // Currency selector
            let current = state.market.currency.clone();
            egui::ComboBox::from_id_salt("currency_selector")
                .selected_text(current.code.to_uppercase())
                .show_ui(ui, |ui| {
                    for currency in Currency::supported() {
                        let label = format!("{} {}", currency.code.to_uppercase(), currency.symbol);
                        if ui.selectable_label(currency == current, label).clicked() {
                            app.handle_currency_change(currency.clone());
                        }
                    }
                });
            ui.colored_label(theme.dim, "Currency:");
        });
    });
}
