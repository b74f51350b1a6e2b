//! # Coin Detail Screen
//!
//! Detail view for one selected coin, with a link out to its CoinGecko page.

use egui;

use crate::app::{App, AppState, Screen};
use crate::ui::theme::Theme;
use crate::ui::widgets::icons::{material, size, Icons};
use crate::ui::widgets::tables;

/// Render the coin detail screen
pub fn render(ui: &mut egui::Ui, state: &AppState, app: &mut App) {
    let theme = Theme::from_config(&state.settings.theme_config);

    if ui
        .button(format!("{} Back to markets", material::ARROW_BACK))
        .clicked()
    {
        app.handle_screen_change(Screen::Home);
        return;
    }

    let Some(coin) = &state.selected_coin else {
        tables::render_empty_state(ui, "No coin selected", None, &theme);
        return;
    };

    ui.add_space(16.0);

    ui.horizontal(|ui| {
        ui.add(egui::Image::new(coin.image.as_str()).fit_to_exact_size(egui::vec2(48.0, 48.0)));
        ui.vertical(|ui| {
            ui.colored_label(
                theme.selected,
                egui::RichText::new(&coin.name).size(24.0).strong(),
            );
            ui.colored_label(theme.dim, coin.symbol.to_uppercase());
        });
        if let Some(rank) = coin.market_cap_rank {
            ui.add_space(8.0);
            ui.colored_label(theme.dim, format!("Rank #{}", rank));
        }
    });

    ui.add_space(12.0);
    ui.separator();
    ui.add_space(12.0);

    let currency_symbol = &state.market.currency.symbol;

    egui::Grid::new("coin_detail_grid")
        .num_columns(2)
        .spacing([24.0, 10.0])
        .show(ui, |ui| {
            ui.colored_label(theme.dim, "Current price");
            ui.label(
                egui::RichText::new(format!(
                    "{}{}",
                    currency_symbol,
                    shared::utils::format_amount(coin.current_price)
                ))
                .size(18.0),
            );
            ui.end_row();

            ui.colored_label(theme.dim, "24h change");
            let (change_text, change_color) =
                theme.format_price_change(coin.price_change_percentage_24h);
            ui.horizontal(|ui| {
                if coin.price_change_percentage_24h.is_some() {
                    let trend = if change_color == theme.price_up {
                        material::TRENDING_UP
                    } else {
                        material::TRENDING_DOWN
                    };
                    ui.label(Icons::icon_color(trend, size::SMALL, change_color));
                }
                ui.colored_label(change_color, change_text);
            });
            ui.end_row();

            ui.colored_label(theme.dim, "Market cap");
            ui.label(format!(
                "{}{}",
                currency_symbol,
                shared::utils::format_amount(coin.market_cap)
            ));
            ui.end_row();
        });

    ui.add_space(16.0);

    if ui
        .button(format!("{} Open on CoinGecko", material::OPEN_IN_NEW))
        .clicked()
    {
        let url = format!("https://www.coingecko.com/en/coins/{}", coin.id);
        if let Err(e) = open::that(&url) {
            tracing::warn!(url = %url, error = %e, "Failed to open browser");
        }
    }
}
