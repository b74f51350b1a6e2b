//! # Home Screen
//!
//! Hero search with a live suggestion overlay, a top-movers strip, and the
//! incrementally revealed market table.
//!
//! The screen is a thin rendering layer: every interaction is forwarded to
//! an [`App`] handler, and what the table shows next frame is decided by
//! [`crate::market::MarketList`].

use egui;
use shared::dto::market::Coin;

use crate::app::{App, AppState};
use crate::market::ListStatus;
use crate::ui::theme::Theme;
use crate::ui::widgets::icons::{material, size, Icons};
use crate::ui::widgets::tables;

/// Coins shown in the top-movers strip
const MOVERS_COUNT: usize = 10;

/// Render the home screen
pub fn render(ui: &mut egui::Ui, state: &AppState, app: &mut App) {
    let theme = Theme::from_config(&state.settings.theme_config);

    egui::ScrollArea::vertical()
        .id_salt("home_scroll")
        .auto_shrink([false, false])
        .show(ui, |ui| {
            render_hero(ui, state, app, &theme);

            ui.add_space(16.0);
            render_movers_strip(ui, state, app, &theme);

            ui.add_space(24.0);
            render_market_overview(ui, state, app, &theme);
        });
}

/// Hero block: title, search box, and the suggestion overlay.
fn render_hero(ui: &mut egui::Ui, state: &AppState, app: &mut App, theme: &Theme) {
    ui.add_space(24.0);
    ui.vertical_centered(|ui| {
        ui.colored_label(
            theme.selected,
            egui::RichText::new("Track Crypto Markets in Real Time").size(28.0).strong(),
        );
        ui.colored_label(theme.dim, "Prices, market caps and 24h moves for the top 250 coins");
        ui.add_space(12.0);

        ui.horizontal(|ui| {
            // Center the search row
            let search_width = 380.0;
            let pad = ((ui.available_width() - search_width - 90.0) / 2.0).max(0.0);
            ui.add_space(pad);

            ui.label(Icons::icon_color(material::SEARCH, size::SMALL, theme.dim));

            let mut input = state.market.search_input.clone();
            let response = ui.add(
                egui::TextEdit::singleline(&mut input)
                    .hint_text("Search by name or symbol...")
                    .desired_width(search_width),
            );
            if response.changed() {
                app.handle_search_input(input.clone());
            }

            let submitted =
                response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
            if ui.button("Search").clicked() || submitted {
                app.handle_search_submit();
            }
        });

        // Suggestion overlay, directly under the search row
        if let Some(suggestions) = state.market.list.suggestions() {
            let suggestions = suggestions.to_vec();
            render_suggestions(ui, app, theme, &suggestions);
        }
    });
}

/// The suggestion dropdown: up to eight matches plus a "view all" footer
/// that commits the query.
fn render_suggestions(ui: &mut egui::Ui, app: &mut App, theme: &Theme, suggestions: &[Coin]) {
    egui::Frame::default()
        .fill(theme.surface)
        .stroke(egui::Stroke::new(1.0, theme.border))
        .corner_radius(4)
        .inner_margin(6)
        .show(ui, |ui| {
            ui.set_width(420.0);

            for coin in suggestions {
                let label = format!("{} ({})", coin.name, coin.symbol.to_uppercase());
                ui.horizontal(|ui| {
                    ui.add(
                        egui::Image::new(coin.image.as_str())
                            .fit_to_exact_size(egui::vec2(18.0, 18.0)),
                    );
                    if ui.selectable_label(false, label).clicked() {
                        app.handle_suggestion_select(coin.clone());
                    }
                });
            }

            ui.separator();
            if ui.link("View all in Market Overview →").clicked() {
                app.handle_search_submit();
            }
        });
}

/// Horizontal strip of the day's leading coins by market cap.
fn render_movers_strip(ui: &mut egui::Ui, state: &AppState, app: &mut App, theme: &Theme) {
    if state.market.all_coins.is_empty() {
        return;
    }

    egui::ScrollArea::horizontal()
        .id_salt("movers_strip")
        .show(ui, |ui| {
            ui.horizontal(|ui| {
                for coin in state.market.all_coins.iter().take(MOVERS_COUNT) {
                    render_mover_card(ui, state, app, theme, coin);
                }
            });
        });
}

fn render_mover_card(
    ui: &mut egui::Ui,
    state: &AppState,
    app: &mut App,
    theme: &Theme,
    coin: &Coin,
) {
    let response = egui::Frame::default()
        .fill(theme.surface)
        .stroke(egui::Stroke::new(1.0, theme.border))
        .corner_radius(6)
        .inner_margin(8)
        .show(ui, |ui| {
            ui.set_width(130.0);
            ui.horizontal(|ui| {
                ui.add(
                    egui::Image::new(coin.image.as_str())
                        .fit_to_exact_size(egui::vec2(20.0, 20.0)),
                );
                ui.strong(coin.symbol.to_uppercase());
            });
            ui.label(format!(
                "{}{}",
                state.market.currency.symbol,
                shared::utils::format_amount(coin.current_price)
            ));
            let (change_text, change_color) =
                theme.format_price_change(coin.price_change_percentage_24h);
            ui.colored_label(change_color, change_text);
        })
        .response;

    if response.interact(egui::Sense::click()).clicked() {
        app.handle_suggestion_select(coin.clone());
    }
}

/// The main coin table with its heading, pagination sentinel, and footer.
fn render_market_overview(ui: &mut egui::Ui, state: &AppState, app: &mut App, theme: &Theme) {
    let heading = ui.heading("Market Overview");

    // One-shot scroll request set by a committed search
    if state.market.scroll_to_results {
        heading.scroll_to_me(Some(egui::Align::Min));
        app.state.write().market.scroll_to_results = false;
    }

    ui.separator();
    ui.add_space(6.0);

    match state.market.list.status(state.market.source_loaded) {
        ListStatus::Loading => {
            ui.vertical_centered(|ui| {
                ui.add_space(40.0);
                ui.spinner();
                ui.colored_label(theme.dim, "Loading market data...");
            });
        }
        ListStatus::NoMatches => {
            tables::render_empty_state(
                ui,
                "No coins match your search",
                Some("Try a different name, or clear the search box"),
                theme,
            );
        }
        ListStatus::Rows => {
            render_coin_table(ui, state, app, theme);
        }
    }
}

fn render_coin_table(ui: &mut egui::Ui, state: &AppState, app: &mut App, theme: &Theme) {
    let rows = state.market.list.visible_rows().to_vec();
    let currency_symbol = state.market.currency.symbol.clone();

    tables::render_table(
        ui,
        "market_table",
        &["#", "Coin", "Price", "24h %", "Market Cap"],
        theme,
        |ui| {
            for (idx, coin) in rows.iter().enumerate() {
                // Rank
                match coin.market_cap_rank {
                    Some(rank) => ui.colored_label(theme.dim, rank.to_string()),
                    None => ui.colored_label(theme.dim, (idx + 1).to_string()),
                };

                // Coin: icon, name, symbol; clicking opens the detail screen
                ui.horizontal(|ui| {
                    ui.add(
                        egui::Image::new(coin.image.as_str())
                            .fit_to_exact_size(egui::vec2(20.0, 20.0)),
                    );
                    if ui.link(&coin.name).clicked() {
                        app.handle_suggestion_select(coin.clone());
                    }
                    ui.colored_label(theme.dim, coin.symbol.to_uppercase());
                });

                // Price
                ui.label(format!(
                    "{}{}",
                    currency_symbol,
                    shared::utils::format_amount(coin.current_price)
                ));

                // 24h change with trend icon
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

                // Market cap
                ui.label(format!(
                    "{}{}",
                    currency_symbol,
                    shared::utils::format_amount(coin.market_cap)
                ));

                ui.end_row();
            }
        },
    );

    ui.add_space(8.0);

    if state.market.list.has_more() {
        // End-of-list sentinel: becoming visible is the auto-pagination
        // trigger. The list itself decides whether the current mode allows it.
        let (sentinel_rect, _) =
            ui.allocate_exact_size(egui::vec2(ui.available_width(), 1.0), egui::Sense::hover());
        if ui.is_rect_visible(sentinel_rect) {
            app.handle_sentinel_visible();
        }

        ui.vertical_centered(|ui| {
            if ui.button("Load More").clicked() {
                app.handle_load_more();
            }
        });
    }

    ui.add_space(8.0);
    ui.colored_label(
        theme.dim,
        format!(
            "Showing {} of {} coins",
            state.market.list.visible_count().min(state.market.list.committed_len()),
            state.market.list.committed_len()
        ),
    );
}
