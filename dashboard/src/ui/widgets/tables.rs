//! # Table Components
//!
//! Grid-backed table rendering shared by the data screens.

use egui;

use crate::ui::theme::Theme;

/// Render a striped data table with a colored header row.
///
/// The column count is taken from `headers`; the callback emits the body
/// rows and must `end_row()` after each one.
pub fn render_table<F>(ui: &mut egui::Ui, id: &str, headers: &[&str], theme: &Theme, render_rows: F)
where
    F: FnOnce(&mut egui::Ui),
{
    egui::Grid::new(id)
        .num_columns(headers.len())
        .spacing([14.0, 8.0])
        .striped(true)
        .show(ui, |ui| {
            for header in headers {
                ui.colored_label(theme.selected, *header);
            }
            ui.end_row();

            render_rows(ui);
        });
}

/// Render an empty state message
pub fn render_empty_state(
    ui: &mut egui::Ui,
    primary_text: &str,
    secondary_text: Option<&str>,
    theme: &Theme,
) {
    ui.vertical_centered(|ui| {
        ui.add_space(20.0);
        ui.colored_label(theme.dim, primary_text);
        if let Some(secondary) = secondary_text {
            ui.add_space(10.0);
            ui.colored_label(theme.dim, secondary);
        }
    });
}
