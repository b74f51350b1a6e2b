//! # GUI Rendering Framework
//!
//! This module orchestrates the complete UI rendering pipeline using **egui widgets**:
//! the eframe application wrapper, the per-frame render function, screens,
//! widgets, and the theme.

pub mod screens;
pub mod theme;
pub mod widgets;

use egui;

use crate::app::{App, Screen};

/// eframe wrapper around the [`App`] orchestrator.
///
/// Owns the toast stack and drives the frame loop: process async events,
/// render from a state snapshot, then show notifications.
pub struct DashboardApp {
    app: App,
    toasts: egui_notify::Toasts,
}

impl DashboardApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        // Coin icons arrive as HTTP image URIs
        egui_extras::install_image_loaders(&cc.egui_ctx);
        egui_material_icons::initialize(&cc.egui_ctx);

        let app = App::new();

        let config = app.state.read().settings.theme_config.clone();
        theme::Theme::apply_custom_theme(&cc.egui_ctx, &config);

        DashboardApp {
            app,
            toasts: egui_notify::Toasts::default(),
        }
    }
}

impl eframe::App for DashboardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Process async events and trigger the periodic refresh
        self.app.on_tick();

        // Drain queued notifications into toasts
        let notifications = {
            let mut state = self.app.state.write();
            std::mem::take(&mut state.pending_notifications)
        };
        for (level, message) in notifications {
            match level.as_str() {
                "error" => self.toasts.error(message),
                "success" => self.toasts.success(message),
                _ => self.toasts.info(message),
            };
        }

        render(ctx, &mut self.app);

        self.toasts.show(ctx);

        // Keep ticking while idle so refreshes and toasts stay live
        ctx.request_repaint_after(std::time::Duration::from_millis(500));
    }
}

/// Main render function - called every frame
pub fn render(ctx: &egui::Context, app: &mut App) {
    // Read state for rendering
    let state = {
        match app.state.try_read() {
            Some(state_guard) => state_guard.clone(),
            None => {
                // Lock is held by another task, skip this frame
                return;
            }
        }
    }; // Lock released here - rendering happens without holding the lock

    theme::Theme::apply_custom_theme(ctx, &state.settings.theme_config);

    egui::TopBottomPanel::top("nav_bar").show(ctx, |ui| {
        widgets::nav_bar::render_nav_bar(ui, &state, app);
    });

    egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
        widgets::status_bar::render_status_bar(ui, &state);
    });

    egui::CentralPanel::default().show(ctx, |ui| {
        match state.current_screen {
            Screen::Home => screens::home::render(ui, &state, app),
            Screen::CoinDetail => screens::coin_detail::render(ui, &state, app),
        }
    });
}
