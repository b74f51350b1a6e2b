//! # Settings Handlers
//!
//! Handlers for settings-related actions including theme customization and persistence.

use std::sync::Arc;

use parking_lot::RwLock;

use crate::app::state::AppState;
use crate::ui::theme::ThemeConfig;

/// Get default config file path
pub fn get_config_path() -> std::path::PathBuf {
    std::path::PathBuf::from("./cryptohub-config.json")
}

/// Load settings from file
pub fn load_settings() -> ThemeConfig {
    let path = get_config_path();
    match ThemeConfig::load_from_file(&path) {
        Ok(config) => {
            tracing::info!("Loaded theme configuration from {:?}", path);
            config
        }
        Err(e) => {
            tracing::warn!("Failed to load theme config from {:?}: {}. Using defaults.", path, e);
            ThemeConfig::default()
        }
    }
}

/// Save settings to file
pub fn save_settings(config: &ThemeConfig) -> crate::core::error::Result<()> {
    let path = get_config_path();
    config.save_to_file(&path)?;
    tracing::info!("Saved theme configuration to {:?}", path);
    Ok(())
}

/// Toggle between dark and light mode, persisting the choice immediately so
/// it survives restarts.
pub fn handle_theme_toggle(state: Arc<RwLock<AppState>>) {
    let config = {
        let mut app_state = state.write();
        app_state.settings.theme_config.dark = !app_state.settings.theme_config.dark;
        app_state.settings.theme_config.clone()
    };

    match save_settings(&config) {
        Ok(_) => {
            let mut app_state = state.write();
            app_state.settings.unsaved_changes = false;
        }
        Err(e) => {
            tracing::error!("Failed to save theme toggle: {}", e);
            let mut app_state = state.write();
            app_state.settings.unsaved_changes = true;
        }
    }
}
