//! # Application State Types
//!
//! All state-related types for the application: screens, market data state,
//! and settings state.

use std::sync::Arc;

use shared::dto::market::{Coin, Currency};

use crate::market::MarketList;

/// Application screens
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// Market overview with search and the coin table
    Home,
    /// Detail view for a single selected coin
    CoinDetail,
}

impl Screen {
    /// Get screen title for header display
    pub fn title(&self) -> &'static str {
        match self {
            Screen::Home => "Market Overview",
            Screen::CoinDetail => "Coin Detail",
        }
    }
}

/// Market screen state: upstream coin data plus the list state machine
/// driving what the table renders.
#[derive(Debug, Clone)]
pub struct MarketState {
    /// All coins from the latest fetch cycle, market-cap descending.
    /// This is the suggestion universe and the source for the display list.
    pub all_coins: Vec<Coin>,
    /// Whether at least one fetch cycle has completed for the current
    /// currency (distinguishes "loading" from "no matches")
    pub source_loaded: bool,
    /// Search, filter, and pagination state machine
    pub list: MarketList,
    /// Raw text in the search box
    pub search_input: String,
    /// Display currency for prices and market caps
    pub currency: Currency,
    /// Flag to prevent concurrent fetches (prevents task pileup)
    pub fetching: bool,
    /// Last refresh timestamp, drives the periodic refetch
    pub last_refresh: std::time::Instant,
    /// Last fetch error, shown in the status bar
    pub last_error: Option<String>,
    /// One-shot flag: scroll the view to the results region next frame
    pub scroll_to_results: bool,
}

impl Default for MarketState {
    fn default() -> Self {
        Self {
            all_coins: Vec::new(),
            source_loaded: false,
            list: MarketList::new(),
            search_input: String::new(),
            currency: Currency::default(),
            fetching: false,
            last_refresh: std::time::Instant::now(),
            last_error: None,
            scroll_to_results: false,
        }
    }
}

/// Settings state for theme and UI configuration
#[derive(Debug, Clone)]
pub struct SettingsState {
    /// Current theme configuration
    pub theme_config: crate::ui::theme::ThemeConfig,
    /// Path to config file
    pub config_path: String,
    /// Whether there are unsaved changes
    pub unsaved_changes: bool,
}

impl Default for SettingsState {
    fn default() -> Self {
        Self {
            theme_config: crate::ui::theme::ThemeConfig::default(),
            config_path: "./cryptohub-config.json".to_string(),
            unsaved_changes: false,
        }
    }
}

/// Global application state
#[derive(Clone)]
pub struct AppState {
    /// Current active screen
    pub current_screen: Screen,
    /// Market data and list state
    pub market: MarketState,
    /// Coin shown on the detail screen
    pub selected_coin: Option<Coin>,
    /// Settings state (theme configuration, etc.)
    pub settings: SettingsState,
    /// Pending notifications to display (level, message)
    pub pending_notifications: Vec<(String, String)>,
    /// API client
    pub api_client: Option<Arc<crate::services::api::ApiClient>>,
}
