//! # Application Orchestrator
//!
//! The main [`App`] struct orchestrates the entire application, coordinating between
//! the UI rendering layer, async fetch tasks, and application state management.
//!
//! ## Architecture
//!
//! The application follows an event-driven architecture pattern:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    Main Thread (egui)                       │
//! │  ┌──────────────────────────────────────────────────────┐   │
//! │  │  App (orchestrator)                                  │   │
//! │  │  - on_tick() - called every frame                    │   │
//! │  │  - handle_event() - processes async results          │   │
//! │  │  - handle_*() - user action handlers                 │   │
//! │  └────────────┬─────────────────────────────────────────┘   │
//! │               │                                             │
//! │  ┌────────────▼─────────────────────────────────────────┐   │
//! │  │  State: Arc<RwLock<AppState>>                        │   │
//! │  │  - Thread-safe shared state                          │   │
//! │  │  - Lock held briefly for minimal duration            │   │
//! │  └──────────────────────────────────────────────────────┘   │
//! └───────────────────────┬─────────────────────────────────────┘
//!                         │ async_channel
//!                         │ (unbounded)
//! ┌───────────────────────▼─────────────────────────────────────┐
//! │              Async Task Threads (Tokio)                     │
//! │  ┌──────────────────────────────────────────────────────┐   │
//! │  │  Tasks Module                                        │   │
//! │  │  - fetch_coin_markets() - market data                │   │
//! │  └──────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## State Management Pattern
//!
//! The application uses `Arc<RwLock<AppState>>` for thread-safe state:
//!
//! ```rust,ignore
//! // Main thread: Read state for rendering
//! let state = app.state.read(); // Shared read lock
//! // Render UI based on state
//! drop(state); // Lock released immediately
//!
//! // Async task: Write state updates
//! let mut state = app.state.write(); // Exclusive write lock
//! state.market.all_coins = coins;
//! drop(state); // Lock released immediately
//! ```
//!
//! **Critical**: Locks are held for minimal duration to prevent UI freezing.
//!
//! ## Event-Driven Communication
//!
//! Async tasks communicate results back to the main thread via `AppEvent`:
//!
//! ```rust,ignore
//! // Async task sends event
//! event_tx.send(AppEvent::MarketsResult { currency, result }).await?;
//!
//! // Main thread receives event in on_tick()
//! while let Ok(event) = app.event_rx.try_recv() {
//!     app.handle_event(event); // Updates state
//! }
//! ```
//!
//! ## Related Modules
//!
//! - [`state`]: Application state types and definitions
//! - [`events`]: Event enum for async communication
//! - [`handlers`]: User action handlers
//! - [`tasks`]: Async background tasks

mod event_handler;
mod events;
mod handlers;
mod state;
mod tasks;

pub use events::AppEvent;
pub use state::*;

use std::sync::Arc;

use async_channel::{unbounded, Receiver, Sender};
use parking_lot::RwLock;
use shared::dto::market::{Coin, Currency};

/// How long fetched market data stays fresh before the next refetch
pub const REFRESH_INTERVAL: std::time::Duration = std::time::Duration::from_secs(10);

/// Main application orchestrator that coordinates UI rendering, async tasks, and state management.
///
/// The [`App`] struct serves as the central coordinator between:
/// - **UI Layer**: egui rendering (main thread)
/// - **Async Tasks**: Network requests against CoinGecko (Tokio tasks)
/// - **State Management**: Thread-safe shared state (`Arc<RwLock<AppState>>`)
///
/// # Thread Safety
///
/// - **Main Thread**: All UI operations must run on the main thread (egui requirement)
/// - **Async Tasks**: Network I/O runs on the Tokio runtime (multi-threaded)
/// - **State Access**: Thread-safe via `Arc<RwLock<AppState>>` (multiple readers, exclusive writers)
pub struct App {
    /// Thread-safe shared application state.
    ///
    /// - Use `read()` for reading (shared lock, multiple readers)
    /// - Use `write()` for writing (exclusive lock, single writer)
    /// - **Critical**: Hold locks for minimal duration to prevent UI freezing
    pub state: Arc<RwLock<AppState>>,

    /// Channel receiver for async task results.
    ///
    /// Receives `AppEvent` messages from fetch tasks. Polled in `on_tick()`
    /// using `try_recv()` (non-blocking).
    pub event_rx: Receiver<AppEvent>,

    /// Channel sender for async task results (internal use).
    ///
    /// Cloned and passed to async tasks for sending results back to the main thread.
    event_tx: Sender<AppEvent>,
}

impl App {
    /// Create a new application instance with initial state.
    ///
    /// Initializes the application with:
    /// - Default state (Home screen, empty market list, USD currency)
    /// - API client for CoinGecko communication
    /// - Theme configuration loaded from disk
    /// - Event channel for async task communication
    ///
    /// No fetch is issued here; the first `on_tick()` triggers it. That keeps
    /// construction synchronous and side-effect free apart from reading the
    /// config file.
    pub fn new() -> Self {
        // Create API client
        let api_client = Arc::new(crate::services::api::ApiClient::new());

        // Load settings from file
        let theme_config = handlers::settings::load_settings();
        let settings = SettingsState {
            theme_config,
            config_path: handlers::settings::get_config_path().to_string_lossy().to_string(),
            unsaved_changes: false,
        };

        let state = AppState {
            current_screen: Screen::Home,
            market: MarketState::default(),
            selected_coin: None,
            settings,
            pending_notifications: Vec::new(),
            api_client: Some(api_client),
        };

        // Create event channel
        let (event_tx, event_rx) = unbounded();

        tracing::info!("App state initialized - event channel created");

        App {
            state: Arc::new(RwLock::new(state)),
            event_rx,
            event_tx,
        }
    }

    /// Called every frame to process async events and update state.
    ///
    /// This method should be called from the egui update loop (main thread)
    /// on every frame to ensure async task results are processed promptly.
    ///
    /// # Operations Performed
    ///
    /// 1. **Processes async events** - Non-blocking poll of the event channel
    /// 2. **Triggers market refresh** - Fetches the coin list when no data has
    ///    arrived yet or the last refresh is older than [`REFRESH_INTERVAL`]
    ///
    /// Refreshes are skipped while a fetch is already in flight, so a slow
    /// network cannot pile up concurrent requests.
    pub fn on_tick(&mut self) {
        // Process all available events in the channel (non-blocking)
        while let Ok(event) = self.event_rx.try_recv() {
            self.handle_event(event);
        }

        // Periodic refresh of the market list
        let should_fetch = {
            let state = self.state.read();
            let market = &state.market;
            !market.fetching
                && (!market.source_loaded || market.last_refresh.elapsed() >= REFRESH_INTERVAL)
        };

        if should_fetch {
            tasks::market::fetch_coin_markets(self.state.clone(), self.event_tx.clone());
        }
    }

    /// Handle async event results
    ///
    /// Delegates to the event_handler module for processing.
    /// CRITICAL: Acquires write lock per-event for minimal duration to prevent UI freezing
    fn handle_event(&mut self, event: AppEvent) {
        use event_handler::AppEventHandler;
        self.handle_event_impl(event);
    }

    // ========== GUI Action Methods - Delegating to Handlers ==========

    /// Handle a keystroke in the search box
    pub fn handle_search_input(&mut self, input: String) {
        handlers::market::handle_search_input(self.state.clone(), input);
    }

    /// Handle search form submission (Enter key or search button)
    pub fn handle_search_submit(&mut self) {
        handlers::market::handle_search_submit(self.state.clone());
    }

    /// Handle a click on a suggestion entry
    pub fn handle_suggestion_select(&mut self, coin: Coin) {
        handlers::market::handle_suggestion_select(self.state.clone(), coin);
    }

    /// Handle explicit "Load More" button click
    pub fn handle_load_more(&mut self) {
        handlers::market::handle_load_more(self.state.clone());
    }

    /// The end-of-list sentinel scrolled into view
    pub fn handle_sentinel_visible(&mut self) {
        handlers::market::handle_sentinel_visible(self.state.clone());
    }

    /// Handle manual refresh button click
    pub fn handle_refresh_click(&mut self) {
        tasks::market::fetch_coin_markets(self.state.clone(), self.event_tx.clone());
    }

    /// Handle display currency change
    pub fn handle_currency_change(&mut self, currency: Currency) {
        handlers::market::handle_currency_change(self.state.clone(), self.event_tx.clone(), currency);
    }

    /// Handle screen change
    pub fn handle_screen_change(&mut self, screen: Screen) {
        handlers::navigation::handle_screen_change(self.state.clone(), screen);
    }

    /// Toggle between dark and light theme
    pub fn handle_theme_toggle(&mut self) {
        handlers::settings::handle_theme_toggle(self.state.clone());
    }
}

impl Default for App {
    fn default() -> Self {
        App::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coin(name: &str, symbol: &str) -> Coin {
        Coin {
            id: name.to_lowercase().replace(' ', "-"),
            symbol: symbol.to_string(),
            name: name.to_string(),
            image: String::new(),
            current_price: 100.0,
            market_cap: 1_000_000.0,
            market_cap_rank: Some(1),
            price_change_percentage_24h: Some(1.0),
        }
    }

    /// App with the API client removed, so ticking never spawns network tasks.
    fn offline_app() -> App {
        let app = App::new();
        app.state.write().api_client = None;
        app
    }

    // ========== Initial State Tests ==========

    #[test]
    fn test_initial_state() {
        let app = offline_app();
        let state = app.state.read();

        assert_eq!(state.current_screen, Screen::Home);
        assert!(state.market.all_coins.is_empty());
        assert!(!state.market.source_loaded);
        assert_eq!(state.market.currency, Currency::usd());
        assert!(state.selected_coin.is_none());
    }

    // ========== Event Handling Tests ==========

    #[test]
    fn test_markets_result_populates_state() {
        let mut app = offline_app();

        let coins = vec![coin("Bitcoin", "btc"), coin("Ethereum", "eth")];
        app.event_tx
            .send_blocking(AppEvent::MarketsResult {
                currency: Currency::usd(),
                result: Ok(coins),
            })
            .unwrap();

        app.on_tick();

        let state = app.state.read();
        assert_eq!(state.market.all_coins.len(), 2);
        assert!(state.market.source_loaded);
        assert!(state.market.last_error.is_none());
        assert_eq!(state.market.list.visible_rows().len(), 2);
    }

    #[test]
    fn test_stale_currency_result_is_dropped() {
        let mut app = offline_app();

        // Active currency is USD, but a late EUR response arrives
        app.event_tx
            .send_blocking(AppEvent::MarketsResult {
                currency: Currency::eur(),
                result: Ok(vec![coin("Bitcoin", "btc")]),
            })
            .unwrap();

        app.on_tick();

        let state = app.state.read();
        assert!(state.market.all_coins.is_empty());
        assert!(!state.market.source_loaded);
    }

    #[test]
    fn test_markets_error_keeps_data_and_notifies() {
        let mut app = offline_app();

        app.event_tx
            .send_blocking(AppEvent::MarketsResult {
                currency: Currency::usd(),
                result: Ok(vec![coin("Bitcoin", "btc")]),
            })
            .unwrap();
        app.on_tick();

        app.event_tx
            .send_blocking(AppEvent::MarketsResult {
                currency: Currency::usd(),
                result: Err("HTTP 429".to_string()),
            })
            .unwrap();
        app.on_tick();

        let state = app.state.read();
        // Last known data survives a failed refresh; the raw channel string
        // is lifted into the API error category before display
        assert_eq!(state.market.all_coins.len(), 1);
        assert_eq!(state.market.last_error.as_deref(), Some("API error: HTTP 429"));
        assert_eq!(state.pending_notifications.len(), 1);
        assert_eq!(state.pending_notifications[0].0, "error");
    }

    // ========== Handler Tests ==========

    #[test]
    fn test_search_flow_through_handlers() {
        let mut app = offline_app();
        app.event_tx
            .send_blocking(AppEvent::MarketsResult {
                currency: Currency::usd(),
                result: Ok(vec![coin("Bitcoin", "btc"), coin("Ethereum", "eth")]),
            })
            .unwrap();
        app.on_tick();

        app.handle_search_input("eth".to_string());
        {
            let state = app.state.read();
            assert_eq!(state.market.search_input, "eth");
            assert!(state.market.list.suggestions().is_some());
        }

        app.handle_search_submit();
        let state = app.state.read();
        assert_eq!(state.market.list.committed_len(), 1);
        assert!(state.market.scroll_to_results);
    }

    #[test]
    fn test_suggestion_select_navigates_to_detail() {
        let mut app = offline_app();
        let btc = coin("Bitcoin", "btc");

        app.handle_suggestion_select(btc.clone());

        let state = app.state.read();
        assert_eq!(state.current_screen, Screen::CoinDetail);
        assert_eq!(state.selected_coin.as_ref().map(|c| c.id.as_str()), Some("bitcoin"));
    }

    #[test]
    fn test_leaving_detail_screen_clears_selection() {
        let mut app = offline_app();
        app.handle_suggestion_select(coin("Bitcoin", "btc"));
        app.handle_screen_change(Screen::Home);

        let state = app.state.read();
        assert_eq!(state.current_screen, Screen::Home);
        assert!(state.selected_coin.is_none());
    }
}
