//! # Navigation Handlers
//!
//! Handlers for screen navigation.

use std::sync::Arc;

use parking_lot::RwLock;

use crate::app::state::{AppState, Screen};

/// Handle screen change
///
/// Internal handler function - use [`crate::app::App::handle_screen_change`] instead.
pub(crate) fn handle_screen_change(state: Arc<RwLock<AppState>>, screen: Screen) {
    let mut state = state.write();
    state.current_screen = screen;

    // Leaving the detail screen drops the selection
    if screen != Screen::CoinDetail {
        state.selected_coin = None;
    }
}
