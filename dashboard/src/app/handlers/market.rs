//! # Market Handlers
//!
//! Handlers for search, pagination, and currency actions on the Home screen.
//! Each handler takes a brief write lock, delegates the list semantics to
//! [`crate::market::MarketList`], and releases the lock before returning.

use std::sync::Arc;

use async_channel::Sender;
use parking_lot::RwLock;
use shared::dto::market::{Coin, Currency};

use crate::app::events::AppEvent;
use crate::app::state::{AppState, MarketState, Screen};
use crate::app::tasks;

/// Handle a keystroke in the search box
///
/// Internal handler function - use [`crate::app::App::handle_search_input`] instead.
pub(crate) fn handle_search_input(state: Arc<RwLock<AppState>>, input: String) {
    let mut state = state.write();
    state.market.search_input = input.clone();

    let MarketState { all_coins, list, .. } = &mut state.market;
    list.edit_query(&input, all_coins, all_coins);
}

/// Handle search form submission (Enter key or search button)
///
/// Internal handler function - use [`crate::app::App::handle_search_submit`] instead.
pub(crate) fn handle_search_submit(state: Arc<RwLock<AppState>>) {
    let mut state = state.write();

    let MarketState { all_coins, list, search_input, .. } = &mut state.market;
    let query = search_input.clone();
    let scroll = list.commit(&query, all_coins);
    state.market.scroll_to_results = scroll;

    tracing::debug!(
        query = %query,
        matches = state.market.list.committed_len(),
        "Search submitted"
    );
}

/// Handle a click on a suggestion entry: dismiss the overlay and open the
/// coin's detail screen.
///
/// Internal handler function - use [`crate::app::App::handle_suggestion_select`] instead.
pub(crate) fn handle_suggestion_select(state: Arc<RwLock<AppState>>, coin: Coin) {
    let mut state = state.write();
    state.market.list.dismiss_suggestions();
    state.selected_coin = Some(coin);
    state.current_screen = Screen::CoinDetail;
}

/// Handle explicit "Load More" button click
///
/// Internal handler function - use [`crate::app::App::handle_load_more`] instead.
pub(crate) fn handle_load_more(state: Arc<RwLock<AppState>>) {
    let mut state = state.write();
    state.market.list.reveal_more();
}

/// The end-of-list sentinel scrolled into view. The list decides whether
/// auto-pagination applies in the current mode.
///
/// Internal handler function - use [`crate::app::App::handle_sentinel_visible`] instead.
pub(crate) fn handle_sentinel_visible(state: Arc<RwLock<AppState>>) {
    let mut state = state.write();
    state.market.list.sentinel_reached();
}

/// Handle display currency change: reset the data and refetch denominated
/// in the new currency.
///
/// Internal handler function - use [`crate::app::App::handle_currency_change`] instead.
pub(crate) fn handle_currency_change(
    state: Arc<RwLock<AppState>>,
    event_tx: Sender<AppEvent>,
    currency: Currency,
) {
    {
        let mut state = state.write();
        if state.market.currency == currency {
            return;
        }

        tracing::info!(currency = %currency.code, "Display currency changed");
        state.market.currency = currency;

        // Old prices are denominated in the old currency. Clear them and
        // show the loading state until the refetch lands.
        state.market.all_coins.clear();
        state.market.source_loaded = false;
        let MarketState { all_coins, list, .. } = &mut state.market;
        list.set_source(all_coins);
    } // Lock released before spawning the fetch

    tasks::market::fetch_coin_markets(state, event_tx);
}
