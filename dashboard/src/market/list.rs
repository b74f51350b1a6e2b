//! # Market List State Machine
//!
//! [`MarketList`] decides, at any moment, which ordered list of coins the
//! Home screen renders and in which mode: the full market list, a committed
//! search result, or the live suggestion overlay while the user types.
//!
//! The mode is an explicit tagged enum rather than a pile of boolean-ish
//! fields, so states like "suggestions visible after a commit" cannot be
//! represented at all.

use shared::dto::market::Coin;

use crate::market::pagination::{PaginationController, PAGE_SIZE};
use crate::market::search;

/// Maximum entries in the suggestion overlay
pub const SUGGESTION_LIMIT: usize = 8;

/// Which of the three user-facing list modes is active.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewMode {
    /// Search box empty; the full market list is shown.
    Browsing,
    /// The user is typing. `suggestions` is the live overlay computed from
    /// the full universe; `committed` is the filter backing the list
    /// underneath the overlay, if one was submitted before typing resumed.
    Typing {
        query: String,
        suggestions: Vec<Coin>,
        committed: Option<String>,
    },
    /// A submitted name filter is active and the overlay is gone.
    Committed { query: String },
}

/// What the table body should draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListStatus {
    /// Upstream data has not arrived yet
    Loading,
    /// Data is loaded but the committed filter matched nothing
    NoMatches,
    /// At least one row to draw
    Rows,
}

/// Orchestrates search, pagination, and the upstream coin data into one
/// committed display list.
#[derive(Debug, Clone, PartialEq)]
pub struct MarketList {
    mode: ViewMode,
    committed: Vec<Coin>,
    pager: PaginationController,
}

impl MarketList {
    pub fn new() -> Self {
        MarketList {
            mode: ViewMode::Browsing,
            committed: Vec::new(),
            pager: PaginationController::new(PAGE_SIZE),
        }
    }

    /// Upstream data refresh. The committed list is re-derived against the
    /// *current* filter mode — a live filter survives a data refresh — and
    /// pagination restarts at the first page.
    pub fn set_source(&mut self, filtered_coins: &[Coin]) {
        self.committed = match self.committed_filter() {
            Some(query) => search::filter_by_name(query, filtered_coins),
            None => filtered_coins.to_vec(),
        };
        self.pager.reset(self.committed.len());
    }

    /// Keystroke in the search box.
    ///
    /// A non-empty query recomputes the suggestion overlay from the full
    /// `universe` (not the committed subset) and leaves the committed list
    /// untouched. Clearing the box drops any committed filter and restores
    /// the full list.
    pub fn edit_query(&mut self, input: &str, universe: &[Coin], filtered_coins: &[Coin]) {
        if input.is_empty() {
            self.mode = ViewMode::Browsing;
            self.committed = filtered_coins.to_vec();
            self.pager.reset(self.committed.len());
            return;
        }

        let committed = self.committed_filter().map(str::to_owned);
        self.mode = ViewMode::Typing {
            query: input.to_string(),
            suggestions: search::suggest(input, universe, SUGGESTION_LIMIT),
            committed,
        };
    }

    /// Form submission. Applies the name filter, clears the overlay, and
    /// resets pagination. Returns `true` when the view should scroll to the
    /// results region; submitting an empty query just restores the full
    /// list without scrolling.
    pub fn commit(&mut self, input: &str, filtered_coins: &[Coin]) -> bool {
        if input.is_empty() {
            self.mode = ViewMode::Browsing;
            self.committed = filtered_coins.to_vec();
            self.pager.reset(self.committed.len());
            return false;
        }

        self.committed = search::filter_by_name(input, filtered_coins);
        self.mode = ViewMode::Committed { query: input.to_string() };
        self.pager.reset(self.committed.len());
        true
    }

    /// A suggestion was chosen (navigation happens in the caller). The
    /// overlay disappears and the mode falls back to whatever backed it.
    pub fn dismiss_suggestions(&mut self) {
        if let ViewMode::Typing { committed, .. } = &self.mode {
            self.mode = match committed {
                Some(query) => ViewMode::Committed { query: query.clone() },
                None => ViewMode::Browsing,
            };
        }
    }

    /// Explicit "Load More" click. Always permitted.
    pub fn reveal_more(&mut self) {
        self.pager.reveal_more();
    }

    /// The scroll sentinel became visible. Auto-pagination only acts while
    /// browsing the full list — scrolling must not silently expand a search
    /// result set, and typing suspends it too.
    pub fn sentinel_reached(&mut self) {
        if matches!(self.mode, ViewMode::Browsing) {
            self.pager.reveal_more();
        }
    }

    /// Rows currently revealed by pagination.
    pub fn visible_rows(&self) -> &[Coin] {
        &self.committed[..self.pager.visible_count().min(self.committed.len())]
    }

    /// Distinguishes "not yet loaded" from "loaded and nothing matched".
    pub fn status(&self, source_loaded: bool) -> ListStatus {
        if !source_loaded {
            ListStatus::Loading
        } else if self.committed.is_empty() {
            ListStatus::NoMatches
        } else {
            ListStatus::Rows
        }
    }

    /// The suggestion overlay, when non-empty.
    pub fn suggestions(&self) -> Option<&[Coin]> {
        match &self.mode {
            ViewMode::Typing { suggestions, .. } if !suggestions.is_empty() => {
                Some(suggestions.as_slice())
            }
            _ => None,
        }
    }

    pub fn has_more(&self) -> bool {
        self.pager.has_more()
    }

    pub fn visible_count(&self) -> usize {
        self.pager.visible_count()
    }

    pub fn committed_len(&self) -> usize {
        self.committed.len()
    }

    pub fn mode(&self) -> &ViewMode {
        &self.mode
    }

    fn committed_filter(&self) -> Option<&str> {
        match &self.mode {
            ViewMode::Browsing => None,
            ViewMode::Typing { committed, .. } => committed.as_deref(),
            ViewMode::Committed { query } => Some(query.as_str()),
        }
    }
}

impl Default for MarketList {
    fn default() -> Self {
        MarketList::new()
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

    fn universe(n: usize) -> Vec<Coin> {
        (0..n).map(|i| coin(&format!("Coin{}", i), &format!("c{}", i))).collect()
    }

    // ========== Pagination Scenario Tests ==========

    #[test]
    fn test_browse_pagination_full_cycle() {
        let coins = universe(120);
        let mut list = MarketList::new();
        list.set_source(&coins);

        assert_eq!(list.visible_count(), 50);
        assert!(list.has_more());

        list.reveal_more();
        assert_eq!(list.visible_count(), 100);

        list.reveal_more();
        assert_eq!(list.visible_count(), 120);
        // The "Load More" affordance must disappear now
        assert!(!list.has_more());

        // Further reveals are no-ops
        list.reveal_more();
        assert_eq!(list.visible_count(), 120);
        assert_eq!(list.visible_rows().len(), 120);
    }

    #[test]
    fn test_sentinel_paginates_only_while_browsing() {
        let coins = universe(120);
        let mut list = MarketList::new();
        list.set_source(&coins);

        list.sentinel_reached();
        assert_eq!(list.visible_count(), 100);

        // Typing suspends auto-pagination
        list.edit_query("coin", &coins, &coins);
        list.sentinel_reached();
        assert_eq!(list.visible_count(), 100);

        // A committed filter suspends it too
        list.commit("coin1", &coins);
        let after_commit = list.visible_count();
        list.sentinel_reached();
        assert_eq!(list.visible_count(), after_commit);

        // Manual "Load More" is always permitted
        list.reveal_more();
        assert!(list.visible_count() >= after_commit);
    }

    // ========== Search Flow Tests ==========

    #[test]
    fn test_typing_shows_suggestions_without_touching_committed_list() {
        let coins = vec![coin("Bitcoin", "btc"), coin("Arbit", "arb"), coin("Ether", "eth")];
        let mut list = MarketList::new();
        list.set_source(&coins);

        list.edit_query("bit", &coins, &coins);

        let suggestions = list.suggestions().expect("overlay should be visible");
        assert_eq!(suggestions.len(), 2);
        assert_eq!(suggestions[0].name, "Bitcoin");
        assert_eq!(suggestions[1].name, "Arbit");

        // Committed list is still the full source
        assert_eq!(list.committed_len(), 3);
    }

    #[test]
    fn test_suggestions_use_full_universe_not_committed_subset() {
        let all = vec![coin("Bitcoin", "btc"), coin("Ethereum", "eth")];
        let mut list = MarketList::new();
        list.set_source(&all);

        // Commit a filter that excludes Ethereum
        list.commit("bitcoin", &all);
        assert_eq!(list.committed_len(), 1);

        // Typing still suggests from the unfiltered universe
        list.edit_query("eth", &all, &all);
        let suggestions = list.suggestions().expect("overlay should be visible");
        assert_eq!(suggestions[0].name, "Ethereum");
    }

    #[test]
    fn test_commit_filters_by_name_and_resets_pagination() {
        let mut coins = universe(120);
        coins.push(coin("Ethereum", "eth"));
        let mut list = MarketList::new();
        list.set_source(&coins);
        list.reveal_more();
        assert_eq!(list.visible_count(), 100);

        let scroll = list.commit("ethereum", &coins);
        assert!(scroll);
        assert_eq!(list.committed_len(), 1);
        assert_eq!(list.visible_count(), 1);
        assert!(list.suggestions().is_none());
        assert_eq!(list.mode(), &ViewMode::Committed { query: "ethereum".to_string() });
    }

    #[test]
    fn test_commit_empty_query_restores_full_list_without_scroll() {
        let coins = universe(10);
        let mut list = MarketList::new();
        list.set_source(&coins);
        list.commit("coin1", &coins);

        let scroll = list.commit("", &coins);
        assert!(!scroll);
        assert_eq!(list.committed_len(), 10);
        assert_eq!(list.mode(), &ViewMode::Browsing);
    }

    #[test]
    fn test_clearing_query_drops_committed_filter() {
        let coins = universe(10);
        let mut list = MarketList::new();
        list.set_source(&coins);
        list.commit("coin1", &coins);
        assert_eq!(list.committed_len(), 1);

        list.edit_query("", &coins, &coins);
        assert_eq!(list.committed_len(), 10);
        assert_eq!(list.mode(), &ViewMode::Browsing);
        assert!(list.suggestions().is_none());
    }

    #[test]
    fn test_dismiss_suggestions_returns_to_backing_mode() {
        let coins = universe(10);
        let mut list = MarketList::new();
        list.set_source(&coins);

        // Typing over the plain list falls back to browsing
        list.edit_query("coin", &coins, &coins);
        list.dismiss_suggestions();
        assert_eq!(list.mode(), &ViewMode::Browsing);

        // Typing over a committed filter falls back to that filter
        list.commit("coin1", &coins);
        list.edit_query("coin2", &coins, &coins);
        list.dismiss_suggestions();
        assert_eq!(list.mode(), &ViewMode::Committed { query: "coin1".to_string() });
    }

    // ========== Data Refresh Tests ==========

    #[test]
    fn test_refresh_reapplies_committed_filter() {
        let old = vec![coin("Ethereum", "eth"), coin("Ethereum Classic", "etc"), coin("Bitcoin", "btc")];
        let mut list = MarketList::new();
        list.set_source(&old);
        list.commit("eth", &old);
        assert_eq!(list.committed_len(), 2);

        // New fetch cycle arrives with one fewer match
        let new = vec![coin("Ethereum", "eth"), coin("Bitcoin", "btc"), coin("Cardano", "ada")];
        list.set_source(&new);

        assert_eq!(list.committed_len(), 1);
        assert_eq!(list.visible_rows()[0].name, "Ethereum");
        // Pagination reset to min(page size, filtered length)
        assert_eq!(list.visible_count(), 1);
        assert_eq!(list.mode(), &ViewMode::Committed { query: "eth".to_string() });
    }

    #[test]
    fn test_refresh_without_filter_replaces_full_list() {
        let mut list = MarketList::new();
        list.set_source(&universe(120));
        list.reveal_more();
        assert_eq!(list.visible_count(), 100);

        list.set_source(&universe(60));
        assert_eq!(list.committed_len(), 60);
        assert_eq!(list.visible_count(), 50);
    }

    // ========== Status Tests ==========

    #[test]
    fn test_no_matches_is_distinct_from_loading() {
        let coins = universe(10);
        let mut list = MarketList::new();

        // Nothing fetched yet
        assert_eq!(list.status(false), ListStatus::Loading);

        list.set_source(&coins);
        assert_eq!(list.status(true), ListStatus::Rows);

        // A committed search with zero matches is "no results", not "loading",
        // and leaves no pagination affordance behind
        list.commit("cardano", &coins);
        assert_eq!(list.status(true), ListStatus::NoMatches);
        assert!(!list.has_more());
    }
}
