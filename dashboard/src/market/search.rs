//! # Coin Search
//!
//! Substring matching over the coin universe. Two distinct rules coexist on
//! purpose: the live suggestion overlay matches name OR symbol, while a
//! submitted filter matches name only. Both are stable filters — they keep
//! the relative order of the input and never re-rank by relevance.

use shared::dto::market::Coin;

/// Produce the suggestion overlay for a partially typed query.
///
/// Case-insensitive substring match against the coin's name or its symbol,
/// truncated to `limit`. The caller is responsible for not invoking this
/// with an empty query (an empty needle would match every coin).
pub fn suggest(query: &str, universe: &[Coin], limit: usize) -> Vec<Coin> {
    let needle = query.to_lowercase();
    universe
        .iter()
        .filter(|coin| {
            coin.name.to_lowercase().contains(&needle)
                || coin.symbol.to_lowercase().contains(&needle)
        })
        .take(limit)
        .cloned()
        .collect()
}

/// Apply a committed search to the displayed list.
///
/// Matches the coin name only — symbols are deliberately excluded here even
/// though the suggestion overlay considers them.
pub fn filter_by_name(query: &str, coins: &[Coin]) -> Vec<Coin> {
    let needle = query.to_lowercase();
    coins
        .iter()
        .filter(|coin| coin.name.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}
