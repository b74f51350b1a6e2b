//! # Market Data DTOs
//!
//! Coin market rows as returned by the public market-data API, and the
//! display currencies the user can switch between.

use serde::{Deserialize, Serialize};

/// One row of the coin market list.
///
/// Deserialized straight from the API's `/coins/markets` response. The field
/// names match the JSON keys, so no rename attributes are needed.
///
/// `price_change_percentage_24h` and `market_cap_rank` can be `null` for
/// newly listed or stale assets; they deserialize to `None` and must be
/// rendered as a blank placeholder, never coerced to zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Coin {
    /// Stable identifier, used as the detail-route key
    pub id: String,
    /// Ticker symbol, lowercase on the wire (e.g. "btc")
    pub symbol: String,
    /// Human-readable name (e.g. "Bitcoin")
    pub name: String,
    /// Icon URI
    pub image: String,
    /// Price in the currency the list was requested with
    pub current_price: f64,
    /// Market capitalization in the same currency
    pub market_cap: f64,
    /// Ordering hint from the API
    #[serde(skip_serializing_if = "Option::is_none")]
    pub market_cap_rank: Option<u32>,
    /// Signed 24h change; absent for assets without a day of history
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_change_percentage_24h: Option<f64>,
}

/// Display currency the market list is denominated in.
///
/// Pushed into the core by the nav bar; the core reads `symbol` for
/// formatting and never mutates it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Currency {
    /// API vs-currency code (e.g. "usd")
    pub code: String,
    /// Display symbol (e.g. "$")
    pub symbol: String,
}

impl Currency {
    pub fn usd() -> Self {
        Currency { code: "usd".to_string(), symbol: "$".to_string() }
    }

    pub fn eur() -> Self {
        Currency { code: "eur".to_string(), symbol: "€".to_string() }
    }

    pub fn inr() -> Self {
        Currency { code: "inr".to_string(), symbol: "₹".to_string() }
    }

    /// Currencies offered by the nav-bar selector
    pub fn supported() -> Vec<Currency> {
        vec![Currency::usd(), Currency::eur(), Currency::inr()]
    }
}

impl Default for Currency {
    fn default() -> Self {
        Currency::usd()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coin_deserializes_from_market_row() {
        let json = r#"{
            "id": "bitcoin",
            "symbol": "btc",
            "name": "Bitcoin",
            "image": "https://assets.example.com/bitcoin.png",
            "current_price": 64250.0,
            "market_cap": 1264021148198.0,
            "market_cap_rank": 1,
            "price_change_percentage_24h": 3.1
        }"#;

        let coin: Coin = serde_json::from_str(json).expect("valid market row");
        assert_eq!(coin.id, "bitcoin");
        assert_eq!(coin.symbol, "btc");
        assert_eq!(coin.current_price, 64250.0);
        assert_eq!(coin.market_cap_rank, Some(1));
        assert_eq!(coin.price_change_percentage_24h, Some(3.1));
    }

    #[test]
    fn test_coin_null_change_is_none_not_zero() {
        let json = r#"{
            "id": "newcoin",
            "symbol": "new",
            "name": "New Coin",
            "image": "https://assets.example.com/new.png",
            "current_price": 0.042,
            "market_cap": 1000.0,
            "market_cap_rank": null,
            "price_change_percentage_24h": null
        }"#;

        let coin: Coin = serde_json::from_str(json).expect("valid market row");
        assert_eq!(coin.price_change_percentage_24h, None);
        assert_eq!(coin.market_cap_rank, None);
    }

    #[test]
    fn test_coin_ignores_extra_fields() {
        // The live API sends many more fields than we model
        let json = r#"{
            "id": "ethereum",
            "symbol": "eth",
            "name": "Ethereum",
            "image": "https://assets.example.com/eth.png",
            "current_price": 3100.5,
            "market_cap": 372000000000.0,
            "market_cap_rank": 2,
            "price_change_percentage_24h": -1.5,
            "total_volume": 12345678.0,
            "ath": 4878.26
        }"#;

        let coin: Coin = serde_json::from_str(json).expect("valid market row");
        assert_eq!(coin.name, "Ethereum");
        assert_eq!(coin.price_change_percentage_24h, Some(-1.5));
    }

    #[test]
    fn test_supported_currencies() {
        let currencies = Currency::supported();
        assert_eq!(currencies.len(), 3);
        assert_eq!(currencies[0], Currency::usd());
        assert_eq!(currencies[1].symbol, "€");
        assert_eq!(currencies[2].code, "inr");
    }

    #[test]
    fn test_default_currency_is_usd() {
        assert_eq!(Currency::default(), Currency::usd());
    }
}
