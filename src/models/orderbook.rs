//! Order book models.

use chrono::{DateTime, Utc};
use serde::Deserialize;

use super::null_as_default;

/// A resting order at one price in the book.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MarketRequest {
    pub price: u64,
    pub qty: u64,
    pub is_buy: bool,
}

/// Snapshot of both sides of the book for one stock.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Orderbook {
    pub venue: String,
    pub symbol: String,
    /// Best bid first. `null` on the wire decodes as empty.
    #[serde(deserialize_with = "null_as_default")]
    pub bids: Vec<MarketRequest>,
    /// Best ask first. `null` on the wire decodes as empty.
    #[serde(deserialize_with = "null_as_default")]
    pub asks: Vec<MarketRequest>,
    #[serde(deserialize_with = "null_as_default")]
    pub ts: DateTime<Utc>,
}
