//! Venue stock listing models.

use serde::Deserialize;

/// A tradable instrument on a venue.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Stock {
    pub name: String,
    pub symbol: String,
}

/// Payload of the stock listing endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct StockList {
    pub symbols: Vec<Stock>,
}
