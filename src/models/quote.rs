//! Quote models, shared by the REST endpoint and the ticker tape stream.

use chrono::{DateTime, Utc};
use serde::Deserialize;

use super::{ApiResponse, Envelope, null_as_default};

/// Top-of-book summary for a single stock.
///
/// Prices are integer cents. Sides without resting orders are omitted by
/// the remote and decode as zero, as do `null` numbers and timestamps.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Quote {
    pub venue: String,
    pub symbol: String,
    #[serde(deserialize_with = "null_as_default")]
    pub bid: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub ask: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub bid_size: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub ask_size: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub bid_depth: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub ask_depth: u64,
    #[serde(rename = "last", deserialize_with = "null_as_default")]
    pub last_price: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub last_size: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub last_trade: DateTime<Utc>,
    #[serde(deserialize_with = "null_as_default")]
    pub quote_time: DateTime<Utc>,
}

/// A ticker tape message: the envelope plus a nested quote.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct QuoteMessage {
    #[serde(flatten)]
    pub envelope: Envelope,
    #[serde(default, deserialize_with = "null_as_default")]
    pub quote: Quote,
}

impl ApiResponse for QuoteMessage {
    fn envelope(&self) -> &Envelope {
        &self.envelope
    }
}
