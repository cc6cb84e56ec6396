//! Order placement and status models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{OrderType, Side, null_as_default};

/// Body of a new-order request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderRequest {
    pub account: String,
    pub venue: String,
    pub symbol: String,
    pub price: u64,
    pub qty: u64,
    pub direction: Side,
    pub order_type: OrderType,
}

/// A single execution against an order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Fill {
    #[serde(deserialize_with = "null_as_default")]
    pub price: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub qty: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub ts: DateTime<Utc>,
}

/// Remote snapshot of an order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Order {
    pub id: u64,
    pub account: String,
    pub venue: String,
    pub symbol: String,
    pub price: u64,
    pub original_qty: u64,
    /// Quantity still outstanding.
    pub qty: u64,
    pub direction: Side,
    pub order_type: OrderType,
    #[serde(deserialize_with = "null_as_default")]
    pub ts: DateTime<Utc>,
    pub open: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub fills: Vec<Fill>,
    pub total_filled: u64,
}

/// Payload of the per-account order status endpoints.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct OrderList {
    pub venue: String,
    #[serde(deserialize_with = "null_as_default")]
    pub orders: Vec<Order>,
}
