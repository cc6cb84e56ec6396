//! Execution stream models.

use chrono::{DateTime, Utc};
use serde::Deserialize;

use super::{Order, null_as_default};

/// A fill reported on the executions stream.
///
/// `standing_id` is the order that was resting on the book, `incoming_id`
/// the order that crossed it. `order` is the account's own order after the
/// fill was applied.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Execution {
    pub account: String,
    pub venue: String,
    pub symbol: String,
    pub order: Order,
    pub standing_id: u64,
    pub incoming_id: u64,
    pub price: u64,
    pub filled: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub filled_at: DateTime<Utc>,
    pub standing_complete: bool,
    pub incoming_complete: bool,
}
