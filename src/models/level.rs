//! GameMaster level models.

use serde::Deserialize;

use super::null_as_default;

/// Level briefing text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Instructions {
    #[serde(rename = "Instructions")]
    pub instructions: String,
    #[serde(rename = "Order Types")]
    pub order_types: String,
}

/// State of a running level as reported by the GameMaster.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LevelState {
    pub account: String,
    pub instance_id: u64,
    pub instructions: Instructions,
    pub seconds_per_trading_day: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub venues: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub tickers: Vec<String>,
}
