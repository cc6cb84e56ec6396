//! Typed models for Stockfighter API payloads.
//!
//! Every response carries an `{"ok": bool, "error": string}` [`Envelope`]
//! at the top level. Payload types stay free of it; [`Response`] flattens
//! the envelope beside the payload and [`ApiResponse`] gives uniform access
//! to it.

pub mod execution;
pub mod level;
pub mod order;
pub mod orderbook;
pub mod quote;
pub mod stock;

use std::ops::Deref;

use serde::{Deserialize, Serialize};

pub use execution::Execution;
pub use level::{Instructions, LevelState};
pub use order::{Fill, Order, OrderList, OrderRequest};
pub use orderbook::{MarketRequest, Orderbook};
pub use quote::{Quote, QuoteMessage};
pub use stock::{Stock, StockList};

/// Remote success flag and message present in every response.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Envelope {
    pub ok: bool,
    #[serde(rename = "error")]
    pub message: String,
}

/// Access to the [`Envelope`] of a decoded response.
pub trait ApiResponse {
    fn envelope(&self) -> &Envelope;

    /// Returns `true` if the remote reported success.
    fn is_ok(&self) -> bool {
        self.envelope().ok
    }
}

impl ApiResponse for Envelope {
    fn envelope(&self) -> &Envelope {
        self
    }
}

/// A payload decoded together with its envelope.
///
/// Dereferences to the payload. The payload is only trustworthy when
/// [`ApiResponse::is_ok`] holds and the instance's error box is empty.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Response<T> {
    #[serde(flatten)]
    pub envelope: Envelope,
    #[serde(flatten)]
    pub data: T,
}

impl<T> Response<T> {
    /// Discards the envelope.
    pub fn into_inner(self) -> T {
        self.data
    }
}

impl<T> ApiResponse for Response<T> {
    fn envelope(&self) -> &Envelope {
        &self.envelope
    }
}

impl<T> Deref for Response<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.data
    }
}

/// Decodes a JSON `null` as the type's default, so a `null` timestamp,
/// number or list reads the same as a missing field.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Order direction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    #[default]
    Buy,
    Sell,
}

impl Side {
    /// Returns the wire-format name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Side::Buy => "buy",
            Side::Sell => "sell",
        }
    }
}

/// Order execution style.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum OrderType {
    #[default]
    Limit,
    Market,
    FillOrKill,
    ImmediateOrCancel,
}

impl OrderType {
    /// Returns the wire-format name.
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderType::Limit => "limit",
            OrderType::Market => "market",
            OrderType::FillOrKill => "fill-or-kill",
            OrderType::ImmediateOrCancel => "immediate-or-cancel",
        }
    }
}
