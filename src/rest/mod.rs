//! REST request execution and typed endpoint operations.
//!
//! This module is organized by domain:
//! - [`venue`] - Service and venue health, stock listings
//! - [`market`] - Orderbook and quote snapshots
//! - [`orders`] - Order placement, cancellation and status
//! - [`levels`] - GameMaster level lifecycle
//!
//! Every operation goes through [`Instance::execute`], which records exactly
//! one outcome in the error box and always hands back a value.

mod levels;
mod market;
mod orders;
mod venue;

use reqwest::{Method, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::auth::AUTH_HEADER;
use crate::models::{ApiResponse, Envelope};
use crate::{Instance, StockfighterError};

/// What a single REST exchange produced before it is recorded.
enum Outcome<R> {
    Success(R),
    /// The body decoded but the remote reported a failure.
    Rejected(R, StockfighterError),
    Failed(StockfighterError),
}

impl Instance {
    /// Performs one request and decodes the response into `R`.
    ///
    /// Failures are stored in the error box and never returned: transport
    /// errors, undecodable bodies, non-success statuses, and `ok: false`
    /// envelopes all leave a non-empty error behind. The returned value is
    /// `R::default()` unless a body was decoded.
    pub(crate) async fn execute<R, B>(&self, method: Method, url: String, body: Option<&B>) -> R
    where
        R: DeserializeOwned + ApiResponse + Default,
        B: Serialize + ?Sized,
    {
        match self.exchange(method, url, body).await {
            Outcome::Success(value) => value,
            Outcome::Rejected(value, err) => {
                self.errors.set_error(err);
                value
            }
            Outcome::Failed(err) => {
                self.errors.set_error(err);
                R::default()
            }
        }
    }

    pub(crate) async fn get<R>(&self, url: String) -> R
    where
        R: DeserializeOwned + ApiResponse + Default,
    {
        self.execute::<R, ()>(Method::GET, url, None).await
    }

    pub(crate) async fn post_empty<R>(&self, url: String) -> R
    where
        R: DeserializeOwned + ApiResponse + Default,
    {
        self.execute::<R, ()>(Method::POST, url, None).await
    }

    pub(crate) async fn delete<R>(&self, url: String) -> R
    where
        R: DeserializeOwned + ApiResponse + Default,
    {
        self.execute::<R, ()>(Method::DELETE, url, None).await
    }

    async fn exchange<R, B>(&self, method: Method, url: String, body: Option<&B>) -> Outcome<R>
    where
        R: DeserializeOwned + ApiResponse,
        B: Serialize + ?Sized,
    {
        let api_key = self.session.api_key();

        debug!(%method, %url, "Sending request");
        let mut request = self
            .http
            .request(method, &url)
            .header(AUTH_HEADER, api_key.expose());
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = match request.send().await {
            Ok(response) => response,
            Err(e) => return Outcome::Failed(e.into()),
        };
        let status = response.status();
        let bytes = match response.bytes().await {
            Ok(bytes) => bytes,
            Err(e) => return Outcome::Failed(e.into()),
        };
        debug!(%url, %status, len = bytes.len(), "Received response");

        decode_body(status, &bytes)
    }
}

/// Interprets a response body according to its status.
fn decode_body<R>(status: StatusCode, bytes: &[u8]) -> Outcome<R>
where
    R: DeserializeOwned + ApiResponse,
{
    if !status.is_success() {
        return match serde_json::from_slice::<Envelope>(bytes) {
            Ok(envelope) => Outcome::Failed(StockfighterError::api(
                &envelope.message,
                status.to_string(),
            )),
            Err(e) => Outcome::Failed(e.into()),
        };
    }

    match serde_json::from_slice::<R>(bytes) {
        Ok(value) if value.is_ok() => Outcome::Success(value),
        Ok(value) => {
            let err = StockfighterError::api(&value.envelope().message, status.to_string());
            Outcome::Rejected(value, err)
        }
        Err(e) => Outcome::Failed(e.into()),
    }
}

/// URL builders for the REST endpoints. Context values are inserted as-is.
mod paths {
    pub fn heartbeat(base: &str) -> String {
        format!("{base}heartbeat")
    }

    pub fn venue_heartbeat(base: &str, venue: &str) -> String {
        format!("{base}venues/{venue}/heartbeat")
    }

    pub fn stocks(base: &str, venue: &str) -> String {
        format!("{base}venues/{venue}/stocks")
    }

    pub fn orderbook(base: &str, venue: &str, symbol: &str) -> String {
        format!("{base}venues/{venue}/stocks/{symbol}")
    }

    pub fn quote(base: &str, venue: &str, symbol: &str) -> String {
        format!("{base}venues/{venue}/stocks/{symbol}/quote")
    }

    pub fn orders(base: &str, venue: &str, symbol: &str) -> String {
        format!("{base}venues/{venue}/stocks/{symbol}/orders")
    }

    pub fn order(base: &str, venue: &str, symbol: &str, id: u64) -> String {
        format!("{base}venues/{venue}/stocks/{symbol}/orders/{id}")
    }

    pub fn account_orders(base: &str, venue: &str, account: &str) -> String {
        format!("{base}venues/{venue}/accounts/{account}/orders")
    }

    pub fn account_stock_orders(base: &str, venue: &str, account: &str, symbol: &str) -> String {
        format!("{base}venues/{venue}/accounts/{account}/stocks/{symbol}/orders")
    }

    pub fn start_level(gm: &str, level: &str) -> String {
        format!("{gm}levels/{level}")
    }

    pub fn level_action(gm: &str, instance_id: u64, action: &str) -> String {
        format!("{gm}instances/{instance_id}/{action}")
    }
}
