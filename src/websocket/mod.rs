//! Streaming subscriptions over the Stockfighter WebSocket API.
//!
//! This module is organized by concern:
//! - [`subscription`] - Consumer-facing handle and lifecycle state
//! - [`handler`] - Background task reading, decoding and publishing messages
//!
//! Each subscription owns one connection in its own tokio task. Stream URLs
//! have the shape `{account}/venues/{venue}/{method}[/stocks/{symbol}]`.

mod handler;
mod subscription;

use std::sync::Arc;

use serde::de::DeserializeOwned;
use tokio::net::TcpStream;
use tokio_tungstenite::connect_async;
use tokio_tungstenite::{MaybeTlsStream, WebSocketStream};
use tracing::info;
use tungstenite::client::IntoClientRequest;
use tungstenite::http::{HeaderName, HeaderValue};

use crate::auth::{AUTH_HEADER, ApiKey};
use crate::models::{ApiResponse, Execution, Quote, QuoteMessage, Response};
use crate::{Instance, Result};

pub use subscription::{StopHandle, Subscription, SubscriptionState};

/// A Stockfighter WebSocket connection.
pub type WsStream = WebSocketStream<MaybeTlsStream<TcpStream>>;

/// Available stream methods.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StreamKind {
    /// Quote updates (wire name: `"tickertape"`).
    Quotes,
    Executions,
}

impl StreamKind {
    /// Returns the URL path segment for this stream.
    pub fn as_str(&self) -> &'static str {
        match self {
            StreamKind::Quotes => "tickertape",
            StreamKind::Executions => "executions",
        }
    }
}

/// Whether a stream covers the whole venue or only the current symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StreamScope {
    Venue,
    Stock,
}

/// A payload type that can be streamed.
pub trait StreamItem: Send + 'static {
    const KIND: StreamKind;

    /// The wire message, envelope included.
    type Message: DeserializeOwned + ApiResponse;

    fn from_message(message: Self::Message) -> Self;
}

impl StreamItem for Quote {
    const KIND: StreamKind = StreamKind::Quotes;
    type Message = QuoteMessage;

    fn from_message(message: QuoteMessage) -> Self {
        message.quote
    }
}

impl StreamItem for Execution {
    const KIND: StreamKind = StreamKind::Executions;
    type Message = Response<Execution>;

    fn from_message(message: Response<Execution>) -> Self {
        message.into_inner()
    }
}

/// Builds the URL of a stream. Context values are inserted as-is.
pub fn stream_url(
    ws_base: &str,
    account: &str,
    venue: &str,
    kind: StreamKind,
    symbol: Option<&str>,
) -> String {
    let method = kind.as_str();
    match symbol {
        Some(symbol) => format!("{ws_base}{account}/venues/{venue}/{method}/stocks/{symbol}"),
        None => format!("{ws_base}{account}/venues/{venue}/{method}"),
    }
}

/// Opens a WebSocket connection, sending the API key in the auth header.
///
/// # Errors
///
/// Returns a [`StockfighterError`](crate::StockfighterError) if the URL is
/// invalid, the key is not a valid header value, or the connection or TLS
/// handshake fails.
pub async fn connect(url: &str, api_key: &ApiKey) -> Result<WsStream> {
    let mut request = url.into_client_request()?;
    request.headers_mut().insert(
        HeaderName::from_static(AUTH_HEADER),
        HeaderValue::from_str(api_key.expose())?,
    );

    let (ws_stream, _) = connect_async(request).await?;
    info!(%url, "WebSocket handshake completed");

    Ok(ws_stream)
}

impl Instance {
    /// Streams quotes for every symbol on the current venue.
    ///
    /// # Panics
    ///
    /// Panics if called outside a tokio runtime.
    pub fn quotes_for_venue(&self) -> Subscription<Quote> {
        self.subscribe(StreamScope::Venue)
    }

    /// Streams quotes for the current symbol on the current venue.
    ///
    /// # Panics
    ///
    /// Panics if called outside a tokio runtime.
    pub fn quotes_for_stock(&self) -> Subscription<Quote> {
        self.subscribe(StreamScope::Stock)
    }

    /// Streams executions for the current account on the current venue.
    ///
    /// # Panics
    ///
    /// Panics if called outside a tokio runtime.
    pub fn executions_for_venue(&self) -> Subscription<Execution> {
        self.subscribe(StreamScope::Venue)
    }

    /// Streams executions for the current account and symbol on the current
    /// venue.
    ///
    /// # Panics
    ///
    /// Panics if called outside a tokio runtime.
    pub fn executions_for_stock(&self) -> Subscription<Execution> {
        self.subscribe(StreamScope::Stock)
    }

    /// Opens a subscription using the current key and trading context.
    ///
    /// The connection is made in the background; failures end up in the
    /// error box and close the subscription's queue.
    ///
    /// # Panics
    ///
    /// Panics if called outside a tokio runtime.
    pub fn subscribe<T: StreamItem>(&self, scope: StreamScope) -> Subscription<T> {
        let (api_key, context) = self.session.snapshot();
        let symbol = match scope {
            StreamScope::Venue => None,
            StreamScope::Stock => Some(context.symbol.as_str()),
        };
        let url = stream_url(
            &self.config.ws_url,
            &context.account,
            &context.venue,
            T::KIND,
            symbol,
        );

        Subscription::spawn(url, api_key, Arc::clone(&self.errors))
    }
}
