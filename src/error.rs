//! Crate-level error types.
//!
//! [`StockfighterError`] unifies every failure source (HTTP transport,
//! WebSocket transport, JSON decoding, remote-reported failures) behind a
//! single enum. Remote calls do not return it directly; they record it in
//! the instance's [`ErrorBox`](crate::ErrorBox) instead.

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, StockfighterError>;

/// Top-level error type recorded by all remote operations.
#[derive(Debug, thiserror::Error)]
pub enum StockfighterError {
    /// The HTTP request could not be built or sent, or the body could not be read.
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// A WebSocket operation (connect, receive) failed.
    #[error("websocket error: {0}")]
    WebSocket(#[from] tungstenite::Error),

    /// JSON serialization or deserialization failed.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// The remote API answered with `ok: false` or a non-success status.
    #[error("API: {status}; {message}")]
    Api { status: String, message: String },

    /// A stream message carried `ok: false`.
    #[error("stream: {message}")]
    Stream { message: String },

    /// The API key cannot be sent as a header value.
    #[error("invalid header value: {0}")]
    Header(#[from] tungstenite::http::header::InvalidHeaderValue),

    /// An environment variable held an unusable value.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Placeholder used when the remote reports a failure without a message.
pub(crate) const NO_ERROR_MESSAGE: &str = "no error message";

impl StockfighterError {
    /// Builds a remote-reported error from the vendor message and the HTTP
    /// status text.
    pub(crate) fn api(message: &str, status: impl Into<String>) -> Self {
        let message = if message.is_empty() {
            NO_ERROR_MESSAGE
        } else {
            message
        };
        Self::Api {
            status: status.into(),
            message: message.to_string(),
        }
    }

    /// Builds a stream error from an envelope message.
    pub(crate) fn stream(message: &str) -> Self {
        let message = if message.is_empty() {
            NO_ERROR_MESSAGE
        } else {
            message
        };
        Self::Stream {
            message: message.to_string(),
        }
    }
}
