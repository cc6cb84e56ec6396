//! Background task driving one subscription.

use std::sync::Arc;

use futures_util::StreamExt;
use tokio::sync::{mpsc, watch};
use tracing::{debug, info};
use tungstenite::Message;

use super::subscription::{StopHandle, SubscriptionState};
use super::{StreamItem, WsStream, connect};
use crate::auth::ApiKey;
use crate::error_box::ErrorBox;
use crate::models::ApiResponse;
use crate::{Result, StockfighterError};

/// Runs a subscription from `Connecting` to `Stopped`.
///
/// The queue sender is dropped on return, which closes the consumer side
/// after the state has been set to `Stopped`.
pub(super) async fn run<T: StreamItem>(
    url: String,
    api_key: ApiKey,
    errors: Arc<ErrorBox>,
    tx: mpsc::UnboundedSender<T>,
    stop: StopHandle,
    state: watch::Sender<SubscriptionState>,
) {
    info!(%url, method = T::KIND.as_str(), "Opening subscription");

    let mut ws = match connect(&url, &api_key).await {
        Ok(ws) => ws,
        Err(e) => {
            errors.set_error(e);
            state.send_replace(SubscriptionState::Stopped);
            info!(%url, "Subscription stopped before streaming");
            return;
        }
    };

    state.send_replace(SubscriptionState::Streaming);
    let published = stream_messages(&mut ws, &errors, &tx, &stop).await;

    if let Err(e) = ws.close(None).await {
        debug!(%url, "Close after stream end: {e}");
    }
    state.send_replace(SubscriptionState::Stopped);
    info!(%url, published, "Subscription stopped");
}

/// Reads, decodes and publishes until an error, a stop request, or a
/// dropped consumer. Returns the number of items published.
async fn stream_messages<T: StreamItem>(
    ws: &mut WsStream,
    errors: &ErrorBox,
    tx: &mpsc::UnboundedSender<T>,
    stop: &StopHandle,
) -> u64 {
    let mut published = 0;

    loop {
        let message = match ws.next().await {
            Some(Ok(message)) => message,
            Some(Err(e)) => {
                errors.set_error(StockfighterError::from(e));
                return published;
            }
            None => {
                errors.set_error(StockfighterError::from(tungstenite::Error::ConnectionClosed));
                return published;
            }
        };

        debug!(kind = T::KIND.as_str(), len = message.len(), "Received message");
        let item = match decode_message::<T>(message) {
            Ok(item) => item,
            Err(e) => {
                errors.set_error(e);
                return published;
            }
        };

        if stop.is_stopped() {
            debug!("Stop requested");
            return published;
        }

        if let Some(item) = item {
            if tx.send(item).is_err() {
                debug!("Consumer dropped");
                return published;
            }
            published += 1;
        }
    }
}

/// Decodes one frame. Control frames yield `Ok(None)`; a close frame counts
/// as the connection dropping.
fn decode_message<T: StreamItem>(message: Message) -> Result<Option<T>> {
    let parsed: T::Message = match message {
        Message::Text(text) => serde_json::from_str(&text)?,
        Message::Binary(data) => serde_json::from_slice(&data)?,
        Message::Close(frame) => {
            debug!(?frame, "Received close frame");
            return Err(tungstenite::Error::ConnectionClosed.into());
        }
        _ => return Ok(None),
    };

    if !parsed.is_ok() {
        return Err(StockfighterError::stream(&parsed.envelope().message));
    }

    Ok(Some(T::from_message(parsed)))
}
