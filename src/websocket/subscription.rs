//! Consumer-facing subscription handle.

use std::pin::Pin;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::task::{Context, Poll};

use futures_util::Stream;
use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;

use super::{StreamItem, handler};
use crate::auth::ApiKey;
use crate::error_box::ErrorBox;

/// Lifecycle of a subscription. Transitions only move forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubscriptionState {
    /// Dialing the WebSocket endpoint.
    Connecting,
    /// Reading and publishing messages.
    Streaming,
    /// Connection closed and queue closed. Terminal.
    Stopped,
}

/// Cooperative stop request, safe to trigger from any thread.
///
/// The background task checks it once per received message, so an
/// in-flight read is never interrupted; at most one further item may be
/// published after [`StopHandle::stop`] returns.
#[derive(Debug, Clone, Default)]
pub struct StopHandle(Arc<AtomicBool>);

impl StopHandle {
    pub fn stop(&self) {
        self.0.store(true, Ordering::Release);
    }

    #[must_use]
    pub fn is_stopped(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }
}

/// A live stream of decoded messages.
///
/// Items arrive in the order the connection delivered them. [`recv`]
/// returns `None` (and the [`Stream`] ends) once the subscription has
/// stopped and every published item has been consumed.
///
/// [`stop`](Subscription::stop) waits for the next frame before the task
/// exits. Dropping the handle aborts the task instead, closing the socket
/// right away even on a quiet stream.
///
/// [`recv`]: Subscription::recv
#[derive(Debug)]
pub struct Subscription<T> {
    url: String,
    rx: mpsc::UnboundedReceiver<T>,
    stop: StopHandle,
    state: watch::Receiver<SubscriptionState>,
    task: JoinHandle<()>,
}

impl<T: StreamItem> Subscription<T> {
    /// Spawns the background task for `url`.
    pub(crate) fn spawn(url: String, api_key: ApiKey, errors: Arc<ErrorBox>) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        let (state_tx, state) = watch::channel(SubscriptionState::Connecting);
        let stop = StopHandle::default();

        let task = tokio::spawn(handler::run::<T>(
            url.clone(),
            api_key,
            errors,
            tx,
            stop.clone(),
            state_tx,
        ));

        Self {
            url,
            rx,
            stop,
            state,
            task,
        }
    }
}

impl<T> Subscription<T> {
    /// Waits for the next item, or `None` once the queue is closed and drained.
    pub async fn recv(&mut self) -> Option<T> {
        self.rx.recv().await
    }

    /// Returns the stream URL this subscription is connected to.
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Returns the current lifecycle state.
    #[must_use]
    pub fn state(&self) -> SubscriptionState {
        *self.state.borrow()
    }

    /// Requests a stop, observed at the next message boundary.
    pub fn stop(&self) {
        self.stop.stop();
    }

    /// Returns a handle that can request a stop from elsewhere.
    #[must_use]
    pub fn stop_handle(&self) -> StopHandle {
        self.stop.clone()
    }

    /// Waits until the subscription reaches [`SubscriptionState::Stopped`].
    pub async fn stopped(&self) {
        let mut state = self.state.clone();
        // An error means the task is gone, which is also terminal.
        let _ = state
            .wait_for(|state| *state == SubscriptionState::Stopped)
            .await;
    }
}

impl<T> Stream for Subscription<T> {
    type Item = T;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<T>> {
        self.get_mut().rx.poll_recv(cx)
    }
}

impl<T> Drop for Subscription<T> {
    fn drop(&mut self) {
        self.stop.stop();
        self.task.abort();
    }
}
