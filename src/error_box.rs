//! Single-slot store for the most recent error.
//!
//! Remote operations record failures here instead of returning them. Only
//! the latest non-empty error survives; callers that need every failure
//! must read the box after each call.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tracing::warn;

use crate::StockfighterError;

/// Last-error slot guarded by its own lock, independent of the session lock.
#[derive(Debug, Default)]
pub struct ErrorBox {
    slot: Mutex<Option<Arc<StockfighterError>>>,
}

impl ErrorBox {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Option<Arc<StockfighterError>>> {
        self.slot.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Stores `err` if it is `Some`, leaving the slot untouched otherwise.
    ///
    /// Returns `true` if something was stored so callers can skip follow-up
    /// steps.
    pub fn set_error(&self, err: impl Into<Option<StockfighterError>>) -> bool {
        match err.into() {
            Some(err) => {
                warn!(error = %err, "Recorded error");
                *self.lock() = Some(Arc::new(err));
                true
            }
            None => false,
        }
    }

    /// Returns the stored error without clearing it.
    #[must_use]
    pub fn last_error(&self) -> Option<Arc<StockfighterError>> {
        self.lock().clone()
    }

    /// Empties the slot.
    pub fn clear_error(&self) {
        *self.lock() = None;
    }
}
