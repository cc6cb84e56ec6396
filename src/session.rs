//! Shared instance state: credential and trading context.
//!
//! All fields live behind a single reader/writer lock. Readers run
//! concurrently with each other but never with a writer, and
//! [`Session::set_context`] replaces the whole trading context in one write
//! so no reader can observe a half-applied transition.

use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::auth::ApiKey;

/// Snapshot of the mutable trading context.
///
/// Empty strings mean "unset"; requests are still sent with the empty path
/// segment and the remote decides whether that is legal.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TradingContext {
    /// GameMaster level instance, `0` when no level is running.
    pub instance_id: u64,
    pub account: String,
    pub venue: String,
    pub symbol: String,
}

impl TradingContext {
    /// Creates a context without a level instance.
    #[must_use]
    pub fn new(
        account: impl Into<String>,
        venue: impl Into<String>,
        symbol: impl Into<String>,
    ) -> Self {
        Self {
            instance_id: 0,
            account: account.into(),
            venue: venue.into(),
            symbol: symbol.into(),
        }
    }
}

#[derive(Debug, Default)]
struct SessionState {
    api_key: ApiKey,
    context: TradingContext,
}

/// Credential and trading context shared by every call on an instance.
#[derive(Debug, Default)]
pub struct Session {
    state: RwLock<SessionState>,
}

impl Session {
    /// Creates a session with the given key and context.
    #[must_use]
    pub fn new(api_key: ApiKey, context: TradingContext) -> Self {
        Self {
            state: RwLock::new(SessionState { api_key, context }),
        }
    }

    // A panic while holding the lock cannot leave a field half-written, so
    // poisoning is ignored.
    fn read(&self) -> RwLockReadGuard<'_, SessionState> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, SessionState> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }

    #[must_use]
    pub fn api_key(&self) -> ApiKey {
        self.read().api_key.clone()
    }

    pub fn set_api_key(&self, api_key: impl Into<ApiKey>) {
        self.write().api_key = api_key.into();
    }

    #[must_use]
    pub fn account(&self) -> String {
        self.read().context.account.clone()
    }

    pub fn set_account(&self, account: impl Into<String>) {
        self.write().context.account = account.into();
    }

    #[must_use]
    pub fn venue(&self) -> String {
        self.read().context.venue.clone()
    }

    pub fn set_venue(&self, venue: impl Into<String>) {
        self.write().context.venue = venue.into();
    }

    #[must_use]
    pub fn symbol(&self) -> String {
        self.read().context.symbol.clone()
    }

    pub fn set_symbol(&self, symbol: impl Into<String>) {
        self.write().context.symbol = symbol.into();
    }

    #[must_use]
    pub fn instance_id(&self) -> u64 {
        self.read().context.instance_id
    }

    pub fn set_instance_id(&self, instance_id: u64) {
        self.write().context.instance_id = instance_id;
    }

    /// Returns a consistent snapshot of the whole trading context.
    #[must_use]
    pub fn context(&self) -> TradingContext {
        self.read().context.clone()
    }

    /// Replaces the whole trading context in a single write.
    pub fn set_context(&self, context: TradingContext) {
        self.write().context = context;
    }

    /// Applies `f` to the context under a single write lock.
    pub(crate) fn update_context(&self, f: impl FnOnce(&mut TradingContext)) {
        f(&mut self.write().context);
    }

    /// Returns the key and context together, read under one lock.
    pub(crate) fn snapshot(&self) -> (ApiKey, TradingContext) {
        let state = self.read();
        (state.api_key.clone(), state.context.clone())
    }
}
