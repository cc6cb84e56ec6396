//! The caller-facing API handle.
//!
//! An [`Instance`] owns the HTTP client, the [`Session`] (credential plus
//! trading context) and the [`ErrorBox`]. Endpoint operations are defined
//! next to the REST executor, streaming subscriptions in
//! [`crate::websocket`].

use std::sync::Arc;

use crate::auth::ApiKey;
use crate::config::Config;
use crate::error_box::ErrorBox;
use crate::session::{Session, TradingContext};
use crate::{Result, StockfighterError};

/// Basic unit of operation for all API calls.
///
/// Context setters take `&self`, so an instance can be shared behind an
/// [`Arc`] between tasks issuing requests concurrently.
#[derive(Debug)]
pub struct Instance {
    pub(crate) http: reqwest::Client,
    pub(crate) config: Config,
    pub(crate) session: Session,
    pub(crate) errors: Arc<ErrorBox>,
}

impl Instance {
    /// Creates an instance against the public endpoints with an empty
    /// trading context.
    ///
    /// # Errors
    ///
    /// Returns [`StockfighterError::Http`] if the HTTP client cannot be built.
    pub fn new(api_key: impl Into<ApiKey>) -> Result<Self> {
        Self::with_config(Config::with_api_key(api_key))
    }

    /// Creates an instance with preset account, venue and symbol.
    ///
    /// # Errors
    ///
    /// Returns [`StockfighterError::Http`] if the HTTP client cannot be built.
    pub fn with_context(
        api_key: impl Into<ApiKey>,
        account: impl Into<String>,
        venue: impl Into<String>,
        symbol: impl Into<String>,
    ) -> Result<Self> {
        let instance = Self::new(api_key)?;
        instance.set_context(TradingContext::new(account, venue, symbol));
        Ok(instance)
    }

    /// Creates an instance from an explicit configuration.
    ///
    /// # Errors
    ///
    /// Returns [`StockfighterError::Http`] if the HTTP client cannot be built.
    pub fn with_config(config: Config) -> Result<Self> {
        let config = config.normalized();

        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder.build()?;

        Ok(Self {
            http,
            session: Session::new(config.api_key.clone(), TradingContext::default()),
            config,
            errors: Arc::new(ErrorBox::new()),
        })
    }

    /// Returns the configuration this instance was built with.
    ///
    /// Its `api_key` is the initial key; see [`Instance::api_key`] for the
    /// one in use.
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    #[must_use]
    pub fn account(&self) -> String {
        self.session.account()
    }

    pub fn set_account(&self, account: impl Into<String>) {
        self.session.set_account(account);
    }

    #[must_use]
    pub fn venue(&self) -> String {
        self.session.venue()
    }

    pub fn set_venue(&self, venue: impl Into<String>) {
        self.session.set_venue(venue);
    }

    #[must_use]
    pub fn symbol(&self) -> String {
        self.session.symbol()
    }

    pub fn set_symbol(&self, symbol: impl Into<String>) {
        self.session.set_symbol(symbol);
    }

    #[must_use]
    pub fn instance_id(&self) -> u64 {
        self.session.instance_id()
    }

    pub fn set_instance_id(&self, instance_id: u64) {
        self.session.set_instance_id(instance_id);
    }

    /// Returns the API key currently sent with requests and dials.
    #[must_use]
    pub fn api_key(&self) -> ApiKey {
        self.session.api_key()
    }

    /// Replaces the API key used by subsequent requests and dials.
    pub fn set_api_key(&self, api_key: impl Into<ApiKey>) {
        self.session.set_api_key(api_key);
    }

    /// Returns the whole trading context, read atomically.
    #[must_use]
    pub fn context(&self) -> TradingContext {
        self.session.context()
    }

    /// Replaces the whole trading context atomically.
    pub fn set_context(&self, context: TradingContext) {
        self.session.set_context(context);
    }

    /// Returns the most recent error recorded by any call, without clearing it.
    #[must_use]
    pub fn last_error(&self) -> Option<Arc<StockfighterError>> {
        self.errors.last_error()
    }

    /// Forgets the recorded error.
    pub fn clear_error(&self) {
        self.errors.clear_error();
    }

    /// Returns the error box shared with this instance's subscriptions.
    #[must_use]
    pub fn errors(&self) -> &Arc<ErrorBox> {
        &self.errors
    }
}
