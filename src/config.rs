//! Instance configuration, optionally loaded from environment variables.
//!
//! Base URLs are scoped to each [`Instance`](crate::Instance) rather than
//! process-wide, so independent instances (and tests) never interfere.
//!
//! Recognised variables:
//! - `STOCKFIGHTER_API_KEY` - API key sent with every request
//! - `STOCKFIGHTER_BASE_URL` - REST base URL
//! - `STOCKFIGHTER_WS_URL` - WebSocket base URL
//! - `STOCKFIGHTER_GM_URL` - GameMaster base URL
//! - `STOCKFIGHTER_TIMEOUT_SECS` - per-request timeout in seconds

use std::time::Duration;

use crate::StockfighterError;
use crate::auth::ApiKey;

/// Default REST endpoint.
pub const DEFAULT_BASE_URL: &str = "https://api.stockfighter.io/ob/api/";

/// Default WebSocket endpoint.
pub const DEFAULT_WS_URL: &str = "wss://api.stockfighter.io/ob/api/ws/";

/// Default GameMaster endpoint.
pub const DEFAULT_GM_URL: &str = "https://www.stockfighter.io/gm/";

/// Construction-time configuration for an [`Instance`](crate::Instance).
#[derive(Debug, Clone)]
pub struct Config {
    pub base_url: String,
    pub ws_url: String,
    pub gm_url: String,
    /// Key the instance starts with. [`Instance::set_api_key`] replaces the
    /// live key without touching this field.
    ///
    /// [`Instance::set_api_key`]: crate::Instance::set_api_key
    pub api_key: ApiKey,
    /// Upper bound for a single REST call. `None` waits indefinitely.
    pub timeout: Option<Duration>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            ws_url: DEFAULT_WS_URL.to_string(),
            gm_url: DEFAULT_GM_URL.to_string(),
            api_key: ApiKey::default(),
            timeout: None,
        }
    }
}

impl Config {
    /// Creates a default configuration using the given API key.
    #[must_use]
    pub fn with_api_key(api_key: impl Into<ApiKey>) -> Self {
        Self {
            api_key: api_key.into(),
            ..Self::default()
        }
    }

    /// Overrides the REST base URL.
    #[must_use]
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Overrides the WebSocket base URL.
    #[must_use]
    pub fn ws_url(mut self, url: impl Into<String>) -> Self {
        self.ws_url = url.into();
        self
    }

    /// Overrides the GameMaster base URL.
    #[must_use]
    pub fn gm_url(mut self, url: impl Into<String>) -> Self {
        self.gm_url = url.into();
        self
    }

    /// Sets a per-request timeout.
    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Loads the configuration from environment variables, falling back to
    /// the public Stockfighter endpoints.
    ///
    /// # Errors
    ///
    /// Returns [`StockfighterError::Config`] if `STOCKFIGHTER_TIMEOUT_SECS`
    /// is set but is not a whole number of seconds.
    pub fn from_env() -> crate::Result<Self> {
        let mut config = Self::default();

        if let Some(key) = non_empty_var("STOCKFIGHTER_API_KEY") {
            config.api_key = ApiKey::new(key);
        }
        if let Some(url) = non_empty_var("STOCKFIGHTER_BASE_URL") {
            config.base_url = url;
        }
        if let Some(url) = non_empty_var("STOCKFIGHTER_WS_URL") {
            config.ws_url = url;
        }
        if let Some(url) = non_empty_var("STOCKFIGHTER_GM_URL") {
            config.gm_url = url;
        }
        if let Some(secs) = non_empty_var("STOCKFIGHTER_TIMEOUT_SECS") {
            let secs: u64 = secs.parse().map_err(|_| {
                StockfighterError::Config(format!(
                    "STOCKFIGHTER_TIMEOUT_SECS must be a whole number of seconds, got {secs:?}"
                ))
            })?;
            config.timeout = Some(Duration::from_secs(secs));
        }

        Ok(config)
    }

    /// Returns the configuration with every base URL ending in `/`.
    pub(crate) fn normalized(mut self) -> Self {
        for url in [&mut self.base_url, &mut self.ws_url, &mut self.gm_url] {
            if !url.ends_with('/') {
                url.push('/');
            }
        }
        self
    }
}

/// Returns the value of an environment variable if it exists and is non-empty.
fn non_empty_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|s| !s.is_empty())
}
