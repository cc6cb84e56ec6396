//! API key handling.
//!
//! Every REST request and every WebSocket dial carries the key in the
//! [`AUTH_HEADER`] header. The key itself is wiped from memory on drop.

use std::fmt;

use zeroize::Zeroizing;

/// Header carrying the API key (`X-Starfighter-Authorization`).
///
/// Lowercase so it can be used as a static header name.
pub const AUTH_HEADER: &str = "x-starfighter-authorization";

/// An opaque API key that never appears in `Debug` output.
#[derive(Clone, Default)]
pub struct ApiKey(Zeroizing<String>);

impl ApiKey {
    /// Wraps a raw key.
    #[must_use]
    pub fn new(key: impl Into<String>) -> Self {
        Self(Zeroizing::new(key.into()))
    }

    /// Returns the raw key for placing into a request header.
    #[must_use]
    pub fn expose(&self) -> &str {
        self.0.as_str()
    }

    /// Returns `true` if no key has been configured.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            f.write_str("ApiKey(<empty>)")
        } else {
            f.write_str("ApiKey(<redacted>)")
        }
    }
}

impl From<&str> for ApiKey {
    fn from(key: &str) -> Self {
        Self::new(key)
    }
}

impl From<String> for ApiKey {
    fn from(key: String) -> Self {
        Self::new(key)
    }
}
