//! Orderbook and quote snapshots for the current stock.

use super::paths;
use crate::Instance;
use crate::models::{Orderbook, Quote, Response};

impl Instance {
    /// Fetches the orderbook for the current symbol on the current venue.
    pub async fn orderbook(&self) -> Response<Orderbook> {
        let context = self.session.context();
        self.get(paths::orderbook(
            &self.config.base_url,
            &context.venue,
            &context.symbol,
        ))
        .await
    }

    /// Fetches a quote for the current symbol on the current venue.
    ///
    /// On a non-success status the returned quote is the zero value.
    pub async fn quote(&self) -> Response<Quote> {
        let context = self.session.context();
        self.get(paths::quote(
            &self.config.base_url,
            &context.venue,
            &context.symbol,
        ))
        .await
    }
}
