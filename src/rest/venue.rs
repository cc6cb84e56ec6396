//! Service and venue health checks, stock listings.

use super::paths;
use crate::Instance;
use crate::models::{Envelope, Response, Stock, StockList};

impl Instance {
    /// Checks whether the API is up.
    ///
    /// The returned envelope's `ok` flag is the answer; failures are also
    /// recorded in the error box.
    pub async fn heartbeat(&self) -> Envelope {
        self.get(paths::heartbeat(&self.config.base_url)).await
    }

    /// Checks whether the current venue is up.
    pub async fn venue_heartbeat(&self) -> Envelope {
        let venue = self.session.venue();
        self.get(paths::venue_heartbeat(&self.config.base_url, &venue))
            .await
    }

    /// Lists the stocks traded on the current venue.
    ///
    /// Returns an empty list on failure.
    pub async fn available_stocks(&self) -> Vec<Stock> {
        let venue = self.session.venue();
        let response: Response<StockList> =
            self.get(paths::stocks(&self.config.base_url, &venue)).await;
        response.into_inner().symbols
    }
}
