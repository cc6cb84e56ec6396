//! Order placement, cancellation and status queries.

use reqwest::Method;
use tracing::info;

use super::paths;
use crate::Instance;
use crate::models::{ApiResponse, Order, OrderList, OrderRequest, OrderType, Response, Side};

impl Instance {
    /// Places an order for the current symbol on the current venue, using
    /// the current account.
    ///
    /// `price` is in cents and ignored by the remote for market orders.
    pub async fn place_order(
        &self,
        price: u64,
        qty: u64,
        direction: Side,
        order_type: OrderType,
    ) -> Response<Order> {
        let context = self.session.context();
        let request = OrderRequest {
            account: context.account,
            venue: context.venue,
            symbol: context.symbol,
            price,
            qty,
            direction,
            order_type,
        };
        let url = paths::orders(&self.config.base_url, &request.venue, &request.symbol);

        let order: Response<Order> = self.execute(Method::POST, url, Some(&request)).await;
        if order.is_ok() {
            info!(
                id = order.id,
                direction = direction.as_str(),
                order_type = order_type.as_str(),
                price,
                qty,
                "Order placed"
            );
        }
        order
    }

    /// Cancels the order with the given id.
    pub async fn cancel_order(&self, id: u64) -> Response<Order> {
        let context = self.session.context();
        self.delete(paths::order(
            &self.config.base_url,
            &context.venue,
            &context.symbol,
            id,
        ))
        .await
    }

    /// Fetches the status of the order with the given id.
    pub async fn order_status(&self, id: u64) -> Response<Order> {
        let context = self.session.context();
        self.get(paths::order(
            &self.config.base_url,
            &context.venue,
            &context.symbol,
            id,
        ))
        .await
    }

    /// Fetches every order of the current account on the current venue.
    ///
    /// Returns an empty list on failure.
    pub async fn account_order_status(&self) -> Vec<Order> {
        let context = self.session.context();
        let response: Response<OrderList> = self
            .get(paths::account_orders(
                &self.config.base_url,
                &context.venue,
                &context.account,
            ))
            .await;
        response.into_inner().orders
    }

    /// Fetches every order of the current account for the current symbol.
    ///
    /// Returns an empty list on failure.
    pub async fn stock_order_status(&self) -> Vec<Order> {
        let context = self.session.context();
        let response: Response<OrderList> = self
            .get(paths::account_stock_orders(
                &self.config.base_url,
                &context.venue,
                &context.account,
                &context.symbol,
            ))
            .await;
        response.into_inner().orders
    }
}
