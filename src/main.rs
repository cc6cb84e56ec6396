use std::time::Duration;

use stockfighter::models::{OrderType, Side};
use stockfighter::{Config, Instance, StockfighterError, TradingContext};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), StockfighterError> {
    // Initialize tracing subscriber for logging output, honouring RUST_LOG.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config = Config::from_env()?;
    let has_key = !config.api_key.is_empty();

    let instance = Instance::with_config(config)?;
    instance.set_context(TradingContext::new("EXB123456", "TESTEX", "FOOBAR"));

    let heartbeat = instance.heartbeat().await;
    report(&instance, "heartbeat", &heartbeat);

    let venue = instance.venue_heartbeat().await;
    report(&instance, "venue heartbeat", &venue);

    let stocks = instance.available_stocks().await;
    report(&instance, "available stocks", &stocks);

    let book = instance.orderbook().await;
    report(&instance, "orderbook", &*book);

    let quote = instance.quote().await;
    report(&instance, "quote", &*quote);

    if !has_key {
        info!("No STOCKFIGHTER_API_KEY set, skipping order calls");
        return Ok(());
    }

    instance.clear_error();
    let order = instance
        .place_order(quote.last_price, 100, Side::Buy, OrderType::Limit)
        .await;
    if let Some(err) = instance.last_error() {
        error!("Order placement failed: {err}");
        return Ok(());
    }
    report(&instance, "created order", &*order);

    info!("Waiting 5 seconds before querying order status");
    tokio::time::sleep(Duration::from_secs(5)).await;

    let status = instance.order_status(order.id).await;
    report(&instance, "order status", &*status);

    let cancelled = instance.cancel_order(order.id).await;
    report(&instance, "cancelled order", &*cancelled);

    Ok(())
}

/// Prints a result, or the recorded error if the call failed.
fn report<T: std::fmt::Debug + ?Sized>(instance: &Instance, label: &str, value: &T) {
    match instance.last_error() {
        Some(err) => error!("{label}: {err}"),
        None => info!("{label}: {value:#?}"),
    }
    instance.clear_error();
}
