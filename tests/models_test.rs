//! Deserialization tests for Stockfighter model types.

use chrono::{DateTime, TimeZone, Utc};

use stockfighter::models::{
    ApiResponse, Execution, LevelState, Order, OrderList, OrderType, Orderbook, Quote,
    QuoteMessage, Response, Side, StockList,
};

const QUOTE_JSON: &str = include_str!("fixtures/quote.json");
const ORDERBOOK_JSON: &str = include_str!("fixtures/orderbook.json");
const ORDER_JSON: &str = include_str!("fixtures/order.json");
const ORDER_LIST_JSON: &str = include_str!("fixtures/order_list.json");
const STOCKS_JSON: &str = include_str!("fixtures/stocks.json");
const EXECUTION_JSON: &str = include_str!("fixtures/execution.json");
const LEVEL_JSON: &str = include_str!("fixtures/level.json");

#[test]
fn test_quote_response_deserializes() {
    let response: Response<Quote> =
        serde_json::from_str(QUOTE_JSON).expect("Failed to deserialize quote");

    assert!(response.is_ok());
    assert_eq!(response.venue, "TESTEX");
    assert_eq!(response.symbol, "FOOBAR");
    assert_eq!(response.bid, 500);
    assert_eq!(response.ask, 510);
    assert_eq!(response.bid_size, 120);
    assert_eq!(response.ask_depth, 900);
    assert_eq!(response.last_price, 505);
    assert_eq!(response.last_size, 10);
    assert_eq!(
        response.quote_time.timestamp_nanos_opt(),
        Some(1_436_765_897_336_403_920)
    );
}

#[test]
fn test_quote_without_bids_defaults_to_zero() {
    let response: Response<Quote> =
        serde_json::from_str(r#"{"ok":true,"venue":"TESTEX","symbol":"FOOBAR","ask":510}"#)
            .expect("Failed to deserialize sparse quote");

    assert_eq!(response.bid, 0);
    assert_eq!(response.bid_size, 0);
    assert_eq!(response.ask, 510);
}

#[test]
fn test_orderbook_response_deserializes() {
    let response: Response<Orderbook> =
        serde_json::from_str(ORDERBOOK_JSON).expect("Failed to deserialize orderbook");

    assert!(response.is_ok());
    assert_eq!(response.bids.len(), 2);
    assert_eq!(response.bids[0].price, 5200);
    assert_eq!(response.bids[0].qty, 1000);
    assert!(response.bids[0].is_buy);
    assert_eq!(response.asks.len(), 1);
    assert!(!response.asks[0].is_buy);
}

#[test]
fn test_order_response_deserializes() {
    let response: Response<Order> =
        serde_json::from_str(ORDER_JSON).expect("Failed to deserialize order");

    let order = response.into_inner();
    assert_eq!(order.id, 12345);
    assert_eq!(order.account, "EXB123456");
    assert_eq!(order.direction, Side::Buy);
    assert_eq!(order.order_type, OrderType::Limit);
    assert_eq!(order.original_qty, 100);
    assert_eq!(order.qty, 20);
    assert_eq!(order.total_filled, 80);
    assert!(order.open);
    assert_eq!(order.fills.len(), 2);
    assert_eq!(order.fills[1].price, 5100);
    assert_eq!(order.fills[1].qty, 30);
    assert_eq!(
        order.ts,
        Utc.with_ymd_and_hms(2015, 7, 5, 22, 16, 18).unwrap()
    );
}

#[test]
fn test_order_list_deserializes() {
    let response: Response<OrderList> =
        serde_json::from_str(ORDER_LIST_JSON).expect("Failed to deserialize order list");

    assert_eq!(response.venue, "TESTEX");
    assert_eq!(response.orders.len(), 2);
    assert_eq!(response.orders[0].order_type, OrderType::FillOrKill);
    assert_eq!(response.orders[0].direction, Side::Sell);
    assert_eq!(response.orders[1].order_type, OrderType::Market);
    // `"fills": null` decodes as an empty list.
    assert!(response.orders[1].fills.is_empty());
}

#[test]
fn test_stock_list_deserializes() {
    let response: Response<StockList> =
        serde_json::from_str(STOCKS_JSON).expect("Failed to deserialize stock list");

    let symbols: Vec<&str> = response.symbols.iter().map(|s| s.symbol.as_str()).collect();
    assert_eq!(symbols, ["FOOBAR", "BARC"]);
}

#[test]
fn test_execution_deserializes() {
    let response: Response<Execution> =
        serde_json::from_str(EXECUTION_JSON).expect("Failed to deserialize execution");

    assert!(response.is_ok());
    let execution = response.into_inner();
    assert_eq!(execution.account, "EXB123456");
    assert_eq!(execution.standing_id, 12345);
    assert_eq!(execution.incoming_id, 12346);
    assert_eq!(execution.price, 5100);
    assert_eq!(execution.filled, 100);
    assert!(execution.standing_complete);
    assert!(!execution.incoming_complete);
    assert_eq!(execution.order.id, 12345);
    assert!(!execution.order.open);
    assert_eq!(execution.order.fills.len(), 1);
}

#[test]
fn test_level_state_deserializes() {
    let response: Response<LevelState> =
        serde_json::from_str(LEVEL_JSON).expect("Failed to deserialize level state");

    assert_eq!(response.instance_id, 4321);
    assert_eq!(response.account, "BAS12345678");
    assert_eq!(response.venues, ["WOBEX"]);
    assert_eq!(response.tickers, ["HOGE"]);
    assert_eq!(response.seconds_per_trading_day, 5);
    assert_eq!(response.instructions.instructions, "Buy 100 shares of HOGE.");
    assert_eq!(
        response.instructions.order_types,
        "Limit orders rest on the book."
    );
}

#[test]
fn test_error_envelope_leaves_payload_at_default() {
    let response: Response<Quote> =
        serde_json::from_str(r#"{"ok":false,"error":"symbol not found"}"#)
            .expect("Failed to deserialize error envelope");

    assert!(!response.is_ok());
    assert_eq!(response.envelope().message, "symbol not found");
    assert_eq!(response.data, Quote::default());
}

#[test]
fn test_null_timestamps_and_numbers_decode_as_zero() {
    let message: QuoteMessage = serde_json::from_str(
        r#"{"ok":true,"quote":{"venue":"TESTEX","symbol":"FOOBAR","bid":null,"ask":510,"lastTrade":null,"quoteTime":"2015-07-13T05:38:17.33640392Z"}}"#,
    )
    .expect("null fields should not fail the message");

    assert!(message.is_ok());
    assert_eq!(message.quote.bid, 0);
    assert_eq!(message.quote.ask, 510);
    assert_eq!(message.quote.last_trade, DateTime::<Utc>::default());
    assert_eq!(message.quote.quote_time.timestamp(), 1_436_765_897);
}

#[test]
fn test_null_execution_timestamp_decodes_as_default() {
    let response: Response<Execution> = serde_json::from_str(
        r#"{"ok":true,"account":"EXB123456","filledAt":null,"order":{"id":7,"ts":null,"fills":null}}"#,
    )
    .expect("null fields should not fail the execution");

    assert_eq!(response.filled_at, DateTime::<Utc>::default());
    assert_eq!(response.order.id, 7);
    assert_eq!(response.order.ts, DateTime::<Utc>::default());
    assert!(response.order.fills.is_empty());
}
