//! Stockfighter trading simulation API client library.
//!
//! An [`Instance`] carries the API key and the current trading context
//! (account, venue, symbol). REST operations are async methods on it that
//! always return a value and record failures in the instance's
//! [`ErrorBox`]; WebSocket streams are background [`Subscription`]s feeding
//! a queue.
//!
//! ```no_run
//! # async fn demo() -> stockfighter::Result<()> {
//! let instance = stockfighter::Instance::with_context("key", "EXB123456", "TESTEX", "FOOBAR")?;
//! let quote = instance.quote().await;
//! match instance.last_error() {
//!     Some(err) => eprintln!("quote failed: {err}"),
//!     None => println!("bid {} ask {}", quote.bid, quote.ask),
//! }
//! # Ok(())
//! # }
//! ```

pub mod auth;
pub mod config;
pub mod error;
pub mod error_box;
pub mod instance;
pub mod models;
mod rest;
pub mod session;
pub mod websocket;

pub use config::Config;
pub use error::{Result, StockfighterError};
pub use error_box::ErrorBox;
pub use instance::Instance;
pub use session::TradingContext;
pub use websocket::{StopHandle, Subscription, SubscriptionState};
