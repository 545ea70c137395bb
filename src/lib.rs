// ============================================================================
// Double Auction Library
// Continuous double-auction order book with price/time priority matching
// ============================================================================

//! # Double Auction
//!
//! A single-instrument limit order book that collects buy and sell orders,
//! matches them when they cross, and derives an indicative market price.
//!
//! ## Features
//!
//! - **Price/time priority**: bids highest-first, asks lowest-first, earlier
//!   submissions first within a price
//! - **Explicit matching phase**: orders accumulate until
//!   [`OrderBook::match_orders`](engine::OrderBook::match_orders) runs, or
//!   match on submission with `auto_match`
//! - **Indicative market price**: truncating midpoint of best bid and ask,
//!   one-sided best price, or 0 for an empty book
//! - **Event handler** side channel for logging and observability
//!
//! ## Example
//!
//! ```rust
//! use double_auction::prelude::*;
//! use std::sync::Arc;
//!
//! let mut book = OrderBook::with_handler(Arc::new(NoOpEventHandler));
//!
//! book.add_order(Order::buy(1, 100, 5));
//! book.add_order(Order::buy(2, 110, 7));
//! book.add_order(Order::sell(3, 105, 3));
//! book.add_order(Order::buy(4, 98, 8));
//! book.add_order(Order::sell(5, 106, 4));
//! assert_eq!(book.market_price(), 107);
//!
//! let fills = book.match_orders();
//! assert_eq!(fills.len(), 2);
//! assert_eq!(book.market_price(), 100);
//! ```

pub mod domain;
pub mod engine;
pub mod interfaces;

// Re-exports for convenience
pub mod prelude {
    pub use crate::domain::{
        BookEntry, Fill, Fills, Order, OrderBookConfig, OrderBookError, OrderBookResult,
        OrderBookSnapshot, OrderId, Price, Quantity, Side,
    };
    pub use crate::engine::{create_from_config, OrderBook, OrderBookBuilder, SharedOrderBook};
    pub use crate::interfaces::{BookEvent, EventHandler, LoggingEventHandler, NoOpEventHandler};
}
