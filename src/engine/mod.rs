// ============================================================================
// Engine Module
// Contains the order book and its matching logic
// ============================================================================

mod order_book;
mod shared;

pub mod factory;
pub mod priority_queue;

pub use factory::{create_from_config, OrderBookBuilder};
pub use order_book::OrderBook;
pub use priority_queue::{AskPriority, AskQueue, BidPriority, BidQueue, OrderQueue, Priority};
pub use shared::SharedOrderBook;
