// ============================================================================
// Domain Models Module
// Contains all core domain entities and value objects
// ============================================================================

pub mod config;
pub mod error;
pub mod order;
pub mod order_book;
pub mod trade;

pub use config::OrderBookConfig;
pub use error::{OrderBookError, OrderBookResult};
pub use order::{Order, OrderId, Price, Quantity, Side};
pub use order_book::{BookEntry, OrderBookSnapshot};
pub use trade::{Fill, Fills};
