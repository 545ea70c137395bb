// ============================================================================
// Shared Order Book
// One exclusive lock around the whole book
// ============================================================================

use crate::domain::{Fills, Order, OrderBookResult, OrderBookSnapshot, Price};
use crate::engine::OrderBook;
use parking_lot::Mutex;
use std::sync::Arc;

/// Cloneable handle that serialises every call on a single [`OrderBook`].
///
/// A matching pass holds the lock for its whole duration, so orders
/// submitted from other threads land either before or after a pass,
/// never in the middle of one.
#[derive(Debug, Clone)]
pub struct SharedOrderBook {
    inner: Arc<Mutex<OrderBook>>,
}

impl SharedOrderBook {
    pub fn new(book: OrderBook) -> Self {
        Self {
            inner: Arc::new(Mutex::new(book)),
        }
    }

    pub fn add_order(&self, order: Order) {
        self.inner.lock().add_order(order);
    }

    pub fn try_add_order(&self, order: Order) -> OrderBookResult<()> {
        self.inner.lock().try_add_order(order)
    }

    pub fn match_orders(&self) -> Fills {
        self.inner.lock().match_orders()
    }

    pub fn market_price(&self) -> Price {
        self.inner.lock().market_price()
    }

    pub fn snapshot(&self, depth: usize) -> OrderBookSnapshot {
        self.inner.lock().snapshot(depth)
    }

    /// Run `f` with exclusive access, for multi-step reads or updates
    pub fn with_book<R>(&self, f: impl FnOnce(&mut OrderBook) -> R) -> R {
        f(&mut self.inner.lock())
    }
}

impl From<OrderBook> for SharedOrderBook {
    fn from(book: OrderBook) -> Self {
        Self::new(book)
    }
}
