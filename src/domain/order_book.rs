// ============================================================================
// Order Book Snapshot
// ============================================================================

use super::{Order, OrderId, Price, Quantity};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One resident order as seen in a snapshot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BookEntry {
    pub order_id: OrderId,
    pub price: Price,
    pub quantity: Quantity,
}

impl From<&Order> for BookEntry {
    fn from(order: &Order) -> Self {
        Self {
            order_id: order.id,
            price: order.price,
            quantity: order.quantity(),
        }
    }
}

/// Immutable view of the book, each side in priority order
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct OrderBookSnapshot {
    /// Bids, best (highest, then earliest) first
    pub bids: Vec<BookEntry>,
    /// Asks, best (lowest, then earliest) first
    pub asks: Vec<BookEntry>,
    /// Indicative market price at snapshot time (0 = no market)
    pub market_price: Price,
}

impl OrderBookSnapshot {
    pub fn best_bid(&self) -> Option<Price> {
        self.bids.first().map(|entry| entry.price)
    }

    pub fn best_ask(&self) -> Option<Price> {
        self.asks.first().map(|entry| entry.price)
    }

    /// Best ask minus best bid; negative or zero means the book crosses
    pub fn spread(&self) -> Option<i128> {
        match (self.best_bid(), self.best_ask()) {
            (Some(bid), Some(ask)) => Some(i128::from(ask) - i128::from(bid)),
            _ => None,
        }
    }

    pub fn total_bid_quantity(&self) -> u128 {
        self.bids.iter().map(|entry| u128::from(entry.quantity)).sum()
    }

    pub fn total_ask_quantity(&self) -> u128 {
        self.asks.iter().map(|entry| u128::from(entry.quantity)).sum()
    }
}
