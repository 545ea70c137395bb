// ============================================================================
// Fill Domain Model
// ============================================================================

use chrono::{DateTime, Utc};
use smallvec::SmallVec;

use super::{OrderId, Price, Quantity};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Fills produced by a single matching pass; most passes yield only a few
pub type Fills = SmallVec<[Fill; 4]>;

/// One matched bid/ask pair from a matching pass.
///
/// The book does not pick a single execution price. Both legs' limit prices
/// are carried so that the caller can apply its own pricing policy
/// (ask price, resting-order price, midpoint, ...).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Fill {
    /// Buy order that took part in the match
    pub buy_order_id: OrderId,

    /// Sell order that took part in the match
    pub sell_order_id: OrderId,

    /// Limit price of the buy leg
    pub buy_price: Price,

    /// Limit price of the sell leg
    pub sell_price: Price,

    /// Lots exchanged, `min(bid quantity, ask quantity)` at match time
    pub quantity: Quantity,

    /// Match timestamp
    pub timestamp: DateTime<Utc>,
}

impl Fill {
    pub fn new(
        buy_order_id: OrderId,
        sell_order_id: OrderId,
        buy_price: Price,
        sell_price: Price,
        quantity: Quantity,
    ) -> Self {
        Self {
            buy_order_id,
            sell_order_id,
            buy_price,
            sell_price,
            quantity,
            timestamp: Utc::now(),
        }
    }

    /// Price improvement available between the two legs (never negative for a valid fill)
    pub fn price_gap(&self) -> Price {
        self.buy_price.saturating_sub(self.sell_price)
    }

    /// Notional at the sell leg's price
    pub fn notional_at_sell_price(&self) -> u128 {
        u128::from(self.sell_price) * u128::from(self.quantity)
    }
}
