// ============================================================================
// Order Domain Model
// ============================================================================

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Price in integer ticks. Compared exactly, never as floating point.
pub type Price = u64;

/// Quantity in integer lots.
pub type Quantity = u64;

// ============================================================================
// Value Objects
// ============================================================================

/// Caller-supplied order identity, unique per submission
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct OrderId(u64);

impl OrderId {
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    pub const fn value(&self) -> u64 {
        self.0
    }
}

impl From<u64> for OrderId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Side {
    Buy,
    Sell,
}

impl Side {
    pub fn opposite(&self) -> Side {
        match self {
            Side::Buy => Side::Sell,
            Side::Sell => Side::Buy,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Buy => write!(f, "BUY"),
            Side::Sell => write!(f, "SELL"),
        }
    }
}

// ============================================================================
// Order Entity
// ============================================================================

/// A limit order resting in (or submitted to) the book.
///
/// `side`, `price` and `id` are fixed at creation. Only the book mutates
/// `quantity`, and only downwards while matching.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Order {
    pub id: OrderId,
    pub side: Side,
    pub price: Price,
    quantity: Quantity,
}

impl Order {
    pub fn new(id: u64, side: Side, price: Price, quantity: Quantity) -> Self {
        Self {
            id: OrderId(id),
            side,
            price,
            quantity,
        }
    }

    /// Shorthand for a buy order
    pub fn buy(id: u64, price: Price, quantity: Quantity) -> Self {
        Self::new(id, Side::Buy, price, quantity)
    }

    /// Shorthand for a sell order
    pub fn sell(id: u64, price: Price, quantity: Quantity) -> Self {
        Self::new(id, Side::Sell, price, quantity)
    }

    pub fn quantity(&self) -> Quantity {
        self.quantity
    }

    pub fn is_exhausted(&self) -> bool {
        self.quantity == 0
    }

    /// Whether this order can trade against a resting order priced at `price`
    pub fn crosses(&self, price: Price) -> bool {
        match self.side {
            Side::Buy => self.price >= price,
            Side::Sell => self.price <= price,
        }
    }

    /// Consume up to `quantity` lots and return how many were taken
    pub(crate) fn fill(&mut self, quantity: Quantity) -> Quantity {
        let taken = quantity.min(self.quantity);
        self.quantity -= taken;
        taken
    }
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} @ {}",
            self.id, self.side, self.quantity, self.price
        )
    }
}
