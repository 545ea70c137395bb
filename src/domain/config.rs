// ============================================================================
// Order Book Configuration
// ============================================================================

use super::error::{OrderBookError, OrderBookResult};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Default number of orders preallocated per side
pub const DEFAULT_INITIAL_CAPACITY: usize = 64;

/// Configuration for creating an order book.
///
/// Duplicate-id tracking lasts the whole session: the book remembers every
/// accepted order id, filled or not, so memory grows with total submissions.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct OrderBookConfig {
    /// Label attached to log output (e.g., "BTC-USD", "session-1")
    pub name: String,

    /// Orders preallocated per side
    pub initial_capacity: usize,

    /// Run a matching pass after every accepted order.
    ///
    /// Off by default: orders accumulate until `match_orders` is called,
    /// even when they already cross.
    pub auto_match: bool,
}

impl OrderBookConfig {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            initial_capacity: DEFAULT_INITIAL_CAPACITY,
            auto_match: false,
        }
    }

    /// Builder method: Set per-side preallocation
    pub fn with_initial_capacity(mut self, capacity: usize) -> Self {
        self.initial_capacity = capacity;
        self
    }

    /// Builder method: Match on every submission
    pub fn with_auto_match(mut self, auto_match: bool) -> Self {
        self.auto_match = auto_match;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> OrderBookResult<()> {
        if self.name.trim().is_empty() {
            return Err(OrderBookError::InvalidConfig(
                "name cannot be empty".to_string(),
            ));
        }

        Ok(())
    }
}

impl Default for OrderBookConfig {
    fn default() -> Self {
        Self::new("default")
    }
}

// ============================================================================
// Preset Configurations
// ============================================================================

impl OrderBookConfig {
    /// Call auction style: orders collect, matching is an explicit phase
    pub fn call_auction(name: impl Into<String>) -> Self {
        Self::new(name)
    }

    /// Continuous style: every submission is matched immediately
    pub fn continuous(name: impl Into<String>) -> Self {
        Self::new(name).with_auto_match(true)
    }
}
