// ============================================================================
// Order Book Factory
// Creates order books with validated configuration
// ============================================================================

use crate::domain::{OrderBookConfig, OrderBookResult};
use crate::engine::{OrderBook, SharedOrderBook};
use crate::interfaces::{EventHandler, LoggingEventHandler};
use std::sync::Arc;

/// Creates an order book from configuration
///
/// # Example
/// ```
/// use double_auction::prelude::*;
/// use double_auction::engine::factory::create_from_config;
/// use std::sync::Arc;
///
/// let config = OrderBookConfig::call_auction("session-1");
/// let book = create_from_config(config, Arc::new(NoOpEventHandler)).unwrap();
/// assert_eq!(book.market_price(), 0);
/// ```
pub fn create_from_config(
    config: OrderBookConfig,
    event_handler: Arc<dyn EventHandler>,
) -> OrderBookResult<OrderBook> {
    config.validate()?;
    Ok(OrderBook::from_config(config, event_handler))
}

// ============================================================================
// Builder Pattern
// ============================================================================

/// Builder for creating order books with fluent API
///
/// # Example
/// ```
/// use double_auction::prelude::*;
///
/// let mut book = OrderBookBuilder::new("BTC-USD")
///     .with_initial_capacity(1_024)
///     .continuous_matching()
///     .with_event_handler(std::sync::Arc::new(NoOpEventHandler))
///     .build()
///     .unwrap();
///
/// book.add_order(Order::sell(1, 50_000, 2));
/// book.add_order(Order::buy(2, 50_010, 1));
/// assert_eq!(book.best_ask().map(|o| o.quantity()), Some(1));
/// ```
pub struct OrderBookBuilder {
    config: OrderBookConfig,
    event_handler: Option<Arc<dyn EventHandler>>,
}

impl OrderBookBuilder {
    /// Create a new builder; the name labels log output
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            config: OrderBookConfig::new(name),
            event_handler: None,
        }
    }

    /// Start from an existing configuration
    pub fn from_config(config: OrderBookConfig) -> Self {
        Self {
            config,
            event_handler: None,
        }
    }

    /// Orders accumulate until `match_orders` is called (default)
    pub fn call_auction_matching(mut self) -> Self {
        self.config.auto_match = false;
        self
    }

    /// Every accepted order triggers a matching pass
    pub fn continuous_matching(mut self) -> Self {
        self.config.auto_match = true;
        self
    }

    pub fn with_initial_capacity(mut self, capacity: usize) -> Self {
        self.config.initial_capacity = capacity;
        self
    }

    /// Defaults to [`LoggingEventHandler`]
    pub fn with_event_handler(mut self, handler: Arc<dyn EventHandler>) -> Self {
        self.event_handler = Some(handler);
        self
    }

    pub fn config(&self) -> &OrderBookConfig {
        &self.config
    }

    pub fn build(self) -> OrderBookResult<OrderBook> {
        let handler = self
            .event_handler
            .unwrap_or_else(|| Arc::new(LoggingEventHandler));
        create_from_config(self.config, handler)
    }

    /// Build and wrap in a lock for shared use
    pub fn build_shared(self) -> OrderBookResult<SharedOrderBook> {
        self.build().map(SharedOrderBook::new)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Order, OrderBookError};
    use crate::interfaces::NoOpEventHandler;

    #[test]
    fn test_create_from_config() {
        let book = create_from_config(
            OrderBookConfig::call_auction("open"),
            Arc::new(NoOpEventHandler),
        )
        .unwrap();

        assert_eq!(book.config().name, "open");
        assert!(!book.config().auto_match);
    }

    #[test]
    fn test_invalid_config_rejected() {
        let result = create_from_config(OrderBookConfig::new(""), Arc::new(NoOpEventHandler));
        assert!(matches!(result, Err(OrderBookError::InvalidConfig(_))));
    }

    #[test]
    fn test_builder_fluent_api() {
        let builder = OrderBookBuilder::new("ETH-USD")
            .with_initial_capacity(16)
            .continuous_matching();

        assert!(builder.config().auto_match);
        assert_eq!(builder.config().initial_capacity, 16);

        let builder = builder.call_auction_matching();
        assert!(!builder.config().auto_match);
    }

    #[test]
    fn test_builder_default_handler() {
        let mut book = OrderBookBuilder::new("logged").build().unwrap();
        book.add_order(Order::buy(1, 10, 1));
        assert_eq!(book.market_price(), 10);
    }

    #[test]
    fn test_build_shared() {
        let shared = OrderBookBuilder::from_config(OrderBookConfig::continuous("shared"))
            .with_event_handler(Arc::new(NoOpEventHandler))
            .build_shared()
            .unwrap();

        shared.add_order(Order::sell(1, 100, 1));
        shared.add_order(Order::buy(2, 100, 1));
        assert_eq!(shared.market_price(), 0);
    }
}
