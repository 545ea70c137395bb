// ============================================================================
// Event Handler Interface
// Observability side channel for order book activity
// ============================================================================

use crate::domain::{Fill, OrderId, Price, Quantity, Side};
use chrono::{DateTime, Utc};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Events emitted by the order book
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum BookEvent {
    /// Order accepted and made resident
    OrderAdded {
        order_id: OrderId,
        side: Side,
        price: Price,
        quantity: Quantity,
        timestamp: DateTime<Utc>,
    },

    /// Order dropped without being made resident
    OrderIgnored {
        order_id: OrderId,
        reason: String,
        timestamp: DateTime<Utc>,
    },

    /// Best bid and best ask matched
    Matched { fill: Fill },

    /// Order exhausted and removed from its side
    OrderFilled {
        order_id: OrderId,
        side: Side,
        timestamp: DateTime<Utc>,
    },

    /// Indicative market price recomputed
    MarketPriceUpdated {
        best_bid: Option<Price>,
        best_ask: Option<Price>,
        market_price: Price,
        timestamp: DateTime<Utc>,
    },
}

/// Receives order book events.
/// Implementations can handle logging, metrics, test recording, etc.
pub trait EventHandler: Send + Sync {
    /// Handle an order book event
    fn on_event(&self, event: BookEvent);

    /// Batch event handler (optional optimization)
    fn on_events(&self, events: Vec<BookEvent>) {
        for event in events {
            self.on_event(event);
        }
    }
}

/// Discards every event
pub struct NoOpEventHandler;

impl EventHandler for NoOpEventHandler {
    fn on_event(&self, _event: BookEvent) {}
}

/// Writes events to `tracing`
pub struct LoggingEventHandler;

impl EventHandler for LoggingEventHandler {
    fn on_event(&self, event: BookEvent) {
        match event {
            BookEvent::OrderAdded {
                order_id,
                side,
                price,
                quantity,
                ..
            } => {
                tracing::debug!(%order_id, %side, price, quantity, "added order");
            },
            BookEvent::OrderIgnored {
                order_id, reason, ..
            } => {
                tracing::warn!(%order_id, %reason, "ignored order");
            },
            BookEvent::Matched { fill } => {
                tracing::debug!(
                    quantity = fill.quantity,
                    buy_price = fill.buy_price,
                    sell_price = fill.sell_price,
                    buy_order = %fill.buy_order_id,
                    sell_order = %fill.sell_order_id,
                    "matched order"
                );
            },
            BookEvent::OrderFilled { order_id, side, .. } => {
                tracing::trace!(%order_id, %side, "order filled");
            },
            BookEvent::MarketPriceUpdated {
                best_bid,
                best_ask,
                market_price,
                ..
            } => {
                tracing::trace!(?best_bid, ?best_ask, market_price, "market price updated");
            },
        }
    }
}


#[cfg(test)]
mod tests {
    use super::recording::RecordingEventHandler;
    use super::*;

    #[test]
    fn test_noop_handler() {
        let handler = NoOpEventHandler;
        handler.on_event(BookEvent::OrderFilled {
            order_id: OrderId::new(1),
            side: Side::Buy,
            timestamp: Utc::now(),
        });
        // Should not panic
    }

    #[test]
    fn test_logging_handler_accepts_every_variant() {
        let handler = LoggingEventHandler;
        handler.on_events(vec![
            BookEvent::OrderAdded {
                order_id: OrderId::new(1),
                side: Side::Buy,
                price: 100,
                quantity: 5,
                timestamp: Utc::now(),
            },
            BookEvent::Matched {
                fill: Fill::new(OrderId::new(1), OrderId::new(2), 100, 99, 5),
            },
            BookEvent::MarketPriceUpdated {
                best_bid: None,
                best_ask: None,
                market_price: 0,
                timestamp: Utc::now(),
            },
        ]);
    }

    #[test]
    fn test_batch_dispatch_preserves_order() {
        let handler = RecordingEventHandler::default();
        let first = BookEvent::OrderFilled {
            order_id: OrderId::new(1),
            side: Side::Sell,
            timestamp: Utc::now(),
        };
        let second = BookEvent::Matched {
            fill: Fill::new(OrderId::new(2), OrderId::new(1), 10, 10, 1),
        };

        handler.on_events(vec![first.clone(), second.clone()]);

        assert_eq!(handler.events(), vec![first, second]);
        assert_eq!(handler.fills().len(), 1);
    }
}
