// ============================================================================
// Order Book
// Continuous double auction: order intake, matching, market price
// ============================================================================

use crate::domain::{
    BookEntry, Fill, Fills, Order, OrderBookConfig, OrderBookError, OrderBookResult,
    OrderBookSnapshot, OrderId, Price, Quantity, Side,
};
use crate::engine::priority_queue::{AskQueue, BidQueue};
use crate::interfaces::{BookEvent, EventHandler, LoggingEventHandler};
use chrono::Utc;
use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;

/// Two-sided limit order book with price/time priority.
///
/// Orders accumulate through [`OrderBook::add_order`] and only trade when
/// [`OrderBook::match_orders`] runs (unless the book was configured with
/// `auto_match`). The book has no internal locking; wrap it in
/// [`SharedOrderBook`](crate::engine::SharedOrderBook) to share it.
pub struct OrderBook {
    config: OrderBookConfig,

    /// Live buy orders, highest price first
    bids: BidQueue,

    /// Live sell orders, lowest price first
    asks: AskQueue,

    /// Derived from best bid / best ask, 0 when both sides are empty
    market_price: Price,

    /// Submission counter used as the time-priority tie-break
    next_sequence: u64,

    /// Every id accepted this session, filled or not; grows with total
    /// submissions rather than resident orders. Read by `try_add_order`.
    submitted: HashSet<OrderId>,

    event_handler: Arc<dyn EventHandler>,
}

impl OrderBook {
    /// Empty book with default configuration, logging through `tracing`
    pub fn new() -> Self {
        Self::with_handler(Arc::new(LoggingEventHandler))
    }

    pub fn with_handler(event_handler: Arc<dyn EventHandler>) -> Self {
        Self::from_config(OrderBookConfig::default(), event_handler)
    }

    pub fn from_config(config: OrderBookConfig, event_handler: Arc<dyn EventHandler>) -> Self {
        Self {
            bids: BidQueue::with_capacity(config.initial_capacity),
            asks: AskQueue::with_capacity(config.initial_capacity),
            submitted: HashSet::with_capacity(config.initial_capacity.saturating_mul(2)),
            config,
            market_price: 0,
            next_sequence: 0,
            event_handler,
        }
    }

    // ========================================================================
    // Order Intake
    // ========================================================================

    /// Add an order to its side of the book and refresh the market price.
    ///
    /// Orders are expected to carry a positive quantity. A zero-quantity
    /// order is reported through the event handler and dropped.
    pub fn add_order(&mut self, order: Order) {
        if order.is_exhausted() {
            self.event_handler.on_event(BookEvent::OrderIgnored {
                order_id: order.id,
                reason: "zero quantity".to_string(),
                timestamp: Utc::now(),
            });
            return;
        }

        self.accept(order);
    }

    /// Validating variant of [`OrderBook::add_order`]
    pub fn try_add_order(&mut self, order: Order) -> OrderBookResult<()> {
        self.validate_order(&order)?;
        self.accept(order);
        Ok(())
    }

    // ========================================================================
    // Matching
    // ========================================================================

    /// Match the best bid against the best ask until the book no longer
    /// crosses or one side is empty.
    ///
    /// Each round trades `min(bid, ask)` lots; exhausted orders leave the
    /// book immediately. Returns the fills of this pass in execution order.
    pub fn match_orders(&mut self) -> Fills {
        let mut fills = Fills::new();
        let mut events = Vec::new();

        loop {
            let (Some(bid), Some(ask)) = (self.bids.peek(), self.asks.peek()) else {
                break;
            };

            if !bid.crosses(ask.price) {
                break;
            }

            let quantity = bid.quantity().min(ask.quantity());
            let fill = Fill::new(bid.id, ask.id, bid.price, ask.price, quantity);
            events.push(BookEvent::Matched { fill: fill.clone() });

            if let Some(filled) = self.bids.fill_top(quantity) {
                events.push(Self::filled_event(&filled));
            }

            if let Some(filled) = self.asks.fill_top(quantity) {
                events.push(Self::filled_event(&filled));
                self.update_market_price(&mut events);
            }

            fills.push(fill);
        }

        // Covers exhausted bids and passes that removed no ask
        self.update_market_price(&mut events);

        tracing::debug!(
            book = %self.config.name,
            fills = fills.len(),
            traded = fills.iter().map(|fill| fill.quantity).sum::<Quantity>(),
            market_price = self.market_price,
            "matching pass complete"
        );

        self.event_handler.on_events(events);
        fills
    }

    // ========================================================================
    // Market Price
    // ========================================================================

    /// Indicative market price; 0 means there is no market
    pub fn market_price(&self) -> Price {
        self.market_price
    }

    /// Indicative market price, `None` when both sides are empty
    pub fn indicative_price(&self) -> Option<Price> {
        (self.market_price != 0).then_some(self.market_price)
    }

    /// Midpoint of best bid and best ask (truncating), the one present
    /// side's best price, or 0 when neither side has orders
    pub fn derive_market_price(best_bid: Option<Price>, best_ask: Option<Price>) -> Price {
        match (best_bid, best_ask) {
            (Some(bid), Some(ask)) => bid.midpoint(ask),
            (Some(bid), None) => bid,
            (None, Some(ask)) => ask,
            (None, None) => 0,
        }
    }

    // ========================================================================
    // Queries
    // ========================================================================

    pub fn best_bid(&self) -> Option<&Order> {
        self.bids.peek()
    }

    pub fn best_ask(&self) -> Option<&Order> {
        self.asks.peek()
    }

    /// Best ask minus best bid; zero or negative means the book crosses
    pub fn spread(&self) -> Option<i128> {
        match (self.bids.peek(), self.asks.peek()) {
            (Some(bid), Some(ask)) => Some(i128::from(ask.price) - i128::from(bid.price)),
            _ => None,
        }
    }

    pub fn bid_count(&self) -> usize {
        self.bids.len()
    }

    pub fn ask_count(&self) -> usize {
        self.asks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bids.is_empty() && self.asks.is_empty()
    }

    /// Remaining bid quantity, as `u128` so large books cannot overflow
    pub fn total_bid_quantity(&self) -> u128 {
        self.bids.total_quantity()
    }

    pub fn total_ask_quantity(&self) -> u128 {
        self.asks.total_quantity()
    }

    /// Resident orders on one side in priority order
    pub fn orders(&self, side: Side) -> Vec<&Order> {
        match side {
            Side::Buy => self.bids.iter_priority().collect(),
            Side::Sell => self.asks.iter_priority().collect(),
        }
    }

    /// Top `depth` orders per side in priority order
    pub fn snapshot(&self, depth: usize) -> OrderBookSnapshot {
        OrderBookSnapshot {
            bids: self.bids.iter_priority().take(depth).map(BookEntry::from).collect(),
            asks: self.asks.iter_priority().take(depth).map(BookEntry::from).collect(),
            market_price: self.market_price,
        }
    }

    pub fn config(&self) -> &OrderBookConfig {
        &self.config
    }

    // ========================================================================
    // Private methods
    // ========================================================================

    fn accept(&mut self, order: Order) {
        let sequence = self.next_sequence;
        self.next_sequence += 1;
        self.submitted.insert(order.id);

        let mut events = vec![BookEvent::OrderAdded {
            order_id: order.id,
            side: order.side,
            price: order.price,
            quantity: order.quantity(),
            timestamp: Utc::now(),
        }];

        match order.side {
            Side::Buy => self.bids.push(order, sequence),
            Side::Sell => self.asks.push(order, sequence),
        }

        self.update_market_price(&mut events);
        self.event_handler.on_events(events);

        if self.config.auto_match {
            self.match_orders();
        }
    }

    fn update_market_price(&mut self, events: &mut Vec<BookEvent>) {
        let best_bid = self.bids.peek().map(|order| order.price);
        let best_ask = self.asks.peek().map(|order| order.price);
        self.market_price = Self::derive_market_price(best_bid, best_ask);

        events.push(BookEvent::MarketPriceUpdated {
            best_bid,
            best_ask,
            market_price: self.market_price,
            timestamp: Utc::now(),
        });
    }

    fn filled_event(order: &Order) -> BookEvent {
        BookEvent::OrderFilled {
            order_id: order.id,
            side: order.side,
            timestamp: Utc::now(),
        }
    }

    fn validate_order(&self, order: &Order) -> OrderBookResult<()> {
        if order.is_exhausted() {
            return Err(OrderBookError::ZeroQuantity(order.id));
        }

        if order.price == 0 {
            return Err(OrderBookError::ZeroPrice(order.id));
        }

        if self.submitted.contains(&order.id) {
            return Err(OrderBookError::DuplicateOrderId(order.id));
        }

        Ok(())
    }
}

impl Default for OrderBook {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for OrderBook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OrderBook")
            .field("config", &self.config)
            .field("bids", &self.bids)
            .field("asks", &self.asks)
            .field("market_price", &self.market_price)
            .field("next_sequence", &self.next_sequence)
            .finish_non_exhaustive()
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::interfaces::NoOpEventHandler;
    use proptest::prelude::*;

    fn order_strategy() -> impl Strategy<Value = (bool, Price, Quantity)> {
        (any::<bool>(), 1u64..200, 1u64..50)
    }

    fn build(orders: &[(bool, Price, Quantity)]) -> OrderBook {
        let mut book = OrderBook::with_handler(Arc::new(NoOpEventHandler));
        for (i, &(is_buy, price, quantity)) in orders.iter().enumerate() {
            let side = if is_buy { Side::Buy } else { Side::Sell };
            book.add_order(Order::new(i as u64, side, price, quantity));
        }
        book
    }

    fn assert_resident_invariants(book: &OrderBook) -> Result<(), TestCaseError> {
        for order in book.orders(Side::Buy) {
            prop_assert_eq!(order.side, Side::Buy);
            prop_assert!(order.quantity() > 0);
        }
        for order in book.orders(Side::Sell) {
            prop_assert_eq!(order.side, Side::Sell);
            prop_assert!(order.quantity() > 0);
        }
        Ok(())
    }

    proptest! {
        #[test]
        fn prop_matching_invariants(orders in prop::collection::vec(order_strategy(), 0..60)) {
            let mut book = build(&orders);
            assert_resident_invariants(&book)?;

            let before = book.total_bid_quantity() + book.total_ask_quantity();
            let fills = book.match_orders();
            let after = book.total_bid_quantity() + book.total_ask_quantity();
            let traded: Quantity = fills.iter().map(|fill| fill.quantity).sum();

            assert_resident_invariants(&book)?;
            prop_assert_eq!(before - after, 2 * u128::from(traded));

            for fill in &fills {
                prop_assert!(fill.quantity > 0);
                prop_assert!(fill.buy_price >= fill.sell_price);
            }

            if let (Some(bid), Some(ask)) = (book.best_bid(), book.best_ask()) {
                prop_assert!(bid.price < ask.price);
            }

            let expected = OrderBook::derive_market_price(
                book.best_bid().map(|o| o.price),
                book.best_ask().map(|o| o.price),
            );
            prop_assert_eq!(book.market_price(), expected);
        }

        #[test]
        fn prop_second_pass_changes_nothing(orders in prop::collection::vec(order_strategy(), 0..60)) {
            let mut book = build(&orders);
            book.match_orders();
            let snapshot = book.snapshot(usize::MAX);

            prop_assert!(book.match_orders().is_empty());
            prop_assert_eq!(book.snapshot(usize::MAX), snapshot);
        }

        #[test]
        fn prop_priority_order_is_price_then_time(orders in prop::collection::vec(order_strategy(), 0..60)) {
            let book = build(&orders);

            let bids = book.orders(Side::Buy);
            for pair in bids.windows(2) {
                prop_assert!(
                    pair[0].price > pair[1].price
                        || (pair[0].price == pair[1].price && pair[0].id < pair[1].id)
                );
            }

            let asks = book.orders(Side::Sell);
            for pair in asks.windows(2) {
                prop_assert!(
                    pair[0].price < pair[1].price
                        || (pair[0].price == pair[1].price && pair[0].id < pair[1].id)
                );
            }
        }
    }

    #[test]
    fn quickcheck_market_price_formula() {
        fn midpoint_matches(bid: u32, ask: u32) -> bool {
            let (bid, ask) = (u64::from(bid), u64::from(ask));
            OrderBook::derive_market_price(Some(bid), Some(ask)) == (bid + ask) / 2
        }

        fn one_sided(price: u64) -> bool {
            OrderBook::derive_market_price(Some(price), None) == price
                && OrderBook::derive_market_price(None, Some(price)) == price
        }

        quickcheck::quickcheck(midpoint_matches as fn(u32, u32) -> bool);
        quickcheck::quickcheck(one_sided as fn(u64) -> bool);
    }
}
