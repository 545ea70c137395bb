// ============================================================================
// Order Priority Queue
// Binary heap over resident orders, one per book side
// ============================================================================

use crate::domain::{Order, Price, Quantity, Side};
use std::cmp::Ordering;
use std::collections::binary_heap::{BinaryHeap, PeekMut};
use std::marker::PhantomData;

/// Comparison direction for one side of the book.
///
/// Only the price direction differs between sides. Among equal prices the
/// queue always serves the lower submission sequence first.
pub trait Priority {
    /// Side whose orders this queue holds
    const SIDE: Side;

    /// `Ordering::Greater` when price `a` must be served before price `b`
    fn compare_prices(a: Price, b: Price) -> Ordering;
}

/// Highest price first (max-heap)
#[derive(Debug, Clone, Copy, Default)]
pub struct BidPriority;

impl Priority for BidPriority {
    const SIDE: Side = Side::Buy;

    fn compare_prices(a: Price, b: Price) -> Ordering {
        a.cmp(&b)
    }
}

/// Lowest price first (min-heap)
#[derive(Debug, Clone, Copy, Default)]
pub struct AskPriority;

impl Priority for AskPriority {
    const SIDE: Side = Side::Sell;

    fn compare_prices(a: Price, b: Price) -> Ordering {
        b.cmp(&a)
    }
}

// ============================================================================
// Heap Entry
// ============================================================================

#[derive(Debug)]
struct Queued<P> {
    sequence: u64,
    order: Order,
    _priority: PhantomData<P>,
}

impl<P: Priority> Ord for Queued<P> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Quantity is not part of the key; it changes in place at the top.
        P::compare_prices(self.order.price, other.order.price)
            .then_with(|| other.sequence.cmp(&self.sequence))
    }
}

impl<P: Priority> PartialOrd for Queued<P> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<P: Priority> PartialEq for Queued<P> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<P: Priority> Eq for Queued<P> {}

// ============================================================================
// Order Queue
// ============================================================================

/// Priority-ordered collection of live orders on one side of the book
#[derive(Debug)]
pub struct OrderQueue<P: Priority> {
    heap: BinaryHeap<Queued<P>>,
}

pub type BidQueue = OrderQueue<BidPriority>;
pub type AskQueue = OrderQueue<AskPriority>;

impl<P: Priority> OrderQueue<P> {
    pub fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            heap: BinaryHeap::with_capacity(capacity),
        }
    }

    /// Insert an order, O(log n).
    ///
    /// `sequence` must be strictly increasing across pushes for time
    /// priority to hold.
    pub fn push(&mut self, order: Order, sequence: u64) {
        debug_assert_eq!(order.side, P::SIDE, "order routed to the wrong side");
        debug_assert!(!order.is_exhausted(), "exhausted order pushed");

        self.heap.push(Queued {
            sequence,
            order,
            _priority: PhantomData,
        });
    }

    /// Best order without removing it, O(1)
    pub fn peek(&self) -> Option<&Order> {
        self.heap.peek().map(|queued| &queued.order)
    }

    /// Remove and return the best order, O(log n)
    pub fn pop(&mut self) -> Option<Order> {
        self.heap.pop().map(|queued| queued.order)
    }

    /// Take `quantity` lots from the best order.
    ///
    /// The order is removed as soon as it is exhausted and returned; a
    /// partially filled order stays at the top and `None` is returned.
    pub fn fill_top(&mut self, quantity: Quantity) -> Option<Order> {
        let mut top = self.heap.peek_mut()?;
        top.order.fill(quantity);

        if top.order.is_exhausted() {
            Some(PeekMut::pop(top).order)
        } else {
            None
        }
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Sum of remaining quantity across the side, widened so it cannot overflow
    pub fn total_quantity(&self) -> u128 {
        self.heap
            .iter()
            .map(|queued| u128::from(queued.order.quantity()))
            .sum()
    }

    /// Orders in the sequence the matcher would consume them, O(n log n)
    pub fn iter_priority(&self) -> impl Iterator<Item = &Order> {
        let mut entries: Vec<&Queued<P>> = self.heap.iter().collect();
        entries.sort_unstable_by(|a, b| b.cmp(a));
        entries.into_iter().map(|queued| &queued.order)
    }
}

impl<P: Priority> Default for OrderQueue<P> {
    fn default() -> Self {
        Self::new()
    }
}
