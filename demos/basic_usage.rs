// ============================================================================
// Basic Usage Example
// ============================================================================

use double_auction::prelude::*;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
        )
        .init();

    println!("=== Double Auction Example ===\n");

    let mut book = OrderBookBuilder::new("demo")
        .with_event_handler(Arc::new(LoggingEventHandler))
        .build()
        .expect("demo configuration is valid");

    println!("Adding orders...");
    book.add_order(Order::buy(1, 100, 5));
    book.add_order(Order::buy(2, 110, 7));
    book.add_order(Order::sell(3, 105, 3));
    book.add_order(Order::buy(4, 98, 8));
    book.add_order(Order::sell(5, 106, 4));

    let snapshot = book.snapshot(5);
    println!("\nBids:");
    for entry in &snapshot.bids {
        println!("  {} {} @ {}", entry.order_id, entry.quantity, entry.price);
    }
    println!("\nAsks:");
    for entry in &snapshot.asks {
        println!("  {} {} @ {}", entry.order_id, entry.quantity, entry.price);
    }
    println!("\nMarket price before matching: {}", book.market_price());

    println!("\n=== Matching ===");
    for fill in book.match_orders() {
        println!(
            "  Matched order: Buy {} @ {} with Sell {} @ {}",
            fill.quantity, fill.buy_price, fill.quantity, fill.sell_price
        );
    }

    println!("\nIndicative Market Price: {}", book.market_price());
}
