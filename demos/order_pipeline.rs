//! # Example: order_pipeline
//!
//! An order service publishing `order.created` to three independent handlers
//! (trait impls and a [`LogHandler`]) wired through [`Dispatcher::builder`].
//!
//! Shows how to:
//! - Implement the [`Handler`] trait and read a typed payload.
//! - Share one `Arc<Dispatcher>` between collaborators.
//! - Rely on dispatch returning only after every handler signaled completion.
//!
//! ## Run
//! ```bash
//! RUST_LOG=info cargo run --example order_pipeline
//! ```

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use handlervisor::{Config, Dispatcher, Done, Event, EventRecord, Handler, HandlerRef, LogHandler};
use tracing_subscriber::EnvFilter;

/// Payload carried by `order.created`.
#[derive(Debug)]
struct OrderCreated {
    id: u64,
    total_cents: u64,
}

/// Sends a confirmation mail (simulated latency).
struct Mailer;

#[async_trait]
impl Handler for Mailer {
    async fn handle(&self, event: Arc<dyn Event>, done: Done) {
        if let Some(order) = event.payload_as::<OrderCreated>() {
            tokio::time::sleep(Duration::from_millis(50)).await;
            println!("[mailer] confirmation sent for order #{}", order.id);
        }
        done.done();
    }

    fn name(&self) -> &'static str {
        "mailer"
    }
}

/// Accumulates revenue across dispatches.
#[derive(Default)]
struct Revenue {
    cents: AtomicU64,
}

#[async_trait]
impl Handler for Revenue {
    async fn handle(&self, event: Arc<dyn Event>, done: Done) {
        if let Some(order) = event.payload_as::<OrderCreated>() {
            self.cents.fetch_add(order.total_cents, Ordering::Relaxed);
        }
        done.done();
    }

    fn name(&self) -> &'static str {
        "revenue"
    }
}

/// Publisher side: owns a handle to the shared dispatcher.
struct OrderService {
    events: Arc<Dispatcher>,
    next_id: AtomicU64,
}

impl OrderService {
    async fn create(&self, total_cents: u64) {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let ev = EventRecord::new("order.created").with_payload(OrderCreated { id, total_cents });
        self.events.dispatch(ev).await;
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let revenue = Arc::new(Revenue::default());
    let revenue_ref: HandlerRef = revenue.clone();

    let dispatcher = Arc::new(
        Dispatcher::builder(Config::default())
            .with_handler("order.created", Arc::new(Mailer))
            .with_handler("order.created", revenue_ref)
            .with_handler("order.created", Arc::new(LogHandler::new()))
            .build()?,
    );

    let orders = OrderService {
        events: Arc::clone(&dispatcher),
        next_id: AtomicU64::new(1),
    };

    for total in [1_250, 9_900, 480] {
        orders.create(total).await;
    }

    // Every dispatch joined, so the total is final here.
    println!(
        "[main] revenue: {} cents over {:?}",
        revenue.cents.load(Ordering::Relaxed),
        dispatcher.names()
    );
    Ok(())
}
