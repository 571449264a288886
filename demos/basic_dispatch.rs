//! # Example: basic_dispatch
//!
//! Minimal register / dispatch / remove round with two closure handlers.
//!
//! Demonstrates how to:
//! - Define handlers with [`HandlerFn`].
//! - Register them under one event name and see the duplicate check.
//! - Dispatch an event and observe that the call joins on both handlers.
//!
//! ## Flow
//! ```text
//! register("greeting", hello)   ─► Ok
//! register("greeting", shout)   ─► Ok
//! register("greeting", hello)   ─► Err(DuplicateRegistration)
//! dispatch("greeting")          ─► hello + shout run concurrently ─► join
//! remove("greeting", hello)
//! dispatch("greeting")          ─► shout only
//! dispatch("unknown")           ─► no-op
//! ```
//!
//! ## Run
//! ```bash
//! RUST_LOG=handlervisor=debug cargo run --example basic_dispatch
//! ```

use std::sync::Arc;
use std::time::Duration;

use handlervisor::{Dispatcher, Done, Event, EventRecord, HandlerFn, HandlerRef};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // 1. Explicitly constructed dispatcher (no global instance)
    let dispatcher = Dispatcher::new();

    // 2. Two handlers; the slow one finishes last but started first
    let hello: HandlerRef = HandlerFn::arc("hello", |ev: Arc<dyn Event>, done: Done| async move {
        tokio::time::sleep(Duration::from_millis(200)).await;
        println!("[hello] {}", ev.name());
        done.done();
    });
    let shout: HandlerRef = HandlerFn::arc("shout", |ev: Arc<dyn Event>, done: Done| async move {
        println!("[shout] {}!", ev.name().to_uppercase());
        done.done();
    });

    // 3. Register; the second attempt for `hello` is rejected
    dispatcher.register("greeting", Arc::clone(&hello))?;
    dispatcher.register("greeting", Arc::clone(&shout))?;
    if let Err(e) = dispatcher.register("greeting", Arc::clone(&hello)) {
        println!("[main] rejected: {} ({})", e, e.as_label());
    }

    // 4. Dispatch joins on both handlers
    dispatcher.dispatch(EventRecord::new("greeting")).await;
    println!("[main] first dispatch joined");

    // 5. Remove one handler and dispatch again
    dispatcher.remove("greeting", &hello);
    dispatcher.dispatch(EventRecord::new("greeting")).await;

    // 6. Nobody listens: returns immediately
    dispatcher.dispatch(EventRecord::new("unknown")).await;
    println!("[main] registered names: {:?}", dispatcher.names());
    Ok(())
}
