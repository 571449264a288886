//! # handlervisor
//!
//! **handlervisor** is an in-process event dispatcher for async Rust.
//!
//! Callers register named handlers against event names, then dispatch an event
//! so that every handler registered under its name runs. Dispatch fans out one
//! tokio task per handler and returns once all of them have signaled completion.
//! Nothing crosses the process boundary: no persistence, no transport, no retries.
//!
//! ## Architecture
//! ```text
//!     ┌──────────────┐   ┌──────────────┐   ┌──────────────┐
//!     │   Handler    │   │   Handler    │   │   Handler    │
//!     │  (mailer)    │   │ (inventory)  │   │   (audit)    │
//!     └──────┬───────┘   └──────┬───────┘   └──────┬───────┘
//!            ▼ register         ▼ register         ▼ register
//! ┌───────────────────────────────────────────────────────────────────┐
//! │  Dispatcher                                                       │
//! │  - RwLock<HashMap<name, Vec<HandlerRef>>> (registration order)    │
//! │  - identity-based dedup (Arc address)                             │
//! └─────────────────────────────────┬─────────────────────────────────┘
//!                                   │ dispatch(event)
//!                                   ▼
//!                    snapshot handlers for event.name()
//!                     ┌─────────────┼─────────────┐
//!                     ▼             ▼             ▼
//!                 tokio::spawn  tokio::spawn  tokio::spawn
//!                  h1.handle     h2.handle     hN.handle
//!                     │             │             │
//!                     └──── done ───┴──── done ───┘
//!                                   ▼
//!                         WaitGroup reaches zero ─► dispatch returns
//! ```
//!
//! ## Features
//! | Area              | Description                                                  | Key types / traits                        |
//! |-------------------|--------------------------------------------------------------|-------------------------------------------|
//! | **Registry**      | Register, remove, query and clear named handlers.            | [`Dispatcher`], [`DispatcherBuilder`]     |
//! | **Handlers**      | Plug in reactions as trait impls or closures.                | [`Handler`], [`HandlerFn`], [`HandlerRef`]|
//! | **Events**        | Routing contract plus a ready-made event record.             | [`Event`], [`EventRecord`]                |
//! | **Join**          | Completion signal and counting barrier.                      | [`Done`], [`WaitGroup`]                   |
//! | **Errors**        | Typed registration error.                                    | [`DispatchError`]                         |
//! | **Configuration** | Registry sizing and panic capture.                           | [`Config`]                                |
//!
//! ## Optional features
//! - `logging` (default): exports [`LogHandler`], which writes events through `tracing`.
//!
//! ## Example
//! ```rust
//! use std::sync::Arc;
//! use handlervisor::{Dispatcher, Done, Event, EventRecord, HandlerFn, HandlerRef};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let dispatcher = Arc::new(Dispatcher::new());
//!
//!     let hello: HandlerRef = HandlerFn::arc("hello", |ev: Arc<dyn Event>, done: Done| async move {
//!         println!("Hello from {}!", ev.name());
//!         done.done();
//!     });
//!
//!     dispatcher.register("greeting", Arc::clone(&hello))?;
//!
//!     // Second registration of the same handler is rejected.
//!     assert!(dispatcher.register("greeting", Arc::clone(&hello)).is_err());
//!
//!     dispatcher.dispatch(EventRecord::new("greeting")).await;
//!     dispatcher.dispatch(EventRecord::new("nobody-listens")).await;
//!
//!     dispatcher.remove("greeting", &hello);
//!     assert!(dispatcher.is_empty());
//!     Ok(())
//! }
//! ```
mod core;
mod error;
mod events;
mod handlers;

// ---- Public re-exports ----

pub use crate::core::{Config, Dispatcher, DispatcherBuilder, Done, WaitGroup};
pub use error::DispatchError;
pub use events::{Event, EventRecord};
pub use handlers::{Handler, HandlerFn, HandlerRef};

#[cfg(feature = "logging")]
pub use handlers::LogHandler;
