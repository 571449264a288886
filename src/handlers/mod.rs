//! # Event handlers for the dispatcher.
//!
//! This module provides the [`Handler`] trait and built-in implementations
//! invoked by [`Dispatcher::dispatch`](crate::Dispatcher::dispatch).
//!
//! ## Architecture
//! ```text
//! Event flow:
//!   caller ── dispatch(Event) ──► Dispatcher ──► handlers registered under event.name()
//!                                                    │
//!                                                    ├──► tokio::spawn ─► Handler::handle(event, done)
//!                                                    ├──► tokio::spawn ─► Handler::handle(event, done)
//!                                                    └──► ...
//!                                                                │
//!                                               WaitGroup ◄──────┘ (done.done() / drop)
//! ```
//!
//! ## Handler types
//! - **Trait impls** - your own type implementing [`Handler`]
//! - **Closures** - [`HandlerFn`] wraps `Fn(Arc<dyn Event>, Done) -> Future`
//! - **Built-in** - [`LogHandler`] writes events through `tracing` (feature `logging`)

mod handler;
mod handler_fn;
#[cfg(feature = "logging")]
mod log;

pub(crate) use handler::same_handler;
pub use handler::{Handler, HandlerRef};
pub use handler_fn::HandlerFn;
#[cfg(feature = "logging")]
pub use log::LogHandler;
