//! # Core handler trait
//!
//! `Handler` is the extension point for reacting to dispatched events. Every
//! dispatch runs each registered handler in its own tokio task and waits for
//! all of them to signal completion through the [`Done`] token they receive.
//!
//! ## Contract
//! - `handle` is invoked once per dispatch the handler is registered for.
//! - Signal completion with [`Done::done`]; dropping the token counts as well.
//! - Handlers run concurrently with each other. Shared external state is the
//!   handler author's responsibility.
//! - Identity, not value, distinguishes handlers: two `Arc`s of equal state are
//!   two registrations.
//!
//! ## Example
//! ```rust
//! use std::sync::Arc;
//! use async_trait::async_trait;
//! use handlervisor::{Done, Event, Handler, HandlerRef};
//!
//! struct Audit;
//!
//! #[async_trait]
//! impl Handler for Audit {
//!     async fn handle(&self, event: Arc<dyn Event>, done: Done) {
//!         let _ = event.name();
//!         // write audit record...
//!         done.done();
//!     }
//!
//!     fn name(&self) -> &'static str {
//!         "audit"
//!     }
//! }
//!
//! let h: HandlerRef = Arc::new(Audit);
//! assert_eq!(h.name(), "audit");
//! ```

use std::sync::Arc;

use async_trait::async_trait;

use crate::core::Done;
use crate::events::Event;

/// Shared handle to a handler; the unit of registration and identity.
pub type HandlerRef = Arc<dyn Handler>;

/// Contract for event handlers.
///
/// Called from a dedicated tokio task per dispatch. Implementations should avoid
/// blocking the async runtime (prefer async I/O and cooperative waits).
#[async_trait]
pub trait Handler: Send + Sync + 'static {
    /// Handle a single event.
    ///
    /// # Parameters
    /// - `event`: shared event being dispatched
    /// - `done`: completion signal; dispatch returns once every handler's token has signaled
    async fn handle(&self, event: Arc<dyn Event>, done: Done);

    /// Human-readable name (for logs/metrics).
    fn name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}

/// Identity comparison of two handler handles (allocation address, vtable ignored).
#[inline]
pub(crate) fn same_handler(a: &HandlerRef, b: &HandlerRef) -> bool {
    std::ptr::addr_eq(Arc::as_ptr(a), Arc::as_ptr(b))
}
