//! # Events routed by the dispatcher.
//!
//! The [`Event`] trait is the capability contract the dispatcher relies on:
//! a routing name, an opaque payload and a wall-clock timestamp. The dispatcher
//! never constructs or mutates events; it only reads [`Event::name`] to pick
//! the handler sequence.
//!
//! [`EventRecord`] is a ready-made implementation for applications that do not
//! need their own event types.
//!
//! ## Ordering
//! Each [`EventRecord`] carries a globally unique sequence number (`seq`) that
//! increases monotonically. Use it to restore creation order when handlers
//! observe events out of order.
//!
//! ## Example
//! ```rust
//! use handlervisor::{Event, EventRecord};
//!
//! let ev = EventRecord::new("order.created").with_payload(42_u64);
//!
//! assert_eq!(ev.name(), "order.created");
//! let dyn_ev: &dyn Event = &ev;
//! assert_eq!(dyn_ev.payload_as::<u64>(), Some(&42));
//! assert_eq!(dyn_ev.payload_as::<String>(), None);
//! ```

use std::any::Any;
use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering as AtomicOrdering};
use std::time::SystemTime;

/// Global sequence counter for event ordering.
static EVENT_SEQ: AtomicU64 = AtomicU64::new(0);

/// Contract for dispatchable events.
///
/// Implementations are shared across handler tasks, hence `Send + Sync + 'static`.
pub trait Event: Send + Sync + 'static {
    /// Routing key; handlers registered under this name receive the event.
    fn name(&self) -> &str;

    /// Opaque payload. `<dyn Event>::payload_as` gives a typed view.
    fn payload(&self) -> &(dyn Any + Send + Sync);

    /// Wall-clock time the event was produced.
    fn timestamp(&self) -> SystemTime;
}

impl dyn Event {
    /// Downcasts the payload to `T`, returning `None` on type mismatch.
    #[inline]
    pub fn payload_as<T: Any>(&self) -> Option<&T> {
        self.payload().downcast_ref::<T>()
    }
}

/// Concrete event with a name, an optional payload and creation metadata.
///
/// - `seq`: monotonic global sequence for ordering
/// - `at`: wall-clock timestamp
/// - `payload`: unit `()` until [`with_payload`](Self::with_payload) is called
#[derive(Clone)]
pub struct EventRecord {
    /// Globally unique, monotonically increasing sequence number.
    pub seq: u64,
    /// Wall-clock timestamp.
    pub at: SystemTime,
    name: Arc<str>,
    payload: Arc<dyn Any + Send + Sync>,
}

impl EventRecord {
    /// Creates an event with the given name, current timestamp and next sequence number.
    pub fn new(name: impl Into<Arc<str>>) -> Self {
        Self {
            seq: EVENT_SEQ.fetch_add(1, AtomicOrdering::Relaxed),
            at: SystemTime::now(),
            name: name.into(),
            payload: Arc::new(()),
        }
    }

    /// Attaches a payload value.
    #[inline]
    pub fn with_payload<T: Any + Send + Sync>(mut self, payload: T) -> Self {
        self.payload = Arc::new(payload);
        self
    }

    /// Overrides the wall-clock timestamp.
    #[inline]
    pub fn with_timestamp(mut self, at: SystemTime) -> Self {
        self.at = at;
        self
    }
}

impl Event for EventRecord {
    fn name(&self) -> &str {
        &self.name
    }

    fn payload(&self) -> &(dyn Any + Send + Sync) {
        &*self.payload
    }

    fn timestamp(&self) -> SystemTime {
        self.at
    }
}

impl fmt::Debug for EventRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventRecord")
            .field("seq", &self.seq)
            .field("name", &self.name)
            .field("at", &self.at)
            .finish_non_exhaustive()
    }
}
