//! # Function-backed handler (`HandlerFn`)
//!
//! [`HandlerFn`] wraps a closure `F: Fn(Arc<dyn Event>, Done) -> Fut`, producing
//! a fresh future per dispatch. State shared between dispatches must live in an
//! `Arc<...>` captured by the closure.
//!
//! ## Example
//! ```rust
//! use std::sync::Arc;
//! use handlervisor::{Done, Event, HandlerFn, HandlerRef};
//!
//! let h: HandlerRef = HandlerFn::arc("printer", |ev: Arc<dyn Event>, done: Done| async move {
//!     println!("got {}", ev.name());
//!     done.done();
//! });
//!
//! assert_eq!(h.name(), "printer");
//! ```

use std::fmt;
use std::future::Future;
use std::sync::Arc;

use async_trait::async_trait;

use crate::core::Done;
use crate::events::Event;
use crate::handlers::handler::Handler;

/// Function-backed handler implementation.
pub struct HandlerFn<F> {
    name: &'static str,
    f: F,
}

impl<F> HandlerFn<F> {
    /// Creates a new function-backed handler.
    ///
    /// Prefer [`HandlerFn::arc`] when you immediately need a [`HandlerRef`](crate::HandlerRef).
    pub fn new(name: &'static str, f: F) -> Self {
        Self { name, f }
    }

    /// Creates the handler and returns it as a shared handle.
    pub fn arc(name: &'static str, f: F) -> Arc<Self> {
        Arc::new(Self::new(name, f))
    }
}

#[async_trait]
impl<F, Fut> Handler for HandlerFn<F>
where
    F: Fn(Arc<dyn Event>, Done) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = ()> + Send + 'static,
{
    async fn handle(&self, event: Arc<dyn Event>, done: Done) {
        (self.f)(event, done).await;
    }

    fn name(&self) -> &'static str {
        self.name
    }
}

impl<F> fmt::Debug for HandlerFn<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HandlerFn").field("name", &self.name).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use crate::core::WaitGroup;
    use crate::events::EventRecord;

    #[tokio::test]
    async fn test_closure_receives_event_and_signals() {
        let seen = Arc::new(AtomicUsize::new(0));
        let seen_in = Arc::clone(&seen);
        let h = HandlerFn::arc("counter", move |ev: Arc<dyn Event>, done: Done| {
            let seen = Arc::clone(&seen_in);
            async move {
                assert_eq!(ev.name(), "test");
                seen.fetch_add(1, Ordering::SeqCst);
                done.done();
            }
        });

        let wg = WaitGroup::new();
        h.handle(Arc::new(EventRecord::new("test")), wg.add()).await;
        wg.wait().await;

        assert_eq!(seen.load(Ordering::SeqCst), 1);
        assert_eq!(h.name(), "counter");
    }
}
