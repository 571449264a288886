//! # Dispatcher - name-keyed handler registry with fan-out dispatch.
//!
//! The dispatcher owns a mapping `event name -> [handler, ...]` and fans each
//! dispatched event out to every handler registered under the event's name.
//!
//! ## Architecture
//! ```text
//! register(name, h) ──► write lock ──► map[name].push(h)   (reject if h already there)
//! remove(name, h)   ──► write lock ──► map[name].retain(!= h)
//! clear()           ──► write lock ──► map = {}
//! has(name, h)      ──► read lock  ──► map[name].contains(h)
//!
//! dispatch(event)
//!     │
//!     ├─► read lock ─► snapshot map[event.name()] ─► unlock
//!     │
//!     ├──► spawn h1.handle(event, done#1)   (registration order)
//!     ├──► spawn h2.handle(event, done#2)
//!     └──► spawn hN.handle(event, done#N)
//!                     │
//!     WaitGroup::wait() ◄── every done signaled ──► dispatch returns
//! ```
//!
//! ## Rules
//! - **Identity**: handlers are compared by `Arc` address, never by value
//! - **No duplicates**: a (name, handler) pair is registered at most once
//! - **Absence is normal**: unknown names/handlers make `has`/`remove`/`dispatch` no-ops
//! - **Start order = registration order**; completion order is unspecified
//! - **Snapshot isolation**: registry changes during an in-flight dispatch do not affect it
//! - **Silent failures**: dispatch never reports what happens inside handlers

use std::collections::HashMap;
use std::fmt;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;

use futures::FutureExt;
use parking_lot::RwLock;

use crate::core::builder::DispatcherBuilder;
use crate::core::wait_group::{Done, WaitGroup};
use crate::core::Config;
use crate::error::DispatchError;
use crate::events::Event;
use crate::handlers::{same_handler, HandlerRef};

/// In-process event dispatcher.
///
/// Construct one explicitly and share it (`Arc<Dispatcher>`) with the parts of
/// the application that register handlers or publish events.
///
/// # Example
/// ```rust
/// use std::sync::Arc;
/// use handlervisor::{Dispatcher, Done, Event, EventRecord, HandlerFn, HandlerRef};
///
/// #[tokio::main(flavor = "current_thread")]
/// async fn main() -> Result<(), handlervisor::DispatchError> {
///     let dispatcher = Dispatcher::new();
///
///     let mailer: HandlerRef = HandlerFn::arc("mailer", |ev: Arc<dyn Event>, done: Done| async move {
///         println!("sending mail for {}", ev.name());
///         done.done();
///     });
///
///     dispatcher.register("order.created", Arc::clone(&mailer))?;
///     assert!(dispatcher.has("order.created", &mailer));
///
///     dispatcher.dispatch(EventRecord::new("order.created")).await;
///     Ok(())
/// }
/// ```
pub struct Dispatcher {
    handlers: RwLock<HashMap<String, Vec<HandlerRef>>>,
    cfg: Config,
}

impl Dispatcher {
    /// Creates an empty dispatcher with [`Config::default`].
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }

    /// Creates an empty dispatcher with the given configuration.
    #[must_use]
    pub fn with_config(cfg: Config) -> Self {
        Self {
            handlers: RwLock::new(HashMap::with_capacity(cfg.capacity)),
            cfg,
        }
    }

    /// Returns a builder for a dispatcher with initial registrations.
    pub fn builder(cfg: Config) -> DispatcherBuilder {
        DispatcherBuilder::new(cfg)
    }

    /// Registers `handler` under `name`, after any handlers already there.
    ///
    /// Empty names are legal keys.
    ///
    /// # Errors
    /// [`DispatchError::DuplicateRegistration`] if this exact handler (by identity)
    /// is already registered under `name`; the registry is left unchanged.
    pub fn register(&self, name: &str, handler: HandlerRef) -> Result<(), DispatchError> {
        let mut map = self.handlers.write();

        if let Some(seq) = map.get(name) {
            if seq.iter().any(|h| same_handler(h, &handler)) {
                drop(map);
                tracing::warn!(event = name, handler = handler.name(), "duplicate registration rejected");
                return Err(DispatchError::DuplicateRegistration {
                    event: name.to_owned(),
                    handler: handler.name(),
                });
            }
        }

        let seq = map.entry(name.to_owned()).or_default();
        seq.push(Arc::clone(&handler));
        let total = seq.len();
        drop(map);

        tracing::debug!(event = name, handler = handler.name(), handlers = total, "handler registered");
        Ok(())
    }

    /// Returns `true` if this exact handler (by identity) is registered under `name`.
    pub fn has(&self, name: &str, handler: &HandlerRef) -> bool {
        self.handlers
            .read()
            .get(name)
            .is_some_and(|seq| seq.iter().any(|h| same_handler(h, handler)))
    }

    /// Removes `handler` from `name`, keeping the order of the remaining handlers.
    ///
    /// Removing a registration that does not exist is a no-op, not an error.
    /// Returns whether a registration was dropped. A name left without handlers
    /// is dropped from the registry.
    pub fn remove(&self, name: &str, handler: &HandlerRef) -> bool {
        let mut map = self.handlers.write();

        let Some(seq) = map.get_mut(name) else {
            return false;
        };
        let Some(pos) = seq.iter().position(|h| same_handler(h, handler)) else {
            return false;
        };

        seq.remove(pos);
        let left = seq.len();
        if left == 0 {
            map.remove(name);
        }
        drop(map);

        tracing::debug!(event = name, handler = handler.name(), handlers = left, "handler removed");
        true
    }

    /// Discards every registration under every name.
    pub fn clear(&self) {
        let dropped = {
            let mut map = self.handlers.write();
            std::mem::replace(&mut *map, HashMap::with_capacity(self.cfg.capacity))
        };
        tracing::debug!(names = dropped.len(), "registry cleared");
    }

    /// Dispatches `event` to every handler registered under its name.
    ///
    /// Handlers are launched as independent tokio tasks in registration order;
    /// the call returns once each of them has signaled completion. With no
    /// handlers registered it returns immediately.
    ///
    /// Requires a running tokio runtime when at least one handler is registered.
    pub async fn dispatch<E: Event>(&self, event: E) {
        self.dispatch_arc(Arc::new(event)).await;
    }

    /// Dispatches an already shared event (no extra allocation).
    ///
    /// See [`dispatch`](Self::dispatch).
    pub async fn dispatch_arc(&self, event: Arc<dyn Event>) {
        let handlers = self.handlers(event.name());
        if handlers.is_empty() {
            tracing::trace!(event = event.name(), "no handlers registered");
            return;
        }

        tracing::debug!(event = event.name(), handlers = handlers.len(), "dispatching");

        let wg = WaitGroup::new();
        for handler in handlers {
            let done = wg.add();
            tokio::spawn(run_handler(
                handler,
                Arc::clone(&event),
                done,
                self.cfg.catch_panics,
            ));
        }
        wg.wait().await;

        tracing::debug!(event = event.name(), "dispatch joined");
    }

    /// Snapshot of the handlers registered under `name`, in registration order.
    pub fn handlers(&self, name: &str) -> Vec<HandlerRef> {
        self.handlers.read().get(name).cloned().unwrap_or_default()
    }

    /// Sorted list of names that have at least one handler.
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.handlers.read().keys().cloned().collect();
        names.sort_unstable();
        names
    }

    /// Returns `true` if no handler is registered under any name.
    pub fn is_empty(&self) -> bool {
        self.handlers.read().is_empty()
    }
}

impl Default for Dispatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Dispatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let map = self.handlers.read();
        let counts: HashMap<&str, usize> = map.iter().map(|(k, v)| (k.as_str(), v.len())).collect();
        f.debug_struct("Dispatcher")
            .field("handlers", &counts)
            .field("cfg", &self.cfg)
            .finish()
    }
}

/// Body of one handler task: runs the handler, optionally isolating panics.
///
/// `done` moves into the handler future, so it signals on completion, early
/// drop, or unwinding alike.
async fn run_handler(handler: HandlerRef, event: Arc<dyn Event>, done: Done, catch_panics: bool) {
    let fut = handler.handle(event, done);

    if !catch_panics {
        fut.await;
        return;
    }

    if let Err(panic_err) = AssertUnwindSafe(fut).catch_unwind().await {
        let info = {
            let any = &*panic_err;
            if let Some(msg) = any.downcast_ref::<&'static str>() {
                (*msg).to_string()
            } else if let Some(msg) = any.downcast_ref::<String>() {
                msg.clone()
            } else {
                "unknown panic".to_string()
            }
        };
        tracing::warn!(handler = handler.name(), info = %info, "handler panicked");
    }
}
