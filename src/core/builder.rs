use crate::core::{Config, Dispatcher};
use crate::error::DispatchError;
use crate::handlers::HandlerRef;

/// Builder for constructing a [`Dispatcher`] with initial registrations.
///
/// Registrations are applied in the order they were added, so the resulting
/// dispatch order matches the builder calls.
///
/// # Example
/// ```rust
/// use std::sync::Arc;
/// use handlervisor::{Config, Dispatcher, HandlerRef, LogHandler};
///
/// let log: HandlerRef = Arc::new(LogHandler::new());
/// let dispatcher = Dispatcher::builder(Config::default())
///     .with_handler("order.created", Arc::clone(&log))
///     .with_handler("order.cancelled", log)
///     .build()
///     .expect("distinct registrations");
///
/// assert_eq!(dispatcher.names(), vec!["order.cancelled", "order.created"]);
/// ```
pub struct DispatcherBuilder {
    cfg: Config,
    registrations: Vec<(String, HandlerRef)>,
}

impl DispatcherBuilder {
    /// Creates a new builder with the given configuration.
    pub fn new(cfg: Config) -> Self {
        Self {
            cfg,
            registrations: Vec::new(),
        }
    }

    /// Queues a single registration.
    pub fn with_handler(mut self, name: impl Into<String>, handler: HandlerRef) -> Self {
        self.registrations.push((name.into(), handler));
        self
    }

    /// Queues one handler under several names, or several handlers under one name.
    pub fn with_handlers<N, I>(mut self, registrations: I) -> Self
    where
        N: Into<String>,
        I: IntoIterator<Item = (N, HandlerRef)>,
    {
        self.registrations
            .extend(registrations.into_iter().map(|(n, h)| (n.into(), h)));
        self
    }

    /// Builds the dispatcher, applying queued registrations in order.
    ///
    /// # Errors
    /// [`DispatchError::DuplicateRegistration`] if the same (name, handler) pair
    /// was queued twice.
    pub fn build(self) -> Result<Dispatcher, DispatchError> {
        let dispatcher = Dispatcher::with_config(self.cfg);
        for (name, handler) in self.registrations {
            dispatcher.register(&name, handler)?;
        }
        Ok(dispatcher)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use crate::core::Done;
    use crate::events::Event;
    use crate::handlers::HandlerFn;

    fn noop(name: &'static str) -> HandlerRef {
        HandlerFn::arc(name, |_ev: Arc<dyn Event>, done: Done| async move {
            done.done();
        })
    }

    #[test]
    fn test_build_applies_registrations_in_order() {
        let a = noop("a");
        let b = noop("b");
        let d = Dispatcher::builder(Config::default())
            .with_handlers([("test", Arc::clone(&a)), ("test", Arc::clone(&b))])
            .build()
            .unwrap();

        let seq = d.handlers("test");
        assert_eq!(seq.len(), 2);
        assert_eq!(seq[0].name(), "a");
        assert_eq!(seq[1].name(), "b");
    }

    #[test]
    fn test_build_rejects_duplicates() {
        let a = noop("a");
        let err = Dispatcher::builder(Config::default())
            .with_handler("test", Arc::clone(&a))
            .with_handler("test", a)
            .build()
            .unwrap_err();
        assert_eq!(err.as_label(), "duplicate_registration");
    }
}
