//! Error types used by the dispatcher.
//!
//! The registry defines a single failure: registering the same handler twice
//! under one event name. Every other operation is total; absence of a name or
//! a handler is a normal case, not an error.
//!
//! [`DispatchError`] provides helper methods (`as_label`, `as_message`) for
//! logging/metrics.

use thiserror::Error;

/// # Errors produced by the dispatcher.
#[non_exhaustive]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DispatchError {
    /// The exact (event name, handler identity) pair is already registered.
    ///
    /// The registry is left unchanged when this is returned.
    #[error("handler {handler:?} already registered for event {event:?}")]
    DuplicateRegistration {
        /// Event name the registration was attempted under.
        event: String,
        /// Name of the rejected handler (see [`Handler::name`](crate::Handler::name)).
        handler: &'static str,
    },
}

impl DispatchError {
    /// Returns a short stable label (snake_case) for use in logs/metrics.
    ///
    /// # Example
    /// ```
    /// use handlervisor::DispatchError;
    ///
    /// let err = DispatchError::DuplicateRegistration {
    ///     event: "order.created".into(),
    ///     handler: "mailer",
    /// };
    /// assert_eq!(err.as_label(), "duplicate_registration");
    /// ```
    pub fn as_label(&self) -> &'static str {
        match self {
            DispatchError::DuplicateRegistration { .. } => "duplicate_registration",
        }
    }

    /// Returns a human-readable message with details about the error.
    pub fn as_message(&self) -> String {
        match self {
            DispatchError::DuplicateRegistration { event, handler } => {
                format!("duplicate registration: event={event} handler={handler}")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_registration_display() {
        let err = DispatchError::DuplicateRegistration {
            event: "test".into(),
            handler: "h1",
        };
        assert_eq!(
            err.to_string(),
            "handler \"h1\" already registered for event \"test\""
        );
        assert_eq!(err.as_message(), "duplicate registration: event=test handler=h1");
    }
}
