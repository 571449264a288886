//! # LogHandler — event logger
//!
//! A minimal handler that writes every event it receives through `tracing`
//! at `INFO` level. Register it under the names you want traced; it signals
//! completion as soon as the record is emitted.
//!
//! ## Example output (fmt subscriber)
//! ```text
//! INFO handlervisor::handlers::log: event received event="order.created" at=SystemTime { .. }
//! ```

use std::sync::Arc;

use async_trait::async_trait;

use crate::core::Done;
use crate::events::Event;
use crate::handlers::Handler;

/// Event logger handler.
#[derive(Default, Debug)]
pub struct LogHandler;

impl LogHandler {
    /// Construct a new [`LogHandler`].
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Handler for LogHandler {
    async fn handle(&self, event: Arc<dyn Event>, done: Done) {
        tracing::info!(event = event.name(), at = ?event.timestamp(), "event received");
        done.done();
    }

    fn name(&self) -> &'static str {
        "LogHandler"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::WaitGroup;
    use crate::events::EventRecord;

    #[tokio::test]
    async fn test_signals_completion() {
        let wg = WaitGroup::new();
        LogHandler::new()
            .handle(Arc::new(EventRecord::new("test")), wg.add())
            .await;
        assert_eq!(wg.pending(), 0);
    }
}
