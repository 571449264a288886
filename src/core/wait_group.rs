//! # Counting completion barrier.
//!
//! [`WaitGroup`] is the join primitive of a dispatch: it starts at the number
//! of launched handlers and each handler decrements it exactly once through its
//! [`Done`] token. [`WaitGroup::wait`] resolves when the counter reaches zero.
//!
//! ```text
//! dispatch ── WaitGroup::new(n) ──► spawn h1(done#1) ──► done#1.done() ─┐
//!                                   spawn h2(done#2) ──► drop(done#2) ──┼─► counter == 0 ─► wait() returns
//!                                   spawn hN(done#N) ──► done#N.done() ─┘
//! ```
//!
//! ## Rules
//! - `Done` is move-only: calling [`Done::done`] consumes it, so it cannot signal twice.
//! - Dropping a `Done` without calling `done` signals too (early return, panic unwind).
//! - A `Done` kept alive forever keeps `wait()` pending forever; there is no timeout.

use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use tokio::sync::Notify;

struct Inner {
    pending: AtomicUsize,
    notify: Notify,
}

/// Shared counter awaited until every issued [`Done`] has signaled.
#[derive(Clone)]
pub struct WaitGroup {
    inner: Arc<Inner>,
}

impl WaitGroup {
    /// Creates an empty group (counter = 0).
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Inner {
                pending: AtomicUsize::new(0),
                notify: Notify::new(),
            }),
        }
    }

    /// Increments the counter and returns the token that will decrement it.
    #[must_use = "dropping the token immediately signals completion"]
    pub fn add(&self) -> Done {
        self.inner.pending.fetch_add(1, Ordering::AcqRel);
        Done {
            inner: Arc::clone(&self.inner),
        }
    }

    /// Number of tokens that have not signaled yet.
    pub fn pending(&self) -> usize {
        self.inner.pending.load(Ordering::Acquire)
    }

    /// Waits until the counter reaches zero. Returns immediately if it already is.
    pub async fn wait(&self) {
        loop {
            // Register interest before checking so a signal between the
            // check and the await is not lost.
            let notified = self.inner.notify.notified();
            tokio::pin!(notified);
            notified.as_mut().enable();

            if self.pending() == 0 {
                return;
            }
            notified.await;
        }
    }
}

impl Default for WaitGroup {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for WaitGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WaitGroup")
            .field("pending", &self.pending())
            .finish()
    }
}

/// Completion signal handed to a handler; decrements its [`WaitGroup`] once.
pub struct Done {
    inner: Arc<Inner>,
}

impl Done {
    /// Signals completion.
    ///
    /// Equivalent to dropping the token; provided so call sites read explicitly.
    #[inline]
    pub fn done(self) {
        drop(self);
    }
}

impl Drop for Done {
    fn drop(&mut self) {
        if self.inner.pending.fetch_sub(1, Ordering::AcqRel) == 1 {
            self.inner.notify.notify_waiters();
        }
    }
}

impl fmt::Debug for Done {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Done")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[tokio::test]
    async fn test_wait_on_empty_group_returns_immediately() {
        let wg = WaitGroup::new();
        tokio::time::timeout(Duration::from_millis(100), wg.wait())
            .await
            .expect("empty group must not block");
    }

    #[test]
    fn test_add_and_done_track_pending() {
        let wg = WaitGroup::new();
        let a = wg.add();
        let b = wg.add();
        assert_eq!(wg.pending(), 2);
        a.done();
        assert_eq!(wg.pending(), 1);
        drop(b);
        assert_eq!(wg.pending(), 0);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn test_wait_resolves_after_all_signal() {
        let wg = WaitGroup::new();
        for i in 0..4u64 {
            let done = wg.add();
            tokio::spawn(async move {
                tokio::time::sleep(Duration::from_millis(10 * i)).await;
                done.done();
            });
        }
        tokio::time::timeout(Duration::from_secs(2), wg.wait())
            .await
            .expect("all tokens signaled");
        assert_eq!(wg.pending(), 0);
    }

    #[tokio::test]
    async fn test_wait_stays_pending_while_token_alive() {
        let wg = WaitGroup::new();
        let held = wg.add();
        let res = tokio::time::timeout(Duration::from_millis(50), wg.wait()).await;
        assert!(res.is_err());
        drop(held);
        wg.wait().await;
    }
}
