//! # Search Debouncer
//!
//! Holds back search commits until typing settles.
//!
//! ## Timeline
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  t=0    on_input("a")    schedule "a"   @ 500                           │
//! │  t=120  on_input("ab")   cancel, "ab"   @ 620                           │
//! │  t=250  on_input("abc")  cancel, "abc"  @ 750                           │
//! │  t=600  poll()           not due       → None                          │
//! │  t=750  poll()           due           → Some("abc")  (exactly once)   │
//! │  t=800  poll()           nothing left  → None                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! There is no thread or runtime timer here. The pending commit is a plain
//! handle with a deadline; the shell reads [`SearchDebouncer::deadline`],
//! arms whatever timer its event loop offers, and calls `poll` when it
//! fires. Extra polls are harmless.

use std::time::{Duration, Instant};
use tracing::debug;

use crate::query::normalize_search;

/// A scheduled search commit.
#[derive(Debug, Clone, PartialEq, Eq)]
struct PendingCommit {
    text: String,
    due: Instant,
}

/// Coalesces rapid search input into a single deferred commit.
#[derive(Debug, Clone)]
pub struct SearchDebouncer {
    quiet_period: Duration,
    pending: Option<PendingCommit>,
}

impl SearchDebouncer {
    pub fn new(quiet_period: Duration) -> Self {
        SearchDebouncer {
            quiet_period,
            pending: None,
        }
    }

    pub fn quiet_period(&self) -> Duration {
        self.quiet_period
    }

    /// Normalizes `raw` and (re)schedules its commit at `now + quiet_period`.
    ///
    /// Any earlier pending commit is dropped.
    pub fn on_input(&mut self, raw: &str, now: Instant) {
        let text = normalize_search(raw);
        let due = now + self.quiet_period;
        if let Some(previous) = self.pending.replace(PendingCommit { text, due }) {
            debug!(superseded = %previous.text, "Search commit rescheduled");
        }
    }

    /// Takes the pending text once its deadline has passed.
    pub fn poll(&mut self, now: Instant) -> Option<String> {
        let due = self.pending.as_ref().is_some_and(|c| now >= c.due);
        if due {
            self.pending.take().map(|c| c.text)
        } else {
            None
        }
    }

    /// When the pending commit becomes due.
    pub fn deadline(&self) -> Option<Instant> {
        self.pending.as_ref().map(|c| c.due)
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Drops the pending commit. Returns whether one existed.
    pub fn cancel(&mut self) -> bool {
        self.pending.take().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn test_coalesces_to_latest_input() {
        let t0 = Instant::now();
        let mut debouncer = SearchDebouncer::new(ms(500));

        debouncer.on_input("a", t0);
        debouncer.on_input("ab", t0 + ms(120));
        debouncer.on_input("abc", t0 + ms(250));

        assert_eq!(debouncer.poll(t0 + ms(600)), None);
        assert_eq!(debouncer.poll(t0 + ms(750)), Some("abc".to_string()));
        assert_eq!(debouncer.poll(t0 + ms(800)), None);
        assert!(!debouncer.is_pending());
    }

    #[test]
    fn test_normalizes_input() {
        let t0 = Instant::now();
        let mut debouncer = SearchDebouncer::new(ms(500));
        debouncer.on_input("  LaPtop ", t0);
        assert_eq!(debouncer.poll(t0 + ms(500)), Some("laptop".to_string()));
    }

    #[test]
    fn test_each_input_pushes_the_deadline() {
        let t0 = Instant::now();
        let mut debouncer = SearchDebouncer::new(ms(500));

        debouncer.on_input("a", t0);
        assert_eq!(debouncer.quiet_period(), ms(500));
        assert_eq!(debouncer.deadline(), Some(t0 + debouncer.quiet_period()));

        debouncer.on_input("ab", t0 + ms(400));
        assert_eq!(debouncer.deadline(), Some(t0 + ms(900)));
        assert_eq!(debouncer.poll(t0 + ms(500)), None);
    }

    #[test]
    fn test_cancel_drops_pending_commit() {
        let t0 = Instant::now();
        let mut debouncer = SearchDebouncer::new(ms(500));

        debouncer.on_input("x", t0);
        assert!(debouncer.cancel());
        assert!(!debouncer.cancel());
        assert_eq!(debouncer.poll(t0 + ms(1000)), None);
        assert_eq!(debouncer.deadline(), None);
    }
}
