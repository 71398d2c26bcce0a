//! Request and submission counters for the inbound client.
//!
//! Clones share the same counters. Values are read back through a
//! [`MetricsSummary`] snapshot, which is what the binary logs on exit.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

#[derive(Debug, Default)]
struct Counters {
    requests: AtomicU64,
    failed_requests: AtomicU64,
    request_ms: AtomicU64,
    accepted: AtomicU64,
    rejected: AtomicU64,
}

/// Shared counters for one client.
#[derive(Debug, Clone, Default)]
pub struct Metrics {
    counters: Arc<Counters>,
}

impl Metrics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one finished HTTP exchange and whether it failed at transport level.
    pub fn record_request(&self, elapsed: Duration, failed: bool) {
        let c = &self.counters;
        c.requests.fetch_add(1, Ordering::Relaxed);
        c.request_ms
            .fetch_add(elapsed.as_millis() as u64, Ordering::Relaxed);
        if failed {
            c.failed_requests.fetch_add(1, Ordering::Relaxed);
        }
    }

    /// A response arrived but its body could not be interpreted.
    pub fn record_unreadable_reply(&self) {
        self.counters.failed_requests.fetch_add(1, Ordering::Relaxed);
    }

    /// Record the verdict of a parsed response.
    pub fn record_submission(&self, accepted: bool) {
        let counter = if accepted {
            &self.counters.accepted
        } else {
            &self.counters.rejected
        };
        counter.fetch_add(1, Ordering::Relaxed);
    }

    pub fn summary(&self) -> MetricsSummary {
        let c = &self.counters;
        let requests = c.requests.load(Ordering::Relaxed);
        let request_ms = c.request_ms.load(Ordering::Relaxed);

        MetricsSummary {
            requests,
            failed_requests: c.failed_requests.load(Ordering::Relaxed),
            avg_request_ms: match requests {
                0 => 0.0,
                n => request_ms as f64 / n as f64,
            },
            accepted: c.accepted.load(Ordering::Relaxed),
            rejected: c.rejected.load(Ordering::Relaxed),
        }
    }
}

/// Point-in-time copy of the counters.
#[derive(Debug, Clone, PartialEq)]
pub struct MetricsSummary {
    pub requests: u64,
    /// Transport failures plus replies whose body could not be parsed
    pub failed_requests: u64,
    pub avg_request_ms: f64,
    pub accepted: u64,
    pub rejected: u64,
}

impl fmt::Display for MetricsSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "requests: {} ({} failed, avg {:.1} ms), accepted: {}, rejected: {}",
            self.requests, self.failed_requests, self.avg_request_ms, self.accepted, self.rejected
        )
    }
}
