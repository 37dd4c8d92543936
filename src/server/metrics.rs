// src/server/metrics.rs
//! Server metrics tracking
//!
//! Simple atomic counters for request outcomes, exposed through `GET /stats`.
//! Counters only need `&self`, so handlers holding the read lock can record.

use serde::Serialize;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

/// Server metrics collector
#[derive(Default)]
pub struct ServerMetrics {
    /// Entries accepted by `POST /entry`
    entries_created: AtomicU64,
    /// Entries rejected by `POST /entry`
    entries_rejected: AtomicU64,
    /// Summaries served
    summaries_served: AtomicU64,
    /// Summary requests that failed
    summaries_failed: AtomicU64,
    /// Names normalized by `POST /parse`
    names_parsed: AtomicU64,
    /// Names that normalized to nothing
    names_rejected: AtomicU64,
    /// Server start time
    start_time: std::sync::OnceLock<Instant>,
}

impl ServerMetrics {
    /// Create new metrics collector
    pub fn new() -> Self {
        let metrics = Self::default();
        let _ = metrics.start_time.set(Instant::now());
        metrics
    }

    pub fn record_entry_created(&self) {
        self.entries_created.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_entry_rejected(&self) {
        self.entries_rejected.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_summary_served(&self) {
        self.summaries_served.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_summary_failed(&self) {
        self.summaries_failed.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_name_parsed(&self) {
        self.names_parsed.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_name_rejected(&self) {
        self.names_rejected.fetch_add(1, Ordering::Relaxed);
    }

    /// Get current metrics snapshot
    ///
    /// `entries` is the current size of the cookbook.
    pub fn snapshot(&self, entries: usize) -> MetricsSnapshot {
        let uptime = self
            .start_time
            .get()
            .map(|t| t.elapsed())
            .unwrap_or(Duration::ZERO);

        let entries_created = self.entries_created.load(Ordering::Relaxed);
        let entries_rejected = self.entries_rejected.load(Ordering::Relaxed);
        let summaries_served = self.summaries_served.load(Ordering::Relaxed);
        let summaries_failed = self.summaries_failed.load(Ordering::Relaxed);
        let names_parsed = self.names_parsed.load(Ordering::Relaxed);
        let names_rejected = self.names_rejected.load(Ordering::Relaxed);

        MetricsSnapshot {
            requests_total: entries_created
                + entries_rejected
                + summaries_served
                + summaries_failed
                + names_parsed
                + names_rejected,
            entries,
            entries_created,
            entries_rejected,
            summaries_served,
            summaries_failed,
            names_parsed,
            names_rejected,
            uptime_secs: uptime.as_secs(),
        }
    }
}

/// Snapshot of current metrics
#[derive(Debug, Clone, Serialize)]
pub struct MetricsSnapshot {
    /// Total requests to the cookbook endpoints
    pub requests_total: u64,
    /// Entries currently in the cookbook, seeded ones included
    pub entries: usize,
    pub entries_created: u64,
    pub entries_rejected: u64,
    pub summaries_served: u64,
    pub summaries_failed: u64,
    pub names_parsed: u64,
    pub names_rejected: u64,
    /// Server uptime in seconds
    pub uptime_secs: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metrics_basic() {
        let metrics = ServerMetrics::new();

        metrics.record_entry_created();
        metrics.record_entry_created();
        metrics.record_entry_rejected();
        metrics.record_summary_served();
        metrics.record_name_rejected();

        let snapshot = metrics.snapshot(5);
        assert_eq!(snapshot.entries, 5);
        assert_eq!(snapshot.entries_created, 2);
        assert_eq!(snapshot.entries_rejected, 1);
        assert_eq!(snapshot.summaries_served, 1);
        assert_eq!(snapshot.summaries_failed, 0);
        assert_eq!(snapshot.names_rejected, 1);
        assert_eq!(snapshot.requests_total, 5);
    }

    #[test]
    fn test_zero_requests() {
        let metrics = ServerMetrics::new();
        let snapshot = metrics.snapshot(0);
        assert_eq!(snapshot.requests_total, 0);
        assert_eq!(snapshot.entries, 0);
    }
}
