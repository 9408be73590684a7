//! Metrics collection for pipeline operations.

use serde::Serialize;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

/// Metrics collector shared by the scheduler and the HTTP API.
///
/// Cloning is cheap; clones record into the same counters.
#[derive(Debug, Clone)]
pub struct PipelineMetrics {
    inner: Arc<PipelineMetricsInner>,
}

#[derive(Debug)]
struct PipelineMetricsInner {
    generation_runs: AtomicU64,
    generation_failures: AtomicU64,
    posting_runs: AtomicU64,
    posting_failures: AtomicU64,
    analytics_runs: AtomicU64,

    generation_last_success: parking_lot::Mutex<Option<Instant>>,
    posting_last_success: parking_lot::Mutex<Option<Instant>>,
}

impl Default for PipelineMetrics {
    fn default() -> Self {
        Self::new()
    }
}

impl PipelineMetrics {
    /// Creates a new metrics collector.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(PipelineMetricsInner {
                generation_runs: AtomicU64::new(0),
                generation_failures: AtomicU64::new(0),
                posting_runs: AtomicU64::new(0),
                posting_failures: AtomicU64::new(0),
                analytics_runs: AtomicU64::new(0),
                generation_last_success: parking_lot::Mutex::new(None),
                posting_last_success: parking_lot::Mutex::new(None),
            }),
        }
    }

    /// Records a generation attempt and its result.
    pub fn record_generation(&self, succeeded: bool) {
        self.inner.generation_runs.fetch_add(1, Ordering::Relaxed);
        if succeeded {
            *self.inner.generation_last_success.lock() = Some(Instant::now());
        } else {
            self.inner.generation_failures.fetch_add(1, Ordering::Relaxed);
        }
    }

    /// Records a publish attempt and its result.
    pub fn record_posting(&self, succeeded: bool) {
        self.inner.posting_runs.fetch_add(1, Ordering::Relaxed);
        if succeeded {
            *self.inner.posting_last_success.lock() = Some(Instant::now());
        } else {
            self.inner.posting_failures.fetch_add(1, Ordering::Relaxed);
        }
    }

    /// Records an analytics report.
    pub fn record_analytics(&self) {
        self.inner.analytics_runs.fetch_add(1, Ordering::Relaxed);
    }

    /// Gets generation attempt count.
    pub fn generation_runs(&self) -> u64 {
        self.inner.generation_runs.load(Ordering::Relaxed)
    }

    /// Gets generation failure count.
    pub fn generation_failures(&self) -> u64 {
        self.inner.generation_failures.load(Ordering::Relaxed)
    }

    /// Gets time since last successful generation.
    pub fn generation_time_since_success(&self) -> Option<Duration> {
        self.inner
            .generation_last_success
            .lock()
            .map(|instant| instant.elapsed())
    }

    /// Gets publish attempt count.
    pub fn posting_runs(&self) -> u64 {
        self.inner.posting_runs.load(Ordering::Relaxed)
    }

    /// Gets publish failure count.
    pub fn posting_failures(&self) -> u64 {
        self.inner.posting_failures.load(Ordering::Relaxed)
    }

    /// Gets time since last successful publish.
    pub fn posting_time_since_success(&self) -> Option<Duration> {
        self.inner
            .posting_last_success
            .lock()
            .map(|instant| instant.elapsed())
    }

    /// Gets analytics report count.
    pub fn analytics_runs(&self) -> u64 {
        self.inner.analytics_runs.load(Ordering::Relaxed)
    }

    /// Gets overall success rate (0.0 - 1.0) across generation and posting.
    pub fn overall_success_rate(&self) -> f64 {
        let total_runs = self.generation_runs() + self.posting_runs();
        let total_failures = self.generation_failures() + self.posting_failures();

        if total_runs == 0 {
            return 1.0;
        }

        let successes = total_runs.saturating_sub(total_failures);
        successes as f64 / total_runs as f64
    }

    /// Creates a serializable snapshot of current metrics.
    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            generation: StageSnapshot {
                runs: self.generation_runs(),
                failures: self.generation_failures(),
                seconds_since_success: self.generation_time_since_success().map(|d| d.as_secs()),
            },
            posting: StageSnapshot {
                runs: self.posting_runs(),
                failures: self.posting_failures(),
                seconds_since_success: self.posting_time_since_success().map(|d| d.as_secs()),
            },
            analytics_runs: self.analytics_runs(),
            overall_success_rate: self.overall_success_rate(),
        }
    }
}

/// Serializable snapshot of pipeline metrics.
#[derive(Debug, Clone, Serialize)]
pub struct MetricsSnapshot {
    /// Content generation
    pub generation: StageSnapshot,
    /// Publishing
    pub posting: StageSnapshot,
    /// Analytics reports served
    pub analytics_runs: u64,
    /// Overall success rate across generation and posting
    pub overall_success_rate: f64,
}

/// Serializable snapshot of one pipeline stage.
#[derive(Debug, Clone, Serialize)]
pub struct StageSnapshot {
    /// Number of attempts
    pub runs: u64,
    /// Number of failures
    pub failures: u64,
    /// Seconds since last success
    pub seconds_since_success: Option<u64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_metrics_report_full_success() {
        let metrics = PipelineMetrics::new();
        let snapshot = metrics.snapshot();
        assert_eq!(snapshot.generation.runs, 0);
        assert_eq!(snapshot.posting.seconds_since_success, None);
        assert_eq!(snapshot.overall_success_rate, 1.0);
    }

    #[test]
    fn test_clones_share_counters() {
        let metrics = PipelineMetrics::new();
        let clone = metrics.clone();
        clone.record_generation(true);
        clone.record_posting(false);
        metrics.record_analytics();

        assert_eq!(metrics.generation_runs(), 1);
        assert_eq!(metrics.generation_failures(), 0);
        assert!(metrics.generation_time_since_success().is_some());
        assert_eq!(metrics.posting_runs(), 1);
        assert_eq!(metrics.posting_failures(), 1);
        assert!(metrics.posting_time_since_success().is_none());
        assert_eq!(clone.analytics_runs(), 1);
        assert_eq!(metrics.overall_success_rate(), 0.5);
    }
}
