//! Lookup metrics and observability module.
//!
//! Tracks how often `translate` resolves a key from the active table versus
//! falling back to the raw key. A non-zero fallback count on a production
//! build means some consumer is asking for a key no table provides.

use serde::Serialize;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::OnceLock;

/// Global lookup metrics singleton.
pub struct LookupMetrics {
    /// Number of lookups resolved from the active locale's table
    table_hits: AtomicUsize,

    /// Number of lookups that fell back to the raw key
    fallback_misses: AtomicUsize,
}

static METRICS: OnceLock<LookupMetrics> = OnceLock::new();

impl LookupMetrics {
    fn new() -> Self {
        Self {
            table_hits: AtomicUsize::new(0),
            fallback_misses: AtomicUsize::new(0),
        }
    }

    /// Get the global lookup metrics instance.
    pub fn global() -> &'static LookupMetrics {
        METRICS.get_or_init(LookupMetrics::new)
    }

    /// Record a lookup resolved from the active table.
    pub fn record_table_hit(&self) {
        self.table_hits.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a lookup that fell back to the raw key.
    pub fn record_fallback(&self) {
        self.fallback_misses.fetch_add(1, Ordering::Relaxed);
    }

    /// Get the current table hit count.
    pub fn table_hits(&self) -> usize {
        self.table_hits.load(Ordering::Relaxed)
    }

    /// Get the current fallback count.
    pub fn fallback_misses(&self) -> usize {
        self.fallback_misses.load(Ordering::Relaxed)
    }

    /// Generate a metrics report.
    pub fn report(&self) -> MetricsReport {
        let hits = self.table_hits();
        let misses = self.fallback_misses();
        let total = hits + misses;
        let fallback_rate = if total > 0 {
            (misses as f64 / total as f64) * 100.0
        } else {
            0.0
        };

        MetricsReport {
            table_hits: hits,
            fallback_misses: misses,
            fallback_rate,
        }
    }
}

/// Report of current lookup statistics.
#[derive(Debug, Clone, Serialize)]
pub struct MetricsReport {
    /// Number of lookups resolved from a table
    pub table_hits: usize,

    /// Number of lookups that fell back to the raw key
    pub fallback_misses: usize,

    /// Fallback rate as a percentage (0-100)
    pub fallback_rate: f64,
}
