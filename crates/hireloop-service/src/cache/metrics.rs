//! Prometheus metrics for the response cache.

use metrics::{counter, describe_counter};

/// Metric names for the response cache.
pub mod names {
    /// Cache lookups, labelled `result = hit | miss | error`.
    pub const CACHE_REQUESTS_TOTAL: &str = "hireloop_cache_requests_total";
    /// Keys deleted by mutations.
    pub const CACHE_INVALIDATIONS_TOTAL: &str = "hireloop_cache_invalidations_total";
}

/// Register all metric descriptions.
pub fn register_metrics() {
    describe_counter!(
        names::CACHE_REQUESTS_TOTAL,
        "Cache lookups by outcome (hit, miss, error)"
    );
    describe_counter!(
        names::CACHE_INVALIDATIONS_TOTAL,
        "Cache keys deleted by mutations"
    );
}

/// Outcome of a single cache lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lookup {
    Hit,
    Miss,
    Error,
}

impl Lookup {
    const fn label(self) -> &'static str {
        match self {
            Self::Hit => "hit",
            Self::Miss => "miss",
            Self::Error => "error",
        }
    }
}

/// Record a cache lookup.
pub fn record_lookup(outcome: Lookup) {
    counter!(names::CACHE_REQUESTS_TOTAL, "result" => outcome.label()).increment(1);
}

/// Record a deleted key.
pub fn record_invalidation() {
    counter!(names::CACHE_INVALIDATIONS_TOTAL).increment(1);
}
