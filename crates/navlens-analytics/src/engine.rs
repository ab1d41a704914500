//! Batch metrics computation across many entities.
//!
//! Computes one metrics record per entity against a shared benchmark set.
//! Entities are independent of each other, so past a configurable size the
//! batch fans out across threads when the `parallel` feature is enabled.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use navlens_core::NavSeries;

use crate::error::AnalyticsResult;
use crate::metrics::{compute_series_metrics, SeriesMetrics};

/// Configuration for batch metrics computation.
///
/// Controls parallelism across entities. Single-series computation takes no
/// configuration at all; every input is an explicit parameter.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyticsConfig {
    /// Enable parallel processing (requires the `parallel` feature).
    pub parallel: bool,

    /// Minimum entity count to trigger parallel processing.
    /// Below this threshold, sequential is faster due to thread overhead.
    pub parallel_threshold: usize,
}

impl Default for AnalyticsConfig {
    fn default() -> Self {
        Self {
            parallel: true,
            parallel_threshold: 32, // Use parallel if >32 entities
        }
    }
}

impl AnalyticsConfig {
    /// Creates a config that always computes sequentially.
    #[must_use]
    pub fn sequential() -> Self {
        Self {
            parallel: false,
            ..Self::default()
        }
    }

    /// Sets the entity count at which the batch fans out.
    #[must_use]
    pub fn with_threshold(mut self, threshold: usize) -> Self {
        self.parallel_threshold = threshold;
        self
    }

    /// Returns true if a batch of `count` entities should fan out across
    /// threads. Only consulted where the `parallel` feature is compiled in.
    #[must_use]
    pub fn should_parallelize(&self, count: usize) -> bool {
        self.parallel && count >= self.parallel_threshold
    }
}

/// Computes metrics for every entity against a shared benchmark set.
///
/// Returns one result per entity, in input order. A failing entity (empty
/// series) does not disturb its neighbors; its slot carries the error.
/// Benchmarks are consumed as raw point sequences only — they do not need
/// metrics of their own for the excess-return computation.
///
/// # Example
///
/// ```ignore
/// let results = compute_metrics_batch(&products, &benchmarks, &AnalyticsConfig::default());
/// let computed: Vec<_> = results.into_iter().filter_map(Result::ok).collect();
/// ```
#[must_use]
pub fn compute_metrics_batch(
    entities: &[NavSeries],
    benchmarks: &[NavSeries],
    config: &AnalyticsConfig,
) -> Vec<AnalyticsResult<SeriesMetrics>> {
    debug!(
        entities = entities.len(),
        benchmarks = benchmarks.len(),
        "computing metrics batch"
    );

    let results = run_batch(entities, benchmarks, config);

    for (entity, result) in entities.iter().zip(&results) {
        if let Err(err) = result {
            warn!(series = %entity.name, %err, "metrics computation skipped");
        }
    }

    results
}

/// Runs the per-entity computation, fanning out across threads past the
/// configured threshold when the `parallel` feature is enabled. Output
/// order always matches input order.
#[allow(unused_variables)]
fn run_batch(
    entities: &[NavSeries],
    benchmarks: &[NavSeries],
    config: &AnalyticsConfig,
) -> Vec<AnalyticsResult<SeriesMetrics>> {
    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;
        if config.should_parallelize(entities.len()) {
            return entities
                .par_iter()
                .map(|entity| compute_series_metrics(entity, benchmarks))
                .collect();
        }
    }

    entities
        .iter()
        .map(|entity| compute_series_metrics(entity, benchmarks))
        .collect()
}
