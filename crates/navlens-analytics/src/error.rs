//! Error types for NAV analytics.

use thiserror::Error;

use navlens_core::NavlensError;

/// Result type for analytics operations.
pub type AnalyticsResult<T> = Result<T, AnalyticsError>;

/// Errors that can occur while deriving metrics.
///
/// Missing data within an otherwise valid series is never an error here;
/// it degrades to a `None` field on the metrics record. The only hard
/// failure is asking for metrics over a series with no points at all.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AnalyticsError {
    /// Metrics were requested for a series with zero data points.
    #[error("Series '{name}' has no data points")]
    EmptySeries {
        /// Name of the empty series.
        name: String,
    },

    /// A date calculation fell outside the supported calendar range.
    #[error(transparent)]
    Date(#[from] NavlensError),
}

impl AnalyticsError {
    /// Creates an empty series error.
    #[must_use]
    pub fn empty_series(name: impl Into<String>) -> Self {
        Self::EmptySeries { name: name.into() }
    }
}
