//! # Navlens Analytics
//!
//! Performance metrics over NAV time series.
//!
//! This crate derives per-entity performance records from the series types
//! in `navlens-core`:
//!
//! - **Period returns**: as-of-resolved simple returns with explicit
//!   missing-data, zero-denominator, and degenerate-window policies
//! - **Trailing windows**: 1W, 1M (calendar-aware), YTD, and ITD changes
//! - **Monthly breakdown**: six trailing calendar months, oldest first
//! - **Excess returns**: per-benchmark differences with ITD anchored at the
//!   product's inception
//! - **Batch computation**: one record per entity, optionally parallel
//!
//! ## Design Philosophy
//!
//! - **Pure functions**: all inputs explicit, no I/O, no caching, no
//!   process-wide state — benchmark sets and configuration are parameters
//! - **Two-tier failures**: an empty series is the only hard error; every
//!   other gap degrades to an absent (`None`) field
//! - **Raw fractions out**: returns are plain numbers (`0.0234` for
//!   +2.34%); formatting belongs to the presentation layer
//!
//! ## Quick Start
//!
//! ```rust
//! use navlens_analytics::compute_series_metrics;
//! use navlens_core::{Date, NavPoint, NavSeries};
//! use rust_decimal_macros::dec;
//!
//! let product = NavSeries::product(
//!     "FUND_A",
//!     vec![
//!         NavPoint::new(Date::from_ymd(2024, 1, 1)?, dec!(100)),
//!         NavPoint::new(Date::from_ymd(2024, 2, 1)?, dec!(105)),
//!     ],
//! );
//!
//! let metrics = compute_series_metrics(&product, &[])?;
//! assert_eq!(metrics.change_itd, Some(0.05));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Feature Flags
//!
//! - `parallel`: enable rayon-based parallel batch computation

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![allow(clippy::module_name_repetitions)]

pub mod engine;
pub mod error;
pub mod metrics;
pub mod returns;

// Re-export error types at crate root
pub use error::{AnalyticsError, AnalyticsResult};

// Re-export main types and functions
pub use engine::{compute_metrics_batch, AnalyticsConfig};
pub use metrics::{compute_series_metrics, ExcessReturn, MonthlyReturn, SeriesMetrics};
pub use returns::period_return;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::engine::{compute_metrics_batch, AnalyticsConfig};
    pub use crate::error::{AnalyticsError, AnalyticsResult};
    pub use crate::metrics::{compute_series_metrics, ExcessReturn, MonthlyReturn, SeriesMetrics};
    pub use crate::returns::period_return;

    // Re-export commonly used types from the core crate
    pub use navlens_core::{Date, NavPoint, NavSeries, SeriesKind};
}
