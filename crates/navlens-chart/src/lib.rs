//! # Navlens Chart
//!
//! Date-union alignment and rebasing of NAV series for charting.
//!
//! This crate turns a set of sparsely and irregularly sampled NAV series
//! into a chart-ready view on one shared date axis:
//!
//! - **Date-union axis**: every date observed by any series, sorted,
//!   filtered to a named trailing window
//! - **Rebasing**: each series divided by its first in-window value so all
//!   series start at 1.0 and magnitudes become comparable
//! - **Forward-fill**: sampling gaps carry the last known value forward;
//!   dates before a series' first observation stay absent
//!
//! ## Design Philosophy
//!
//! - **Pure functions**: all inputs explicit, no I/O or caching; the
//!   aligned set is transient and recomputed per chart request
//! - **No invented data**: absent means absent — no back-fill, no default
//!   values before a series starts
//!
//! ## Quick Start
//!
//! ```rust
//! use navlens_chart::{align, ChartWindow};
//! use navlens_core::{Date, NavPoint, NavSeries};
//! use rust_decimal_macros::dec;
//!
//! let fund = NavSeries::product(
//!     "FUND_A",
//!     vec![
//!         NavPoint::new(Date::from_ymd(2024, 1, 1)?, dec!(50)),
//!         NavPoint::new(Date::from_ymd(2024, 1, 10)?, dec!(60)),
//!     ],
//! );
//!
//! let set = align(&[fund], ChartWindow::Itd, Date::from_ymd(2024, 1, 1)?)?;
//! assert_eq!(set.series[0].values[0], Some(1.0));
//! # Ok::<(), navlens_core::NavlensError>(())
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![allow(clippy::module_name_repetitions)]

pub mod align;
pub mod window;

// Re-export main types and functions
pub use align::{align, AlignedSeries, AlignedSeriesSet};
pub use window::ChartWindow;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::align::{align, AlignedSeries, AlignedSeriesSet};
    pub use crate::window::ChartWindow;

    // Re-export commonly used types from the core crate
    pub use navlens_core::{Date, NavPoint, NavSeries, SeriesKind};
}
