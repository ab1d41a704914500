//! # Navlens Core
//!
//! Core types for the Navlens NAV time-series analytics library.
//!
//! This crate provides the foundational building blocks used throughout
//! Navlens:
//!
//! - **Types**: the day-granularity [`types::Date`], the
//!   [`types::NavPoint`]/[`types::NavSeries`] data model, and the
//!   [`types::SeriesKind`] product/benchmark discriminant
//! - **As-of lookup**: the backward-looking point join every return
//!   calculation is built on
//! - **Errors**: structured error types shared by the downstream crates
//!
//! ## Design Philosophy
//!
//! - **Pure data**: a series is immutable once built; nothing here does I/O
//! - **Type safety**: `Decimal` values make non-finite observations
//!   unrepresentable; the date newtype keeps calendar math in one place
//! - **Explicit over implicit**: lookups return `Option`, never a sentinel
//!
//! ## Example
//!
//! ```rust
//! use navlens_core::prelude::*;
//! use rust_decimal_macros::dec;
//!
//! let series = NavSeries::product(
//!     "FUND_A",
//!     vec![NavPoint::new(Date::from_ymd(2024, 1, 1)?, dec!(100))],
//! );
//! assert_eq!(series.inception_date(), Some(Date::from_ymd(2024, 1, 1)?));
//! # Ok::<(), navlens_core::NavlensError>(())
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![allow(clippy::module_name_repetitions)]

pub mod error;
pub mod types;

// Re-export error types at crate root
pub use error::{NavlensError, NavlensResult};

// Re-export main types
pub use types::{Date, NavPoint, NavSeries, SeriesKind};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{NavlensError, NavlensResult};
    pub use crate::types::{Date, NavPoint, NavSeries, SeriesKind};
}
