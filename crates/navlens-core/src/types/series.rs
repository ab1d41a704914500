//! Ordered NAV series and the as-of point lookup.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{Date, NavPoint};
use crate::error::{NavlensError, NavlensResult};

/// Whether a series represents an investable product or a benchmark index.
///
/// The two share the same data shape; the discriminant only changes how the
/// metrics engine treats them (benchmarks never receive excess returns of
/// their own) and how the presentation layer renders them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SeriesKind {
    /// A financial product (fund, share class, strategy sleeve).
    Product,
    /// A benchmark index the products are compared against.
    Benchmark,
}

/// An ordered-by-date sequence of NAV observations for one entity.
///
/// Points are kept in non-decreasing date order; the constructors sort
/// stably, so duplicate dates are preserved in their ingestion order.
/// A series is immutable once built and owns its points.
///
/// # Example
///
/// ```rust
/// use navlens_core::types::{Date, NavPoint, NavSeries};
/// use rust_decimal_macros::dec;
///
/// let series = NavSeries::product(
///     "FUND_A",
///     vec![
///         NavPoint::new(Date::from_ymd(2024, 1, 1).unwrap(), dec!(100)),
///         NavPoint::new(Date::from_ymd(2024, 2, 1).unwrap(), dec!(105)),
///     ],
/// );
///
/// let lookup = series.as_of(Date::from_ymd(2024, 1, 20).unwrap()).unwrap();
/// assert_eq!(lookup.value, dec!(100));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavSeries {
    /// Identifier of the entity that produced the series.
    pub name: String,

    /// Product or benchmark discriminant.
    pub kind: SeriesKind,

    /// Observations in non-decreasing date order.
    points: Vec<NavPoint>,
}

impl NavSeries {
    /// Creates a series, stably sorting the points into date order.
    #[must_use]
    pub fn new(name: impl Into<String>, kind: SeriesKind, mut points: Vec<NavPoint>) -> Self {
        points.sort_by_key(|p| p.date);
        Self {
            name: name.into(),
            kind,
            points,
        }
    }

    /// Creates a product series.
    #[must_use]
    pub fn product(name: impl Into<String>, points: Vec<NavPoint>) -> Self {
        Self::new(name, SeriesKind::Product, points)
    }

    /// Creates a benchmark series.
    #[must_use]
    pub fn benchmark(name: impl Into<String>, points: Vec<NavPoint>) -> Self {
        Self::new(name, SeriesKind::Benchmark, points)
    }

    /// Returns the number of observations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Checks whether the series has no observations.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Returns the observations in date order.
    #[must_use]
    pub fn points(&self) -> &[NavPoint] {
        &self.points
    }

    /// Returns the earliest observation.
    #[must_use]
    pub fn first(&self) -> Option<&NavPoint> {
        self.points.first()
    }

    /// Returns the most recent observation.
    #[must_use]
    pub fn last(&self) -> Option<&NavPoint> {
        self.points.last()
    }

    /// Returns the date of the earliest observation.
    #[must_use]
    pub fn inception_date(&self) -> Option<Date> {
        self.first().map(|p| p.date)
    }

    /// Checks whether this is a product series.
    #[must_use]
    pub fn is_product(&self) -> bool {
        self.kind == SeriesKind::Product
    }

    /// Checks whether this is a benchmark series.
    #[must_use]
    pub fn is_benchmark(&self) -> bool {
        self.kind == SeriesKind::Benchmark
    }

    /// As-of lookup: the latest observation dated at or before `target`.
    ///
    /// This is a backward-looking join — never interpolated and never a
    /// future-dated point. Returns `None` if the series is empty or every
    /// observation postdates `target`. When several observations share the
    /// target date, the last one in ingestion order wins.
    #[must_use]
    pub fn as_of(&self, target: Date) -> Option<&NavPoint> {
        let idx = self.points.partition_point(|p| p.date <= target);
        if idx == 0 {
            None
        } else {
            self.points.get(idx - 1)
        }
    }

    /// The earliest observation dated at or after `target`.
    ///
    /// Mirror of [`as_of`](Self::as_of); the alignment engine uses it to
    /// pick rebase anchors at a window start.
    #[must_use]
    pub fn first_at_or_after(&self, target: Date) -> Option<&NavPoint> {
        let idx = self.points.partition_point(|p| p.date < target);
        self.points.get(idx)
    }

    /// Re-checks the ingestion contract: every observation must carry a
    /// positive value.
    ///
    /// Ingestion filters malformed quotes before handoff; callers that want
    /// to reject an out-of-contract series at the boundary (rather than see
    /// its windows degrade to absent downstream) run this first. The check
    /// is opt-in — the engines themselves tolerate such points.
    ///
    /// # Errors
    ///
    /// Returns `NavlensError::InvalidSeries` naming the first offending
    /// observation.
    pub fn validate(&self) -> NavlensResult<()> {
        for point in &self.points {
            if point.value <= Decimal::ZERO {
                return Err(NavlensError::invalid_series(
                    &self.name,
                    format!("non-positive value {} at {}", point.value, point.date),
                ));
            }
        }
        Ok(())
    }
}
