//! Date-union alignment, rebasing, and forward-fill.

use std::collections::{BTreeSet, HashMap};

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use navlens_core::{Date, NavSeries, NavlensResult};

use crate::window::ChartWindow;

/// One rebased series on the shared date axis.
///
/// `values` runs parallel to the owning set's `dates`; `None` marks a date
/// where the series has not yet started.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlignedSeries {
    /// Name of the entity the series came from.
    pub name: String,

    /// Rebased (and forward-filled) values, one slot per axis date.
    pub values: Vec<Option<f64>>,
}

/// Chart-ready aligned view over several series.
///
/// Transient by design: recomputed per chart request, never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlignedSeriesSet {
    /// The shared date axis, ascending.
    pub dates: Vec<Date>,

    /// One rebased series per input entity, in input order.
    pub series: Vec<AlignedSeries>,
}

impl AlignedSeriesSet {
    /// Returns the number of dates on the axis.
    #[must_use]
    pub fn len(&self) -> usize {
        self.dates.len()
    }

    /// Checks whether the axis is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    /// Looks up a series by entity name.
    #[must_use]
    pub fn series_named(&self, name: &str) -> Option<&AlignedSeries> {
        self.series.iter().find(|s| s.name == name)
    }
}

/// Aligns several series onto a shared, range-filtered date axis for
/// visual comparison.
///
/// The axis is the union of every date in every input series, filtered to
/// the resolved window. Each series is rebased so its first in-window
/// observation plots at exactly 1.0, then forward-filled across sampling
/// gaps. Dates before a series' first in-window observation stay absent —
/// they are never back-filled from the future and never defaulted.
///
/// `range_start` feeds the [`ChartWindow::Itd`] window: the caller passes
/// the earliest inception date among the entities in view so all series
/// share one window start.
///
/// # Errors
///
/// Returns `NavlensError::InvalidDate` only if window resolution leaves
/// the supported calendar range; missing data is never an error here.
pub fn align(
    entities: &[NavSeries],
    window: ChartWindow,
    range_start: Date,
) -> NavlensResult<AlignedSeriesSet> {
    let axis: BTreeSet<Date> = entities
        .iter()
        .flat_map(|series| series.points().iter().map(|p| p.date))
        .collect();

    let latest = axis.iter().next_back().copied().unwrap_or_else(Date::today);
    let start = window.start_date(latest, range_start)?;

    let dates: Vec<Date> = axis.into_iter().filter(|d| *d >= start).collect();

    let series = entities
        .iter()
        .map(|entity| rebase_series(entity, &dates, start))
        .collect();

    Ok(AlignedSeriesSet { dates, series })
}

/// Rebases one series over the filtered axis and forward-fills its gaps.
fn rebase_series(entity: &NavSeries, dates: &[Date], start: Date) -> AlignedSeries {
    // Exact-date grid; a later duplicate wins, matching the as-of tie rule.
    let by_date: HashMap<Date, Decimal> = entity
        .points()
        .iter()
        .map(|p| (p.date, p.value))
        .collect();

    // A series with no in-window observation keeps the unit anchor; so does
    // a zero-valued one, which would otherwise make the division undefined.
    let anchor = entity
        .first_at_or_after(start)
        .map(|p| p.value)
        .filter(|v| !v.is_zero())
        .unwrap_or(Decimal::ONE);

    // Explicit fold: the accumulator carries the last defined value so gaps
    // fill forward, while dates before the first observation stay absent.
    let (values, _) = dates.iter().fold(
        (Vec::with_capacity(dates.len()), None),
        |(mut values, prev), date| {
            let current = by_date
                .get(date)
                .and_then(|value| (*value / anchor).to_f64())
                .or(prev);
            values.push(current);
            (values, current)
        },
    );

    AlignedSeries {
        name: entity.name.clone(),
        values,
    }
}
