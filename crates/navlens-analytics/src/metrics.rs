//! Per-entity performance metrics.
//!
//! Derives the full metrics record for one NAV series: trailing return
//! windows, the six-month monthly breakdown, and excess returns against a
//! benchmark set.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use navlens_core::{Date, NavSeries};

use crate::error::{AnalyticsError, AnalyticsResult};
use crate::returns::period_return;

/// Number of trailing calendar months in the monthly breakdown.
const TRAILING_MONTHS: i32 = 6;

/// One month's return in the trailing breakdown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyReturn {
    /// Short month-and-year label, e.g. `"Mar 2024"`.
    pub label: String,

    /// Simple return over the month's window.
    pub value: f64,
}

/// Excess returns of a product over one benchmark.
///
/// Each field is `product - benchmark` over the same window, present only
/// when both sides could be computed. The ITD window is anchored at the
/// **product's** inception date on both sides, so the comparison covers the
/// lifetime of the product rather than that of the (typically older)
/// benchmark.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExcessReturn {
    /// Name of the benchmark being compared against.
    pub benchmark: String,

    /// One-week excess return.
    pub change_1w: Option<f64>,

    /// One-month excess return.
    pub change_1m: Option<f64>,

    /// Year-to-date excess return.
    pub change_ytd: Option<f64>,

    /// Since-product-inception excess return.
    pub change_itd: Option<f64>,
}

/// The derived metrics record for one series.
///
/// Recomputed wholesale whenever the underlying series changes; it carries
/// no identity or state of its own. Absent windows mean "not computable from
/// the available history", never zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesMetrics {
    /// Name of the series the record was derived from.
    pub name: String,

    /// Date of the first observation.
    pub inception_date: Date,

    /// Date of the most recent observation.
    pub latest_date: Date,

    /// Most recent NAV.
    pub latest_value: Decimal,

    /// Trailing one-week return.
    pub change_1w: Option<f64>,

    /// Trailing one-calendar-month return.
    pub change_1m: Option<f64>,

    /// Year-to-date return.
    pub change_ytd: Option<f64>,

    /// Since-inception return.
    pub change_itd: Option<f64>,

    /// Trailing monthly returns, oldest first. Months the history cannot
    /// price are omitted, so the list holds between 0 and 6 entries.
    pub monthly: Vec<MonthlyReturn>,

    /// Excess returns, one entry per benchmark. Empty for benchmark series
    /// and for products computed without a benchmark set.
    pub excess_returns: Vec<ExcessReturn>,
}

/// Reference dates for the trailing windows, all derived from the latest
/// observation date.
#[derive(Debug, Clone, Copy)]
struct ReferenceDates {
    one_week_ago: Date,
    one_month_ago: Date,
    start_of_year: Date,
}

fn reference_dates(latest: Date) -> AnalyticsResult<ReferenceDates> {
    Ok(ReferenceDates {
        one_week_ago: latest.add_days(-7),
        one_month_ago: latest.add_months(-1)?,
        start_of_year: latest.start_of_year(),
    })
}

/// Computes the full metrics record for one series.
///
/// Every window degrades independently to `None` when the history cannot
/// price it, so a young product still gets a valid record with most fields
/// absent. Excess returns are produced only for products, one entry per
/// benchmark in `benchmarks`.
///
/// # Errors
///
/// Returns [`AnalyticsError::EmptySeries`] if the entity has no points;
/// inception and latest date cannot be derived without at least one.
pub fn compute_series_metrics(
    entity: &NavSeries,
    benchmarks: &[NavSeries],
) -> AnalyticsResult<SeriesMetrics> {
    let (first, last) = match (entity.first(), entity.last()) {
        (Some(first), Some(last)) => (first, last),
        _ => return Err(AnalyticsError::empty_series(&entity.name)),
    };

    let inception_date = first.date;
    let latest_date = last.date;
    let refs = reference_dates(latest_date)?;

    let change_1w = period_return(entity, refs.one_week_ago, latest_date);
    let change_1m = period_return(entity, refs.one_month_ago, latest_date);
    let change_ytd = period_return(entity, refs.start_of_year, latest_date);
    let change_itd = period_return(entity, inception_date, latest_date);

    let monthly = monthly_breakdown(entity, latest_date)?;

    let excess_returns = if entity.is_product() {
        benchmarks
            .iter()
            .map(|benchmark| {
                excess_vs_benchmark(
                    change_1w,
                    change_1m,
                    change_ytd,
                    change_itd,
                    inception_date,
                    latest_date,
                    refs,
                    benchmark,
                )
            })
            .collect()
    } else {
        Vec::new()
    };

    Ok(SeriesMetrics {
        name: entity.name.clone(),
        inception_date,
        latest_date,
        latest_value: last.value,
        change_1w,
        change_1m,
        change_ytd,
        change_itd,
        monthly,
        excess_returns,
    })
}

/// Trailing monthly returns, oldest first.
///
/// For each of the six months ending at the latest observation's month, the
/// window runs from the first day of the preceding month to the last day of
/// the anchor month, both resolved as-of. Months the history cannot price
/// are omitted rather than recorded as absent.
fn monthly_breakdown(series: &NavSeries, latest: Date) -> AnalyticsResult<Vec<MonthlyReturn>> {
    let mut months = Vec::with_capacity(TRAILING_MONTHS as usize);

    for i in 0..TRAILING_MONTHS {
        let anchor = latest.add_months(-i)?.start_of_month();
        let month_end = anchor.end_of_month();
        let month_start = anchor.add_months(-1)?;

        if let Some(value) = period_return(series, month_start, month_end) {
            months.push(MonthlyReturn {
                label: anchor.month_label(),
                value,
            });
        }
    }

    // Collected most-recent-first; presentation wants oldest first.
    months.reverse();
    Ok(months)
}

/// Excess returns of one product over one benchmark.
///
/// The benchmark's 1W/1M/YTD returns use the same reference dates as the
/// product's; its ITD return is anchored at the product's inception. A
/// benchmark with no observation at or before that inception yields an
/// absent ITD excess even when its shorter windows are pricable.
#[allow(clippy::too_many_arguments)]
fn excess_vs_benchmark(
    product_1w: Option<f64>,
    product_1m: Option<f64>,
    product_ytd: Option<f64>,
    product_itd: Option<f64>,
    product_inception: Date,
    latest: Date,
    refs: ReferenceDates,
    benchmark: &NavSeries,
) -> ExcessReturn {
    let bench_1w = period_return(benchmark, refs.one_week_ago, latest);
    let bench_1m = period_return(benchmark, refs.one_month_ago, latest);
    let bench_ytd = period_return(benchmark, refs.start_of_year, latest);
    let bench_itd = period_return(benchmark, product_inception, latest);

    ExcessReturn {
        benchmark: benchmark.name.clone(),
        change_1w: difference(product_1w, bench_1w),
        change_1m: difference(product_1m, bench_1m),
        change_ytd: difference(product_ytd, bench_ytd),
        change_itd: difference(product_itd, bench_itd),
    }
}

/// `product - benchmark`, present only when both sides exist.
fn difference(product: Option<f64>, benchmark: Option<f64>) -> Option<f64> {
    match (product, benchmark) {
        (Some(p), Some(b)) => Some(p - b),
        _ => None,
    }
}
