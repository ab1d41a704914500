//! Single period-return calculation between two as-of points.

use rust_decimal::prelude::ToPrimitive;

use navlens_core::{Date, NavSeries};

/// Computes the simple (non-annualized) return of a series between two dates.
///
/// Both ends are resolved with the backward-looking as-of join, so the
/// calculation works over sparse, irregularly sampled series. Returns the
/// fraction `(end - start) / start`, e.g. `0.0234` for +2.34%.
///
/// Returns `None` when the window cannot be priced:
/// - either as-of lookup fails (empty series, or the date predates the
///   first observation),
/// - the start value is zero (the ratio is undefined), or
/// - the resolved end point is not strictly after the resolved start point
///   (a degenerate window — both dates collapsed onto the same observation,
///   which happens when the series is younger than the window implies).
///
/// A zero *return* is a valid result; callers must not conflate it with
/// `None`.
#[must_use]
pub fn period_return(series: &NavSeries, start_date: Date, end_date: Date) -> Option<f64> {
    let start = series.as_of(start_date)?;
    let end = series.as_of(end_date)?;

    if start.value.is_zero() || end.date <= start.date {
        return None;
    }

    ((end.value - start.value) / start.value).to_f64()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use navlens_core::NavPoint;
    use rust_decimal_macros::dec;

    fn date(y: i32, m: u32, d: u32) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    fn sample_series() -> NavSeries {
        NavSeries::product(
            "FUND_A",
            vec![
                NavPoint::new(date(2024, 1, 1), dec!(100)),
                NavPoint::new(date(2024, 1, 8), dec!(102)),
                NavPoint::new(date(2024, 2, 1), dec!(105)),
            ],
        )
    }

    #[test]
    fn test_simple_return() {
        let series = sample_series();
        let ret = period_return(&series, date(2024, 1, 1), date(2024, 2, 1)).unwrap();
        assert_relative_eq!(ret, 0.05, epsilon = 1e-12);
    }

    #[test]
    fn test_as_of_resolution_inside_window() {
        // Start resolves backward from Jan 25 to the Jan 8 point.
        let series = sample_series();
        let ret = period_return(&series, date(2024, 1, 25), date(2024, 2, 1)).unwrap();
        assert_relative_eq!(ret, (105.0 - 102.0) / 102.0, epsilon = 1e-12);
    }

    #[test]
    fn test_start_before_inception_is_none() {
        let series = sample_series();
        assert!(period_return(&series, date(2023, 12, 1), date(2024, 2, 1)).is_none());
    }

    #[test]
    fn test_degenerate_window_is_none() {
        // Both dates resolve to the same observation.
        let series = sample_series();
        assert!(period_return(&series, date(2024, 1, 8), date(2024, 1, 10)).is_none());
        assert!(period_return(&series, date(2024, 1, 1), date(2024, 1, 1)).is_none());
    }

    #[test]
    fn test_reversed_window_is_none() {
        let series = sample_series();
        assert!(period_return(&series, date(2024, 2, 1), date(2024, 1, 1)).is_none());
    }

    #[test]
    fn test_zero_start_value_is_none() {
        let series = NavSeries::product(
            "ZERO_START",
            vec![
                NavPoint::new(date(2024, 1, 1), dec!(0)),
                NavPoint::new(date(2024, 2, 1), dec!(50)),
            ],
        );
        assert!(period_return(&series, date(2024, 1, 1), date(2024, 2, 1)).is_none());
    }

    #[test]
    fn test_zero_return_is_some() {
        let series = NavSeries::product(
            "FLAT",
            vec![
                NavPoint::new(date(2024, 1, 1), dec!(100)),
                NavPoint::new(date(2024, 2, 1), dec!(100)),
            ],
        );
        let ret = period_return(&series, date(2024, 1, 1), date(2024, 2, 1)).unwrap();
        assert_eq!(ret, 0.0);
    }

    #[test]
    fn test_empty_series_is_none() {
        let series = NavSeries::product("EMPTY", vec![]);
        assert!(period_return(&series, date(2024, 1, 1), date(2024, 2, 1)).is_none());
    }

    #[test]
    fn test_negative_return() {
        let series = NavSeries::product(
            "DOWN",
            vec![
                NavPoint::new(date(2024, 1, 1), dec!(200)),
                NavPoint::new(date(2024, 2, 1), dec!(150)),
            ],
        );
        let ret = period_return(&series, date(2024, 1, 1), date(2024, 2, 1)).unwrap();
        assert_relative_eq!(ret, -0.25, epsilon = 1e-12);
    }
}
