//! Integration tests for multi-series chart alignment.
//!
//! Exercises the full alignment flow: series with different inceptions and
//! sampling rhythms merged onto one axis, rebased, and forward-filled.

use navlens_chart::prelude::*;
use rust_decimal_macros::dec;

fn date(y: i32, m: u32, d: u32) -> Date {
    Date::from_ymd(y, m, d).unwrap()
}

/// The two-series comparison scenario: A starts at 50 on Jan 1, B starts
/// at 200 on Jan 10, charted since Jan 1.
fn two_series() -> Vec<NavSeries> {
    vec![
        NavSeries::product(
            "A",
            vec![
                NavPoint::new(date(2024, 1, 1), dec!(50)),
                NavPoint::new(date(2024, 1, 5), dec!(52)),
                NavPoint::new(date(2024, 1, 10), dec!(55)),
                NavPoint::new(date(2024, 1, 20), dec!(54)),
            ],
        ),
        NavSeries::product(
            "B",
            vec![
                NavPoint::new(date(2024, 1, 10), dec!(200)),
                NavPoint::new(date(2024, 1, 15), dec!(210)),
            ],
        ),
    ]
}

#[test]
fn differing_inceptions_share_one_axis() {
    let set = align(&two_series(), ChartWindow::Itd, date(2024, 1, 1)).unwrap();

    assert_eq!(
        set.dates,
        vec![
            date(2024, 1, 1),
            date(2024, 1, 5),
            date(2024, 1, 10),
            date(2024, 1, 15),
            date(2024, 1, 20),
        ]
    );
    assert_eq!(set.series.len(), 2);
    assert_eq!(set.series[0].values.len(), set.dates.len());
    assert_eq!(set.series[1].values.len(), set.dates.len());
}

#[test]
fn magnitudes_are_comparable_after_rebasing() {
    let set = align(&two_series(), ChartWindow::Itd, date(2024, 1, 1)).unwrap();

    let a = set.series_named("A").unwrap();
    let b = set.series_named("B").unwrap();

    // A is rebased against its Jan 1 value of 50.
    assert_eq!(a.values[0], Some(1.0));
    assert!((a.values[2].unwrap() - 1.1).abs() < 1e-12);

    // B's first in-window point plots at exactly 1.0 despite the 4x
    // larger absolute NAV.
    assert_eq!(b.values[2], Some(1.0));
    assert!((b.values[3].unwrap() - 1.05).abs() < 1e-12);
}

#[test]
fn late_starter_is_absent_not_defaulted() {
    let set = align(&two_series(), ChartWindow::Itd, date(2024, 1, 1)).unwrap();
    let b = set.series_named("B").unwrap();

    // Jan 1 and Jan 5 predate B's history: absent, not back-filled from
    // the future, not defaulted to 1.0 or 0.
    assert_eq!(b.values[0], None);
    assert_eq!(b.values[1], None);
}

#[test]
fn gaps_forward_fill_from_the_left_only() {
    let set = align(&two_series(), ChartWindow::Itd, date(2024, 1, 1)).unwrap();

    // B has no Jan 20 observation; the Jan 15 value carries forward.
    let b = set.series_named("B").unwrap();
    assert_eq!(b.values[4], b.values[3]);

    // A has no Jan 15 observation; the Jan 10 value carries forward.
    let a = set.series_named("A").unwrap();
    assert_eq!(a.values[3], a.values[2]);
}

#[test]
fn window_excludes_older_history_and_reanchors() {
    let series = vec![NavSeries::product(
        "LONG",
        vec![
            NavPoint::new(date(2022, 3, 1), dec!(10)),
            NavPoint::new(date(2023, 11, 1), dec!(40)),
            NavPoint::new(date(2024, 1, 5), dec!(44)),
            NavPoint::new(date(2024, 2, 1), dec!(33)),
        ],
    )];

    let set = align(&series, ChartWindow::YearToDate, date(2022, 3, 1)).unwrap();

    assert_eq!(set.dates, vec![date(2024, 1, 5), date(2024, 2, 1)]);
    let long = set.series_named("LONG").unwrap();
    assert_eq!(long.values[0], Some(1.0));
    assert!((long.values[1].unwrap() - 0.75).abs() < 1e-12);
}

#[test]
fn itd_window_spans_the_shared_range_start() {
    // The caller passes the earliest inception in view; the older series
    // anchors there, the younger stays absent until it begins.
    let set = align(&two_series(), ChartWindow::Itd, date(2024, 1, 1)).unwrap();
    assert_eq!(set.dates.first(), Some(&date(2024, 1, 1)));

    // A narrower override simply trims the axis.
    let set = align(&two_series(), ChartWindow::Itd, date(2024, 1, 10)).unwrap();
    assert_eq!(
        set.dates,
        vec![date(2024, 1, 10), date(2024, 1, 15), date(2024, 1, 20)]
    );

    // A is re-anchored at its first value inside the narrower window.
    let a = set.series_named("A").unwrap();
    assert_eq!(a.values[0], Some(1.0));
}

#[test]
fn recomputation_is_idempotent() {
    let first = align(&two_series(), ChartWindow::Itd, date(2024, 1, 1)).unwrap();
    let second = align(&two_series(), ChartWindow::Itd, date(2024, 1, 1)).unwrap();
    assert_eq!(first, second);
}

#[test]
fn empty_view_produces_an_empty_set() {
    let set = align(&[], ChartWindow::YearToDate, date(2024, 1, 1)).unwrap();
    assert!(set.is_empty());
    assert!(set.series.is_empty());
}

#[test]
fn output_serializes_for_the_presentation_layer() {
    let set = align(&two_series(), ChartWindow::OneMonth, date(2024, 1, 1)).unwrap();
    let json = serde_json::to_string(&set).unwrap();
    let parsed: AlignedSeriesSet = serde_json::from_str(&json).unwrap();
    assert_eq!(set, parsed);
}
