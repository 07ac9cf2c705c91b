// File: crates/story-core/tests/dataset.rs
// Purpose: Dataset invariants: ordering, share bounds, exact-date lookup.

use chrono::NaiveDate;

use story_core::{ChartError, Dataset, SeriesPoint};

fn day(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2017, 9, d).expect("valid date")
}

fn row(d: u32) -> SeriesPoint {
    SeriesPoint::try_new(day(d), 1.0, 2.0, 3.0, 4.0).expect("valid row")
}

#[test]
fn shares_outside_the_percentage_bound_are_rejected() {
    let err = SeriesPoint::try_new(day(9), 1.0, 101.0, 3.0, 4.0).expect_err("over 100");
    assert!(matches!(err, ChartError::InvalidData { .. }));
    let err = SeriesPoint::try_new(day(9), -0.5, 2.0, 3.0, 4.0).expect_err("negative");
    assert!(matches!(err, ChartError::InvalidData { .. }));
}

#[test]
fn dates_must_strictly_increase() {
    let err = Dataset::try_new(vec![row(10), row(9)]).expect_err("regression");
    assert!(matches!(err, ChartError::InvalidData { .. }));
    let err = Dataset::try_new(vec![row(9), row(9)]).expect_err("duplicate");
    assert!(matches!(err, ChartError::InvalidData { .. }));
}

#[test]
fn lookup_is_exact_match_only() {
    let dataset = Dataset::try_new(vec![row(9), row(11)]).expect("dataset");
    assert_eq!(dataset.row_at(day(11)).expect("hit").date, day(11));
    let err = dataset.row_at(day(10)).expect_err("gap day");
    assert_eq!(err, ChartError::MissingHighlightMatch { date: day(10) });
}

#[test]
fn window_from_slices_at_the_first_included_date() {
    let dataset = Dataset::try_new(vec![row(9), row(10), row(11)]).expect("dataset");
    assert_eq!(dataset.window_from(day(10)).len(), 2);
    assert_eq!(dataset.window_from(day(1)).len(), 3);
    assert!(dataset.window_from(day(12)).is_empty());
    assert_eq!(dataset.date_extent().expect("extent"), (day(9), day(11)));
}
