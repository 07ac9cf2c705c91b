// File: crates/story-shell/tests/marker.rs
// Purpose: Marker command parsing and folding into chart props.

use chrono::NaiveDate;

use story_core::{ChartError, HighlightWindow};
use story_shell::{parse_marker_date, ChartProps, MarkerCommand};

fn day(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2017, 9, d).expect("valid date")
}

#[test]
fn wire_format_is_camel_case() {
    let command: MarkerCommand =
        serde_json::from_str(r#"{ "fromDate": "20170910", "toDate": "20170912", "legend": true }"#)
            .expect("parse");
    assert_eq!(command.from_date.as_deref(), Some("20170910"));
    assert_eq!(command.to_date.as_deref(), Some("20170912"));
    assert_eq!(command.legend, Some(true));
    assert_eq!(command.channel_visible, None);
}

#[test]
fn absent_fields_mean_no_change() {
    let prev = ChartProps {
        highlight: Some(HighlightWindow::new(day(10), day(12))),
        legend: true,
        channel_visible: false,
    };
    let next = MarkerCommand::default().apply_to(prev).expect("apply");
    assert_eq!(next, prev);
}

#[test]
fn from_without_to_is_a_single_day_window() {
    let command = MarkerCommand { from_date: Some("20170910".into()), ..MarkerCommand::default() };
    let next = command.apply_to(ChartProps::default()).expect("apply");
    assert_eq!(next.highlight, Some(HighlightWindow::new(day(10), day(11))));
}

#[test]
fn explicit_range_is_kept() {
    let command = MarkerCommand {
        from_date: Some("20170910".into()),
        to_date: Some("20170915".into()),
        ..MarkerCommand::default()
    };
    let next = command.apply_to(ChartProps::default()).expect("apply");
    assert_eq!(next.highlight, Some(HighlightWindow::new(day(10), day(15))));
}

#[test]
fn none_sentinel_clears_the_highlight_and_keeps_other_fields() {
    let prev = ChartProps {
        highlight: Some(HighlightWindow::new(day(10), day(12))),
        legend: true,
        channel_visible: true,
    };
    let command = MarkerCommand {
        from_date: Some("none".into()),
        legend: Some(false),
        ..MarkerCommand::default()
    };
    let next = command.apply_to(prev).expect("apply");
    assert_eq!(next.highlight, None);
    assert!(!next.legend);
    assert!(next.channel_visible);
}

#[test]
fn malformed_dates_are_recoverable_errors() {
    for raw in ["2017091", "201709100", "2017-09-10", "20171332", "abcdefgh"] {
        let err = parse_marker_date(raw).expect_err("invalid");
        assert_eq!(err, ChartError::InvalidMarkerDate { raw: raw.to_string() });
    }

    let command = MarkerCommand { from_date: Some("20171332".into()), ..MarkerCommand::default() };
    let prev = ChartProps { legend: true, ..ChartProps::default() };
    assert!(command.apply_to(prev).is_err());
}

#[test]
fn valid_compact_dates_parse() {
    assert_eq!(parse_marker_date("20170910").expect("date"), day(10));
    assert_eq!(
        parse_marker_date("20171231").expect("date"),
        NaiveDate::from_ymd_opt(2017, 12, 31).expect("valid date")
    );
}
