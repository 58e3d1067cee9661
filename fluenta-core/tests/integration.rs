//! Integration tests for the fluenta snapshot-to-report pipeline
//!
//! These tests use a fixture snapshot in `tests/fixtures/ratings/` to verify
//! the end-to-end decode and aggregation flow the way the client exercises
//! it: one JSON payload in, one report out.

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use fluenta_core::analytics::{generate_report, HIGHLIGHT_COUNT};
use fluenta_core::{ingest, AggregationWindow, RatingRecord, ReferenceMonth};
use std::path::PathBuf;

/// Get the path to a fixture file
fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures/ratings")
        .join(name)
}

fn load_snapshot() -> Vec<RatingRecord> {
    let json = std::fs::read_to_string(fixture_path("snapshot.json")).unwrap();
    ingest::decode_snapshot(&json).expect("fixture snapshot should decode")
}

/// The fixed "now" every test anchors its windows to.
fn report_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 6, 30, 12, 0, 0).unwrap()
}

fn june() -> ReferenceMonth {
    ReferenceMonth::new(2025, 6)
}

// ============================================
// Boundary decoding
// ============================================

#[test]
fn test_snapshot_decodes_sorted_and_typed() {
    let records = load_snapshot();
    assert_eq!(records.len(), 12);

    // The fixture lists r02 before r01; decoding restores chronological order.
    let ids: Vec<String> = records.iter().map(|r| r.id.clone()).collect();
    let expected: Vec<String> = (1..=12).map(|i| format!("r{:02}", i)).collect();
    assert_eq!(ids, expected);

    assert_eq!(records[0].comment.as_deref(), Some("rushed through the intro"));
    assert_eq!(records[1].comment, None);
    assert!(records.iter().all(RatingRecord::is_well_formed));
}

// ============================================
// Full report over the unbounded window
// ============================================

#[test]
fn test_report_summary_and_distributions() {
    let records = load_snapshot();
    let report = generate_report(&records, AggregationWindow::All, june(), report_time());

    assert_eq!(report.summary.total_ratings, 12);
    assert_eq!(report.summary.unique_raters, 2);
    assert_eq!(report.summary.avg_naturalness, 6.2);
    assert_eq!(report.summary.avg_confidence, 6.6);
    assert_eq!(report.summary.avg_eye_contact, 6.1);

    let ranges: Vec<(&str, usize)> = report
        .naturalness_distribution
        .iter()
        .map(|b| (b.range.as_str(), b.count))
        .collect();
    assert_eq!(ranges, vec![("2-3", 2), ("4-5", 2), ("6-7", 4), ("8+", 4)]);

    for bins in [
        &report.naturalness_distribution,
        &report.confidence_distribution,
        &report.eye_contact_distribution,
    ] {
        let total: usize = bins.iter().map(|b| b.count).sum();
        assert_eq!(total, 12);
    }
}

#[test]
fn test_trend_has_one_point_per_active_day() {
    let records = load_snapshot();
    let report = generate_report(&records, AggregationWindow::All, june(), report_time());

    let mut expected_dates: Vec<NaiveDate> = records.iter().map(|r| r.local_date()).collect();
    expected_dates.dedup();

    let trend_dates: Vec<NaiveDate> = report.trend.iter().map(|p| p.date).collect();
    assert_eq!(trend_dates, expected_dates);

    // Two ratings landed on the same day; their point carries the day means.
    let shared = records[3].local_date();
    assert_eq!(shared, records[4].local_date());
    let point = report.trend.iter().find(|p| p.date == shared).unwrap();
    assert_eq!(point.naturalness, 7.5);
    assert_eq!(point.confidence, 6.5);
    assert_eq!(point.eye_contact, 6.5);
}

#[test]
fn test_rolling_average_matches_trend_tail() {
    let records = load_snapshot();
    let report = generate_report(&records, AggregationWindow::All, june(), report_time());

    let tail = &report.trend[report.trend.len().saturating_sub(7)..];
    let expected: f64 = tail.iter().map(|p| p.naturalness).sum::<f64>() / tail.len() as f64;
    assert!((report.rolling.naturalness - expected).abs() < 1e-9);
}

#[test]
fn test_highlights_rank_and_break_ties_chronologically() {
    let records = load_snapshot();
    let report = generate_report(&records, AggregationWindow::All, june(), report_time());

    assert_eq!(report.highlights.best.len(), HIGHLIGHT_COUNT);
    assert_eq!(report.highlights.worst.len(), HIGHLIGHT_COUNT);

    let best: Vec<&str> = report
        .highlights
        .best
        .iter()
        .map(|r| r.record.id.as_str())
        .collect();
    assert_eq!(best, vec!["r08", "r06", "r12", "r05", "r07", "r04", "r10"]);
    assert_eq!(report.highlights.best[0].average, 9.3);

    let worst: Vec<&str> = report
        .highlights
        .worst
        .iter()
        .map(|r| r.record.id.as_str())
        .collect();
    // r04, r10, and r11 all average 6.3; submission order decides.
    assert_eq!(worst, vec!["r09", "r01", "r02", "r03", "r04", "r10", "r11"]);
}

#[test]
fn test_recent_list_is_newest_first() {
    let records = load_snapshot();
    let report = generate_report(&records, AggregationWindow::All, june(), report_time());

    let recent: Vec<&str> = report.recent.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(
        recent,
        vec!["r12", "r11", "r10", "r09", "r08", "r07", "r06", "r05", "r04", "r03"]
    );
}

// ============================================
// Window behavior
// ============================================

#[test]
fn test_windows_narrow_monotonically() {
    let records = load_snapshot();

    let counts: Vec<usize> = AggregationWindow::CHOICES
        .iter()
        .map(|&window| {
            generate_report(&records, window, june(), report_time())
                .summary
                .total_ratings
        })
        .collect();

    assert_eq!(counts, vec![7, 9, 11, 12]);
}

#[test]
fn test_seven_day_window_drops_older_ratings() {
    let records = load_snapshot();
    let report = generate_report(&records, AggregationWindow::Days7, june(), report_time());

    assert_eq!(report.summary.total_ratings, 7);
    // The earliest surviving trend point is the Jun 24 rating.
    assert_eq!(report.trend.first().unwrap().date, records[5].local_date());
    assert_eq!(report.summary.unique_raters, 2);
}

// ============================================
// Calendar behavior
// ============================================

#[test]
fn test_calendar_is_dense_and_ignores_window() {
    let records = load_snapshot();
    let report = generate_report(&records, AggregationWindow::Days7, june(), report_time());

    // Jul 2024 .. Jun 2025 has 365 days (Feb 2025 is not a leap February).
    assert_eq!(report.calendar.len(), 365);

    let start = june().span_start();
    let end = june().last_day();
    assert_eq!(report.calendar.first().unwrap().date, start);
    assert_eq!(report.calendar.last().unwrap().date, end);

    // A rating far outside the 7-day window still shows up.
    let march_date = records[0].local_date();
    let cell = report.calendar.iter().find(|c| c.date == march_date).unwrap();
    assert_eq!(cell.count, 1);

    let counted: usize = report.calendar.iter().map(|c| c.count).sum();
    assert_eq!(counted, 12);

    let flagged = report.calendar.iter().filter(|c| c.is_current_month).count();
    assert_eq!(flagged, 30);
}

#[test]
fn test_previous_year_calendar_shifts_span() {
    let records = load_snapshot();
    let last_year = june().previous();
    let report = generate_report(&records, AggregationWindow::All, last_year, report_time());

    // Jul 2023 .. Jun 2024 contains the 2024 leap day and none of the ratings.
    assert_eq!(report.calendar.len(), 366);
    assert!(report.calendar.iter().all(|c| c.count == 0));
}
