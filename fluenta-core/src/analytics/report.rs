//! Report assembly for the presentation layer.

use chrono::{DateTime, Utc};

use super::calendar::{build_activity_calendar, ActivityCell};
use super::distribution::{score_distribution, DistributionBin};
use super::highlights::{rank_highlights, recent, Highlights, RECENT_COUNT};
use super::summary::{summarize, SummaryStats};
use super::trend::{build_trend_series, rolling_average, RollingAverage, TrendPoint};
use super::window::filter_window;
use crate::types::{AggregationWindow, Metric, RatingRecord, ReferenceMonth};

/// Everything the presentation layer needs for one render pass.
#[derive(Debug, Clone, PartialEq)]
pub struct FluencyReport {
    /// The window the charting views were filtered with
    pub window: AggregationWindow,
    /// The month the calendar is anchored to
    pub month: ReferenceMonth,
    /// One point per active day in the window
    pub trend: Vec<TrendPoint>,
    pub naturalness_distribution: Vec<DistributionBin>,
    pub confidence_distribution: Vec<DistributionBin>,
    pub eye_contact_distribution: Vec<DistributionBin>,
    /// Mean over the trend tail
    pub rolling: RollingAverage,
    /// Dense 12-month grid; ignores the window selection
    pub calendar: Vec<ActivityCell>,
    /// Best/worst ratings in the window
    pub highlights: Highlights,
    /// Latest ratings regardless of window, newest first
    pub recent: Vec<RatingRecord>,
    pub summary: SummaryStats,
}

/// Derive the full report from one snapshot of rating rows.
///
/// `records` must be chronologically ascending and well formed; the ingest
/// boundary guarantees both, so violations here are a programming error and
/// only checked in debug builds. `now` anchors the trailing window and
/// `month` anchors the activity calendar. Pure and stateless: the same
/// inputs always produce the same report, and the snapshot is never mutated.
pub fn generate_report(
    records: &[RatingRecord],
    window: AggregationWindow,
    month: ReferenceMonth,
    now: DateTime<Utc>,
) -> FluencyReport {
    debug_assert!(
        records.iter().all(RatingRecord::is_well_formed),
        "rating snapshot violates the store contract"
    );

    tracing::debug!(
        records = records.len(),
        window = %window,
        month = %month.display_name(),
        "Generating fluency report"
    );

    let filtered = filter_window(records, window, now);
    let trend = build_trend_series(&filtered);
    let rolling = rolling_average(&trend);

    let report = FluencyReport {
        window,
        month,
        naturalness_distribution: score_distribution(&filtered, Metric::Naturalness),
        confidence_distribution: score_distribution(&filtered, Metric::Confidence),
        eye_contact_distribution: score_distribution(&filtered, Metric::EyeContact),
        rolling,
        calendar: build_activity_calendar(records, month),
        highlights: rank_highlights(&filtered),
        recent: recent(records, RECENT_COUNT),
        summary: summarize(&filtered),
        trend,
    };

    tracing::debug!(
        trend_points = report.trend.len(),
        in_window = report.summary.total_ratings,
        "Fluency report ready"
    );

    report
}
