//! Daily trend series and the rolling average over its tail.

use std::collections::HashMap;

use chrono::NaiveDate;

use super::mean1;
use crate::format::format_date_label;
use crate::types::RatingRecord;

/// Number of trailing trend points averaged into [`RollingAverage`].
pub const ROLLING_WINDOW: usize = 7;

/// Per-date metric averages for the trend chart.
#[derive(Debug, Clone, PartialEq)]
pub struct TrendPoint {
    /// Local calendar date of the group
    pub date: NaiveDate,
    /// Short display label, e.g. "Jun 5"
    pub date_label: String,
    pub naturalness: f64,
    pub confidence: f64,
    pub eye_contact: f64,
}

#[derive(Default)]
struct DayAccumulator {
    naturalness: i64,
    confidence: i64,
    eye_contact: i64,
    count: usize,
}

impl DayAccumulator {
    fn add(&mut self, record: &RatingRecord) {
        self.naturalness += record.naturalness;
        self.confidence += record.confidence;
        self.eye_contact += record.eye_contact;
        self.count += 1;
    }
}

/// Build one trend point per distinct local calendar date in `records`.
///
/// Each metric is averaged over that date's records and rounded half-up to
/// one decimal. Dates are emitted in the order they first appear in the
/// input, which for a chronologically ascending snapshot is ascending date
/// order.
pub fn build_trend_series(records: &[RatingRecord]) -> Vec<TrendPoint> {
    let mut order: Vec<NaiveDate> = Vec::new();
    let mut days: HashMap<NaiveDate, DayAccumulator> = HashMap::new();

    for record in records {
        let date = record.local_date();
        days.entry(date)
            .or_insert_with(|| {
                order.push(date);
                DayAccumulator::default()
            })
            .add(record);
    }

    order
        .into_iter()
        .map(|date| {
            let day = &days[&date];
            TrendPoint {
                date,
                date_label: format_date_label(date),
                naturalness: mean1(day.naturalness, day.count),
                confidence: mean1(day.confidence, day.count),
                eye_contact: mean1(day.eye_contact, day.count),
            }
        })
        .collect()
}

/// Mean of the last up-to-[`ROLLING_WINDOW`] trend points, per metric.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RollingAverage {
    pub naturalness: f64,
    pub confidence: f64,
    pub eye_contact: f64,
}

/// Average the tail of `trend` (fewer points if the series is short).
///
/// Computed as a plain sum divided by the tail length, so the result is the
/// exact arithmetic mean of those points. A fixed-divisor running update is
/// not equivalent and must not be substituted here.
pub fn rolling_average(trend: &[TrendPoint]) -> RollingAverage {
    let tail = &trend[trend.len().saturating_sub(ROLLING_WINDOW)..];
    if tail.is_empty() {
        return RollingAverage::default();
    }

    let len = tail.len() as f64;
    RollingAverage {
        naturalness: tail.iter().map(|p| p.naturalness).sum::<f64>() / len,
        confidence: tail.iter().map(|p| p.confidence).sum::<f64>() / len,
        eye_contact: tail.iter().map(|p| p.eye_contact).sum::<f64>() / len,
    }
}
