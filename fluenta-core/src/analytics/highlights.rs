//! Best/worst ranked ratings and the recent-activity list.

use super::mean1;
use crate::types::RatingRecord;

/// Number of entries kept in each of the best/worst lists.
pub const HIGHLIGHT_COUNT: usize = 7;

/// Number of entries in the recent-ratings list.
pub const RECENT_COUNT: usize = 10;

/// A rating augmented with its rounded three-metric average.
#[derive(Debug, Clone, PartialEq)]
pub struct RankedRating {
    pub record: RatingRecord,
    /// Half-up mean of the three scores, one decimal
    pub average: f64,
}

/// Best and worst ratings by combined average.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Highlights {
    /// Top ratings, descending average
    pub best: Vec<RankedRating>,
    /// Bottom ratings, ascending average
    pub worst: Vec<RankedRating>,
}

/// Rank `records` by combined average into best/worst views.
///
/// Both sorts are stable, so records with equal averages keep their
/// chronological input order in both lists.
pub fn rank_highlights(records: &[RatingRecord]) -> Highlights {
    let ranked: Vec<RankedRating> = records
        .iter()
        .map(|record| RankedRating {
            average: mean1(record.naturalness + record.confidence + record.eye_contact, 3),
            record: record.clone(),
        })
        .collect();

    let mut best = ranked.clone();
    best.sort_by(|a, b| b.average.total_cmp(&a.average));
    best.truncate(HIGHLIGHT_COUNT);

    let mut worst = ranked;
    worst.sort_by(|a, b| a.average.total_cmp(&b.average));
    worst.truncate(HIGHLIGHT_COUNT);

    Highlights { best, worst }
}

/// The most recent ratings, newest first.
pub fn recent(records: &[RatingRecord], limit: usize) -> Vec<RatingRecord> {
    records.iter().rev().take(limit).cloned().collect()
}
