//! Aggregate summary statistics for the dashboard header.

use std::collections::HashSet;

use super::mean1;
use crate::types::RatingRecord;

/// Header statistics for the filtered window.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SummaryStats {
    /// Total number of ratings
    pub total_ratings: usize,
    /// Distinct raters
    pub unique_raters: usize,
    /// Mean naturalness, one decimal
    pub avg_naturalness: f64,
    /// Mean confidence, one decimal
    pub avg_confidence: f64,
    /// Mean eye contact, one decimal
    pub avg_eye_contact: f64,
}

/// Compute summary statistics over `records`.
///
/// An empty slice yields all zeros rather than dividing by zero.
pub fn summarize(records: &[RatingRecord]) -> SummaryStats {
    if records.is_empty() {
        return SummaryStats::default();
    }

    let raters: HashSet<&str> = records.iter().map(|r| r.user_id.as_str()).collect();
    let count = records.len();

    SummaryStats {
        total_ratings: count,
        unique_raters: raters.len(),
        avg_naturalness: mean1(records.iter().map(|r| r.naturalness).sum(), count),
        avg_confidence: mean1(records.iter().map(|r| r.confidence).sum(), count),
        avg_eye_contact: mean1(records.iter().map(|r| r.eye_contact).sum(), count),
    }
}
