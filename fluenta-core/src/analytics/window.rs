//! Trailing time-window filtering.

use chrono::{DateTime, Utc};

use crate::types::{AggregationWindow, RatingRecord};

/// Filter `records` down to those submitted within `window`, measured back
/// from `now`.
///
/// The cutoff boundary is inclusive and input ordering is preserved, so a
/// chronologically ascending snapshot stays ascending. [`AggregationWindow::All`]
/// passes every record through.
pub fn filter_window(
    records: &[RatingRecord],
    window: AggregationWindow,
    now: DateTime<Utc>,
) -> Vec<RatingRecord> {
    match window.cutoff(now) {
        Some(cutoff) => records
            .iter()
            .filter(|record| record.created_at >= cutoff)
            .cloned()
            .collect(),
        None => records.to_vec(),
    }
}
