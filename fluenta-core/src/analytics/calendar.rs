//! Twelve-month activity calendar.

use std::collections::HashMap;

use chrono::NaiveDate;

use crate::types::{RatingRecord, ReferenceMonth};

/// One day in the activity grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityCell {
    pub date: NaiveDate,
    /// Ratings submitted on this local calendar date
    pub count: usize,
    /// Whether this day belongs to the reference month
    pub is_current_month: bool,
}

/// Build a dense day-per-cell grid over the 12 calendar months ending at
/// `month`.
///
/// Counts run over the full snapshot, deliberately ignoring the window
/// selection, so the calendar shows long-term cadence next to windowed
/// charts. Days without activity get a zero cell; with no records at all the
/// grid degrades to empty rather than a year of zeros.
pub fn build_activity_calendar(
    records: &[RatingRecord],
    month: ReferenceMonth,
) -> Vec<ActivityCell> {
    if records.is_empty() {
        return Vec::new();
    }

    let mut per_day: HashMap<NaiveDate, usize> = HashMap::new();
    for record in records {
        *per_day.entry(record.local_date()).or_insert(0) += 1;
    }

    let end = month.last_day();
    month
        .span_start()
        .iter_days()
        .take_while(|day| *day <= end)
        .map(|date| ActivityCell {
            date,
            count: per_day.get(&date).copied().unwrap_or(0),
            is_current_month: month.contains(date),
        })
        .collect()
}
