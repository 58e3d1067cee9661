//! Formatting helpers shared across presentation surfaces.

use chrono::{DateTime, NaiveDate, Utc};

/// Format a date as a short chart label (e.g., "Jun 5").
pub fn format_date_label(date: NaiveDate) -> String {
    date.format("%b %-d").to_string()
}

/// Format a date with its year (e.g., "Jun 5, 2025").
pub fn format_date_full(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}

/// Format a timestamp as relative time (e.g., "2m ago").
pub fn format_relative_time(ts: DateTime<Utc>) -> String {
    let now = Utc::now();
    let duration = now.signed_duration_since(ts);

    if duration.num_seconds() < 0 {
        "just now".to_string()
    } else if duration.num_seconds() < 60 {
        format!("{}s ago", duration.num_seconds())
    } else if duration.num_minutes() < 60 {
        format!("{}m ago", duration.num_minutes())
    } else if duration.num_hours() < 24 {
        format!("{}h ago", duration.num_hours())
    } else if duration.num_days() < 7 {
        format!("{}d ago", duration.num_days())
    } else {
        ts.format("%b %d").to_string()
    }
}

/// Qualitative band for a 1-10 score, matching the rating form's color scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreBand {
    Excellent,
    Good,
    Fair,
    Poor,
}

impl ScoreBand {
    /// Band for a raw score: 8+ excellent, 6+ good, 3+ fair, below that poor.
    pub fn from_score(score: i64) -> Self {
        if score >= 8 {
            ScoreBand::Excellent
        } else if score >= 6 {
            ScoreBand::Good
        } else if score >= 3 {
            ScoreBand::Fair
        } else {
            ScoreBand::Poor
        }
    }

    /// Returns the display label for this band
    pub fn label(&self) -> &'static str {
        match self {
            ScoreBand::Excellent => "Excellent",
            ScoreBand::Good => "Good",
            ScoreBand::Fair => "Fair",
            ScoreBand::Poor => "Poor",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_date_labels() {
        let date = NaiveDate::from_ymd_opt(2025, 6, 5).unwrap();
        assert_eq!(format_date_label(date), "Jun 5");
        assert_eq!(format_date_full(date), "Jun 5, 2025");

        let padded = NaiveDate::from_ymd_opt(2025, 12, 31).unwrap();
        assert_eq!(format_date_label(padded), "Dec 31");
    }

    #[test]
    fn test_score_bands() {
        assert_eq!(ScoreBand::from_score(10), ScoreBand::Excellent);
        assert_eq!(ScoreBand::from_score(8), ScoreBand::Excellent);
        assert_eq!(ScoreBand::from_score(7), ScoreBand::Good);
        assert_eq!(ScoreBand::from_score(6), ScoreBand::Good);
        assert_eq!(ScoreBand::from_score(5), ScoreBand::Fair);
        assert_eq!(ScoreBand::from_score(3), ScoreBand::Fair);
        assert_eq!(ScoreBand::from_score(2), ScoreBand::Poor);
        assert_eq!(ScoreBand::from_score(1).label(), "Poor");
    }
}
