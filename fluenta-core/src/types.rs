//! Core domain types for fluenta
//!
//! These types represent the inputs of the aggregation core: rating rows as
//! the external store hands them over, and the two UI-driven selectors that
//! parameterize a report.
//!
//! ## Terminology
//!
//! | Term | Definition |
//! |------|------------|
//! | **Rating** | One submission judging a clip on three 1-10 metrics |
//! | **Rater** | The person who submitted a rating (`user_id`) |
//! | **Metric** | One judged dimension: naturalness, confidence, eye contact |
//! | **Window** | Trailing cutoff applied to the charting views |
//! | **Reference month** | Calendar month anchoring the activity calendar |
//!
//! Timestamps are stored in UTC and converted to the local calendar only for
//! date grouping, so a rating lands on the day the rater actually saw.

use chrono::{DateTime, Datelike, Duration, Local, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

// ============================================
// Rating records
// ============================================

/// A single fluency rating submitted by a rater about a clip.
///
/// Rows are owned by the external rating store and are read-only here; one
/// aggregation pass never mutates its input snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RatingRecord {
    /// Opaque unique identifier issued by the store
    pub id: String,
    /// Identifier of the rater
    pub user_id: String,
    /// When the rating was submitted
    pub created_at: DateTime<Utc>,
    /// How natural the speech sounded (1-10)
    pub naturalness: i64,
    /// How confident the speaker appeared (1-10)
    pub confidence: i64,
    /// Quality of eye contact (1-10)
    pub eye_contact: i64,
    /// Optional free-text feedback
    #[serde(default)]
    pub comment: Option<String>,
}

impl RatingRecord {
    /// Lowest valid score.
    pub const SCORE_MIN: i64 = 1;
    /// Highest valid score.
    pub const SCORE_MAX: i64 = 10;

    /// Score for a given metric.
    pub fn score(&self, metric: Metric) -> i64 {
        match metric {
            Metric::Naturalness => self.naturalness,
            Metric::Confidence => self.confidence,
            Metric::EyeContact => self.eye_contact,
        }
    }

    /// Local calendar date the rating was submitted on.
    pub fn local_date(&self) -> NaiveDate {
        self.created_at.with_timezone(&Local).date_naive()
    }

    /// Whether ids are present and every score lies in the 1-10 domain.
    ///
    /// The ingest boundary enforces this once; inside the aggregator it is a
    /// precondition checked only in debug builds.
    pub fn is_well_formed(&self) -> bool {
        !self.id.is_empty()
            && !self.user_id.is_empty()
            && Metric::ALL.iter().all(|&metric| {
                (Self::SCORE_MIN..=Self::SCORE_MAX).contains(&self.score(metric))
            })
    }
}

// ============================================
// Metrics
// ============================================

/// The three judged dimensions of a rating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    Naturalness,
    Confidence,
    EyeContact,
}

impl Metric {
    /// All metrics, in display order.
    pub const ALL: [Metric; 3] = [Metric::Naturalness, Metric::Confidence, Metric::EyeContact];

    /// Returns the identifier used in row fields and config
    pub fn as_str(&self) -> &'static str {
        match self {
            Metric::Naturalness => "naturalness",
            Metric::Confidence => "confidence",
            Metric::EyeContact => "eye_contact",
        }
    }

    /// Returns the display name for chart legends
    pub fn display_name(&self) -> &'static str {
        match self {
            Metric::Naturalness => "Naturalness",
            Metric::Confidence => "Confidence",
            Metric::EyeContact => "Eye Contact",
        }
    }
}

impl std::fmt::Display for Metric {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Metric {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "naturalness" => Ok(Metric::Naturalness),
            "confidence" => Ok(Metric::Confidence),
            "eye_contact" => Ok(Metric::EyeContact),
            _ => Err(format!("unknown metric: {}", s)),
        }
    }
}

// ============================================
// Aggregation window
// ============================================

/// Trailing time window applied to the charting views.
///
/// The cutoff is inclusive: a rating submitted exactly N days before "now"
/// still falls inside the N-day window.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AggregationWindow {
    /// Last 7 days
    #[serde(rename = "7d")]
    Days7,
    /// Last 30 days
    #[serde(rename = "30d")]
    Days30,
    /// Last 90 days
    #[serde(rename = "90d")]
    Days90,
    /// No cutoff
    #[default]
    #[serde(rename = "all")]
    All,
}

impl AggregationWindow {
    /// All selectable windows, narrowest first.
    pub const CHOICES: [AggregationWindow; 4] = [
        AggregationWindow::Days7,
        AggregationWindow::Days30,
        AggregationWindow::Days90,
        AggregationWindow::All,
    ];

    /// Trailing length in days, or `None` for the unbounded window.
    pub fn days(&self) -> Option<i64> {
        match self {
            AggregationWindow::Days7 => Some(7),
            AggregationWindow::Days30 => Some(30),
            AggregationWindow::Days90 => Some(90),
            AggregationWindow::All => None,
        }
    }

    /// Inclusive lower timestamp bound relative to `now`, if any.
    pub fn cutoff(&self, now: DateTime<Utc>) -> Option<DateTime<Utc>> {
        self.days().map(|days| now - Duration::days(days))
    }

    /// Returns the identifier used in config and UI state
    pub fn as_str(&self) -> &'static str {
        match self {
            AggregationWindow::Days7 => "7d",
            AggregationWindow::Days30 => "30d",
            AggregationWindow::Days90 => "90d",
            AggregationWindow::All => "all",
        }
    }
}

impl std::fmt::Display for AggregationWindow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for AggregationWindow {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "7d" => Ok(AggregationWindow::Days7),
            "30d" => Ok(AggregationWindow::Days30),
            "90d" => Ok(AggregationWindow::Days90),
            "all" => Ok(AggregationWindow::All),
            _ => Err(format!("unknown window: {}", s)),
        }
    }
}

// ============================================
// Reference month
// ============================================

/// Calendar month anchoring the activity calendar.
///
/// The calendar always spans the 12 calendar months ending at this month;
/// navigation moves the anchor a whole year at a time so consecutive views
/// never overlap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ReferenceMonth {
    pub year: i32,
    /// 1-12
    pub month: u32,
}

impl ReferenceMonth {
    pub fn new(year: i32, month: u32) -> Self {
        debug_assert!((1..=12).contains(&month), "month must be 1-12");
        Self { year, month }
    }

    /// Month containing `date`.
    pub fn containing(date: NaiveDate) -> Self {
        Self::new(date.year(), date.month())
    }

    /// Month containing `now` in the local calendar.
    pub fn current(now: DateTime<Utc>) -> Self {
        Self::containing(now.with_timezone(&Local).date_naive())
    }

    /// First day of the month.
    pub fn first_day(&self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.year, self.month, 1).unwrap()
    }

    /// Last day of the month.
    pub fn last_day(&self) -> NaiveDate {
        let (next_year, next_month) = if self.month == 12 {
            (self.year + 1, 1)
        } else {
            (self.year, self.month + 1)
        };
        NaiveDate::from_ymd_opt(next_year, next_month, 1).unwrap() - Duration::days(1)
    }

    /// First day of the 12-month span ending at this month.
    pub fn span_start(&self) -> NaiveDate {
        let months = self.year as i64 * 12 + i64::from(self.month) - 1 - 11;
        NaiveDate::from_ymd_opt(
            months.div_euclid(12) as i32,
            (months.rem_euclid(12) + 1) as u32,
            1,
        )
        .unwrap()
    }

    /// Same month one year earlier.
    pub fn previous(&self) -> Self {
        Self {
            year: self.year - 1,
            month: self.month,
        }
    }

    /// Same month one year later.
    pub fn next(&self) -> Self {
        Self {
            year: self.year + 1,
            month: self.month,
        }
    }

    /// Whether `date` falls inside this month.
    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }

    /// Get display name for this month (e.g., "June 2025").
    pub fn display_name(&self) -> String {
        let month_name = match self.month {
            1 => "January",
            2 => "February",
            3 => "March",
            4 => "April",
            5 => "May",
            6 => "June",
            7 => "July",
            8 => "August",
            9 => "September",
            10 => "October",
            11 => "November",
            12 => "December",
            _ => "Unknown",
        };
        format!("{} {}", month_name, self.year)
    }
}
