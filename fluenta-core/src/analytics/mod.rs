//! Analytics module for fluenta
//!
//! The aggregation core: pure functions that turn one chronological snapshot
//! of rating rows plus the UI selectors (window, reference month) into the
//! derived view-model consumed by charts and summary cards.
//!
//! Everything here is stateless and synchronous. A report is fully recomputed
//! whenever any input changes; nothing is cached between passes and the input
//! snapshot is never mutated. Fetching, pagination, and cache invalidation
//! belong to the excluded data layer.
//!
//! See [`report::generate_report`] for the single entry point.

pub mod calendar;
pub mod distribution;
pub mod highlights;
pub mod report;
pub mod summary;
pub mod trend;
pub mod window;

pub use calendar::{build_activity_calendar, ActivityCell};
pub use distribution::{bin_values, score_distribution, DistributionBin, SCORE_EDGES};
pub use highlights::{rank_highlights, recent, Highlights, RankedRating, HIGHLIGHT_COUNT, RECENT_COUNT};
pub use report::{generate_report, FluencyReport};
pub use summary::{summarize, SummaryStats};
pub use trend::{build_trend_series, rolling_average, RollingAverage, TrendPoint, ROLLING_WINDOW};
pub use window::filter_window;

/// Mean of an integer sum over `count` items, rounded half-up to one decimal.
///
/// Works on integer tenths so exact halves round predictably: a true mean of
/// 6.05 becomes 6.1 even though the nearest `f64` to 6.05 sits just below it.
/// Returns 0.0 for an empty group.
pub fn mean1(sum: i64, count: usize) -> f64 {
    if count == 0 {
        return 0.0;
    }
    let n = count as i64;
    let tenths = (20 * sum + n).div_euclid(2 * n);
    tenths as f64 / 10.0
}
