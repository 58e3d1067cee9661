//! Score distribution histograms.

use crate::types::{Metric, RatingRecord};

/// Bin edges for the 1-10 score domain.
pub const SCORE_EDGES: &[i64] = &[0, 2, 4, 6, 8, 10];

/// A non-empty histogram bucket.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DistributionBin {
    /// Display range with inclusive integer bounds, e.g. "4-5" or "8+"
    pub range: String,
    pub count: usize,
}

/// Bucket integer `values` into bins bounded by `edges`.
///
/// `edges` must be ascending with at least two entries. Bin `i` accepts
/// `edges[i] <= v < edges[i + 1]`; the final bin has an open top and accepts
/// every `v >= edges[len - 2]`. Values below `edges[0]` are outside the
/// domain and are skipped. Only non-empty bins are emitted, in edge order.
pub fn bin_values<I>(values: I, edges: &[i64]) -> Vec<DistributionBin>
where
    I: IntoIterator<Item = i64>,
{
    if edges.len() < 2 {
        return Vec::new();
    }

    let last = edges.len() - 2;
    let mut counts = vec![0usize; edges.len() - 1];
    for v in values {
        if v < edges[0] {
            continue;
        }
        let bin = if v >= edges[last] {
            last
        } else {
            // edges is ascending, so the first upper edge beyond v closes its bin
            edges[1..].iter().position(|&hi| v < hi).unwrap_or(last)
        };
        counts[bin] += 1;
    }

    counts
        .iter()
        .enumerate()
        .filter(|(_, &count)| count > 0)
        .map(|(i, &count)| DistributionBin {
            range: if i == last {
                format!("{}+", edges[i])
            } else {
                format!("{}-{}", edges[i], edges[i + 1] - 1)
            },
            count,
        })
        .collect()
}

/// Histogram of one metric's scores across `records`, using [`SCORE_EDGES`].
///
/// Invoked once per metric so each chart gets its own bucket list.
pub fn score_distribution(records: &[RatingRecord], metric: Metric) -> Vec<DistributionBin> {
    bin_values(records.iter().map(|r| r.score(metric)), SCORE_EDGES)
}
