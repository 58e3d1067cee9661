//! System boundary for rating store snapshots.
//!
//! The rating store hands the client a JSON array of rows, already scoped to
//! one rater (or to everyone, for the admin view). This module is the single
//! place where those loosely typed rows become [`RatingRecord`]s: decode,
//! validate once, normalize ordering. Past this point the aggregator may
//! assume well-formed, chronologically ascending input.

use crate::error::{Error, Result};
use crate::types::{Metric, RatingRecord};

/// Decode a JSON snapshot of rating rows into validated records.
///
/// Rows are checked once here: ids must be present and every score must lie
/// in the 1-10 domain. A violation is a hard [`Error::Record`] naming the
/// offending row, never a silent coercion. The result is stably sorted by
/// submission time to normalize to the store's ascending contract.
pub fn decode_snapshot(json: &str) -> Result<Vec<RatingRecord>> {
    let mut records: Vec<RatingRecord> = serde_json::from_str(json)?;

    for (index, record) in records.iter().enumerate() {
        validate_record(index, record)?;
    }

    records.sort_by_key(|record| record.created_at);

    tracing::debug!(rows = records.len(), "Decoded rating snapshot");

    Ok(records)
}

fn validate_record(index: usize, record: &RatingRecord) -> Result<()> {
    if record.id.is_empty() {
        return Err(Error::Record {
            index,
            message: "missing rating id".to_string(),
        });
    }
    if record.user_id.is_empty() {
        return Err(Error::Record {
            index,
            message: "missing rater id".to_string(),
        });
    }
    for metric in Metric::ALL {
        let score = record.score(metric);
        if !(RatingRecord::SCORE_MIN..=RatingRecord::SCORE_MAX).contains(&score) {
            return Err(Error::Record {
                index,
                message: format!("{} score {} outside 1-10", metric, score),
            });
        }
    }
    Ok(())
}
