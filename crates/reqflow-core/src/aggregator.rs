//! Aggregator — reduces a batch of reqlog lines into per-window flow records.
//!
//! Every line is handled on its own: a line that fails to parse is counted
//! and skipped, and never stops the rest of the batch. Rows whose response
//! headers cannot be decoded aggregate under empty application and
//! repository ids.

use std::collections::HashMap;

use crate::bucket::bucket;
use crate::parser::parse_line;
use crate::record::OutputRecord;
use crate::row::Row;
use crate::stats::BatchStats;

/// Identity of one output record.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AggregationKey {
    pub application_id: String,
    pub repository_id: String,
    pub time_bucket: i64,
}

impl AggregationKey {
    pub fn for_row(row: &Row) -> Self {
        Self {
            application_id: row.application_id().to_string(),
            repository_id: row.repository_id().to_string(),
            time_bucket: bucket(row.request_time_seconds()),
        }
    }
}

/// Parse and aggregate one batch of lines.
///
/// Returns one record per distinct [`AggregationKey`], in no particular
/// order, together with the batch's success/failure counts.
pub fn accumulate<S: AsRef<str>>(lines: &[S]) -> (Vec<OutputRecord>, BatchStats) {
    let mut table: HashMap<AggregationKey, u64> = HashMap::new();
    let mut stats = BatchStats::default();

    for line in lines {
        let line = line.as_ref();
        let row = match parse_line(line) {
            Ok(row) => row,
            Err(err) => {
                tracing::warn!(line = %line, error = %err, "cannot parse line to row");
                stats.add_error(err);
                continue;
            }
        };
        stats.add_success();

        let flow = row.request_byte_length();
        let total = table.entry(AggregationKey::for_row(&row)).or_insert(0);
        *total = total.saturating_add(flow);
    }

    tracing::debug!(
        keys = table.len(),
        success = stats.success(),
        errors = stats.errors(),
        "batch accumulated"
    );

    let records = table
        .into_iter()
        .map(|(key, flow)| OutputRecord {
            application_id: key.application_id,
            repository_id: key.repository_id,
            time_bucket: key.time_bucket,
            flow,
        })
        .collect();
    (records, stats)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
