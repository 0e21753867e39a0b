//! Pipeline — drives batches from a feed through a [`LogParser`].
//!
//! Batches are independent: each is parsed on the blocking pool with its own
//! aggregation table, at most `max_in_flight` at a time. Records are handed
//! to the sink as each batch completes, so output order across batches is
//! not defined. Batch stats are merged in input order, so the summary's last
//! error is the one from the latest failing line of the input.

use std::collections::BTreeMap;
use std::sync::Arc;

use reqflow_core::config::PipelineConfig;
use reqflow_core::{BatchStats, Data, LogParser};
use reqflow_feeds::{Batch, LineSource};
use tokio::sync::mpsc;
use tokio::task::JoinSet;

/// Totals for one pipeline run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Summary {
    pub lines: u64,
    pub batches: u64,
    pub records: u64,
    pub stats: BatchStats,
}

/// Feed `source` through `parser`, calling `sink` for every record.
pub async fn run_source<F>(
    source: LineSource,
    cfg: &PipelineConfig,
    parser: Arc<dyn LogParser>,
    sink: F,
) -> anyhow::Result<Summary>
where
    F: FnMut(Data) -> anyhow::Result<()>,
{
    let (tx, rx) = mpsc::channel(cfg.max_in_flight.max(1));
    let batch_size = cfg.batch_size;
    let feed = tokio::spawn(async move { source.feed(batch_size, tx).await });

    let mut summary = run(rx, cfg.max_in_flight, parser, sink).await?;
    summary.lines = feed.await??;
    Ok(summary)
}

/// Parse every batch received on `rx` until the sender is dropped.
pub async fn run<F>(
    mut rx: mpsc::Receiver<Batch>,
    max_in_flight: usize,
    parser: Arc<dyn LogParser>,
    mut sink: F,
) -> anyhow::Result<Summary>
where
    F: FnMut(Data) -> anyhow::Result<()>,
{
    let max_in_flight = max_in_flight.max(1);
    let mut in_flight = JoinSet::new();
    let mut summary = Summary::default();
    let mut stats = OrderedStats::default();
    let mut seq = 0u64;

    while let Some(batch) = rx.recv().await {
        if in_flight.len() >= max_in_flight {
            if let Some(done) = in_flight.join_next().await {
                finish_batch(done?, &mut summary, &mut stats, &mut sink)?;
            }
        }
        let parser = Arc::clone(&parser);
        let batch_seq = seq;
        seq += 1;
        in_flight.spawn_blocking(move || (batch_seq, parser.parse(&batch)));
    }
    while let Some(done) = in_flight.join_next().await {
        finish_batch(done?, &mut summary, &mut stats, &mut sink)?;
    }
    summary.stats = stats.finish();

    tracing::info!(
        parser = parser.name(),
        batches = summary.batches,
        records = summary.records,
        stats = %summary.stats,
        "pipeline finished"
    );
    Ok(summary)
}

fn finish_batch<F>(
    (seq, (records, batch_stats)): (u64, (Vec<Data>, BatchStats)),
    summary: &mut Summary,
    stats: &mut OrderedStats,
    sink: &mut F,
) -> anyhow::Result<()>
where
    F: FnMut(Data) -> anyhow::Result<()>,
{
    if batch_stats.errors() > 0 {
        tracing::warn!(batch = seq, stats = %batch_stats, "batch had unparseable lines");
    } else {
        tracing::debug!(batch = seq, stats = %batch_stats, records = records.len(), "batch done");
    }

    summary.batches += 1;
    summary.records += records.len() as u64;
    stats.push(seq, batch_stats);
    for record in records {
        sink(record)?;
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Ordered stats
// ---------------------------------------------------------------------------

/// Merges per-batch stats by batch sequence number, holding back batches
/// that finish before their predecessors.
#[derive(Debug, Default)]
struct OrderedStats {
    next: u64,
    pending: BTreeMap<u64, BatchStats>,
    merged: BatchStats,
}

impl OrderedStats {
    fn push(&mut self, seq: u64, stats: BatchStats) {
        self.pending.insert(seq, stats);
        while let Some(stats) = self.pending.remove(&self.next) {
            self.merged.merge(stats);
            self.next += 1;
        }
    }

    fn finish(self) -> BatchStats {
        debug_assert!(self.pending.is_empty(), "batch sequence has gaps");
        self.merged
    }
}
