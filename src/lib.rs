//! reqflow — gateway reqlog flow aggregation.
//!
//! Reads raw reqlog lines, aggregates request flow per application,
//! repository and 5-minute window, and emits one open-field record per key.
//!
//! # Architecture
//!
//! ```text
//! Feed ──► batches ──► LogParser (spawn_blocking, bounded) ──► sink
//!                             │
//!                             └──► BatchStats ──► Summary
//! ```
//!
//! Parsing lives in [`reqflow_core`]; line sources in [`reqflow_feeds`].

pub mod pipeline;

pub use reqflow_core;
pub use reqflow_feeds;
