//! reqflow-core — gateway reqlog parsing and flow aggregation.
//!
//! This crate turns raw, tab-delimited `REQ` audit-log lines into per-window
//! flow-usage records. It performs no I/O; feeding lines in and shipping
//! records out is the job of the hosting pipeline.
//!
//! # Architecture
//!
//! ```text
//! line ──► parser ──► Row ──► aggregator ──► OutputRecord ──► Data
//!                      │          │
//!                      │          └──► BatchStats
//!                      └──► lazy header decoding
//! ```
//!
//! Each [`aggregator::accumulate`] call owns its aggregation table, so
//! independent batches may be processed on independent threads.

pub mod aggregator;
pub mod bucket;
pub mod config;
pub mod error;
pub mod parser;
pub mod record;
pub mod registry;
pub mod row;
pub mod stats;

pub use aggregator::{accumulate, AggregationKey};
pub use bucket::{bucket, BUCKET_SECONDS};
pub use error::{ParseError, RegistryError};
pub use parser::parse_line;
pub use record::{Data, OutputRecord};
pub use registry::{LogParser, LogdbParser, ParserRegistry};
pub use row::Row;
pub use stats::BatchStats;
