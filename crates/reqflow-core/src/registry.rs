//! Parser registry — constructs a [`LogParser`] from its configured type.
//!
//! The pipeline only sees `dyn LogParser`; the `[parser] type` key picks the
//! implementation and `[parser] name` names the instance.

use std::collections::HashMap;

use crate::aggregator::accumulate;
use crate::config::ParserConfig;
use crate::error::RegistryError;
use crate::record::{Data, OutputRecord};
use crate::stats::BatchStats;

/// Registry key of the gateway reqlog flow parser.
pub const LOGDB_TYPE: &str = "logdb";

/// A batch parser that turns raw lines into open-field records.
pub trait LogParser: Send + Sync {
    fn name(&self) -> &str;

    /// Parse one batch. Line-level failures are reported in the stats, never
    /// as an error.
    fn parse(&self, lines: &[String]) -> (Vec<Data>, BatchStats);
}

pub type Constructor = fn(&ParserConfig) -> Box<dyn LogParser>;

// ---------------------------------------------------------------------------
// LogdbParser
// ---------------------------------------------------------------------------

/// Aggregates request flow per application, repository and 5-minute window.
#[derive(Debug, Clone)]
pub struct LogdbParser {
    name: String,
}

impl LogdbParser {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    fn construct(cfg: &ParserConfig) -> Box<dyn LogParser> {
        Box::new(Self::new(cfg.name.clone()))
    }
}

impl LogParser for LogdbParser {
    fn name(&self) -> &str {
        &self.name
    }

    fn parse(&self, lines: &[String]) -> (Vec<Data>, BatchStats) {
        let (records, stats) = accumulate(lines);
        let data = records.into_iter().map(OutputRecord::into_data).collect();
        (data, stats)
    }
}

// ---------------------------------------------------------------------------
// Registry
// ---------------------------------------------------------------------------

pub struct ParserRegistry {
    constructors: HashMap<String, Constructor>,
}

impl ParserRegistry {
    /// A registry with nothing registered.
    pub fn empty() -> Self {
        Self {
            constructors: HashMap::new(),
        }
    }

    /// Register `constructor` under `kind`, replacing any previous entry.
    pub fn register(&mut self, kind: impl Into<String>, constructor: Constructor) {
        self.constructors.insert(kind.into(), constructor);
    }

    pub fn build(&self, cfg: &ParserConfig) -> Result<Box<dyn LogParser>, RegistryError> {
        let constructor = self
            .constructors
            .get(&cfg.kind)
            .ok_or_else(|| RegistryError::UnknownType(cfg.kind.clone()))?;
        let parser = constructor(cfg);
        tracing::debug!(kind = %cfg.kind, name = parser.name(), "parser constructed");
        Ok(parser)
    }

    /// Registered type keys, sorted.
    pub fn kinds(&self) -> Vec<&str> {
        let mut kinds: Vec<&str> = self.constructors.keys().map(String::as_str).collect();
        kinds.sort_unstable();
        kinds
    }
}

impl Default for ParserRegistry {
    fn default() -> Self {
        let mut registry = Self::empty();
        registry.register(LOGDB_TYPE, LogdbParser::construct);
        registry
    }
}
