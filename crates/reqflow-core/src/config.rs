//! Configuration types for reqflow.
//!
//! [`Config::load`] layers the built-in defaults, an optional TOML file and
//! `REQFLOW_*` environment variables (`REQFLOW_PIPELINE__BATCH_SIZE=500`).
//! [`Config::defaults`] returns the built-in defaults without touching the
//! filesystem or environment (useful in tests).

use std::path::Path;

use serde::Deserialize;

// ---------------------------------------------------------------------------
// Embedded defaults
// ---------------------------------------------------------------------------

const DEFAULT_CONFIG: &str = r#"
[parser]
type = "logdb"
name = "logdb"

[pipeline]
batch_size    = 1000
max_in_flight = 4
"#;

// ---------------------------------------------------------------------------
// Public config types
// ---------------------------------------------------------------------------

/// Top-level configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub parser: ParserConfig,
    #[serde(default)]
    pub pipeline: PipelineConfig,
}

/// `[parser]` section: which registered parser to build, and its name.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ParserConfig {
    #[serde(rename = "type", default = "default_parser_kind")]
    pub kind: String,
    #[serde(default = "default_parser_name")]
    pub name: String,
}

fn default_parser_kind() -> String { crate::registry::LOGDB_TYPE.to_string() }
fn default_parser_name() -> String { "logdb".to_string() }

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            kind: default_parser_kind(),
            name: default_parser_name(),
        }
    }
}

/// `[pipeline]` section: batching of input lines.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PipelineConfig {
    /// Lines handed to the parser per batch.
    #[serde(default = "default_batch_size")]
    pub batch_size: usize,
    /// Batches accumulated concurrently.
    #[serde(default = "default_max_in_flight")]
    pub max_in_flight: usize,
}

fn default_batch_size() -> usize { 1000 }
fn default_max_in_flight() -> usize { 4 }

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            batch_size: default_batch_size(),
            max_in_flight: default_max_in_flight(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::defaults()
    }
}

impl Config {
    /// Load the defaults, then `path` (if given, it must exist), then the
    /// environment.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        Self::load_with_env(path, environment())
    }

    fn load_with_env(path: Option<&Path>, env: config::Environment) -> anyhow::Result<Self> {
        let mut builder = config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml));
        if let Some(path) = path {
            builder = builder.add_source(config::File::from(path));
        }
        let cfg: Self = builder.add_source(env).build()?.try_deserialize()?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Return the built-in defaults without touching the filesystem.
    pub fn defaults() -> Self {
        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .build()
            .expect("built-in default config must be valid TOML")
            .try_deserialize()
            .expect("built-in default config must deserialize correctly")
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        anyhow::ensure!(self.pipeline.batch_size >= 1, "pipeline.batch_size must be at least 1");
        anyhow::ensure!(
            self.pipeline.max_in_flight >= 1,
            "pipeline.max_in_flight must be at least 1"
        );
        anyhow::ensure!(!self.parser.kind.is_empty(), "parser.type must not be empty");
        Ok(())
    }
}

/// `REQFLOW_<SECTION>__<KEY>` variables, e.g. `REQFLOW_PARSER__NAME`.
fn environment() -> config::Environment {
    config::Environment::with_prefix("REQFLOW")
        .prefix_separator("_")
        .separator("__")
        .try_parsing(true)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
