use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use reqflow::pipeline;
use reqflow_core::config::Config;
use reqflow_core::ParserRegistry;
use reqflow_feeds::LineSource;

#[derive(Parser)]
#[command(name = "reqflow", about = "Aggregate gateway reqlogs into 5-minute flow records")]
struct Cli {
    /// Reqlog file to read. Reads stdin when omitted.
    input: Option<PathBuf>,

    /// TOML config layered over the built-in defaults.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Override `pipeline.batch_size`.
    #[arg(long)]
    batch_size: Option<usize>,

    /// Log at debug level (RUST_LOG still wins when set).
    #[arg(long)]
    debug: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.debug { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_env("RUST_LOG")
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level)),
        )
        .init();

    let mut config = Config::load(cli.config.as_deref())?;
    if let Some(batch_size) = cli.batch_size {
        config.pipeline.batch_size = batch_size;
        config.validate()?;
    }

    let parser: Arc<dyn reqflow_core::LogParser> =
        Arc::from(ParserRegistry::default().build(&config.parser)?);
    let source = cli.input.map_or(LineSource::Stdin, LineSource::File);
    tracing::info!(source = %source, parser = parser.name(), "reqflow started");

    let stdout = std::io::stdout();
    let mut out = std::io::BufWriter::new(stdout.lock());
    let summary = pipeline::run_source(source, &config.pipeline, parser, |record| {
        serde_json::to_writer(&mut out, &record)?;
        out.write_all(b"\n")?;
        Ok(())
    })
    .await?;
    out.flush()?;

    tracing::info!(
        lines = summary.lines,
        records = summary.records,
        stats = %summary.stats,
        "reqflow finished"
    );
    Ok(())
}
