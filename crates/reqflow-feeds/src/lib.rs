//! reqflow-feeds — line feed sources for reqflow.
//!
//! Each feed reads raw bytes from its source, splits them into lines
//! (UTF-8 lossy converted, trailing `\r\n` stripped) and pushes fixed-size
//! batches of lines onto a channel for the pipeline. The final batch may be
//! shorter.

pub mod file;
pub mod stdin;

use std::path::PathBuf;

use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tokio::sync::mpsc;

/// A batch of raw lines, in input order.
pub type Batch = Vec<String>;

#[derive(Debug, thiserror::Error)]
pub enum FeedError {
    #[error("cannot open {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("read failed: {0}")]
    Read(#[from] std::io::Error),
    #[error("batch receiver dropped")]
    Closed,
}

/// Where lines come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineSource {
    File(PathBuf),
    Stdin,
}

impl std::fmt::Display for LineSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LineSource::File(path) => write!(f, "file:{}", path.display()),
            LineSource::Stdin => write!(f, "stdin"),
        }
    }
}

impl LineSource {
    /// Feed this source into `tx` in batches of `batch_size` lines. Returns
    /// the number of lines read.
    pub async fn feed(
        &self,
        batch_size: usize,
        tx: mpsc::Sender<Batch>,
    ) -> Result<u64, FeedError> {
        tracing::debug!(source = %self, batch_size, "feed started");
        let lines = match self {
            LineSource::File(path) => file::feed(path, batch_size, tx).await?,
            LineSource::Stdin => stdin::feed(batch_size, tx).await?,
        };
        tracing::debug!(source = %self, lines, "feed finished");
        Ok(lines)
    }
}

/// Read `reader` to the end, sending batches of at most `batch_size` lines.
pub async fn batch_lines<R>(
    mut reader: R,
    batch_size: usize,
    tx: mpsc::Sender<Batch>,
) -> Result<u64, FeedError>
where
    R: AsyncBufRead + Unpin,
{
    let batch_size = batch_size.max(1);
    let mut batch = Vec::with_capacity(batch_size);
    let mut buf = Vec::new();
    let mut count = 0u64;

    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf).await? == 0 {
            break;
        }
        batch.push(decode_line(&buf));
        count += 1;
        if batch.len() == batch_size {
            let full = std::mem::replace(&mut batch, Vec::with_capacity(batch_size));
            tx.send(full).await.map_err(|_| FeedError::Closed)?;
        }
    }

    if !batch.is_empty() {
        tx.send(batch).await.map_err(|_| FeedError::Closed)?;
    }
    Ok(count)
}

fn decode_line(raw: &[u8]) -> String {
    let raw = raw.strip_suffix(b"\n").unwrap_or(raw);
    let raw = raw.strip_suffix(b"\r").unwrap_or(raw);
    String::from_utf8_lossy(raw).into_owned()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
