//! File feed — reads a reqlog file from start to end.

use std::path::Path;

use tokio::io::BufReader;
use tokio::sync::mpsc;

use crate::{batch_lines, Batch, FeedError};

pub async fn feed(path: &Path, batch_size: usize, tx: mpsc::Sender<Batch>) -> Result<u64, FeedError> {
    let file = tokio::fs::File::open(path)
        .await
        .map_err(|source| FeedError::Open {
            path: path.to_path_buf(),
            source,
        })?;
    batch_lines(BufReader::new(file), batch_size, tx).await
}
