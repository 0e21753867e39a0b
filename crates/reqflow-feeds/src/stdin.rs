//! Stdin feed — reads lines piped into the process until EOF.

use tokio::io::BufReader;
use tokio::sync::mpsc;

use crate::{batch_lines, Batch, FeedError};

pub async fn feed(batch_size: usize, tx: mpsc::Sender<Batch>) -> Result<u64, FeedError> {
    batch_lines(BufReader::new(tokio::io::stdin()), batch_size, tx).await
}
