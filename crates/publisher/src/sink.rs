use std::path::PathBuf;

use async_trait::async_trait;
use thiserror::Error;

use common::models::SignalRecord;

/// Raised when the slot file could not be opened or written.
#[derive(Debug, Error)]
#[error("failed to write signal slot {}: {source}", .path.display())]
pub struct PublishError {
    pub path: PathBuf,
    #[source]
    pub source: std::io::Error,
}

/// The hand-off capability: one operation, overwrite the slot with a record.
///
/// The webhook handler only sees this trait, so request handling can be
/// tested without touching the filesystem.
#[async_trait]
pub trait SignalSink: Send + Sync {
    async fn publish(&self, record: SignalRecord) -> Result<(), PublishError>;
}
