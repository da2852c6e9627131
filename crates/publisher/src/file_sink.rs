use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tracing::error;

use common::models::SignalRecord;

use crate::sink::{PublishError, SignalSink};

/// Publishes each record over the single slot file the terminal polls.
///
/// Truncate-and-write, single attempt, no locking and no temp-file rename:
/// concurrent publishes race and the last completed write wins.
pub struct FileSink {
    path: PathBuf,
}

impl FileSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl SignalSink for FileSink {
    async fn publish(&self, record: SignalRecord) -> Result<(), PublishError> {
        let line = record.to_line();

        if let Err(e) = tokio::fs::write(&self.path, line.as_bytes()).await {
            error!("Failed to write signal slot {}: {}", self.path.display(), e);
            return Err(PublishError {
                path: self.path.clone(),
                source: e,
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use serde_json::{Map, Value};

    fn record(raw: &str) -> SignalRecord {
        let payload: Map<String, Value> = serde_json::from_str(raw).unwrap();
        SignalRecord::from_payload(&payload)
    }

    #[tokio::test]
    async fn publish_writes_the_serialized_line() {
        let dir = tempfile::tempdir().unwrap();
        let slot = dir.path().join("signal.txt");
        let sink = FileSink::new(&slot);

        sink.publish(record(
            r#"{"symbol":"EURUSD","side":"buy","risk_percent":1,"entry":1.1000,"sl":1.0950,"tp1":1.1050,"tp2":1.1100}"#,
        ))
        .await
        .unwrap();

        let content = std::fs::read_to_string(&slot).unwrap();
        assert_eq!(content, "100;EURUSD;BUY;1;1.1;1.095;1.105;1.11");
    }

    #[tokio::test]
    async fn publish_overwrites_prior_contents() {
        let dir = tempfile::tempdir().unwrap();
        let slot = dir.path().join("signal.txt");
        let sink = FileSink::new(&slot);

        sink.publish(record(r#"{"symbol":"EURUSD","side":"buy"}"#))
            .await
            .unwrap();
        sink.publish(record(r#"{"symbol":"GBPUSD","side":"sell"}"#))
            .await
            .unwrap();

        let content = std::fs::read_to_string(&slot).unwrap();
        assert_eq!(content, "100;GBPUSD;SELL;None;None;None;None;None");
    }

    #[tokio::test]
    async fn publishing_the_same_record_twice_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let slot = dir.path().join("signal.txt");
        let sink = FileSink::new(&slot);

        let signal = record(r#"{"symbol":"EURUSD","side":"buy","entry":1.1}"#);
        sink.publish(signal.clone()).await.unwrap();
        let first = std::fs::read_to_string(&slot).unwrap();

        sink.publish(signal).await.unwrap();
        let second = std::fs::read_to_string(&slot).unwrap();

        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn publish_failure_reports_reason_and_path() {
        let dir = tempfile::tempdir().unwrap();
        let slot = dir.path().join("no_such_dir").join("signal.txt");
        let sink = FileSink::new(&slot);

        let err = sink
            .publish(record(r#"{"symbol":"EURUSD","side":"buy"}"#))
            .await
            .unwrap_err();

        assert_eq!(err.path, slot);
        assert!(err.to_string().contains("no_such_dir"));
        assert!(!err.source.to_string().is_empty());
    }
}
