//! Local filesystem storage implementation.

use std::path::PathBuf;

use async_trait::async_trait;
use chrono::Utc;
use serde::Serialize;
use tokio::io::AsyncWriteExt;

use crate::error::{AppError, Result};
use crate::models::{EmailDraft, PullRequestRecord};
use crate::storage::{OutputStorage, WriteMetadata};

/// Local filesystem storage backend.
#[derive(Debug, Clone)]
pub struct LocalStorage {
    root_dir: PathBuf,
    pretty: bool,
}

impl LocalStorage {
    /// Create a new LocalStorage rooted at the given directory.
    pub fn new(root_dir: impl Into<PathBuf>) -> Self {
        Self {
            root_dir: root_dir.into(),
            pretty: false,
        }
    }

    /// Pretty-print JSON output.
    pub fn with_pretty_json(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    /// Get the full path for a relative key.
    fn path(&self, key: &str) -> Result<PathBuf> {
        if key.is_empty() || key.contains('/') || key == "." || key == ".." {
            return Err(AppError::validation(format!(
                "Refusing to write outside {}: {:?}",
                self.root_dir.display(),
                key
            )));
        }
        Ok(self.root_dir.join(key))
    }

    /// Write bytes atomically (write to temp, then rename).
    ///
    /// The file handle is closed before the rename on every path.
    async fn write_bytes(&self, key: &str, bytes: &[u8]) -> Result<WriteMetadata> {
        let path = self.path(key)?;

        let tmp = PathBuf::from(format!("{}.tmp", path.display()));
        {
            let mut file = tokio::fs::File::create(&tmp).await?;
            file.write_all(bytes).await?;
            file.flush().await?;
        }

        tokio::fs::rename(&tmp, &path).await?;

        Ok(WriteMetadata {
            location: path.display().to_string(),
            size: bytes.len(),
            timestamp: Utc::now(),
        })
    }

    /// Write JSON data.
    async fn write_json<T: Serialize + ?Sized + Sync>(
        &self,
        key: &str,
        value: &T,
    ) -> Result<WriteMetadata> {
        let bytes = if self.pretty {
            serde_json::to_vec_pretty(value)?
        } else {
            serde_json::to_vec(value)?
        };
        self.write_bytes(key, &bytes).await
    }

    /// Write YAML data.
    async fn write_yaml<T: Serialize + ?Sized + Sync>(
        &self,
        key: &str,
        value: &T,
    ) -> Result<WriteMetadata> {
        let text = serde_yaml::to_string(value)?;
        self.write_bytes(key, text.as_bytes()).await
    }
}

#[async_trait]
impl OutputStorage for LocalStorage {
    async fn prepare(&self) -> Result<()> {
        tokio::fs::create_dir_all(&self.root_dir).await?;
        Ok(())
    }

    async fn write_records(
        &self,
        name: &str,
        records: &[PullRequestRecord],
    ) -> Result<WriteMetadata> {
        self.write_json(name, records).await
    }

    async fn write_draft(&self, maintainer: &str, draft: &EmailDraft) -> Result<WriteMetadata> {
        self.write_yaml(&format!("{maintainer}.yaml"), draft).await
    }
}
