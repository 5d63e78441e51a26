//! Output sinks for both jobs.
//!
//! ## Layout
//!
//! ```text
//! {root}/
//! ├── prs.json              # Crawler: every normalized pull request
//! └── {maintainer}.yaml     # Mailer: one spooled email per maintainer
//! ```
//!
//! Each file is written on its own; a run that fails part way through the
//! mailer leaves the files written so far in place.

pub mod local;

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::error::Result;
use crate::models::{EmailDraft, PullRequestRecord};

// Re-export for convenience
pub use local::LocalStorage;

/// Metadata about a storage write operation.
#[derive(Debug, Clone)]
pub struct WriteMetadata {
    /// Path of the written file
    pub location: String,
    /// Bytes written
    pub size: usize,
    /// Timestamp of the write
    pub timestamp: DateTime<Utc>,
}

/// Trait for output backends.
#[async_trait]
pub trait OutputStorage: Send + Sync {
    /// Create the output root if needed. Called once before any write.
    async fn prepare(&self) -> Result<()>;

    /// Write the full record set as one JSON array, replacing `name`.
    async fn write_records(&self, name: &str, records: &[PullRequestRecord])
    -> Result<WriteMetadata>;

    /// Spool one maintainer's email as `{maintainer}.yaml`.
    async fn write_draft(&self, maintainer: &str, draft: &EmailDraft) -> Result<WriteMetadata>;
}
