// src/models/mod.rs

//! Domain models shared by the crawler and the mailer.

mod config;
mod email;
mod page;
mod pull_request;
mod registry;

// Re-export all public types
pub use config::{Config, EventsConfig, HttpConfig, LoggingConfig, MailerConfig};
pub use email::{EmailDraft, EmailRenderer};
pub use page::{PageRequest, PageResult, RawMessage};
pub use pull_request::{PullRequestRecord, normalize_all};
pub use registry::{AliasDirectory, MaintainerRegistry, lookup_key};

use chrono::{DateTime, Utc};

/// Timing and volume of a finished run, logged as a summary.
#[derive(Debug, Clone)]
pub struct RunStats {
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub item_count: usize,
    pub file_count: usize,
}

impl RunStats {
    pub fn elapsed_secs(&self) -> i64 {
        (self.end_time - self.start_time).num_seconds()
    }
}
