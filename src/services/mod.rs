//! Service layer for both jobs.
//!
//! This module contains the remote collaborators and the crawl logic:
//! - Paged message retrieval (`PageSource`, `DatagrepperClient`, `crawl_pages`)
//! - Maintainer alias retrieval (`AliasSource`, `AliasDirectoryClient`)
//! - Distgit name list reading (`read_names`)

mod aliases;
mod events;
mod names;

use async_trait::async_trait;

use crate::error::Result;
use crate::models::{AliasDirectory, PageRequest, PageResult};

pub use aliases::AliasDirectoryClient;
pub use events::{CrawlOutcome, CrawlSettings, DatagrepperClient, crawl_pages};
pub use names::read_names;

/// A remote collection served one page at a time.
#[async_trait]
pub trait PageSource: Send + Sync {
    /// Fetch and decode a single page.
    async fn fetch_page(&self, request: &PageRequest) -> Result<PageResult>;

    /// Human-readable origin used in log lines.
    fn describe(&self) -> String;
}

/// The complete maintainer alias directory.
#[async_trait]
pub trait AliasSource: Send + Sync {
    async fn fetch_aliases(&self) -> Result<AliasDirectory>;
}
