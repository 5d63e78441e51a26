// src/services/events.rs

//! Paged crawl of the message-history API.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;

use crate::error::{AppError, Result};
use crate::models::{EventsConfig, PageRequest, PageResult, RawMessage};
use crate::services::PageSource;
use crate::utils::http::fetch_json;

/// Datagrepper `raw` endpoint client.
pub struct DatagrepperClient {
    client: Client,
    base_url: String,
}

impl DatagrepperClient {
    pub fn new(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }
}

#[async_trait]
impl PageSource for DatagrepperClient {
    async fn fetch_page(&self, request: &PageRequest) -> Result<PageResult> {
        fetch_json(self.client.get(&self.base_url).query(request)).await
    }

    fn describe(&self) -> String {
        self.base_url.clone()
    }
}

/// Fixed parameters of one crawl.
#[derive(Debug, Clone)]
pub struct CrawlSettings {
    pub rows_per_page: u32,
    pub topic: String,
    /// History window in seconds; zero requests everything
    pub time_window_seconds: u64,
    pub retry_delay: Duration,
    /// Give up on a page after this many consecutive failures
    pub retry_limit: Option<u32>,
}

impl CrawlSettings {
    pub fn from_config(config: &EventsConfig, time_window_seconds: u64) -> Self {
        Self {
            rows_per_page: config.rows_per_page,
            topic: config.topic.clone(),
            time_window_seconds,
            retry_delay: Duration::from_millis(config.retry_delay_ms),
            retry_limit: config.retry_limit,
        }
    }

    fn request(&self, page_number: u64) -> PageRequest {
        PageRequest {
            rows_per_page: self.rows_per_page,
            time_window_seconds: self.time_window_seconds,
            topic: self.topic.clone(),
            page_number,
        }
    }
}

/// Summary of a crawl run.
#[derive(Debug, Default)]
pub struct CrawlOutcome {
    /// Raw items in response order, pages concatenated in request order
    pub messages: Vec<RawMessage>,
    pub pages_read: u64,
    pub total_pages: u64,
    pub total_items: u64,
    pub failed_attempts: u64,
}

/// Read every page of the collection.
///
/// The page count comes from the first successful response. A failed page is
/// logged and requested again without advancing; with no `retry_limit` a page
/// that never succeeds keeps the loop going forever.
pub async fn crawl_pages(source: &dyn PageSource, settings: &CrawlSettings) -> Result<CrawlOutcome> {
    let mut outcome = CrawlOutcome::default();
    let mut total_pages: Option<u64> = None;
    let mut consecutive_failures: u32 = 0;

    while outcome.pages_read == 0 || outcome.pages_read < total_pages.unwrap_or(0) {
        let request = settings.request(outcome.pages_read + 1);
        log::info!("Fetching page {} ...", request.page_number);

        match source.fetch_page(&request).await {
            Ok(page) => {
                if total_pages.is_none() {
                    log::info!(
                        "{} total pages to request for {} messages",
                        page.total_pages,
                        page.total_items
                    );
                    total_pages = Some(page.total_pages);
                    outcome.total_pages = page.total_pages;
                    outcome.total_items = page.total_items;
                }
                outcome.pages_read += 1;
                consecutive_failures = 0;
                outcome.messages.extend(page.items);
            }
            Err(error) => {
                outcome.failed_attempts += 1;
                consecutive_failures += 1;
                log::warn!(
                    "Unable to read page {} from {}: {}",
                    request.page_number,
                    source.describe(),
                    error
                );

                if let Some(limit) = settings.retry_limit {
                    if consecutive_failures >= limit {
                        return Err(AppError::crawl(
                            format!("page {}", request.page_number),
                            format!("gave up after {consecutive_failures} attempts: {error}"),
                        ));
                    }
                }

                if !settings.retry_delay.is_zero() {
                    tokio::time::sleep(settings.retry_delay).await;
                }
            }
        }
    }

    Ok(outcome)
}
