// src/pipeline/events.rs

//! Pull-request event harvesting pipeline.

use chrono::Utc;

use crate::error::Result;
use crate::models::{EventsConfig, RunStats, normalize_all};
use crate::services::{CrawlSettings, PageSource, crawl_pages};
use crate::storage::OutputStorage;

/// Crawl every page, normalize the messages and write them as one JSON file.
///
/// Nothing is written unless every message normalizes.
pub async fn run_events(
    config: &EventsConfig,
    source: &dyn PageSource,
    storage: &dyn OutputStorage,
    output_name: &str,
    time_window_seconds: u64,
) -> Result<RunStats> {
    let start_time = Utc::now();
    if time_window_seconds == 0 {
        log::info!("Crawling full history of topic {}", config.topic);
    } else {
        log::info!(
            "Crawling topic {} over the last {} seconds",
            config.topic,
            time_window_seconds
        );
    }

    let settings = CrawlSettings::from_config(config, time_window_seconds);
    let outcome = crawl_pages(source, &settings).await?;

    let records = normalize_all(&outcome.messages)?;

    storage.prepare().await?;
    let written = storage.write_records(output_name, &records).await?;
    log::info!(
        "Wrote {} records to {} at {}",
        records.len(),
        written.location,
        written.timestamp.format("%Y-%m-%d %H:%M:%S")
    );

    let stats = RunStats {
        start_time,
        end_time: Utc::now(),
        item_count: records.len(),
        file_count: 1,
    };
    log::info!(
        "Crawl summary: {} pages, {} failed attempts, {} records in {}s",
        outcome.pages_read,
        outcome.failed_attempts,
        stats.item_count,
        stats.elapsed_secs()
    );

    Ok(stats)
}
