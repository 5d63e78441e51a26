// src/pipeline/mailer.rs

//! Maintainer notification pipeline.

use std::path::Path;

use chrono::Utc;

use crate::error::Result;
use crate::models::{EmailRenderer, MailerConfig, MaintainerRegistry, RunStats};
use crate::services::{AliasSource, read_names};
use crate::storage::OutputStorage;

/// Group newly added distgits by maintainer and spool one email each.
///
/// Files are written one after another in maintainer order; a failure
/// part way leaves the earlier files in place.
pub async fn run_mailer(
    config: &MailerConfig,
    aliases: &dyn AliasSource,
    storage: &dyn OutputStorage,
    input: &Path,
) -> Result<RunStats> {
    let start_time = Utc::now();

    storage.prepare().await?;
    let names = read_names(input).await?;
    let directory = aliases.fetch_aliases().await?;

    let registry = MaintainerRegistry::build(names.iter().map(String::as_str), &directory);
    log::info!(
        "{} maintainers to notify for {} distgits",
        registry.len(),
        names.len()
    );

    let renderer = EmailRenderer::new(&config.email_domain, &config.subject);
    let mut file_count = 0;
    for (maintainer, distgits) in registry.iter() {
        let draft = renderer.render(maintainer, distgits);
        let written = storage.write_draft(maintainer, &draft).await?;
        log::info!("Writing {}", written.location);
        file_count += 1;
    }

    let stats = RunStats {
        start_time,
        end_time: Utc::now(),
        item_count: names.len(),
        file_count,
    };
    log::info!(
        "Mailer summary: {} emails spooled for {} distgits in {}s",
        stats.file_count,
        stats.item_count,
        stats.elapsed_secs()
    );

    Ok(stats)
}
