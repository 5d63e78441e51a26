//! Distgit name list input.

use std::path::Path;

use crate::error::Result;

/// Read a newline-delimited list of namespace-qualified distgit names.
///
/// Surrounding whitespace is trimmed and blank lines are skipped.
pub async fn read_names(path: &Path) -> Result<Vec<String>> {
    let content = tokio::fs::read_to_string(path).await.map_err(|e| {
        log::error!("Unable to read distgit list {}: {}", path.display(), e);
        e
    })?;

    let names: Vec<String> = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect();

    log::info!("Read {} distgit names", names.len());
    Ok(names)
}
