//! Utility functions and helpers.

pub mod http;

use std::path::{Path, PathBuf};

use crate::error::{AppError, Result};

/// Split an output file path into its directory and file name.
///
/// A bare file name resolves against the current directory.
pub fn split_output_path(path: &Path) -> Result<(PathBuf, String)> {
    let file_name = path
        .file_name()
        .and_then(|name| name.to_str())
        .ok_or_else(|| AppError::config(format!("Invalid output file path: {}", path.display())))?;

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };

    Ok((dir, file_name.to_string()))
}

/// Convert a day count into the seconds window sent as `delta`.
pub fn days_to_seconds(days: Option<u64>) -> u64 {
    days.unwrap_or(0).saturating_mul(24 * 3600)
}
