//! Request and response shapes of the paged message-history API.

use serde::{Deserialize, Serialize};

/// An undecoded message as returned by the API.
pub type RawMessage = serde_json::Value;

/// Query for a single page.
///
/// Serializes to the query string `rows_per_page`, `delta`, `topic`, `page`.
/// A zero `delta` is left out so the endpoint serves its full history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageRequest {
    pub rows_per_page: u32,
    #[serde(rename = "delta", skip_serializing_if = "is_zero")]
    pub time_window_seconds: u64,
    pub topic: String,
    /// 1-based page index
    #[serde(rename = "page")]
    pub page_number: u64,
}

fn is_zero(value: &u64) -> bool {
    *value == 0
}

/// One decoded page.
#[derive(Debug, Clone, Deserialize)]
pub struct PageResult {
    /// Total page count for the query
    #[serde(rename = "pages")]
    pub total_pages: u64,

    /// Total item count for the query
    #[serde(rename = "total")]
    pub total_items: u64,

    #[serde(rename = "raw_messages")]
    pub items: Vec<RawMessage>,
}
