// src/error.rs

//! Unified error handling for both batch jobs.

use std::fmt;

use thiserror::Error;

/// Result type alias for job operations.
pub type Result<T> = std::result::Result<T, AppError>;

/// Unified application error type.
#[derive(Error, Debug)]
pub enum AppError {
    /// I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON serialization/deserialization failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML serialization failed
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// TOML parsing failed
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    /// URL parsing failed
    #[error("URL parse error: {0}")]
    Url(#[from] url::ParseError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Data validation error
    #[error("Validation error: {0}")]
    Validation(String),

    /// A required field is absent from a raw message
    #[error("Missing field '{field}' in message")]
    MissingField { field: String },

    /// A required field is present but is not a scalar
    #[error("Invalid field '{field}': expected string or number, found {found}")]
    InvalidField { field: String, found: String },

    /// Crawling error
    #[error("Crawl error for {context}: {message}")]
    Crawl { context: String, message: String },
}

impl AppError {
    /// Create a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Create a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Create a missing field error for a dotted path.
    pub fn missing_field(field: impl Into<String>) -> Self {
        Self::MissingField {
            field: field.into(),
        }
    }

    /// Create a crawl error with context.
    pub fn crawl(context: impl Into<String>, message: impl fmt::Display) -> Self {
        Self::Crawl {
            context: context.into(),
            message: message.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_field_names_the_path() {
        let err = AppError::missing_field("msg.pullrequest.branch");
        assert_eq!(
            err.to_string(),
            "Missing field 'msg.pullrequest.branch' in message"
        );
    }

    #[test]
    fn crawl_error_formats_context() {
        let err = AppError::crawl("page 3", "gave up after 5 attempts");
        assert_eq!(
            err.to_string(),
            "Crawl error for page 3: gave up after 5 attempts"
        );
    }
}
