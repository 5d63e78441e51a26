//! Application configuration structures.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{AppError, Result};

/// Root application configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// HTTP client settings shared by both jobs
    #[serde(default)]
    pub http: HttpConfig,

    /// Pull-request event crawler settings
    #[serde(default)]
    pub events: EventsConfig,

    /// Maintainer notification settings
    #[serde(default)]
    pub mailer: MailerConfig,

    /// Log output settings
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Validate configuration values for basic sanity.
    pub fn validate(&self) -> Result<()> {
        if self.http.user_agent.trim().is_empty() {
            return Err(AppError::validation("http.user_agent is empty"));
        }
        if self.http.timeout_secs == 0 {
            return Err(AppError::validation("http.timeout_secs must be > 0"));
        }
        Url::parse(&self.events.base_url)
            .map_err(|e| AppError::validation(format!("events.base_url: {e}")))?;
        if self.events.topic.trim().is_empty() {
            return Err(AppError::validation("events.topic is empty"));
        }
        if self.events.rows_per_page == 0 {
            return Err(AppError::validation("events.rows_per_page must be > 0"));
        }
        if self.events.retry_limit == Some(0) {
            return Err(AppError::validation(
                "events.retry_limit must be > 0 when set",
            ));
        }
        Url::parse(&self.mailer.alias_url)
            .map_err(|e| AppError::validation(format!("mailer.alias_url: {e}")))?;
        if self.mailer.email_domain.trim().is_empty() {
            return Err(AppError::validation("mailer.email_domain is empty"));
        }
        Ok(())
    }
}

/// HTTP client settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpConfig {
    /// User-Agent header for HTTP requests
    #[serde(default = "defaults::user_agent")]
    pub user_agent: String,

    /// Request timeout in seconds
    #[serde(default = "defaults::timeout")]
    pub timeout_secs: u64,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            user_agent: defaults::user_agent(),
            timeout_secs: defaults::timeout(),
        }
    }
}

/// Settings for the paged message-history crawl.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventsConfig {
    /// Message-history endpoint
    #[serde(default = "defaults::events_base_url")]
    pub base_url: String,

    /// Message topic filter
    #[serde(default = "defaults::events_topic")]
    pub topic: String,

    /// Items requested per page
    #[serde(default = "defaults::rows_per_page")]
    pub rows_per_page: u32,

    /// Pause before re-issuing a failed page, in milliseconds
    #[serde(default = "defaults::retry_delay")]
    pub retry_delay_ms: u64,

    /// Consecutive failures tolerated for a single page. Unbounded when absent.
    #[serde(default)]
    pub retry_limit: Option<u32>,

    /// Output file for normalized records
    #[serde(default = "defaults::events_output_file")]
    pub output_file: String,

    /// Pretty-print the output JSON
    #[serde(default)]
    pub pretty: bool,
}

impl Default for EventsConfig {
    fn default() -> Self {
        Self {
            base_url: defaults::events_base_url(),
            topic: defaults::events_topic(),
            rows_per_page: defaults::rows_per_page(),
            retry_delay_ms: defaults::retry_delay(),
            retry_limit: None,
            output_file: defaults::events_output_file(),
            pretty: false,
        }
    }
}

/// Settings for the maintainer notification builder.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MailerConfig {
    /// Maintainer alias directory endpoint
    #[serde(default = "defaults::alias_url")]
    pub alias_url: String,

    /// Newline-delimited list of newly added distgits
    #[serde(default = "defaults::mailer_input_file")]
    pub input_file: String,

    /// Domain appended to maintainer names to form recipients
    #[serde(default = "defaults::email_domain")]
    pub email_domain: String,

    /// Subject line of every notification
    #[serde(default = "defaults::email_subject")]
    pub subject: String,
}

impl Default for MailerConfig {
    fn default() -> Self {
        Self {
            alias_url: defaults::alias_url(),
            input_file: defaults::mailer_input_file(),
            email_domain: defaults::email_domain(),
            subject: defaults::email_subject(),
        }
    }
}

/// Log output settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Default log level filter
    #[serde(default = "defaults::log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: defaults::log_level(),
        }
    }
}

mod defaults {
    // HTTP defaults
    pub fn user_agent() -> String {
        "distgit-jobs/0.1 (+https://fedoraproject.org/wiki/Zuul-based-ci)".into()
    }
    pub fn timeout() -> u64 {
        30
    }

    // Event crawler defaults
    pub fn events_base_url() -> String {
        "https://apps.fedoraproject.org/datagrepper/raw".into()
    }
    pub fn events_topic() -> String {
        "org.fedoraproject.prod.pagure.pull-request.new".into()
    }
    pub fn rows_per_page() -> u32 {
        100
    }
    pub fn retry_delay() -> u64 {
        1000
    }
    pub fn events_output_file() -> String {
        "prs.json".into()
    }

    // Mailer defaults
    pub fn alias_url() -> String {
        "https://src.fedoraproject.org/extras/pagure_owner_alias.json".into()
    }
    pub fn mailer_input_file() -> String {
        "new-distgits-added.txt".into()
    }
    pub fn email_domain() -> String {
        "fedoraproject.org".into()
    }
    pub fn email_subject() -> String {
        "Some distgit(s) you maintain have been added to Fedora Zuul CI".into()
    }

    // Logging defaults
    pub fn log_level() -> String {
        "info".into()
    }
}
