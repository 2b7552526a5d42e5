//! Application configuration value object

use serde::{Deserialize, Serialize};

use super::endpoint::DEFAULT_BASE_URL;

/// Application configuration.
/// All fields are optional to support partial configs and merging.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    pub api_url: Option<String>,
    pub clipboard: Option<bool>,
    pub notify: Option<bool>,
}

impl AppConfig {
    /// Create config with default values
    pub fn defaults() -> Self {
        Self {
            api_url: Some(DEFAULT_BASE_URL.to_string()),
            clipboard: Some(false),
            notify: Some(false),
        }
    }

    /// Create an empty config (all None)
    pub fn empty() -> Self {
        Self::default()
    }

    /// Merge this config with another, where other takes precedence.
    /// Only non-None values from other will override this; a blank
    /// `api_url` counts as unset.
    pub fn merge(self, other: Self) -> Self {
        Self {
            api_url: other
                .api_url
                .filter(|url| !url.trim().is_empty())
                .or(self.api_url),
            clipboard: other.clipboard.or(self.clipboard),
            notify: other.notify.or(self.notify),
        }
    }

    /// Get the base URL, or the local default if not set
    pub fn api_url_or_default(&self) -> &str {
        self.api_url.as_deref().unwrap_or(DEFAULT_BASE_URL)
    }

    /// Get clipboard setting, or false if not set
    pub fn clipboard_or_default(&self) -> bool {
        self.clipboard.unwrap_or(false)
    }

    /// Get notify setting, or false if not set
    pub fn notify_or_default(&self) -> bool {
        self.notify.unwrap_or(false)
    }
}
