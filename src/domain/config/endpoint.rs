//! Summarization endpoint value object

use std::fmt;

/// Base URL used when nothing else is configured
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8001";

/// Path of the summarization route on the service
pub const SUMMARY_PATH: &str = "/transcrever-audio";

/// Resolved location of the summarization service.
/// Built once at startup and handed to the submitter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    base_url: String,
    url: String,
}

impl Endpoint {
    /// Resolve the endpoint from an optional base URL override.
    /// Empty overrides are ignored and a trailing `/` is trimmed.
    pub fn resolve(base_url: Option<&str>) -> Self {
        let base = base_url
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .unwrap_or(DEFAULT_BASE_URL)
            .trim_end_matches('/')
            .to_string();

        Self {
            url: format!("{}{}", base, SUMMARY_PATH),
            base_url: base,
        }
    }

    /// The base URL the user configured
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Full URL of the summarization route
    pub fn url(&self) -> &str {
        &self.url
    }
}

impl Default for Endpoint {
    fn default() -> Self {
        Self::resolve(None)
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.url)
    }
}
