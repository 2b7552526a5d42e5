//! Summary rendering and clipboard copy

use tracing::{debug, warn};

use super::ports::Clipboard;

/// Heading printed above the summary
pub const SUMMARY_HEADER: &str = "Resumo da Aula";

/// Renders the latest summary and copies it on request.
/// Holds no job state; the caller decides what to show.
pub struct ResultPresenter<C: Clipboard> {
    clipboard: C,
}

impl<C: Clipboard> ResultPresenter<C> {
    pub fn new(clipboard: C) -> Self {
        Self { clipboard }
    }

    /// Render the summary under its heading, text kept verbatim
    pub fn present(&self, summary: &str) -> String {
        let rule = "─".repeat(SUMMARY_HEADER.chars().count());
        format!("{}\n{}\n{}", SUMMARY_HEADER, rule, summary)
    }

    /// Copy the summary to the clipboard. Failures are logged, not raised.
    pub async fn copy(&self, summary: &str) -> bool {
        match self.clipboard.copy(summary).await {
            Ok(()) => {
                debug!(chars = summary.chars().count(), "summary copied to clipboard");
                true
            }
            Err(e) => {
                warn!(error = %e, "failed to copy summary");
                false
            }
        }
    }
}
