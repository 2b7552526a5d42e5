//! Cross-platform clipboard adapter using arboard
//!
//! Works on Windows, macOS, and Linux (X11/Wayland).

use async_trait::async_trait;

use crate::application::ports::{Clipboard, ClipboardError};

/// Cross-platform clipboard adapter using arboard
pub struct ArboardClipboard;

impl ArboardClipboard {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ArboardClipboard {
    fn default() -> Self {
        Self::new()
    }
}

/// No usable clipboard vs. a clipboard that refused the text
fn classify(err: arboard::Error) -> ClipboardError {
    match err {
        arboard::Error::ClipboardNotSupported | arboard::Error::ClipboardOccupied => {
            ClipboardError::ClipboardUnavailable(err.to_string())
        }
        other => ClipboardError::CopyFailed(other.to_string()),
    }
}

#[async_trait]
impl Clipboard for ArboardClipboard {
    async fn copy(&self, text: &str) -> Result<(), ClipboardError> {
        let text = text.to_owned();

        // arboard is blocking; a fresh handle per copy
        tokio::task::spawn_blocking(move || {
            let mut clipboard = arboard::Clipboard::new().map_err(classify)?;
            clipboard.set_text(text).map_err(classify)
        })
        .await
        .map_err(|e| ClipboardError::CopyFailed(format!("Task join error: {}", e)))?
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_clipboard_is_unavailable() {
        assert!(matches!(
            classify(arboard::Error::ClipboardNotSupported),
            ClipboardError::ClipboardUnavailable(_)
        ));
        assert!(matches!(
            classify(arboard::Error::ClipboardOccupied),
            ClipboardError::ClipboardUnavailable(_)
        ));
    }

    #[test]
    fn rejected_text_is_copy_failure() {
        let err = classify(arboard::Error::ConversionFailure);
        assert!(matches!(err, ClipboardError::CopyFailed(ref msg) if !msg.is_empty()));
    }
}
