//! File selection rules for picker and drag-and-drop

use tracing::debug;

use crate::domain::upload::media_type::PICKER_FILTER;
use crate::domain::upload::SelectedFile;

/// Applies the acceptance rules for the two ways a file can be chosen.
///
/// Drops are strict (audio media types only, anything else is silently
/// ignored) while the picker accepts whatever the dialog returned.
#[derive(Debug, Default)]
pub struct FileSelector {
    /// Value held by the picker widget; a change is only signalled when it differs
    picker_value: Option<String>,
}

impl FileSelector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advisory filter to pass to the picker dialog
    pub fn picker_filter(&self) -> &'static str {
        PICKER_FILTER
    }

    /// Accept a file chosen through the picker dialog, as-is
    pub fn select_from_picker(&mut self, file: SelectedFile) -> SelectedFile {
        self.picker_value = Some(file.name().to_string());
        file
    }

    /// Accept the first dropped file if its declared media type is audio
    pub fn select_from_drop(&self, files: Vec<SelectedFile>) -> Option<SelectedFile> {
        let file = files.into_iter().next()?;
        if file.is_audio() {
            Some(file)
        } else {
            debug!(
                name = file.name(),
                media_type = file.media_type(),
                "ignoring non-audio drop"
            );
            None
        }
    }

    /// Reset the picker widget so the same file can be picked again
    pub fn clear(&mut self) {
        self.picker_value = None;
    }

    /// Whether picking a file with this name would register as a change
    pub fn picker_would_change(&self, name: &str) -> bool {
        self.picker_value.as_deref() != Some(name)
    }
}
