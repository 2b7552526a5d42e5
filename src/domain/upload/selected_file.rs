//! Selected file value object

use std::fmt;

use bytes::Bytes;

use super::media_type;

/// Value object representing the audio file chosen for upload.
/// Contains the raw bytes plus the name and media type declared at selection.
/// Clones share the byte buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedFile {
    name: String,
    media_type: String,
    data: Bytes,
}

impl SelectedFile {
    /// Create a selected file from its parts
    pub fn new(
        name: impl Into<String>,
        media_type: impl Into<String>,
        data: impl Into<Bytes>,
    ) -> Self {
        Self {
            name: name.into(),
            media_type: media_type.into(),
            data: data.into(),
        }
    }

    /// Get the original file name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the declared media type
    pub fn media_type(&self) -> &str {
        &self.media_type
    }

    /// Get the raw file contents
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Handle to the contents for sending; shares the buffer
    pub fn bytes(&self) -> Bytes {
        self.data.clone()
    }

    /// Get the size in bytes
    pub fn size_bytes(&self) -> u64 {
        self.data.len() as u64
    }

    /// Whether the declared media type is an audio type
    pub fn is_audio(&self) -> bool {
        media_type::is_audio(&self.media_type)
    }

    /// Size in megabytes with two decimals, as shown next to the file name
    pub fn size_megabytes(&self) -> String {
        format!("{:.2} MB", self.size_bytes() as f64 / (1024.0 * 1024.0))
    }
}

impl fmt::Display for SelectedFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.size_megabytes())
    }
}
