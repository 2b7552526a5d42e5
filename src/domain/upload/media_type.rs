//! Media type helpers for selected files

use std::path::Path;

/// Prefix every accepted drag-and-drop media type must start with
pub const AUDIO_PREFIX: &str = "audio/";

/// Advisory filter shown by the picker (not enforced)
pub const PICKER_FILTER: &str = "audio/*";

/// Media type used when the extension is unknown
pub const FALLBACK_MEDIA_TYPE: &str = "application/octet-stream";

/// Known extension → media type pairs
const KNOWN_TYPES: &[(&str, &str)] = &[
    ("mp3", "audio/mpeg"),
    ("wav", "audio/wav"),
    ("m4a", "audio/mp4"),
    ("mp4", "audio/mp4"),
    ("aac", "audio/aac"),
    ("ogg", "audio/ogg"),
    ("oga", "audio/ogg"),
    ("opus", "audio/opus"),
    ("flac", "audio/flac"),
    ("webm", "audio/webm"),
    ("weba", "audio/webm"),
    ("txt", "text/plain"),
    ("md", "text/markdown"),
    ("pdf", "application/pdf"),
    ("png", "image/png"),
    ("jpg", "image/jpeg"),
    ("jpeg", "image/jpeg"),
];

/// Check whether a declared media type is an audio type.
///
/// Matches on the raw prefix, so `audio/` followed by anything qualifies
/// while `Audio/mpeg` or ` audio/mpeg` do not.
pub fn is_audio(media_type: &str) -> bool {
    media_type.starts_with(AUDIO_PREFIX)
}

/// Guess a media type from the file extension
pub fn guess_from_path(path: &Path) -> &'static str {
    let Some(ext) = path.extension().and_then(|e| e.to_str()) else {
        return FALLBACK_MEDIA_TYPE;
    };
    let ext = ext.to_ascii_lowercase();

    KNOWN_TYPES
        .iter()
        .find(|(known, _)| *known == ext)
        .map(|(_, media_type)| *media_type)
        .unwrap_or(FALLBACK_MEDIA_TYPE)
}
