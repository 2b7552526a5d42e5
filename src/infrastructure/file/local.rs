//! Local filesystem loader for selected files

use std::path::{Path, PathBuf};

use thiserror::Error;
use tokio::fs;

use crate::domain::upload::{media_type, SelectedFile};

/// Errors while reading a file from disk
#[derive(Debug, Clone, Error)]
pub enum LoadError {
    #[error("File not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Not a regular file: {}", .0.display())]
    NotAFile(PathBuf),

    #[error("Failed to read {}: {message}", .path.display())]
    ReadFailed { path: PathBuf, message: String },
}

/// Reads files from the local filesystem into [`SelectedFile`] values
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalFileLoader;

impl LocalFileLoader {
    pub fn new() -> Self {
        Self
    }

    /// Load a file, declaring the given media type or one guessed from the extension
    pub async fn load(
        &self,
        path: &Path,
        declared: Option<&str>,
    ) -> Result<SelectedFile, LoadError> {
        let metadata = fs::metadata(path).await.map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                LoadError::NotFound(path.to_path_buf())
            } else {
                LoadError::ReadFailed {
                    path: path.to_path_buf(),
                    message: e.to_string(),
                }
            }
        })?;

        if !metadata.is_file() {
            return Err(LoadError::NotAFile(path.to_path_buf()));
        }

        let data = fs::read(path).await.map_err(|e| LoadError::ReadFailed {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.to_string_lossy().into_owned());

        let media_type = declared
            .map(str::to_string)
            .unwrap_or_else(|| media_type::guess_from_path(path).to_string());

        Ok(SelectedFile::new(name, media_type, data))
    }
}
