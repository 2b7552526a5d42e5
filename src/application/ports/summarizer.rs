//! Summarization port interface

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::job::ErrorInfo;
use crate::domain::upload::SelectedFile;

/// Submission failures, classified for the user.
/// Each variant's display text is the detail shown in the notification.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmissionError {
    /// Generate was requested with no file; never reaches the network
    #[error("Por favor, selecione um arquivo de áudio primeiro.")]
    Validation,

    /// The service answered with a structured or status-level failure
    #[error("{0}")]
    Service(String),

    /// No response arrived (connection refused, DNS, timeout)
    #[error("{0}")]
    Transport(String),

    /// Anything else, message passed through verbatim
    #[error("{0}")]
    Unexpected(String),
}

impl From<SubmissionError> for ErrorInfo {
    fn from(err: SubmissionError) -> Self {
        match err {
            SubmissionError::Validation => ErrorInfo::no_file_selected(),
            other => ErrorInfo::generation_failed(other.to_string()),
        }
    }
}

/// Outcome of one submission: the summary text or a classified failure
pub type SubmissionResult = Result<String, SubmissionError>;

/// Port for the remote summarization service
#[async_trait]
pub trait Summarizer: Send + Sync {
    /// Upload the file and wait for the service's answer.
    ///
    /// Single-shot: no retries are attempted.
    async fn submit(&self, file: &SelectedFile) -> SubmissionResult;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::job::{GENERATION_FAILED_TITLE, NO_FILE_TITLE};

    #[test]
    fn validation_maps_to_no_file_info() {
        let info = ErrorInfo::from(SubmissionError::Validation);
        assert_eq!(info.title, NO_FILE_TITLE);
    }

    #[test]
    fn other_errors_keep_detail_verbatim() {
        for err in [
            SubmissionError::Service("model overloaded".to_string()),
            SubmissionError::Transport("model overloaded".to_string()),
            SubmissionError::Unexpected("model overloaded".to_string()),
        ] {
            let info = ErrorInfo::from(err);
            assert_eq!(info.title, GENERATION_FAILED_TITLE);
            assert_eq!(info.detail, "model overloaded");
        }
    }
}
