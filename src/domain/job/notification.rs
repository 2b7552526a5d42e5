//! User-facing notifications and failure descriptions

use std::fmt;

/// Title shown when generate is requested without a file
pub const NO_FILE_TITLE: &str = "Nenhum arquivo selecionado";

/// Detail shown when generate is requested without a file
pub const NO_FILE_DETAIL: &str = "Por favor, selecione um arquivo de áudio primeiro.";

/// Title shown for any failed submission
pub const GENERATION_FAILED_TITLE: &str = "Erro ao gerar resumo";

/// Title shown when a summary arrives
pub const SUCCESS_TITLE: &str = "Resumo gerado com sucesso!";

/// Detail shown when a summary arrives
pub const SUCCESS_DETAIL: &str = "Seu resumo está pronto para visualização.";

/// Human-readable classification of a failure.
/// Never carries a raw transport error, only the text meant for the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorInfo {
    pub title: String,
    pub detail: String,
}

impl ErrorInfo {
    pub fn new(title: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            detail: detail.into(),
        }
    }

    /// Validation failure: generate without a selected file
    pub fn no_file_selected() -> Self {
        Self::new(NO_FILE_TITLE, NO_FILE_DETAIL)
    }

    /// Submission failure with the given detail
    pub fn generation_failed(detail: impl Into<String>) -> Self {
        Self::new(GENERATION_FAILED_TITLE, detail)
    }
}

impl fmt::Display for ErrorInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.title, self.detail)
    }
}

/// Notification severity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

/// A transient message for the notification channel
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub title: String,
    pub detail: String,
}

impl Notification {
    /// The "summary ready" notification
    pub fn summary_ready() -> Self {
        Self {
            kind: NotificationKind::Success,
            title: SUCCESS_TITLE.to_string(),
            detail: SUCCESS_DETAIL.to_string(),
        }
    }
}

impl From<ErrorInfo> for Notification {
    fn from(info: ErrorInfo) -> Self {
        Self {
            kind: NotificationKind::Error,
            title: info.title,
            detail: info.detail,
        }
    }
}
