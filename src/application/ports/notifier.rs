//! Notification port interface

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::job::NotificationKind;

/// Notification errors
#[derive(Debug, Clone, Error)]
pub enum NotificationError {
    #[error("Failed to show notification: {0}")]
    SendFailed(String),
}

/// Notification icon types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationIcon {
    Info,
    Success,
    Error,
}

impl NotificationIcon {
    /// Get the freedesktop icon name
    pub const fn icon_name(&self) -> &'static str {
        match self {
            Self::Info => "dialog-information",
            Self::Success => "dialog-ok",
            Self::Error => "dialog-error",
        }
    }
}

impl From<NotificationKind> for NotificationIcon {
    fn from(kind: NotificationKind) -> Self {
        match kind {
            NotificationKind::Success => Self::Success,
            NotificationKind::Error => Self::Error,
        }
    }
}

/// Port for the user-facing notification channel
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Show a transient notification.
    ///
    /// # Arguments
    /// * `title` - The notification title
    /// * `message` - The notification body
    /// * `icon` - The icon to display
    async fn notify(
        &self,
        title: &str,
        message: &str,
        icon: NotificationIcon,
    ) -> Result<(), NotificationError>;
}

/// Blanket implementation for boxed notifier types
#[async_trait]
impl Notifier for Box<dyn Notifier> {
    async fn notify(
        &self,
        title: &str,
        message: &str,
        icon: NotificationIcon,
    ) -> Result<(), NotificationError> {
        self.as_ref().notify(title, message, icon).await
    }
}

/// Fan-out to several notifiers. Every target is tried; the first error is returned.
#[async_trait]
impl Notifier for Vec<Box<dyn Notifier>> {
    async fn notify(
        &self,
        title: &str,
        message: &str,
        icon: NotificationIcon,
    ) -> Result<(), NotificationError> {
        let mut first_error = None;
        for notifier in self {
            if let Err(e) = notifier.notify(title, message, icon).await {
                first_error.get_or_insert(e);
            }
        }
        first_error.map_or(Ok(()), Err)
    }
}
