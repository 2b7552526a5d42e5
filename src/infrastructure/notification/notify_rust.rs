//! Desktop notification adapter using notify-rust
//!
//! Works on Windows, macOS, and Linux.

use async_trait::async_trait;
use notify_rust::{Notification, Timeout};

use crate::application::ports::{NotificationError, NotificationIcon, Notifier};

/// Application name shown by the notification daemon
pub const APP_NAME: &str = "Mestre IA";

/// How long a notification stays up; failures linger so the detail can be read
const fn display_ms(icon: NotificationIcon) -> u32 {
    match icon {
        NotificationIcon::Error => 10_000,
        NotificationIcon::Success | NotificationIcon::Info => 5_000,
    }
}

/// Build the desktop notification for a title, body and icon
fn build_notification(
    app_name: &str,
    title: &str,
    message: &str,
    icon: NotificationIcon,
) -> Notification {
    let mut notification = Notification::new();
    notification
        .appname(app_name)
        .summary(title)
        .body(message)
        .icon(icon.icon_name())
        .timeout(Timeout::Milliseconds(display_ms(icon)));
    notification
}

/// Desktop notifier using notify-rust
pub struct NotifyRustNotifier {
    app_name: String,
}

impl NotifyRustNotifier {
    pub fn new() -> Self {
        Self {
            app_name: APP_NAME.to_string(),
        }
    }

    /// Create with custom app name
    pub fn with_app_name(app_name: impl Into<String>) -> Self {
        Self {
            app_name: app_name.into(),
        }
    }
}

impl Default for NotifyRustNotifier {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Notifier for NotifyRustNotifier {
    async fn notify(
        &self,
        title: &str,
        message: &str,
        icon: NotificationIcon,
    ) -> Result<(), NotificationError> {
        let title = title.to_owned();
        let message = message.to_owned();
        let app_name = self.app_name.clone();

        // notify-rust can block on the session bus
        tokio::task::spawn_blocking(move || {
            build_notification(&app_name, &title, &message, icon)
                .show()
                .map_err(|e| NotificationError::SendFailed(e.to_string()))?;

            Ok(())
        })
        .await
        .map_err(|e| NotificationError::SendFailed(format!("Task join error: {}", e)))?
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notifier_with_custom_app_name() {
        let notifier = NotifyRustNotifier::with_app_name("TestApp");
        assert_eq!(notifier.app_name, "TestApp");
    }

    #[test]
    fn failure_notification_carries_detail_and_error_icon() {
        let notification = build_notification(
            APP_NAME,
            "Erro ao gerar resumo",
            "model overloaded",
            NotificationIcon::Error,
        );

        assert_eq!(notification.appname, "Mestre IA");
        assert_eq!(notification.summary, "Erro ao gerar resumo");
        assert_eq!(notification.body, "model overloaded");
        assert_eq!(notification.icon, "dialog-error");
        assert_eq!(notification.timeout, Timeout::Milliseconds(10_000));
    }

    #[test]
    fn success_notification_is_shorter() {
        let notification = build_notification(
            APP_NAME,
            "Resumo gerado com sucesso!",
            "",
            NotificationIcon::Success,
        );

        assert_eq!(notification.icon, "dialog-ok");
        assert_eq!(notification.timeout, Timeout::Milliseconds(5_000));
    }

    #[test]
    fn notifier_default_app_name() {
        let notifier = NotifyRustNotifier::default();
        assert_eq!(notifier.app_name, "Mestre IA");
    }
}
