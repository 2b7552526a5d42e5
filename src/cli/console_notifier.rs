//! Terminal notification channel

use async_trait::async_trait;

use crate::application::ports::{NotificationError, NotificationIcon, Notifier};
use crate::domain::job::NotificationKind;
use crate::infrastructure::NotifyRustNotifier;

use super::presenter::Presenter;

/// Notifier that prints to stderr through the presenter
pub struct ConsoleNotifier {
    presenter: Presenter,
}

impl ConsoleNotifier {
    pub fn new() -> Self {
        Self {
            presenter: Presenter::new(),
        }
    }
}

impl Default for ConsoleNotifier {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Notifier for ConsoleNotifier {
    async fn notify(
        &self,
        title: &str,
        message: &str,
        icon: NotificationIcon,
    ) -> Result<(), NotificationError> {
        let kind = match icon {
            NotificationIcon::Error => NotificationKind::Error,
            NotificationIcon::Success | NotificationIcon::Info => NotificationKind::Success,
        };
        self.presenter.notification(kind, title, message);
        Ok(())
    }
}

/// Build the notification channel: the terminal, plus the desktop if asked
pub fn build_notifier(desktop: bool) -> Vec<Box<dyn Notifier>> {
    let mut notifiers: Vec<Box<dyn Notifier>> = vec![Box::new(ConsoleNotifier::new())];
    if desktop {
        notifiers.push(Box::new(NotifyRustNotifier::new()));
    }
    notifiers
}
