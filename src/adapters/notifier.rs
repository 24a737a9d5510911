use crate::domain::model::Notification;
use crate::domain::ports::Notifier;

/// Prints notifications to stderr as they arrive.
#[derive(Debug, Clone, Default)]
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn notify(&mut self, notification: Notification) {
        if notification.is_destructive() {
            tracing::warn!(title = %notification.title, "{}", notification.description);
            eprintln!("❌ {}: {}", notification.title, notification.description);
        } else {
            tracing::info!(title = %notification.title, "{}", notification.description);
            eprintln!("✅ {}: {}", notification.title, notification.description);
        }
    }
}

/// Keeps every notification in order, for tests and JSON reports.
#[derive(Debug, Clone, Default)]
pub struct RecordingNotifier {
    notifications: Vec<Notification>,
}

impl RecordingNotifier {
    pub fn notifications(&self) -> &[Notification] {
        &self.notifications
    }

    pub fn last(&self) -> Option<&Notification> {
        self.notifications.last()
    }

    pub fn into_notifications(self) -> Vec<Notification> {
        self.notifications
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&mut self, notification: Notification) {
        tracing::debug!(title = %notification.title, "notification recorded");
        self.notifications.push(notification);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recording_notifier_keeps_order() {
        let mut notifier = RecordingNotifier::default();
        notifier.notify(Notification::error("Error", "first"));
        notifier.notify(Notification::info("Done", "second"));

        let titles: Vec<&str> = notifier
            .notifications()
            .iter()
            .map(|n| n.title.as_str())
            .collect();
        assert_eq!(titles, vec!["Error", "Done"]);
        assert_eq!(notifier.last().unwrap().description, "second");
    }

    #[test]
    fn test_notifier_through_mutable_reference() {
        fn send<N: Notifier>(mut notifier: N) {
            notifier.notify(Notification::info("Hello", ""));
        }

        let mut notifier = RecordingNotifier::default();
        send(&mut notifier);
        send(&mut notifier);
        assert_eq!(notifier.notifications().len(), 2);
    }
}
