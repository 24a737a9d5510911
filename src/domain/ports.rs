use crate::domain::model::Notification;

/// Surface that shows transient messages (toasts) to the user.
pub trait Notifier {
    fn notify(&mut self, notification: Notification);
}

impl<N: Notifier + ?Sized> Notifier for &mut N {
    fn notify(&mut self, notification: Notification) {
        (**self).notify(notification)
    }
}
