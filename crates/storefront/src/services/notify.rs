//! User notifications.
//!
//! Invalid input and successful adds are reported to the user with a
//! blocking message rather than an error value.

/// Shows a blocking message to the user.
pub trait Notifier {
    fn notify(&mut self, message: &str);
}

/// Records every message. Handy for tests and for replaying notifications
/// after a batch of operations.
impl Notifier for Vec<String> {
    fn notify(&mut self, message: &str) {
        self.push(message.to_owned());
    }
}
