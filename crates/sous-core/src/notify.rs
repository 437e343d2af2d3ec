//! Best-effort platform notifications fired when a timer reaches zero.
//!
//! Both calls are optional capabilities. Implementations report failures or
//! missing support through [`NotifyError`]; the session logs and drops them,
//! so a broken notifier never stops a timer.

use std::time::Duration;

use serde::Serialize;

use crate::error::NotifyError;

/// Length of the haptic pulse sent on timer completion.
pub const COMPLETION_PULSE: Duration = Duration::from_millis(200);

/// A system notification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notification {
    pub title: String,
    pub body: String,
}

impl Notification {
    /// The notification for a finished step timer.
    pub fn timer_complete(step_title: &str) -> Self {
        Self {
            title: "Timer Complete!".to_string(),
            body: format!("{step_title} is done!"),
        }
    }
}

/// Platform notification services.
pub trait Notifier {
    /// Short haptic feedback.
    fn vibrate(&self, pulse: Duration) -> Result<(), NotifyError>;

    /// System notification.
    fn notify(&self, notification: &Notification) -> Result<(), NotifyError>;
}

/// Notifier for platforms without either capability.
#[derive(Debug, Clone, Copy, Default)]
pub struct Silent;

impl Notifier for Silent {
    fn vibrate(&self, _pulse: Duration) -> Result<(), NotifyError> {
        Err(NotifyError::Unsupported("vibrate"))
    }

    fn notify(&self, _notification: &Notification) -> Result<(), NotifyError> {
        Err(NotifyError::Unsupported("notify"))
    }
}

/// Fires both completion notifications, logging and discarding failures.
pub(crate) fn announce_completion(notifier: &dyn Notifier, step_title: &str) {
    if let Err(e) = notifier.vibrate(COMPLETION_PULSE) {
        log::debug!("Skipping haptic pulse: {e}");
    }
    if let Err(e) = notifier.notify(&Notification::timer_complete(step_title)) {
        log::debug!("Skipping completion notification: {e}");
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;

    #[derive(Default)]
    struct Failing {
        attempts: RefCell<u32>,
    }

    impl Notifier for Failing {
        fn vibrate(&self, _pulse: Duration) -> Result<(), NotifyError> {
            *self.attempts.borrow_mut() += 1;
            Err(NotifyError::Io(std::io::Error::other("no motor")))
        }

        fn notify(&self, _notification: &Notification) -> Result<(), NotifyError> {
            *self.attempts.borrow_mut() += 1;
            Err(NotifyError::Unsupported("notify"))
        }
    }

    #[test]
    fn test_timer_complete_text() {
        let n = Notification::timer_complete("Bake the pizza");
        assert_eq!(n.title, "Timer Complete!");
        assert_eq!(n.body, "Bake the pizza is done!");
    }

    #[test]
    fn test_failures_are_swallowed_and_both_attempted() {
        let notifier = Failing::default();
        announce_completion(&notifier, "x");
        assert_eq!(*notifier.attempts.borrow(), 2);
        announce_completion(&Silent, "x");
    }
}
