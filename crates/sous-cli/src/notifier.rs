//! Terminal stand-ins for haptic feedback and system notifications.

use std::{
    io::{self, Write},
    time::Duration,
};

use sous_core::{Notification, Notifier, NotifyError};

/// Rings the terminal bell and prints notifications to stderr.
#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalNotifier;

impl Notifier for TerminalNotifier {
    fn vibrate(&self, _pulse: Duration) -> Result<(), NotifyError> {
        let mut err = io::stderr().lock();
        err.write_all(b"\x07")?;
        err.flush()?;
        Ok(())
    }

    fn notify(&self, notification: &Notification) -> Result<(), NotifyError> {
        writeln!(
            io::stderr().lock(),
            "🔔 {} {}",
            notification.title,
            notification.body
        )?;
        Ok(())
    }
}
