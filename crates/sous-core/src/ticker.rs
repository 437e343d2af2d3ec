//! Cancellable once-per-period tick source for a running timer.
//!
//! A [`Ticker`] owns at most one spawned interval task. Arming it for a new
//! run cancels the previous task first, and dropping the ticker cancels
//! whatever is left, so there is never more than one live tick source.
//! Each signal carries the epoch it was armed with; a session discards
//! signals whose epoch no longer matches, which covers signals that were
//! already queued when the task was cancelled.

use std::time::Duration;

use tokio::{
    sync::mpsc,
    task::JoinHandle,
    time::{self, Instant, MissedTickBehavior},
};

/// Default period between ticks.
pub const DEFAULT_TICK_PERIOD: Duration = Duration::from_secs(1);

/// One elapsed period for the run identified by `epoch`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickSignal {
    pub epoch: u64,
}

struct Armed {
    epoch: u64,
    handle: JoinHandle<()>,
}

/// Owner of the tick task handle.
pub struct Ticker {
    period: Duration,
    tx: mpsc::UnboundedSender<TickSignal>,
    armed: Option<Armed>,
}

impl Ticker {
    /// Creates a disarmed ticker and the receiver its signals arrive on.
    pub fn new(period: Duration) -> (Self, mpsc::UnboundedReceiver<TickSignal>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let ticker = Self {
            period,
            tx,
            armed: None,
        };
        (ticker, rx)
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    /// Starts ticking for `epoch`, replacing any previous task.
    ///
    /// Must be called from within a tokio runtime.
    pub fn arm(&mut self, epoch: u64) {
        self.cancel();

        let tx = self.tx.clone();
        let period = self.period;
        let handle = tokio::spawn(async move {
            let mut interval = time::interval_at(Instant::now() + period, period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Burst);
            loop {
                interval.tick().await;
                if tx.send(TickSignal { epoch }).is_err() {
                    break;
                }
            }
        });

        log::debug!("Ticker armed for epoch {epoch} every {period:?}");
        self.armed = Some(Armed { epoch, handle });
    }

    /// Stops the current task, if any. Already queued signals stay queued.
    pub fn cancel(&mut self) {
        if let Some(armed) = self.armed.take() {
            armed.handle.abort();
            log::debug!("Ticker for epoch {} cancelled", armed.epoch);
        }
    }

    pub fn is_armed(&self) -> bool {
        self.armed.is_some()
    }

    pub fn is_armed_for(&self, epoch: u64) -> bool {
        self.armed.as_ref().is_some_and(|armed| armed.epoch == epoch)
    }

    /// Arms or cancels so the ticker matches the session's running epoch.
    pub fn sync(&mut self, running: Option<u64>) {
        match running {
            Some(epoch) if !self.is_armed_for(epoch) => self.arm(epoch),
            Some(_) => {}
            None => self.cancel(),
        }
    }
}

impl Drop for Ticker {
    fn drop(&mut self) {
        self.cancel();
    }
}
