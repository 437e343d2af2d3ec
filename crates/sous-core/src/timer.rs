//! Countdown timer for a single timed step.
//!
//! The timer is a plain state machine: it never schedules anything itself.
//! Something outside (the [`crate::ticker::Ticker`] in a live session, or a
//! test loop) calls [`CountdownTimer::tick`] once per elapsed second while
//! the timer is running. The return value tells the caller whether this tick
//! finished the countdown, which happens at most once per run.

use serde::Serialize;

use crate::{
    display::{Clock, DurationLabel},
    models::TimerStatus,
};

/// Result of delivering one tick to a timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tick {
    /// The timer was not running; nothing changed
    Ignored,
    /// One second elapsed and time remains
    Counted { remaining: u32 },
    /// This tick brought the timer to zero
    Completed,
}

/// Remaining-time state for one step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CountdownTimer {
    label: String,
    duration: u32,
    remaining: u32,
    running: bool,
    completed: bool,
}

impl CountdownTimer {
    /// Creates an idle timer of `duration` seconds for the step `label`.
    ///
    /// Durations come from validated recipes and are always positive; a zero
    /// duration yields a timer that is already at zero and can never start.
    pub fn new(duration: u32, label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            duration,
            remaining: duration,
            running: false,
            completed: false,
        }
    }

    /// Starts counting down. Returns whether the timer is now running.
    pub fn start(&mut self) -> bool {
        if self.remaining == 0 {
            return false;
        }
        self.running = true;
        true
    }

    /// Stops counting down, keeping the remaining time.
    pub fn pause(&mut self) {
        self.running = false;
    }

    /// Pauses a running timer, otherwise starts it.
    pub fn toggle(&mut self) {
        if self.running {
            self.pause();
        } else {
            self.start();
        }
    }

    /// Restores the full duration and clears completion.
    pub fn reset(&mut self) {
        self.remaining = self.duration;
        self.running = false;
        self.completed = false;
    }

    /// Advances the countdown by one second.
    pub fn tick(&mut self) -> Tick {
        if !self.running {
            return Tick::Ignored;
        }

        self.remaining = self.remaining.saturating_sub(1);
        if self.remaining == 0 {
            self.running = false;
            self.completed = true;
            Tick::Completed
        } else {
            Tick::Counted {
                remaining: self.remaining,
            }
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn duration(&self) -> u32 {
        self.duration
    }

    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }

    /// Collapses the flags into a single status.
    pub fn status(&self) -> TimerStatus {
        if self.completed {
            TimerStatus::Completed
        } else if self.running {
            TimerStatus::Running
        } else if self.remaining < self.duration {
            TimerStatus::Paused
        } else {
            TimerStatus::Idle
        }
    }

    /// Remaining time as `MM:SS`.
    pub fn display(&self) -> String {
        Clock(self.remaining).to_string()
    }

    /// Elapsed share of the duration, 0.0 to 100.0.
    pub fn progress_percent(&self) -> f64 {
        if self.duration == 0 {
            return 100.0;
        }
        f64::from(self.duration - self.remaining) / f64::from(self.duration) * 100.0
    }

    /// Human description of the total duration, e.g. "30 minutes".
    pub fn duration_label(&self) -> String {
        DurationLabel(self.duration).to_string()
    }
}
