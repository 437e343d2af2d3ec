//! Status enumerations for views, timers and step markers.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The two top-level screens of a walkthrough.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum View {
    /// Ingredient checklist
    #[default]
    Ingredients,

    /// Step-by-step cooking
    Cooking,
}

impl View {
    /// Lowercase name used in messages and JSON.
    pub fn as_str(&self) -> &'static str {
        match self {
            View::Ingredients => "ingredients",
            View::Cooking => "cooking",
        }
    }
}

/// Observable state of a countdown timer.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TimerStatus {
    /// Never started, or reset
    Idle,

    /// Counting down
    Running,

    /// Stopped part-way with time remaining
    Paused,

    /// Reached zero
    Completed,
}

impl TimerStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TimerStatus::Idle => "idle",
            TimerStatus::Running => "running",
            TimerStatus::Paused => "paused",
            TimerStatus::Completed => "completed",
        }
    }
}

/// Per-step indicator shown in the progress strip.
///
/// Completed takes priority over Current: a finished step stays green even
/// while it is the active one.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum StepMarker {
    Completed,
    Current,
    Pending,
}

impl StepMarker {
    /// Resolves the marker for a step from its completion and position.
    pub fn resolve(is_completed: bool, is_current: bool) -> Self {
        if is_completed {
            StepMarker::Completed
        } else if is_current {
            StepMarker::Current
        } else {
            StepMarker::Pending
        }
    }

    /// Icon used in the step strip.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sous_core::models::StepMarker;
    ///
    /// assert_eq!(StepMarker::Completed.icon(), "✓");
    /// assert_eq!(StepMarker::Current.icon(), "➤");
    /// assert_eq!(StepMarker::Pending.icon(), "○");
    /// ```
    pub fn icon(&self) -> &'static str {
        match self {
            StepMarker::Completed => "✓",
            StepMarker::Current => "➤",
            StepMarker::Pending => "○",
        }
    }
}

/// What leaving cooking mode does to progress.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum LeavePolicy {
    /// Only the step index returns to the first step; completed steps and
    /// checked ingredients survive.
    #[default]
    KeepProgress,

    /// Completed steps are forgotten and every ingredient is unchecked.
    FreshSession,
}

impl FromStr for LeavePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "keep" | "keep-progress" => Ok(LeavePolicy::KeepProgress),
            "reset" | "fresh" | "fresh-session" => Ok(LeavePolicy::FreshSession),
            _ => Err(format!("Invalid leave policy: {s}")),
        }
    }
}
