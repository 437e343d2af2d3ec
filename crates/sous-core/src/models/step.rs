//! Step model definition.

use serde::{Deserialize, Serialize};

/// One instruction unit in the cooking sequence, optionally timed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Step {
    /// Unique identifier within the recipe
    pub id: String,

    /// Short title shown in the step header and in notifications
    pub title: String,

    /// Full instruction text
    pub description: String,

    /// Timer length in whole seconds; `None` means the step has no timer
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<u32>,

    /// Optional "Pro Tip" text
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tip: Option<String>,
}

impl Step {
    /// Creates an untimed step without a tip.
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: description.into(),
            duration: None,
            tip: None,
        }
    }

    /// Attaches a countdown of `seconds` to the step.
    pub fn timed(mut self, seconds: u32) -> Self {
        self.duration = Some(seconds);
        self
    }

    /// Attaches a tip to the step.
    pub fn with_tip(mut self, tip: impl Into<String>) -> Self {
        self.tip = Some(tip.into());
        self
    }
}
