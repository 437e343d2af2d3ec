//! Feedback lines printed after a command.

use std::fmt;

use crate::error::SousError;

/// Outcome of one command as a `Success:` or `Error:` line.
///
/// A rejected command leaves the session untouched, so its line is the only
/// visible effect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperationStatus {
    pub message: String,
    pub success: bool,
}

impl OperationStatus {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            success: true,
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            success: false,
        }
    }

    fn prefix(&self) -> &'static str {
        if self.success {
            "Success:"
        } else {
            "Error:"
        }
    }
}

impl From<&SousError> for OperationStatus {
    fn from(error: &SousError) -> Self {
        Self::failure(error.to_string())
    }
}

impl fmt::Display for OperationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} {}", self.prefix(), self.message)
    }
}
