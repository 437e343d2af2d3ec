//! Error types for the walkthrough library.

use std::path::PathBuf;

use thiserror::Error;

use crate::models::View;

/// Comprehensive error type for all walkthrough operations.
#[derive(Error, Debug)]
pub enum SousError {
    /// File system operation errors
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Serialization/deserialization errors
    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
    /// Recipe data that cannot drive a walkthrough
    #[error("Invalid recipe field '{field}': {reason}")]
    InvalidRecipe { field: String, reason: String },
    /// Toggle requested for an ingredient the recipe does not list
    #[error("Ingredient with ID '{id}' not found")]
    IngredientNotFound { id: String },
    /// Configuration errors
    #[error("Configuration error: {message}")]
    Configuration { message: String },
    /// Step number outside `1..=total`
    #[error("Step {number} is out of range (recipe has {total} steps)")]
    StepOutOfRange { number: usize, total: usize },
    /// Gate rejection when entering cooking mode
    #[error("Please check off all ingredients before starting! ({remaining} remaining)")]
    IngredientsRemaining { remaining: usize },
    /// Timer command on a step that declares no duration
    #[error("Step '{step}' has no timer")]
    NoTimer { step: String },
    /// Command issued while the other view is active
    #[error("This command is only available in the {expected} view")]
    WrongView { expected: View },
    /// "Start a new recipe" before every step is done
    #[error("Finish the remaining {remaining} step(s) before starting a new recipe")]
    NotFinished { remaining: usize },
}

/// Builder for creating recipe validation errors.
pub struct InvalidRecipeBuilder {
    field: String,
}

impl InvalidRecipeBuilder {
    /// Create a new invalid recipe error builder for a field.
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }

    /// Build the error with the given reason.
    pub fn with_reason(self, reason: impl Into<String>) -> SousError {
        SousError::InvalidRecipe {
            field: self.field,
            reason: reason.into(),
        }
    }
}

impl SousError {
    /// Creates a builder for recipe validation errors.
    pub fn invalid_recipe(field: impl Into<String>) -> InvalidRecipeBuilder {
        InvalidRecipeBuilder::new(field)
    }

    /// Whether the error is a rejected user command rather than a failure to
    /// load or parse data. Rejections never mutate session state.
    pub fn is_rejection(&self) -> bool {
        matches!(
            self,
            SousError::IngredientNotFound { .. }
                | SousError::StepOutOfRange { .. }
                | SousError::IngredientsRemaining { .. }
                | SousError::NoTimer { .. }
                | SousError::WrongView { .. }
                | SousError::NotFinished { .. }
        )
    }
}

/// Extension trait attaching a path to I/O failures.
pub trait IoResultExt<T> {
    /// Map an I/O error into [`SousError::FileSystem`] for `path`.
    fn at_path(self, path: impl Into<PathBuf>) -> Result<T>;
}

impl<T> IoResultExt<T> for std::result::Result<T, std::io::Error> {
    fn at_path(self, path: impl Into<PathBuf>) -> Result<T> {
        self.map_err(|source| SousError::FileSystem {
            path: path.into(),
            source,
        })
    }
}

/// Failure of a best-effort platform notification.
///
/// These never propagate out of the session; they are logged and dropped.
#[derive(Error, Debug)]
pub enum NotifyError {
    /// The platform has no such capability
    #[error("Notification capability unavailable: {0}")]
    Unsupported(&'static str),
    /// Writing the notification failed
    #[error("Notification failed: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for walkthrough operations
pub type Result<T> = std::result::Result<T, SousError>;
