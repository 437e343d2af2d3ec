//! Immutable, serializable view of a session after a state change.
//!
//! Renderers receive a [`SessionSnapshot`] and never touch the session
//! itself. Every derived value (progress, flags, timer display) is computed
//! once here.

use jiff::Timestamp;
use serde::Serialize;

use crate::{
    models::{Ingredient, Recipe, Step, StepMarker, TimerStatus, View},
    timer::CountdownTimer,
};

/// Recipe metadata for the page header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecipeHeader {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prep_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cook_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub servings: Option<u32>,
}

impl From<&Recipe> for RecipeHeader {
    fn from(recipe: &Recipe) -> Self {
        Self {
            name: recipe.name.clone(),
            prep_time: recipe.prep_time.clone(),
            cook_time: recipe.cook_time.clone(),
            servings: recipe.servings,
        }
    }
}

/// Checklist state and its derived progress.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChecklistView {
    pub ingredients: Vec<Ingredient>,
    pub checked: usize,
    pub total: usize,
    pub progress_percent: f64,
    pub all_checked: bool,
}

impl ChecklistView {
    /// Tab badge, e.g. `3/9`.
    pub fn badge(&self) -> String {
        format!("{}/{}", self.checked, self.total)
    }
}

/// Current step and navigation flags.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CookingView {
    /// Zero-based index of the current step
    pub current_index: usize,
    pub total: usize,
    pub step: Step,
    pub progress_percent: f64,
    pub is_first: bool,
    pub is_last: bool,
    pub current_completed: bool,
    pub markers: Vec<StepMarker>,
    pub completed: usize,
    pub all_completed: bool,
}

impl CookingView {
    /// Tab badge, e.g. `2/7`. Counts steps before the current one.
    pub fn badge(&self) -> String {
        format!("{}/{}", self.current_index, self.total)
    }

    /// 1-based number of the current step.
    pub fn number(&self) -> usize {
        self.current_index + 1
    }
}

/// Display values of the mounted countdown.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimerView {
    pub display: String,
    pub remaining: u32,
    pub duration: u32,
    pub progress_percent: f64,
    pub duration_label: String,
    pub status: TimerStatus,
}

impl From<&CountdownTimer> for TimerView {
    fn from(timer: &CountdownTimer) -> Self {
        Self {
            display: timer.display(),
            remaining: timer.remaining(),
            duration: timer.duration(),
            progress_percent: timer.progress_percent(),
            duration_label: timer.duration_label(),
            status: timer.status(),
        }
    }
}

/// Everything a renderer needs after a state change.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SessionSnapshot {
    pub header: RecipeHeader,
    pub view: View,
    pub checklist: ChecklistView,
    pub cooking: CookingView,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timer: Option<TimerView>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cooking_since: Option<Timestamp>,
}
