//! User actions accepted by a [`crate::Session`] and what they did.
//!
//! Actions are interface-agnostic: the CLI parses typed commands into them,
//! and tests build them directly.

use crate::{
    models::{TimerStatus, View},
    sequencer::Moved,
};

/// Control of the current step's countdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerCommand {
    Start,
    Pause,
    Toggle,
    Reset,
}

/// A discrete user input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Flip one checklist entry
    ToggleIngredient(String),
    /// Pass the gate into cooking mode
    StartCooking,
    /// Return to the checklist
    BackToIngredients,
    /// Return to the checklist after finishing every step
    StartNewRecipe,
    /// Complete the current step and move on
    NextStep,
    /// Move back one step
    PreviousStep,
    /// Jump to a zero-based step index
    GoToStep(usize),
    /// Operate the current step's timer
    Timer(TimerCommand),
}

/// What an applied action changed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// An ingredient now has the given checked flag
    Toggled { id: String, checked: bool },
    /// The active view after a view transition
    Switched(View),
    /// Result of step navigation
    Navigated(Moved),
    /// Timer status after a timer command
    Timer(TimerStatus),
}
