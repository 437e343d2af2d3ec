//! Data models for recipes, ingredients and steps.
//!
//! Display implementations for these models are located in
//! [`crate::display::models`] to keep data structures separate from
//! presentation.
//!
//! # Examples
//!
//! ```rust
//! use sous_core::models::{Recipe, StepMarker};
//!
//! let recipe = Recipe::margherita();
//! assert_eq!(recipe.ingredients.len(), 9);
//! assert_eq!(recipe.steps.len(), 7);
//! assert_eq!(StepMarker::Completed.icon(), "✓");
//! ```

pub mod ingredient;
pub mod recipe;
pub mod status;
pub mod step;

pub use ingredient::Ingredient;
pub use recipe::Recipe;
pub use status::{LeavePolicy, StepMarker, TimerStatus, View};
pub use step::Step;
