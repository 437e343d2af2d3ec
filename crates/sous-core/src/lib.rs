//! Core library for the Sous recipe walkthrough.
//!
//! A walkthrough has two screens. On the checklist the cook ticks off every
//! ingredient; only then does the gate open onto the cooking screen, which
//! steps through the recipe one instruction at a time. Timed steps carry a
//! countdown that marks the step complete when it reaches zero.
//!
//! # Architecture
//!
//! - **Countdown Timer** ([`timer`]): remaining time for one step
//! - **Step Sequencer** ([`sequencer`]): current step and completed set
//! - **Ingredient Gate** ([`gate`]): checklist and the all-checked gate
//! - **Session** ([`session`]): the view coordinator owning all of the above
//! - **Ticker** ([`ticker`]): cancellable tokio task delivering ticks
//! - **Snapshot** ([`snapshot`]): derived, immutable state for renderers
//!
//! State flows one way: an [`Action`] mutates the [`Session`], which
//! produces a [`SessionSnapshot`] that any renderer can display.
//!
//! # Quick Start
//!
//! ```rust
//! use sous_core::{Action, SessionBuilder, TimerCommand};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let mut session = SessionBuilder::new()
//!     .with_recipe(sous_core::Recipe::margherita())
//!     .build()
//!     .await?;
//!
//! for id in 1..=9 {
//!     session.apply(Action::ToggleIngredient(id.to_string()))?;
//! }
//! session.apply(Action::StartCooking)?;
//! session.apply(Action::Timer(TimerCommand::Start))?;
//!
//! println!("{}", session.snapshot());
//! # Ok(())
//! # }
//! ```

pub mod action;
pub mod display;
pub mod error;
pub mod gate;
pub mod models;
pub mod notify;
pub mod sequencer;
pub mod session;
pub mod snapshot;
pub mod ticker;
pub mod timer;

// Re-export commonly used types
pub use action::{Action, Outcome, TimerCommand};
pub use display::OperationStatus;
pub use error::{NotifyError, Result, SousError};
pub use gate::IngredientGate;
pub use models::{Ingredient, LeavePolicy, Recipe, Step, StepMarker, TimerStatus, View};
pub use notify::{Notification, Notifier, Silent};
pub use sequencer::{Moved, StepSequencer};
pub use session::{Session, SessionBuilder, TimerCompletion};
pub use snapshot::SessionSnapshot;
pub use ticker::{TickSignal, Ticker, DEFAULT_TICK_PERIOD};
pub use timer::{CountdownTimer, Tick};
