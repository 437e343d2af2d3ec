//! The walkthrough session: view coordination over gate, sequencer and timer.
//!
//! A [`Session`] owns every piece of mutable state for one recipe run. All
//! mutation goes through its operations, each of which either fully applies
//! or returns an error without touching anything:
//!
//! ```text
//! ┌──────────────┐   gate passes   ┌──────────────┐
//! │ Ingredients  │ ──────────────▶ │   Cooking    │
//! │ (checklist)  │ ◀────────────── │ (steps+timer)│
//! └──────────────┘   back / new    └──────────────┘
//! ```
//!
//! Only the current step's timer exists at any time. It is created when a
//! timed step becomes current and discarded when the step changes or the
//! cook leaves cooking mode.
//!
//! # Tick epochs
//!
//! Starting, pausing, resetting, changing step and leaving cooking mode bump
//! the session's epoch; a `start` on a timer that is already running does
//! not. [`Session::running_epoch`] tells a scheduler which epoch to tick for,
//! and [`Session::tick`] ignores any signal carrying another epoch. A tick
//! queued just before a pause, reset or step change can therefore never
//! reach the new state.
//!
//! # Examples
//!
//! ```rust
//! use sous_core::{Action, Recipe, Session};
//!
//! let recipe = Recipe::margherita();
//! let ids: Vec<String> = recipe.ingredients.iter().map(|i| i.id.clone()).collect();
//! let mut session = Session::try_from(recipe).unwrap();
//!
//! assert!(session.apply(Action::StartCooking).is_err());
//! for id in ids {
//!     session.apply(Action::ToggleIngredient(id)).unwrap();
//! }
//! session.apply(Action::StartCooking).unwrap();
//! assert_eq!(session.snapshot().cooking.current_index, 0);
//! ```

pub mod builder;


use jiff::Timestamp;
use log::{debug, info, trace};

pub use builder::SessionBuilder;

use crate::{
    action::{Action, Outcome, TimerCommand},
    error::{Result, SousError},
    gate::IngredientGate,
    models::{LeavePolicy, Recipe, TimerStatus, View},
    notify::{announce_completion, Notifier, Silent},
    sequencer::{Moved, StepSequencer},
    snapshot::{ChecklistView, CookingView, RecipeHeader, SessionSnapshot, TimerView},
    ticker::TickSignal,
    timer::{CountdownTimer, Tick},
};

/// Report of a timer that just reached zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimerCompletion {
    pub step_id: String,
    pub step_title: String,
    pub at: Timestamp,
}

struct MountedTimer {
    step_index: usize,
    timer: CountdownTimer,
}

/// One recipe walkthrough.
pub struct Session {
    header: RecipeHeader,
    gate: IngredientGate,
    sequencer: StepSequencer,
    view: View,
    policy: LeavePolicy,
    timer: Option<MountedTimer>,
    epoch: u64,
    notifier: Box<dyn Notifier>,
    cooking_since: Option<Timestamp>,
}

impl Session {
    /// Creates a session on the checklist view.
    ///
    /// # Errors
    ///
    /// Returns [`SousError::InvalidRecipe`] when the recipe fails
    /// [`Recipe::validate`].
    pub fn new(recipe: Recipe, policy: LeavePolicy, notifier: Box<dyn Notifier>) -> Result<Self> {
        recipe.validate()?;
        let header = RecipeHeader::from(&recipe);
        Ok(Self {
            header,
            gate: IngredientGate::new(recipe.ingredients),
            sequencer: StepSequencer::new(recipe.steps),
            view: View::Ingredients,
            policy,
            timer: None,
            epoch: 0,
            notifier,
            cooking_since: None,
        })
    }

    pub fn view(&self) -> View {
        self.view
    }

    pub fn policy(&self) -> LeavePolicy {
        self.policy
    }

    pub fn gate(&self) -> &IngredientGate {
        &self.gate
    }

    pub fn sequencer(&self) -> &StepSequencer {
        &self.sequencer
    }

    /// The current step's timer, if the step is timed and cooking is active.
    pub fn timer(&self) -> Option<&CountdownTimer> {
        self.timer.as_ref().map(|mounted| &mounted.timer)
    }

    /// Epoch a scheduler should tick for, or `None` when nothing runs.
    pub fn running_epoch(&self) -> Option<u64> {
        self.timer()
            .filter(|timer| timer.is_running())
            .map(|_| self.epoch)
    }

    /// Applies one user action.
    pub fn apply(&mut self, action: Action) -> Result<Outcome> {
        match action {
            Action::ToggleIngredient(id) => {
                let checked = self.toggle_ingredient(&id)?;
                Ok(Outcome::Toggled { id, checked })
            }
            Action::StartCooking => self.start_cooking().map(|_| Outcome::Switched(self.view)),
            Action::BackToIngredients => {
                self.back_to_ingredients().map(|_| Outcome::Switched(self.view))
            }
            Action::StartNewRecipe => self.start_new_recipe().map(|_| Outcome::Switched(self.view)),
            Action::NextStep => self.next_step().map(Outcome::Navigated),
            Action::PreviousStep => self.previous_step().map(Outcome::Navigated),
            Action::GoToStep(index) => self.go_to_step(index).map(Outcome::Navigated),
            Action::Timer(command) => self.control_timer(command).map(Outcome::Timer),
        }
    }

    /// Flips an ingredient on the checklist view.
    pub fn toggle_ingredient(&mut self, id: &str) -> Result<bool> {
        self.require(View::Ingredients)?;
        let checked = self.gate.toggle(id)?;
        debug!(
            "Ingredient {id} {}; {}/{} checked",
            if checked { "checked" } else { "unchecked" },
            self.gate.checked_count(),
            self.gate.total()
        );
        Ok(checked)
    }

    /// Enters cooking mode if every ingredient is checked.
    ///
    /// Already cooking is not an error. The step position is left where it
    /// was.
    pub fn start_cooking(&mut self) -> Result<()> {
        if self.view == View::Cooking {
            return Ok(());
        }
        self.gate.check()?;

        self.view = View::Cooking;
        self.cooking_since = Some(Timestamp::now());
        self.mount_timer();
        info!(
            "Cooking {} from step {}",
            self.header.name,
            self.sequencer.current_index() + 1
        );
        Ok(())
    }

    /// Leaves cooking mode.
    pub fn back_to_ingredients(&mut self) -> Result<()> {
        self.require(View::Cooking)?;
        self.leave_cooking();
        Ok(())
    }

    /// Leaves cooking mode after every step is done.
    pub fn start_new_recipe(&mut self) -> Result<()> {
        self.require(View::Cooking)?;
        if !self.sequencer.all_completed() {
            return Err(SousError::NotFinished {
                remaining: self.sequencer.len() - self.sequencer.completed_count(),
            });
        }
        self.leave_cooking();
        Ok(())
    }

    /// Completes the current step and moves forward.
    pub fn next_step(&mut self) -> Result<Moved> {
        self.require(View::Cooking)?;
        let moved = self.sequencer.advance();
        self.after_move(moved);
        Ok(moved)
    }

    /// Moves back one step.
    pub fn previous_step(&mut self) -> Result<Moved> {
        self.require(View::Cooking)?;
        let moved = self.sequencer.retreat();
        self.after_move(moved);
        Ok(moved)
    }

    /// Jumps to a zero-based step index.
    pub fn go_to_step(&mut self, index: usize) -> Result<Moved> {
        self.require(View::Cooking)?;
        let before = self.sequencer.current_index();
        self.sequencer.go_to(index)?;
        let moved = if index == before {
            Moved::Stayed
        } else {
            Moved::To(index)
        };
        self.after_move(moved);
        Ok(moved)
    }

    /// Runs a timer command against the current step's timer.
    pub fn control_timer(&mut self, command: TimerCommand) -> Result<TimerStatus> {
        self.require(View::Cooking)?;
        let step = self.sequencer.current_step().title.clone();
        let mounted = self
            .timer
            .as_mut()
            .ok_or(SousError::NoTimer { step })?;

        let was_running = mounted.timer.is_running();
        match command {
            TimerCommand::Start => {
                mounted.timer.start();
            }
            TimerCommand::Pause => mounted.timer.pause(),
            TimerCommand::Toggle => mounted.timer.toggle(),
            TimerCommand::Reset => mounted.timer.reset(),
        }
        let status = mounted.timer.status();

        // A run that carries on keeps its epoch, so the ticker keeps its
        // phase.
        if command == TimerCommand::Reset || was_running != mounted.timer.is_running() {
            self.epoch += 1;
        }
        debug!("Timer {command:?} -> {}", status.as_str());
        Ok(status)
    }

    /// Delivers one tick from a scheduler.
    ///
    /// Returns the completion when this tick brought the timer to zero. The
    /// step is then marked complete and both notifications fire; notifier
    /// failures are logged and ignored.
    pub fn tick(&mut self, signal: TickSignal) -> Option<TimerCompletion> {
        if signal.epoch != self.epoch {
            trace!(
                "Discarding stale tick for epoch {} (current {})",
                signal.epoch,
                self.epoch
            );
            return None;
        }
        let mounted = self.timer.as_mut()?;

        match mounted.timer.tick() {
            Tick::Ignored => None,
            Tick::Counted { remaining } => {
                trace!("Tick: {remaining}s remaining");
                None
            }
            Tick::Completed => {
                debug_assert_eq!(mounted.step_index, self.sequencer.current_index());
                self.sequencer.mark_current_complete();
                let step = self.sequencer.current_step();
                announce_completion(self.notifier.as_ref(), &step.title);
                info!("Timer for step {} ({}) complete", step.id, step.title);
                Some(TimerCompletion {
                    step_id: step.id.clone(),
                    step_title: step.title.clone(),
                    at: Timestamp::now(),
                })
            }
        }
    }

    /// Derived, immutable state for rendering.
    pub fn snapshot(&self) -> SessionSnapshot {
        let gate = &self.gate;
        let seq = &self.sequencer;
        SessionSnapshot {
            header: self.header.clone(),
            view: self.view,
            checklist: ChecklistView {
                ingredients: gate.ingredients().to_vec(),
                checked: gate.checked_count(),
                total: gate.total(),
                progress_percent: gate.progress_percent(),
                all_checked: gate.all_checked(),
            },
            cooking: CookingView {
                current_index: seq.current_index(),
                total: seq.len(),
                step: seq.current_step().clone(),
                progress_percent: seq.progress_percent(),
                is_first: seq.is_first(),
                is_last: seq.is_last(),
                current_completed: seq.is_current_completed(),
                markers: seq.markers(),
                completed: seq.completed_count(),
                all_completed: seq.all_completed(),
            },
            timer: self.timer().map(TimerView::from),
            cooking_since: self.cooking_since,
        }
    }

    fn require(&self, view: View) -> Result<()> {
        if self.view == view {
            Ok(())
        } else {
            Err(SousError::WrongView { expected: view })
        }
    }

    fn after_move(&mut self, moved: Moved) {
        match moved {
            Moved::To(index) => {
                debug!("Moved to step {}", index + 1);
                self.mount_timer();
            }
            Moved::Stayed => debug!("Step unchanged"),
        }
    }

    /// Replaces whatever timer was mounted with a fresh one for the current
    /// step.
    fn mount_timer(&mut self) {
        self.epoch += 1;
        let index = self.sequencer.current_index();
        let step = self.sequencer.current_step();
        self.timer = step.duration.map(|duration| MountedTimer {
            step_index: index,
            timer: CountdownTimer::new(duration, step.title.clone()),
        });
    }

    fn leave_cooking(&mut self) {
        self.epoch += 1;
        self.timer = None;
        self.sequencer.reset();
        if self.policy == LeavePolicy::FreshSession {
            self.sequencer.clear_completed();
            self.gate.clear();
        }
        self.view = View::Ingredients;
        self.cooking_since = None;
        info!("Back to ingredients ({:?})", self.policy);
    }
}

impl TryFrom<Recipe> for Session {
    type Error = SousError;

    fn try_from(recipe: Recipe) -> Result<Self> {
        Self::new(recipe, LeavePolicy::default(), Box::new(Silent))
    }
}
