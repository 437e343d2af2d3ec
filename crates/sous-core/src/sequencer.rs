//! Step sequencer: current position and completed-step bookkeeping.

use std::collections::HashSet;

use crate::{
    error::{Result, SousError},
    models::{Step, StepMarker},
};

/// Outcome of a relative navigation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Moved {
    /// The index changed to the contained value
    To(usize),
    /// Already at the boundary; nothing changed
    Stayed,
}

/// Owns the ordered steps, the current index and the completed set.
///
/// The step list is never empty; [`crate::models::Recipe::validate`] rejects
/// recipes without steps before a sequencer is built.
#[derive(Debug, Clone)]
pub struct StepSequencer {
    steps: Vec<Step>,
    current: usize,
    completed: HashSet<String>,
}

impl StepSequencer {
    pub fn new(steps: Vec<Step>) -> Self {
        Self {
            steps,
            current: 0,
            completed: HashSet::new(),
        }
    }

    /// Jumps directly to `index`.
    ///
    /// # Errors
    ///
    /// Returns [`SousError::StepOutOfRange`] (with the 1-based step number)
    /// when `index` is past the last step. The position is unchanged.
    pub fn go_to(&mut self, index: usize) -> Result<()> {
        if index >= self.steps.len() {
            return Err(SousError::StepOutOfRange {
                number: index + 1,
                total: self.steps.len(),
            });
        }
        self.current = index;
        Ok(())
    }

    /// Completes the current step and moves to the next one.
    pub fn advance(&mut self) -> Moved {
        if self.is_last() {
            return Moved::Stayed;
        }
        let id = self.current_step().id.clone();
        self.completed.insert(id);
        self.current += 1;
        Moved::To(self.current)
    }

    /// Moves back one step without touching the completed set.
    pub fn retreat(&mut self) -> Moved {
        if self.is_first() {
            return Moved::Stayed;
        }
        self.current -= 1;
        Moved::To(self.current)
    }

    /// Marks the current step done without moving.
    pub fn mark_current_complete(&mut self) {
        let id = self.current_step().id.clone();
        self.completed.insert(id);
    }

    /// Returns to the first step.
    pub fn reset(&mut self) {
        self.current = 0;
    }

    /// Forgets every completion.
    pub fn clear_completed(&mut self) {
        self.completed.clear();
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn current_step(&self) -> &Step {
        &self.steps[self.current]
    }

    pub fn is_first(&self) -> bool {
        self.current == 0
    }

    pub fn is_last(&self) -> bool {
        self.current + 1 == self.steps.len()
    }

    pub fn is_completed(&self, id: &str) -> bool {
        self.completed.contains(id)
    }

    pub fn is_current_completed(&self) -> bool {
        self.is_completed(&self.current_step().id)
    }

    pub fn completed_count(&self) -> usize {
        self.completed.len()
    }

    pub fn all_completed(&self) -> bool {
        self.completed.len() == self.steps.len()
    }

    /// Position through the recipe, counting the current step as reached.
    pub fn progress_percent(&self) -> f64 {
        (self.current + 1) as f64 / self.steps.len() as f64 * 100.0
    }

    /// Marker for every step, in order.
    pub fn markers(&self) -> Vec<StepMarker> {
        self.steps
            .iter()
            .enumerate()
            .map(|(index, step)| {
                StepMarker::resolve(self.completed.contains(&step.id), index == self.current)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seven_steps() -> StepSequencer {
        StepSequencer::new(
            (1..=7)
                .map(|n| Step::new(n.to_string(), format!("Step {n}"), "Do it."))
                .collect(),
        )
    }

    #[test]
    fn test_advance_completes_current_step() {
        let mut seq = seven_steps();
        assert_eq!(seq.advance(), Moved::To(1));
        assert!(seq.is_completed("1"));
        assert_eq!(seq.current_index(), 1);
        assert_eq!(seq.completed_count(), 1);
    }

    #[test]
    fn test_advance_to_end_then_guarded() {
        let mut seq = seven_steps();
        for _ in 0..6 {
            seq.advance();
        }
        assert_eq!(seq.current_index(), 6);
        assert!(seq.is_last());
        assert_eq!(seq.completed_count(), 6);
        assert!(!seq.all_completed());

        assert_eq!(seq.advance(), Moved::Stayed);
        assert_eq!(seq.current_index(), 6);
        assert_eq!(seq.completed_count(), 6);
    }

    #[test]
    fn test_retreat_never_touches_completed() {
        let mut seq = seven_steps();
        seq.advance();
        seq.advance();
        assert_eq!(seq.retreat(), Moved::To(1));
        assert_eq!(seq.retreat(), Moved::To(0));
        assert_eq!(seq.retreat(), Moved::Stayed);
        assert_eq!(seq.completed_count(), 2);
        assert!(seq.is_first());
    }

    #[test]
    fn test_go_to_rejects_out_of_range() {
        let mut seq = seven_steps();
        seq.go_to(4).unwrap();
        let err = seq.go_to(7).unwrap_err();
        assert!(matches!(err, SousError::StepOutOfRange { number: 8, total: 7 }));
        assert_eq!(seq.current_index(), 4);
    }

    #[test]
    fn test_all_completed_is_order_independent() {
        let mut seq = seven_steps();
        seq.go_to(2).unwrap();
        seq.mark_current_complete();
        assert!(seq.is_current_completed());
        seq.go_to(0).unwrap();
        for _ in 0..6 {
            seq.advance();
        }
        assert!(!seq.all_completed());
        seq.mark_current_complete();
        assert!(seq.all_completed());
        assert_eq!(seq.completed_count(), 7);
    }

    #[test]
    fn test_markers_prefer_completed() {
        let mut seq = seven_steps();
        seq.advance();
        seq.retreat();
        let markers = seq.markers();
        assert_eq!(markers[0], StepMarker::Completed);
        assert_eq!(markers[1], StepMarker::Pending);
        seq.advance();
        assert_eq!(seq.markers()[1], StepMarker::Current);
    }

    #[test]
    fn test_progress_percent() {
        let mut seq = StepSequencer::new(
            (1..=4)
                .map(|n| Step::new(n.to_string(), "t", "d"))
                .collect(),
        );
        assert_eq!(seq.progress_percent(), 25.0);
        seq.go_to(3).unwrap();
        assert_eq!(seq.progress_percent(), 100.0);
    }

    #[test]
    fn test_reset_keeps_completed() {
        let mut seq = seven_steps();
        seq.advance();
        seq.advance();
        seq.reset();
        assert_eq!(seq.current_index(), 0);
        assert_eq!(seq.completed_count(), 2);
        seq.clear_completed();
        assert_eq!(seq.completed_count(), 0);
    }
}
