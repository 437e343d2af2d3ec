//! Ingredient checklist gating entry into cooking mode.

use crate::{
    error::{Result, SousError},
    models::Ingredient,
};

/// Owns the checklist and answers whether cooking may begin.
#[derive(Debug, Clone)]
pub struct IngredientGate {
    ingredients: Vec<Ingredient>,
}

impl IngredientGate {
    pub fn new(ingredients: Vec<Ingredient>) -> Self {
        Self { ingredients }
    }

    /// Flips the checked flag of ingredient `id` and returns the new value.
    ///
    /// # Errors
    ///
    /// Returns [`SousError::IngredientNotFound`] for an unknown id; no flag
    /// changes.
    pub fn toggle(&mut self, id: &str) -> Result<bool> {
        let ingredient = self
            .ingredients
            .iter_mut()
            .find(|ingredient| ingredient.id == id)
            .ok_or_else(|| SousError::IngredientNotFound { id: id.to_string() })?;
        ingredient.checked = !ingredient.checked;
        Ok(ingredient.checked)
    }

    /// Passes when every ingredient is checked.
    ///
    /// # Errors
    ///
    /// Returns [`SousError::IngredientsRemaining`] carrying the blocking
    /// message otherwise. Checking never mutates the list.
    pub fn check(&self) -> Result<()> {
        if self.all_checked() {
            Ok(())
        } else {
            Err(SousError::IngredientsRemaining {
                remaining: self.total() - self.checked_count(),
            })
        }
    }

    /// Unchecks every ingredient.
    pub fn clear(&mut self) {
        for ingredient in &mut self.ingredients {
            ingredient.checked = false;
        }
    }

    pub fn ingredients(&self) -> &[Ingredient] {
        &self.ingredients
    }

    pub fn total(&self) -> usize {
        self.ingredients.len()
    }

    pub fn checked_count(&self) -> usize {
        self.ingredients.iter().filter(|i| i.checked).count()
    }

    pub fn all_checked(&self) -> bool {
        self.checked_count() == self.total()
    }

    pub fn progress_percent(&self) -> f64 {
        if self.ingredients.is_empty() {
            return 100.0;
        }
        self.checked_count() as f64 / self.total() as f64 * 100.0
    }
}
