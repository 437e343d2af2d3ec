//! Recipe model, loading and validation.

use std::{collections::HashSet, path::Path};

use serde::{Deserialize, Serialize};

use super::{Ingredient, Step};
use crate::error::{IoResultExt, Result, SousError};

/// A complete recipe: header metadata, ingredient checklist and steps.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Recipe {
    /// Recipe title
    pub name: String,

    /// Preparation time as free text, e.g. "20 min"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prep_time: Option<String>,

    /// Cooking time as free text
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cook_time: Option<String>,

    /// Number of servings
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub servings: Option<u32>,

    /// Ingredients in checklist order
    pub ingredients: Vec<Ingredient>,

    /// Steps in cooking order
    pub steps: Vec<Step>,
}

impl Recipe {
    /// Parses and validates a recipe from JSON.
    ///
    /// Checked flags in the input are ignored; every walkthrough starts with
    /// an empty checklist.
    pub fn from_json(json: &str) -> Result<Self> {
        let mut recipe: Recipe = serde_json::from_str(json)?;
        for ingredient in &mut recipe.ingredients {
            ingredient.checked = false;
        }
        recipe.validate()?;
        Ok(recipe)
    }

    /// Reads a recipe file from disk.
    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path).at_path(path)?;
        Self::from_json(&json)
    }

    /// Checks the invariants a walkthrough relies on.
    ///
    /// # Errors
    ///
    /// Returns [`SousError::InvalidRecipe`] naming the first offending field.
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(SousError::invalid_recipe("name").with_reason("must not be empty"));
        }
        if self.ingredients.is_empty() {
            return Err(
                SousError::invalid_recipe("ingredients").with_reason("at least one is required")
            );
        }
        if self.steps.is_empty() {
            return Err(SousError::invalid_recipe("steps").with_reason("at least one is required"));
        }

        let mut seen = HashSet::new();
        for ingredient in &self.ingredients {
            if ingredient.id.is_empty() {
                return Err(SousError::invalid_recipe("ingredients.id")
                    .with_reason(format!("'{}' has an empty id", ingredient.name)));
            }
            if !seen.insert(ingredient.id.as_str()) {
                return Err(SousError::invalid_recipe("ingredients.id")
                    .with_reason(format!("duplicate id '{}'", ingredient.id)));
            }
        }

        let mut seen = HashSet::new();
        for step in &self.steps {
            if step.id.is_empty() {
                return Err(SousError::invalid_recipe("steps.id")
                    .with_reason(format!("'{}' has an empty id", step.title)));
            }
            if !seen.insert(step.id.as_str()) {
                return Err(SousError::invalid_recipe("steps.id")
                    .with_reason(format!("duplicate id '{}'", step.id)));
            }
            if step.duration == Some(0) {
                return Err(SousError::invalid_recipe("steps.duration")
                    .with_reason(format!("step '{}' has a zero-second timer", step.id)));
            }
        }

        Ok(())
    }

    /// Sum of all step timers in seconds.
    pub fn total_timer_seconds(&self) -> u64 {
        self.steps
            .iter()
            .filter_map(|step| step.duration)
            .map(u64::from)
            .sum()
    }

    /// The built-in Classic Margherita Pizza recipe.
    pub fn margherita() -> Self {
        Self {
            name: "Classic Margherita Pizza".to_string(),
            prep_time: Some("20 min".to_string()),
            cook_time: Some("15 min".to_string()),
            servings: Some(4),
            ingredients: vec![
                Ingredient::new("1", "Pizza dough", "1 ball (400g)"),
                Ingredient::new("2", "San Marzano tomatoes", "1 can (400g)"),
                Ingredient::new("3", "Fresh mozzarella", "250g"),
                Ingredient::new("4", "Fresh basil leaves", "1 handful"),
                Ingredient::new("5", "Extra virgin olive oil", "3 tbsp"),
                Ingredient::new("6", "Garlic cloves", "2 cloves"),
                Ingredient::new("7", "Salt", "to taste"),
                Ingredient::new("8", "Black pepper", "to taste"),
                Ingredient::new("9", "All-purpose flour", "for dusting"),
            ],
            steps: vec![
                Step::new(
                    "1",
                    "Prepare the dough",
                    "Remove pizza dough from refrigerator and let it come to room temperature. \
                     This makes it easier to stretch. Dust your work surface with flour.",
                )
                .timed(1800)
                .with_tip("Room temperature dough is more elastic and easier to work with!"),
                Step::new(
                    "2",
                    "Preheat the oven",
                    "Preheat your oven to the highest temperature (usually 475-500°F or \
                     245-260°C). If you have a pizza stone, place it in the oven now.",
                )
                .timed(900)
                .with_tip("A very hot oven is the secret to a crispy crust!"),
                Step::new(
                    "3",
                    "Make the sauce",
                    "Crush the tomatoes by hand in a bowl. Mince the garlic and add it to the \
                     tomatoes. Add 1 tbsp olive oil, salt, and pepper. Mix well. No cooking \
                     needed!",
                )
                .timed(300)
                .with_tip("Keep the sauce simple - the quality of tomatoes matters most."),
                Step::new(
                    "4",
                    "Stretch the dough",
                    "On a floured surface, gently stretch the dough into a 12-inch circle. Start \
                     from the center and work your way out. Leave a slightly thicker edge for \
                     the crust.",
                )
                .timed(180)
                .with_tip(
                    "Don't use a rolling pin - it removes air bubbles that make the crust fluffy!",
                ),
                Step::new(
                    "5",
                    "Assemble the pizza",
                    "Transfer dough to a pizza peel or parchment paper. Spread a thin layer of \
                     sauce, leaving a 1-inch border. Tear the mozzarella and distribute evenly. \
                     Drizzle with olive oil.",
                )
                .timed(120)
                .with_tip("Less is more - don't overload with toppings or the crust won't crisp!"),
                Step::new(
                    "6",
                    "Bake the pizza",
                    "Carefully transfer pizza to the hot oven (on the stone if using). Bake until \
                     the crust is golden and cheese is bubbling, about 10-12 minutes.",
                )
                .timed(660)
                .with_tip("Watch carefully in the last few minutes to avoid burning!"),
                Step::new(
                    "7",
                    "Finish and serve",
                    "Remove pizza from oven and immediately top with fresh basil leaves. Drizzle \
                     with a bit more olive oil if desired. Let cool for 1-2 minutes, then slice \
                     and serve.",
                )
                .timed(120)
                .with_tip("Add basil after baking to keep it fresh and vibrant!"),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MINIMAL: &str = r#"{
        "name": "Toast",
        "ingredients": [{ "id": "bread", "name": "Bread", "amount": "1 slice", "checked": true }],
        "steps": [
            { "id": "a", "title": "Toast", "description": "Toast the bread.", "duration": 90 },
            { "id": "b", "title": "Butter", "description": "Spread butter." }
        ]
    }"#;

    #[test]
    fn test_margherita_is_valid() {
        let recipe = Recipe::margherita();
        recipe.validate().unwrap();
        assert_eq!(recipe.ingredients.len(), 9);
        assert_eq!(recipe.steps.len(), 7);
        assert_eq!(recipe.total_timer_seconds(), 1800 + 900 + 300 + 180 + 120 + 660 + 120);
        assert!(recipe.ingredients.iter().all(|i| !i.checked));
    }

    #[test]
    fn test_from_json_resets_checked_flags() {
        let recipe = Recipe::from_json(MINIMAL).unwrap();
        assert_eq!(recipe.name, "Toast");
        assert!(!recipe.ingredients[0].checked);
        assert_eq!(recipe.steps[0].duration, Some(90));
        assert_eq!(recipe.steps[1].duration, None);
        assert_eq!(recipe.servings, None);
    }

    #[test]
    fn test_validate_rejects_duplicate_step_ids() {
        let mut recipe = Recipe::margherita();
        recipe.steps[1].id = "1".to_string();
        let err = recipe.validate().unwrap_err();
        assert!(err.to_string().contains("duplicate id '1'"));
    }

    #[test]
    fn test_validate_rejects_zero_duration() {
        let mut recipe = Recipe::margherita();
        recipe.steps[2].duration = Some(0);
        assert!(matches!(
            recipe.validate(),
            Err(SousError::InvalidRecipe { ref field, .. }) if field == "steps.duration"
        ));
    }

    #[test]
    fn test_validate_rejects_empty_steps() {
        let mut recipe = Recipe::margherita();
        recipe.steps.clear();
        assert!(recipe.validate().is_err());
    }

    #[test]
    fn test_from_json_reports_malformed_input() {
        assert!(matches!(
            Recipe::from_json("{ not json"),
            Err(SousError::Serialization { .. })
        ));
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let err = Recipe::load(&dir.path().join("nope.json")).unwrap_err();
        assert!(matches!(err, SousError::FileSystem { .. }));
    }
}
