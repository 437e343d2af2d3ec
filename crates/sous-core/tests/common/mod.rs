use std::path::PathBuf;

use sous_core::{Ingredient, LeavePolicy, Recipe, Session, SessionBuilder, Step};
use tempfile::TempDir;

/// Small recipe with one untimed and two timed steps.
pub fn quick_recipe() -> Recipe {
    Recipe {
        name: "Soft Boiled Eggs".to_string(),
        prep_time: Some("1 min".to_string()),
        cook_time: Some("7 min".to_string()),
        servings: Some(2),
        ingredients: vec![
            Ingredient::new("eggs", "Eggs", "2"),
            Ingredient::new("water", "Water", "1 pot"),
            Ingredient::new("salt", "Salt", "a pinch"),
        ],
        steps: vec![
            Step::new("boil", "Boil the water", "Bring the pot to a rolling boil."),
            Step::new("cook", "Cook the eggs", "Lower the eggs in gently.")
                .timed(5)
                .with_tip("Cold eggs crack less if you lower them on a spoon."),
            Step::new("rest", "Rest", "Move the eggs to cold water.").timed(2),
        ],
    }
}

/// Helper function to write a recipe file into a fresh temp dir
pub fn write_recipe(recipe: &Recipe) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("recipe.json");
    let json = serde_json::to_string_pretty(recipe).expect("Failed to serialize recipe");
    std::fs::write(&path, json).expect("Failed to write recipe");
    (temp_dir, path)
}

/// Helper function to create a session already on the cooking view
pub async fn cooking_session(recipe: Recipe, policy: LeavePolicy) -> Session {
    let ids: Vec<String> = recipe.ingredients.iter().map(|i| i.id.clone()).collect();
    let mut session = SessionBuilder::new()
        .with_recipe(recipe)
        .with_leave_policy(policy)
        .build()
        .await
        .expect("Failed to create session");
    for id in ids {
        session.toggle_ingredient(&id).expect("Failed to check ingredient");
    }
    session.start_cooking().expect("Failed to start cooking");
    session
}
