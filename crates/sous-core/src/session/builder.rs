//! Builder for creating and configuring Session instances.

use std::path::{Path, PathBuf};

use tokio::task;

use super::Session;
use crate::{
    error::{Result, SousError},
    models::{LeavePolicy, Recipe},
    notify::{Notifier, Silent},
};

/// File name looked up under the XDG data directory.
pub const DEFAULT_RECIPE_FILE: &str = "recipe.json";

/// Builder for creating and configuring Session instances.
pub struct SessionBuilder {
    recipe_path: Option<PathBuf>,
    recipe: Option<Recipe>,
    policy: LeavePolicy,
    notifier: Box<dyn Notifier>,
}

impl SessionBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            recipe_path: None,
            recipe: None,
            policy: LeavePolicy::default(),
            notifier: Box::new(Silent),
        }
    }

    /// Sets a recipe file to load.
    ///
    /// If neither a path nor a recipe is given, `build` looks for
    /// `$XDG_DATA_HOME/sous/recipe.json` and falls back to the built-in
    /// Margherita recipe.
    pub fn with_recipe_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.recipe_path = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Uses an in-memory recipe. Takes precedence over any path.
    pub fn with_recipe(mut self, recipe: Recipe) -> Self {
        self.recipe = Some(recipe);
        self
    }

    pub fn with_leave_policy(mut self, policy: LeavePolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn with_notifier(mut self, notifier: impl Notifier + 'static) -> Self {
        self.notifier = Box::new(notifier);
        self
    }

    /// Resolves and validates the recipe, then builds the session.
    ///
    /// # Errors
    ///
    /// Returns `SousError::FileSystem` if a recipe file cannot be read,
    /// `SousError::Serialization` if it is not valid JSON, and
    /// `SousError::InvalidRecipe` if it fails validation.
    pub async fn build(self) -> Result<Session> {
        let recipe = match self.recipe {
            Some(recipe) => recipe,
            None => Self::resolve_recipe(self.recipe_path).await?,
        };

        log::info!(
            "Loaded recipe '{}' ({} ingredients, {} steps)",
            recipe.name,
            recipe.ingredients.len(),
            recipe.steps.len()
        );
        Session::new(recipe, self.policy, self.notifier)
    }

    /// Loads the recipe the builder would use, without building a session.
    pub async fn resolve_recipe(path: Option<PathBuf>) -> Result<Recipe> {
        match path.or_else(Self::default_recipe_path) {
            Some(path) => Self::load(path).await,
            None => Ok(Recipe::margherita()),
        }
    }

    async fn load(path: PathBuf) -> Result<Recipe> {
        log::debug!("Reading recipe from {}", path.display());
        task::spawn_blocking(move || Recipe::load(&path))
            .await
            .map_err(|e| SousError::Configuration {
                message: format!("Task join error: {e}"),
            })?
    }

    /// Existing recipe file in the XDG data directories, if any.
    fn default_recipe_path() -> Option<PathBuf> {
        xdg::BaseDirectories::with_prefix("sous").find_data_file(DEFAULT_RECIPE_FILE)
    }
}

impl Default for SessionBuilder {
    fn default() -> Self {
        Self::new()
    }
}
