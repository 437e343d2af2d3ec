//! Handlers for the non-interactive commands and the walkthrough entry.

use std::{path::PathBuf, time::Duration};

use anyhow::{Context, Result};
use log::info;
use sous_core::{OperationStatus, Session, SessionBuilder};

use crate::{renderer::TerminalRenderer, repl::Repl};

pub struct Cli {
    renderer: TerminalRenderer,
}

impl Cli {
    pub fn new(renderer: TerminalRenderer) -> Self {
        Self { renderer }
    }

    /// Runs the interactive walkthrough until `quit` or end of input.
    pub async fn cook(self, session: Session, tick: Duration) -> Result<()> {
        info!("Starting walkthrough with {tick:?} ticks");
        Repl::new(session, &self.renderer, tick).run().await
    }

    /// Prints the recipe overview, or the recipe itself as JSON.
    pub async fn show(&self, recipe: Option<PathBuf>, json: bool) -> Result<()> {
        let recipe = SessionBuilder::resolve_recipe(recipe)
            .await
            .context("Failed to load recipe")?;

        if json {
            println!("{}", serde_json::to_string_pretty(&recipe)?);
            Ok(())
        } else {
            self.renderer.render(&recipe.to_string())
        }
    }

    /// Loads and validates a recipe file, reporting a one-line summary.
    pub async fn check(&self, file: PathBuf) -> Result<()> {
        let recipe = SessionBuilder::resolve_recipe(Some(file.clone()))
            .await
            .with_context(|| format!("Invalid recipe file {}", file.display()))?;

        self.renderer.status(&OperationStatus::success(format!(
            "Recipe '{}' is valid ({} ingredients, {} steps)",
            recipe.name,
            recipe.ingredients.len(),
            recipe.steps.len()
        )))
    }
}
