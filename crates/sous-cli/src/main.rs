//! Sous CLI Application
//!
//! Terminal front end for the recipe walkthrough: an interactive cooking
//! session plus commands to inspect and validate recipe files.

mod args;
mod cli;
mod notifier;
mod renderer;
mod repl;

use std::time::Duration;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use cli::Cli;
use log::info;
use notifier::TerminalNotifier;
use renderer::TerminalRenderer;
use sous_core::SessionBuilder;
use Commands::*;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        recipe,
        no_color,
        tick_ms,
        on_leave,
        no_notify,
        command,
    } = Args::parse();

    let cli = Cli::new(TerminalRenderer::new(!no_color));

    info!("Sous started");

    match command.unwrap_or_default() {
        Cook => {
            let mut builder = SessionBuilder::new()
                .with_recipe_path(recipe)
                .with_leave_policy(on_leave.into());
            if !no_notify {
                builder = builder.with_notifier(TerminalNotifier);
            }
            let session = builder.build().await.context("Failed to load recipe")?;
            cli.cook(session, Duration::from_millis(tick_ms)).await
        }
        Show(args) => cli.show(recipe, args.json).await,
        Check(args) => cli.check(args.file).await,
    }
}
