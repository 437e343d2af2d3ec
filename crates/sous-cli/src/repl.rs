//! Line-oriented walkthrough loop.
//!
//! Reads commands from stdin and tick signals from the session's ticker in
//! one `select!` loop, so every state change happens on a single task. After
//! each event the ticker is synced to the session's running epoch: armed
//! while a timer runs, cancelled otherwise.

use std::{str::FromStr, time::Duration};

use anyhow::{anyhow, bail, Context, Result};
use log::{debug, info};
use sous_core::{
    display::LocalTime, Action, OperationStatus, Session, SessionSnapshot, TickSignal, Ticker,
    TimerCommand, View,
};
use tokio::{
    io::{self, AsyncBufReadExt, BufReader},
    sync::mpsc::UnboundedReceiver,
};

use crate::renderer::TerminalRenderer;

const HELP: &str = "\
## Commands

- `list` show the current screen
- `check <id>` check or uncheck an ingredient (alias `toggle`)
- `cook` start cooking once every ingredient is checked (alias `start`)
- `next` / `prev` move between steps
- `goto <n>` jump to step n
- `timer [start|pause|toggle|reset]` control the step timer
- `wait` block until the running timer finishes
- `back` return to the ingredient list
- `new` start over after the last step
- `status` one-line summary
- `json` print the current state as JSON
- `quit` leave the walkthrough
";

/// One parsed input line.
#[derive(Debug, PartialEq, Eq)]
pub enum Command {
    Apply(Action),
    List,
    Status,
    Json,
    Wait,
    Help,
    Quit,
    Empty,
}

impl FromStr for Command {
    type Err = anyhow::Error;

    fn from_str(line: &str) -> Result<Self> {
        let mut words = line.split_whitespace();
        let Some(word) = words.next() else {
            return Ok(Command::Empty);
        };
        let arg = words.next();
        if words.next().is_some() {
            bail!("Too many arguments for '{word}'");
        }

        let name = word.to_ascii_lowercase();
        let command = match (name.as_str(), arg) {
            ("check" | "toggle", Some(id)) => {
                Command::Apply(Action::ToggleIngredient(id.to_string()))
            }
            ("check" | "toggle", None) => bail!("Usage: {name} <id>"),
            ("goto" | "g", Some(number)) => Command::Apply(Action::GoToStep(step_index(number)?)),
            ("goto" | "g", None) => bail!("Usage: goto <n>"),
            ("timer" | "t", arg) => Command::Apply(Action::Timer(timer_command(arg)?)),
            (_, Some(_)) if is_known(&name) => bail!("'{name}' takes no argument"),
            ("list" | "ls", None) => Command::List,
            ("cook" | "start", None) => Command::Apply(Action::StartCooking),
            ("back", None) => Command::Apply(Action::BackToIngredients),
            ("new", None) => Command::Apply(Action::StartNewRecipe),
            ("next" | "n", None) => Command::Apply(Action::NextStep),
            ("prev" | "p", None) => Command::Apply(Action::PreviousStep),
            ("status", None) => Command::Status,
            ("json", None) => Command::Json,
            ("wait", None) => Command::Wait,
            ("help" | "?", None) => Command::Help,
            ("quit" | "exit" | "q", None) => Command::Quit,
            _ => bail!("Unknown command '{word}'. Type `help` for the list."),
        };
        Ok(command)
    }
}

fn is_known(name: &str) -> bool {
    matches!(
        name,
        "list"
            | "ls"
            | "cook"
            | "start"
            | "back"
            | "new"
            | "next"
            | "n"
            | "prev"
            | "p"
            | "status"
            | "json"
            | "wait"
            | "help"
            | "?"
            | "quit"
            | "exit"
            | "q"
    )
}

/// Converts a 1-based step number into an index.
fn step_index(number: &str) -> Result<usize> {
    let number: usize = number
        .parse()
        .map_err(|_| anyhow!("'{number}' is not a step number"))?;
    if number == 0 {
        bail!("Step numbers start at 1");
    }
    Ok(number - 1)
}

fn timer_command(arg: Option<&str>) -> Result<TimerCommand> {
    let command = match arg.map(str::to_ascii_lowercase).as_deref() {
        None | Some("toggle") => TimerCommand::Toggle,
        Some("start") => TimerCommand::Start,
        Some("pause" | "stop") => TimerCommand::Pause,
        Some("reset") => TimerCommand::Reset,
        Some(other) => bail!("Unknown timer command '{other}'. Use start, pause, toggle or reset."),
    };
    Ok(command)
}

/// One-line summary for the `status` command.
fn summary(snapshot: &SessionSnapshot) -> String {
    match snapshot.view {
        View::Ingredients => format!(
            "{}: {} of {} ingredients checked",
            snapshot.header.name, snapshot.checklist.checked, snapshot.checklist.total
        ),
        View::Cooking => {
            let cooking = &snapshot.cooking;
            let mut line = format!(
                "{}: step {} of {}, {} completed",
                snapshot.header.name,
                cooking.number(),
                cooking.total,
                cooking.completed
            );
            if let Some(timer) = &snapshot.timer {
                line.push_str(&format!(", timer {} ({})", timer.display, timer.status));
            }
            line
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

/// Interactive session bound to stdin and the terminal.
pub struct Repl<'a> {
    session: Session,
    renderer: &'a TerminalRenderer,
    ticker: Ticker,
    ticks: UnboundedReceiver<TickSignal>,
    waiting: bool,
}

impl<'a> Repl<'a> {
    pub fn new(session: Session, renderer: &'a TerminalRenderer, period: Duration) -> Self {
        let (ticker, ticks) = Ticker::new(period);
        Self {
            session,
            renderer,
            ticker,
            ticks,
            waiting: false,
        }
    }

    /// Runs until `quit` or end of input. Any live tick task is cancelled on
    /// the way out.
    pub async fn run(mut self) -> Result<()> {
        let mut lines = BufReader::new(io::stdin()).lines();
        self.render_snapshot()?;

        loop {
            let flow = tokio::select! {
                line = lines.next_line(), if !self.waiting => {
                    match line.context("Failed to read from stdin")? {
                        Some(line) => self.handle_line(&line)?,
                        None => {
                            debug!("End of input");
                            Flow::Quit
                        }
                    }
                }
                Some(signal) = self.ticks.recv() => {
                    self.handle_tick(signal)?;
                    Flow::Continue
                }
                else => Flow::Quit,
            };
            if flow == Flow::Quit {
                break;
            }
            self.ticker.sync(self.session.running_epoch());
        }

        self.ticker.cancel();
        info!("Walkthrough ended");
        Ok(())
    }

    fn handle_line(&mut self, line: &str) -> Result<Flow> {
        let command = match line.parse::<Command>() {
            Ok(command) => command,
            Err(e) => {
                self.renderer.status(&OperationStatus::failure(e.to_string()))?;
                return Ok(Flow::Continue);
            }
        };
        debug!("Command: {command:?}");

        match command {
            Command::Empty => {}
            Command::Quit => return Ok(Flow::Quit),
            Command::Help => self.renderer.render(HELP)?,
            Command::List => self.render_snapshot()?,
            Command::Status => {
                let line = summary(&self.session.snapshot());
                self.renderer.status(&OperationStatus::success(line))?;
            }
            Command::Json => {
                println!("{}", serde_json::to_string_pretty(&self.session.snapshot())?);
            }
            Command::Wait => self.wait()?,
            Command::Apply(action) => match self.session.apply(action) {
                Ok(outcome) => {
                    debug!("Outcome: {outcome:?}");
                    self.render_snapshot()?;
                }
                Err(e) => self.renderer.status(&OperationStatus::from(&e))?,
            },
        }
        Ok(Flow::Continue)
    }

    fn wait(&mut self) -> Result<()> {
        match self.session.timer() {
            Some(timer) if timer.is_running() => {
                let message = format!("Waiting for '{}' to finish", timer.label());
                self.waiting = true;
                self.renderer.status(&OperationStatus::success(message))
            }
            _ => self
                .renderer
                .status(&OperationStatus::failure("No timer is running")),
        }
    }

    fn handle_tick(&mut self, signal: TickSignal) -> Result<()> {
        let Some(completion) = self.session.tick(signal) else {
            return Ok(());
        };
        self.waiting = false;
        self.render_snapshot()?;
        self.renderer.status(&OperationStatus::success(format!(
            "{} finished at {}",
            completion.step_title,
            LocalTime(&completion.at)
        )))
    }

    fn render_snapshot(&self) -> Result<()> {
        self.renderer.render(&self.session.snapshot().to_string())
    }
}
