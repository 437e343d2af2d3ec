//! Terminal rendering for session snapshots and status lines
//!
//! Core types display as markdown. With color enabled, termimad styles the
//! inline markup and headers keep their hash marks in blue; otherwise the
//! markdown is printed as is.

use std::io::{self, Write};

use anyhow::Result;
use sous_core::OperationStatus;
use termimad::{crossterm::style::Color, MadSkin};

/// Terminal renderer that can switch between rich and plain text output
pub struct TerminalRenderer {
    rich_enabled: bool,
    skin: MadSkin,
}

impl TerminalRenderer {
    /// Create a new terminal renderer
    pub fn new(rich_enabled: bool) -> Self {
        let mut skin = MadSkin::default();

        skin.set_headers_fg(Color::Blue);
        skin.bold.set_fg(Color::Yellow);
        skin.italic.set_fg(Color::Magenta);
        skin.strikeout.set_fg(Color::DarkGrey);
        skin.inline_code.set_bg(Color::AnsiValue(238));

        Self { rich_enabled, skin }
    }

    /// Render markdown text to stdout
    pub fn render(&self, markdown: &str) -> Result<()> {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        self.render_to(&mut out, markdown)?;
        out.flush()?;
        Ok(())
    }

    /// Render an operation outcome line
    pub fn status(&self, status: &OperationStatus) -> Result<()> {
        self.render(&status.to_string())
    }

    fn render_to<W: Write>(&self, out: &mut W, markdown: &str) -> io::Result<()> {
        if !self.rich_enabled {
            return write!(out, "{markdown}");
        }
        for line in markdown.lines() {
            if line.starts_with('#') {
                writeln!(out, "\x1b[34m{line}\x1b[0m")?;
            } else {
                writeln!(out, "{}", self.skin.inline(line))?;
            }
        }
        Ok(())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new(true)
    }
}
