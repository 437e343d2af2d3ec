//! Display of a full session screen.

use std::fmt;

use super::time::LocalTime;
use crate::{
    models::{TimerStatus, View},
    snapshot::{ChecklistView, CookingView, SessionSnapshot, TimerView},
};

/// Whole percent for display, always within `0..=100`.
fn percent(value: f64) -> u32 {
    value.clamp(0.0, 100.0).round() as u32
}

impl fmt::Display for ChecklistView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "## Gather Your Ingredients")?;
        writeln!(f)?;
        writeln!(
            f,
            "{} of {} ({}%)",
            self.checked,
            self.total,
            percent(self.progress_percent)
        )?;
        writeln!(f)?;
        for ingredient in &self.ingredients {
            write!(f, "{ingredient}")?;
        }
        writeln!(f)?;
        if self.all_checked {
            writeln!(f, "**Let's Start Cooking!** Type `cook` to begin.")
        } else {
            writeln!(f, "*Check off all ingredients to start*")
        }
    }
}

impl fmt::Display for TimerView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.status == TimerStatus::Completed {
            writeln!(f, "#### Timer Complete!")?;
        } else {
            writeln!(f, "#### Timer")?;
        }
        writeln!(f)?;
        writeln!(
            f,
            "**{}** of {} ({}, {}%)",
            self.display,
            self.duration_label,
            self.status,
            percent(self.progress_percent)
        )?;
        if self.status == TimerStatus::Completed {
            writeln!(f)?;
            writeln!(f, "*Time's up! Move on when ready.*")?;
        }
        Ok(())
    }
}

impl fmt::Display for CookingView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "## Step {} of {} ({}% Complete)",
            self.number(),
            self.total,
            percent(self.progress_percent)
        )?;
        writeln!(f)?;

        let strip: Vec<String> = self
            .markers
            .iter()
            .enumerate()
            .map(|(index, marker)| format!("{}{}", index + 1, marker.icon()))
            .collect();
        writeln!(f, "Steps: {}", strip.join(" "))?;
        writeln!(f)?;

        if self.current_completed {
            writeln!(f, "### {} (✓ Completed)", self.step.title)?;
        } else {
            writeln!(f, "### {}", self.step.title)?;
        }
        writeln!(f)?;
        self.step.fmt_body(f)
    }
}

impl fmt::Display for SessionSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.header)?;
        writeln!(f)?;

        let tab = |label: String, view: View| {
            if self.view == view {
                format!("**[{label}]**")
            } else {
                label
            }
        };
        writeln!(
            f,
            "{} | {}",
            tab(format!("Ingredients ({})", self.checklist.badge()), View::Ingredients),
            tab(format!("Cooking Steps ({})", self.cooking.badge()), View::Cooking)
        )?;
        writeln!(f)?;

        match self.view {
            View::Ingredients => write!(f, "{}", self.checklist),
            View::Cooking => {
                if let Some(since) = &self.cooking_since {
                    writeln!(f, "Cooking since {}", LocalTime(since))?;
                    writeln!(f)?;
                }
                write!(f, "{}", self.cooking)?;
                if let Some(timer) = &self.timer {
                    write!(f, "{timer}")?;
                    writeln!(f)?;
                }

                let previous = if self.cooking.is_first { "~~prev~~" } else { "`prev`" };
                let next = if self.cooking.is_last { "~~next~~" } else { "`next`" };
                writeln!(f, "{previous} | {next} | `back` to ingredients")?;

                if self.cooking.all_completed {
                    writeln!(f)?;
                    writeln!(f, "## Congratulations!")?;
                    writeln!(f)?;
                    writeln!(
                        f,
                        "You've completed all the steps. Your {} is ready to enjoy!",
                        self.header.name
                    )?;
                    writeln!(f)?;
                    writeln!(f, "Type `new` to start a new recipe.")?;
                }
                Ok(())
            }
        }
    }
}
