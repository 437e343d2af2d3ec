//! Display implementations for domain models.
//!
//! All output is markdown so the CLI renderer can style headers and
//! emphasis; plain-text mode prints it unchanged.

use std::fmt;

use super::time::DurationLabel;
use crate::{
    models::{Ingredient, Recipe, Step, TimerStatus, View},
    snapshot::RecipeHeader,
};

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for TimerStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for RecipeHeader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {}", self.name)?;

        let mut meta = Vec::new();
        if let Some(prep) = &self.prep_time {
            meta.push(format!("Prep: {prep}"));
        }
        if let Some(cook) = &self.cook_time {
            meta.push(format!("Cook: {cook}"));
        }
        if let Some(servings) = self.servings {
            meta.push(format!("Serves: {servings}"));
        }
        if !meta.is_empty() {
            writeln!(f)?;
            writeln!(f, "{}", meta.join(" • "))?;
        }
        Ok(())
    }
}

impl fmt::Display for Ingredient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mark = if self.checked { "x" } else { " " };
        if self.checked {
            writeln!(f, "- [{mark}] `{}` ~~{}~~ {}", self.id, self.name, self.amount)
        } else {
            writeln!(f, "- [{mark}] `{}` **{}** {}", self.id, self.name, self.amount)
        }
    }
}

impl Step {
    /// Body shared by the recipe overview and the cooking screen.
    pub(crate) fn fmt_body(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.description)?;
        writeln!(f)?;
        if let Some(tip) = &self.tip {
            writeln!(f, "> **Pro Tip:** {tip}")?;
            writeln!(f)?;
        }
        Ok(())
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.duration {
            Some(seconds) => writeln!(f, "### {} ({})", self.title, DurationLabel(seconds))?,
            None => writeln!(f, "### {}", self.title)?,
        }
        writeln!(f)?;
        self.fmt_body(f)
    }
}

impl fmt::Display for Recipe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", RecipeHeader::from(self))?;

        writeln!(f, "\n## Ingredients")?;
        writeln!(f)?;
        for ingredient in &self.ingredients {
            writeln!(f, "- **{}** {}", ingredient.name, ingredient.amount)?;
        }

        writeln!(f, "\n## Steps")?;
        writeln!(f)?;
        for (index, step) in self.steps.iter().enumerate() {
            match step.duration {
                Some(seconds) => writeln!(
                    f,
                    "### {}. {} ({})",
                    index + 1,
                    step.title,
                    DurationLabel(seconds)
                )?,
                None => writeln!(f, "### {}. {}", index + 1, step.title)?,
            }
            writeln!(f)?;
            step.fmt_body(f)?;
        }

        let total = self.total_timer_seconds();
        if total > 0 {
            writeln!(
                f,
                "Total timer time: {}",
                DurationLabel(u32::try_from(total).unwrap_or(u32::MAX))
            )?;
        }
        Ok(())
    }
}
