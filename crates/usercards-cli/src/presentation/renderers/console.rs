use anyhow::Result;
use is_terminal::IsTerminal;
use owo_colors::OwoColorize;
use serde::Serialize;
use std::io::{self, Write};

use super::traits::Renderer;
use crate::presentation::view_models::{
    CommandResultViewModel, CreateView, OutputFormat, StatusBadge,
};

pub struct ConsoleRenderer {
    format: OutputFormat,
    styled: bool,
}

impl ConsoleRenderer {
    pub fn new(format: OutputFormat) -> Self {
        Self {
            format,
            styled: io::stdout().is_terminal(),
        }
    }

    /// Write `result` to `out` instead of stdout
    pub fn render_to<T, W>(&self, result: &CommandResultViewModel<T>, out: &mut W) -> Result<()>
    where
        T: Serialize + CreateView,
        W: Write,
    {
        if self.format == OutputFormat::Json {
            writeln!(out, "{}", serde_json::to_string_pretty(result)?)?;
            return Ok(());
        }

        if let Some(badge) = &result.badge {
            writeln!(out, "{}", self.badge_line(badge))?;
            writeln!(out)?;
        }

        write!(out, "{}", result.content.create_view())?;

        if !result.suggestions.is_empty() {
            let heading = "💡 Tips:";
            if self.styled {
                writeln!(out, "\n{}", heading.yellow().bold())?;
            } else {
                writeln!(out, "\n{}", heading)?;
            }
            for tip in &result.suggestions {
                write!(out, "  • {}", tip.description)?;
                if let Some(cmd) = &tip.command {
                    if self.styled {
                        write!(out, ": {}", cmd.cyan())?;
                    } else {
                        write!(out, ": {}", cmd)?;
                    }
                }
                writeln!(out)?;
            }
        }

        Ok(())
    }

    fn badge_line(&self, badge: &StatusBadge) -> String {
        if self.styled {
            format!("{} {}", badge.icon(), badge.label.bold())
        } else {
            format!("{} {}", badge.icon(), badge.label)
        }
    }
}

impl Renderer for ConsoleRenderer {
    fn render<T>(&self, result: CommandResultViewModel<T>) -> Result<()>
    where
        T: Serialize + CreateView,
    {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        self.render_to(&result, &mut out)
    }
}
