use std::process::Command;

use log::debug;
use mlbpick_core::config::Settings;
use mlbpick_core::error::Result;
use mlbpick_core::execution;

use super::types::{Selection, SelectorOptions};

/// An interactive chooser that reads newline-delimited choices.
pub trait Selector {
    /// Checks the selector can be run at all.
    ///
    /// # Errors
    ///
    /// Returns [`mlbpick_core::error::Error::DependencyMissing`] when it cannot.
    fn ensure_available(&self) -> Result<()>;

    /// Lets the user choose one line of `input`.
    ///
    /// # Errors
    ///
    /// Returns an error only when the selector could not be run; a user
    /// backing out is [`Selection::Cancelled`].
    fn select(&self, input: &str, options: &SelectorOptions) -> Result<Selection>;
}

/// [`Selector`] backed by an `fzf`-compatible program.
pub struct FzfSelector {
    program: String,
}

impl FzfSelector {
    #[must_use]
    pub fn new(settings: &Settings) -> Self {
        Self {
            program: settings.selector_program.clone(),
        }
    }

    /// Command-line options for `fzf` matching `options`.
    #[must_use]
    pub fn arguments(options: &SelectorOptions) -> Vec<String> {
        let mut arguments = Vec::new();

        if options.header_lines > 0 {
            arguments.push(format!("--header-lines={}", options.header_lines));
        }
        if options.cycle {
            arguments.push("--cycle".to_string());
        }
        if !options.fuzzy {
            arguments.push("--exact".to_string());
        }
        arguments.push(format!("--prompt={}", options.prompt));

        arguments
    }
}

impl Selector for FzfSelector {
    fn ensure_available(&self) -> Result<()> {
        execution::resolve_program(&self.program).map(|_| ())
    }

    fn select(&self, input: &str, options: &SelectorOptions) -> Result<Selection> {
        let mut command = Command::new(&self.program);
        command.args(Self::arguments(options));

        let output = execution::run_with_input(command, input)?;
        if !output.status.success() {
            debug!("`{}` exited with {}", self.program, output.status);
            return Ok(Selection::Cancelled);
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        let chosen = stdout.lines().next().unwrap_or_default();

        if chosen.trim().is_empty() {
            Ok(Selection::Cancelled)
        } else {
            debug!("Selected `{chosen}`");
            Ok(Selection::Chosen(chosen.to_string()))
        }
    }
}
