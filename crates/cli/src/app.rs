//! The end-to-end pipeline behind the `mlbpick` binary.

use std::io::Write;

use log::info;
use mlbpick_core::classification::ClassifiedArgs;
use mlbpick_core::command_synthesis::FinalCommand;
use mlbpick_core::config::Settings;
use mlbpick_core::error::{Error, Result};
use mlbpick_core::execution;

use crate::command_selection::{choose_feed, FeedOutcome, Lister, Selector, Step};

/// Runs the synthesized streaming command.
pub trait Launcher {
    /// # Errors
    ///
    /// Returns an error if the command cannot be run or exits unsuccessfully.
    fn launch(&self, command: &FinalCommand) -> Result<()>;
}

/// [`Launcher`] that spawns the command attached to the terminal.
pub struct ProcessLauncher;

impl Launcher for ProcessLauncher {
    fn launch(&self, command: &FinalCommand) -> Result<()> {
        execution::execute_command(command.to_command())
    }
}

/// How a run finished.
#[derive(Debug, PartialEq, Eq)]
pub enum Completion {
    Cancelled(Step),
    /// The command was printed only (`--cmd`).
    Printed(FinalCommand),
    Launched(FinalCommand),
}

/// Selects a game and feed, prints the resulting command and, unless only the
/// command was asked for, launches it.
///
/// User-facing messages go to `out`.
///
/// # Errors
///
/// Returns an error if selection fails, writing to `out` fails, or the
/// launched command fails.
pub fn run<W: Write>(
    classified: &ClassifiedArgs,
    settings: &Settings,
    lister: &impl Lister,
    selector: &impl Selector,
    launcher: &impl Launcher,
    out: &mut W,
) -> Result<Completion> {
    let (fields, feed) = match choose_feed(classified, settings, lister, selector)? {
        FeedOutcome::Chosen { fields, feed } => (fields, feed),
        FeedOutcome::Cancelled(step) => {
            writeln!(out, "{}", step.cancellation_message()).map_err(Error::Stdio)?;
            return Ok(Completion::Cancelled(step));
        }
    };

    let command = FinalCommand::synthesize(classified, &fields, &feed, settings);
    writeln!(out, "{command}").map_err(Error::Stdio)?;
    out.flush().map_err(Error::Stdio)?;

    if classified.cmd_only {
        info!("Command only was specified, not executing.");
        return Ok(Completion::Printed(command));
    }

    launcher.launch(&command)?;
    Ok(Completion::Launched(command))
}
