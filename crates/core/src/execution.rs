use std::io::{ErrorKind, Write};
use std::path::PathBuf;
use std::process::{Command, Output, Stdio};

use log::{debug, info};

use crate::error::{Error, Result};

/// Locates `program` on the executable search path.
///
/// # Errors
///
/// Returns [`Error::DependencyMissing`] if it cannot be resolved.
pub fn resolve_program(program: &str) -> Result<PathBuf> {
    match which::which(program) {
        Ok(path) => {
            debug!("Resolved `{program}` to `{}`", path.display());
            Ok(path)
        }
        Err(e) => {
            debug!("Could not resolve `{program}`: {e}");
            Err(Error::dependency_missing(program))
        }
    }
}

/// Runs a command to completion and returns its standard output as text.
///
/// Standard error and standard input stay attached to the terminal.
///
/// # Errors
///
/// Returns an error if the program cannot be spawned, or exits with a
/// non-zero status (carrying that status' code).
pub fn capture_output(mut command: Command) -> Result<String> {
    let program = program_name(&command);
    debug!("Capturing output of {command:?}");

    let output = command
        .stdin(Stdio::inherit())
        .stdout(Stdio::piped())
        .stderr(Stdio::inherit())
        .output()
        .map_err(|e| spawn_error(&program, e))?;

    if !output.status.success() {
        return Err(Error::sub_process_exit(&program, output.status.code()));
    }

    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}

/// Runs a command with `input` written to its standard input and its
/// standard output captured.
///
/// The exit status is handed back untouched so callers can decide what a
/// non-zero exit means.
///
/// # Errors
///
/// Returns an error if the program cannot be spawned or the pipes fail.
pub fn run_with_input(mut command: Command, input: &str) -> Result<Output> {
    let program = program_name(&command);
    debug!("Running {command:?} with {} bytes of input", input.len());

    let mut child = command
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::inherit())
        .spawn()
        .map_err(|e| spawn_error(&program, e))?;

    if let Some(mut stdin) = child.stdin.take() {
        match stdin.write_all(input.as_bytes()) {
            // The child may quit before reading everything, e.g. when cancelled
            Err(e) if e.kind() == ErrorKind::BrokenPipe => {
                debug!("`{program}` closed its input early");
            }
            result => result?,
        }
    }

    Ok(child.wait_with_output()?)
}

/// Runs a command attached to the terminal and waits for it.
///
/// # Errors
///
/// Returns an error if the command cannot be spawned, or
/// [`Error::SubProcessExit`] with the command's own exit code if it fails.
pub fn execute_command(mut command: Command) -> Result<()> {
    let program = program_name(&command);
    info!("Executing {command:?}");

    let status = command
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .spawn()
        .map_err(|e| spawn_error(&program, e))?
        .wait()?;

    if status.success() {
        Ok(())
    } else {
        Err(Error::sub_process_exit(&program, status.code()))
    }
}

fn program_name(command: &Command) -> String {
    command.get_program().to_string_lossy().into_owned()
}

fn spawn_error(program: &str, error: std::io::Error) -> Error {
    if error.kind() == ErrorKind::NotFound {
        Error::dependency_missing(program)
    } else {
        Error::SubProcess(error)
    }
}
