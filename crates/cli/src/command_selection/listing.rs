use std::process::Command;

use mlbpick_core::config::Settings;
use mlbpick_core::error::Result;
use mlbpick_core::execution;

/// Source of the textual game list.
pub trait Lister {
    /// Fetches the game list for `query_args`.
    ///
    /// # Errors
    ///
    /// Returns an error if the list could not be produced.
    fn list(&self, query_args: &[String]) -> Result<String>;
}

/// [`Lister`] that runs the listing program and captures what it prints.
pub struct ProcessLister {
    program: String,
}

impl ProcessLister {
    #[must_use]
    pub fn new(settings: &Settings) -> Self {
        Self {
            program: settings.listing_program.clone(),
        }
    }
}

impl Lister for ProcessLister {
    fn list(&self, query_args: &[String]) -> Result<String> {
        let mut command = Command::new(&self.program);
        command.args(query_args);
        execution::capture_output(command)
    }
}
