use std::fmt::{Display, Formatter};
use std::process::Command;

use log::debug;

use crate::classification::ClassifiedArgs;
use crate::config::{Settings, DOUBLEHEADER_FLAG, RECAP_MODE_FLAG, TEAM_FLAG};
use crate::game_fields::GameFields;

/// The streaming invocation assembled from the user's choices.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FinalCommand {
    program: String,
    arguments: Vec<String>,
}

impl FinalCommand {
    /// Builds `<listing program> <mode flag> <feed> [--game N] <passthrough...>`.
    ///
    /// The mode flag is [`TEAM_FLAG`] unless a recap was requested, in which
    /// case it is [`RECAP_MODE_FLAG`].
    #[must_use]
    pub fn synthesize(
        classified: &ClassifiedArgs,
        fields: &GameFields,
        feed: &str,
        settings: &Settings,
    ) -> Self {
        let mode_flag = if classified.recap_requested {
            RECAP_MODE_FLAG
        } else {
            TEAM_FLAG
        };

        let mut arguments = vec![mode_flag.to_string(), feed.to_string()];

        if let Some(game) = fields.doubleheader_game {
            arguments.push(DOUBLEHEADER_FLAG.to_string());
            arguments.push(game.to_string());
        }

        arguments.extend(classified.passthrough_args.iter().cloned());

        let command = Self {
            program: settings.listing_program.clone(),
            arguments,
        };
        debug!("Synthesized command: {command}");
        command
    }

    /// Every token of the command, program first.
    #[must_use]
    pub fn tokens(&self) -> Vec<String> {
        std::iter::once(&self.program)
            .chain(&self.arguments)
            .cloned()
            .collect()
    }

    #[must_use]
    pub fn to_command(&self) -> Command {
        let mut command = Command::new(&self.program);
        command.args(&self.arguments);
        command
    }
}

impl Display for FinalCommand {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        formatter.write_str(self.tokens().join(" ").as_str())
    }
}
