//! Command-line surface of the `mlbpick` binary.
//!
//! Arguments are not parsed by `clap`: any token mlbpick does not recognise
//! has to reach `mlbv` in its original position, which the order-preserving
//! walk in [`mlbpick_core::classification`] takes care of. The `clap` model
//! here describes the recognised flags and renders the usage text.

use std::env;

use clap::{Arg, ArgAction, Command};

/// Tokens the process was started with, program name excluded.
#[must_use]
pub fn invocation_args() -> Vec<String> {
    env::args_os()
        .skip(1)
        .map(|argument| argument.to_string_lossy().into_owned())
        .collect()
}

/// Declarative model of the flags mlbpick recognises.
#[must_use]
pub fn command() -> Command {
    Command::new("mlbpick")
        .about("Pick an MLB game and feed with fzf, then stream it with mlbv")
        .override_usage("mlbpick [OPTIONS] [MLBV_ARGS]...")
        .disable_help_flag(true)
        .arg(
            Arg::new("help")
                .short('h')
                .long("help")
                .action(ArgAction::Help)
                .help("Print this help and exit"),
        )
        .arg(
            Arg::new("debug")
                .short('D')
                .long("debug")
                .action(ArgAction::SetTrue)
                .help("Log every step and external command"),
        )
        .arg(
            Arg::new("no-scores")
                .short('n')
                .long("no-scores")
                .action(ArgAction::SetTrue)
                .help("Hide scores in the game list"),
        )
        .arg(
            Arg::new("date")
                .short('d')
                .long("date")
                .value_name("DATE")
                .help("List and stream games for DATE (passed to mlbv)"),
        )
        .arg(
            Arg::new("yesterday")
                .long("yesterday")
                .action(ArgAction::SetTrue)
                .help("Use yesterday's games"),
        )
        .arg(
            Arg::new("tomorrow")
                .long("tomorrow")
                .action(ArgAction::SetTrue)
                .help("Use tomorrow's games"),
        )
        .arg(
            Arg::new("recap")
                .long("recap")
                .action(ArgAction::SetTrue)
                .help("Play the recap of the chosen team instead of the live feed"),
        )
        .arg(
            Arg::new("cmd")
                .long("cmd")
                .action(ArgAction::SetTrue)
                .help("Print the mlbv command without running it"),
        )
        .arg(
            Arg::new("mlbv-args")
                .value_name("MLBV_ARGS")
                .num_args(1..)
                .trailing_var_arg(true)
                .allow_hyphen_values(true)
                .help("Any other arguments, passed through to mlbv unchanged"),
        )
}

/// Usage text printed for `-h`/`--help`.
#[must_use]
pub fn usage() -> String {
    command().render_help().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_model_is_consistent() {
        command().debug_assert();
    }

    #[test]
    fn test_usage_lists_every_flag() {
        let usage = usage();

        for flag in [
            "--help",
            "--debug",
            "--no-scores",
            "--date <DATE>",
            "--yesterday",
            "--tomorrow",
            "--recap",
            "--cmd",
            "MLBV_ARGS",
        ] {
            assert!(usage.contains(flag), "usage is missing `{flag}`:\n{usage}");
        }
    }

    #[test]
    fn test_usage_mentions_short_flags() {
        let usage = usage();

        assert!(usage.contains("-h"));
        assert!(usage.contains("-D"));
        assert!(usage.contains("-n"));
        assert!(usage.contains("-d"));
    }
}
