use std::io::stdout;
use std::process::ExitCode;

use env_logger::Env;
use log::{debug, LevelFilter};
use mlbpick_cli::app::{self, ProcessLauncher};
use mlbpick_cli::cli_args;
use mlbpick_cli::command_selection::{FzfSelector, ProcessLister};
use mlbpick_core::classification::{classify, Classification};
use mlbpick_core::config::Settings;
use mlbpick_core::error::Result;

fn init_logging(settings: &Settings) {
    let mut builder = env_logger::Builder::from_env(Env::default().default_filter_or("warn"));
    if settings.debug {
        builder.filter_level(LevelFilter::Debug);
    }
    builder.init();
}

fn execute() -> Result<ExitCode> {
    let classified = match classify(cli_args::invocation_args())? {
        Classification::Help => {
            println!("{}", cli_args::usage());
            return Ok(ExitCode::FAILURE);
        }
        Classification::Args(classified) => classified,
    };

    let settings = Settings::default().with_debug(classified.debug);
    init_logging(&settings);
    debug!("Classified invocation: {classified:?}");

    app::run(
        &classified,
        &settings,
        &ProcessLister::new(&settings),
        &FzfSelector::new(&settings),
        &ProcessLauncher,
        &mut stdout(),
    )?;

    Ok(ExitCode::SUCCESS)
}

fn main() -> ExitCode {
    match execute() {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::from(e.exit_code())
        }
    }
}
