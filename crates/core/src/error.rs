use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Exit code used for every failure that does not carry a subprocess code.
pub const FAILURE_EXIT_CODE: u8 = 1;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Required program `{}` was not found on PATH.", .program)]
    DependencyMissing { program: String },

    #[error("Flag `{}` requires a value.", .0)]
    MissingFlagValue(String),

    #[error("Error with sub process: {}", _0)]
    SubProcess(#[from] std::io::Error),

    #[error("STDIO error: {}", .0)]
    Stdio(std::io::Error),

    #[error("`{}` exited with non-success code{}.", .program, exit_code_suffix(.code))]
    SubProcessExit { program: String, code: Option<i32> },
}

fn exit_code_suffix(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!(" {code}"),
        None => " (terminated by signal)".to_string(),
    }
}

impl Error {
    pub fn dependency_missing(program: &str) -> Self {
        Self::DependencyMissing {
            program: program.to_string(),
        }
    }

    pub fn sub_process_exit(program: &str, code: Option<i32>) -> Self {
        Self::SubProcessExit {
            program: program.to_string(),
            code,
        }
    }

    /// The process exit code this error should terminate with.
    ///
    /// A failed subprocess hands back its own code unchanged; anything that
    /// cannot be represented as a process exit code falls back to `1`.
    #[must_use]
    pub fn exit_code(&self) -> u8 {
        match self {
            Error::SubProcessExit {
                code: Some(code), ..
            } => u8::try_from(*code)
                .ok()
                .filter(|code| *code != 0)
                .unwrap_or(FAILURE_EXIT_CODE),
            _ => FAILURE_EXIT_CODE,
        }
    }
}
