//! Sorting of invocation tokens into list-query and passthrough buckets.
//!
//! Tokens are walked strictly left to right. Recognised control flags are
//! consumed; a handful of query flags are copied into the list query (and
//! sometimes the passthrough as well); everything else is forwarded
//! untouched to the final command in its original position.

use crate::error::{Error, Result};

const HELP_FLAGS: [&str; 2] = ["-h", "--help"];
const DEBUG_FLAGS: [&str; 2] = ["-D", "--debug"];
const NO_SCORES_FLAGS: [&str; 2] = ["-n", "--no-scores"];
const DATE_FLAGS: [&str; 2] = ["-d", "--date"];
const DATE_FLAG_PREFIX: &str = "--date=";
const RELATIVE_DATE_FLAGS: [&str; 2] = ["--yesterday", "--tomorrow"];
const RECAP_FLAG: &str = "--recap";
const CMD_ONLY_FLAG: &str = "--cmd";

/// Invocation tokens after classification.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ClassifiedArgs {
    /// Tokens handed to the listing program when fetching the game list.
    pub list_query_args: Vec<String>,
    /// Tokens forwarded verbatim into the final command.
    pub passthrough_args: Vec<String>,
    pub recap_requested: bool,
    pub cmd_only: bool,
    pub debug: bool,
}

/// Result of classifying the invocation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Classification {
    /// Help was requested; nothing after it was looked at.
    Help,
    Args(ClassifiedArgs),
}

/// Classifies `tokens` (program name excluded).
///
/// # Errors
///
/// Returns [`Error::MissingFlagValue`] when a date flag is the last token.
pub fn classify<I, S>(tokens: I) -> Result<Classification>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut classified = ClassifiedArgs::default();
    let mut tokens = tokens.into_iter().map(Into::into);

    while let Some(token) = tokens.next() {
        let flag = token.as_str();

        if HELP_FLAGS.contains(&flag) {
            return Ok(Classification::Help);
        } else if DEBUG_FLAGS.contains(&flag) {
            classified.debug = true;
        } else if NO_SCORES_FLAGS.contains(&flag) {
            classified.list_query_args.push(token);
        } else if DATE_FLAGS.contains(&flag) {
            let Some(value) = tokens.next() else {
                return Err(Error::MissingFlagValue(token));
            };
            classified.push_both(token);
            classified.push_both(value);
        } else if flag.starts_with(DATE_FLAG_PREFIX) || RELATIVE_DATE_FLAGS.contains(&flag) {
            classified.push_both(token);
        } else if flag == RECAP_FLAG {
            classified.recap_requested = true;
            classified.passthrough_args.push(token);
        } else if flag == CMD_ONLY_FLAG {
            classified.cmd_only = true;
        } else {
            classified.passthrough_args.push(token);
        }
    }

    Ok(Classification::Args(classified))
}

impl ClassifiedArgs {
    fn push_both(&mut self, token: String) {
        self.list_query_args.push(token.clone());
        self.passthrough_args.push(token);
    }
}
