//! Type definitions for the interactive selection steps.

use itertools::Itertools;
use mlbpick_core::classification::ClassifiedArgs;
use mlbpick_core::config::Settings;
use mlbpick_core::game_fields::GameFields;

/// Outcome of one interactive step.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Selection {
    Chosen(String),
    /// The user backed out, or the selector gave nothing back.
    Cancelled,
}

/// The interactive steps, in the order they run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Step {
    Game,
    Feed,
}

impl Step {
    /// Informational message shown when the user cancels at this step.
    #[must_use]
    pub fn cancellation_message(self) -> &'static str {
        match self {
            Step::Game => "No game selected.",
            Step::Feed => "No feed selected.",
        }
    }
}

/// What the user picked across both steps.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FeedOutcome {
    Chosen { fields: GameFields, feed: String },
    Cancelled(Step),
}

/// How a selector should present its input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectorOptions {
    /// Leading input lines shown as a fixed header instead of choices.
    pub header_lines: usize,
    /// Wrap around when moving past either end of the list.
    pub cycle: bool,
    pub fuzzy: bool,
    pub prompt: String,
}

impl SelectorOptions {
    /// Options for picking a game out of the listing output.
    ///
    /// The prompt repeats the listing program and passthrough arguments so
    /// the user can see which day and options they are choosing for.
    #[must_use]
    pub fn for_games(classified: &ClassifiedArgs, settings: &Settings) -> Self {
        let context = std::iter::once(&settings.listing_program)
            .chain(&classified.passthrough_args)
            .join(" ");

        Self {
            header_lines: settings.header_lines,
            cycle: true,
            fuzzy: true,
            prompt: format!("{context}> "),
        }
    }

    /// Options for picking the away or home feed of a game.
    #[must_use]
    pub fn for_feeds() -> Self {
        Self {
            header_lines: 0,
            cycle: true,
            fuzzy: true,
            prompt: "Feed> ".to_string(),
        }
    }
}
