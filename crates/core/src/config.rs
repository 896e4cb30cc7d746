//! Defaults and runtime settings for mlbpick.
//!
//! There are no configuration files. Every collaborator name and flag
//! spelling lives here as a constant, and a [`Settings`] value carrying them
//! is handed explicitly to each component that needs one.

/// Program that prints the game list and later streams the chosen feed.
pub const DEFAULT_LISTING_PROGRAM: &str = "mlbv";
/// Interactive fuzzy selector fed with the game list.
pub const DEFAULT_SELECTOR_PROGRAM: &str = "fzf";
/// Number of leading header lines in the listing output that are not games.
pub const DEFAULT_HEADER_LINES: usize = 2;

/// Final-command flag selecting a team's live feed.
pub const TEAM_FLAG: &str = "--team";
/// Final-command flag selecting a team's recap instead of the live feed.
pub const RECAP_MODE_FLAG: &str = "--recaps";
/// Final-command flag choosing the game of a doubleheader.
pub const DOUBLEHEADER_FLAG: &str = "--game";
/// Text the listing prints in front of a doubleheader's game number.
pub const DOUBLEHEADER_MARKER: &str = "DH-";

/// Explicit configuration threaded through every component.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Settings {
    pub listing_program: String,
    pub selector_program: String,
    pub header_lines: usize,
    pub debug: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            listing_program: DEFAULT_LISTING_PROGRAM.to_string(),
            selector_program: DEFAULT_SELECTOR_PROGRAM.to_string(),
            header_lines: DEFAULT_HEADER_LINES,
            debug: false,
        }
    }
}

impl Settings {
    #[must_use]
    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    #[must_use]
    pub fn with_listing_program(mut self, program: &str) -> Self {
        self.listing_program = program.to_string();
        self
    }

    #[must_use]
    pub fn with_selector_program(mut self, program: &str) -> Self {
        self.selector_program = program.to_string();
        self
    }
}
