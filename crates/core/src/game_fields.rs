//! Field extraction from a selected game line.
//!
//! The listing prints one human-readable line per game, e.g.
//!
//! ```text
//! 2. DH-2 Cubs (CHC) @ Cardinals (STL) Final(10)
//! ```
//!
//! Team abbreviations are taken positionally: the first parenthesized group
//! is the away team, the second the home team. Anything parenthesized after
//! them (an extra-innings annotation such as `Final(10)`) is ignored only
//! because it comes later. A line format that put a parenthetical before the
//! team fields would break this.

use std::sync::LazyLock;

use log::debug;
use regex::Regex;

use crate::config::DOUBLEHEADER_MARKER;

static PARENTHESIZED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\(([^()]*)\)").expect("parenthesized group pattern is valid"));

/// Structured fields scraped from one game line.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GameFields {
    pub away: String,
    pub home: String,
    /// Game number within a doubleheader, when the line is marked as one.
    pub doubleheader_game: Option<char>,
}

impl GameFields {
    /// Extracts the team abbreviations and doubleheader index from `line`.
    ///
    /// A line with fewer than two parenthesized groups yields empty strings
    /// for the missing teams rather than an error.
    #[must_use]
    pub fn extract(line: &str) -> Self {
        let mut groups = PARENTHESIZED
            .captures_iter(line)
            .filter_map(|captures| captures.get(1))
            .map(|group| group.as_str().to_string());

        let away = groups.next().unwrap_or_default();
        let home = groups.next().unwrap_or_default();

        if home.is_empty() {
            debug!("Fewer than two team fields in selected line: `{line}`");
        }

        let fields = Self {
            away,
            home,
            doubleheader_game: doubleheader_game(line),
        };
        debug!("Extracted {fields:?}");
        fields
    }

    /// The feeds offered for this game, away side first.
    #[must_use]
    pub fn feeds(&self) -> [&str; 2] {
        [self.away.as_str(), self.home.as_str()]
    }
}

fn doubleheader_game(line: &str) -> Option<char> {
    let (_, after_marker) = line.split_once(DOUBLEHEADER_MARKER)?;
    after_marker.chars().next()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_regular_game() {
        let fields = GameFields::extract("1. Red Sox (BOS) @ Yankees (NYY)  7:05pm");

        assert_eq!(
            fields,
            GameFields {
                away: "BOS".to_string(),
                home: "NYY".to_string(),
                doubleheader_game: None,
            }
        );
    }

    #[test]
    fn test_doubleheader_with_extra_innings() {
        let fields = GameFields::extract("2. DH-2 Cubs (CHC) @ Cardinals (STL) Final(10)");

        assert_eq!(fields.away, "CHC");
        assert_eq!(fields.home, "STL");
        assert_eq!(fields.doubleheader_game, Some('2'));
    }

    #[test]
    fn test_later_groups_are_ignored() {
        let fields = GameFields::extract("Mets (NYM) @ Braves (ATL) (TBD) (ppd)");

        assert_eq!(fields.feeds(), ["NYM", "ATL"]);
    }

    #[test]
    fn test_single_group_leaves_home_empty() {
        let fields = GameFields::extract("Mets (NYM) vs. somebody");

        assert_eq!(fields.away, "NYM");
        assert_eq!(fields.home, "");
    }

    #[test]
    fn test_no_groups() {
        assert_eq!(GameFields::extract("no games scheduled"), GameFields::default());
    }

    #[test]
    fn test_empty_groups_are_kept_in_position() {
        let fields = GameFields::extract("() @ (SEA)");

        assert_eq!(fields.away, "");
        assert_eq!(fields.home, "SEA");
    }

    #[test]
    fn test_marker_at_end_of_line() {
        assert_eq!(GameFields::extract("(A) @ (B) DH-").doubleheader_game, None);
    }

    #[test]
    fn test_first_marker_wins() {
        assert_eq!(
            GameFields::extract("DH-1 (A) @ (B) DH-2").doubleheader_game,
            Some('1')
        );
    }
}
