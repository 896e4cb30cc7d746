//! Interactive game and feed selection.
//!
//! This module drives the two selection steps of mlbpick through external
//! collaborators: a [`Lister`] that produces the game list and a
//! [`Selector`] (normally `fzf`) that lets the user pick a line from it.
//!
//! # Flow
//!
//! 1. Make sure the selector can be run at all
//! 2. Fetch the game list and let the user pick a game
//! 3. Extract the team abbreviations from the chosen line
//! 4. Let the user pick the away or home feed
//!
//! Backing out of either step yields [`FeedOutcome::Cancelled`], which is a
//! normal way for the program to finish.

pub mod flow;
pub mod listing;
pub mod selector;
pub mod types;

pub use flow::choose_feed;
pub use listing::{Lister, ProcessLister};
pub use selector::{FzfSelector, Selector};
pub use types::{FeedOutcome, Selection, SelectorOptions, Step};
