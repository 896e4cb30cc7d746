//! mlbpick CLI Library
//!
//! This crate provides the interactive side of mlbpick: it fetches the game
//! list from `mlbv`, lets the user pick a game and then a feed through `fzf`,
//! and prints or runs the resulting `mlbv` streaming command.
//!
//! # Architecture
//!
//! - [`cli_args`]: Process arguments and usage text
//! - [`command_selection`]: The two interactive selection steps and their collaborators
//! - [`app`]: The full pipeline, from selection to launching the command
//!
//! # Examples
//!
//! ```bash
//! # Pick from today's games and stream the chosen feed
//! mlbpick
//!
//! # Yesterday's games, scores hidden, passing a resolution through to mlbv
//! mlbpick --yesterday -n --resolution 720p
//!
//! # Just print the mlbv command for a recap
//! mlbpick --recap --cmd -d 2024-04-01
//! ```

pub mod app;
pub mod cli_args;
pub mod command_selection;
