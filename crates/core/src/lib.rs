//! mlbpick Core Library
//!
//! This crate provides the non-interactive core of mlbpick, a front-end that
//! picks an MLB game and feed from the `mlbv` game list through a fuzzy
//! selector, then builds (and optionally runs) the matching `mlbv` streaming
//! invocation.
//!
//! # Key Features
//!
//! - **Argument Classification**: Split invocation tokens into list-query and passthrough buckets
//! - **Field Extraction**: Scrape team abbreviations and doubleheader index from a game line
//! - **Command Synthesis**: Assemble the final streaming command
//! - **Execution**: Resolve programs on `PATH`, capture or inherit subprocess I/O
//! - **Error Handling**: One error type with exit-code propagation
//!
//! # Examples
//!
//! ```
//! use mlbpick_core::classification::{classify, Classification};
//! use mlbpick_core::command_synthesis::FinalCommand;
//! use mlbpick_core::config::Settings;
//! use mlbpick_core::game_fields::GameFields;
//!
//! let Classification::Args(classified) = classify(["--yesterday"])? else {
//!     unreachable!("help was not requested");
//! };
//! let fields = GameFields::extract("1. Red Sox (BOS) @ Yankees (NYY)  7:05pm");
//! let command = FinalCommand::synthesize(&classified, &fields, &fields.away, &Settings::default());
//!
//! assert_eq!(command.to_string(), "mlbv --team BOS --yesterday");
//! # Ok::<(), mlbpick_core::error::Error>(())
//! ```

pub mod classification;
pub mod command_synthesis;
pub mod config;
pub mod error;
pub mod execution;
pub mod game_fields;
