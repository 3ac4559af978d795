//! Termkit CLI Library
//!
//! This crate provides the interactive half of termkit: colored console output,
//! line-oriented prompts, masked secret input and a full-screen fuzzy selector.
//! It also holds the pieces of the `tk` binary that are worth testing on their own.
//!
//! # Key Features
//!
//! - **Console Output**: Semantic styles (info, warn, fatal, success) over any writer
//! - **Prompts**: Confirmation, numbered choice, strings, integers and floats with defaults
//! - **Secret Input**: Raw-mode password entry echoing one mask character per key
//! - **Interactive Selection**: Terminal UI with fuzzy filtering, scrolling and mouse support
//!
//! # Architecture
//!
//! - [`console`]: Styled output, conditional styles and table printing
//! - [`prompt`]: Prompts reading from any `BufRead`
//! - [`secret`]: Masked terminal input
//! - [`select`]: The full-screen selector, usable as a [`termkit_core::args::Chooser`]
//! - [`candidates`]: A fuzzy-searchable list of plain text entries
//! - [`report`]: Result tables printed by `tk`
//! - [`cli_args`]: Command-line argument parsing
//!
//! # Examples
//!
//! ```bash
//! # Render a YAML file as a table
//! tk table servers.yml --indent "  "
//!
//! # Two days ago at 09:30
//! tk date 2- 0930
//!
//! # Sum some durations
//! tk duration 7.5 1h30m -- -45m
//!
//! # Choose a line of a file, narrowed by a query
//! tk pick hosts.txt -q prod
//! ```

pub mod candidates;
pub mod cli_args;
pub mod console;
pub mod prompt;
pub mod report;
pub mod secret;
pub mod select;
