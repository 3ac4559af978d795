//! Command-line argument parsing.
//!
//! This module defines the command-line interface of the `tk` binary using
//! the `clap` crate.

use clap::{Parser, Subcommand};

/// Command-line arguments for the `tk` tool.
///
/// # Examples
///
/// ```rust
/// use clap::Parser;
/// use termkit_cli::cli_args::{Args, Command};
///
/// let args = Args::parse_from(["tk", "duration", "7.5"]);
/// assert!(matches!(args.command, Command::Duration { .. }));
/// ```
#[derive(Parser, Debug)]
#[command(term_width = 0)] // Just to make testing across clap features easier
pub struct Args {
    /// Path to the settings file YAML.
    ///
    /// If not provided, defaults to `~/.termkit/settings.yml`.
    #[arg(long, short = 'c', global = true)]
    pub config: Option<String>,

    /// Print debug output.
    #[arg(long, short = 'd', global = true, action)]
    pub debug: bool,

    /// Print without colors.
    #[arg(long, global = true, action)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Render a YAML or JSON file as a table.
    ///
    /// An object becomes one row; a list of objects becomes one row per object.
    Table {
        path: String,

        #[arg(long, action)]
        hide_headers: bool,

        /// Prefix of every line.
        #[arg(long)]
        indent: Option<String>,
    },

    /// Read a date and an optional time of day.
    ///
    /// Dates are absolute (`240131`) or relative (`-`, `2-`, `3+` days).
    Date {
        #[arg(allow_hyphen_values = true)]
        args: Vec<String>,
    },

    /// Read a relative (`1-`) or absolute week.
    Week {
        #[arg(allow_hyphen_values = true)]
        arg: Option<String>,
    },

    /// Read a relative (`1-`) or absolute month.
    Month {
        #[arg(allow_hyphen_values = true)]
        arg: Option<String>,
    },

    /// Read durations such as `7.5h`, `1h30m` or `8`.
    Duration {
        #[arg(required = true, allow_hyphen_values = true)]
        args: Vec<String>,
    },

    /// Pick one line of a file.
    Pick {
        path: String,

        /// Narrow the candidates before choosing.
        #[arg(long, short = 'q')]
        query: Option<String>,
    },
}
