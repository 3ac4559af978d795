//! Typed retrieval of positional arguments.
//!
//! Each getter registers one or more parsers for the requested type and tries
//! them in order against the argument at the given index. The first parser to
//! succeed wins; when all of them fail the last failure is returned.
//!
//! # Key Features
//!
//! - **Defaults**: A default is returned when the argument is not supplied
//! - **Fallback Parsers**: e.g. a date accepts `2-` as well as `240131`
//! - **Batch Mode**: Collect every failure of a whole argument vector at once
//! - **List Items**: Resolve an expression against a searchable list, asking
//!   the user to choose when several items match

pub mod batch;
pub mod collector;
pub mod list;
pub mod retrieve;

// Re-exports for convenience
pub use batch::Batch;
pub use collector::{ArgOptions, Collector};
pub use list::{choose_item, select_item, Chooser, ListItem, ListProvider};
pub use retrieve::{retrieve, Retrieval};
