//! termkit Core Library
//!
//! This crate provides the building blocks for small terminal tools: a table
//! renderer, style templates with a color palette, date and duration parsing,
//! and typed retrieval of positional arguments.
//!
//! # Key Features
//!
//! - **Table Rendering**: Tab-aligned tables with data, separator and sparse rows,
//!   footers and per-cell styles
//! - **Typed Arguments**: Chained fallback parsers, defaults and a batch mode that
//!   reports every failure at once
//! - **Date Expressions**: Absolute layouts plus relative `-`, `N-` and `N+` offsets
//! - **Settings**: Optional YAML settings file for layouts and colors
//!
//! # Examples
//!
//! Rendering a table:
//!
//! ```
//! use termkit_core::table::TableBuilder;
//!
//! let table = TableBuilder::<String>::new()
//!     .add_headers(["name"])
//!     .add_row("alpha".to_string())
//!     .build();
//! assert_eq!(table, "name \n-----\nalpha\n");
//! ```
//!
//! Reading arguments:
//!
//! ```
//! use termkit_core::args::{ArgOptions, Collector};
//!
//! let collector = Collector::new(["42"]);
//! assert_eq!(collector.get_int(0, ArgOptions::default())?, 42);
//! assert_eq!(collector.get_int(1, ArgOptions::with_default(7))?, 7);
//! # Ok::<(), termkit_core::error::Error>(())
//! ```

pub mod args;
pub mod colors;
pub mod config;
pub mod datetime;
pub mod error;
pub mod file_handling;
pub mod style;
pub mod table;
