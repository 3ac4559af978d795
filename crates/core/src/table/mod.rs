//! Tab-aligned table rendering.
//!
//! A [`TableBuilder`] collects headers, rows and an optional footer, then renders
//! everything into one block of text. Columns are padded to the widest cell and
//! joined by tabs; a dashed rule separates the headers from the rows.
//!
//! # Row kinds
//!
//! - **Data rows** hold one record; a cell renderer turns `(record, header)` into
//!   a styled cell for every column
//! - **Separator rows** repeat one character across the full column width
//! - **Custom rows** are sparse, header-keyed maps built up cell by cell
//!
//! # Examples
//!
//! ```
//! use termkit_core::style::Style;
//! use termkit_core::table::TableBuilder;
//!
//! let output = TableBuilder::<u32>::new()
//!     .add_headers(["count"])
//!     .add_rows([3, 12])
//!     .footer_cell("count", "15", Style::plain())
//!     .build();
//!
//! assert_eq!(output, "count\n-----\n3    \n12   \n-----\n15   \n");
//! ```

pub mod builder;
pub mod cell;
pub mod object;
mod render;
pub mod row;

pub use builder::{CellRenderer, TableBuilder, TableConfig};
pub use cell::Cell;
pub use object::{from_object, from_objects, FlatObject};
pub use row::Row;
