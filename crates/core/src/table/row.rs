use std::collections::HashMap;

use crate::style::Style;
use crate::table::cell::Cell;

/// A table row, resolved into one [`Cell`] per header at build time.
#[derive(Debug, Clone)]
pub enum Row<T> {
    /// A record passed through the table's cell renderer.
    Data(T),
    /// Every column shows the character repeated to the column width.
    Separator(char),
    /// Sparse cells keyed by header; missing headers render blank.
    Custom(HashMap<String, Cell>),
}

impl<T> Row<T> {
    pub(crate) fn cell<F>(&self, renderer: &F, header: &str) -> Cell
    where
        F: Fn(&T, &str) -> (Style, String),
    {
        match self {
            Row::Data(record) => {
                let (style, text) = renderer(record, header);
                Cell::data(text, style)
            }
            Row::Separator(c) => Cell::Separator(*c),
            Row::Custom(cells) => cells.get(header).cloned().unwrap_or_else(Cell::blank),
        }
    }

    #[must_use]
    pub fn is_custom(&self) -> bool {
        matches!(self, Row::Custom(_))
    }
}
