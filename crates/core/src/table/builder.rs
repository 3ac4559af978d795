use std::collections::HashMap;
use std::fmt::Display;

use serde::Deserialize;

use crate::style::Style;
use crate::table::cell::Cell;
use crate::table::row::Row;

/// Cell renderer used when none is set explicitly.
pub type CellRenderer<T> = fn(&T, &str) -> (Style, String);

/// Layout options for a table.
#[derive(Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct TableConfig {
    /// Skip the header line and its rule; headers then add nothing to widths.
    pub hide_headers: bool,
    /// Prefix written at the start of every line.
    pub indentation: String,
}

/// Accumulates headers, rows and footer cells, then renders them with [`build`].
///
/// Every mutation consumes and returns the builder so calls can be chained.
/// Building borrows the builder and can be repeated with identical output.
///
/// [`build`]: TableBuilder::build
pub struct TableBuilder<T, F = CellRenderer<T>> {
    pub(crate) headers: Vec<String>,
    pub(crate) rows: Vec<Row<T>>,
    pub(crate) footer: HashMap<String, Cell>,
    pub(crate) renderer: F,
    pub(crate) config: TableConfig,
}

fn display_cell<T: Display>(record: &T, _header: &str) -> (Style, String) {
    (Style::plain(), record.to_string())
}

impl<T: Display> TableBuilder<T> {
    /// An empty table whose data rows render with `Display`.
    #[must_use]
    pub fn new() -> Self {
        Self::with_renderer(display_cell::<T> as CellRenderer<T>)
    }
}

impl<T: Display> Default for TableBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, F> TableBuilder<T, F> {
    /// An empty table with a custom renderer for data rows.
    pub fn with_renderer(renderer: F) -> Self
    where
        F: Fn(&T, &str) -> (Style, String),
    {
        Self {
            headers: Vec::new(),
            rows: Vec::new(),
            footer: HashMap::new(),
            renderer,
            config: TableConfig::default(),
        }
    }

    #[must_use]
    pub fn with_config(mut self, config: TableConfig) -> Self {
        self.config = config;
        self
    }

    #[must_use]
    pub fn hide_headers(mut self, hide: bool) -> Self {
        self.config.hide_headers = hide;
        self
    }

    #[must_use]
    pub fn indentation(mut self, prefix: impl Into<String>) -> Self {
        self.config.indentation = prefix.into();
        self
    }

    /// Appends header labels. Labels should be unique: footer and custom cells
    /// are looked up by label.
    #[must_use]
    pub fn add_headers<I, S>(mut self, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.headers.extend(labels.into_iter().map(Into::into));
        self
    }

    /// Replaces the renderer used for data rows.
    pub fn cell_renderer<G>(self, renderer: G) -> TableBuilder<T, G>
    where
        G: Fn(&T, &str) -> (Style, String),
    {
        TableBuilder {
            headers: self.headers,
            rows: self.rows,
            footer: self.footer,
            renderer,
            config: self.config,
        }
    }

    /// Restores the `Display` renderer.
    #[must_use]
    pub fn default_renderer(self) -> TableBuilder<T>
    where
        T: Display,
    {
        self.cell_renderer(display_cell::<T> as CellRenderer<T>)
    }

    #[must_use]
    pub fn add_row(mut self, record: T) -> Self {
        self.rows.push(Row::Data(record));
        self
    }

    #[must_use]
    pub fn add_rows<I>(mut self, records: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        self.rows.extend(records.into_iter().map(Row::Data));
        self
    }

    #[must_use]
    pub fn add_separator(mut self, c: char) -> Self {
        self.rows.push(Row::Separator(c));
        self
    }

    /// Starts a new custom row holding one cell.
    #[must_use]
    pub fn add_custom_cell(
        mut self,
        header: impl Into<String>,
        text: impl Into<String>,
        style: Style,
    ) -> Self {
        self.rows.push(Row::Custom(HashMap::new()));
        self.append_custom_cell(header, text, style)
    }

    /// Sets a cell on the last row if that row is a custom row, otherwise
    /// starts a new custom row first.
    #[must_use]
    pub fn append_custom_cell(
        mut self,
        header: impl Into<String>,
        text: impl Into<String>,
        style: Style,
    ) -> Self {
        if !self.rows.last().is_some_and(Row::is_custom) {
            self.rows.push(Row::Custom(HashMap::new()));
        }

        if let Some(Row::Custom(cells)) = self.rows.last_mut() {
            cells.insert(header.into(), Cell::data(text, style));
        }
        self
    }

    /// Sets or replaces the footer cell below `header`.
    #[must_use]
    pub fn footer_cell(
        mut self,
        header: impl Into<String>,
        text: impl Into<String>,
        style: Style,
    ) -> Self {
        self.footer.insert(header.into(), Cell::data(text, style));
        self
    }

    #[must_use]
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    #[must_use]
    pub fn rows(&self) -> &[Row<T>] {
        &self.rows
    }

    #[must_use]
    pub fn config(&self) -> &TableConfig {
        &self.config
    }
}
