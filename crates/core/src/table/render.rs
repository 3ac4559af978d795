use log::{debug, warn};
use unicode_width::UnicodeWidthStr;

use crate::style::Style;
use crate::table::builder::TableBuilder;
use crate::table::cell::{pad, Cell};

const COLUMN_SEPARATOR: &str = "\t";
const RULE: char = '-';

impl<T, F> TableBuilder<T, F>
where
    F: Fn(&T, &str) -> (Style, String),
{
    /// Renders the table.
    ///
    /// Every line starts with the configured indentation, columns are joined
    /// by tabs and the output ends with exactly one newline.
    #[must_use]
    pub fn build(&self) -> String {
        self.render(true)
    }

    /// Renders the table without applying any cell style.
    #[must_use]
    pub fn build_plain(&self) -> String {
        self.render(false)
    }

    fn render(&self, styled: bool) -> String {
        let cells = self.create_cells();
        let widths = self.column_widths(&cells);
        debug!(
            "Rendering table with {} columns and {} rows",
            self.headers.len(),
            cells.len()
        );

        for header in self.footer.keys().filter(|h| !self.headers.contains(h)) {
            warn!("Ignoring footer cell for unknown header `{header}`");
        }

        let render_cell = |cell: &Cell, width: usize| {
            if styled {
                cell.render(width)
            } else {
                cell.render_plain(width)
            }
        };

        let mut lines: Vec<String> = Vec::new();

        if !self.config.hide_headers {
            lines.push(join_columns(
                self.headers.iter().zip(&widths).map(|(h, w)| pad(h, *w)),
            ));
            lines.push(join_columns(
                widths.iter().map(|w| RULE.to_string().repeat(*w)),
            ));
        }

        for row in &cells {
            lines.push(join_columns(
                row.iter().zip(&widths).map(|(cell, w)| render_cell(cell, *w)),
            ));
        }

        if !self.footer.is_empty() {
            lines.push(join_columns(self.headers.iter().zip(&widths).map(
                |(header, w)| {
                    let fill = if self.footer.contains_key(header) {
                        RULE
                    } else {
                        ' '
                    };
                    fill.to_string().repeat(*w)
                },
            )));
            lines.push(join_columns(self.headers.iter().zip(&widths).map(
                |(header, w)| match self.footer.get(header) {
                    Some(cell) => render_cell(cell, *w),
                    None => " ".repeat(*w),
                },
            )));
        }

        let mut out = String::new();
        for line in lines {
            out.push_str(&self.config.indentation);
            out.push_str(&line);
            out.push('\n');
        }
        out
    }

    /// Resolves every row into one cell per header.
    pub(crate) fn create_cells(&self) -> Vec<Vec<Cell>> {
        self.rows
            .iter()
            .map(|row| {
                self.headers
                    .iter()
                    .map(|header| row.cell(&self.renderer, header))
                    .collect()
            })
            .collect()
    }

    /// Width per column: the widest of header (unless hidden), footer and cells.
    pub(crate) fn column_widths(&self, cells: &[Vec<Cell>]) -> Vec<usize> {
        self.headers
            .iter()
            .enumerate()
            .map(|(i, header)| {
                let header_width = if self.config.hide_headers {
                    0
                } else {
                    UnicodeWidthStr::width(header.as_str())
                };
                let footer_width = self.footer.get(header).map_or(0, Cell::width);
                let cells_width = cells.iter().map(|row| row[i].width()).max().unwrap_or(0);

                header_width.max(footer_width).max(cells_width)
            })
            .collect()
    }
}

fn join_columns<I>(columns: I) -> String
where
    I: Iterator<Item = String>,
{
    columns.collect::<Vec<_>>().join(COLUMN_SEPARATOR)
}
