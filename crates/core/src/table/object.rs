//! Tables built from arbitrary serializable values.

use itertools::Itertools;
use log::debug;
use serde::Serialize;
use serde_json::{json, Map, Value};

use crate::error::Result;
use crate::style::Style;
use crate::table::builder::{CellRenderer, TableBuilder};

/// Record type of object tables: a JSON object keyed by header.
pub type FlatObject = Value;

const ERROR_HEADER: &str = "error";

/// Builds a one-row table from the fields of `object`, headers sorted by name.
///
/// A value that does not serialize into an object yields a table with a single
/// `error` column describing the failure.
pub fn from_object<S: Serialize + ?Sized>(object: &S) -> TableBuilder<FlatObject> {
    match flatten(object) {
        Ok(fields) => {
            let headers = fields.keys().sorted().cloned().collect_vec();
            TableBuilder::with_renderer(field_cell as CellRenderer<FlatObject>)
                .add_headers(headers)
                .add_row(Value::Object(fields))
        }
        Err(e) => error_table(&e.to_string()),
    }
}

/// Builds one row per object; headers are the sorted union of all fields.
pub fn from_objects<S: Serialize>(objects: &[S]) -> TableBuilder<FlatObject> {
    let rows = match objects.iter().map(flatten).collect::<Result<Vec<_>>>() {
        Ok(rows) => rows,
        Err(e) => return error_table(&e.to_string()),
    };

    let headers = rows
        .iter()
        .flat_map(Map::keys)
        .sorted()
        .dedup()
        .cloned()
        .collect_vec();

    TableBuilder::with_renderer(field_cell as CellRenderer<FlatObject>)
        .add_headers(headers)
        .add_rows(rows.into_iter().map(Value::Object))
}

fn flatten<S: Serialize + ?Sized>(object: &S) -> Result<Map<String, Value>> {
    let value = serde_json::to_value(object)?;
    Ok(serde_json::from_value(value)?)
}

fn error_table(description: &str) -> TableBuilder<FlatObject> {
    debug!("Rendering object failed: {description}");
    TableBuilder::with_renderer(field_cell as CellRenderer<FlatObject>)
        .add_headers([ERROR_HEADER])
        .add_row(json!({ ERROR_HEADER: description }))
}

/// Strings render verbatim, other values as JSON, missing fields as blank.
fn field_cell(record: &FlatObject, header: &str) -> (Style, String) {
    let text = match record.get(header) {
        None => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    };
    (Style::plain(), text)
}
