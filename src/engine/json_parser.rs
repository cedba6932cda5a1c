//! JSON parsing and serialization
//!
//! Accepts the two tabular JSON conventions: an array of row objects and an
//! object of column arrays. Column order follows key insertion order in both
//! forms. Serialization always writes the row-oriented form.

use crate::engine::error::{DataError, DataResult};
use crate::types::{CellValue, DataOrigin, Dataset, Row};
use serde_json::Value;

/// Parse JSON content into a [`Dataset`].
///
/// Dispatches on the top-level shape once: arrays are read row-oriented,
/// objects column-oriented, anything else is a shape error.
pub fn parse_json_content(content: &str) -> DataResult<Dataset> {
    let value: Value = serde_json::from_str(content)?;

    match value {
        Value::Array(array) => rows_from_objects(&array),
        Value::Object(map) => columns_from_arrays(&map),
        _ => Err(DataError::JsonShape),
    }
}

/// Row-oriented form: `[{"col": value, ...}, ...]`.
///
/// The first object's keys define the columns; later objects may omit keys
/// (the cell becomes `Null`) but must still be objects.
fn rows_from_objects(array: &[Value]) -> DataResult<Dataset> {
    if array.is_empty() {
        return Ok(Dataset::from_parts(vec![], vec![], DataOrigin::Json));
    }

    let first = array[0].as_object().ok_or(DataError::JsonShape)?;
    let names: Vec<String> = first.keys().cloned().collect();

    let mut rows = Vec::with_capacity(array.len());
    for item in array {
        let obj = item.as_object().ok_or(DataError::JsonShape)?;
        let cells: Row = names
            .iter()
            .map(|name| {
                obj.get(name)
                    .map(json_value_to_cell)
                    .unwrap_or(CellValue::Null)
            })
            .collect();
        rows.push(cells);
    }

    Ok(Dataset::from_parts(names, rows, DataOrigin::Json))
}

/// Column-oriented form: `{"col": [v, ...], ...}`.
///
/// Every value must be an array. Columns may have unequal lengths; the
/// table is as tall as the longest one and shorter columns leave `Null`
/// gaps rather than shifting cells.
fn columns_from_arrays(map: &serde_json::Map<String, Value>) -> DataResult<Dataset> {
    let names: Vec<String> = map.keys().cloned().collect();

    let mut height = 0;
    let mut columns = Vec::with_capacity(names.len());
    for value in map.values() {
        let array = value.as_array().ok_or(DataError::JsonShape)?;
        height = height.max(array.len());
        columns.push(array);
    }

    let mut rows: Vec<Row> = vec![vec![CellValue::Null; names.len()]; height];
    for (col_idx, array) in columns.iter().enumerate() {
        for (row_idx, value) in array.iter().enumerate() {
            rows[row_idx][col_idx] = json_value_to_cell(value);
        }
    }

    Ok(Dataset::from_parts(names, rows, DataOrigin::Json))
}

/// Convert a JSON value to a cell.
///
/// Strings stay text even when they look numeric; lexical coercion belongs
/// to the CSV path. Nested arrays and objects are kept as their JSON text.
fn json_value_to_cell(value: &Value) -> CellValue {
    match value {
        Value::Null => CellValue::Null,
        Value::Bool(b) => CellValue::Bool(*b),
        Value::Number(n) => CellValue::Number(n.as_f64().unwrap_or(0.0)),
        Value::String(s) => CellValue::Text(s.clone()),
        Value::Array(_) | Value::Object(_) => CellValue::Text(value.to_string()),
    }
}

/// Convert a [`Dataset`] to pretty-printed JSON as an array of row objects.
pub fn write_json_content(dataset: &Dataset) -> String {
    let mut array: Vec<serde_json::Map<String, Value>> = Vec::new();

    for row in &dataset.rows {
        let mut obj = serde_json::Map::new();
        for (col_idx, cell) in row.iter().enumerate() {
            if let Some(col) = dataset.columns.get(col_idx) {
                obj.insert(col.name.clone(), cell_to_json_value(cell));
            }
        }
        array.push(obj);
    }

    serde_json::to_string_pretty(&array).unwrap_or_else(|_| "[]".to_string())
}

/// Convert a cell to a JSON value
fn cell_to_json_value(cell: &CellValue) -> Value {
    match cell {
        CellValue::Text(s) => Value::String(s.clone()),
        CellValue::Number(n) => {
            // Use integer form for whole numbers
            if n.fract() == 0.0 && *n >= i64::MIN as f64 && *n <= i64::MAX as f64 {
                Value::Number(serde_json::Number::from(*n as i64))
            } else {
                serde_json::Number::from_f64(*n)
                    .map(Value::Number)
                    .unwrap_or(Value::Null)
            }
        }
        CellValue::Bool(b) => Value::Bool(*b),
        CellValue::Null => Value::Null,
    }
}
