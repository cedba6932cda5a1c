//! Core data model for the tabular engine.
//!
//! Defines the canonical row/column representation that parsers produce and
//! transformations operate on: dynamically typed cells, per-column types
//! inferred from the data, and the [`Dataset`] container that keeps column
//! metadata and rows in lockstep.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

// ============================================================================
// Cell Values
// ============================================================================

/// A single dynamically typed cell.
///
/// CSV parsing only ever produces `Number` and `Text`. `Bool` and `Null`
/// enter through JSON booleans, JSON nulls and absent object keys.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum CellValue {
    Number(f64),
    Text(String),
    Bool(bool),
    Null,
}

impl CellValue {
    /// Runtime type tag consumed by column inference.
    pub fn type_tag(&self) -> &'static str {
        match self {
            CellValue::Number(_) => "number",
            CellValue::Text(_) => "string",
            CellValue::Bool(_) => "boolean",
            CellValue::Null => "null",
        }
    }

    /// Loose numeric reading: numbers as-is, numeric text parsed, booleans
    /// as 0/1. Returns `None` when the cell has no numeric interpretation.
    ///
    /// Range filters and chart scales both go through this, so a `Text`
    /// column holding "5" still filters and plots like a number.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            CellValue::Number(n) => Some(*n),
            CellValue::Text(s) => s.trim().parse::<f64>().ok(),
            CellValue::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
            CellValue::Null => None,
        }
    }

    /// True for the absent-value marker.
    pub fn is_null(&self) -> bool {
        matches!(self, CellValue::Null)
    }
}

// Manual Eq/Ord so rows can be sorted on any column (f64 has no derived Ord).

impl Eq for CellValue {}

impl PartialOrd for CellValue {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for CellValue {
    /// Total order: kind first (`Null < Bool < Number < Text`), then within
    /// kind. `total_cmp` keeps NaN comparable so sorting never panics.
    ///
    /// For NaN cells this order disagrees with the derived `PartialEq`:
    /// `cmp` reports two identical NaNs as `Equal` while `==` reports them
    /// unequal. Sorting only consults `cmp`, so row order stays
    /// deterministic either way.
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        use CellValue::*;
        fn kind_rank(v: &CellValue) -> u8 {
            match v {
                Null => 0,
                Bool(_) => 1,
                Number(_) => 2,
                Text(_) => 3,
            }
        }
        let ra = kind_rank(self);
        let rb = kind_rank(other);
        if ra != rb {
            return ra.cmp(&rb);
        }
        match (self, other) {
            (Null, Null) => std::cmp::Ordering::Equal,
            (Bool(a), Bool(b)) => a.cmp(b),
            (Number(a), Number(b)) => a.total_cmp(b),
            (Text(a), Text(b)) => a.cmp(b),
            _ => std::cmp::Ordering::Equal,
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Number(n) => {
                // No trailing ".0" on whole numbers
                if n.fract() == 0.0 && n.abs() < i64::MAX as f64 {
                    write!(f, "{}", *n as i64)
                } else {
                    write!(f, "{}", n)
                }
            }
            CellValue::Text(s) => write!(f, "{}", s),
            CellValue::Bool(b) => write!(f, "{}", b),
            CellValue::Null => Ok(()),
        }
    }
}

// ============================================================================
// Columns
// ============================================================================

/// Inferred type of a column. Mixed columns stay `Text`; cells are never
/// coerced to match the label.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ColumnType {
    Number,
    Text,
}

impl ColumnType {
    /// Tag form used in schema listings and logs.
    pub fn as_str(&self) -> &'static str {
        match self {
            ColumnType::Number => "number",
            ColumnType::Text => "string",
        }
    }
}

impl Default for ColumnType {
    fn default() -> Self {
        Self::Text
    }
}

/// Column metadata: name and inferred type, parallel to cell positions.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Column {
    /// Column name/header
    pub name: String,
    /// Inferred type for this column
    pub dtype: ColumnType,
}

impl Column {
    pub fn new(name: &str, dtype: ColumnType) -> Self {
        Self {
            name: name.to_string(),
            dtype,
        }
    }
}

/// One data row; always as wide as the dataset's column list.
pub type Row = Vec<CellValue>;

// ============================================================================
// Dataset
// ============================================================================

/// Where a dataset came from, for write-back fidelity.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum DataOrigin {
    /// Assembled in memory
    Inline,
    /// Parsed from CSV text, keeping the detected separator
    Csv { delimiter: char },
    /// Parsed from JSON text
    Json,
}

impl Default for DataOrigin {
    fn default() -> Self {
        Self::Inline
    }
}

/// The canonical table: ordered columns, data rows and origin.
///
/// Column 0 is by convention the row identifier; range filtering addresses
/// attributes starting at column 1. The header grid view is derived from
/// `columns` on demand (see [`Dataset::raw_rows`]) so it can never drift
/// from the model.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    /// Column definitions
    pub columns: Vec<Column>,
    /// Data rows, each exactly `columns.len()` cells wide
    pub rows: Vec<Row>,
    /// Where this data came from
    pub origin: DataOrigin,
}

impl Dataset {
    /// Build a dataset from header names and raw rows, inferring column
    /// types in the same step.
    ///
    /// This is the single construction path every parser funnels through:
    /// rows are normalized to the header width (missing cells become `Null`,
    /// extras are dropped) before inference runs, so the width invariant and
    /// the type labels can never disagree with the stored cells.
    pub fn from_parts(names: Vec<String>, mut rows: Vec<Row>, origin: DataOrigin) -> Self {
        let width = names.len();
        for row in &mut rows {
            row.resize(width, CellValue::Null);
        }

        let columns: Vec<Column> = names
            .into_iter()
            .enumerate()
            .map(|(i, name)| Column {
                name,
                dtype: infer_column_type(&rows, i),
            })
            .collect();

        Self {
            columns,
            rows,
            origin,
        }
    }

    /// Index of a column by exact name.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c.name == name)
    }

    /// Inferred type of a column by name.
    pub fn column_type(&self, name: &str) -> Option<ColumnType> {
        self.column_index(name).map(|i| self.columns[i].dtype)
    }

    /// All column names in order.
    pub fn column_names(&self) -> Vec<String> {
        self.columns.iter().map(|c| c.name.clone()).collect()
    }

    /// Get the number of rows (header excluded).
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Get the number of columns.
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// True when the dataset holds no columns and no rows.
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty() && self.rows.is_empty()
    }

    /// Values of the identifier column (column 0) in current row order.
    pub fn ids(&self) -> Vec<CellValue> {
        self.rows
            .iter()
            .filter_map(|row| row.first().cloned())
            .collect()
    }

    /// The raw grid view: header names as a text row, followed by the data
    /// rows. Derived on demand, so it always reflects the current row order.
    pub fn raw_rows(&self) -> Vec<Row> {
        let header: Row = self
            .columns
            .iter()
            .map(|c| CellValue::Text(c.name.clone()))
            .collect();
        std::iter::once(header)
            .chain(self.rows.iter().cloned())
            .collect()
    }

    /// Separator recorded at parse time, falling back to a comma for
    /// datasets that never came from CSV.
    pub fn delimiter(&self) -> char {
        match self.origin {
            DataOrigin::Csv { delimiter } => delimiter,
            _ => ',',
        }
    }
}

/// Infer a column's type from the runtime tags of every cell in it.
///
/// A column is `Number` only when each cell carries the `number` tag and a
/// pure text column stays `Text`. Every other outcome (mixed tags, all
/// booleans, all nulls, zero rows) falls back to `Text` rather than guessing.
fn infer_column_type(rows: &[Row], index: usize) -> ColumnType {
    let tags: HashSet<&'static str> = rows
        .iter()
        .filter_map(|row| row.get(index))
        .map(|cell| cell.type_tag())
        .collect();

    if tags.len() == 1 && tags.contains("number") {
        ColumnType::Number
    } else {
        ColumnType::Text
    }
}
