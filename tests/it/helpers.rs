//! Test helpers and builders for reducing boilerplate in tests.
//!
//! This module provides:
//! - Cell constructors (`num`, `text`) for terse row literals
//! - `DatasetBuilder` - builder pattern for assembling datasets
//! - `MapFetcher` - canned text fetcher for file-reference tests
//! - Shared fixtures carrying the same logical table in every format

use std::collections::HashMap;
use vizdata::{CellValue, DataOrigin, DataResult, Dataset, Row, TableEngine, TextFetcher};

// ============================================================================
// Cell constructors
// ============================================================================

/// Create a number cell.
pub fn num(n: f64) -> CellValue {
    CellValue::Number(n)
}

/// Create a text cell.
pub fn text(s: &str) -> CellValue {
    CellValue::Text(s.to_string())
}

// ============================================================================
// DatasetBuilder - builder pattern for assembling datasets
// ============================================================================

/// Builder for creating datasets in tests without going through a parser.
///
/// # Example
/// ```ignore
/// let ds = DatasetBuilder::new()
///     .columns(&["id", "height", "weight"])
///     .row(vec![text("r0"), num(170.0), num(70.0)])
///     .build();
/// ```
pub struct DatasetBuilder {
    names: Vec<String>,
    rows: Vec<Row>,
}

impl Default for DatasetBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl DatasetBuilder {
    /// Create a new builder with no columns or rows.
    pub fn new() -> Self {
        Self {
            names: Vec::new(),
            rows: Vec::new(),
        }
    }

    /// Set all column names at once.
    pub fn columns(mut self, names: &[&str]) -> Self {
        self.names = names.iter().map(|n| n.to_string()).collect();
        self
    }

    /// Append one data row.
    pub fn row(mut self, cells: Vec<CellValue>) -> Self {
        self.rows.push(cells);
        self
    }

    /// Build the dataset, running type inference.
    pub fn build(self) -> Dataset {
        Dataset::from_parts(self.names, self.rows, DataOrigin::Inline)
    }
}

// ============================================================================
// Fixtures
// ============================================================================

/// CSV form of the shared fixture table.
pub const PEOPLE_CSV: &str = "id,height,weight\nr0,170,70\nr1,160,60\nr2,180,80";

/// Row-oriented JSON form of the shared fixture table.
pub const PEOPLE_JSON_ROWS: &str = r#"[
  {"id": "r0", "height": 170, "weight": 70},
  {"id": "r1", "height": 160, "weight": 60},
  {"id": "r2", "height": 180, "weight": 80}
]"#;

/// Column-oriented JSON form of the shared fixture table.
pub const PEOPLE_JSON_COLUMNS: &str =
    r#"{"id": ["r0", "r1", "r2"], "height": [170, 160, 180], "weight": [70, 60, 80]}"#;

/// The shared fixture assembled directly, bypassing the parsers.
pub fn people() -> Dataset {
    DatasetBuilder::new()
        .columns(&["id", "height", "weight"])
        .row(vec![text("r0"), num(170.0), num(70.0)])
        .row(vec![text("r1"), num(160.0), num(60.0)])
        .row(vec![text("r2"), num(180.0), num(80.0)])
        .build()
}

/// Engine preloaded from literal input.
pub fn engine_with(input: &str) -> TableEngine {
    let mut engine = TableEngine::new();
    engine.load(input, None).expect("fixture input must parse");
    engine
}

// ============================================================================
// MapFetcher - canned fetcher for file-reference tests
// ============================================================================

/// Fetcher serving canned content keyed by reference.
pub struct MapFetcher {
    entries: HashMap<String, String>,
}

impl Default for MapFetcher {
    fn default() -> Self {
        Self::new()
    }
}

impl MapFetcher {
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Register content under a reference.
    pub fn with(mut self, reference: &str, content: &str) -> Self {
        self.entries
            .insert(reference.to_string(), content.to_string());
        self
    }
}

impl TextFetcher for MapFetcher {
    fn fetch(&self, reference: &str) -> DataResult<String> {
        self.entries
            .get(reference.trim())
            .cloned()
            .ok_or_else(|| format!("no fixture registered for '{}'", reference).into())
    }
}

// ============================================================================
// Tests for the helpers themselves
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use vizdata::ColumnType;

    #[test]
    fn test_builder_infers_types() {
        let ds = people();
        assert_eq!(ds.column_type("id"), Some(ColumnType::Text));
        assert_eq!(ds.column_type("height"), Some(ColumnType::Number));
        assert_eq!(ds.row_count(), 3);
    }

    #[test]
    fn test_fixture_forms_agree() {
        let from_csv = engine_with(PEOPLE_CSV);
        let built = people();
        assert_eq!(from_csv.rows(), &built.rows[..]);
    }

    #[test]
    fn test_map_fetcher_serves_registered_content() {
        let fetcher = MapFetcher::new().with("a.csv", PEOPLE_CSV);
        assert_eq!(fetcher.fetch("a.csv").unwrap(), PEOPLE_CSV);
        assert!(fetcher.fetch("missing.csv").is_err());
    }
}
