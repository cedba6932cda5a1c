//! The table engine: parsing, loading and transforming tabular data.
//!
//! This module wires the parsers, the transformations and the input
//! resolution seam together behind [`TableEngine`], the facade chart and
//! table components talk to.
//!
//! ## Loading
//!
//! [`TableEngine::load`] accepts literal CSV/JSON text or a file reference
//! resolved through the configured [`TextFetcher`]. Format detection runs
//! in order: explicit hint, file-reference suffix, then trying the parsers
//! (JSON first, CSV second). The engine's dataset is replaced only when
//! parsing succeeds; a failed load leaves the previous dataset untouched.
//!
//! ## Error Handling
//!
//! All operations return `DataResult<T>` which uses the `DataError` type.
//! Errors are synchronous and descriptive; nothing is swallowed or retried.

mod csv_parser;
mod error;
mod json_parser;
mod source;
mod transform;

pub use csv_parser::*;
pub use error::*;
pub use json_parser::*;
pub use source::*;
pub use transform::*;

use crate::types::{Column, ColumnType, DataOrigin, Dataset, Row};

/// Owns the current dataset and the fetch collaborator, and exposes the
/// operations components call: load, sort, reorder, filter, serialize.
///
/// Single-threaded and synchronous; callers serialize mutating calls.
pub struct TableEngine {
    dataset: Dataset,
    fetcher: Box<dyn TextFetcher>,
}

impl Default for TableEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl TableEngine {
    /// Engine with an empty dataset, resolving file references from the
    /// filesystem.
    pub fn new() -> Self {
        Self::with_fetcher(Box::new(FsFetcher))
    }

    /// Engine resolving file references through a custom fetcher.
    pub fn with_fetcher(fetcher: Box<dyn TextFetcher>) -> Self {
        Self {
            dataset: Dataset::default(),
            fetcher,
        }
    }

    /// Parse `input` and replace the current dataset.
    ///
    /// `input` is either literal CSV/JSON text or a single-line file
    /// reference (suffix `.csv`/`.json`), which is fetched first. An
    /// explicit `format` hint wins over suffix detection; with neither,
    /// JSON is tried before CSV and failing both reports an unknown format.
    ///
    /// Replacement is atomic: parsing builds a fresh dataset and assignment
    /// happens only on success, so any error leaves the previous dataset
    /// in place.
    pub fn load(&mut self, input: &str, format: Option<Format>) -> DataResult<()> {
        let start = std::time::Instant::now();

        // A file reference is fetched once, whatever format ends up
        // parsing the content
        let by_suffix = detect_format(input);
        let content = match by_suffix {
            Some(_) => self.fetcher.fetch(input)?,
            None => input.to_string(),
        };

        let dataset = match format.or(by_suffix) {
            Some(Format::Csv) => parse_csv_content(&content)?,
            Some(Format::Json) => parse_json_content(&content)?,
            None => parse_json_content(&content)
                .or_else(|_| parse_csv_content(&content))
                .map_err(|_| DataError::UnknownFormat)?,
        };

        let format_label = match dataset.origin {
            DataOrigin::Csv { .. } => "CSV",
            DataOrigin::Json => "JSON",
            DataOrigin::Inline => "inline",
        };
        tracing::debug!(
            "Loaded {} with {} rows x {} cols in {:?}",
            format_label,
            dataset.row_count(),
            dataset.column_count(),
            start.elapsed()
        );

        self.dataset = dataset;
        Ok(())
    }

    /// The current dataset.
    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    /// Column definitions of the current dataset.
    pub fn columns(&self) -> &[Column] {
        &self.dataset.columns
    }

    /// Data rows in current order.
    pub fn rows(&self) -> &[Row] {
        &self.dataset.rows
    }

    /// The header-plus-data grid view, derived from the current state.
    pub fn raw_rows(&self) -> Vec<Row> {
        self.dataset.raw_rows()
    }

    /// Inferred type of a column by name.
    pub fn column_type(&self, name: &str) -> Option<ColumnType> {
        self.dataset.column_type(name)
    }

    /// Sort rows by the named column and return the new ordering.
    pub fn sort(&mut self, column: &str, ascending: bool) -> DataResult<&[Row]> {
        sort_by_column(&mut self.dataset, column, ascending)?;
        Ok(&self.dataset.rows)
    }

    /// Move one row to a new position and return the new ordering.
    pub fn move_row(&mut self, from: usize, to: usize) -> &[Row] {
        transform::move_row(&mut self.dataset, from, to);
        &self.dataset.rows
    }

    /// Partition row ids by per-attribute ranges. Read-only, so it can run
    /// freely between mutations.
    pub fn filter(&self, ranges: &[Option<ValueRange>]) -> DataResult<FilterPartition> {
        filter_by_ranges(&self.dataset, ranges)
    }

    /// Numeric extent of the named column.
    pub fn column_extent(&self, column: &str) -> DataResult<Option<ValueRange>> {
        transform::column_extent(&self.dataset, column)
    }

    /// Serialize the current dataset as CSV using the origin's separator.
    pub fn to_csv(&self) -> String {
        write_csv_content(&self.dataset, self.dataset.delimiter())
    }

    /// Serialize the current dataset as pretty row-oriented JSON.
    pub fn to_json(&self) -> String {
        write_json_content(&self.dataset)
    }
}
