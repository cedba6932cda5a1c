//! Tabular data engine for interactive chart and table components.
//!
//! Parses heterogeneous input into a canonical row/column model and keeps
//! it queryable: CSV with automatic delimiter sniffing, JSON in both the
//! row-oriented (array of objects) and column-oriented (object of arrays)
//! conventions, per-column type inference over mixed string/numeric data,
//! and the operations visual components need on top: stable sorting, row
//! reordering and multi-attribute range filtering.
//!
//! The entry point is [`TableEngine`]:
//!
//! ```ignore
//! let mut engine = TableEngine::new();
//! engine.load("name,score\nAlice,95.5\nBob,87", None)?;
//!
//! engine.sort("score", false)?;
//! let partition = engine.filter(&[Some(ValueRange::new(90.0, 100.0).unwrap())])?;
//! ```
//!
//! Rendering, scales and component composition live in the host; this
//! crate is the data layer underneath them.

pub mod constants;
pub mod engine;
pub mod types;

pub use engine::{
    DataError, DataResult, FilterPartition, Format, FsFetcher, TableEngine, TextFetcher,
    ValueRange,
};
pub use types::{CellValue, Column, ColumnType, DataOrigin, Dataset, Row};
