//! Dataset transformations: sorting, row reordering and range filtering.
//!
//! All operations here are stateless functions over an explicit dataset;
//! the engine facade forwards to them. Sorting and reordering mutate the
//! row order in place, filtering and extents are pure queries.

use crate::engine::error::{DataError, DataResult};
use crate::types::{CellValue, Dataset};

/// Inclusive numeric interval used by range filters and scale domains.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValueRange {
    /// Lower bound (inclusive)
    pub min: f64,
    /// Upper bound (inclusive)
    pub max: f64,
}

impl ValueRange {
    /// Create a new validated range
    ///
    /// Returns None for inverted or NaN bounds (both fail the comparison)
    pub fn new(min: f64, max: f64) -> Option<Self> {
        if !(min <= max) {
            return None;
        }
        Some(Self { min, max })
    }

    /// True when `value` lies within the bounds, inclusive on both ends
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    /// Width of the interval
    pub fn span(&self) -> f64 {
        self.max - self.min
    }
}

/// Identifier values split by a range filter, in dataset row order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterPartition {
    /// Ids of rows accepted by every active range
    pub inside: Vec<CellValue>,
    /// Ids of rows rejected by at least one active range
    pub outside: Vec<CellValue>,
}

/// Stable sort of the dataset's rows by the named column.
///
/// Numeric columns compare numerically and text columns lexically through
/// the total order on [`CellValue`]; `ascending = false` reverses the
/// comparator. The underlying sort is stable and only the comparator flips,
/// so rows with equal keys keep their prior relative order in both
/// directions.
pub fn sort_by_column(dataset: &mut Dataset, column: &str, ascending: bool) -> DataResult<()> {
    let index = dataset
        .column_index(column)
        .ok_or_else(|| DataError::ColumnNotFound {
            name: column.to_string(),
            available: dataset.column_names(),
        })?;

    dataset.rows.sort_by(|a, b| {
        let cmp = match (a.get(index), b.get(index)) {
            (Some(ca), Some(cb)) => ca.cmp(cb),
            (Some(_), None) => std::cmp::Ordering::Less,
            (None, Some(_)) => std::cmp::Ordering::Greater,
            (None, None) => std::cmp::Ordering::Equal,
        };
        if ascending { cmp } else { cmp.reverse() }
    });

    Ok(())
}

/// Move the row at `from` to position `to`, shifting the rows in between.
///
/// Splice semantics: the row is removed first and then reinserted, with
/// `to` clamped to the tail so an out-of-range target appends. An
/// out-of-range `from` leaves the dataset untouched.
pub fn move_row(dataset: &mut Dataset, from: usize, to: usize) {
    if from >= dataset.rows.len() {
        return;
    }
    let row = dataset.rows.remove(from);
    let target = to.min(dataset.rows.len());
    dataset.rows.insert(target, row);
}

/// Partition row identifiers by inclusive numeric ranges over the non-id
/// attributes.
///
/// `ranges[i]` constrains column `i + 1`; column 0 is the identifier and is
/// never filterable. `None` entries are inactive. A row lands inside when
/// the numeric reading (see [`CellValue::as_number`]) of every constrained
/// cell falls within its range; a cell with no numeric reading fails its
/// range.
///
/// The empty slice short-circuits to the all-inside partition. A non-empty
/// slice must carry exactly one entry per non-id column; once its length
/// checks out, a slice with no active range skips the row scan the same
/// way.
pub fn filter_by_ranges(
    dataset: &Dataset,
    ranges: &[Option<ValueRange>],
) -> DataResult<FilterPartition> {
    if ranges.is_empty() {
        return Ok(all_inside(dataset));
    }

    let expected = dataset.column_count().saturating_sub(1);
    if ranges.len() != expected {
        return Err(DataError::RangeCountMismatch {
            expected,
            got: ranges.len(),
        });
    }

    if ranges.iter().all(Option::is_none) {
        return Ok(all_inside(dataset));
    }

    let mut partition = FilterPartition::default();
    for row in &dataset.rows {
        let id = match row.first() {
            Some(cell) => cell.clone(),
            None => continue,
        };

        let accepted = ranges.iter().enumerate().all(|(i, range)| match range {
            Some(range) => row
                .get(i + 1)
                .and_then(|cell| cell.as_number())
                .map(|value| range.contains(value))
                .unwrap_or(false),
            None => true,
        });

        if accepted {
            partition.inside.push(id);
        } else {
            partition.outside.push(id);
        }
    }

    Ok(partition)
}

fn all_inside(dataset: &Dataset) -> FilterPartition {
    FilterPartition {
        inside: dataset.ids(),
        outside: Vec::new(),
    }
}

/// Numeric extent of the named column: the smallest and largest readings
/// across its cells, for building scale domains.
///
/// Cells without a numeric reading are skipped; returns `Ok(None)` when no
/// cell in the column has one.
pub fn column_extent(dataset: &Dataset, column: &str) -> DataResult<Option<ValueRange>> {
    let index = dataset
        .column_index(column)
        .ok_or_else(|| DataError::ColumnNotFound {
            name: column.to_string(),
            available: dataset.column_names(),
        })?;

    let mut extent: Option<ValueRange> = None;
    for row in &dataset.rows {
        if let Some(value) = row.get(index).and_then(|cell| cell.as_number()) {
            extent = Some(match extent {
                Some(r) => ValueRange {
                    min: r.min.min(value),
                    max: r.max.max(value),
                },
                None => ValueRange {
                    min: value,
                    max: value,
                },
            });
        }
    }

    Ok(extent)
}
