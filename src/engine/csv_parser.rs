//! CSV parsing and serialization
//!
//! Turns delimited text into a [`Dataset`] and back. Callers never configure
//! the separator; it is sniffed from the content (see [`sniff_delimiter`]).
//!
//! ## Field Splitting
//!
//! Fields are split on the bare separator with no quote handling: sniffing
//! decides the separator by comparing plain-split field counts, and a
//! quote-aware reader would disagree with that count. The writer emits
//! unquoted fields for the same reason, so the pair round-trips.

use crate::constants::{DELIMITER_CANDIDATES, MIN_FIELDS_PER_LINE, SNIFF_LINE_COUNT};
use crate::engine::error::{DataError, DataResult};
use crate::types::{CellValue, DataOrigin, Dataset, Row};

/// Detect the separator by probing each candidate against the first
/// [`SNIFF_LINE_COUNT`] lines.
///
/// A candidate wins when every sampled line splits into the same field
/// count and that count is above [`MIN_FIELDS_PER_LINE`]. Candidates are
/// tried in [`DELIMITER_CANDIDATES`] order, so when several are consistent
/// the earlier one is chosen.
pub fn sniff_delimiter(content: &str) -> DataResult<char> {
    let sample: Vec<&str> = content.lines().take(SNIFF_LINE_COUNT).collect();
    if sample.is_empty() {
        return Err(DataError::EmptyInput);
    }

    for candidate in DELIMITER_CANDIDATES {
        let counts: Vec<usize> = sample
            .iter()
            .map(|line| line.split(candidate).count())
            .collect();
        let first = counts[0];
        if first > MIN_FIELDS_PER_LINE && counts.iter().all(|&c| c == first) {
            return Ok(candidate);
        }
    }

    Err(DataError::Separator)
}

/// Parse CSV content into a [`Dataset`].
///
/// The first line provides the column names (trimmed, never coerced to
/// numbers); the remaining non-blank lines become rows. Only surrounding
/// line terminators are stripped before splitting, so spacing inside the
/// first and last cells survives. Column types are inferred from the
/// parsed cells.
pub fn parse_csv_content(content: &str) -> DataResult<Dataset> {
    if content.trim().is_empty() {
        return Err(DataError::EmptyInput);
    }
    // The split text loses only its surrounding line terminators; trailing
    // spaces belong to the last cell
    let content = content.trim_matches(['\r', '\n']);

    let delimiter = sniff_delimiter(content)?;

    let mut lines = content.lines().filter(|line| !line.trim().is_empty());
    let header_line = lines.next().ok_or(DataError::EmptyInput)?;
    let names: Vec<String> = header_line
        .split(delimiter)
        .map(|name| name.trim().to_string())
        .collect();

    let rows: Vec<Row> = lines
        .map(|line| line.split(delimiter).map(parse_cell).collect())
        .collect();

    Ok(Dataset::from_parts(names, rows, DataOrigin::Csv { delimiter }))
}

/// Coerce one raw field: text that parses entirely as a float becomes a
/// number, everything else (including the empty field) stays text with its
/// original spacing.
fn parse_cell(raw: &str) -> CellValue {
    let candidate = raw.trim();
    if !candidate.is_empty() {
        if let Ok(n) = candidate.parse::<f64>() {
            return CellValue::Number(n);
        }
    }
    CellValue::Text(raw.to_string())
}

/// Convert a [`Dataset`] back to CSV text: header line plus one line per
/// row, fields joined with `delimiter`, no trailing newline.
///
/// Fields are written unquoted; a cell that itself contains the delimiter
/// will not survive a round trip.
pub fn write_csv_content(dataset: &Dataset, delimiter: char) -> String {
    let sep = delimiter.to_string();
    let mut lines = Vec::with_capacity(dataset.rows.len() + 1);

    lines.push(dataset.column_names().join(&sep));

    for row in &dataset.rows {
        let cells: Vec<String> = row.iter().map(|cell| cell.to_string()).collect();
        lines.push(cells.join(&sep));
    }

    lines.join("\n")
}
