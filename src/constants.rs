//! Crate-wide constants.
//!
//! Centralizes the magic numbers of parsing and display so the values live
//! in one place and carry their meaning.

// ============================================================================
// CSV Sniffing
// ============================================================================

/// Separator candidates tried by delimiter sniffing, in priority order.
/// The first candidate that splits the sampled lines consistently wins.
pub const DELIMITER_CANDIDATES: [char; 4] = [',', ';', '\t', '|'];

/// Number of leading lines sampled when sniffing the delimiter.
pub const SNIFF_LINE_COUNT: usize = 5;

/// A candidate only wins when it yields more than this many fields per line.
/// One field means the candidate never occurred in the sample.
pub const MIN_FIELDS_PER_LINE: usize = 1;

// ============================================================================
// Display
// ============================================================================

/// Rows shown by the `inspect` binary before truncating.
pub const PREVIEW_ROW_COUNT: usize = 10;
