//! Input resolution: formats, file references and the text-fetch seam.
//!
//! The engine accepts either literal CSV/JSON text or a reference to it (a
//! filesystem path by default). Resolution goes through the [`TextFetcher`]
//! trait so hosts can substitute their own transport without touching the
//! parsers.

use crate::engine::error::DataResult;

/// Supported input formats.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Format {
    Csv,
    Json,
}

impl Format {
    pub fn as_str(&self) -> &'static str {
        match self {
            Format::Csv => "CSV",
            Format::Json => "JSON",
        }
    }
}

/// External collaborator that turns a reference into text.
pub trait TextFetcher {
    fn fetch(&self, reference: &str) -> DataResult<String>;
}

/// Filesystem-backed fetcher: the reference is a path.
#[derive(Clone, Copy, Debug, Default)]
pub struct FsFetcher;

impl TextFetcher for FsFetcher {
    fn fetch(&self, reference: &str) -> DataResult<String> {
        Ok(std::fs::read_to_string(reference.trim())?)
    }
}

/// True when `input` names a file with the given extension rather than
/// holding content itself: a non-empty single line ending with the
/// extension, case-insensitively.
///
/// Content can legitimately contain ".csv" inside a cell, so the single-line
/// check matters; actual data always spans multiple lines or fails the
/// suffix test.
pub fn is_file_reference(input: &str, extension: &str) -> bool {
    let trimmed = input.trim();
    !trimmed.is_empty() && !trimmed.contains('\n') && trimmed.to_lowercase().ends_with(extension)
}

/// Sniff the format from a file-reference suffix. Literal content returns
/// `None`; the caller then falls back to trying the parsers directly.
pub fn detect_format(input: &str) -> Option<Format> {
    if is_file_reference(input, ".csv") {
        Some(Format::Csv)
    } else if is_file_reference(input, ".json") {
        Some(Format::Json)
    } else {
        None
    }
}
