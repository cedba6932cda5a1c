//! Snapshot tests using the insta crate.
//!
//! Serialized output and error text are pinned with inline snapshots, so
//! the expected value sits next to the assertion. To update after an
//! intentional format change:
//! ```sh
//! cargo insta test --accept
//! ```
//!
//! Or review changes interactively:
//! ```sh
//! cargo insta review
//! ```

use crate::helpers::{DatasetBuilder, PEOPLE_CSV, engine_with, num, text};
use vizdata::{CellValue, DataError};

// ============================================================================
// Serialized Output Tests
// ============================================================================

#[test]
fn snapshot_csv_output() {
    let engine = engine_with(PEOPLE_CSV);
    insta::assert_snapshot!(engine.to_csv(), @r###"
    id,height,weight
    r0,170,70
    r1,160,60
    r2,180,80
    "###);
}

#[test]
fn snapshot_csv_output_keeps_detected_separator() {
    let engine = engine_with("id|score\na|1.5\nb|2");
    insta::assert_snapshot!(engine.to_csv(), @r###"
    id|score
    a|1.5
    b|2
    "###);
}

#[test]
fn snapshot_json_output() {
    let engine = engine_with(PEOPLE_CSV);
    insta::assert_snapshot!(engine.to_json(), @r###"
    [
      {
        "id": "r0",
        "height": 170,
        "weight": 70
      },
      {
        "id": "r1",
        "height": 160,
        "weight": 60
      },
      {
        "id": "r2",
        "height": 180,
        "weight": 80
      }
    ]
    "###);
}

// ============================================================================
// Dataset Serialization Tests
// ============================================================================

#[test]
fn snapshot_dataset_serialization() {
    let dataset = DatasetBuilder::new()
        .columns(&["id", "v"])
        .row(vec![text("r0"), num(1.5)])
        .row(vec![text("r1"), CellValue::Null])
        .build();

    insta::assert_json_snapshot!(dataset, @r###"
    {
      "columns": [
        {
          "name": "id",
          "dtype": "Text"
        },
        {
          "name": "v",
          "dtype": "Text"
        }
      ],
      "rows": [
        [
          {
            "Text": "r0"
          },
          {
            "Number": 1.5
          }
        ],
        [
          {
            "Text": "r1"
          },
          "Null"
        ]
      ],
      "origin": "Inline"
    }
    "###);
}

// ============================================================================
// Error Message Tests
// ============================================================================

#[test]
fn snapshot_separator_error() {
    let err = vizdata::engine::sniff_delimiter("one\ntwo\nthree").unwrap_err();
    insta::assert_snapshot!(err, @"could not determine separator");
}

#[test]
fn snapshot_json_shape_error() {
    let err = vizdata::engine::parse_json_content("\"just a string\"").unwrap_err();
    insta::assert_snapshot!(err, @"could not parse JSON data");
}

#[test]
fn snapshot_column_not_found_error() {
    let err = DataError::ColumnNotFound {
        name: "wingspan".to_string(),
        available: vec![
            "id".to_string(),
            "height".to_string(),
            "weight".to_string(),
        ],
    };
    insta::assert_snapshot!(
        err,
        @"column 'wingspan' not found; available columns: id, height, weight"
    );
}

#[test]
fn snapshot_unknown_format_error() {
    insta::assert_snapshot!(
        DataError::UnknownFormat,
        @"unknown data format: input is neither valid JSON nor consistent CSV"
    );
}

#[test]
fn snapshot_range_count_mismatch_error() {
    insta::assert_snapshot!(
        DataError::RangeCountMismatch {
            expected: 2,
            got: 5
        },
        @"expected 2 filter ranges (one per non-id column), got 5"
    );
}
