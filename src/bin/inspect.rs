//! Inspect a tabular data file: schema, preview rows and numeric extents.
//!
//! Usage:
//! ```sh
//! cargo run --bin inspect -- data.csv
//! RUST_LOG=debug cargo run --bin inspect -- rows.json
//! ```

use anyhow::{Context, Result, bail};
use vizdata::TableEngine;
use vizdata::constants::PREVIEW_ROW_COUNT;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let Some(path) = args.first() else {
        bail!("usage: inspect <file.csv | file.json>");
    };

    let mut engine = TableEngine::new();
    engine
        .load(path, None)
        .with_context(|| format!("failed to load {path}"))?;

    println!(
        "{}: {} rows x {} columns",
        path,
        engine.rows().len(),
        engine.columns().len()
    );

    let name_width = engine
        .columns()
        .iter()
        .map(|c| c.name.len())
        .max()
        .unwrap_or(0);

    println!("\ncolumns:");
    for column in engine.columns() {
        let extent = match engine.column_extent(&column.name)? {
            Some(range) => format!("  [{}, {}]", range.min, range.max),
            None => String::new(),
        };
        println!(
            "  {:<width$}  {}{}",
            column.name,
            column.dtype.as_str(),
            extent,
            width = name_width
        );
    }

    println!("\npreview:");
    for row in engine.raw_rows().iter().take(PREVIEW_ROW_COUNT + 1) {
        let cells: Vec<String> = row.iter().map(|cell| cell.to_string()).collect();
        println!("  {}", cells.join(" | "));
    }
    let hidden = engine.rows().len().saturating_sub(PREVIEW_ROW_COUNT);
    if hidden > 0 {
        println!("  ... {hidden} more rows");
    }

    Ok(())
}
