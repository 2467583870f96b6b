//! Console reporting for the pipeline stages.
//!
//! This output is the user-facing product of the run and intentionally uses
//! `println!`, not the tracing subscriber: it must show up regardless of log
//! level, and it is informational rather than a machine-parsed contract.

use polars::prelude::*;

/// Dump column names and dtypes, one line per column.
pub fn print_schema(df: &DataFrame) {
    for column in df.get_columns() {
        println!("  {:<24} {}", column.name(), column.dtype());
    }
}

/// Display-format the first `rows` rows of a table.
pub fn print_sample(df: &DataFrame, rows: usize) {
    println!("{}", df.head(Some(rows)));
}

/// Per-column null counts (all zero once the fill stage has run).
pub fn print_null_counts(df: &DataFrame) {
    for column in df.get_columns() {
        println!("  {:<24} {}", column.name(), column.null_count());
    }
}

/// Full descriptive summary: count, null count, mean/std/min/max and
/// percentiles where the column dtype supports them.
pub fn print_summary(df: &DataFrame) -> PolarsResult<()> {
    let summary = df.describe(None)?;
    println!("{}", summary);
    Ok(())
}
