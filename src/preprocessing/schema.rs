//! Type repair for the two columns the rest of the pipeline depends on.
//!
//! `date_added` is parsed permissively (unparsable cells become null and are
//! left for the consistency filter to drop); `release_year` is cast strictly
//! (one malformed value aborts the run). The asymmetry is deliberate and
//! preserved from the upstream dataset's handling.

use polars::prelude::*;

use crate::catalog::{DATE_ADDED, DATE_ADDED_FORMAT, RELEASE_YEAR};
use crate::error::{PrepError, PrepResult};

/// Coerce `date_added` to Date and `release_year` to Int64. Columns already
/// carrying the canonical dtype pass through untouched.
pub fn normalize_types(df: DataFrame) -> PrepResult<DataFrame> {
    let df = normalize_date_added(df)?;
    normalize_release_year(df)
}

fn normalize_date_added(df: DataFrame) -> PrepResult<DataFrame> {
    if df.column(DATE_ADDED)?.dtype() == &DataType::Date {
        return Ok(df);
    }

    // Cells in the raw file carry stray surrounding whitespace; strip before
    // parsing so only genuinely malformed values null out.
    let parsed = df
        .lazy()
        .with_column(
            col(DATE_ADDED)
                .cast(DataType::String)
                .str()
                .strip_chars(lit(NULL))
                .str()
                .to_date(StrptimeOptions {
                    format: Some(DATE_ADDED_FORMAT.into()),
                    strict: false,
                    ..Default::default()
                })
                .alias(DATE_ADDED),
        )
        .collect()?;

    Ok(parsed)
}

fn normalize_release_year(mut df: DataFrame) -> PrepResult<DataFrame> {
    if df.column(RELEASE_YEAR)?.dtype() == &DataType::Int64 {
        return Ok(df);
    }

    let cast = df
        .column(RELEASE_YEAR)?
        .as_materialized_series()
        .strict_cast(&DataType::Int64)
        .map_err(|e| PrepError::SchemaCast(format!("{}: {}", RELEASE_YEAR, e)))?;
    df.with_column(cast)?;

    Ok(df)
}
