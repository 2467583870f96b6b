use polars::prelude::*;

use crate::catalog::{ADDED_YEAR, DATE_ADDED, RELEASE_YEAR, TITLE};

/// Append `added_year` as the calendar year of `date_added` (null when the
/// date is null).
pub fn with_added_year(df: DataFrame) -> PolarsResult<DataFrame> {
    df.lazy()
        .with_column(col(DATE_ADDED).dt().year().alias(ADDED_YEAR))
        .collect()
}

/// Rows whose release year postdates the year they entered the catalog,
/// projected to the columns worth reporting.
///
/// Rows with a null `added_year` are not offenders here; they fail the
/// keep-side comparison in [`drop_inconsistent`] instead.
pub fn find_inconsistent(df: &DataFrame) -> PolarsResult<DataFrame> {
    df.clone()
        .lazy()
        .filter(col(RELEASE_YEAR).gt(col(ADDED_YEAR)))
        .select([col(TITLE), col(RELEASE_YEAR), col(ADDED_YEAR)])
        .collect()
}

/// Keep only rows with `release_year <= added_year`. Comparison against a
/// null year is false, so those rows are dropped too.
pub fn drop_inconsistent(df: DataFrame) -> PolarsResult<DataFrame> {
    df.lazy()
        .filter(col(RELEASE_YEAR).lt_eq(col(ADDED_YEAR)))
        .collect()
}
