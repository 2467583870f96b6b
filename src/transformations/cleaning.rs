use polars::prelude::*;

use crate::catalog::{CONTENT_TYPE, COUNTRY, TITLE};

/// Number of rows that are redundant copies of an earlier, fully identical
/// row (all columns equal). Reported but not removed at this stage.
pub fn count_exact_duplicates(df: &DataFrame) -> PolarsResult<usize> {
    let distinct = df.unique::<&str, &str>(None, UniqueKeepStrategy::First, None)?;
    Ok(df.height() - distinct.height())
}

/// Rows participating in a title collision (two or more rows sharing a
/// title), projected for reporting and sorted by title.
pub fn find_title_collisions(df: &DataFrame, limit: u32) -> PolarsResult<DataFrame> {
    df.clone()
        .lazy()
        .filter(len().over([col(TITLE)]).gt(lit(1)))
        .select([col(TITLE), col(COUNTRY), col(CONTENT_TYPE)])
        .sort([TITLE], SortMultipleOptions::default())
        .limit(limit)
        .collect()
}

/// Titles ranked by occurrence count, descending.
pub fn most_frequent_titles(df: &DataFrame, limit: u32) -> PolarsResult<DataFrame> {
    df.clone()
        .lazy()
        .group_by([col(TITLE)])
        .agg([len().alias("count")])
        .sort(
            ["count"],
            SortMultipleOptions::default().with_order_descending(true),
        )
        .limit(limit)
        .collect()
}

/// Remove rows so at most one survives per (title, type, country).
///
/// Stable: among duplicates the first occurrence in current row order is
/// kept, the rest dropped.
pub fn drop_redundant(df: &DataFrame) -> PolarsResult<DataFrame> {
    let subset = [
        TITLE.to_string(),
        CONTENT_TYPE.to_string(),
        COUNTRY.to_string(),
    ];
    df.unique_stable(Some(&subset), UniqueKeepStrategy::First, None)
}

/// Replace every null cell with `sentinel`, across all columns.
///
/// A column holding any null is cast to String first, so a numeric column
/// with a missing value widens to text. Columns without nulls keep their
/// dtype untouched.
pub fn fill_missing(df: &DataFrame, sentinel: &str) -> PolarsResult<DataFrame> {
    let mut exprs = Vec::new();
    for column in df.get_columns() {
        if column.null_count() > 0 {
            exprs.push(
                col(column.name().as_str())
                    .cast(DataType::String)
                    .fill_null(lit(sentinel)),
            );
        }
    }

    if exprs.is_empty() {
        return Ok(df.clone());
    }

    df.clone().lazy().with_columns(exprs).collect()
}

/// Check that every required column is present.
pub fn validate_schema(df: &DataFrame, required_columns: &[&str]) -> (bool, Vec<String>) {
    let mut issues: Vec<String> = Vec::new();

    for col_name in required_columns {
        if df.column(col_name).is_err() {
            issues.push(format!("Missing required column: {}", col_name));
        }
    }

    (issues.is_empty(), issues)
}
