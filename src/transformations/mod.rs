//! Data transformation and cleaning utilities.
//!
//! This module provides the table-level cleaning operations of the
//! pipeline: the cross-field consistency rule, duplicate reporting and
//! removal, and sentinel filling of missing cells.
//!
//! # Modules
//!
//! - [`cleaning`]: duplicate handling, missing-value filling, schema checks
//! - [`filtering`]: the release-year/add-date consistency rule
//!
//! # Example
//!
//! ```no_run
//! use catalog_prep::transformations::{drop_redundant, fill_missing};
//! use polars::prelude::*;
//!
//! # fn example(df: DataFrame) -> PolarsResult<()> {
//! // At most one row per (title, type, country), first occurrence kept
//! let deduped = drop_redundant(&df)?;
//!
//! // Every remaining null cell becomes the sentinel
//! let filled = fill_missing(&deduped, "Unknown")?;
//! # Ok(())
//! # }
//! ```

pub mod cleaning;
pub mod filtering;

pub use cleaning::{
    count_exact_duplicates, drop_redundant, fill_missing, find_title_collisions,
    most_frequent_titles, validate_schema,
};
pub use filtering::{drop_inconsistent, find_inconsistent, with_added_year};
