//! Catalog preparation pipeline: ingest a media catalog CSV, repair its
//! schema, drop inconsistent and duplicate records, fill missing values,
//! derive engineered columns, and persist the result as a workbook.

pub mod catalog;
pub mod error;
pub mod io;
pub mod preprocessing;
pub mod report;
pub mod transformations;

pub use error::{PrepError, PrepResult};
pub use preprocessing::pipeline::{
    prepare_catalog, PrepConfig, PrepOutcome, PrepPipeline, PrepReport,
};
