use polars::prelude::*;
use std::path::Path;

use crate::catalog::REQUIRED_COLUMNS;
use crate::error::{PrepError, PrepResult};
use crate::transformations::cleaning;

/// Result of loading catalog data
#[derive(Debug)]
pub struct CatalogLoadResult {
    pub dataframe: DataFrame,
    pub num_rows: usize,
}

impl CatalogLoadResult {
    pub fn new(dataframe: DataFrame) -> Self {
        let num_rows = dataframe.height();
        Self { dataframe, num_rows }
    }
}

/// Loader for the delimited catalog file
pub struct CatalogLoader;

impl CatalogLoader {
    /// Load the catalog from a CSV file with a header row.
    ///
    /// Schema inference scans the whole file so a column with mixed content
    /// arrives as String and is repaired downstream instead of failing the
    /// read. A missing file, an unparsable file, or a missing required
    /// column all map to [`PrepError::Load`].
    pub fn load_from_csv(path: &Path) -> PrepResult<CatalogLoadResult> {
        if !path.exists() {
            return Err(PrepError::Load(format!(
                "input file not found: {}",
                path.display()
            )));
        }

        let df = CsvReadOptions::default()
            .with_has_header(true)
            .with_infer_schema_length(None)
            .try_into_reader_with_file_path(Some(path.to_path_buf()))
            .map_err(|e| PrepError::Load(format!("{}: {}", path.display(), e)))?
            .finish()
            .map_err(|e| PrepError::Load(format!("failed to parse {}: {}", path.display(), e)))?;

        let (is_valid, issues) = cleaning::validate_schema(&df, &REQUIRED_COLUMNS);
        if !is_valid {
            return Err(PrepError::Load(issues.join("; ")));
        }

        Ok(CatalogLoadResult::new(df))
    }
}
