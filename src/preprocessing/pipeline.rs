use anyhow::{Context, Result};
use chrono::{Datelike, Utc};
use polars::prelude::DataFrame;
use serde::Serialize;
use std::path::Path;
use tracing::info;

use crate::catalog::{
    CAST_COUNT, CONTENT_AGE, CONTINENT, GENRE_COUNT, IS_KIDS_CONTENT, PANDEMIC_CONTENT, SENTINEL,
    TIME_TO_NETFLIX,
};
use crate::io::loaders::CatalogLoader;
use crate::io::writers;
use crate::preprocessing::enricher::FeatureEnricher;
use crate::preprocessing::schema;
use crate::report;
use crate::transformations::{cleaning, filtering};

/// Configuration for the preparation pipeline
pub struct PrepConfig {
    /// Anchor year for `content_age`; the current UTC year by default
    pub current_year: i32,
}

impl Default for PrepConfig {
    fn default() -> Self {
        Self {
            current_year: Utc::now().year(),
        }
    }
}

/// Per-stage counts gathered across a run
#[derive(Debug, Clone, Default, Serialize)]
pub struct PrepReport {
    pub rows_loaded: usize,
    pub inconsistent_rows: usize,
    pub exact_duplicates: usize,
    pub redundant_removed: usize,
    pub rows_final: usize,
}

/// Result of a pipeline run
pub struct PrepOutcome {
    pub dataframe: DataFrame,
    pub report: PrepReport,
}

/// The preparation pipeline: fixed stage order, each stage consuming a
/// table value and returning the next one.
///
/// ```no_run
/// use catalog_prep::PrepPipeline;
/// use std::path::Path;
///
/// # fn main() -> anyhow::Result<()> {
/// let outcome = PrepPipeline::new()
///     .run_file(Path::new("netflix_titles.csv"), Path::new("netflix_titles_updated.xlsx"))?;
/// println!("{} rows written", outcome.report.rows_final);
/// # Ok(())
/// # }
/// ```
pub struct PrepPipeline {
    config: PrepConfig,
}

impl PrepPipeline {
    /// Create a pipeline with default configuration
    pub fn new() -> Self {
        Self {
            config: PrepConfig::default(),
        }
    }

    /// Create a pipeline with custom configuration
    pub fn with_config(config: PrepConfig) -> Self {
        Self { config }
    }

    /// Load `input`, run every stage, and persist the result to `output`.
    /// Any stage failure aborts before the output file is touched.
    pub fn run_file(&self, input: &Path, output: &Path) -> Result<PrepOutcome> {
        info!(path = %input.display(), "loading catalog");
        let loaded = CatalogLoader::load_from_csv(input).context("Failed to load catalog CSV")?;
        println!("Dataset loaded successfully: {} rows\n", loaded.num_rows);

        let outcome = self.process(loaded.dataframe)?;

        writers::write_xlsx(&outcome.dataframe, output)
            .context("Failed to write output workbook")?;
        println!("Updated dataset saved as '{}'", output.display());

        Ok(outcome)
    }

    /// Run the cleaning and feature stages over an already-loaded table.
    pub fn process(&self, df: DataFrame) -> Result<PrepOutcome> {
        let mut counts = PrepReport {
            rows_loaded: df.height(),
            ..Default::default()
        };

        // Schema repair
        println!("Initial data types:");
        report::print_schema(&df);
        let df = schema::normalize_types(df).context("Schema normalization failed")?;
        println!("\nSchema after validation:");
        report::print_schema(&df);
        println!();
        info!(rows = df.height(), "schema normalized");

        // Cross-field consistency: release year must not postdate the add year
        let df = filtering::with_added_year(df)?;
        let offenders = filtering::find_inconsistent(&df)?;
        counts.inconsistent_rows = offenders.height();
        if offenders.height() > 0 {
            println!("Found {} inconsistent records:", offenders.height());
            report::print_sample(&offenders, 5);
            println!("Invalid records removed\n");
        } else {
            println!("No logical inconsistencies found\n");
        }
        let df = filtering::drop_inconsistent(df)?;

        // Duplicates
        counts.exact_duplicates = cleaning::count_exact_duplicates(&df)?;
        println!("Exact duplicate rows found: {}\n", counts.exact_duplicates);

        let collisions = cleaning::find_title_collisions(&df, 10)?;
        if collisions.height() > 0 {
            println!("Duplicate titles across regions detected:");
            report::print_sample(&collisions, 10);
        } else {
            println!("No duplicate titles found");
        }

        println!("\nMost frequently repeated titles:");
        let top_titles = cleaning::most_frequent_titles(&df, 10)?;
        report::print_sample(&top_titles, 10);

        let before = df.height();
        let df = cleaning::drop_redundant(&df)?;
        counts.redundant_removed = before - df.height();
        println!(
            "\nRemoved {} redundant duplicate records\n",
            counts.redundant_removed
        );
        info!(
            removed = counts.redundant_removed,
            rows = df.height(),
            "duplicates resolved"
        );

        // Missing values
        let df = cleaning::fill_missing(&df, SENTINEL)?;
        println!("Missing values after cleaning:");
        report::print_null_counts(&df);
        println!();

        // Feature derivation
        let enricher = FeatureEnricher::with_current_year(self.config.current_year);
        let df = enricher.enrich(df).context("Feature derivation failed")?;
        info!(rows = df.height(), "features derived");

        println!("Engineered features preview:");
        let preview = df.select([
            CONTENT_AGE,
            TIME_TO_NETFLIX,
            GENRE_COUNT,
            CAST_COUNT,
            IS_KIDS_CONTENT,
            CONTINENT,
            PANDEMIC_CONTENT,
        ])?;
        report::print_sample(&preview, 5);

        println!("\nFinal dataset description:");
        report::print_summary(&df)?;

        counts.rows_final = df.height();
        Ok(PrepOutcome {
            dataframe: df,
            report: counts,
        })
    }
}

impl Default for PrepPipeline {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience function: run the whole pipeline between two file paths.
pub fn prepare_catalog(input: &Path, output: &Path) -> Result<PrepOutcome> {
    PrepPipeline::new().run_file(input, output)
}
