use anyhow::Result;
use std::path::Path;
use tracing_subscriber::EnvFilter;

use catalog_prep::PrepPipeline;

const INPUT_PATH: &str = "netflix_titles.csv";
const OUTPUT_PATH: &str = "netflix_titles_updated.xlsx";

/// Diagnostics go through tracing; the stage reports themselves are plain
/// stdout and unaffected by the filter.
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    init_logging();

    let pipeline = PrepPipeline::new();
    let outcome = pipeline.run_file(Path::new(INPUT_PATH), Path::new(OUTPUT_PATH))?;

    tracing::info!(
        loaded = outcome.report.rows_loaded,
        written = outcome.report.rows_final,
        "pipeline finished"
    );
    Ok(())
}
