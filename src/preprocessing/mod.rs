pub mod enricher;
pub mod pipeline;
pub mod schema;

pub use enricher::FeatureEnricher;
pub use pipeline::{prepare_catalog, PrepConfig, PrepOutcome, PrepPipeline, PrepReport};
pub use schema::normalize_types;
