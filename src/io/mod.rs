//! File input and output.
//!
//! Loaders turn the delimited input file into a typed DataFrame with error
//! context attached; writers persist the final table as a workbook.
//!
//! # Example
//!
//! ```no_run
//! use catalog_prep::io::loaders::CatalogLoader;
//! use std::path::Path;
//!
//! let result = CatalogLoader::load_from_csv(Path::new("netflix_titles.csv"))
//!     .expect("Failed to load");
//! println!("Loaded {} rows", result.num_rows);
//! ```

pub mod loaders;
pub mod writers;


pub use loaders::{CatalogLoader, CatalogLoadResult};
pub use writers::write_xlsx;
