//! # SBOM Scout Inventory
//!
//! Schema-agnostic package inventory extraction and cross-file consistency
//! analysis for SBOM JSON documents.
//!
//! ## Pipeline
//!
//! ```text
//! Directory
//!     │
//!     ├──> Scanner (.gitignore aware)
//!     │      └─> *.json documents
//!     │
//!     ├──> Extractor (heuristic tree walk)
//!     │      └─> per-file name → version inventory
//!     │
//!     └──> Aggregator (cross-file merge)
//!            └─> master inventory + consistency records
//! ```
//!
//! No SBOM standard is assumed: the extractor walks unannotated JSON trees
//! and picks up name/version pairs wherever key names suggest them.
//!
//! ## Example
//!
//! ```no_run
//! use sbomscout_inventory::{analyze_directory, ScanOptions};
//!
//! fn main() -> sbomscout_inventory::Result<()> {
//!     let analysis = analyze_directory("./sboms", &ScanOptions::default())?;
//!     for record in &analysis.records {
//!         println!("{}: {}", record.name, record.status);
//!     }
//!     Ok(())
//! }
//! ```

mod aggregator;
mod config;
mod error;
mod extractor;
mod model;
mod scanner;
mod schema;

pub use aggregator::{analyze_directory, InventoryAggregator};
pub use config::ScanOptions;
pub use error::{InventoryError, Result};
pub use extractor::extract_packages;
pub use model::{classify, Analysis, ConsistencyRecord, ConsistencyStatus};
pub use scanner::SbomScanner;
pub use schema::{
    survey_directory, survey_document, FieldProfile, FileSchema, SchemaSurvey, SurveySummary,
};
