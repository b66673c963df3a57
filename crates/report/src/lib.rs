//! # SBOM Scout Report
//!
//! Exporters over the analysis contract: a CSV workbook (all packages,
//! conflicts only, summary statistics), a pretty-printed JSON dump for
//! archival, and a human-readable Markdown report. Each writer takes an
//! output directory and returns the paths it produced.

mod error;
mod json;
mod markdown;
mod rows;
mod tabular;

pub use error::{ReportError, Result};
pub use json::{write_json_report, JsonReport, ANALYSIS_JSON};
pub use markdown::{render_markdown_report, write_markdown_report, ANALYSIS_MARKDOWN};
pub use rows::{package_rows, PackageRow, NOT_FOUND};
pub use tabular::{
    write_csv_reports, ALL_PACKAGES_CSV, SUMMARY_STATS_CSV, VERSION_CONFLICTS_CSV,
};
