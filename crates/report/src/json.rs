use sbomscout_inventory::Analysis;
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::rows::{package_rows, PackageRow};

/// File name of the JSON artifact
pub const ANALYSIS_JSON: &str = "analysis_result.json";

/// Archival dump of one analysis run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JsonReport {
    /// Input files in scan order; row cells align with this list
    pub files: Vec<String>,
    pub rows: Vec<PackageRow>,
}

impl JsonReport {
    #[must_use]
    pub fn from_analysis(analysis: &Analysis) -> Self {
        Self {
            files: analysis.files.clone(),
            rows: package_rows(analysis),
        }
    }
}

/// Write the JSON dump into `out_dir`; returns the written path
pub fn write_json_report(analysis: &Analysis, out_dir: &Path) -> Result<PathBuf> {
    fs::create_dir_all(out_dir)?;
    let path = out_dir.join(ANALYSIS_JSON);
    let file = File::create(&path)?;
    serde_json::to_writer_pretty(BufWriter::new(file), &JsonReport::from_analysis(analysis))?;
    Ok(path)
}
