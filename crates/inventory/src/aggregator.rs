use serde_json::Value;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use crate::config::ScanOptions;
use crate::error::{InventoryError, Result};
use crate::extractor::extract_packages;
use crate::model::{classify, Analysis, ConsistencyRecord};
use crate::scanner::{file_id, SbomScanner};

/// Merges per-file inventories into a master inventory.
///
/// Files are independent: within one file's walk a later match for a name
/// overwrites an earlier one, but across files every (package, file) cell
/// is written exactly once and never overwritten.
#[derive(Debug, Default)]
pub struct InventoryAggregator {
    files: Vec<String>,
    master: BTreeMap<String, BTreeMap<String, String>>,
}

impl InventoryAggregator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse and merge one source.
    ///
    /// Unparseable sources are logged and contribute no entries, but the
    /// file id stays in the file list so reports keep one column per input.
    pub fn add_source(&mut self, file_id: impl Into<String>, source: &str) {
        let file_id = file_id.into();
        match serde_json::from_str::<Value>(source) {
            Ok(document) => self.add_document(file_id, &document),
            Err(err) => {
                log::warn!("Skipping unparseable document {file_id}: {err}");
                self.skip_file(file_id);
            }
        }
    }

    /// Merge one parsed document
    pub fn add_document(&mut self, file_id: impl Into<String>, document: &Value) {
        let file_id = file_id.into();
        for (name, version) in extract_packages(document) {
            self.master
                .entry(name)
                .or_default()
                .insert(file_id.clone(), version);
        }
        self.files.push(file_id);
    }

    /// Record a file that contributed nothing (unreadable or unparseable)
    pub fn skip_file(&mut self, file_id: impl Into<String>) {
        self.files.push(file_id.into());
    }

    /// Derive consistency records and yield the finished analysis
    #[must_use]
    pub fn finish(self) -> Analysis {
        let Self { files, master } = self;

        let records = master
            .iter()
            .map(|(name, by_file)| {
                let mut unique_versions: Vec<String> = by_file
                    .values()
                    .filter(|version| !version.is_empty())
                    .cloned()
                    .collect();
                unique_versions.sort();
                unique_versions.dedup();

                let involved: Vec<String> = files
                    .iter()
                    .filter(|file| by_file.contains_key(*file))
                    .cloned()
                    .collect();

                ConsistencyRecord {
                    name: name.clone(),
                    status: classify(by_file.len(), unique_versions.len()),
                    detection_count: by_file.len(),
                    unique_versions,
                    files: involved,
                    versions_by_file: by_file.clone(),
                }
            })
            .collect();

        Analysis {
            files,
            inventory: master,
            records,
        }
    }
}

/// Scan `dir` for SBOM documents and aggregate all of them.
///
/// Per-file read and parse failures are logged and skipped; only a missing
/// or invalid scan root is an error.
pub fn analyze_directory(dir: impl AsRef<Path>, options: &ScanOptions) -> Result<Analysis> {
    let dir = dir.as_ref();
    options.validate()?;

    let meta = fs::metadata(dir)?;
    if !meta.is_dir() {
        return Err(InventoryError::NotADirectory(dir.display().to_string()));
    }

    let mut aggregator = InventoryAggregator::new();
    for path in SbomScanner::new(dir, options.clone()).scan() {
        let id = file_id(dir, &path);
        match fs::read_to_string(&path) {
            Ok(source) => aggregator.add_source(id, &source),
            Err(err) => {
                log::warn!("Skipping unreadable document {}: {err}", path.display());
                aggregator.skip_file(id);
            }
        }
    }

    Ok(aggregator.finish())
}
