use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use crate::error::Result;

/// Cross-file agreement classification for one package name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ConsistencyStatus {
    /// Detected in exactly one file
    Unique,
    /// Detected in several files with at most one distinct non-empty version
    Consistent,
    /// Detected in several files with more than one distinct non-empty version
    Conflict,
}

impl ConsistencyStatus {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Unique => "Unique",
            Self::Consistent => "Consistent",
            Self::Conflict => "Conflict",
        }
    }
}

impl fmt::Display for ConsistencyStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classify a package from its aggregate counts.
///
/// `Unique` takes precedence over the version comparison: a package seen in
/// a single file is `Unique` even when that file reported no version at all.
#[must_use]
pub const fn classify(detection_count: usize, unique_version_count: usize) -> ConsistencyStatus {
    if detection_count == 1 {
        ConsistencyStatus::Unique
    } else if unique_version_count > 1 {
        ConsistencyStatus::Conflict
    } else {
        ConsistencyStatus::Consistent
    }
}

/// Per-package record derived from the master inventory
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsistencyRecord {
    /// Package name
    pub name: String,

    /// Cross-file classification
    pub status: ConsistencyStatus,

    /// Number of files that reported this package
    pub detection_count: usize,

    /// Distinct non-empty versions, sorted
    pub unique_versions: Vec<String>,

    /// Files that reported this package, in input order
    pub files: Vec<String>,

    /// Reported version per file (empty string when the file had none)
    pub versions_by_file: BTreeMap<String, String>,
}

/// Result of one aggregation run over a document collection.
///
/// This is the stable contract consumed by reporting and visualization
/// collaborators. It is rebuilt from scratch on every run; nothing here is
/// mutated afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Analysis {
    /// Every scanned file in input order, parse failures included
    pub files: Vec<String>,

    /// Master inventory: package name -> (file id -> version)
    pub inventory: BTreeMap<String, BTreeMap<String, String>>,

    /// One record per detected package name
    pub records: Vec<ConsistencyRecord>,
}

impl Analysis {
    /// Look up the record for one package
    #[must_use]
    pub fn record(&self, name: &str) -> Option<&ConsistencyRecord> {
        self.records.iter().find(|record| record.name == name)
    }

    /// Records with conflicting versions
    pub fn conflicts(&self) -> impl Iterator<Item = &ConsistencyRecord> {
        self.records
            .iter()
            .filter(|record| record.status == ConsistencyStatus::Conflict)
    }

    /// Number of records carrying the given status
    #[must_use]
    pub fn status_count(&self, status: ConsistencyStatus) -> usize {
        self.records
            .iter()
            .filter(|record| record.status == status)
            .count()
    }

    /// Serialize the full analysis for archival or reuse
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_detection_is_unique_regardless_of_versions() {
        assert_eq!(classify(1, 0), ConsistencyStatus::Unique);
        assert_eq!(classify(1, 1), ConsistencyStatus::Unique);
    }

    #[test]
    fn divergent_versions_conflict() {
        assert_eq!(classify(2, 2), ConsistencyStatus::Conflict);
        assert_eq!(classify(3, 2), ConsistencyStatus::Conflict);
    }

    #[test]
    fn agreement_or_silence_is_consistent() {
        assert_eq!(classify(2, 1), ConsistencyStatus::Consistent);
        // no file reported a version at all
        assert_eq!(classify(3, 0), ConsistencyStatus::Consistent);
    }

    #[test]
    fn status_renders_as_report_labels() {
        assert_eq!(ConsistencyStatus::Unique.to_string(), "Unique");
        assert_eq!(ConsistencyStatus::Consistent.to_string(), "Consistent");
        assert_eq!(ConsistencyStatus::Conflict.to_string(), "Conflict");
    }
}
