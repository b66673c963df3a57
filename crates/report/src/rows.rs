use sbomscout_inventory::{Analysis, ConsistencyStatus};
use serde::{Deserialize, Serialize};

/// Placeholder for a file that did not report a package
pub const NOT_FOUND: &str = "-";

/// One report row per package, flattened for tabular export
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackageRow {
    pub name: String,
    pub status: ConsistencyStatus,
    pub detection_count: usize,
    pub unique_version_count: usize,

    /// Distinct non-empty versions, sorted and comma-joined
    pub versions_found: String,

    /// Contributing files, comma-joined in input order
    pub files_involved: String,

    /// One cell per input file: that file's version or the placeholder
    pub cells: Vec<String>,
}

/// Flatten an analysis into rows, ordered by detection count (descending)
/// then name. Cells align with `analysis.files`.
#[must_use]
pub fn package_rows(analysis: &Analysis) -> Vec<PackageRow> {
    let mut rows: Vec<PackageRow> = analysis
        .records
        .iter()
        .map(|record| {
            let cells = analysis
                .files
                .iter()
                .map(|file| {
                    record
                        .versions_by_file
                        .get(file)
                        .cloned()
                        .unwrap_or_else(|| NOT_FOUND.to_string())
                })
                .collect();

            PackageRow {
                name: record.name.clone(),
                status: record.status,
                detection_count: record.detection_count,
                unique_version_count: record.unique_versions.len(),
                versions_found: record.unique_versions.join(", "),
                files_involved: record.files.join(", "),
                cells,
            }
        })
        .collect();

    rows.sort_by(|a, b| {
        b.detection_count
            .cmp(&a.detection_count)
            .then_with(|| a.name.cmp(&b.name))
    });
    rows
}
