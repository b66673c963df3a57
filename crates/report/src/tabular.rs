use csv::WriterBuilder;
use sbomscout_inventory::{Analysis, ConsistencyStatus};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::rows::{package_rows, PackageRow};

/// File names of the CSV artifacts
pub const ALL_PACKAGES_CSV: &str = "all_packages.csv";
pub const VERSION_CONFLICTS_CSV: &str = "version_conflicts.csv";
pub const SUMMARY_STATS_CSV: &str = "summary_stats.csv";

const BASE_COLUMNS: &[&str] = &[
    "Package_Name",
    "Status",
    "Detection_Count",
    "Unique_Version_Count",
    "Versions_Found",
    "Files_Involved",
];

/// Write the CSV workbook into `out_dir`: every package, the conflicting
/// ones on their own, and summary statistics. Returns the written paths.
pub fn write_csv_reports(analysis: &Analysis, out_dir: &Path) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(out_dir)?;
    let rows = package_rows(analysis);

    let all = out_dir.join(ALL_PACKAGES_CSV);
    write_rows(&all, &analysis.files, rows.iter())?;

    let conflicts = out_dir.join(VERSION_CONFLICTS_CSV);
    write_rows(
        &conflicts,
        &analysis.files,
        rows.iter()
            .filter(|row| row.status == ConsistencyStatus::Conflict),
    )?;

    let summary = out_dir.join(SUMMARY_STATS_CSV);
    write_summary(&summary, analysis)?;

    Ok(vec![all, conflicts, summary])
}

fn write_rows<'a>(
    path: &Path,
    files: &[String],
    rows: impl Iterator<Item = &'a PackageRow>,
) -> Result<()> {
    let mut writer = WriterBuilder::new().from_path(path)?;

    let mut header: Vec<&str> = BASE_COLUMNS.to_vec();
    header.extend(files.iter().map(String::as_str));
    writer.write_record(&header)?;

    for row in rows {
        let mut record: Vec<String> = vec![
            row.name.clone(),
            row.status.to_string(),
            row.detection_count.to_string(),
            row.unique_version_count.to_string(),
            row.versions_found.clone(),
            row.files_involved.clone(),
        ];
        record.extend(row.cells.iter().cloned());
        writer.write_record(&record)?;
    }

    writer.flush()?;
    Ok(())
}

fn write_summary(path: &Path, analysis: &Analysis) -> Result<()> {
    let mut writer = WriterBuilder::new().from_path(path)?;
    writer.write_record(["Metric", "Count"])?;

    let metrics = [
        ("Total Unique Packages", analysis.records.len()),
        (
            "Consistent Packages",
            analysis.status_count(ConsistencyStatus::Consistent),
        ),
        (
            "Conflicting Packages",
            analysis.status_count(ConsistencyStatus::Conflict),
        ),
        (
            "Unique to One File",
            analysis.status_count(ConsistencyStatus::Unique),
        ),
    ];
    for (metric, count) in metrics {
        let count = count.to_string();
        writer.write_record([metric, count.as_str()])?;
    }

    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use sbomscout_inventory::InventoryAggregator;
    use serde_json::json;
    use tempfile::tempdir;

    fn sample_analysis() -> Analysis {
        let mut aggregator = InventoryAggregator::new();
        aggregator.add_document("a.json", &json!({"name": "shared", "version": "1.0"}));
        aggregator.add_document("b.json", &json!({"name": "shared", "version": "2.0"}));
        aggregator.finish()
    }

    #[test]
    fn workbook_has_three_artifacts() {
        let temp = tempdir().unwrap();
        let written = write_csv_reports(&sample_analysis(), temp.path()).unwrap();

        assert_eq!(written.len(), 3);
        for path in &written {
            assert!(path.exists(), "{} missing", path.display());
        }
    }

    #[test]
    fn all_packages_carries_one_column_per_file() {
        let temp = tempdir().unwrap();
        write_csv_reports(&sample_analysis(), temp.path()).unwrap();

        let content = fs::read_to_string(temp.path().join(ALL_PACKAGES_CSV)).unwrap();
        let mut lines = content.lines();
        assert_eq!(
            lines.next().unwrap(),
            "Package_Name,Status,Detection_Count,Unique_Version_Count,Versions_Found,Files_Involved,a.json,b.json"
        );
        let row = lines.next().unwrap();
        assert!(row.starts_with("shared,Conflict,2,2,"));
        assert!(row.ends_with("1.0,2.0"));
    }

    #[test]
    fn conflicts_file_contains_only_conflict_rows() {
        let temp = tempdir().unwrap();

        let mut aggregator = InventoryAggregator::new();
        aggregator.add_document("a.json", &json!({"name": "calm", "version": "1.0"}));
        aggregator.add_document(
            "b.json",
            &json!([{"name": "calm", "version": "1.0"}, {"name": "angry", "version": "1.0"}]),
        );
        aggregator.add_document("c.json", &json!({"name": "angry", "version": "2.0"}));
        write_csv_reports(&aggregator.finish(), temp.path()).unwrap();

        let content = fs::read_to_string(temp.path().join(VERSION_CONFLICTS_CSV)).unwrap();
        let rows: Vec<&str> = content.lines().skip(1).collect();
        assert_eq!(rows.len(), 1);
        assert!(rows[0].starts_with("angry,Conflict"));
    }

    #[test]
    fn summary_counts_statuses() {
        let temp = tempdir().unwrap();
        write_csv_reports(&sample_analysis(), temp.path()).unwrap();

        let content = fs::read_to_string(temp.path().join(SUMMARY_STATS_CSV)).unwrap();
        assert!(content.contains("Total Unique Packages,1"));
        assert!(content.contains("Conflicting Packages,1"));
        assert!(content.contains("Consistent Packages,0"));
    }
}
