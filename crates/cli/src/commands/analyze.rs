use anyhow::{Context, Result};
use sbomscout_inventory::{analyze_directory, ConsistencyStatus, ScanOptions};
use std::path::Path;

use crate::flags::ReportFormat;

pub(crate) fn run(
    dir: &Path,
    out_dir: &Path,
    format: ReportFormat,
    options: ScanOptions,
) -> Result<()> {
    let analysis = analyze_directory(dir, &options)
        .with_context(|| format!("analyzing {}", dir.display()))?;

    println!(
        "Analyzed {} documents: {} packages, {} conflicts",
        analysis.files.len(),
        analysis.records.len(),
        analysis.status_count(ConsistencyStatus::Conflict)
    );

    let mut written = Vec::new();
    if format.includes_csv() {
        written.extend(sbomscout_report::write_csv_reports(&analysis, out_dir)?);
    }
    if format.includes_json() {
        written.push(sbomscout_report::write_json_report(&analysis, out_dir)?);
    }
    if format.includes_markdown() {
        written.push(sbomscout_report::write_markdown_report(&analysis, out_dir)?);
    }

    for path in written {
        println!("Wrote {}", path.display());
    }
    Ok(())
}
