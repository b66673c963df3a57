use sbomscout_inventory::{Analysis, ConsistencyStatus};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::rows::package_rows;

/// File name of the Markdown artifact
pub const ANALYSIS_MARKDOWN: &str = "analysis_report.md";

/// Render a human-readable Markdown report of one analysis run
#[must_use]
pub fn render_markdown_report(analysis: &Analysis) -> String {
    let rows = package_rows(analysis);

    let mut md = String::new();
    md.push_str("# SBOM analysis report\n\n");
    md.push_str(&format!("- Files analyzed: `{}`\n", analysis.files.len()));
    md.push_str(&format!("- Packages detected: `{}`\n", rows.len()));
    md.push_str(&format!(
        "- Consistent: `{}`\n",
        analysis.status_count(ConsistencyStatus::Consistent)
    ));
    md.push_str(&format!(
        "- Conflicting: `{}`\n",
        analysis.status_count(ConsistencyStatus::Conflict)
    ));
    md.push_str(&format!(
        "- Unique to one file: `{}`\n\n",
        analysis.status_count(ConsistencyStatus::Unique)
    ));

    md.push_str("## All packages\n\n");
    md.push_str("| package | status | files | versions |\n");
    md.push_str("|---|---|---:|---|\n");
    for row in &rows {
        md.push_str(&format!(
            "| `{}` | {} | `{}` | {} |\n",
            escape_cell(&truncate_one_line(&row.name, 80)),
            row.status,
            row.detection_count,
            escape_cell(&truncate_one_line(&row.versions_found, 120)),
        ));
    }
    md.push('\n');

    md.push_str("## Version conflicts\n\n");
    let conflicts: Vec<_> = rows
        .iter()
        .filter(|row| row.status == ConsistencyStatus::Conflict)
        .collect();
    if conflicts.is_empty() {
        md.push_str("No conflicting packages.\n");
    } else {
        md.push_str("| package | versions | files |\n");
        md.push_str("|---|---|---|\n");
        for row in conflicts {
            md.push_str(&format!(
                "| `{}` | {} | {} |\n",
                escape_cell(&truncate_one_line(&row.name, 80)),
                escape_cell(&truncate_one_line(&row.versions_found, 120)),
                escape_cell(&truncate_one_line(&row.files_involved, 160)),
            ));
        }
    }

    md
}

/// Write the Markdown report into `out_dir`; returns the written path
pub fn write_markdown_report(analysis: &Analysis, out_dir: &Path) -> Result<PathBuf> {
    fs::create_dir_all(out_dir)?;
    let path = out_dir.join(ANALYSIS_MARKDOWN);
    fs::write(&path, render_markdown_report(analysis))?;
    Ok(path)
}

fn truncate_one_line(text: &str, max_chars: usize) -> String {
    let mut s = text.replace(['\n', '\r', '\t'], " ");
    s = s.split_whitespace().collect::<Vec<_>>().join(" ");
    if s.chars().count() <= max_chars {
        return s;
    }
    let truncated: String = s.chars().take(max_chars.saturating_sub(1)).collect();
    format!("{truncated}…")
}

fn escape_cell(text: &str) -> String {
    text.replace('|', "\\|")
}
