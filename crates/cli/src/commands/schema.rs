use anyhow::{Context, Result};
use sbomscout_inventory::{survey_directory, ScanOptions};
use std::fs;
use std::path::Path;

pub(crate) fn run(dir: &Path, out: Option<&Path>, options: ScanOptions) -> Result<()> {
    let survey = survey_directory(dir, &options)
        .with_context(|| format!("surveying {}", dir.display()))?;
    let rendered = serde_json::to_string_pretty(&survey)?;

    match out {
        Some(path) => {
            fs::write(path, rendered)
                .with_context(|| format!("writing {}", path.display()))?;
            println!("Wrote {}", path.display());
        }
        None => println!("{rendered}"),
    }
    Ok(())
}
