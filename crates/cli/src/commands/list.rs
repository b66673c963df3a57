use anyhow::{ensure, Result};
use sbomscout_inventory::{SbomScanner, ScanOptions};
use std::path::Path;

pub(crate) fn run(dir: &Path, options: ScanOptions) -> Result<()> {
    ensure!(dir.is_dir(), "not a directory: {}", dir.display());

    let files = SbomScanner::new(dir, options).scan();
    for path in &files {
        println!("{}", path.display());
    }
    println!("{} documents", files.len());
    Ok(())
}
