use ignore::WalkBuilder;
use std::path::{Path, PathBuf};

use crate::config::ScanOptions;

/// Scanner for finding SBOM JSON documents under a directory
pub struct SbomScanner {
    root: PathBuf,
    options: ScanOptions,
}

impl SbomScanner {
    pub fn new(root: impl AsRef<Path>, options: ScanOptions) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
            options,
        }
    }

    /// Scan for `.json` documents (.gitignore aware)
    ///
    /// Output is sorted lexicographically so report columns stay stable
    /// across runs and platforms.
    pub fn scan(&self) -> Vec<PathBuf> {
        let mut files = Vec::new();

        let mut builder = WalkBuilder::new(&self.root);
        builder
            .hidden(true) // do not analyze hidden files by default
            .git_ignore(self.options.respect_gitignore)
            .git_global(self.options.respect_gitignore)
            .git_exclude(self.options.respect_gitignore)
            .max_depth(self.options.max_depth);

        for result in builder.build() {
            match result {
                Ok(entry) => {
                    let Some(file_type) = entry.file_type() else {
                        continue;
                    };
                    if !file_type.is_file() {
                        continue;
                    }

                    let path = entry.path();
                    if !Self::is_json_document(path) {
                        continue;
                    }

                    if let Some(limit) = self.options.max_file_size_bytes {
                        if let Ok(meta) = entry.metadata() {
                            if meta.len() > limit {
                                log::debug!(
                                    "Skipping large file {} ({} bytes > {})",
                                    path.display(),
                                    meta.len(),
                                    limit
                                );
                                continue;
                            }
                        }
                    }

                    files.push(path.to_path_buf());
                }
                Err(e) => log::warn!("Failed to read entry: {e}"),
            }
        }

        files.sort();
        log::info!("Found {} SBOM documents", files.len());
        files
    }

    fn is_json_document(path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.eq_ignore_ascii_case("json"))
            .unwrap_or(false)
    }
}

/// File identifier used in inventories and reports: the path relative to
/// the scan root, falling back to the full path for foreign entries.
pub(crate) fn file_id(root: &Path, path: &Path) -> String {
    path.strip_prefix(root)
        .unwrap_or(path)
        .display()
        .to_string()
}
