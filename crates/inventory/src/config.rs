use serde::{Deserialize, Serialize};

use crate::error::{InventoryError, Result};

const DEFAULT_MAX_FILE_SIZE_BYTES: u64 = 33_554_432; // 32 MB

/// Configuration for document discovery
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanOptions {
    /// Honor .gitignore, global gitignore and git excludes during the walk
    pub respect_gitignore: bool,

    /// Skip documents larger than this many bytes (None = no limit)
    pub max_file_size_bytes: Option<u64>,

    /// Walk depth limit (None = fully recursive, Some(1) = root directory only)
    pub max_depth: Option<usize>,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            respect_gitignore: true,
            max_file_size_bytes: Some(DEFAULT_MAX_FILE_SIZE_BYTES),
            max_depth: None,
        }
    }
}

impl ScanOptions {
    /// Options for a flat, single-directory listing
    #[must_use]
    pub fn flat() -> Self {
        Self {
            max_depth: Some(1),
            ..Default::default()
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.max_file_size_bytes == Some(0) {
            return Err(InventoryError::InvalidOptions(
                "max_file_size_bytes must be > 0".to_string(),
            ));
        }

        if self.max_depth == Some(0) {
            return Err(InventoryError::InvalidOptions(
                "max_depth must be > 0 (the root itself is depth 0)".to_string(),
            ));
        }

        Ok(())
    }
}
