//! Clean Use Case
//!
//! Orchestrates reading, cleaning and rewriting one file.

use std::path::Path;

use crate::domain::services::clean_text;
use crate::error::{AssetMapError, AssetMapResult};
use crate::infrastructure::fs::LocalFs;

use super::options::CleanOptions;
use super::result::CleanResult;

/// Clean use case - replaces invisible characters with plain spaces
#[derive(Debug, Default)]
pub struct CleanUseCase {
    fs: LocalFs,
}

impl CleanUseCase {
    pub fn new(fs: LocalFs) -> Self {
        Self { fs }
    }

    /// Clean `path`
    ///
    /// In place, the file is only rewritten when something was replaced.
    /// With an explicit output the cleaned text is always written there.
    pub fn execute(&self, path: &Path, options: &CleanOptions) -> AssetMapResult<CleanResult> {
        let text = self.fs.read_to_string(path).map_err(|e| failed(path, e))?;
        let (cleaned, report) = clean_text(&text);

        let target = match (&options.output, report.is_clean()) {
            _ if options.check => None,
            (Some(output), _) => Some(output.clone()),
            (None, false) => Some(path.to_path_buf()),
            (None, true) => None,
        };

        if let Some(target) = &target {
            self.fs
                .write_atomic(target, cleaned.as_bytes())
                .map_err(|e| failed(target, e))?;
        }

        tracing::info!(
            path = %path.display(),
            replaced = report.total(),
            written = target.is_some(),
            "text cleaned"
        );
        Ok(CleanResult {
            source: path.to_path_buf(),
            written: target,
            report,
        })
    }
}

fn failed(path: &Path, err: std::io::Error) -> AssetMapError {
    AssetMapError::Clean {
        path: path.to_path_buf(),
        message: err.to_string(),
    }
}
