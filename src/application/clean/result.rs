//! Clean result types

use std::path::PathBuf;

use crate::domain::services::CleanReport;

/// Result of a clean operation
#[derive(Debug, Clone)]
pub struct CleanResult {
    /// File that was read
    pub source: PathBuf,
    /// File that was written, if any
    pub written: Option<PathBuf>,
    /// Replacement counts
    pub report: CleanReport,
}

impl CleanResult {
    /// Whether cleaning changed the text
    pub fn changed(&self) -> bool {
        !self.report.is_clean()
    }
}
