//! Clean options

use std::path::PathBuf;

/// Options for the clean command
#[derive(Debug, Clone, Default)]
pub struct CleanOptions {
    /// Write the cleaned text here instead of rewriting the source
    pub output: Option<PathBuf>,
    /// Report only; never write
    pub check: bool,
}

impl CleanOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_output(mut self, output: Option<PathBuf>) -> Self {
        self.output = output;
        self
    }

    pub fn with_check(mut self, check: bool) -> Self {
        self.check = check;
        self
    }
}
