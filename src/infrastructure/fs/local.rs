//! Local File System Implementation
//!
//! Every write goes through a temporary file in the target directory that is
//! synced and then renamed over the destination.

use std::io::{self, Write};
use std::path::Path;

/// Local file system access
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFs;

impl LocalFs {
    pub fn new() -> Self {
        Self
    }

    pub fn read_to_string(&self, path: &Path) -> io::Result<String> {
        std::fs::read_to_string(path)
    }

    /// Write `content` to `path` atomically
    ///
    /// Parent directories are created as needed. The temporary file is
    /// removed on every error path when the `NamedTempFile` is dropped.
    pub fn write_atomic(&self, path: &Path, content: &[u8]) -> io::Result<()> {
        let parent = match path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => Path::new("."),
        };
        std::fs::create_dir_all(parent)?;

        let mut tmp = tempfile::NamedTempFile::new_in(parent)?;
        tmp.write_all(content)?;
        tmp.flush()?;
        tmp.as_file().sync_all()?;
        tmp.persist(path).map_err(|e| e.error)?;
        Ok(())
    }
}
