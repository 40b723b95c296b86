//! Export Use Case
//!
//! Encodes the session state into a workbook and writes it atomically.

use std::path::{Path, PathBuf};

use crate::application::AssetSession;
use crate::domain::ports::{CollectionRepository, WorkbookEncoder};
use crate::error::{AssetMapError, AssetMapResult};
use crate::infrastructure::fs::LocalFs;

/// Result of an export
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportResult {
    pub path: PathBuf,
    pub bytes: usize,
}

pub struct ExportUseCase<E: WorkbookEncoder> {
    encoder: E,
    fs: LocalFs,
}

impl<E: WorkbookEncoder> ExportUseCase<E> {
    pub fn new(encoder: E) -> Self {
        Self {
            encoder,
            fs: LocalFs::new(),
        }
    }

    /// Default file extension of the produced workbook
    pub fn extension(&self) -> &'static str {
        self.encoder.extension()
    }

    /// Encode and write; nothing is written when encoding fails
    pub fn execute<R: CollectionRepository>(
        &self,
        session: &AssetSession<R>,
        path: &Path,
    ) -> AssetMapResult<ExportResult> {
        let bytes = session.export(&self.encoder)?;
        self.fs.write_atomic(path, &bytes).map_err(|e| {
            AssetMapError::export(format!("cannot write {}: {}", path.display(), e))
        })?;

        tracing::info!(path = %path.display(), bytes = bytes.len(), "workbook written");
        Ok(ExportResult {
            path: path.to_path_buf(),
            bytes: bytes.len(),
        })
    }
}
