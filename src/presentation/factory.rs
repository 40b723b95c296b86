//! Use Case Factory
//!
//! Creates sessions and use cases with infrastructure dependencies wired up.
//! This is the dependency injection point for the application.

use crate::application::{AssetSession, CleanUseCase, ExportUseCase};
use crate::config::Config;
use crate::error::AssetMapResult;
use crate::infrastructure::{JsonCollectionRepository, LocalFs, XlsxEncoder};

/// Type alias for the session backed by JSON files
pub type ConcreteSession = AssetSession<JsonCollectionRepository>;

/// Type alias for the xlsx export use case
pub type ConcreteExportUseCase = ExportUseCase<XlsxEncoder>;

/// Create a JSON repository for the configured collection files
pub fn create_repository(config: &Config) -> JsonCollectionRepository {
    JsonCollectionRepository::new(config.collection_paths())
}

/// Load a session from the configured data directory
///
/// Missing collection files count as empty collections.
pub fn create_session(config: &Config) -> AssetMapResult<ConcreteSession> {
    AssetSession::load(create_repository(config), config.mapping.delete_policy)
}

pub fn create_export_use_case() -> ConcreteExportUseCase {
    ExportUseCase::new(XlsxEncoder::new())
}

pub fn create_clean_use_case() -> CleanUseCase {
    CleanUseCase::new(LocalFs::new())
}
