//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `fs/` - Local file system with atomic writes
//! - `repositories/` - JSON collection repository
//! - `export/` - Workbook encoders

pub mod export;
pub mod fs;
pub mod repositories;

// Re-export for convenience
pub use export::XlsxEncoder;
pub use fs::LocalFs;
pub use repositories::{CollectionPaths, JsonCollectionRepository};
