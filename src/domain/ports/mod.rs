//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod collection_repository;
pub mod workbook_encoder;

pub use collection_repository::{Collection, CollectionRepository, StoreError, StoreResult};
pub use workbook_encoder::WorkbookEncoder;
