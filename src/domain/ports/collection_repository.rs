//! CollectionRepository port
//!
//! Loads and saves the three record collections that make up the system of
//! record. Implementations must replace a collection as a whole so a reader
//! never observes a half-written document.

use std::fmt;
use std::path::PathBuf;

use crate::domain::entities::{AssetMapping, FinancialAsset, PhysicalAsset};

pub type StoreResult<T> = Result<T, StoreError>;

/// The stored collections
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    FinancialAssets,
    PhysicalAssets,
    Mappings,
}

impl Collection {
    pub fn as_str(&self) -> &'static str {
        match self {
            Collection::FinancialAssets => "financial_assets",
            Collection::PhysicalAssets => "physical_assets",
            Collection::Mappings => "mappings",
        }
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub trait CollectionRepository {
    fn load_financial_assets(&self) -> StoreResult<Vec<FinancialAsset>>;
    fn load_physical_assets(&self) -> StoreResult<Vec<PhysicalAsset>>;
    fn load_mappings(&self) -> StoreResult<Vec<AssetMapping>>;

    fn save_financial_assets(&self, records: &[FinancialAsset]) -> StoreResult<()>;
    fn save_physical_assets(&self, records: &[PhysicalAsset]) -> StoreResult<()>;
    fn save_mappings(&self, records: &[AssetMapping]) -> StoreResult<()>;
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum StoreError {
    /// Backing file absent; callers treat this as an empty collection
    #[error("{collection} store not found: {path}")]
    NotFound {
        collection: Collection,
        path: PathBuf,
    },

    #[error("failed to access {path}: {message}")]
    Access { path: PathBuf, message: String },

    #[error("failed to serialize {collection}: {message}")]
    Serialization {
        collection: Collection,
        message: String,
    },

    #[error(
        "{collection} file corrupted: {path}\n  → Fix: correct or remove the offending record, then rerun\n  → Details: {message}"
    )]
    Corrupted {
        collection: Collection,
        path: PathBuf,
        message: String,
    },
}

impl StoreError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, StoreError::NotFound { .. })
    }
}
