//! Domain Entities
//!
//! Core records that have identity and lifecycle.
//! - `FinancialAsset` - ledger-side record with a monetary value
//! - `PhysicalAsset` - real-world item record
//! - `AssetMapping` - link between one financial and one physical asset
//! - `AssetRegistry` - in-memory collection of one asset kind, keyed by id

mod catalog;
mod financial_asset;
mod mapping;
mod physical_asset;
mod registry;

pub use catalog::{AssetCatalog, CatalogRecord};
pub use financial_asset::{FinancialAsset, FinancialAssetForm, FinancialAssetPatch};
pub use mapping::{AssetMapping, MappingKey, MappingPatch};
pub use physical_asset::{PhysicalAsset, PhysicalAssetForm, PhysicalAssetPatch};
pub use registry::{AssetRegistry, Record};
