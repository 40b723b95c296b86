//! assetmap - cross-reference financial and physical asset records
//!
//! Records live in three flat JSON files: financial assets, physical assets
//! and the mappings between them. An [`AssetSession`] loads them, applies
//! validated commands, and writes every change back atomically. The session
//! can export everything to an `.xlsx` workbook. A separate utility strips
//! invisible Unicode characters from text files.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;

pub use application::{AssetSession, DeleteOutcome};
pub use config::Config;
pub use domain::entities::{AssetMapping, FinancialAsset, MappingKey, PhysicalAsset};
pub use domain::services::{clean_text, CleanReport};
pub use domain::value_objects::{AssetId, AssetStatus, DeletePolicy, Side};
pub use error::{AssetMapError, AssetMapResult};
