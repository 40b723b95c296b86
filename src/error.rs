//! Error types for assetmap
//!
//! Uses `thiserror` for library errors. The binary wraps these in `anyhow`
//! at the command boundary.

use std::path::PathBuf;

use thiserror::Error;

use crate::domain::ports::StoreError;
use crate::domain::value_objects::Side;

/// Result type alias for assetmap operations
pub type AssetMapResult<T> = Result<T, AssetMapError>;

/// Main error type for registry, mapping and export operations
#[derive(Error, Debug)]
pub enum AssetMapError {
    /// Malformed input (empty id, non-numeric value, bad date, ...)
    #[error("invalid {field}: {message}")]
    Validation { field: String, message: String },

    /// Asset identifier already present in its registry
    #[error("{side} asset '{id}' already exists")]
    DuplicateId { side: Side, id: String },

    /// Exact mapping tuple already present
    #[error("mapping {financial_id} -> {physical_id}{} already exists", key_suffix(.allocation_key))]
    DuplicateMapping {
        financial_id: String,
        physical_id: String,
        allocation_key: Option<String>,
    },

    /// Reference to a record that does not exist
    #[error("{what} '{id}' not found")]
    NotFound { what: String, id: String },

    /// Mapping endpoint missing from its registry
    #[error("cannot map to unknown {side} asset '{id}'")]
    Referential { side: Side, id: String },

    /// Delete blocked by dependent mappings (strict policy)
    #[error(
        "{side} asset '{id}' is referenced by {count} mapping(s)\n  → Fix: remove the mappings first, or delete with --cascade"
    )]
    Dependency { side: Side, id: String, count: usize },

    /// Workbook could not be produced
    #[error("export failed: {message}")]
    Export { message: String },

    /// Text file could not be read or rewritten by `clean`
    #[error("cannot clean {}: {message}", .path.display())]
    Clean { path: PathBuf, message: String },

    /// Configuration file unreadable or malformed
    #[error("invalid config {}: {message}", .path.display())]
    Config { path: PathBuf, message: String },

    /// Backing store could not be read or written
    #[error(transparent)]
    Persistence(#[from] StoreError),
}

impl AssetMapError {
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn not_found(what: impl Into<String>, id: impl Into<String>) -> Self {
        Self::NotFound {
            what: what.into(),
            id: id.into(),
        }
    }

    pub fn export(message: impl Into<String>) -> Self {
        Self::Export {
            message: message.into(),
        }
    }
}

fn key_suffix(key: &Option<String>) -> String {
    match key {
        Some(k) => format!(" [{}]", k),
        None => String::new(),
    }
}
