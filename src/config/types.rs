//! Configuration type definitions

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::DeletePolicy;
use crate::error::AssetMapResult;
use crate::infrastructure::repositories::{
    CollectionPaths, DEFAULT_FINANCIAL_FILE, DEFAULT_MAPPING_FILE, DEFAULT_PHYSICAL_FILE,
};

use super::loader::{self, ConfigWarning};

/// Where the collection files live
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Data directory; relative paths are resolved against the config file
    #[serde(default)]
    pub data_dir: Option<PathBuf>,

    #[serde(default = "default_financial_file")]
    pub financial_file: String,

    #[serde(default = "default_physical_file")]
    pub physical_file: String,

    #[serde(default = "default_mapping_file")]
    pub mapping_file: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: None,
            financial_file: default_financial_file(),
            physical_file: default_physical_file(),
            mapping_file: default_mapping_file(),
        }
    }
}

fn default_financial_file() -> String {
    DEFAULT_FINANCIAL_FILE.to_string()
}

fn default_physical_file() -> String {
    DEFAULT_PHYSICAL_FILE.to_string()
}

fn default_mapping_file() -> String {
    DEFAULT_MAPPING_FILE.to_string()
}

/// Mapping configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct MappingConfig {
    #[serde(default)]
    pub delete_policy: DeletePolicy,
}

/// Export configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportConfig {
    /// Workbook path; relative paths are resolved against the data directory
    #[serde(default = "default_export_path")]
    pub path: PathBuf,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            path: default_export_path(),
        }
    }
}

fn default_export_path() -> PathBuf {
    PathBuf::from("asset_report.xlsx")
}

/// Output configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct OutputConfig {
    #[serde(default)]
    pub color: ColorMode,
}

/// Color output mode
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub storage: StorageConfig,

    #[serde(default)]
    pub mapping: MappingConfig,

    #[serde(default)]
    pub export: ExportConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> AssetMapResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> AssetMapResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Data directory, falling back to the current directory
    pub fn data_dir(&self) -> PathBuf {
        self.storage
            .data_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from("."))
    }

    /// Collection file locations inside the data directory
    pub fn collection_paths(&self) -> CollectionPaths {
        let dir = self.data_dir();
        CollectionPaths {
            financial: dir.join(&self.storage.financial_file),
            physical: dir.join(&self.storage.physical_file),
            mappings: dir.join(&self.storage.mapping_file),
        }
    }

    /// Default export target, resolved against the data directory
    pub fn export_path(&self) -> PathBuf {
        self.data_dir().join(&self.export.path)
    }
}
