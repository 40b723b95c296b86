//! Configuration module for assetmap
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (ASSETMAP_*)
//! 3. Config file (`--config`, else `<data-dir>/assetmap.toml`, else
//!    `~/.config/assetmap/config.toml`)
//! 4. Built-in defaults (lowest priority)

mod loader;
#[cfg(test)]
mod tests;
mod types;

pub use loader::{discover, load_layered, with_env_overrides, ConfigWarning, PROJECT_CONFIG_FILE};
pub use types::{ColorMode, Config, ExportConfig, MappingConfig, OutputConfig, StorageConfig};
