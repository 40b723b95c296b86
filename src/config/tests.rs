//! Tests for the config module

use super::loader::with_env_overrides;
use super::types::*;
use super::{load_layered, PROJECT_CONFIG_FILE};
use crate::domain::value_objects::DeletePolicy;
use crate::error::AssetMapError;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::tempdir;

fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |k| map.get(k).cloned()
}

#[test]
fn test_config_default() {
    let config = Config::default();

    assert_eq!(config.mapping.delete_policy, DeletePolicy::Cascade);
    assert_eq!(config.output.color, ColorMode::Auto);
    assert_eq!(config.storage.financial_file, "financial_assets.json");
    assert_eq!(config.export.path, PathBuf::from("asset_report.xlsx"));
    assert_eq!(config.data_dir(), PathBuf::from("."));
}

#[test]
fn test_config_parse_toml() {
    let toml = r#"
[storage]
financial_file = "ledger.json"

[mapping]
delete_policy = "strict"

[export]
path = "reports/assets.xlsx"

[output]
color = "never"
"#;

    let config: Config = toml::from_str(toml).unwrap();

    assert_eq!(config.storage.financial_file, "ledger.json");
    assert_eq!(config.storage.physical_file, "physical_assets.json");
    assert_eq!(config.mapping.delete_policy, DeletePolicy::Strict);
    assert_eq!(config.output.color, ColorMode::Never);
    assert_eq!(config.export.path, PathBuf::from("reports/assets.xlsx"));
}

#[test]
fn test_collection_paths_use_data_dir() {
    let mut config = Config::default();
    config.storage.data_dir = Some(PathBuf::from("/srv/assets"));
    config.storage.mapping_file = "links.json".to_string();

    let paths = config.collection_paths();
    assert_eq!(paths.financial, Path::new("/srv/assets/financial_assets.json"));
    assert_eq!(paths.mappings, Path::new("/srv/assets/links.json"));
    assert_eq!(config.export_path(), Path::new("/srv/assets/asset_report.xlsx"));
}

#[test]
fn test_load_resolves_relative_data_dir() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("assetmap.toml");
    fs::write(&path, "[storage]\ndata_dir = \"data\"\n").unwrap();

    let config = Config::load(&path).unwrap();
    assert_eq!(config.storage.data_dir, Some(dir.path().join("data")));
}

#[test]
fn test_load_with_warnings_reports_unknown_keys() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("assetmap.toml");
    fs::write(&path, "[mapping]\ndelete_polcy = \"strict\"\n").unwrap();

    let (config, warnings) = Config::load_with_warnings(&path).unwrap();
    assert_eq!(config.mapping.delete_policy, DeletePolicy::Cascade);
    assert_eq!(warnings.len(), 1);
    assert_eq!(warnings[0].key, "delete_polcy");
    assert_eq!(warnings[0].line, Some(2));
    assert_eq!(warnings[0].suggestion.as_deref(), Some("delete_policy"));
    assert!(warnings[0].to_string().contains("did you mean 'delete_policy'"));
}

#[test]
fn test_load_invalid_value_is_config_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("assetmap.toml");
    fs::write(&path, "[mapping]\ndelete_policy = \"sometimes\"\n").unwrap();

    let err = Config::load(&path).unwrap_err();
    assert!(matches!(err, AssetMapError::Config { .. }));
}

#[test]
fn test_env_overrides() {
    let config = with_env_overrides(
        Config::default(),
        env(&[
            ("ASSETMAP_DATA_DIR", "/tmp/data"),
            ("ASSETMAP_DELETE_POLICY", "strict"),
            ("ASSETMAP_EXPORT_PATH", "out.xlsx"),
        ]),
    );

    assert_eq!(config.storage.data_dir, Some(PathBuf::from("/tmp/data")));
    assert_eq!(config.mapping.delete_policy, DeletePolicy::Strict);
    assert_eq!(config.export.path, PathBuf::from("out.xlsx"));
}

#[test]
fn test_env_invalid_policy_is_ignored() {
    let config = with_env_overrides(
        Config::default(),
        env(&[("ASSETMAP_DELETE_POLICY", "whenever")]),
    );
    assert_eq!(config.mapping.delete_policy, DeletePolicy::Cascade);
}

#[test]
fn test_load_layered_prefers_data_dir_config() {
    let dir = tempdir().unwrap();
    fs::write(
        dir.path().join(PROJECT_CONFIG_FILE),
        "[mapping]\ndelete_policy = \"strict\"\n",
    )
    .unwrap();

    let (config, warnings) = load_layered(None, Some(dir.path())).unwrap();
    assert!(warnings.is_empty());
    assert_eq!(config.mapping.delete_policy, DeletePolicy::Strict);
}

#[test]
fn test_load_layered_missing_explicit_is_error() {
    let dir = tempdir().unwrap();
    let missing = dir.path().join("nope.toml");
    assert!(load_layered(Some(&missing), None).is_err());
}
