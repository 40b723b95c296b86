//! Configuration loading

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::value_objects::DeletePolicy;
use crate::error::{AssetMapError, AssetMapResult};

use super::types::Config;

/// Config file name looked up inside the data directory
pub const PROJECT_CONFIG_FILE: &str = "assetmap.toml";

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

impl fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown config key '{}' in {}", self.key, self.file.display())?;
        if let Some(line) = self.line {
            write!(f, ":{}", line)?;
        }
        if let Some(suggestion) = &self.suggestion {
            write!(f, " (did you mean '{}'?)", suggestion)?;
        }
        Ok(())
    }
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
///
/// A relative `storage.data_dir` is resolved against the file's directory.
pub fn load_with_warnings(path: &Path) -> AssetMapResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path).map_err(|e| config_error(path, e.to_string()))?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let mut config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| config_error(path, e.to_string()))?;

    if let Some(dir) = config.storage.data_dir.take() {
        let base = path.parent().unwrap_or_else(|| Path::new("."));
        config.storage.data_dir = Some(if dir.is_absolute() { dir } else { base.join(dir) });
    }

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
                key,
                file: path.to_path_buf(),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Find the config file to use when none is given explicitly
pub fn discover(data_dir: Option<&Path>) -> Option<PathBuf> {
    let local = data_dir
        .unwrap_or_else(|| Path::new("."))
        .join(PROJECT_CONFIG_FILE);
    if local.is_file() {
        return Some(local);
    }

    dirs::config_dir()
        .map(|dir| dir.join("assetmap").join("config.toml"))
        .filter(|p| p.is_file())
}

/// Resolve file config plus environment overrides
///
/// An explicit `--config` that cannot be read is an error; a discovered one
/// only applies when present.
pub fn load_layered(
    explicit: Option<&Path>,
    data_dir: Option<&Path>,
) -> AssetMapResult<(Config, Vec<ConfigWarning>)> {
    let path = match explicit {
        Some(path) => Some(path.to_path_buf()),
        None => discover(data_dir),
    };

    let (config, warnings) = match path {
        Some(path) => {
            tracing::debug!(path = %path.display(), "loading config");
            load_with_warnings(&path)?
        }
        None => (Config::default(), Vec::new()),
    };

    Ok((with_env_overrides(config, |k| std::env::var(k).ok()), warnings))
}

/// Apply environment variable overrides (ASSETMAP_* prefix)
pub fn with_env_overrides(mut config: Config, var: impl Fn(&str) -> Option<String>) -> Config {
    // ASSETMAP_DATA_DIR
    if let Some(dir) = var("ASSETMAP_DATA_DIR").filter(|v| !v.is_empty()) {
        config.storage.data_dir = Some(PathBuf::from(dir));
    }

    // ASSETMAP_DELETE_POLICY
    if let Some(policy) = var("ASSETMAP_DELETE_POLICY") {
        match policy.parse::<DeletePolicy>() {
            Ok(policy) => config.mapping.delete_policy = policy,
            Err(e) => tracing::warn!("ignoring ASSETMAP_DELETE_POLICY: {}", e),
        }
    }

    // ASSETMAP_EXPORT_PATH
    if let Some(path) = var("ASSETMAP_EXPORT_PATH").filter(|v| !v.is_empty()) {
        config.export.path = PathBuf::from(path);
    }

    config
}

fn config_error(path: &Path, message: String) -> AssetMapError {
    AssetMapError::Config {
        path: path.to_path_buf(),
        message,
    }
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| line.contains(needle))
        .map(|i| i + 1)
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "storage",
        "data_dir",
        "financial_file",
        "physical_file",
        "mapping_file",
        "mapping",
        "delete_policy",
        "export",
        "path",
        "output",
        "color",
    ];

    let mut best: Option<(&str, usize)> = None;
    for candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a = a.as_bytes();
    let b = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0usize; b.len() + 1];

    for (i, &ac) in a.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b.iter().enumerate() {
            let cost = usize::from(ac != bc);
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b.len()]
}
