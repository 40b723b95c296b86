//! Physical asset status value object

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::AssetMapError;

/// Lifecycle status of a physical asset
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "kebab-case")]
pub enum AssetStatus {
    /// Deployed and in active use
    #[default]
    InUse,
    /// Available but not currently used
    Idle,
    /// Sold, scrapped or otherwise gone
    Disposed,
}

impl AssetStatus {
    pub const ALL: [AssetStatus; 3] = [AssetStatus::InUse, AssetStatus::Idle, AssetStatus::Disposed];

    pub fn as_str(&self) -> &'static str {
        match self {
            AssetStatus::InUse => "in-use",
            AssetStatus::Idle => "idle",
            AssetStatus::Disposed => "disposed",
        }
    }
}

impl fmt::Display for AssetStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AssetStatus {
    type Err = AssetMapError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace(['_', ' '], "-");
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == normalized)
            .ok_or_else(|| {
                AssetMapError::validation(
                    "status",
                    format!("'{}' is not one of in-use, idle, disposed", s.trim()),
                )
            })
    }
}
