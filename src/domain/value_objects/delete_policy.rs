//! Delete Policy Value Object
//!
//! Decides what happens to mappings when one of their assets is deleted.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Behaviour of asset deletes that still have mappings
///
/// - `Cascade`: remove the dependent mappings along with the asset (default)
/// - `Strict`: refuse the delete with a dependency error, change nothing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum DeletePolicy {
    #[default]
    Cascade,
    Strict,
}

impl FromStr for DeletePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "cascade" => Ok(DeletePolicy::Cascade),
            "strict" => Ok(DeletePolicy::Strict),
            other => Err(format!("unknown delete policy '{}'", other)),
        }
    }
}
