//! Asset identifier value object

use std::borrow::Borrow;
use std::fmt;

use crate::error::{AssetMapError, AssetMapResult};

/// Unique identifier of a financial or physical asset
///
/// Always trimmed, never empty, and free of whitespace and control
/// characters so it survives a round trip through forms, JSON and
/// spreadsheet cells unchanged.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AssetId(String);

impl AssetId {
    /// Parse and validate a raw identifier
    pub fn parse(raw: &str) -> AssetMapResult<Self> {
        Self::parse_field("id", raw)
    }

    /// Like [`AssetId::parse`], reporting errors against `field`
    pub fn parse_field(field: &str, raw: &str) -> AssetMapResult<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(AssetMapError::validation(field, "identifier must not be empty"));
        }
        if let Some(bad) = trimmed
            .chars()
            .find(|c| c.is_whitespace() || c.is_control())
        {
            return Err(AssetMapError::validation(
                field,
                format!("identifier '{}' contains {:?}", trimmed, bad),
            ));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for AssetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for AssetId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for AssetId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
