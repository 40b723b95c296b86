//! Asset mapping entity - links a financial asset to a physical asset

use chrono::NaiveDate;

use crate::domain::value_objects::{check_weight, AssetId};
use crate::error::AssetMapResult;

/// Identity of a mapping
///
/// Pairs form a set: the same `(financial_id, physical_id)` pair may appear
/// more than once only when the allocation key differs.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MappingKey {
    pub financial_id: AssetId,
    pub physical_id: AssetId,
    pub allocation_key: Option<String>,
}

impl MappingKey {
    pub fn new(financial_id: AssetId, physical_id: AssetId, allocation_key: Option<String>) -> Self {
        Self {
            financial_id,
            physical_id,
            allocation_key: normalize_allocation_key(allocation_key),
        }
    }
}

impl std::fmt::Display for MappingKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.financial_id, self.physical_id)?;
        if let Some(key) = &self.allocation_key {
            write!(f, " [{}]", key)?;
        }
        Ok(())
    }
}

/// A mapping record plus its optional metadata
#[derive(Debug, Clone, PartialEq)]
pub struct AssetMapping {
    pub financial_id: AssetId,
    pub physical_id: AssetId,
    pub allocation_key: Option<String>,
    pub mapped_on: Option<NaiveDate>,
    /// Share of the financial asset allocated to this physical asset
    pub weight: Option<f64>,
    pub notes: String,
}

impl AssetMapping {
    pub fn new(financial_id: AssetId, physical_id: AssetId) -> Self {
        Self {
            financial_id,
            physical_id,
            allocation_key: None,
            mapped_on: None,
            weight: None,
            notes: String::new(),
        }
    }

    pub fn with_allocation_key(mut self, key: impl Into<String>) -> Self {
        self.allocation_key = normalize_allocation_key(Some(key.into()));
        self
    }

    pub fn with_mapped_on(mut self, date: NaiveDate) -> Self {
        self.mapped_on = Some(date);
        self
    }

    pub fn with_weight(mut self, weight: f64) -> Self {
        self.weight = Some(weight);
        self
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = notes.into();
        self
    }

    pub fn key(&self) -> MappingKey {
        MappingKey::new(
            self.financial_id.clone(),
            self.physical_id.clone(),
            self.allocation_key.clone(),
        )
    }

    pub fn validate(&self) -> AssetMapResult<()> {
        if let Some(weight) = self.weight {
            check_weight(weight)?;
        }
        Ok(())
    }

    pub fn apply(&mut self, patch: &MappingPatch) {
        if let Some(date) = patch.mapped_on {
            self.mapped_on = Some(date);
        }
        if let Some(weight) = patch.weight {
            self.weight = Some(weight);
        }
        if let Some(notes) = &patch.notes {
            self.notes = notes.clone();
        }
    }
}

/// Partial update of mapping metadata
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MappingPatch {
    pub mapped_on: Option<NaiveDate>,
    pub weight: Option<f64>,
    pub notes: Option<String>,
}

fn normalize_allocation_key(key: Option<String>) -> Option<String> {
    key.map(|k| k.trim().to_string()).filter(|k| !k.is_empty())
}
