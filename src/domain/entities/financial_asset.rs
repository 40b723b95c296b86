//! Financial asset entity - a ledger-side record of monetary value

use chrono::NaiveDate;

use crate::domain::entities::Record;
use crate::domain::value_objects::{
    check_amount, parse_amount, parse_date, require_text, AssetId, Side,
};
use crate::error::AssetMapResult;

/// A financial asset
#[derive(Debug, Clone, PartialEq)]
pub struct FinancialAsset {
    pub id: AssetId,
    pub name: String,
    pub category: String,
    /// Monetary value, finite and not negative
    pub value: f64,
    pub acquired_on: NaiveDate,
    pub notes: String,
}

impl FinancialAsset {
    pub fn new(
        id: AssetId,
        name: impl Into<String>,
        category: impl Into<String>,
        value: f64,
        acquired_on: NaiveDate,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            category: category.into(),
            value,
            acquired_on,
            notes: String::new(),
        }
    }

    /// Builder: set free-text notes
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = notes.into();
        self
    }
}

impl Record for FinancialAsset {
    const SIDE: Side = Side::Financial;
    type Patch = FinancialAssetPatch;

    fn id(&self) -> &AssetId {
        &self.id
    }

    fn validate(&self) -> AssetMapResult<()> {
        require_text("name", &self.name)?;
        require_text("category", &self.category)?;
        check_amount("value", self.value)
    }

    fn apply(&mut self, patch: &FinancialAssetPatch) {
        if let Some(name) = &patch.name {
            self.name = name.trim().to_string();
        }
        if let Some(category) = &patch.category {
            self.category = category.trim().to_string();
        }
        if let Some(value) = patch.value {
            self.value = value;
        }
        if let Some(acquired_on) = patch.acquired_on {
            self.acquired_on = acquired_on;
        }
        if let Some(notes) = &patch.notes {
            self.notes = notes.clone();
        }
    }
}

/// Partial update of a financial asset; `None` leaves a field unchanged
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FinancialAssetPatch {
    pub name: Option<String>,
    pub category: Option<String>,
    pub value: Option<f64>,
    pub acquired_on: Option<NaiveDate>,
    pub notes: Option<String>,
}

impl FinancialAssetPatch {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Raw text as submitted by a form or command line
#[derive(Debug, Clone, Default)]
pub struct FinancialAssetForm {
    pub id: String,
    pub name: String,
    pub category: String,
    pub value: String,
    pub acquired_on: String,
    pub notes: String,
}

impl FinancialAssetForm {
    /// Parse every field, failing on the first malformed one
    pub fn parse(&self) -> AssetMapResult<FinancialAsset> {
        let asset = FinancialAsset::new(
            AssetId::parse(&self.id)?,
            require_text("name", &self.name)?,
            require_text("category", &self.category)?,
            parse_amount("value", &self.value)?,
            parse_date("acquired_on", &self.acquired_on)?,
        )
        .with_notes(self.notes.clone());
        Ok(asset)
    }
}
