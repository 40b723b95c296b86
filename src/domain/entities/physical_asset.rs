//! Physical asset entity - a real-world item independent of its valuation

use crate::domain::entities::Record;
use crate::domain::value_objects::{require_text, AssetId, AssetStatus, Side};
use crate::error::AssetMapResult;

/// A physical asset (equipment, property, vehicle, ...)
#[derive(Debug, Clone, PartialEq)]
pub struct PhysicalAsset {
    pub id: AssetId,
    pub name: String,
    pub location: String,
    pub status: AssetStatus,
    pub notes: String,
}

impl PhysicalAsset {
    pub fn new(
        id: AssetId,
        name: impl Into<String>,
        location: impl Into<String>,
        status: AssetStatus,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            location: location.into(),
            status,
            notes: String::new(),
        }
    }

    /// Builder: set free-text notes
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = notes.into();
        self
    }
}

impl Record for PhysicalAsset {
    const SIDE: Side = Side::Physical;
    type Patch = PhysicalAssetPatch;

    fn id(&self) -> &AssetId {
        &self.id
    }

    fn validate(&self) -> AssetMapResult<()> {
        require_text("name", &self.name)?;
        require_text("location", &self.location)?;
        Ok(())
    }

    fn apply(&mut self, patch: &PhysicalAssetPatch) {
        if let Some(name) = &patch.name {
            self.name = name.trim().to_string();
        }
        if let Some(location) = &patch.location {
            self.location = location.trim().to_string();
        }
        if let Some(status) = patch.status {
            self.status = status;
        }
        if let Some(notes) = &patch.notes {
            self.notes = notes.clone();
        }
    }
}

/// Partial update of a physical asset
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PhysicalAssetPatch {
    pub name: Option<String>,
    pub location: Option<String>,
    pub status: Option<AssetStatus>,
    pub notes: Option<String>,
}

impl PhysicalAssetPatch {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Raw text as submitted by a form or command line
#[derive(Debug, Clone, Default)]
pub struct PhysicalAssetForm {
    pub id: String,
    pub name: String,
    pub location: String,
    pub status: String,
    pub notes: String,
}

impl PhysicalAssetForm {
    pub fn parse(&self) -> AssetMapResult<PhysicalAsset> {
        let asset = PhysicalAsset::new(
            AssetId::parse(&self.id)?,
            require_text("name", &self.name)?,
            require_text("location", &self.location)?,
            self.status.parse()?,
        )
        .with_notes(self.notes.clone());
        Ok(asset)
    }
}
