//! Asset registry
//!
//! In-memory collection of one asset kind keyed by identifier. Records are
//! kept in identifier order so listings and saved files are stable.

use std::collections::BTreeMap;

use crate::domain::value_objects::{AssetId, Side};
use crate::error::{AssetMapError, AssetMapResult};

/// A record that can live in an [`AssetRegistry`]
pub trait Record: Clone {
    /// Which side of a mapping this record type sits on
    const SIDE: Side;

    /// Partial-update type for this record
    type Patch;

    fn id(&self) -> &AssetId;

    /// Check required fields and value ranges
    fn validate(&self) -> AssetMapResult<()>;

    /// Apply a patch in place, without validating the result
    fn apply(&mut self, patch: &Self::Patch);
}

#[derive(Debug, Clone, PartialEq)]
pub struct AssetRegistry<T> {
    records: BTreeMap<AssetId, T>,
}

impl<T> Default for AssetRegistry<T> {
    fn default() -> Self {
        Self {
            records: BTreeMap::new(),
        }
    }
}

impl<T: Record> AssetRegistry<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a registry from loaded records, applying the same rules as `create`
    pub fn from_records(records: impl IntoIterator<Item = T>) -> AssetMapResult<Self> {
        let mut registry = Self::new();
        for record in records {
            registry.create(record)?;
        }
        Ok(registry)
    }

    pub fn create(&mut self, record: T) -> AssetMapResult<&T> {
        record.validate()?;
        let id = record.id().clone();
        if self.records.contains_key(&id) {
            return Err(AssetMapError::DuplicateId {
                side: T::SIDE,
                id: id.into_string(),
            });
        }
        Ok(self.records.entry(id).or_insert(record))
    }

    /// Patch a record; the registry is unchanged if the result is invalid
    pub fn update(&mut self, id: &str, patch: &T::Patch) -> AssetMapResult<&T> {
        let slot = self
            .records
            .get_mut(id)
            .ok_or_else(|| not_found::<T>(id))?;

        let mut next = slot.clone();
        next.apply(patch);
        next.validate()?;
        *slot = next;
        Ok(slot)
    }

    pub fn delete(&mut self, id: &str) -> AssetMapResult<T> {
        self.records.remove(id).ok_or_else(|| not_found::<T>(id))
    }

    pub fn get(&self, id: &str) -> Option<&T> {
        self.records.get(id)
    }

    /// Like `get`, but a missing record is a `NotFound` error
    pub fn require(&self, id: &str) -> AssetMapResult<&T> {
        self.get(id).ok_or_else(|| not_found::<T>(id))
    }

    pub fn contains(&self, id: &str) -> bool {
        self.records.contains_key(id)
    }

    pub fn list(&self) -> impl Iterator<Item = &T> {
        self.records.values()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Owned copy of every record, in identifier order
    pub fn to_vec(&self) -> Vec<T> {
        self.records.values().cloned().collect()
    }

    /// Insert without validation, to simulate a corrupted in-memory record
    #[cfg(test)]
    pub(crate) fn insert_unchecked(&mut self, record: T) {
        self.records.insert(record.id().clone(), record);
    }
}

fn not_found<T: Record>(id: &str) -> AssetMapError {
    AssetMapError::not_found(format!("{} asset", T::SIDE), id)
}
