//! Mapping engine
//!
//! Owns the set of financial↔physical mappings and enforces referential
//! integrity against an [`AssetCatalog`]. The engine never deletes a mapping
//! on its own; dangling entries are reported by `validate_integrity` and only
//! removed by an explicit `prune_dangling` or `remove_referencing` call.

use std::collections::{BTreeMap, BTreeSet};

use crate::domain::entities::{AssetCatalog, AssetMapping, MappingKey, MappingPatch};
use crate::domain::value_objects::{AssetId, Side, ALLOCATION_TOLERANCE};
use crate::error::{AssetMapError, AssetMapResult};

/// A mapping with at least one endpoint missing from the catalog
#[derive(Debug, Clone, PartialEq)]
pub struct DanglingMapping {
    pub mapping: AssetMapping,
    pub missing: Vec<Side>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct MappingEngine {
    mappings: BTreeMap<MappingKey, AssetMapping>,
}

impl MappingEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild from stored records
    ///
    /// Checks shape (weights, duplicate tuples) but not endpoints: a store
    /// edited by hand may hold dangling entries, which `validate_integrity`
    /// reports instead of failing the load.
    pub fn from_mappings(mappings: impl IntoIterator<Item = AssetMapping>) -> AssetMapResult<Self> {
        let mut engine = Self::new();
        for mapping in mappings {
            mapping.validate()?;
            let key = mapping.key();
            if engine.mappings.contains_key(&key) {
                return Err(duplicate(&key));
            }
            engine.mappings.insert(key, mapping);
        }
        Ok(engine)
    }

    pub fn add(
        &mut self,
        mapping: AssetMapping,
        catalog: &AssetCatalog,
    ) -> AssetMapResult<&AssetMapping> {
        check_endpoints(&mapping, catalog)?;
        mapping.validate()?;

        let key = mapping.key();
        if self.mappings.contains_key(&key) {
            return Err(duplicate(&key));
        }
        self.check_allocation(&mapping, None)?;

        tracing::debug!(mapping = %key, "mapping added");
        Ok(self.mappings.entry(key).or_insert(mapping))
    }

    /// Change mapping metadata; endpoints are re-checked against the catalog.
    /// The financial allocation is only re-checked when the weight changes.
    pub fn update(
        &mut self,
        key: &MappingKey,
        patch: &MappingPatch,
        catalog: &AssetCatalog,
    ) -> AssetMapResult<&AssetMapping> {
        let current = self.mappings.get(key).ok_or_else(|| mapping_not_found(key))?;

        let mut next = current.clone();
        next.apply(patch);
        check_endpoints(&next, catalog)?;
        next.validate()?;
        if patch.weight.is_some() {
            self.check_allocation(&next, Some(key))?;
        }

        let slot = self
            .mappings
            .get_mut(key)
            .ok_or_else(|| mapping_not_found(key))?;
        *slot = next;
        Ok(slot)
    }

    pub fn remove(&mut self, key: &MappingKey) -> AssetMapResult<AssetMapping> {
        self.mappings
            .remove(key)
            .ok_or_else(|| mapping_not_found(key))
    }

    pub fn get(&self, key: &MappingKey) -> Option<&AssetMapping> {
        self.mappings.get(key)
    }

    pub fn list(&self) -> impl Iterator<Item = &AssetMapping> {
        self.mappings.values()
    }

    pub fn len(&self) -> usize {
        self.mappings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mappings.is_empty()
    }

    pub fn to_vec(&self) -> Vec<AssetMapping> {
        self.mappings.values().cloned().collect()
    }

    /// Counterpart ids of `id`, where `id` lives on `side`
    pub fn mappings_for(&self, id: &str, side: Side) -> BTreeSet<AssetId> {
        self.dependents(id, side)
            .into_iter()
            .map(|m| match side {
                Side::Financial => m.physical_id.clone(),
                Side::Physical => m.financial_id.clone(),
            })
            .collect()
    }

    /// Every mapping that references `id` on `side`
    pub fn dependents(&self, id: &str, side: Side) -> Vec<&AssetMapping> {
        self.mappings
            .values()
            .filter(|m| endpoint(m, side).as_str() == id)
            .collect()
    }

    /// Remove and return every mapping that references `id` on `side`
    pub fn remove_referencing(&mut self, id: &str, side: Side) -> Vec<AssetMapping> {
        let keys: Vec<MappingKey> = self
            .mappings
            .iter()
            .filter(|(_, m)| endpoint(m, side).as_str() == id)
            .map(|(k, _)| k.clone())
            .collect();

        keys.iter()
            .filter_map(|k| self.mappings.remove(k))
            .collect()
    }

    /// Mappings whose endpoints are missing from `catalog`
    pub fn validate_integrity(&self, catalog: &AssetCatalog) -> Vec<DanglingMapping> {
        self.mappings
            .values()
            .filter_map(|m| {
                let missing: Vec<Side> = [Side::Financial, Side::Physical]
                    .into_iter()
                    .filter(|side| !catalog.contains(*side, endpoint(m, *side).as_str()))
                    .collect();
                if missing.is_empty() {
                    None
                } else {
                    Some(DanglingMapping {
                        mapping: m.clone(),
                        missing,
                    })
                }
            })
            .collect()
    }

    /// Remove exactly the mappings `validate_integrity` reports
    pub fn prune_dangling(&mut self, catalog: &AssetCatalog) -> Vec<AssetMapping> {
        self.validate_integrity(catalog)
            .into_iter()
            .filter_map(|d| self.mappings.remove(&d.mapping.key()))
            .collect()
    }

    /// Total weight already allocated from one financial asset
    pub fn allocated_weight(&self, financial_id: &str) -> f64 {
        self.mappings
            .values()
            .filter(|m| m.financial_id.as_str() == financial_id)
            .filter_map(|m| m.weight)
            .sum()
    }

    /// Financial assets whose stored weights already total more than 1
    pub fn over_allocated(&self) -> Vec<(AssetId, f64)> {
        let mut totals: BTreeMap<&AssetId, f64> = BTreeMap::new();
        for m in self.mappings.values() {
            if let Some(weight) = m.weight {
                *totals.entry(&m.financial_id).or_default() += weight;
            }
        }
        totals
            .into_iter()
            .filter(|(_, total)| *total > 1.0 + ALLOCATION_TOLERANCE)
            .map(|(id, total)| (id.clone(), total))
            .collect()
    }

    fn check_allocation(
        &self,
        candidate: &AssetMapping,
        replacing: Option<&MappingKey>,
    ) -> AssetMapResult<()> {
        let Some(weight) = candidate.weight else {
            return Ok(());
        };

        let committed: f64 = self
            .mappings
            .iter()
            .filter(|(k, m)| m.financial_id == candidate.financial_id && Some(*k) != replacing)
            .filter_map(|(_, m)| m.weight)
            .sum();

        let total = committed + weight;
        if total > 1.0 + ALLOCATION_TOLERANCE {
            return Err(AssetMapError::validation(
                "weight",
                format!(
                    "allocations of financial asset '{}' would total {:.4}, above 1",
                    candidate.financial_id, total
                ),
            ));
        }
        Ok(())
    }
}

fn endpoint(mapping: &AssetMapping, side: Side) -> &AssetId {
    match side {
        Side::Financial => &mapping.financial_id,
        Side::Physical => &mapping.physical_id,
    }
}

fn check_endpoints(mapping: &AssetMapping, catalog: &AssetCatalog) -> AssetMapResult<()> {
    for side in [Side::Financial, Side::Physical] {
        let id = endpoint(mapping, side);
        if !catalog.contains(side, id.as_str()) {
            return Err(AssetMapError::Referential {
                side,
                id: id.to_string(),
            });
        }
    }
    Ok(())
}

fn duplicate(key: &MappingKey) -> AssetMapError {
    AssetMapError::DuplicateMapping {
        financial_id: key.financial_id.to_string(),
        physical_id: key.physical_id.to_string(),
        allocation_key: key.allocation_key.clone(),
    }
}

fn mapping_not_found(key: &MappingKey) -> AssetMapError {
    AssetMapError::not_found("mapping", key.to_string())
}
