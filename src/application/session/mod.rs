//! Asset Session
//!
//! Explicit context object holding the in-memory copy of all three
//! collections. Every mutation is computed on a copy, written through the
//! repository, and only then committed to memory, so a failed save leaves
//! the session equal to the last successful save.

use std::collections::BTreeSet;

use crate::domain::entities::{
    AssetCatalog, AssetMapping, AssetRegistry, CatalogRecord, FinancialAsset, MappingKey,
    MappingPatch, PhysicalAsset,
};
use crate::domain::ports::{CollectionRepository, StoreResult, WorkbookEncoder};
use crate::domain::services::{build_report, DanglingMapping, MappingEngine, Report};
use crate::domain::value_objects::{AssetId, DeletePolicy, Side};
use crate::error::{AssetMapError, AssetMapResult};

/// Result of an asset delete
#[derive(Debug, Clone, PartialEq)]
pub struct DeleteOutcome<T> {
    pub removed: T,
    /// Mappings removed along with the asset (cascade only)
    pub removed_mappings: Vec<AssetMapping>,
}

pub struct AssetSession<R: CollectionRepository> {
    repo: R,
    catalog: AssetCatalog,
    mappings: MappingEngine,
    policy: DeletePolicy,
}

impl<R: CollectionRepository> AssetSession<R> {
    /// Load all collections; a missing store counts as empty
    pub fn load(repo: R, policy: DeletePolicy) -> AssetMapResult<Self> {
        let (catalog, mappings) = load_state(&repo)?;
        Ok(Self {
            repo,
            catalog,
            mappings,
            policy,
        })
    }

    /// Discard memory and load again from the store
    pub fn reload(&mut self) -> AssetMapResult<()> {
        let (catalog, mappings) = load_state(&self.repo)?;
        self.catalog = catalog;
        self.mappings = mappings;
        Ok(())
    }

    pub fn policy(&self) -> DeletePolicy {
        self.policy
    }

    pub fn catalog(&self) -> &AssetCatalog {
        &self.catalog
    }

    pub fn mappings(&self) -> &MappingEngine {
        &self.mappings
    }

    pub fn repository(&self) -> &R {
        &self.repo
    }

    // ---- assets ----

    pub fn create<T: CatalogRecord>(&mut self, record: T) -> AssetMapResult<T> {
        let mut registry = self.catalog.registry::<T>().clone();
        let created = registry.create(record)?.clone();
        self.commit_registry(registry)?;
        tracing::info!(side = %T::SIDE, id = %created.id(), "asset created");
        Ok(created)
    }

    pub fn update<T: CatalogRecord>(&mut self, id: &str, patch: &T::Patch) -> AssetMapResult<T> {
        let mut registry = self.catalog.registry::<T>().clone();
        let updated = registry.update(id, patch)?.clone();
        self.commit_registry(registry)?;
        tracing::info!(side = %T::SIDE, id = %id, "asset updated");
        Ok(updated)
    }

    /// Delete an asset under `policy`, or the session default when `None`
    ///
    /// Cascading deletes write the mapping collection before the asset
    /// collection, so an interrupted delete never leaves a dangling mapping
    /// on disk. If the asset write fails, the previous mappings are written
    /// back and memory is left as it was.
    pub fn delete<T: CatalogRecord>(
        &mut self,
        id: &str,
        policy: Option<DeletePolicy>,
    ) -> AssetMapResult<DeleteOutcome<T>> {
        let policy = policy.unwrap_or(self.policy);
        let mut registry = self.catalog.registry::<T>().clone();
        let removed = registry.delete(id)?;

        let count = self.mappings.dependents(id, T::SIDE).len();
        if count > 0 && policy == DeletePolicy::Strict {
            return Err(AssetMapError::Dependency {
                side: T::SIDE,
                id: id.to_string(),
                count,
            });
        }

        if count == 0 {
            self.commit_registry(registry)?;
            tracing::info!(side = %T::SIDE, id = %id, "asset deleted");
            return Ok(DeleteOutcome {
                removed,
                removed_mappings: Vec::new(),
            });
        }

        let previous = self.mappings.clone();
        let mut mappings = previous.clone();
        let removed_mappings = mappings.remove_referencing(id, T::SIDE);
        self.commit_mappings(mappings)?;

        if let Err(e) = self.commit_registry(registry) {
            // Put the mappings back so the failed delete has no effect
            if let Err(restore) = self.commit_mappings(previous) {
                tracing::error!(
                    error = %restore,
                    "could not restore mappings after a failed delete"
                );
            }
            return Err(e.into());
        }

        tracing::warn!(
            side = %T::SIDE,
            id = %id,
            mappings = removed_mappings.len(),
            "cascading delete removed mappings"
        );
        tracing::info!(side = %T::SIDE, id = %id, "asset deleted");
        Ok(DeleteOutcome {
            removed,
            removed_mappings,
        })
    }

    pub fn get<T: CatalogRecord>(&self, id: &str) -> Option<&T> {
        self.catalog.registry::<T>().get(id)
    }

    pub fn require<T: CatalogRecord>(&self, id: &str) -> AssetMapResult<&T> {
        self.catalog.registry::<T>().require(id)
    }

    pub fn list<'a, T: CatalogRecord + 'a>(&'a self) -> impl Iterator<Item = &'a T> {
        self.catalog.registry::<T>().list()
    }

    pub fn financial_assets(&self) -> impl Iterator<Item = &FinancialAsset> {
        self.list::<FinancialAsset>()
    }

    pub fn physical_assets(&self) -> impl Iterator<Item = &PhysicalAsset> {
        self.list::<PhysicalAsset>()
    }

    /// Number of mappings a delete of `id` would touch
    pub fn dependent_count(&self, id: &str, side: Side) -> usize {
        self.mappings.dependents(id, side).len()
    }

    // ---- mappings ----

    pub fn add_mapping(&mut self, mapping: AssetMapping) -> AssetMapResult<AssetMapping> {
        let mut mappings = self.mappings.clone();
        let added = mappings.add(mapping, &self.catalog)?.clone();
        self.commit_mappings(mappings)?;
        tracing::info!(mapping = %added.key(), "mapping added");
        Ok(added)
    }

    pub fn update_mapping(
        &mut self,
        key: &MappingKey,
        patch: &MappingPatch,
    ) -> AssetMapResult<AssetMapping> {
        let mut mappings = self.mappings.clone();
        let updated = mappings.update(key, patch, &self.catalog)?.clone();
        self.commit_mappings(mappings)?;
        tracing::info!(mapping = %key, "mapping updated");
        Ok(updated)
    }

    pub fn remove_mapping(&mut self, key: &MappingKey) -> AssetMapResult<AssetMapping> {
        let mut mappings = self.mappings.clone();
        let removed = mappings.remove(key)?;
        self.commit_mappings(mappings)?;
        tracing::info!(mapping = %key, "mapping removed");
        Ok(removed)
    }

    pub fn mappings_for(&self, id: &str, side: Side) -> BTreeSet<AssetId> {
        self.mappings.mappings_for(id, side)
    }

    pub fn validate_integrity(&self) -> Vec<DanglingMapping> {
        self.mappings.validate_integrity(&self.catalog)
    }

    /// Remove every dangling mapping; nothing is written when none exist
    pub fn prune_dangling(&mut self) -> AssetMapResult<Vec<AssetMapping>> {
        let mut mappings = self.mappings.clone();
        let pruned = mappings.prune_dangling(&self.catalog);
        if !pruned.is_empty() {
            self.commit_mappings(mappings)?;
            tracing::warn!(mappings = pruned.len(), "dangling mappings pruned");
        }
        Ok(pruned)
    }

    // ---- export ----

    pub fn report(&self) -> AssetMapResult<Report> {
        build_report(&self.catalog, &self.mappings)
    }

    pub fn export<E: WorkbookEncoder>(&self, encoder: &E) -> AssetMapResult<Vec<u8>> {
        encoder.encode(&self.report()?)
    }

    fn commit_registry<T: CatalogRecord>(&mut self, registry: AssetRegistry<T>) -> StoreResult<()> {
        T::save(&self.repo, &registry.to_vec())?;
        *self.catalog.registry_mut::<T>() = registry;
        Ok(())
    }

    fn commit_mappings(&mut self, mappings: MappingEngine) -> StoreResult<()> {
        self.repo.save_mappings(&mappings.to_vec())?;
        self.mappings = mappings;
        Ok(())
    }
}

fn load_state<R: CollectionRepository>(repo: &R) -> AssetMapResult<(AssetCatalog, MappingEngine)> {
    let financial = AssetRegistry::from_records(or_empty(repo.load_financial_assets())?)?;
    let physical = AssetRegistry::from_records(or_empty(repo.load_physical_assets())?)?;
    let catalog = AssetCatalog::new(financial, physical);
    let mappings = MappingEngine::from_mappings(or_empty(repo.load_mappings())?)?;

    let dangling = mappings.validate_integrity(&catalog);
    if !dangling.is_empty() {
        tracing::warn!(
            count = dangling.len(),
            "store holds dangling mappings; run `map check` for details"
        );
    }
    for (financial_id, total) in mappings.over_allocated() {
        tracing::warn!(
            financial_id = %financial_id,
            total,
            "stored allocations exceed 1; lower a weight with `map update`"
        );
    }
    tracing::debug!(
        financial = catalog.financial.len(),
        physical = catalog.physical.len(),
        mappings = mappings.len(),
        "session loaded"
    );
    Ok((catalog, mappings))
}

fn or_empty<T>(result: StoreResult<Vec<T>>) -> StoreResult<Vec<T>> {
    match result {
        Err(e) if e.is_not_found() => Ok(Vec::new()),
        other => other,
    }
}
