//! Both asset registries side by side

use crate::domain::entities::{AssetRegistry, FinancialAsset, PhysicalAsset, Record};
use crate::domain::ports::{CollectionRepository, StoreResult};
use crate::domain::value_objects::Side;

/// The financial and physical registries a mapping refers into
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AssetCatalog {
    pub financial: AssetRegistry<FinancialAsset>,
    pub physical: AssetRegistry<PhysicalAsset>,
}

impl AssetCatalog {
    pub fn new(
        financial: AssetRegistry<FinancialAsset>,
        physical: AssetRegistry<PhysicalAsset>,
    ) -> Self {
        Self {
            financial,
            physical,
        }
    }

    pub fn contains(&self, side: Side, id: &str) -> bool {
        match side {
            Side::Financial => self.financial.contains(id),
            Side::Physical => self.physical.contains(id),
        }
    }

    pub fn registry<T: CatalogRecord>(&self) -> &AssetRegistry<T> {
        T::registry(self)
    }

    pub fn registry_mut<T: CatalogRecord>(&mut self) -> &mut AssetRegistry<T> {
        T::registry_mut(self)
    }
}

/// A record kind with its own registry in the catalog and its own collection
pub trait CatalogRecord: Record {
    fn registry(catalog: &AssetCatalog) -> &AssetRegistry<Self>;
    fn registry_mut(catalog: &mut AssetCatalog) -> &mut AssetRegistry<Self>;
    fn save<R: CollectionRepository + ?Sized>(repo: &R, records: &[Self]) -> StoreResult<()>;
}

impl CatalogRecord for FinancialAsset {
    fn registry(catalog: &AssetCatalog) -> &AssetRegistry<Self> {
        &catalog.financial
    }

    fn registry_mut(catalog: &mut AssetCatalog) -> &mut AssetRegistry<Self> {
        &mut catalog.financial
    }

    fn save<R: CollectionRepository + ?Sized>(repo: &R, records: &[Self]) -> StoreResult<()> {
        repo.save_financial_assets(records)
    }
}

impl CatalogRecord for PhysicalAsset {
    fn registry(catalog: &AssetCatalog) -> &AssetRegistry<Self> {
        &catalog.physical
    }

    fn registry_mut(catalog: &mut AssetCatalog) -> &mut AssetRegistry<Self> {
        &mut catalog.physical
    }

    fn save<R: CollectionRepository + ?Sized>(repo: &R, records: &[Self]) -> StoreResult<()> {
        repo.save_physical_assets(records)
    }
}
