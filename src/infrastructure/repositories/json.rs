//! JSON Collection Repository
//!
//! Stores each collection as a pretty-printed JSON array of objects. Records
//! are decoded into explicit shapes with `deny_unknown_fields`, then
//! converted into validated domain entities; any failure marks the whole
//! file as corrupted rather than guessing.

use std::collections::HashSet;
use std::hash::Hash;
use std::io;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::domain::entities::{AssetMapping, FinancialAsset, MappingKey, PhysicalAsset, Record};
use crate::domain::ports::{Collection, CollectionRepository, StoreError, StoreResult};
use crate::domain::value_objects::{AssetId, AssetStatus};
use crate::error::AssetMapResult;
use crate::infrastructure::fs::LocalFs;

pub const DEFAULT_FINANCIAL_FILE: &str = "financial_assets.json";
pub const DEFAULT_PHYSICAL_FILE: &str = "physical_assets.json";
pub const DEFAULT_MAPPING_FILE: &str = "mappings.json";

/// Location of each collection file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectionPaths {
    pub financial: PathBuf,
    pub physical: PathBuf,
    pub mappings: PathBuf,
}

impl CollectionPaths {
    /// Default file names inside `dir`
    pub fn in_dir(dir: &Path) -> Self {
        Self {
            financial: dir.join(DEFAULT_FINANCIAL_FILE),
            physical: dir.join(DEFAULT_PHYSICAL_FILE),
            mappings: dir.join(DEFAULT_MAPPING_FILE),
        }
    }

    pub fn get(&self, collection: Collection) -> &Path {
        match collection {
            Collection::FinancialAssets => &self.financial,
            Collection::PhysicalAssets => &self.physical,
            Collection::Mappings => &self.mappings,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct JsonFinancialAsset {
    id: String,
    name: String,
    category: String,
    value: f64,
    acquired_on: NaiveDate,
    #[serde(default)]
    notes: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct JsonPhysicalAsset {
    id: String,
    name: String,
    location: String,
    status: AssetStatus,
    #[serde(default)]
    notes: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct JsonMapping {
    financial_id: String,
    physical_id: String,
    #[serde(default)]
    allocation_key: Option<String>,
    #[serde(default)]
    mapped_on: Option<NaiveDate>,
    #[serde(default)]
    weight: Option<f64>,
    #[serde(default)]
    notes: String,
}

pub struct JsonCollectionRepository {
    fs: LocalFs,
    paths: CollectionPaths,
}

impl JsonCollectionRepository {
    pub fn new(paths: CollectionPaths) -> Self {
        Self {
            fs: LocalFs::new(),
            paths,
        }
    }

    /// Repository with default file names inside `dir`
    pub fn in_dir(dir: &Path) -> Self {
        Self::new(CollectionPaths::in_dir(dir))
    }

    pub fn paths(&self) -> &CollectionPaths {
        &self.paths
    }

    fn read_collection<D: DeserializeOwned>(&self, collection: Collection) -> StoreResult<Vec<D>> {
        let path = self.paths.get(collection);
        let content = match self.fs.read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Err(StoreError::NotFound {
                    collection,
                    path: path.to_path_buf(),
                })
            }
            Err(e) => return Err(access(path, e)),
        };

        if content.trim().is_empty() {
            return Ok(Vec::new());
        }

        let records: Vec<D> =
            serde_json::from_str(&content).map_err(|e| self.corrupted(collection, e.to_string()))?;
        tracing::debug!(
            collection = %collection,
            path = %path.display(),
            records = records.len(),
            "collection loaded"
        );
        Ok(records)
    }

    fn write_collection<D: Serialize>(&self, collection: Collection, records: &[D]) -> StoreResult<()> {
        let path = self.paths.get(collection);
        let mut content =
            serde_json::to_string_pretty(records).map_err(|e| StoreError::Serialization {
                collection,
                message: e.to_string(),
            })?;
        content.push('\n');

        self.fs
            .write_atomic(path, content.as_bytes())
            .map_err(|e| access(path, e))?;
        tracing::debug!(
            collection = %collection,
            path = %path.display(),
            records = records.len(),
            "collection saved"
        );
        Ok(())
    }

    /// Convert decoded shapes into entities, rejecting invalid records and duplicates
    fn convert<D, T, K>(
        &self,
        collection: Collection,
        raw: Vec<D>,
        to_entity: impl Fn(D) -> AssetMapResult<T>,
        key_of: impl Fn(&T) -> K,
    ) -> StoreResult<Vec<T>>
    where
        K: Hash + Eq + std::fmt::Debug,
    {
        let mut seen = HashSet::with_capacity(raw.len());
        let mut records = Vec::with_capacity(raw.len());
        for (index, item) in raw.into_iter().enumerate() {
            let record = to_entity(item)
                .map_err(|e| self.corrupted(collection, format!("record {}: {}", index, e)))?;
            let key = key_of(&record);
            if !seen.insert(key) {
                let key = key_of(&record);
                return Err(self.corrupted(
                    collection,
                    format!("record {}: duplicate entry {:?}", index, key),
                ));
            }
            records.push(record);
        }
        Ok(records)
    }

    fn corrupted(&self, collection: Collection, message: String) -> StoreError {
        StoreError::Corrupted {
            collection,
            path: self.paths.get(collection).to_path_buf(),
            message,
        }
    }
}

impl CollectionRepository for JsonCollectionRepository {
    fn load_financial_assets(&self) -> StoreResult<Vec<FinancialAsset>> {
        let raw: Vec<JsonFinancialAsset> = self.read_collection(Collection::FinancialAssets)?;
        self.convert(
            Collection::FinancialAssets,
            raw,
            financial_from_json,
            |r: &FinancialAsset| r.id.to_string(),
        )
    }

    fn load_physical_assets(&self) -> StoreResult<Vec<PhysicalAsset>> {
        let raw: Vec<JsonPhysicalAsset> = self.read_collection(Collection::PhysicalAssets)?;
        self.convert(
            Collection::PhysicalAssets,
            raw,
            physical_from_json,
            |r: &PhysicalAsset| r.id.to_string(),
        )
    }

    fn load_mappings(&self) -> StoreResult<Vec<AssetMapping>> {
        let raw: Vec<JsonMapping> = self.read_collection(Collection::Mappings)?;
        self.convert(Collection::Mappings, raw, mapping_from_json, |r: &AssetMapping| {
            r.key()
        })
    }

    fn save_financial_assets(&self, records: &[FinancialAsset]) -> StoreResult<()> {
        let raw: Vec<JsonFinancialAsset> = records.iter().map(financial_to_json).collect();
        self.write_collection(Collection::FinancialAssets, &raw)
    }

    fn save_physical_assets(&self, records: &[PhysicalAsset]) -> StoreResult<()> {
        let raw: Vec<JsonPhysicalAsset> = records.iter().map(physical_to_json).collect();
        self.write_collection(Collection::PhysicalAssets, &raw)
    }

    fn save_mappings(&self, records: &[AssetMapping]) -> StoreResult<()> {
        let raw: Vec<JsonMapping> = records.iter().map(mapping_to_json).collect();
        self.write_collection(Collection::Mappings, &raw)
    }
}

fn access(path: &Path, err: io::Error) -> StoreError {
    StoreError::Access {
        path: path.to_path_buf(),
        message: err.to_string(),
    }
}

fn financial_from_json(raw: JsonFinancialAsset) -> AssetMapResult<FinancialAsset> {
    let asset = FinancialAsset::new(
        AssetId::parse(&raw.id)?,
        raw.name,
        raw.category,
        raw.value,
        raw.acquired_on,
    )
    .with_notes(raw.notes);
    asset.validate()?;
    Ok(asset)
}

fn financial_to_json(asset: &FinancialAsset) -> JsonFinancialAsset {
    JsonFinancialAsset {
        id: asset.id.to_string(),
        name: asset.name.clone(),
        category: asset.category.clone(),
        value: asset.value,
        acquired_on: asset.acquired_on,
        notes: asset.notes.clone(),
    }
}

fn physical_from_json(raw: JsonPhysicalAsset) -> AssetMapResult<PhysicalAsset> {
    let asset = PhysicalAsset::new(AssetId::parse(&raw.id)?, raw.name, raw.location, raw.status)
        .with_notes(raw.notes);
    asset.validate()?;
    Ok(asset)
}

fn physical_to_json(asset: &PhysicalAsset) -> JsonPhysicalAsset {
    JsonPhysicalAsset {
        id: asset.id.to_string(),
        name: asset.name.clone(),
        location: asset.location.clone(),
        status: asset.status,
        notes: asset.notes.clone(),
    }
}

fn mapping_from_json(raw: JsonMapping) -> AssetMapResult<AssetMapping> {
    let key = MappingKey::new(
        AssetId::parse_field("financial_id", &raw.financial_id)?,
        AssetId::parse_field("physical_id", &raw.physical_id)?,
        raw.allocation_key,
    );
    let mapping = AssetMapping {
        financial_id: key.financial_id,
        physical_id: key.physical_id,
        allocation_key: key.allocation_key,
        mapped_on: raw.mapped_on,
        weight: raw.weight,
        notes: raw.notes,
    };
    mapping.validate()?;
    Ok(mapping)
}

fn mapping_to_json(mapping: &AssetMapping) -> JsonMapping {
    JsonMapping {
        financial_id: mapping.financial_id.to_string(),
        physical_id: mapping.physical_id.to_string(),
        allocation_key: mapping.allocation_key.clone(),
        mapped_on: mapping.mapped_on,
        weight: mapping.weight,
        notes: mapping.notes.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::services::report::{FINANCIAL_FIELDS, MAPPING_FIELDS, PHYSICAL_FIELDS};
    use std::fs;
    use tempfile::tempdir;

    fn id(s: &str) -> AssetId {
        AssetId::parse(s).unwrap()
    }

    fn financial(s: &str) -> FinancialAsset {
        FinancialAsset::new(
            id(s),
            "Compressor",
            "Plant",
            12_500.5,
            NaiveDate::from_ymd_opt(2021, 11, 3).unwrap(),
        )
        .with_notes("serial 44-A")
    }

    #[test]
    fn load_missing_is_not_found() {
        let dir = tempdir().unwrap();
        let repo = JsonCollectionRepository::in_dir(dir.path());
        let err = repo.load_financial_assets().unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn empty_file_is_empty_collection() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join(DEFAULT_MAPPING_FILE), "  \n").unwrap();
        let repo = JsonCollectionRepository::in_dir(dir.path());
        assert!(repo.load_mappings().unwrap().is_empty());
    }

    #[test]
    fn save_and_load_roundtrip_all_collections() {
        let dir = tempdir().unwrap();
        let repo = JsonCollectionRepository::in_dir(dir.path());

        let fin = vec![financial("F1"), financial("F2")];
        let phys = vec![
            PhysicalAsset::new(id("P1"), "Compressor unit", "Hall 3", AssetStatus::Disposed),
        ];
        let maps = vec![
            AssetMapping::new(id("F1"), id("P1"))
                .with_allocation_key("north")
                .with_weight(0.25)
                .with_mapped_on(NaiveDate::from_ymd_opt(2024, 2, 29).unwrap()),
            AssetMapping::new(id("F2"), id("P1")),
        ];

        repo.save_financial_assets(&fin).unwrap();
        repo.save_physical_assets(&phys).unwrap();
        repo.save_mappings(&maps).unwrap();

        assert_eq!(repo.load_financial_assets().unwrap(), fin);
        assert_eq!(repo.load_physical_assets().unwrap(), phys);
        assert_eq!(repo.load_mappings().unwrap(), maps);
    }

    #[test]
    fn saved_keys_match_export_headers() {
        let dir = tempdir().unwrap();
        let repo = JsonCollectionRepository::in_dir(dir.path());
        repo.save_financial_assets(&[financial("F1")]).unwrap();
        repo.save_physical_assets(&[PhysicalAsset::new(id("P1"), "n", "l", AssetStatus::Idle)])
            .unwrap();
        repo.save_mappings(&[AssetMapping::new(id("F1"), id("P1"))])
            .unwrap();

        for (file, fields) in [
            (DEFAULT_FINANCIAL_FILE, FINANCIAL_FIELDS),
            (DEFAULT_PHYSICAL_FILE, PHYSICAL_FIELDS),
            (DEFAULT_MAPPING_FILE, MAPPING_FIELDS),
        ] {
            let content = fs::read_to_string(dir.path().join(file)).unwrap();
            let value: serde_json::Value = serde_json::from_str(&content).unwrap();
            let object = value[0].as_object().unwrap();
            let keys: Vec<&str> = object.keys().map(String::as_str).collect();
            let mut expected: Vec<&str> = fields.to_vec();
            let mut actual = keys.clone();
            expected.sort_unstable();
            actual.sort_unstable();
            assert_eq!(actual, expected, "{}", file);
        }
    }

    #[test]
    fn load_rejects_unknown_fields() {
        let dir = tempdir().unwrap();
        fs::write(
            dir.path().join(DEFAULT_PHYSICAL_FILE),
            r#"[{"id":"P1","name":"n","location":"l","status":"idle","colour":"red"}]"#,
        )
        .unwrap();
        let repo = JsonCollectionRepository::in_dir(dir.path());
        let err = repo.load_physical_assets().unwrap_err();
        assert!(matches!(err, StoreError::Corrupted { .. }));
        assert!(err.to_string().contains("colour"));
    }

    #[test]
    fn load_rejects_non_numeric_value() {
        let dir = tempdir().unwrap();
        fs::write(
            dir.path().join(DEFAULT_FINANCIAL_FILE),
            r#"[{"id":"F1","name":"n","category":"c","value":"lots","acquired_on":"2024-01-01"}]"#,
        )
        .unwrap();
        let repo = JsonCollectionRepository::in_dir(dir.path());
        assert!(matches!(
            repo.load_financial_assets(),
            Err(StoreError::Corrupted { .. })
        ));
    }

    #[test]
    fn load_rejects_invalid_record_with_index() {
        let dir = tempdir().unwrap();
        fs::write(
            dir.path().join(DEFAULT_FINANCIAL_FILE),
            r#"[
                {"id":"F1","name":"n","category":"c","value":1,"acquired_on":"2024-01-01"},
                {"id":"","name":"n","category":"c","value":1,"acquired_on":"2024-01-01"}
            ]"#,
        )
        .unwrap();
        let repo = JsonCollectionRepository::in_dir(dir.path());
        let err = repo.load_financial_assets().unwrap_err();
        assert!(err.to_string().contains("record 1: invalid id"));
    }

    #[test]
    fn load_rejects_duplicate_ids() {
        let dir = tempdir().unwrap();
        fs::write(
            dir.path().join(DEFAULT_PHYSICAL_FILE),
            r#"[
                {"id":"P1","name":"a","location":"l","status":"idle"},
                {"id":"P1","name":"b","location":"l","status":"in-use"}
            ]"#,
        )
        .unwrap();
        let repo = JsonCollectionRepository::in_dir(dir.path());
        let err = repo.load_physical_assets().unwrap_err();
        assert!(err.to_string().contains("duplicate entry"));
    }

    #[test]
    fn notes_and_optional_metadata_default_when_absent() {
        let dir = tempdir().unwrap();
        fs::write(
            dir.path().join(DEFAULT_MAPPING_FILE),
            r#"[{"financial_id":"F1","physical_id":"P1"}]"#,
        )
        .unwrap();
        let repo = JsonCollectionRepository::in_dir(dir.path());
        let maps = repo.load_mappings().unwrap();
        assert_eq!(maps, vec![AssetMapping::new(id("F1"), id("P1"))]);
    }
}
