//! Property tests for the JSON collection store.

use chrono::NaiveDate;
use proptest::prelude::*;

use assetmap::domain::ports::CollectionRepository;
use assetmap::infrastructure::JsonCollectionRepository;
use assetmap::{AssetId, AssetMapping, AssetStatus, FinancialAsset, PhysicalAsset};

fn asset_id() -> impl Strategy<Value = String> {
    "[A-Za-z0-9_-]{1,12}"
}

fn free_text() -> impl Strategy<Value = String> {
    "[A-Za-z0-9 ,.'\u{00e9}\u{00fc}-]{0,24}"
}

/// Whole amounts print and parse back exactly
fn whole_amount() -> impl Strategy<Value = f64> {
    (0u32..1_000_000_000).prop_map(f64::from)
}

fn date() -> impl Strategy<Value = NaiveDate> {
    (1990i32..2040, 1u32..=12, 1u32..=28)
        .prop_map(|(y, m, d)| NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default())
}

fn status() -> impl Strategy<Value = AssetStatus> {
    prop_oneof![
        Just(AssetStatus::InUse),
        Just(AssetStatus::Idle),
        Just(AssetStatus::Disposed),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 48,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: saved financial assets load back equal and in order.
    #[test]
    fn property_financial_assets_reload_equal(
        records in proptest::collection::btree_map(
            asset_id(),
            (free_text(), free_text(), whole_amount(), date(), free_text()),
            0..8,
        )
    ) {
        let dir = tempfile::tempdir().unwrap();
        let repo = JsonCollectionRepository::in_dir(dir.path());

        let assets: Vec<FinancialAsset> = records
            .into_iter()
            .map(|(id, (name, category, value, acquired_on, notes))| {
                FinancialAsset::new(
                    AssetId::parse(&id).unwrap(),
                    format!("n{}", name),
                    format!("c{}", category),
                    value,
                    acquired_on,
                )
                .with_notes(notes)
            })
            .collect();

        repo.save_financial_assets(&assets).unwrap();
        prop_assert_eq!(repo.load_financial_assets().unwrap(), assets);
    }

    /// PROPERTY: physical assets and mappings survive a save/load cycle.
    #[test]
    fn property_physical_and_mappings_reload_equal(
        ids in proptest::collection::btree_set(asset_id(), 1..6),
        statuses in proptest::collection::vec(status(), 6),
        weight in (1u32..=8).prop_map(|eighths| f64::from(eighths) / 8.0),
        mapped_on in proptest::option::of(date()),
    ) {
        let dir = tempfile::tempdir().unwrap();
        let repo = JsonCollectionRepository::in_dir(dir.path());

        let physical: Vec<PhysicalAsset> = ids
            .iter()
            .zip(statuses)
            .map(|(id, status)| {
                PhysicalAsset::new(AssetId::parse(id).unwrap(), "item", "site", status)
            })
            .collect();

        let first = physical[0].id.clone();
        let mut mappings = vec![AssetMapping::new(AssetId::parse("F1").unwrap(), first.clone())
            .with_weight(weight)
            .with_allocation_key("q1")];
        if let Some(date) = mapped_on {
            mappings.push(AssetMapping::new(AssetId::parse("F2").unwrap(), first).with_mapped_on(date));
        }

        repo.save_physical_assets(&physical).unwrap();
        repo.save_mappings(&mappings).unwrap();
        prop_assert_eq!(repo.load_physical_assets().unwrap(), physical);
        prop_assert_eq!(repo.load_mappings().unwrap(), mappings);
    }
}
