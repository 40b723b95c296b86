//! Report builder
//!
//! Turns the current catalog and mappings into a format-neutral table model:
//! one sheet per collection, header row equal to the stored field names.
//! Encoding that model into a workbook file is the job of a
//! [`WorkbookEncoder`](crate::domain::ports::WorkbookEncoder).

use crate::domain::entities::{AssetCatalog, Record};
use crate::domain::services::MappingEngine;
use crate::error::{AssetMapError, AssetMapResult};

pub const FINANCIAL_SHEET: &str = "financial_assets";
pub const PHYSICAL_SHEET: &str = "physical_assets";
pub const MAPPING_SHEET: &str = "mappings";

pub const FINANCIAL_FIELDS: &[&str] = &["id", "name", "category", "value", "acquired_on", "notes"];
pub const PHYSICAL_FIELDS: &[&str] = &["id", "name", "location", "status", "notes"];
pub const MAPPING_FIELDS: &[&str] = &[
    "financial_id",
    "physical_id",
    "allocation_key",
    "mapped_on",
    "weight",
    "notes",
];

#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Text(String),
    Number(f64),
    Empty,
}

impl Cell {
    fn text(s: impl Into<String>) -> Self {
        Cell::Text(s.into())
    }

    fn optional_text(s: Option<impl Into<String>>) -> Self {
        s.map(|v| Cell::Text(v.into())).unwrap_or(Cell::Empty)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Sheet {
    pub name: &'static str,
    pub header: &'static [&'static str],
    pub rows: Vec<Vec<Cell>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub sheets: Vec<Sheet>,
}

impl Report {
    pub fn sheet(&self, name: &str) -> Option<&Sheet> {
        self.sheets.iter().find(|s| s.name == name)
    }
}

/// Build the report, re-validating every record
///
/// Any malformed record aborts the whole build so a caller never ends up
/// with a partial workbook.
pub fn build_report(catalog: &AssetCatalog, mappings: &MappingEngine) -> AssetMapResult<Report> {
    let mut financial = Vec::with_capacity(catalog.financial.len());
    for asset in catalog.financial.list() {
        asset
            .validate()
            .map_err(|e| malformed("financial asset", asset.id().as_str(), e))?;
        financial.push(vec![
            Cell::text(asset.id.as_str()),
            Cell::text(&asset.name),
            Cell::text(&asset.category),
            Cell::Number(asset.value),
            Cell::text(asset.acquired_on.format("%Y-%m-%d").to_string()),
            Cell::text(&asset.notes),
        ]);
    }

    let mut physical = Vec::with_capacity(catalog.physical.len());
    for asset in catalog.physical.list() {
        asset
            .validate()
            .map_err(|e| malformed("physical asset", asset.id().as_str(), e))?;
        physical.push(vec![
            Cell::text(asset.id.as_str()),
            Cell::text(&asset.name),
            Cell::text(&asset.location),
            Cell::text(asset.status.as_str()),
            Cell::text(&asset.notes),
        ]);
    }

    let mut mapping_rows = Vec::with_capacity(mappings.len());
    for mapping in mappings.list() {
        mapping
            .validate()
            .map_err(|e| malformed("mapping", &mapping.key().to_string(), e))?;
        mapping_rows.push(vec![
            Cell::text(mapping.financial_id.as_str()),
            Cell::text(mapping.physical_id.as_str()),
            Cell::optional_text(mapping.allocation_key.as_deref()),
            Cell::optional_text(mapping.mapped_on.map(|d| d.format("%Y-%m-%d").to_string())),
            mapping.weight.map(Cell::Number).unwrap_or(Cell::Empty),
            Cell::text(&mapping.notes),
        ]);
    }

    Ok(Report {
        sheets: vec![
            Sheet {
                name: FINANCIAL_SHEET,
                header: FINANCIAL_FIELDS,
                rows: financial,
            },
            Sheet {
                name: PHYSICAL_SHEET,
                header: PHYSICAL_FIELDS,
                rows: physical,
            },
            Sheet {
                name: MAPPING_SHEET,
                header: MAPPING_FIELDS,
                rows: mapping_rows,
            },
        ],
    })
}

fn malformed(what: &str, id: &str, err: AssetMapError) -> AssetMapError {
    AssetMapError::export(format!("{} '{}' is malformed: {}", what, id, err))
}
