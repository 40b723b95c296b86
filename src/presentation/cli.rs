//! CLI Argument Parsing
//!
//! This module defines the CLI interface using clap.
//!
//! ## Design Notes
//!
//! - Global flags (--data-dir, --config, --json, --color, --verbose) are inherited by all subcommands
//! - Numeric and date inputs are taken as text and parsed by the domain layer,
//!   so a malformed value is a validation error rather than a usage error

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::config::ColorMode;
use crate::domain::entities::{
    AssetMapping, FinancialAssetForm, FinancialAssetPatch, MappingKey, MappingPatch,
    PhysicalAssetForm, PhysicalAssetPatch,
};
use crate::domain::value_objects::{
    parse_amount, parse_date, parse_weight, require_text, AssetId, AssetStatus, DeletePolicy,
    Side,
};
use crate::error::AssetMapResult;

/// assetmap - cross-reference financial and physical asset records
#[derive(Parser, Debug)]
#[command(name = "assetmap")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Directory holding the collection files
    #[arg(long, global = true, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// Config file (default: <data-dir>/assetmap.toml)
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Print one JSON object per command on stdout
    #[arg(long, global = true)]
    pub json: bool,

    /// Color output mode
    #[arg(long, global = true, value_enum)]
    pub color: Option<ColorMode>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Manage financial assets
    Financial {
        #[command(subcommand)]
        action: FinancialCommand,
    },

    /// Manage physical assets
    Physical {
        #[command(subcommand)]
        action: PhysicalCommand,
    },

    /// Manage financial↔physical mappings
    Map {
        #[command(subcommand)]
        action: MapCommand,
    },

    /// Export all collections to an .xlsx workbook
    Export {
        /// Output file (default: export.path from config)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Replace invisible Unicode characters in a text file with spaces
    Clean {
        /// File to clean
        file: PathBuf,

        /// Write the cleaned text here instead of rewriting FILE
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Report only; exit 1 if the file would change
        #[arg(long, conflicts_with = "output")]
        check: bool,
    },
}

#[derive(Subcommand, Debug)]
pub enum FinancialCommand {
    /// Add a financial asset
    Add(FinancialAddArgs),
    /// Change fields of a financial asset
    Update(FinancialUpdateArgs),
    /// Delete a financial asset
    Delete(DeleteArgs),
    /// List financial assets
    List,
    /// Show one financial asset and its physical counterparts
    Show { id: String },
}

#[derive(Subcommand, Debug)]
pub enum PhysicalCommand {
    /// Add a physical asset
    Add(PhysicalAddArgs),
    /// Change fields of a physical asset
    Update(PhysicalUpdateArgs),
    /// Delete a physical asset
    Delete(DeleteArgs),
    /// List physical assets
    List,
    /// Show one physical asset and its financial counterparts
    Show { id: String },
}

#[derive(Subcommand, Debug)]
pub enum MapCommand {
    /// Map a financial asset to a physical asset
    Add(MapAddArgs),
    /// Change mapping metadata
    Update(MapUpdateArgs),
    /// Remove a mapping
    Remove(MapKeyArgs),
    /// List mappings
    List,
    /// Counterpart ids of one asset
    For {
        id: String,

        /// Side the id belongs to
        #[arg(long, value_enum)]
        side: Side,
    },
    /// Report mappings whose assets no longer exist (exit 1 if any)
    Check,
    /// Remove mappings whose assets no longer exist
    Prune,
}

#[derive(Args, Debug)]
pub struct FinancialAddArgs {
    #[arg(long)]
    pub id: String,
    #[arg(long)]
    pub name: String,
    #[arg(long)]
    pub category: String,
    /// Monetary value, e.g. 1200.50
    #[arg(long, allow_hyphen_values = true)]
    pub value: String,
    /// Acquisition date (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    pub acquired_on: String,
    #[arg(long, default_value = "")]
    pub notes: String,
}

impl FinancialAddArgs {
    pub fn form(&self) -> FinancialAssetForm {
        FinancialAssetForm {
            id: self.id.clone(),
            name: self.name.clone(),
            category: self.category.clone(),
            value: self.value.clone(),
            acquired_on: self.acquired_on.clone(),
            notes: self.notes.clone(),
        }
    }
}

#[derive(Args, Debug)]
pub struct FinancialUpdateArgs {
    pub id: String,
    #[arg(long)]
    pub name: Option<String>,
    #[arg(long)]
    pub category: Option<String>,
    #[arg(long, allow_hyphen_values = true)]
    pub value: Option<String>,
    #[arg(long, value_name = "DATE")]
    pub acquired_on: Option<String>,
    #[arg(long)]
    pub notes: Option<String>,
}

impl FinancialUpdateArgs {
    pub fn asset_id(&self) -> AssetMapResult<AssetId> {
        AssetId::parse(&self.id)
    }

    pub fn patch(&self) -> AssetMapResult<FinancialAssetPatch> {
        Ok(FinancialAssetPatch {
            name: text("name", &self.name)?,
            category: text("category", &self.category)?,
            value: self
                .value
                .as_deref()
                .map(|v| parse_amount("value", v))
                .transpose()?,
            acquired_on: self
                .acquired_on
                .as_deref()
                .map(|d| parse_date("acquired_on", d))
                .transpose()?,
            notes: self.notes.clone(),
        })
    }
}

#[derive(Args, Debug)]
pub struct PhysicalAddArgs {
    #[arg(long)]
    pub id: String,
    #[arg(long)]
    pub name: String,
    #[arg(long)]
    pub location: String,
    /// in-use, idle or disposed
    #[arg(long)]
    pub status: String,
    #[arg(long, default_value = "")]
    pub notes: String,
}

impl PhysicalAddArgs {
    pub fn form(&self) -> PhysicalAssetForm {
        PhysicalAssetForm {
            id: self.id.clone(),
            name: self.name.clone(),
            location: self.location.clone(),
            status: self.status.clone(),
            notes: self.notes.clone(),
        }
    }
}

#[derive(Args, Debug)]
pub struct PhysicalUpdateArgs {
    pub id: String,
    #[arg(long)]
    pub name: Option<String>,
    #[arg(long)]
    pub location: Option<String>,
    #[arg(long)]
    pub status: Option<String>,
    #[arg(long)]
    pub notes: Option<String>,
}

impl PhysicalUpdateArgs {
    pub fn asset_id(&self) -> AssetMapResult<AssetId> {
        AssetId::parse(&self.id)
    }

    pub fn patch(&self) -> AssetMapResult<PhysicalAssetPatch> {
        Ok(PhysicalAssetPatch {
            name: text("name", &self.name)?,
            location: text("location", &self.location)?,
            status: self
                .status
                .as_deref()
                .map(str::parse::<AssetStatus>)
                .transpose()?,
            notes: self.notes.clone(),
        })
    }
}

#[derive(Args, Debug)]
pub struct DeleteArgs {
    pub id: String,

    /// Refuse the delete if mappings reference the asset
    #[arg(long, conflicts_with = "cascade")]
    pub strict: bool,

    /// Remove referencing mappings along with the asset
    #[arg(long)]
    pub cascade: bool,

    /// Skip the confirmation prompt
    #[arg(short, long)]
    pub yes: bool,
}

impl DeleteArgs {
    pub fn asset_id(&self) -> AssetMapResult<AssetId> {
        AssetId::parse(&self.id)
    }

    /// Policy override, if one was given
    pub fn policy(&self) -> Option<DeletePolicy> {
        match (self.strict, self.cascade) {
            (true, _) => Some(DeletePolicy::Strict),
            (_, true) => Some(DeletePolicy::Cascade),
            _ => None,
        }
    }
}

#[derive(Args, Debug)]
pub struct MapKeyArgs {
    pub financial_id: String,
    pub physical_id: String,

    /// Allocation key distinguishing partial allocations of the same pair
    #[arg(long)]
    pub key: Option<String>,
}

impl MapKeyArgs {
    pub fn key(&self) -> AssetMapResult<MappingKey> {
        Ok(MappingKey::new(
            AssetId::parse_field("financial_id", &self.financial_id)?,
            AssetId::parse_field("physical_id", &self.physical_id)?,
            self.key.clone(),
        ))
    }
}

#[derive(Args, Debug)]
pub struct MapAddArgs {
    #[command(flatten)]
    pub target: MapKeyArgs,

    /// Mapping date (YYYY-MM-DD)
    #[arg(long)]
    pub date: Option<String>,

    /// Share of the financial asset, in (0, 1]
    #[arg(long, allow_hyphen_values = true)]
    pub weight: Option<String>,

    #[arg(long, default_value = "")]
    pub notes: String,
}

impl MapAddArgs {
    pub fn mapping(&self) -> AssetMapResult<AssetMapping> {
        let key = self.target.key()?;
        let mut mapping = AssetMapping::new(key.financial_id, key.physical_id)
            .with_notes(self.notes.clone());
        mapping.allocation_key = key.allocation_key;
        if let Some(date) = &self.date {
            mapping = mapping.with_mapped_on(parse_date("date", date)?);
        }
        if let Some(weight) = &self.weight {
            mapping = mapping.with_weight(parse_weight(weight)?);
        }
        Ok(mapping)
    }
}

#[derive(Args, Debug)]
pub struct MapUpdateArgs {
    #[command(flatten)]
    pub target: MapKeyArgs,

    #[arg(long)]
    pub date: Option<String>,

    #[arg(long, allow_hyphen_values = true)]
    pub weight: Option<String>,

    #[arg(long)]
    pub notes: Option<String>,
}

impl MapUpdateArgs {
    pub fn patch(&self) -> AssetMapResult<MappingPatch> {
        Ok(MappingPatch {
            mapped_on: self
                .date
                .as_deref()
                .map(|d| parse_date("date", d))
                .transpose()?,
            weight: self.weight.as_deref().map(parse_weight).transpose()?,
            notes: self.notes.clone(),
        })
    }
}

fn text(field: &str, value: &Option<String>) -> AssetMapResult<Option<String>> {
    value.as_deref().map(|v| require_text(field, v)).transpose()
}
