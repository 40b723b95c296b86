//! JSON output for `--json`: one object per command on stdout

use std::io::{self, Write};

use serde_json::{json, Value};

use assetmap::application::{CleanResult, DeleteOutcome};
use assetmap::domain::services::DanglingMapping;
use assetmap::{AssetMapping, FinancialAsset, PhysicalAsset};

/// Write a single JSON object followed by a newline.
pub fn write_event(out: &mut impl Write, event: &Value) -> io::Result<()> {
    serde_json::to_writer(&mut *out, event)?;
    out.write_all(b"\n")?;
    Ok(())
}

/// Convenience helper that writes to stdout.
pub fn emit(event: Value) -> io::Result<()> {
    let mut out = io::stdout().lock();
    write_event(&mut out, &event)
}

pub fn financial(asset: &FinancialAsset) -> Value {
    json!({
        "id": asset.id.as_str(),
        "name": asset.name,
        "category": asset.category,
        "value": asset.value,
        "acquired_on": asset.acquired_on.format("%Y-%m-%d").to_string(),
        "notes": asset.notes,
    })
}

pub fn physical(asset: &PhysicalAsset) -> Value {
    json!({
        "id": asset.id.as_str(),
        "name": asset.name,
        "location": asset.location,
        "status": asset.status.as_str(),
        "notes": asset.notes,
    })
}

pub fn mapping(mapping: &AssetMapping) -> Value {
    json!({
        "financial_id": mapping.financial_id.as_str(),
        "physical_id": mapping.physical_id.as_str(),
        "allocation_key": mapping.allocation_key,
        "mapped_on": mapping.mapped_on.map(|d| d.format("%Y-%m-%d").to_string()),
        "weight": mapping.weight,
        "notes": mapping.notes,
    })
}

pub fn dangling(entry: &DanglingMapping) -> Value {
    json!({
        "mapping": mapping(&entry.mapping),
        "missing": entry.missing.iter().map(|s| s.as_str()).collect::<Vec<_>>(),
    })
}

pub fn deleted<T>(outcome: &DeleteOutcome<T>, record: impl Fn(&T) -> Value) -> Value {
    json!({
        "type": "deleted",
        "record": record(&outcome.removed),
        "removed_mappings": outcome.removed_mappings.iter().map(mapping).collect::<Vec<_>>(),
    })
}

pub fn cleaned(result: &CleanResult) -> Value {
    let counts: serde_json::Map<String, Value> = result
        .report
        .entries()
        .map(|(c, _, n)| (format!("U+{:04X}", c as u32), json!(n)))
        .collect();
    json!({
        "type": "cleaned",
        "source": result.source.display().to_string(),
        "written": result.written.as_ref().map(|p| p.display().to_string()),
        "changed": result.changed(),
        "total": result.report.total(),
        "counts": counts,
    })
}
