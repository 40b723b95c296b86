//! Asset listings and detail views

use std::collections::BTreeSet;

use assetmap::application::DeleteOutcome;
use assetmap::{AssetId, FinancialAsset, PhysicalAsset, Side};

use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;
use crate::ui::table::Table;

pub fn render_financial_table<'a>(
    assets: impl IntoIterator<Item = &'a FinancialAsset>,
    supports_color: bool,
) -> String {
    let mut table = Table::new(["id", "name", "category", "value", "acquired_on"]);
    for a in assets {
        table.add_row([
            a.id.to_string(),
            a.name.clone(),
            a.category.clone(),
            format!("{:.2}", a.value),
            a.acquired_on.format("%Y-%m-%d").to_string(),
        ]);
    }
    render_or_empty(&table, "financial", supports_color)
}

pub fn render_physical_table<'a>(
    assets: impl IntoIterator<Item = &'a PhysicalAsset>,
    supports_color: bool,
) -> String {
    let mut table = Table::new(["id", "name", "location", "status"]);
    for a in assets {
        table.add_row([
            a.id.to_string(),
            a.name.clone(),
            a.location.clone(),
            a.status.to_string(),
        ]);
    }
    render_or_empty(&table, "physical", supports_color)
}

fn render_or_empty(table: &Table, side: &str, supports_color: bool) -> String {
    if table.is_empty() {
        return format!(
            "{}\n",
            ColoredText::dim(format!("No {} assets.", side)).render(supports_color)
        );
    }
    table.render(supports_color)
}

pub fn render_financial_detail(
    asset: &FinancialAsset,
    counterparts: &BTreeSet<AssetId>,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let mut out = detail_title(asset.id.as_str(), &asset.name, supports_color);
    out.push_str(&format!("  category     {}\n", asset.category));
    out.push_str(&format!("  value        {:.2}\n", asset.value));
    out.push_str(&format!("  acquired_on  {}\n", asset.acquired_on.format("%Y-%m-%d")));
    push_notes(&mut out, &asset.notes);
    push_counterparts(&mut out, Side::Physical, counterparts, supports_color, supports_unicode);
    out
}

pub fn render_physical_detail(
    asset: &PhysicalAsset,
    counterparts: &BTreeSet<AssetId>,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let mut out = detail_title(asset.id.as_str(), &asset.name, supports_color);
    out.push_str(&format!("  location     {}\n", asset.location));
    out.push_str(&format!("  status       {}\n", asset.status));
    push_notes(&mut out, &asset.notes);
    push_counterparts(&mut out, Side::Financial, counterparts, supports_color, supports_unicode);
    out
}

fn detail_title(id: &str, name: &str, supports_color: bool) -> String {
    format!(
        "{} {}\n",
        ColoredText::info(id).bold().render(supports_color),
        name
    )
}

fn push_notes(out: &mut String, notes: &str) {
    if !notes.is_empty() {
        out.push_str(&format!("  notes        {}\n", notes));
    }
}

fn push_counterparts(
    out: &mut String,
    side: Side,
    ids: &BTreeSet<AssetId>,
    supports_color: bool,
    supports_unicode: bool,
) {
    if ids.is_empty() {
        out.push_str(&format!(
            "  {}\n",
            ColoredText::dim(format!("no {} assets mapped", side)).render(supports_color)
        ));
        return;
    }
    let link = Icon::Link.colored(supports_color, supports_unicode);
    let list: Vec<&str> = ids.iter().map(AssetId::as_str).collect();
    out.push_str(&format!("  {} {} {}\n", link, side, list.join(", ")));
}

pub fn render_saved(
    verb: &str,
    side: Side,
    id: &str,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    format!(
        "{} {} {} asset '{}'\n",
        Icon::Success.colored(supports_color, supports_unicode),
        verb,
        side,
        id
    )
}

pub fn render_deleted<T>(
    outcome: &DeleteOutcome<T>,
    side: Side,
    id: &str,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let mut out = render_saved("Deleted", side, id, supports_color, supports_unicode);
    if !outcome.removed_mappings.is_empty() {
        out.push_str(&format!(
            "{} {}\n",
            Icon::Warning.colored(supports_color, supports_unicode),
            ColoredText::warning(format!(
                "Removed {} dependent mapping(s):",
                outcome.removed_mappings.len()
            ))
            .render(supports_color)
        ));
        for m in &outcome.removed_mappings {
            out.push_str(&format!(
                "  {} {}\n",
                Icon::Arrow.render(supports_unicode),
                m.key()
            ));
        }
    }
    out
}
