//! Mapping listings and integrity report

use assetmap::domain::services::DanglingMapping;
use assetmap::{AssetMapping, Side};

use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;
use crate::ui::table::Table;

pub fn render_mapping_table<'a>(
    mappings: impl IntoIterator<Item = &'a AssetMapping>,
    supports_color: bool,
) -> String {
    let mut table = Table::new([
        "financial_id",
        "physical_id",
        "allocation_key",
        "mapped_on",
        "weight",
    ]);
    for m in mappings {
        table.add_row([
            m.financial_id.to_string(),
            m.physical_id.to_string(),
            m.allocation_key.clone().unwrap_or_default(),
            m.mapped_on
                .map(|d| d.format("%Y-%m-%d").to_string())
                .unwrap_or_default(),
            m.weight.map(|w| w.to_string()).unwrap_or_default(),
        ]);
    }
    if table.is_empty() {
        return format!("{}\n", ColoredText::dim("No mappings.").render(supports_color));
    }
    table.render(supports_color)
}

/// Integrity report: one line per dangling mapping, naming the missing side(s)
pub fn render_integrity(
    dangling: &[DanglingMapping],
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    if dangling.is_empty() {
        return format!(
            "{} {}\n",
            Icon::Success.colored(supports_color, supports_unicode),
            ColoredText::success("All mappings reference existing assets.").render(supports_color)
        );
    }

    let mut out = format!(
        "{} {}\n",
        Icon::Error.colored(supports_color, supports_unicode),
        ColoredText::error(format!("{} dangling mapping(s):", dangling.len()))
            .bold()
            .render(supports_color)
    );
    for entry in dangling {
        let missing: Vec<String> = entry
            .missing
            .iter()
            .map(|side| {
                let id = match side {
                    Side::Financial => &entry.mapping.financial_id,
                    Side::Physical => &entry.mapping.physical_id,
                };
                format!("{} '{}'", side, id)
            })
            .collect();
        out.push_str(&format!(
            "  {} {}  {}\n",
            Icon::Arrow.render(supports_unicode),
            entry.mapping.key(),
            ColoredText::dim(format!("missing {}", missing.join(" and "))).render(supports_color)
        ));
    }
    out.push_str(&format!(
        "{}\n",
        ColoredText::dim("Run `assetmap map prune` to remove them.").render(supports_color)
    ));
    out
}

pub fn render_pruned(
    pruned: &[AssetMapping],
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    if pruned.is_empty() {
        return format!(
            "{} Nothing to prune.\n",
            Icon::Success.colored(supports_color, supports_unicode)
        );
    }
    let mut out = format!(
        "{} Pruned {} dangling mapping(s):\n",
        Icon::Warning.colored(supports_color, supports_unicode),
        pruned.len()
    );
    for m in pruned {
        out.push_str(&format!("  {} {}\n", Icon::Arrow.render(supports_unicode), m.key()));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use assetmap::AssetId;

    fn mapping(f: &str, p: &str) -> AssetMapping {
        AssetMapping::new(AssetId::parse(f).unwrap(), AssetId::parse(p).unwrap())
    }

    #[test]
    fn integrity_clean() {
        assert_eq!(
            render_integrity(&[], false, false),
            "[OK] All mappings reference existing assets.\n"
        );
    }

    #[test]
    fn integrity_report_names_missing_sides() {
        let dangling = vec![
            DanglingMapping {
                mapping: mapping("F1", "P9").with_allocation_key("north"),
                missing: vec![Side::Physical],
            },
            DanglingMapping {
                mapping: mapping("F7", "P8"),
                missing: vec![Side::Financial, Side::Physical],
            },
        ];
        let out = render_integrity(&dangling, false, false);
        insta::assert_snapshot!(out, @r"
        [FAIL] 2 dangling mapping(s):
          -> F1 -> P9 [north]  missing physical 'P9'
          -> F7 -> P8  missing financial 'F7' and physical 'P8'
        Run `assetmap map prune` to remove them.
        ");
    }

    #[test]
    fn mapping_table_blank_optional_columns() {
        let out = render_mapping_table([&mapping("F1", "P1").with_weight(0.25)], false);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "financial_id  physical_id  allocation_key  mapped_on  weight");
        assert_eq!(lines[1], "F1            P1                                      0.25");
    }
}
