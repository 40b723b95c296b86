//! Mapping commands

use std::process::ExitCode;

use anyhow::Result;
use serde_json::json;

use assetmap::domain::value_objects::AssetId;
use assetmap::presentation::cli::MapCommand;

use crate::commands::CommandContext;
use crate::ui::json;
use crate::ui::primitives::icon::Icon;
use crate::ui::views::mappings::{render_integrity, render_mapping_table, render_pruned};

pub fn cmd_map(action: MapCommand, ctx: &CommandContext) -> Result<ExitCode> {
    let mut session = ctx.session()?;
    let (color, unicode) = (ctx.ui.color, ctx.ui.unicode);
    let ok = Icon::Success.colored(color, unicode);

    match action {
        MapCommand::Add(args) => {
            let mapping = session.add_mapping(args.mapping()?)?;
            ctx.output(
                || format!("{} Mapped {}\n", ok, mapping.key()),
                || json!({ "type": "mapping_added", "mapping": json::mapping(&mapping) }),
            )?;
        }
        MapCommand::Update(args) => {
            let key = args.target.key()?;
            let mapping = session.update_mapping(&key, &args.patch()?)?;
            ctx.output(
                || format!("{} Updated mapping {}\n", ok, key),
                || json!({ "type": "mapping_updated", "mapping": json::mapping(&mapping) }),
            )?;
        }
        MapCommand::Remove(args) => {
            let key = args.key()?;
            let mapping = session.remove_mapping(&key)?;
            ctx.output(
                || format!("{} Removed mapping {}\n", ok, key),
                || json!({ "type": "mapping_removed", "mapping": json::mapping(&mapping) }),
            )?;
        }
        MapCommand::List => {
            ctx.output(
                || render_mapping_table(session.mappings().list(), color),
                || {
                    json!({
                        "type": "mappings",
                        "records": session.mappings().list().map(json::mapping).collect::<Vec<_>>(),
                    })
                },
            )?;
        }
        MapCommand::For { id, side } => {
            let id = AssetId::parse(&id)?;
            let ids = session.mappings_for(id.as_str(), side);
            let ids: Vec<&str> = ids.iter().map(|i| i.as_str()).collect();
            ctx.output(
                || {
                    if ids.is_empty() {
                        format!("No {} assets mapped to {} '{}'.\n", side.opposite(), side, id)
                    } else {
                        format!("{}\n", ids.join("\n"))
                    }
                },
                || {
                    json!({
                        "type": "counterparts",
                        "id": id.as_str(),
                        "side": side.as_str(),
                        "counterpart_side": side.opposite().as_str(),
                        "ids": ids,
                    })
                },
            )?;
        }
        MapCommand::Check => {
            let dangling = session.validate_integrity();
            ctx.output(
                || render_integrity(&dangling, color, unicode),
                || {
                    json!({
                        "type": "integrity",
                        "ok": dangling.is_empty(),
                        "dangling": dangling.iter().map(json::dangling).collect::<Vec<_>>(),
                    })
                },
            )?;
            if !dangling.is_empty() {
                return Ok(ExitCode::FAILURE);
            }
        }
        MapCommand::Prune => {
            let pruned = session.prune_dangling()?;
            ctx.output(
                || render_pruned(&pruned, color, unicode),
                || {
                    json!({
                        "type": "pruned",
                        "removed": pruned.iter().map(json::mapping).collect::<Vec<_>>(),
                    })
                },
            )?;
        }
    }
    Ok(ExitCode::SUCCESS)
}
