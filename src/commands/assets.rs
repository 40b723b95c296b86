//! Financial and physical asset commands

use std::process::ExitCode;

use anyhow::Result;
use dialoguer::Confirm;
use serde_json::{json, Value};

use assetmap::domain::entities::CatalogRecord;
use assetmap::domain::value_objects::{AssetId, DeletePolicy};
use assetmap::presentation::cli::{DeleteArgs, FinancialCommand, PhysicalCommand};
use assetmap::presentation::factory::ConcreteSession;
use assetmap::{FinancialAsset, PhysicalAsset, Side};

use crate::commands::CommandContext;
use crate::ui::json;
use crate::ui::views::assets::{
    render_deleted, render_financial_detail, render_financial_table, render_physical_detail,
    render_physical_table, render_saved,
};

pub fn cmd_financial(action: FinancialCommand, ctx: &CommandContext) -> Result<ExitCode> {
    let mut session = ctx.session()?;
    let (color, unicode) = (ctx.ui.color, ctx.ui.unicode);

    match action {
        FinancialCommand::Add(args) => {
            let asset = session.create(args.form().parse()?)?;
            saved(
                ctx,
                "Added",
                "created",
                Side::Financial,
                json::financial(&asset),
                asset.id.as_str(),
            )?;
        }
        FinancialCommand::Update(args) => {
            let asset = session.update::<FinancialAsset>(args.asset_id()?.as_str(), &args.patch()?)?;
            saved(
                ctx,
                "Updated",
                "updated",
                Side::Financial,
                json::financial(&asset),
                asset.id.as_str(),
            )?;
        }
        FinancialCommand::Delete(args) => {
            return delete::<FinancialAsset>(&mut session, &args, json::financial, ctx);
        }
        FinancialCommand::List => {
            ctx.output(
                || render_financial_table(session.financial_assets(), color),
                || {
                    json!({
                        "type": "financial_assets",
                        "records": session.financial_assets().map(json::financial).collect::<Vec<_>>(),
                    })
                },
            )?;
        }
        FinancialCommand::Show { id } => {
            let id = AssetId::parse(&id)?;
            let asset = session.require::<FinancialAsset>(id.as_str())?;
            let counterparts = session.mappings_for(id.as_str(), Side::Financial);
            ctx.output(
                || render_financial_detail(asset, &counterparts, color, unicode),
                || {
                    json!({
                        "type": "financial_asset",
                        "record": json::financial(asset),
                        "physical_ids": counterparts.iter().map(|c| c.as_str()).collect::<Vec<_>>(),
                    })
                },
            )?;
        }
    }
    Ok(ExitCode::SUCCESS)
}

pub fn cmd_physical(action: PhysicalCommand, ctx: &CommandContext) -> Result<ExitCode> {
    let mut session = ctx.session()?;
    let (color, unicode) = (ctx.ui.color, ctx.ui.unicode);

    match action {
        PhysicalCommand::Add(args) => {
            let asset = session.create(args.form().parse()?)?;
            saved(
                ctx,
                "Added",
                "created",
                Side::Physical,
                json::physical(&asset),
                asset.id.as_str(),
            )?;
        }
        PhysicalCommand::Update(args) => {
            let asset = session.update::<PhysicalAsset>(args.asset_id()?.as_str(), &args.patch()?)?;
            saved(
                ctx,
                "Updated",
                "updated",
                Side::Physical,
                json::physical(&asset),
                asset.id.as_str(),
            )?;
        }
        PhysicalCommand::Delete(args) => {
            return delete::<PhysicalAsset>(&mut session, &args, json::physical, ctx);
        }
        PhysicalCommand::List => {
            ctx.output(
                || render_physical_table(session.physical_assets(), color),
                || {
                    json!({
                        "type": "physical_assets",
                        "records": session.physical_assets().map(json::physical).collect::<Vec<_>>(),
                    })
                },
            )?;
        }
        PhysicalCommand::Show { id } => {
            let id = AssetId::parse(&id)?;
            let asset = session.require::<PhysicalAsset>(id.as_str())?;
            let counterparts = session.mappings_for(id.as_str(), Side::Physical);
            ctx.output(
                || render_physical_detail(asset, &counterparts, color, unicode),
                || {
                    json!({
                        "type": "physical_asset",
                        "record": json::physical(asset),
                        "financial_ids": counterparts.iter().map(|c| c.as_str()).collect::<Vec<_>>(),
                    })
                },
            )?;
        }
    }
    Ok(ExitCode::SUCCESS)
}

fn saved(
    ctx: &CommandContext,
    verb: &str,
    event: &str,
    side: Side,
    record: Value,
    id: &str,
) -> Result<()> {
    ctx.output(
        || render_saved(verb, side, id, ctx.ui.color, ctx.ui.unicode),
        || json!({ "type": event, "side": side.as_str(), "record": record }),
    )
}

fn delete<T: CatalogRecord>(
    session: &mut ConcreteSession,
    args: &DeleteArgs,
    to_json: fn(&T) -> Value,
    ctx: &CommandContext,
) -> Result<ExitCode> {
    let side = T::SIDE;
    let id = args.asset_id()?;
    let policy = args.policy().unwrap_or(session.policy());
    let dependents = session.dependent_count(id.as_str(), side);

    if policy == DeletePolicy::Cascade && dependents > 0 && !args.yes && ctx.ui.can_prompt() {
        let confirmed = Confirm::new()
            .with_prompt(format!(
                "Delete {} asset '{}' and {} mapping(s) that reference it?",
                side, id, dependents
            ))
            .default(false)
            .interact()?;
        if !confirmed {
            eprintln!("Delete cancelled.");
            return Ok(ExitCode::FAILURE);
        }
    }

    let outcome = session.delete::<T>(id.as_str(), Some(policy))?;
    ctx.output(
        || render_deleted(&outcome, side, id.as_str(), ctx.ui.color, ctx.ui.unicode),
        || {
            let mut value = json::deleted(&outcome, to_json);
            value["side"] = json!(side.as_str());
            value
        },
    )?;
    Ok(ExitCode::SUCCESS)
}
