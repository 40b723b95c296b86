//! Export command

use std::path::Path;
use std::process::ExitCode;

use anyhow::Result;
use serde_json::json;

use assetmap::presentation::factory;

use crate::commands::CommandContext;
use crate::ui::primitives::icon::Icon;

pub fn cmd_export(output: Option<&Path>, ctx: &CommandContext) -> Result<ExitCode> {
    let session = ctx.session()?;
    let path = match output {
        Some(path) => path.to_path_buf(),
        None => ctx.config.export_path(),
    };

    let result = factory::create_export_use_case().execute(&session, &path)?;

    ctx.output(
        || {
            format!(
                "{} Exported {} financial, {} physical, {} mapping record(s) to {}\n",
                Icon::Success.colored(ctx.ui.color, ctx.ui.unicode),
                session.catalog().financial.len(),
                session.catalog().physical.len(),
                session.mappings().len(),
                result.path.display()
            )
        },
        || {
            json!({
                "type": "exported",
                "path": result.path.display().to_string(),
                "bytes": result.bytes,
                "financial": session.catalog().financial.len(),
                "physical": session.catalog().physical.len(),
                "mappings": session.mappings().len(),
            })
        },
    )?;
    Ok(ExitCode::SUCCESS)
}
