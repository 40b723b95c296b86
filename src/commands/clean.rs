//! Clean command

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Result;

use assetmap::application::CleanOptions;
use assetmap::presentation::factory;

use crate::commands::CommandContext;
use crate::ui::json;
use crate::ui::views::clean::render_clean_result;

/// Execute the clean command
///
/// In check mode a file that would change is a failure, so scripts can
/// gate on it.
pub fn cmd_clean(
    file: &Path,
    output: Option<PathBuf>,
    check: bool,
    ctx: &CommandContext,
) -> Result<ExitCode> {
    let options = CleanOptions::new().with_output(output).with_check(check);
    let result = factory::create_clean_use_case().execute(file, &options)?;

    ctx.output(
        || render_clean_result(&result, check, ctx.ui.color, ctx.ui.unicode),
        || json::cleaned(&result),
    )?;

    if check && result.changed() {
        return Ok(ExitCode::FAILURE);
    }
    Ok(ExitCode::SUCCESS)
}
