//! assetmap CLI - cross-reference financial and physical asset records
//!
//! Usage: assetmap [OPTIONS] <COMMAND>
//!
//! Commands:
//!   financial  Manage financial assets
//!   physical   Manage physical assets
//!   map        Manage financial↔physical mappings
//!   export     Export all collections to an .xlsx workbook
//!   clean      Replace invisible Unicode characters in a text file

mod commands;
mod ui;

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use is_terminal::IsTerminal;
use tracing_subscriber::EnvFilter;

use assetmap::config::{self, Config, ConfigWarning};
use assetmap::presentation::Cli;

use crate::commands::CommandContext;
use crate::ui::context::UiContext;
use crate::ui::error::{error_json, format_error};
use crate::ui::primitives::icon::Icon;

fn main() -> ExitCode {
    // Usage errors exit 1 like every other failure; help and version exit 0
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            if let Err(io_err) = e.print() {
                eprintln!("{}", io_err);
            }
            return if e.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };
    init_tracing(cli.verbose);

    let (config, warnings) = match load_config(&cli) {
        Ok(loaded) => loaded,
        Err(e) => {
            let ui = UiContext::new(cli.json, cli.verbose, cli.color, &Config::default());
            return report(&e, &ui);
        }
    };

    let ui = UiContext::new(cli.json, cli.verbose, cli.color, &config);
    for warning in &warnings {
        eprintln!("{} {}", Icon::Warning.colored(ui.color, ui.unicode), warning);
    }

    let ctx = CommandContext::new(config, ui);
    match commands::dispatch(cli.command, &ctx) {
        Ok(code) => code,
        Err(e) => report(&e, &ctx.ui),
    }
}

/// Resolve config: `--data-dir` beats the environment, which beats the file
fn load_config(cli: &Cli) -> Result<(Config, Vec<ConfigWarning>)> {
    let data_dir = cli
        .data_dir
        .clone()
        .or_else(|| std::env::var_os("ASSETMAP_DATA_DIR").map(PathBuf::from));

    let (mut config, warnings) = config::load_layered(cli.config.as_deref(), data_dir.as_deref())?;
    if let Some(dir) = &cli.data_dir {
        config.storage.data_dir = Some(dir.clone());
    }
    Ok((config, warnings))
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_env("ASSETMAP_LOG").unwrap_or_else(|_| EnvFilter::new(level));

    let result = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .without_time()
        .try_init();
    if let Err(e) = result {
        eprintln!("failed to initialize logging: {}", e);
    }
}

fn report(err: &anyhow::Error, ui: &UiContext) -> ExitCode {
    if ui.json {
        if let Err(e) = ui::json::emit(error_json(err)) {
            eprintln!("failed to write JSON output: {}", e);
        }
    }
    eprint!("{}", format_error(err, ui.color, ui.unicode));
    if ui.verbose > 0 {
        for cause in err.chain().skip(1) {
            eprintln!("  caused by: {}", cause);
        }
    }
    ExitCode::FAILURE
}
