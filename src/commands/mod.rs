//! Command handlers
//!
//! Each handler loads what it needs, calls the library, and renders either
//! text or a single JSON object. Handlers return the process exit code for
//! outcomes that are not errors but still fail (`map check`, `clean --check`).

pub mod assets;
pub mod clean;
pub mod export;
pub mod mapping;

use std::process::ExitCode;

use anyhow::Result;
use serde_json::Value;

use assetmap::config::Config;
use assetmap::presentation::cli::Commands;
use assetmap::presentation::factory::{self, ConcreteSession};

use crate::ui::context::UiContext;
use crate::ui::json;

pub struct CommandContext {
    pub config: Config,
    pub ui: UiContext,
}

impl CommandContext {
    pub fn new(config: Config, ui: UiContext) -> Self {
        Self { config, ui }
    }

    pub fn session(&self) -> Result<ConcreteSession> {
        Ok(factory::create_session(&self.config)?)
    }

    /// Print human output, or the JSON object in `--json` mode
    pub fn output(&self, text: impl FnOnce() -> String, value: impl FnOnce() -> Value) -> Result<()> {
        if self.ui.json {
            json::emit(value())?;
        } else {
            print!("{}", text());
        }
        Ok(())
    }
}

pub fn dispatch(command: Commands, ctx: &CommandContext) -> Result<ExitCode> {
    match command {
        Commands::Financial { action } => assets::cmd_financial(action, ctx),
        Commands::Physical { action } => assets::cmd_physical(action, ctx),
        Commands::Map { action } => mapping::cmd_map(action, ctx),
        Commands::Export { output } => export::cmd_export(output.as_deref(), ctx),
        Commands::Clean {
            file,
            output,
            check,
        } => clean::cmd_clean(&file, output, check, ctx),
    }
}
