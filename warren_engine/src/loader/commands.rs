//! `loader::commands` module
//!
//! Loads the command table from TOML and binds each entry to its handler.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use log::info;
use warren_data::{CommandDef, CommandFile};

use crate::command::{ActionRegistry, CommandTable};
use crate::error::WorldError;

/// Read command definitions from a TOML file, preserving table order.
///
/// # Errors
/// - if the file can't be read or parsed
pub fn load_command_defs(path: &Path) -> Result<Vec<CommandDef>> {
    let text = fs::read_to_string(path).with_context(|| format!("reading command table from '{}'", path.display()))?;
    let file: CommandFile =
        toml::from_str(&text).with_context(|| format!("parsing command table from '{}'", path.display()))?;
    info!("{} command definitions read from '{}'", file.commands.len(), path.display());
    Ok(file.commands)
}

/// Bind command definitions to handlers.
///
/// # Errors
/// - `UnknownAction` / `DuplicateCommand` from [`CommandTable::from_defs`]
pub fn build_command_table(defs: &[CommandDef], registry: &ActionRegistry) -> Result<CommandTable, WorldError> {
    CommandTable::from_defs(defs, registry)
}
