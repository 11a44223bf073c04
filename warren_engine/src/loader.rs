//! Loader utilities for building a `Game` from serialized data.
//!
//! World content is loaded from a `WorldDef` (RON); the command table and
//! flavor-text spinners are TOML-backed.

pub mod commands;
pub mod player;
pub mod spinners;
pub mod worlddef;

use std::path::Path;

use anyhow::{Context, Result, bail};
use log::info;
use warren_data::{CommandDef, ValidationError, WorldDef};

use crate::command::ActionRegistry;
use crate::data_paths::data_root;
use crate::game::Game;
use crate::interpreter::Interpreter;
use crate::loader::commands::{build_command_table, load_command_defs};
use crate::loader::player::build_player;
use crate::loader::spinners::load_spinners;
use crate::loader::worlddef::{build_map, load_worlddef};

pub const WORLD_FILE: &str = "world.ron";
pub const COMMANDS_FILE: &str = "commands.toml";
pub const SPINNERS_FILE: &str = "spinners.toml";

/// Load a `Game` from the detected data directory.
///
/// # Errors
/// Errors bubble up from file IO, deserialization, or missing references.
pub fn load_game() -> Result<Game> {
    load_game_from(data_root())
}

/// Load a `Game` from the data files in `dir`.
///
/// # Errors
/// Errors bubble up from file IO, deserialization, or missing references.
pub fn load_game_from(dir: &Path) -> Result<Game> {
    let worlddef = load_worlddef(&dir.join(WORLD_FILE)).context("while loading worlddef from file")?;
    validate_worlddef(&worlddef)?;
    let map = build_map(&worlddef).context("while building map from worlddef")?;
    info!("{} rooms added to map '{}'", map.len(), map.name);

    let player = build_player(&worlddef.player, &worlddef.items).context("while building player")?;
    info!(
        "player \"{}\" added with {} container(s)",
        player.name,
        player.inventory.containers().len()
    );

    let command_defs = load_command_defs(&dir.join(COMMANDS_FILE)).context("while loading command table")?;
    validate_commands(&command_defs)?;
    let commands = build_command_table(&command_defs, &ActionRegistry::builtin())?;
    info!("{} commands added to the interpreter", commands.len());

    let mut game = Game::new(map, player, Interpreter::new(commands));
    game.spinners = load_spinners(&dir.join(SPINNERS_FILE))?;
    info!("{} spinners added to game", game.spinners.len());
    info!("starting in '{}'", game.current_loc);
    Ok(game)
}

/// Validate the WorldDef and return a single aggregated error.
fn validate_worlddef(def: &WorldDef) -> Result<()> {
    report(warren_data::validate_world(def), "worlddef")
}

/// Validate the command table and return a single aggregated error.
fn validate_commands(defs: &[CommandDef]) -> Result<()> {
    report(warren_data::validate_commands(defs), "command table")
}

fn report(errors: Vec<ValidationError>, what: &str) -> Result<()> {
    if errors.is_empty() {
        return Ok(());
    }
    let details = errors
        .into_iter()
        .map(|err| format!("- {err}"))
        .collect::<Vec<_>>()
        .join("\n");
    bail!("{what} validation failed:\n{details}");
}
