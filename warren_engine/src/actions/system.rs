//! `actions::system` module
//!
//! Handlers that don't touch the world: inventory listing, help and quitting.

use log::info;

use crate::WARREN_VERSION;
use crate::command::ActionResult;
use crate::game::Game;

/// List the contents of every container the player carries.
///
/// # Errors
/// - never fails; returns `ActionResult` to fit the handler signature
pub fn inventory_handler(game: &mut Game, _args: &mut Vec<String>) -> ActionResult {
    Ok(Some(game.player.inventory.list_all_contents()))
}

/// Show the command list, or details for one command.
///
/// # Errors
/// - never fails; returns `ActionResult` to fit the handler signature
pub fn help_handler(game: &mut Game, args: &mut Vec<String>) -> ActionResult {
    let commands = game.interpreter.commands();
    if let Some(word) = args.first() {
        let Some(cmd) = commands.get_command(word) else {
            return Ok(Some(format!("There's no command called '{word}'.")));
        };
        let mut lines = vec![cmd.to_string()];
        if !cmd.help_text.is_empty() {
            lines.push(cmd.help_text.clone());
        }
        if !cmd.aliases.is_empty() {
            lines.push(format!("Also: {}", cmd.aliases.join(", ")));
        }
        return Ok(Some(lines.join("\n")));
    }

    let mut lines = vec![format!("Warren v{WARREN_VERSION}. Commands:")];
    lines.extend(commands.iter().map(|cmd| format!("  {:<10} {}", cmd.name, cmd.desc)));
    lines.push("Type 'help <command>' for more about one of them.".to_string());
    Ok(Some(lines.join("\n")))
}

/// End the session.
///
/// # Errors
/// - never fails; returns `ActionResult` to fit the handler signature
pub fn quit_handler(game: &mut Game, _args: &mut Vec<String>) -> ActionResult {
    info!(
        "{} quit after {} turn(s) in '{}'",
        game.player.name, game.turn_count, game.current_loc
    );
    for container in game.player.inventory.containers() {
        for item in container.contents() {
            info!("- {} ({}) in {}", item.name, item.id, container.name);
        }
    }
    game.is_running = false;
    Ok(Some("Thanks for playing. Farewell!".into()))
}
