//! `actions::movement` module
//!
//! Handler for commands that change the player's location.

use log::info;

use crate::actions::inventory::swap_handler;
use crate::actions::{MOBILITY_WORDS, strip_words};
use crate::command::ActionResult;
use crate::direction::Direction;
use crate::game::Game;
use crate::spinners::SpinnerType;
use crate::wall::Wall;

/// Move through the door on the wall facing the requested direction.
///
/// The last remaining argument is taken as the direction. When the arguments
/// name both a held item and one of the player's containers ("move rock to
/// pack"), the item is moved between containers instead.
///
/// # Errors
/// - if the player's room or the door's destination is missing from the map
pub fn move_handler(game: &mut Game, args: &mut Vec<String>) -> ActionResult {
    if names_held_item_and_container(game, args) {
        return swap_handler(game, args);
    }
    strip_words(args, MOBILITY_WORDS);
    let Some(word) = args.pop() else {
        return Ok(Some(game.spin(SpinnerType::Wander)));
    };

    let (door_name, destination) = {
        let room = game.current_room()?;
        let door = Direction::from_string(&word)
            .and_then(|dir| room.wall(dir))
            .and_then(Wall::door);
        let Some(door) = door else {
            info!("{} looked for a way '{word}' out of '{}'", game.player.name, room.id);
            return Ok(Some("You don't see how you can go that way.".into()));
        };
        if !door.is_open {
            return Ok(Some(format!(
                "The {} is closed. You can't go that way until you open it.",
                door.name
            )));
        }
        if door.is_blocked {
            return Ok(Some(
                "You attempt to walk in that direction but are stopped by an invisible force.".into(),
            ));
        }
        let Some(to) = door.leads_to.clone() else {
            return Ok(Some("You can't go that way.".into()));
        };
        (door.name.clone(), to)
    };

    let room_name = game.map.room(&destination)?.name.clone();
    info!(
        "{} moved from '{}' to '{destination}'",
        game.player.name, game.current_loc
    );
    game.current_loc = destination;
    Ok(Some(format!("You walk through the {door_name} to {room_name}.")))
}

fn names_held_item_and_container(game: &Game, args: &[String]) -> bool {
    let inventory = &game.player.inventory;
    args.iter().any(|arg| inventory.has_container(arg)) && args.iter().any(|arg| inventory.holding(arg))
}
