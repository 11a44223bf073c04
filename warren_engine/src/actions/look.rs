//! `actions::look` module
//!
//! Handlers for looking around the room and examining things.

use crate::actions::{VISIBILITY_WORDS, is_self_word, strip_words};
use crate::command::ActionResult;
use crate::game::Game;
use crate::item::WorldObject;
use crate::room::Room;
use crate::spinners::SpinnerType;

/// Overview of the room: name, short description, floor items and exits.
/// With arguments, behaves like `examine`.
///
/// # Errors
/// - if the player's room is missing
pub fn look_handler(game: &mut Game, args: &mut Vec<String>) -> ActionResult {
    strip_words(args, VISIBILITY_WORDS);
    if !args.is_empty() {
        return examine_handler(game, args);
    }
    Ok(Some(describe_room(game.current_room()?)))
}

/// Room overview used by `look` and when entering the game.
pub fn describe_room(room: &Room) -> String {
    let mut lines = vec![room.name.clone(), room.short_desc.clone()];
    if !room.contents.is_empty() {
        lines.push(format!("You see: {}.", room.list_contents()));
    }
    let exits: Vec<String> = room.get_exits().iter().map(ToString::to_string).collect();
    if exits.is_empty() {
        lines.push("There are no doors here.".to_string());
    } else {
        lines.push(format!("Doors: {}", exits.join(", ")));
    }
    lines.join("\n")
}

/// Describe something in the room or in the player's containers.
///
/// With no target, gives the room's long description.
///
/// # Errors
/// - if the player's room is missing
pub fn examine_handler(game: &mut Game, args: &mut Vec<String>) -> ActionResult {
    strip_words(args, VISIBILITY_WORDS);
    strip_words(args, &["the"]);
    let room = game.current_room()?;
    if args.is_empty() {
        let doors = room.show_doors();
        if doors.is_empty() {
            return Ok(Some(room.long_desc.clone()));
        }
        return Ok(Some(format!("{}\n{doors}", room.long_desc)));
    }
    let name = args.join(" ");
    if is_self_word(&name) {
        return Ok(Some(format!(
            "{} You've certainly looked better, but you're not bad.",
            game.player.description
        )));
    }

    if let Some(sighting) = room.in_room(&name).first() {
        return Ok(Some(format!(
            "{} ({}) - [{}]",
            sighting.thing.long_desc(),
            sighting.place,
            sighting.thing.name()
        )));
    }
    if let Ok(found) = game.player.inventory.find_item(&name) {
        let held = found[0];
        return Ok(Some(format!(
            "{} ({}) - [{}]",
            held.item.long_desc(),
            held.container.name,
            held.item.name()
        )));
    }
    Ok(Some(game.spin(SpinnerType::EntityNotFound)))
}

/// List everything lying on the floor.
///
/// # Errors
/// - if the player's room is missing
pub fn search_handler(game: &mut Game, _args: &mut Vec<String>) -> ActionResult {
    let room = game.current_room()?;
    if room.contents.is_empty() {
        return Ok(Some("You search the room but find nothing of interest.".into()));
    }
    let mut lines = vec!["Searching the room, you find:".to_string()];
    lines.extend(
        room.contents
            .iter()
            .map(|item| format!("  {} - {}", item.name, item.short_desc)),
    );
    Ok(Some(lines.join("\n")))
}
