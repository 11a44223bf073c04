//! `actions::inventory` module
//!
//! Handlers that move items between the room and the player's containers,
//! or between containers.

use log::info;
use warren_data::HANDS;

use crate::actions::{LOCATION_WORDS, is_self_word, strip_words};
use crate::command::ActionResult;
use crate::error::InventoryError;
use crate::game::Game;
use crate::item::Item;

/// Pick an item up off the floor into the player's hands.
///
/// # Errors
/// - if the player's room is missing or the player has no hands
pub fn pick_handler(game: &mut Game, args: &mut Vec<String>) -> ActionResult {
    if args.is_empty() {
        return Ok(Some("You pick your nose, briefly.".into()));
    }
    strip_words(args, &["up", "the"]);

    let room = game.current_room()?;
    let Some(pos) = room
        .contents
        .iter()
        .position(|item| args.iter().any(|arg| item.name.eq_ignore_ascii_case(arg)))
    else {
        return Ok(Some("You don't see that here.".into()));
    };
    let item = &room.contents[pos];
    if !item.is_handheld() {
        return Ok(Some(format!("The {} can't be carried.", item.name)));
    }
    if !item.can_lift() {
        return Ok(Some(format!("The {} is too heavy for you to pick up.", item.name)));
    }
    if game.player.inventory.get(HANDS)?.check_fit(item).is_err() {
        return Ok(Some("You don't have a free hand to pick that up.".into()));
    }

    let item = game.current_room_mut()?.contents.remove(pos);
    let name = item.name.clone();
    if let Err((err, item)) = game.player.inventory.insert_into(HANDS, item) {
        game.current_room_mut()?.contents.insert(pos, item);
        return Err(err.into());
    }
    info!("{} picked up '{name}' in '{}'", game.player.name, game.current_loc);
    Ok(Some(format!("You pick up {name}.")))
}

/// Drop named items (or everything in hands, for "all") onto the floor.
///
/// # Errors
/// - if the player's room is missing
pub fn drop_handler(game: &mut Game, args: &mut Vec<String>) -> ActionResult {
    strip_words(args, &["the"]);
    if args.is_empty() {
        return Ok(Some("You drop nothing like a bad habit.".into()));
    }
    game.current_room()?;
    if args.iter().any(|arg| arg.eq_ignore_ascii_case("all")) {
        return drop_all(game);
    }

    let mut dropped: Vec<(String, Item)> = Vec::new();
    let mut missing = Vec::new();
    for name in args.iter() {
        match game.player.inventory.take_item(name) {
            Ok((container, item)) => dropped.push((container, item)),
            Err(_) => missing.push(name.clone()),
        }
    }

    let mut lines = Vec::new();
    if !dropped.is_empty() {
        lines.push("You dropped:".to_string());
        for (container, item) in &dropped {
            lines.push(format!("*{}* from your {container}", item.name));
        }
    }
    lines.extend(missing.iter().map(|name| format!("You don't have any {name} to drop.")));

    let room = game.current_room_mut()?;
    for (_, item) in dropped {
        info!("dropped '{}' in '{}'", item.name, room.id);
        room.contents.push(item);
    }
    Ok(Some(lines.join("\n")))
}

fn drop_all(game: &mut Game) -> ActionResult {
    let hands = game.player.inventory.get_mut(HANDS)?;
    if hands.is_empty() {
        return Ok(Some("You have nothing to drop.".into()));
    }
    let items = hands.take_all();
    let mut message = String::from("You dropped:");
    for item in &items {
        message.push_str(&format!("\n*{}*", item.name));
    }
    let room = game.current_room_mut()?;
    info!("dropped {} item(s) from hands in '{}'", items.len(), room.id);
    room.contents.extend(items);
    Ok(Some(message))
}

/// Throw a held item, optionally at something in the room. It lands on the floor.
///
/// # Errors
/// - if the player's room is missing
pub fn throw_handler(game: &mut Game, args: &mut Vec<String>) -> ActionResult {
    strip_words(args, &["the"]);
    if args.is_empty() {
        return Ok(Some("You throw your hands up into the air.".into()));
    }
    let thrown = args.remove(0);
    let Ok(found) = game.player.inventory.find_item(&thrown) else {
        return Ok(Some(format!("You don't have a {thrown} to throw.")));
    };
    let item = found[0].item;
    if !item.is_throwable() {
        return Ok(Some(format!("The {} isn't something you can throw.", item.name)));
    }
    let item_name = item.name.clone();

    let target = match args.iter().position(|arg| arg.eq_ignore_ascii_case("at")) {
        Some(at) if at + 1 < args.len() => Some(args[at + 1..].join(" ")),
        Some(_) => return Ok(Some(format!("Throw the {item_name} at what?"))),
        None => None,
    };

    let target_name = match &target {
        Some(word) if is_self_word(word) => {
            return Ok(Some(format!("You bounce the {item_name} off your own head.")));
        },
        Some(word) => {
            let room = game.current_room()?;
            match room.in_room(word).first() {
                Some(sighting) => Some(sighting.thing.name().to_string()),
                None => {
                    return Ok(Some(format!(
                        "You can't throw the {item_name} at {word} because there isn't one here."
                    )));
                },
            }
        },
        None => None,
    };

    game.current_room()?;
    let (container, item) = game.player.inventory.take_item(&thrown)?;
    game.current_room_mut()?.contents.push(item);
    info!("{} threw '{item_name}' from '{container}'", game.player.name);
    Ok(Some(match target_name {
        Some(target) => format!("You throw the {item_name} at the {target}. It clatters to the floor."),
        None => format!("You throw the {item_name}. It lands on the floor."),
    }))
}

/// Move a held item into another of the player's containers.
///
/// # Errors
/// - inventory errors other than a failed fit
pub fn swap_handler(game: &mut Game, args: &mut Vec<String>) -> ActionResult {
    strip_words(args, LOCATION_WORDS);
    let inventory = &mut game.player.inventory;

    let mut dest = None;
    let mut mover = None;
    for arg in args.iter() {
        if let Ok(container) = inventory.get(arg) {
            dest = Some(container.name.clone());
        } else if mover.is_none()
            && let Ok(found) = inventory.find_item(arg)
        {
            mover = Some((found[0].item.name.clone(), found[0].container.name.clone()));
        }
    }

    let Some(dest) = dest else {
        return Ok(Some("Where do you want to put it? Name one of your containers.".into()));
    };
    let Some((item, source)) = mover else {
        return Ok(Some("You can't seem to locate that to swap it.".into()));
    };
    if source == dest {
        return Ok(Some(format!("The {item} is already in your {dest}.")));
    }
    match inventory.swap_container_item(&source, &dest, &item) {
        Ok(()) => Ok(Some(format!("You move the {item} from your {source} to your {dest}."))),
        Err(InventoryError::ContainerFull { .. } | InventoryError::CannotFit { .. }) => {
            Ok(Some(format!("You can't seem to fit the {item} into your {dest}.")))
        },
        Err(err) => Err(err.into()),
    }
}
