//! `actions::door` module
//!
//! Handlers for opening and closing doors.

use log::info;

use crate::actions::strip_words;
use crate::command::ActionResult;
use crate::direction::Direction;
use crate::error::DoorError;
use crate::game::Game;
use crate::wall::Wall;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Toggle {
    Open,
    Close,
}

impl Toggle {
    fn verb(self) -> &'static str {
        match self {
            Toggle::Open => "open",
            Toggle::Close => "close",
        }
    }

    fn past(self) -> &'static str {
        match self {
            Toggle::Open => "opened",
            Toggle::Close => "closed",
        }
    }
}

/// Open a door, named either by the wall it's on or by its own name.
///
/// # Errors
/// - `DoorError` if there's no such door, it's already open, or it's locked
pub fn open_handler(game: &mut Game, args: &mut Vec<String>) -> ActionResult {
    toggle_door(game, args, Toggle::Open)
}

/// Close a door, named either by the wall it's on or by its own name.
///
/// # Errors
/// - `DoorError` if there's no such door or it's already closed
pub fn close_handler(game: &mut Game, args: &mut Vec<String>) -> ActionResult {
    toggle_door(game, args, Toggle::Close)
}

fn toggle_door(game: &mut Game, args: &mut Vec<String>, toggle: Toggle) -> ActionResult {
    let verb = if game.action_word.is_empty() {
        toggle.verb().to_string()
    } else {
        game.action_word.clone()
    };
    strip_words(args, &["the"]);
    if args.is_empty() {
        return Ok(Some(format!(
            "You only know how to {verb} doors. Say which one to {verb}, by name or by the wall it's on."
        )));
    }
    let target = args.join(" ");

    let room = game.current_room_mut()?;
    let facing = args
        .first()
        .and_then(|word| Direction::from_string(word))
        .filter(|dir| room.wall(*dir).is_some());
    let door = match facing {
        Some(direction) => room
            .wall_mut(direction)
            .and_then(Wall::door_mut)
            .ok_or(DoorError::NoDoor { direction, verb })?,
        None => room
            .door_named_mut(&target)
            .ok_or_else(|| DoorError::NotFound(target.clone()))?,
    };

    match toggle {
        Toggle::Open => door.open()?,
        Toggle::Close => door.close()?,
    }
    info!("door '{}' {}", door.symbol, toggle.past());
    Ok(Some(format!("You {} the {}.", toggle.verb(), door.name)))
}
