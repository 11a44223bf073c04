//! Error types raised by the engine.
//!
//! Everything a player can trigger during a turn (bad input, a full container,
//! a locked door) is recoverable: the game loop turns it into a message and the
//! session continues. `WorldError` covers defects in the loaded world and is
//! only expected while building a game.

use thiserror::Error;

use crate::RoomId;
use crate::direction::Direction;

/// Problems turning a raw input line into a command.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StatementError {
    #[error("nothing was entered")]
    Empty,
    #[error("no command matches '{0}'")]
    CommandNotFound(String),
}

/// Failures of inventory and container operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InventoryError {
    #[error("There's no {item} in your {container}.")]
    ItemNotFound { item: String, container: String },
    #[error("You don't have any {0}.")]
    ItemNotHeld(String),
    #[error("You don't have anything called {0} to put things in.")]
    ContainerNotFound(String),
    #[error("There's no room left in your {container} for the {item}.")]
    ContainerFull { container: String, item: String },
    #[error("The {item} is too large to fit in your {container}.")]
    CannotFit { container: String, item: String },
    #[error("You can't carry more than one {0}.")]
    DuplicateContainer(String),
}

/// Failures of door operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DoorError {
    #[error("There are no doors on the {direction} wall to {verb}.")]
    NoDoor { direction: Direction, verb: String },
    #[error("You couldn't find a door called {0}.")]
    NotFound(String),
    #[error("The {0} is already opened.")]
    AlreadyOpen(String),
    #[error("The {0} is already closed.")]
    AlreadyClosed(String),
    #[error("The {0} is locked.")]
    Locked(String),
    #[error("The {0} wall already has a door.")]
    WallOccupied(Direction),
}

/// Defects in the world itself: broken references, duplicate ids, bad data.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WorldError {
    #[error("duplicate room id '{0}'")]
    DuplicateRoom(RoomId),
    #[error("room '{room}' not found ({context})")]
    MissingRoom { room: RoomId, context: String },
    #[error("start room '{0}' is not in the map")]
    MissingStartRoom(RoomId),
    #[error("'{word}' is not a direction ({context})")]
    UnknownDirection { word: String, context: String },
    #[error("unknown {kind} '{id}' ({context})")]
    MissingDefinition {
        kind: &'static str,
        id: String,
        context: String,
    },
    #[error("command '{command}' names unknown action '{action}'")]
    UnknownAction { command: String, action: String },
    #[error("duplicate command '{0}'")]
    DuplicateCommand(String),
    #[error(transparent)]
    Door(#[from] DoorError),
    #[error(transparent)]
    Inventory(#[from] InventoryError),
}

/// Any error an action handler can return.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error(transparent)]
    Statement(#[from] StatementError),
    #[error(transparent)]
    Inventory(#[from] InventoryError),
    #[error(transparent)]
    Door(#[from] DoorError),
    #[error(transparent)]
    World(#[from] WorldError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn player_facing_errors_read_as_sentences() {
        let err = InventoryError::ContainerFull {
            container: "hands".into(),
            item: "rock".into(),
        };
        assert_eq!(err.to_string(), "There's no room left in your hands for the rock.");
        let err = DoorError::NoDoor {
            direction: Direction::West,
            verb: "open".into(),
        };
        assert_eq!(err.to_string(), "There are no doors on the west wall to open.");
    }

    #[test]
    fn game_error_is_transparent() {
        let err: GameError = DoorError::Locked("iron door".into()).into();
        assert_eq!(err.to_string(), "The iron door is locked.");
    }
}
