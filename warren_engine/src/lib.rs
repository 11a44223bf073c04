#![warn(clippy::pedantic)]
#![allow(clippy::must_use_candidate)]

pub const WARREN_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Stable identifier of a room in the map.
pub type RoomId = String;

// Core modules
pub mod actions;
pub mod command;
pub mod data_paths;
pub mod direction;
pub mod error;
pub mod game;
pub mod idgen;
pub mod interpreter;
pub mod inventory;
pub mod item;
pub mod loader;
pub mod map;
pub mod player;
pub mod repl;
pub mod room;
pub mod spinners;
pub mod style;
pub mod view;
pub mod wall;

// Re-exports for convenience
pub use command::{ActionRegistry, Command, CommandTable};
pub use direction::Direction;
pub use error::{DoorError, GameError, InventoryError, StatementError, WorldError};
pub use game::Game;
pub use interpreter::{Interpreter, Statement};
pub use inventory::{Container, Inventory};
pub use item::{Item, WorldObject};
pub use loader::{load_game, load_game_from};
pub use map::GameMap;
pub use player::Player;
pub use repl::run_repl;
pub use room::Room;
pub use wall::{Door, Wall};
