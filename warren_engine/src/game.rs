//! The running game session.
//!
//! `Game` owns the map, the player, the interpreter and the spinners, and
//! tracks which room the player is in. `turn` is the single entry point for
//! a line of input: it always produces something to show, and no error a
//! player can cause ends the session.

use std::collections::HashMap;

use gametools::Spinner;
use log::{info, warn};

use crate::RoomId;
use crate::command::ActionResult;
use crate::error::{GameError, StatementError, WorldError};
use crate::interpreter::Interpreter;
use crate::map::GameMap;
use crate::player::Player;
use crate::room::Room;
use crate::spinners::SpinnerType;

#[derive(Debug, Clone)]
pub struct Game {
    pub map: GameMap,
    pub current_loc: RoomId,
    pub player: Player,
    pub interpreter: Interpreter,
    pub spinners: HashMap<SpinnerType, Spinner<String>>,
    pub is_running: bool,
    pub turn_count: usize,
    /// The word the player used for the command currently being run.
    pub action_word: String,
}

impl Game {
    /// Start a session in the map's start room.
    pub fn new(map: GameMap, player: Player, interpreter: Interpreter) -> Self {
        let current_loc = map.start_room.clone();
        Self {
            map,
            current_loc,
            player,
            interpreter,
            spinners: HashMap::new(),
            is_running: true,
            turn_count: 0,
            action_word: String::new(),
        }
    }

    /// The room the player occupies.
    /// # Errors
    /// - `MissingRoom` if the player's location isn't in the map
    pub fn current_room(&self) -> Result<&Room, GameError> {
        self.map.get_room(&self.current_loc).ok_or_else(|| self.lost())
    }

    /// Mutable access to the room the player occupies.
    /// # Errors
    /// - `MissingRoom` if the player's location isn't in the map
    pub fn current_room_mut(&mut self) -> Result<&mut Room, GameError> {
        let lost = self.lost();
        self.map.get_room_mut(&self.current_loc).ok_or(lost)
    }

    /// A line from the given spinner, or its built-in line if none is loaded.
    pub fn spin(&self, kind: SpinnerType) -> String {
        self.spinners
            .get(&kind)
            .and_then(gametools::Spinner::spin)
            .unwrap_or_else(|| kind.default_line().to_string())
    }

    /// Parse and run one line of input, passing errors through.
    ///
    /// # Errors
    /// - statement errors for empty or unrecognized input
    /// - anything the command's handler reports
    pub fn execute(&mut self, line: &str) -> ActionResult {
        let mut statement = self.interpreter.prepare(line)?;
        self.turn_count += 1;
        self.action_word = statement.action_word.to_lowercase();
        info!(
            "turn {}: '{}' -> {} {:?}",
            self.turn_count, statement.raw, statement.verb.name, statement.args
        );
        statement.verb.do_action(self, &mut statement.args)
    }

    /// Run one turn and return what to show the player.
    ///
    /// Every error is rendered as a message here.
    pub fn turn(&mut self, line: &str) -> Option<String> {
        match self.execute(line) {
            Ok(reply) => reply,
            Err(GameError::Statement(StatementError::Empty)) => Some(self.spin(SpinnerType::EmptyStatement)),
            Err(GameError::Statement(StatementError::CommandNotFound(input))) => {
                info!("no command recognized in '{input}'");
                Some(self.spin(SpinnerType::UnrecognizedCommand))
            },
            Err(GameError::World(err)) => {
                warn!("world error during turn: {err}");
                Some(format!("Something is wrong with the world: {err}"))
            },
            Err(err) => {
                info!("turn refused: {err}");
                Some(err.to_string())
            },
        }
    }

    fn lost(&self) -> GameError {
        WorldError::MissingRoom {
            room: self.current_loc.clone(),
            context: "player location".into(),
        }
        .into()
    }
}
