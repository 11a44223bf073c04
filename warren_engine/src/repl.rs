//! REPL loop.
//!
//! The game runs in a read-eval-print loop: read a line, hand it to
//! `Game::turn`, and show the reply. The loop ends when a handler stops the
//! game, at end of input, or on interrupt.

mod input;

use anyhow::Result;
use log::{info, warn};

use crate::actions::look::describe_room;
use crate::game::Game;
use crate::style::GameStyle;
use crate::view::{View, ViewItem};

use input::{InputEvent, InputManager};

/// Run the main read–eval–print loop until the player quits.
///
/// # Errors
/// - currently never; input failures are reported to the player and retried
pub fn run_repl(game: &mut Game, view: &mut View) -> Result<()> {
    let mut input = InputManager::new();

    while game.is_running {
        let room_name = game.current_room().map(|r| r.name.clone()).unwrap_or_default();
        let prompt = format!("\n[{room_name}]> ").prompt_style().to_string();

        let line = match input.read_line(&prompt) {
            Ok(InputEvent::Line(line)) => line,
            Ok(InputEvent::Eof | InputEvent::Interrupted) => {
                info!("input closed; leaving the game");
                view.push(ViewItem::EngineMessage("Leaving the warren. Goodbye!".into()));
                view.flush();
                break;
            },
            Err(err) => {
                warn!("failed to read input: {err}");
                view.push(ViewItem::Error("Couldn't read that. Try again.".into()));
                view.flush();
                continue;
            },
        };

        let previous = game.current_loc.clone();
        if let Some(reply) = game.turn(&line) {
            view.push(ViewItem::Reply(reply));
        }
        if game.current_loc != previous
            && let Ok(room) = game.current_room()
        {
            view.push(ViewItem::RoomName(room.name.clone()));
            view.push(ViewItem::RoomDescription(describe_room(room)));
        }
        view.flush();
    }
    Ok(())
}
