#![warn(clippy::pedantic)]
#![allow(clippy::must_use_candidate)]
//! ** Warren **
//! Text adventure engine

use warren_engine::actions::look::describe_room;
use warren_engine::data_paths::data_path;
use warren_engine::view::{View, ViewItem};
use warren_engine::{load_game, run_repl};

use anyhow::{Context, Result};
use log::{info, warn};

use std::fs;
use std::io::Write;

fn main() -> Result<()> {
    env_logger::init();
    info!("Start: loading Warren game...");
    let mut game = load_game().context("while loading the game")?;
    info!("Game loaded successfully.");

    // clear the screen
    print!("\x1B[2J\x1B[H");
    std::io::stdout().flush()?;
    info!("Starting the game!");

    let mut view = View::new();
    view.push(ViewItem::Banner(game.map.name.to_uppercase()));
    view.push(ViewItem::Intro(format!(
        "You are {}. {}",
        game.player.name, game.player.description
    )));
    match fs::read_to_string(data_path("intro.txt")) {
        Ok(intro) => view.push(ViewItem::Intro(intro.trim_end().to_string())),
        Err(err) => warn!("no intro text: {err}"),
    }
    let room = game.current_room()?;
    view.push(ViewItem::RoomName(room.name.clone()));
    view.push(ViewItem::RoomDescription(describe_room(room)));
    view.flush();

    run_repl(&mut game, &mut view)
}
