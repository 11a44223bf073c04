use std::collections::HashMap;
use std::path::Path;

use warren_engine as we;
use we::idgen::new_id;
use we::loader::commands::{build_command_table, load_command_defs};
use we::*;

fn commands() -> CommandTable {
    let defs = load_command_defs(Path::new("data/commands.toml")).unwrap();
    build_command_table(&defs, &ActionRegistry::builtin()).unwrap()
}

fn item(name: &str, long_desc: &str) -> Item {
    Item::new(new_id(), name, name, &format!("a {name}"), long_desc)
}

fn door(name: &str) -> Door {
    Door::new(new_id(), name, name, &format!("a {name}"), &format!("A sturdy {name}."))
}

fn wall_with_door(dir: Direction, door: Door) -> Wall {
    let mut wall = Wall::new(dir, "plaster", &format!("The {dir} wall is bare plaster."));
    wall.add_door(door).unwrap();
    wall
}

/// Hall (start) -> north: Study through an open oak door
///              -> east: Yard through a closed iron door
///              -> up: Yard through a blocked hatch
///              -> down: a grate that goes nowhere
///              west: a plain wall; south: nothing at all
fn game() -> Game {
    let mut hall = Room::new("hall", "Hall", "A long hall.", "A long hall with a worn runner.");
    hall.add_wall(wall_with_door(Direction::North, door("oak door")));
    let mut iron = door("iron door");
    iron.close().unwrap();
    hall.add_wall(wall_with_door(Direction::East, iron));
    let mut hatch = door("hatch");
    hatch.block();
    hall.add_wall(wall_with_door(Direction::Up, hatch));
    hall.add_wall(wall_with_door(Direction::Down, door("grate")));
    hall.add_wall(Wall::new(Direction::West, "plaster", "The west wall is bare plaster."));
    hall.contents.extend([
        item("rock", "A fist-sized grey rock.").with_handheld(2, 1).with_throwable(),
        item("pebble", "A smooth pebble.").with_handheld(1, 1).with_throwable(),
        item("feather", "A grey feather.").with_handheld(0, 1),
        item("boulder", "A huge mossy boulder.").with_handheld(500, 2),
        item("statue", "A marble statue, bolted down."),
    ]);

    let mut study = Room::new("study", "Study", "A cramped study.", "Books everywhere.");
    study.add_wall(wall_with_door(Direction::South, door("oak door")));
    let yard = Room::new("yard", "Yard", "A muddy yard.", "Mud, mostly.");

    let mut map = GameMap::new("Test House", "A house for testing.", "hall");
    map.insert_room(hall).unwrap();
    map.insert_room(study).unwrap();
    map.insert_room(yard).unwrap();
    let hall_exits = HashMap::from([
        (Direction::North, "study".to_string()),
        (Direction::East, "yard".to_string()),
        (Direction::Up, "yard".to_string()),
    ]);
    map.connect_exits("hall", &hall_exits).unwrap();
    map.connect_exits("study", &HashMap::from([(Direction::South, "hall".to_string())]))
        .unwrap();

    let mut player = Player::default();
    player
        .inventory
        .add_container(Container::new("pack", "a canvas pack", 3))
        .unwrap();
    Game::new(map, player, Interpreter::new(commands()))
}

fn say(game: &mut Game, line: &str) -> String {
    game.turn(line).unwrap_or_default()
}

fn floor_has(game: &Game, name: &str) -> bool {
    game.current_room().unwrap().contents.iter().any(|i| i.name == name)
}

#[test]
fn go_north_through_open_door() {
    let mut game = game();
    assert_eq!(say(&mut game, "go north"), "You walk through the oak door to Study.");
    assert_eq!(game.current_loc, "study");
    assert_eq!(say(&mut game, "walk to the s"), "You walk through the oak door to Hall.");
    assert_eq!(game.current_loc, "hall");
}

#[test]
fn no_way_out_without_a_door() {
    let mut game = game();
    for line in ["go south", "go west", "go sideways"] {
        assert_eq!(say(&mut game, line), "You don't see how you can go that way.");
    }
    assert_eq!(game.current_loc, "hall");
}

#[test]
fn closed_blocked_and_dead_end_doors() {
    let mut game = game();
    assert_eq!(
        say(&mut game, "go east"),
        "The iron door is closed. You can't go that way until you open it."
    );
    assert_eq!(
        say(&mut game, "go up"),
        "You attempt to walk in that direction but are stopped by an invisible force."
    );
    assert_eq!(say(&mut game, "go down"), "You can't go that way.");
    assert_eq!(game.current_loc, "hall");

    assert_eq!(say(&mut game, "open east"), "You open the iron door.");
    assert_eq!(say(&mut game, "go east"), "You walk through the iron door to Yard.");
}

#[test]
fn moving_nowhere_wanders() {
    let mut game = game();
    assert_eq!(say(&mut game, "go"), "You wander about the room.");
    assert_eq!(say(&mut game, "go to the"), "You wander about the room.");
}

#[test]
fn picking_things_up() {
    let mut game = game();
    assert_eq!(say(&mut game, "pick"), "You pick your nose, briefly.");
    assert_eq!(say(&mut game, "pick up unicorn"), "You don't see that here.");
    assert_eq!(say(&mut game, "pick statue"), "The statue can't be carried.");
    assert_eq!(say(&mut game, "take boulder"), "The boulder is too heavy for you to pick up.");

    assert_eq!(say(&mut game, "pick up the rock"), "You pick up rock.");
    assert!(!floor_has(&game, "rock"));
    assert!(game.player.inventory.get("hands").unwrap().has_item("rock"));

    assert_eq!(say(&mut game, "grab pebble"), "You pick up pebble.");
    assert_eq!(say(&mut game, "get feather"), "You don't have a free hand to pick that up.");
    assert!(floor_has(&game, "feather"));
}

#[test]
fn drop_all_empties_hands_only() {
    let mut game = game();
    assert_eq!(say(&mut game, "drop"), "You drop nothing like a bad habit.");
    say(&mut game, "pick rock");
    say(&mut game, "pick pebble");
    say(&mut game, "put pebble in pack");

    assert_eq!(say(&mut game, "drop all"), "You dropped:\n*rock*");
    assert!(floor_has(&game, "rock"));
    assert!(game.player.inventory.get("pack").unwrap().has_item("pebble"));
    assert_eq!(say(&mut game, "drop all"), "You have nothing to drop.");
}

#[test]
fn dropping_named_items_from_any_container() {
    let mut game = game();
    say(&mut game, "pick rock");
    say(&mut game, "pick pebble");
    say(&mut game, "stow pebble into my pack");

    let reply = say(&mut game, "drop the pebble rock gem");
    assert_eq!(
        reply,
        "You dropped:\n*pebble* from your pack\n*rock* from your hands\nYou don't have any gem to drop."
    );
    assert!(floor_has(&game, "pebble"));
    assert!(floor_has(&game, "rock"));
}

#[test]
fn throwing() {
    let mut game = game();
    assert_eq!(say(&mut game, "throw rock"), "You don't have a rock to throw.");
    say(&mut game, "pick rock");
    say(&mut game, "pick feather");

    assert_eq!(say(&mut game, "throw feather"), "The feather isn't something you can throw.");
    assert_eq!(say(&mut game, "throw rock at me"), "You bounce the rock off your own head.");
    assert_eq!(
        say(&mut game, "throw rock at unicorn"),
        "You can't throw the rock at unicorn because there isn't one here."
    );
    assert_eq!(say(&mut game, "throw rock at"), "Throw the rock at what?");
    assert!(game.player.inventory.holding("rock"));

    assert_eq!(
        say(&mut game, "throw the rock at north"),
        "You throw the rock at the oak door. It clatters to the floor."
    );
    assert!(!game.player.inventory.holding("rock"));
    assert!(floor_has(&game, "rock"));
}

#[test]
fn opening_and_closing_doors() {
    let mut game = game();
    assert_eq!(say(&mut game, "close north"), "You close the oak door.");
    assert_eq!(say(&mut game, "shut the oak door"), "The oak door is already closed.");
    assert_eq!(say(&mut game, "open oak door"), "You open the oak door.");
    assert_eq!(say(&mut game, "open n"), "The oak door is already opened.");
    assert_eq!(say(&mut game, "open west"), "There are no doors on the west wall to open.");
    assert_eq!(say(&mut game, "shut west"), "There are no doors on the west wall to shut.");
    assert_eq!(say(&mut game, "open south"), "You couldn't find a door called south.");

    game.current_room_mut()
        .unwrap()
        .wall_mut(Direction::East)
        .and_then(Wall::door_mut)
        .unwrap()
        .lock();
    assert_eq!(say(&mut game, "open east"), "The iron door is locked.");
}

#[test]
fn examining_things() {
    let mut game = game();
    assert_eq!(say(&mut game, "examine rock"), "A fist-sized grey rock. (room) - [rock]");
    assert_eq!(say(&mut game, "x north"), "A sturdy oak door. (north wall) - [oak door]");
    assert_eq!(
        say(&mut game, "inspect the west"),
        "The west wall is bare plaster. (west wall) - [west wall]"
    );
    assert!(say(&mut game, "examine myself").contains("You look just like you always have."));
    assert_eq!(say(&mut game, "examine unicorn"), "You don't see that here.");

    say(&mut game, "pick rock");
    assert_eq!(say(&mut game, "look at rock"), "A fist-sized grey rock. (hands) - [rock]");

    let room = say(&mut game, "examine");
    assert!(room.starts_with("A long hall with a worn runner."));
    assert!(room.contains("[ north ][ east ][ up ][ down ]"));
}

#[test]
fn looking_and_searching() {
    let mut game = game();
    let look = say(&mut game, "look");
    assert!(look.starts_with("Hall\nA long hall."));
    assert!(look.contains("You see: rock, pebble, feather, boulder, statue."));
    assert!(look.contains("Doors: north, east, up, down"));

    let search = say(&mut game, "search");
    assert!(search.contains("  statue - a statue"));
}

#[test]
fn swapping_between_containers() {
    let mut game = game();
    say(&mut game, "pick rock");
    assert_eq!(
        say(&mut game, "put rock in pack"),
        "You move the rock from your hands to your pack."
    );
    assert_eq!(say(&mut game, "put rock in pack"), "The rock is already in your pack.");
    assert_eq!(
        say(&mut game, "put unicorn in pack"),
        "You can't seem to locate that to swap it."
    );
    assert_eq!(
        say(&mut game, "put rock"),
        "Where do you want to put it? Name one of your containers."
    );

    // fill the pack, then try to squeeze more in
    say(&mut game, "pick pebble");
    say(&mut game, "put pebble in pack");
    say(&mut game, "pick feather");
    say(&mut game, "put feather in pack");
    game.current_room_mut()
        .unwrap()
        .contents
        .push(item("coin", "A coin.").with_handheld(0, 1));
    say(&mut game, "pick coin");
    assert_eq!(
        say(&mut game, "put coin in pack"),
        "You can't seem to fit the coin into your pack."
    );
    assert!(game.player.inventory.get("hands").unwrap().has_item("coin"));
    assert_eq!(game.player.inventory.get("pack").unwrap().contents().len(), 3);
}

#[test]
fn unknown_and_empty_input() {
    let mut game = game();
    assert!(matches!(
        game.execute("xyzzy"),
        Err(GameError::Statement(StatementError::CommandNotFound(_)))
    ));
    assert_eq!(say(&mut game, "xyzzy"), "I don't know how to do that.");
    assert_eq!(
        say(&mut game, "   "),
        "Say something, or type 'help' for a list of commands."
    );
    assert_eq!(game.turn_count, 0);
    assert!(game.is_running);
}

#[test]
fn inventory_help_and_quit() {
    let mut game = game();
    say(&mut game, "pick rock");
    let inv = say(&mut game, "i");
    assert!(inv.contains("In your hands (1/2):"));
    assert!(inv.contains("There's nothing in your pack."));

    let help = say(&mut game, "help");
    assert!(help.contains("move"));
    assert!(help.contains("quit"));
    let detail = say(&mut game, "help take");
    assert!(detail.starts_with("pick - Pick something up"));
    assert!(detail.contains("Also: take, grab, get"));

    assert_eq!(game.turn_count, 4);
    say(&mut game, "quit");
    assert!(!game.is_running);
}

#[test]
fn first_matching_command_wins() {
    let mut defs = load_command_defs(Path::new("data/commands.toml")).unwrap();
    defs.push(warren_data::CommandDef {
        name: "go".into(),
        desc: "a later command that shares an alias".into(),
        action: "look".into(),
        ..Default::default()
    });
    let table = build_command_table(&defs, &ActionRegistry::builtin()).unwrap();
    let stmt = Interpreter::new(table).prepare("go north").unwrap();
    assert_eq!(stmt.verb.name, "move");
    assert_eq!(stmt.action_word, "go");
    assert_eq!(stmt.args, vec!["north"]);
}

#[test]
fn directions_round_trip() {
    for dir in Direction::ALL {
        for alias in dir.aliases() {
            assert_eq!(Direction::from_string(alias).map(|d| d.to_string()), Some(dir.name().to_string()));
        }
    }
}

#[test]
fn examining_walls_and_doors_by_direction() {
    let mut game = game();
    assert_eq!(
        say(&mut game, "inspect the north wall"),
        "The north wall is bare plaster. (north wall) - [north wall]"
    );
    assert_eq!(say(&mut game, "examine north door"), "A sturdy oak door. (north wall) - [oak door]");
    assert_eq!(say(&mut game, "examine west door"), "You don't see that here.");
}

#[test]
fn examining_a_room_without_doors() {
    let mut game = game();
    say(&mut game, "open east");
    say(&mut game, "go east");
    assert_eq!(game.current_loc, "yard");
    assert_eq!(say(&mut game, "examine"), "Mud, mostly.");
}

#[test]
fn dropping_only_filler_words() {
    let mut game = game();
    assert_eq!(say(&mut game, "drop the"), "You drop nothing like a bad habit.");
    assert_eq!(say(&mut game, "drop the the"), "You drop nothing like a bad habit.");
}

#[test]
fn move_with_an_item_and_a_container_swaps() {
    let mut game = game();
    say(&mut game, "pick rock");
    assert_eq!(
        say(&mut game, "move rock to pack"),
        "You move the rock from your hands to your pack."
    );
    assert!(game.player.inventory.get("pack").unwrap().has_item("rock"));
    assert_eq!(game.current_loc, "hall");

    // a container alone is still read as a direction
    assert_eq!(say(&mut game, "go pack"), "You don't see how you can go that way.");
    assert_eq!(say(&mut game, "go north"), "You walk through the oak door to Study.");
}
