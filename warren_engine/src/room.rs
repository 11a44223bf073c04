//! Room definitions and spatial utilities.
//!
//! A room has a fixed table of wall slots, one per `Direction`, a floor holding
//! loose items, and a list of inhabitants. Walls carry the doors, and doors
//! carry the exits.

use std::collections::HashMap;
use std::fmt;

use log::{info, warn};
use variantly::Variantly;

use crate::RoomId;
use crate::direction::Direction;
use crate::item::{Item, WorldObject};
use crate::wall::{Door, Wall};

/// Where in a room something was seen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Place {
    Floor,
    Wall(Direction),
}

impl fmt::Display for Place {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Place::Floor => f.write_str("room"),
            Place::Wall(dir) => write!(f, "{dir} wall"),
        }
    }
}

/// A reference to something found in a room.
#[derive(Debug, Clone, Copy, Variantly)]
pub enum Thing<'a> {
    Item(&'a Item),
    Wall(&'a Wall),
    Door(&'a Door),
}

impl Thing<'_> {
    fn object(&self) -> &dyn WorldObject {
        match self {
            Thing::Item(item) => *item,
            Thing::Wall(wall) => *wall,
            Thing::Door(door) => *door,
        }
    }

    pub fn name(&self) -> &str {
        self.object().name()
    }

    pub fn long_desc(&self) -> &str {
        self.object().long_desc()
    }
}

/// A match from `Room::in_room`: what was found and where.
#[derive(Debug, Clone, Copy)]
pub struct Sighting<'a> {
    pub place: Place,
    pub thing: Thing<'a>,
}

/// A location the player can occupy.
#[derive(Debug, Clone)]
pub struct Room {
    pub id: RoomId,
    pub name: String,
    pub short_desc: String,
    pub long_desc: String,
    walls: [Option<Wall>; Direction::COUNT],
    pub contents: Vec<Item>,
    pub inhabitants: Vec<String>,
}

impl Room {
    pub fn new(id: &str, name: &str, short_desc: &str, long_desc: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            short_desc: short_desc.to_string(),
            long_desc: long_desc.to_string(),
            walls: std::array::from_fn(|_| None),
            contents: Vec::new(),
            inhabitants: Vec::new(),
        }
    }

    /// Put a wall into the slot its direction names, returning any wall it replaces.
    pub fn add_wall(&mut self, wall: Wall) -> Option<Wall> {
        let slot = wall.location.index();
        self.walls[slot].replace(wall)
    }

    pub fn wall(&self, dir: Direction) -> Option<&Wall> {
        self.walls[dir.index()].as_ref()
    }

    pub fn wall_mut(&mut self, dir: Direction) -> Option<&mut Wall> {
        self.walls[dir.index()].as_mut()
    }

    /// Present walls in direction order.
    pub fn get_walls(&self) -> impl Iterator<Item = &Wall> {
        self.walls.iter().flatten()
    }

    /// Every door in the room, in direction order.
    pub fn get_doors(&self) -> impl Iterator<Item = &Door> {
        self.get_walls().filter_map(Wall::door)
    }

    /// Directions that have a door, in direction order.
    pub fn get_exits(&self) -> Vec<Direction> {
        self.get_walls()
            .filter(|wall| wall.has_door())
            .map(|wall| wall.location)
            .collect()
    }

    /// First door whose name matches (case-insensitive).
    pub fn door_named_mut(&mut self, name: &str) -> Option<&mut Door> {
        self.walls
            .iter_mut()
            .flatten()
            .filter_map(Wall::door_mut)
            .find(|door| door.matches_name(name))
    }

    /// Point each door at the room listed for its wall's direction.
    ///
    /// Exits for directions with no door are skipped with a warning. Returns
    /// the number of doors wired.
    pub fn connect_exits(&mut self, exits: &HashMap<Direction, RoomId>) -> usize {
        let mut wired = 0;
        for (dir, to) in exits {
            match self.wall_mut(*dir).and_then(Wall::door_mut) {
                Some(door) => {
                    door.leads_to = Some(to.clone());
                    wired += 1;
                },
                None => warn!(
                    "room '{}' lists an exit {dir} to '{to}' but has no door on that wall",
                    self.id
                ),
            }
        }
        info!("room '{}': {wired} exit(s) connected", self.id);
        wired
    }

    /// Everything in the room that answers to `name`: floor items first, then
    /// walls and doors. A direction word finds the door on that wall, or the
    /// wall itself if it has none; "north wall" and "north door" pick one
    /// explicitly. Doors also answer to their own name.
    pub fn in_room(&self, name: &str) -> Vec<Sighting<'_>> {
        let name = name.trim();
        let (dir_word, part) = match name.rsplit_once(char::is_whitespace) {
            Some((head, tail)) if tail.eq_ignore_ascii_case("wall") || tail.eq_ignore_ascii_case("door") => {
                (head.trim_end(), Some(tail.to_ascii_lowercase()))
            },
            _ => (name, None),
        };

        let mut found: Vec<Sighting<'_>> = self
            .contents
            .iter()
            .filter(|item| item.matches_name(name))
            .map(|item| Sighting {
                place: Place::Floor,
                thing: Thing::Item(item),
            })
            .collect();

        for wall in self.get_walls() {
            let place = Place::Wall(wall.location);
            let facing = wall.location.matches(dir_word);
            let thing = match part.as_deref() {
                _ if !facing => None,
                Some("wall") => Some(Thing::Wall(wall)),
                Some(_) => wall.door().map(Thing::Door),
                None => Some(wall.door().map_or(Thing::Wall(wall), Thing::Door)),
            };
            if let Some(thing) = thing {
                found.push(Sighting { place, thing });
            } else if let Some(door) = wall.door()
                && door.matches_name(name)
            {
                found.push(Sighting {
                    place,
                    thing: Thing::Door(door),
                });
            }
        }
        found
    }

    /// Compact list of the directions with doors, like `[ north ][ east ]`.
    pub fn show_doors(&self) -> String {
        self.get_exits().iter().map(|dir| format!("[ {dir} ]")).collect()
    }

    /// Names of the items on the floor, comma separated.
    pub fn list_contents(&self) -> String {
        self.contents
            .iter()
            .map(|item| item.name.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl WorldObject for Room {
    fn name(&self) -> &str {
        &self.name
    }
    fn short_desc(&self) -> &str {
        &self.short_desc
    }
    fn long_desc(&self) -> &str {
        &self.long_desc
    }
}

impl fmt::Display for Room {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.name, self.short_desc)
    }
}
