//! WorldDef loader and conversion helpers.
//!
//! Converts the serialized `WorldDef` data model into the runtime map.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use log::info;

use warren_data::{DoorDef, ItemDef, RoomDef, WallDef, WorldDef};

use crate::direction::Direction;
use crate::error::WorldError;
use crate::idgen::{NAMESPACE_DOOR, NAMESPACE_ITEM, uuid_from_token};
use crate::item::Item;
use crate::map::GameMap;
use crate::room::Room;
use crate::wall::{Door, Wall};

/// Load a `WorldDef` from a RON file.
///
/// # Errors
/// - if the file can't be read or isn't valid RON for a `WorldDef`
pub fn load_worlddef(path: &Path) -> Result<WorldDef> {
    let text = fs::read_to_string(path).with_context(|| format!("reading worlddef from '{}'", path.display()))?;
    let def: WorldDef =
        ron::from_str(&text).with_context(|| format!("parsing worlddef RON from '{}'", path.display()))?;
    info!(
        "worlddef '{}' read: {} rooms, {} wall kinds, {} doors, {} items",
        def.map.name,
        def.rooms.len(),
        def.walls.len(),
        def.doors.len(),
        def.items.len()
    );
    Ok(def)
}

/// Build the map: every room listed in the map, with walls, doors and floor
/// items, and every exit wired to its destination.
///
/// # Errors
/// - `WorldError`s for any broken reference, duplicate room or bad direction
pub fn build_map(def: &WorldDef) -> Result<GameMap, WorldError> {
    let rooms: HashMap<&str, &RoomDef> = def.rooms.iter().map(|r| (r.id.as_str(), r)).collect();
    let walls: HashMap<&str, &WallDef> = def.walls.iter().map(|w| (w.id.as_str(), w)).collect();
    let doors: HashMap<&str, &DoorDef> = def.doors.iter().map(|d| (d.id.as_str(), d)).collect();
    let items: HashMap<&str, &ItemDef> = def.items.iter().map(|i| (i.id.as_str(), i)).collect();

    let mut map = GameMap::new(&def.map.name, &def.map.description, &def.map.start_room);
    for map_room in &def.map.rooms {
        let room_def = rooms
            .get(map_room.id.as_str())
            .ok_or_else(|| missing("room", &map_room.id, "map room"))?;
        map.insert_room(room_from_def(room_def, &walls, &doors, &items)?)?;
    }

    for map_room in &def.map.rooms {
        let mut exits = HashMap::new();
        for (word, to) in &map_room.exits {
            let dir = Direction::from_string(word).ok_or_else(|| WorldError::UnknownDirection {
                word: word.clone(),
                context: format!("exit from '{}'", map_room.id),
            })?;
            exits.insert(dir, to.clone());
        }
        map.connect_exits(&map_room.id, &exits)?;
    }

    map.check_start_room()?;
    Ok(map)
}

fn room_from_def(
    def: &RoomDef,
    walls: &HashMap<&str, &WallDef>,
    doors: &HashMap<&str, &DoorDef>,
    items: &HashMap<&str, &ItemDef>,
) -> Result<Room, WorldError> {
    let mut room = Room::new(&def.id, &def.name, &def.short_desc, &def.long_desc);

    for wall_def in &def.walls {
        let context = format!("room '{}' wall '{}'", def.id, wall_def.direction);
        let dir = Direction::from_string(&wall_def.direction).ok_or_else(|| WorldError::UnknownDirection {
            word: wall_def.direction.clone(),
            context: context.clone(),
        })?;
        let kind = walls
            .get(wall_def.kind.as_str())
            .ok_or_else(|| missing("wall", &wall_def.kind, &context))?;
        let mut wall = Wall::new(dir, &kind.short_desc, &kind.long_desc);
        if let Some(door_id) = &wall_def.door {
            let door_def = doors.get(door_id.as_str()).ok_or_else(|| missing("door", door_id, &context))?;
            wall.add_door(door_from_def(door_def, &def.id, dir))?;
        }
        room.add_wall(wall);
    }

    for (slot, item_id) in def.contents.iter().enumerate() {
        let item_def = items
            .get(item_id.as_str())
            .ok_or_else(|| missing("item", item_id, &format!("room '{}' contents", def.id)))?;
        room.contents.push(item_from_def(item_def, &format!("{}/{slot}", def.id)));
    }
    Ok(room)
}

fn door_from_def(def: &DoorDef, room_id: &str, dir: Direction) -> Door {
    let id = uuid_from_token(&NAMESPACE_DOOR, &format!("{room_id}/{dir}/{}", def.id));
    let mut door = Door::new(id, &def.id, &def.name, &def.short_desc, &def.long_desc);
    door.is_open = def.open;
    door.is_locked = def.locked;
    door.is_blocked = def.blocked;
    door
}

/// Build an item. `placement` identifies where this copy lives, so each
/// placement of one definition gets its own stable id.
pub fn item_from_def(def: &ItemDef, placement: &str) -> Item {
    let id = uuid_from_token(&NAMESPACE_ITEM, &format!("{placement}/{}", def.id));
    let mut item = Item::new(id, &def.id, &def.name, &def.short_desc, &def.long_desc);
    if let Some(handheld) = def.handheld {
        item = item.with_handheld(handheld.weight, handheld.bulk);
    }
    if def.throwable {
        item = item.with_throwable();
    }
    item
}

fn missing(kind: &'static str, id: &str, context: &str) -> WorldError {
    WorldError::MissingDefinition {
        kind,
        id: id.to_string(),
        context: context.to_string(),
    }
}
