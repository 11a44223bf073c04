//! The game map: every room in the world, keyed by id, plus the start room.

use std::collections::HashMap;
use std::fmt;

use log::info;

use crate::RoomId;
use crate::direction::Direction;
use crate::error::WorldError;
use crate::room::Room;

#[derive(Debug, Clone, Default)]
pub struct GameMap {
    pub name: String,
    pub description: String,
    pub start_room: RoomId,
    rooms: HashMap<RoomId, Room>,
}

impl GameMap {
    pub fn new(name: &str, description: &str, start_room: &str) -> Self {
        Self {
            name: name.to_string(),
            description: description.to_string(),
            start_room: start_room.to_string(),
            rooms: HashMap::new(),
        }
    }

    /// Add a room to the map.
    ///
    /// # Errors
    /// - `DuplicateRoom` if a room with the same id is already present
    pub fn insert_room(&mut self, room: Room) -> Result<(), WorldError> {
        if self.rooms.contains_key(&room.id) {
            return Err(WorldError::DuplicateRoom(room.id));
        }
        self.rooms.insert(room.id.clone(), room);
        Ok(())
    }

    pub fn get_room(&self, id: &str) -> Option<&Room> {
        self.rooms.get(id)
    }

    pub fn get_room_mut(&mut self, id: &str) -> Option<&mut Room> {
        self.rooms.get_mut(id)
    }

    /// Look up a room that must exist.
    ///
    /// # Errors
    /// - `MissingRoom` if there is no room with this id
    pub fn room(&self, id: &str) -> Result<&Room, WorldError> {
        self.rooms.get(id).ok_or_else(|| WorldError::MissingRoom {
            room: id.to_string(),
            context: "map lookup".into(),
        })
    }

    /// Mutable counterpart of [`GameMap::room`].
    ///
    /// # Errors
    /// - `MissingRoom` if there is no room with this id
    pub fn room_mut(&mut self, id: &str) -> Result<&mut Room, WorldError> {
        self.rooms.get_mut(id).ok_or_else(|| WorldError::MissingRoom {
            room: id.to_string(),
            context: "map lookup".into(),
        })
    }

    /// Wire the doors of room `id` to their destinations.
    ///
    /// Every destination is checked before any door is touched.
    ///
    /// # Errors
    /// - `MissingRoom` if the room or any destination isn't in the map
    pub fn connect_exits(&mut self, id: &str, exits: &HashMap<Direction, RoomId>) -> Result<usize, WorldError> {
        if let Some((dir, to)) = exits.iter().find(|(_, to)| !self.rooms.contains_key(*to)) {
            return Err(WorldError::MissingRoom {
                room: to.clone(),
                context: format!("exit {dir} from '{id}'"),
            });
        }
        let room = self.rooms.get_mut(id).ok_or_else(|| WorldError::MissingRoom {
            room: id.to_string(),
            context: "connecting exits".into(),
        })?;
        Ok(room.connect_exits(exits))
    }

    /// Confirm the start room is part of the map.
    ///
    /// # Errors
    /// - `MissingStartRoom` if it isn't
    pub fn check_start_room(&self) -> Result<(), WorldError> {
        if self.rooms.contains_key(&self.start_room) {
            info!("map '{}': starting in '{}'", self.name, self.start_room);
            Ok(())
        } else {
            Err(WorldError::MissingStartRoom(self.start_room.clone()))
        }
    }

    pub fn rooms(&self) -> impl Iterator<Item = &Room> {
        self.rooms.values()
    }

    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }
}

impl fmt::Display for GameMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.name, self.description)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::idgen::new_id;
    use crate::wall::{Door, Wall};

    fn room_with_north_door(id: &str) -> Room {
        let mut room = Room::new(id, id, "A room.", "A room.");
        let mut wall = Wall::new(Direction::North, "stone", "Stone.");
        wall.add_door(Door::new(new_id(), "arch", "arch", "an arch", "A stone arch."))
            .unwrap();
        room.add_wall(wall);
        room
    }

    #[test]
    fn duplicate_rooms_are_rejected() {
        let mut map = GameMap::new("test", "a test map", "a");
        map.insert_room(Room::new("a", "A", "", "")).unwrap();
        let err = map.insert_room(Room::new("a", "Other A", "", "")).unwrap_err();
        assert_eq!(err, WorldError::DuplicateRoom("a".into()));
        assert_eq!(map.len(), 1);
        assert_eq!(map.room("a").unwrap().name, "A");
    }

    #[test]
    fn exits_to_unknown_rooms_fail_without_wiring() {
        let mut map = GameMap::new("test", "", "a");
        map.insert_room(room_with_north_door("a")).unwrap();
        let exits = HashMap::from([(Direction::North, "nowhere".to_string())]);
        assert!(matches!(
            map.connect_exits("a", &exits),
            Err(WorldError::MissingRoom { room, .. }) if room == "nowhere"
        ));
        let door = map.room("a").unwrap().get_doors().next().unwrap();
        assert!(door.leads_to.is_none());
    }

    #[test]
    fn exits_connect_between_rooms() {
        let mut map = GameMap::new("test", "", "a");
        map.insert_room(room_with_north_door("a")).unwrap();
        map.insert_room(Room::new("b", "B", "", "")).unwrap();
        let exits = HashMap::from([(Direction::North, "b".to_string())]);
        assert_eq!(map.connect_exits("a", &exits).unwrap(), 1);
        assert!(map.check_start_room().is_ok());

        map.start_room = "c".into();
        assert_eq!(map.check_start_room(), Err(WorldError::MissingStartRoom("c".into())));
    }
}
