//! Walls and doors.
//!
//! Every wall faces one direction of its room. A wall may hold a single door,
//! and a door is the only way out of a room: movement goes through the door on
//! the wall facing the way the player wants to go.

use std::fmt;

use uuid::Uuid;

use crate::RoomId;
use crate::direction::Direction;
use crate::error::DoorError;
use crate::item::WorldObject;

/// A door set into a wall.
///
/// Doors start open. `leads_to` is filled in when the map wires up exits.
#[derive(Debug, Clone)]
pub struct Door {
    pub id: Uuid,
    pub symbol: String,
    pub name: String,
    pub short_desc: String,
    pub long_desc: String,
    pub is_open: bool,
    pub is_locked: bool,
    pub is_blocked: bool,
    pub leads_to: Option<RoomId>,
}

impl Door {
    pub fn new(id: Uuid, symbol: &str, name: &str, short_desc: &str, long_desc: &str) -> Self {
        Self {
            id,
            symbol: symbol.to_string(),
            name: name.to_string(),
            short_desc: short_desc.to_string(),
            long_desc: long_desc.to_string(),
            is_open: true,
            is_locked: false,
            is_blocked: false,
            leads_to: None,
        }
    }

    /// Open the door.
    ///
    /// # Errors
    /// - `AlreadyOpen` if it's open, `Locked` if it's locked
    pub fn open(&mut self) -> Result<(), DoorError> {
        if self.is_open {
            return Err(DoorError::AlreadyOpen(self.name.clone()));
        }
        if self.is_locked {
            return Err(DoorError::Locked(self.name.clone()));
        }
        self.is_open = true;
        Ok(())
    }

    /// Close the door.
    ///
    /// # Errors
    /// - `AlreadyClosed` if it's already shut
    pub fn close(&mut self) -> Result<(), DoorError> {
        if !self.is_open {
            return Err(DoorError::AlreadyClosed(self.name.clone()));
        }
        self.is_open = false;
        Ok(())
    }

    pub fn lock(&mut self) {
        self.is_locked = true;
    }

    pub fn unlock(&mut self) {
        self.is_locked = false;
    }

    pub fn block(&mut self) {
        self.is_blocked = true;
    }

    pub fn unblock(&mut self) {
        self.is_blocked = false;
    }

    /// True if the player could walk through right now.
    pub fn is_passable(&self) -> bool {
        self.is_open && !self.is_blocked && self.leads_to.is_some()
    }
}

impl WorldObject for Door {
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

impl fmt::Display for Door {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = if self.is_open { "open" } else { "closed" };
        write!(f, "{} ({state})", self.name)
    }
}

/// One side of a room.
#[derive(Debug, Clone)]
pub struct Wall {
    pub name: String,
    pub short_desc: String,
    pub long_desc: String,
    pub location: Direction,
    door: Option<Door>,
}

impl Wall {
    pub fn new(location: Direction, short_desc: &str, long_desc: &str) -> Self {
        Self {
            name: format!("{location} wall"),
            short_desc: short_desc.to_string(),
            long_desc: long_desc.to_string(),
            location,
            door: None,
        }
    }

    /// Set a door into this wall.
    ///
    /// # Errors
    /// - `WallOccupied` if the wall already has a door
    pub fn add_door(&mut self, door: Door) -> Result<(), DoorError> {
        if self.door.is_some() {
            return Err(DoorError::WallOccupied(self.location));
        }
        self.door = Some(door);
        Ok(())
    }

    pub fn has_door(&self) -> bool {
        self.door.is_some()
    }

    pub fn door(&self) -> Option<&Door> {
        self.door.as_ref()
    }

    pub fn door_mut(&mut self) -> Option<&mut Door> {
        self.door.as_mut()
    }
}

impl WorldObject for Wall {
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::idgen::new_id;

    fn door() -> Door {
        Door::new(new_id(), "oak", "oak door", "an oak door", "A heavy oak door.")
    }

    #[test]
    fn doors_start_open_and_toggle() {
        let mut door = door();
        assert!(door.is_open);
        assert_eq!(door.open(), Err(DoorError::AlreadyOpen("oak door".into())));
        door.close().unwrap();
        assert!(!door.is_open);
        assert_eq!(door.close(), Err(DoorError::AlreadyClosed("oak door".into())));
        door.open().unwrap();
        assert!(door.is_open);
    }

    #[test]
    fn locked_doors_stay_shut() {
        let mut door = door();
        door.close().unwrap();
        door.lock();
        assert_eq!(door.open(), Err(DoorError::Locked("oak door".into())));
        door.unlock();
        assert!(door.open().is_ok());
    }

    #[test]
    fn passable_needs_open_unblocked_and_wired() {
        let mut door = door();
        assert!(!door.is_passable());
        door.leads_to = Some("hall".into());
        assert!(door.is_passable());
        door.block();
        assert!(!door.is_passable());
        door.unblock();
        door.close().unwrap();
        assert!(!door.is_passable());
    }

    #[test]
    fn a_wall_holds_one_door() {
        let mut wall = Wall::new(Direction::North, "plaster", "Cracked plaster.");
        assert_eq!(wall.name, "north wall");
        assert!(!wall.has_door());
        wall.add_door(door()).unwrap();
        assert!(wall.has_door());
        assert_eq!(wall.add_door(door()), Err(DoorError::WallOccupied(Direction::North)));
    }
}
