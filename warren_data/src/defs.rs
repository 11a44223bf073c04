use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Stable identifier used across `WorldDef` references.
pub type Id = String;

/// Top-level world document loaded by the engine.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct WorldDef {
    pub map: MapDef,
    #[serde(default)]
    pub rooms: Vec<RoomDef>,
    #[serde(default)]
    pub walls: Vec<WallDef>,
    #[serde(default)]
    pub doors: Vec<DoorDef>,
    #[serde(default)]
    pub items: Vec<ItemDef>,
    #[serde(default)]
    pub player: PlayerDef,
}

/// The map: which rooms exist, how they connect, and where the player starts.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct MapDef {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub start_room: Id,
    #[serde(default)]
    pub rooms: Vec<MapRoomDef>,
}

/// A room's entry in the map, with exits keyed by direction word.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct MapRoomDef {
    pub id: Id,
    #[serde(default)]
    pub exits: BTreeMap<String, Id>,
}

/// Room contents and descriptions.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct RoomDef {
    pub id: Id,
    pub name: String,
    pub short_desc: String,
    pub long_desc: String,
    #[serde(default)]
    pub walls: Vec<RoomWallDef>,
    /// Item definition ids placed on the floor at load time.
    #[serde(default)]
    pub contents: Vec<Id>,
}

/// One wall slot in a room: which way it faces, what kind of wall, and an optional door.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct RoomWallDef {
    pub direction: String,
    pub kind: Id,
    #[serde(default)]
    pub door: Option<Id>,
}

/// A reusable wall kind (e.g. "concrete", "brick").
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct WallDef {
    pub id: Id,
    pub short_desc: String,
    pub long_desc: String,
}

/// A reusable door definition.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DoorDef {
    pub id: Id,
    pub name: String,
    pub short_desc: String,
    pub long_desc: String,
    #[serde(default = "default_true")]
    pub open: bool,
    #[serde(default)]
    pub locked: bool,
    #[serde(default)]
    pub blocked: bool,
}

impl Default for DoorDef {
    fn default() -> Self {
        Self {
            id: String::new(),
            name: String::new(),
            short_desc: String::new(),
            long_desc: String::new(),
            open: true,
            locked: false,
            blocked: false,
        }
    }
}

fn default_true() -> bool {
    true
}

/// A reusable item definition. Capabilities are optional records.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ItemDef {
    pub id: Id,
    pub name: String,
    pub short_desc: String,
    pub long_desc: String,
    #[serde(default)]
    pub handheld: Option<HandheldDef>,
    #[serde(default)]
    pub throwable: bool,
}

/// Weight and bulk for items that can be carried.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct HandheldDef {
    pub weight: u32,
    pub bulk: u32,
}

/// Player definition. Hands are always provided by the engine; `containers` adds more.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerDef {
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub containers: Vec<ContainerDef>,
}

impl Default for PlayerDef {
    fn default() -> Self {
        Self {
            name: "Player".into(),
            description: "You look just like you always have.".into(),
            containers: Vec::new(),
        }
    }
}

/// A starting inventory container.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ContainerDef {
    pub name: String,
    pub short_desc: String,
    pub capacity: u32,
    #[serde(default)]
    pub contents: Vec<Id>,
}

/// One entry in the command table. `action` names a registered action handler.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct CommandDef {
    pub name: String,
    pub desc: String,
    #[serde(default)]
    pub help_text: String,
    #[serde(default)]
    pub aliases: Vec<String>,
    pub action: String,
}

/// Wrapper for the TOML file containing the command table.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct CommandFile {
    pub commands: Vec<CommandDef>,
}
