use std::collections::HashSet;
use std::fmt;

use crate::*;

/// Name of the container every player is given by the engine.
pub const HANDS: &str = "hands";

/// Validation error for malformed or missing references in a `WorldDef`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    DuplicateId { kind: &'static str, id: String },
    MissingReference { kind: &'static str, id: String, context: String },
    InvalidValue { context: String },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::DuplicateId { kind, id } => {
                write!(f, "duplicate {kind} id '{id}'")
            },
            ValidationError::MissingReference { kind, id, context } => {
                write!(f, "missing {kind} '{id}' ({context})")
            },
            ValidationError::InvalidValue { context } => {
                write!(f, "invalid value ({context})")
            },
        }
    }
}

impl std::error::Error for ValidationError {}

/// Validate cross-references and basic invariants in a `WorldDef`.
///
/// Direction words are not checked here; the engine resolves them while building rooms.
///
/// ```
/// use warren_data::{MapDef, MapRoomDef, RoomDef, WorldDef, validate_world};
///
/// let world = WorldDef {
///     map: MapDef {
///         name: "Demo".into(),
///         start_room: "start".into(),
///         rooms: vec![MapRoomDef { id: "start".into(), ..MapRoomDef::default() }],
///         ..MapDef::default()
///     },
///     rooms: vec![RoomDef {
///         id: "start".into(),
///         name: "Start".into(),
///         short_desc: "A room.".into(),
///         long_desc: "A plain room.".into(),
///         ..RoomDef::default()
///     }],
///     ..WorldDef::default()
/// };
/// assert!(validate_world(&world).is_empty());
/// ```
pub fn validate_world(world: &WorldDef) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    let mut room_defs = HashSet::new();
    let mut map_rooms = HashSet::new();
    let mut walls = HashSet::new();
    let mut doors = HashSet::new();
    let mut items = HashSet::new();

    track_ids("room", world.rooms.iter().map(|r| r.id.as_str()), &mut room_defs, &mut errors);
    track_ids(
        "map room",
        world.map.rooms.iter().map(|r| r.id.as_str()),
        &mut map_rooms,
        &mut errors,
    );
    track_ids("wall", world.walls.iter().map(|w| w.id.as_str()), &mut walls, &mut errors);
    track_ids("door", world.doors.iter().map(|d| d.id.as_str()), &mut doors, &mut errors);
    track_ids("item", world.items.iter().map(|i| i.id.as_str()), &mut items, &mut errors);

    if world.map.start_room.trim().is_empty() {
        errors.push(ValidationError::InvalidValue {
            context: "map start room missing".to_string(),
        });
    } else {
        check_ref(
            "room",
            &world.map.start_room,
            &map_rooms,
            "map start room".to_string(),
            &mut errors,
        );
    }

    for map_room in &world.map.rooms {
        check_ref(
            "room",
            &map_room.id,
            &room_defs,
            "map room definition".to_string(),
            &mut errors,
        );
        for (direction, to) in &map_room.exits {
            check_ref(
                "room",
                to,
                &map_rooms,
                format!("room '{}' exit '{direction}'", map_room.id),
                &mut errors,
            );
        }
    }

    for room in &world.rooms {
        let mut faces = HashSet::new();
        for wall in &room.walls {
            if !faces.insert(wall.direction.trim().to_lowercase()) {
                errors.push(ValidationError::InvalidValue {
                    context: format!("room '{}' has two walls facing '{}'", room.id, wall.direction),
                });
            }
            check_ref(
                "wall",
                &wall.kind,
                &walls,
                format!("room '{}' wall '{}'", room.id, wall.direction),
                &mut errors,
            );
            if let Some(door) = &wall.door {
                check_ref(
                    "door",
                    door,
                    &doors,
                    format!("room '{}' wall '{}'", room.id, wall.direction),
                    &mut errors,
                );
            }
        }
        for item in &room.contents {
            check_ref("item", item, &items, format!("room '{}' contents", room.id), &mut errors);
        }
    }

    for item in &world.items {
        if item.name.trim().is_empty() {
            errors.push(ValidationError::InvalidValue {
                context: format!("item '{}' has an empty name", item.id),
            });
        }
    }

    let mut containers = HashSet::from([HANDS.to_string()]);
    for container in &world.player.containers {
        if !containers.insert(container.name.to_lowercase()) {
            errors.push(ValidationError::DuplicateId {
                kind: "container",
                id: container.name.clone(),
            });
        }
        for item in &container.contents {
            check_ref(
                "item",
                item,
                &items,
                format!("player container '{}'", container.name),
                &mut errors,
            );
        }
    }

    errors
}

/// Validate a command table: names must be present and unique (case-insensitive),
/// and every entry must name an action.
pub fn validate_commands(commands: &[CommandDef]) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    let mut names = HashSet::new();
    for cmd in commands {
        if cmd.name.trim().is_empty() {
            errors.push(ValidationError::InvalidValue {
                context: "command with an empty name".to_string(),
            });
            continue;
        }
        if !names.insert(cmd.name.to_lowercase()) {
            errors.push(ValidationError::DuplicateId {
                kind: "command",
                id: cmd.name.clone(),
            });
        }
        if cmd.action.trim().is_empty() {
            errors.push(ValidationError::InvalidValue {
                context: format!("command '{}' has no action", cmd.name),
            });
        }
    }
    errors
}

fn track_ids<'a>(
    kind: &'static str,
    ids: impl Iterator<Item = &'a str>,
    set: &mut HashSet<String>,
    errors: &mut Vec<ValidationError>,
) {
    for id in ids {
        if !set.insert(id.to_string()) {
            errors.push(ValidationError::DuplicateId {
                kind,
                id: id.to_string(),
            });
        }
    }
}

fn check_ref(kind: &'static str, id: &str, set: &HashSet<String>, context: String, errors: &mut Vec<ValidationError>) {
    if !set.contains(id) {
        errors.push(ValidationError::MissingReference {
            kind,
            id: id.to_string(),
            context,
        });
    }
}
