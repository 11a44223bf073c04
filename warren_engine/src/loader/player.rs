//! Building the player from its definition.

use std::collections::HashMap;

use log::info;
use warren_data::{ItemDef, PlayerDef};

use crate::error::WorldError;
use crate::inventory::Container;
use crate::loader::worlddef::item_from_def;
use crate::player::Player;

/// Build the player: hands first, then each defined container with its
/// starting contents.
///
/// # Errors
/// - `MissingDefinition` for an unknown item id
/// - `Inventory` errors for duplicate containers or contents that don't fit
pub fn build_player(def: &PlayerDef, items: &[ItemDef]) -> Result<Player, WorldError> {
    let items: HashMap<&str, &ItemDef> = items.iter().map(|i| (i.id.as_str(), i)).collect();
    let mut player = Player::new(&def.name, &def.description);

    for container_def in &def.containers {
        let mut container = Container::new(&container_def.name, &container_def.short_desc, container_def.capacity);
        for (slot, item_id) in container_def.contents.iter().enumerate() {
            let item_def = items.get(item_id.as_str()).ok_or_else(|| WorldError::MissingDefinition {
                kind: "item",
                id: item_id.clone(),
                context: format!("player container '{}'", container_def.name),
            })?;
            let item = item_from_def(item_def, &format!("player/{}/{slot}", container_def.name));
            container.insert(item).map_err(|(err, _)| err)?;
        }
        info!(
            "player container '{}' ready with {} item(s)",
            container.name,
            container.contents().len()
        );
        player.inventory.add_container(container)?;
    }
    Ok(player)
}

#[cfg(test)]
mod tests {
    use warren_data::{ContainerDef, HandheldDef};

    use super::*;
    use crate::error::InventoryError;

    fn lamp() -> ItemDef {
        ItemDef {
            id: "lamp".into(),
            name: "lamp".into(),
            short_desc: "a brass lamp".into(),
            long_desc: "A dented brass lamp.".into(),
            handheld: Some(HandheldDef { weight: 3, bulk: 2 }),
            throwable: false,
        }
    }

    fn def(capacity: u32, contents: &[&str]) -> PlayerDef {
        PlayerDef {
            containers: vec![ContainerDef {
                name: "satchel".into(),
                short_desc: "a worn satchel".into(),
                capacity,
                contents: contents.iter().map(|c| (*c).to_string()).collect(),
            }],
            ..PlayerDef::default()
        }
    }

    #[test]
    fn containers_are_added_after_hands() {
        let player = build_player(&def(4, &["lamp"]), &[lamp()]).unwrap();
        assert_eq!(player.inventory.container_names(), vec!["hands", "satchel"]);
        assert!(player.inventory.get("satchel").unwrap().has_item("lamp"));
    }

    #[test]
    fn starting_contents_must_fit() {
        let err = build_player(&def(1, &["lamp"]), &[lamp()]).unwrap_err();
        assert!(matches!(err, WorldError::Inventory(InventoryError::CannotFit { .. })));
    }

    #[test]
    fn unknown_items_are_reported() {
        let err = build_player(&def(4, &["sword"]), &[lamp()]).unwrap_err();
        assert!(matches!(err, WorldError::MissingDefinition { kind: "item", .. }));
    }
}
