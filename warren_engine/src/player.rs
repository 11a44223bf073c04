//! Player state.
//!
//! The player is a name, a description, and the inventory of containers they
//! carry. Every player starts with hands.

use std::fmt;

use crate::inventory::{Container, Inventory};

#[derive(Debug, Clone)]
pub struct Player {
    pub name: String,
    pub description: String,
    pub inventory: Inventory,
}

impl Player {
    /// A new player holding nothing but a pair of empty hands.
    pub fn new(name: &str, description: &str) -> Self {
        let mut inventory = Inventory::new();
        // a fresh inventory can't already have hands
        let _ = inventory.add_container(Container::hands());
        Self {
            name: name.to_string(),
            description: description.to_string(),
            inventory,
        }
    }
}

impl Default for Player {
    fn default() -> Self {
        Self::new("Player", "You look just like you always have.")
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", self.name, self.description)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use warren_data::HANDS;

    #[test]
    fn players_start_with_empty_hands() {
        let player = Player::default();
        assert_eq!(player.name, "Player");
        assert_eq!(player.inventory.container_names(), vec![HANDS]);
        let hands = player.inventory.get(HANDS).unwrap();
        assert!(hands.is_empty());
        assert_eq!(hands.capacity, 2);
    }
}
