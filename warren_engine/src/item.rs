//! Item types and related helpers.
//!
//! Items are the things a player can find, carry and throw. What an item can
//! do is expressed by optional capability records rather than by subtypes:
//! an item with a `Handheld` record can be picked up, and the `throwable` flag
//! lets a held item be thrown.

use std::fmt;

use uuid::Uuid;

/// Heaviest item the player can lift (inclusive).
pub const MAX_LIFT_WEIGHT: u32 = 100;

/// Anything in a room that can be looked at or named by the player.
pub trait WorldObject {
    fn name(&self) -> &str;
    fn short_desc(&self) -> &str;
    fn long_desc(&self) -> &str;

    /// Case-insensitive match on the display name.
    fn matches_name(&self, name: &str) -> bool {
        self.name().to_lowercase() == name.trim().to_lowercase()
    }
}

/// Carrying attributes of an item that can be picked up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Handheld {
    pub weight: u32,
    pub bulk: u32,
}

/// Optional capabilities of an item.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Capabilities {
    pub handheld: Option<Handheld>,
    pub throwable: bool,
}

/// A single object in the world.
///
/// `symbol` is the definition id the item was built from; `id` is unique to
/// this particular copy. Two items are the same item only if their ids match.
#[derive(Debug, Clone)]
pub struct Item {
    pub id: Uuid,
    pub symbol: String,
    pub name: String,
    pub short_desc: String,
    pub long_desc: String,
    pub capabilities: Capabilities,
}

impl Item {
    pub fn new(id: Uuid, symbol: &str, name: &str, short_desc: &str, long_desc: &str) -> Self {
        Self {
            id,
            symbol: symbol.to_string(),
            name: name.to_string(),
            short_desc: short_desc.to_string(),
            long_desc: long_desc.to_string(),
            capabilities: Capabilities::default(),
        }
    }

    /// Builder: make this item carryable.
    #[must_use]
    pub fn with_handheld(mut self, weight: u32, bulk: u32) -> Self {
        self.capabilities.handheld = Some(Handheld { weight, bulk });
        self
    }

    /// Builder: make this item throwable.
    #[must_use]
    pub fn with_throwable(mut self) -> Self {
        self.capabilities.throwable = true;
        self
    }

    pub fn is_handheld(&self) -> bool {
        self.capabilities.handheld.is_some()
    }

    pub fn is_throwable(&self) -> bool {
        self.capabilities.throwable
    }

    /// Space the item takes up in a container. Items that can't be carried have no bulk.
    pub fn bulk(&self) -> u32 {
        self.capabilities.handheld.map_or(0, |h| h.bulk)
    }

    pub fn weight(&self) -> Option<u32> {
        self.capabilities.handheld.map(|h| h.weight)
    }

    /// True if the player is strong enough to lift this item.
    pub fn can_lift(&self) -> bool {
        self.weight().is_some_and(|weight| weight <= MAX_LIFT_WEIGHT)
    }
}

impl PartialEq for Item {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Item {}

impl WorldObject for Item {
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

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.name, self.short_desc)
    }
}
